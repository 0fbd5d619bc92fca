use serde::Deserialize;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub desc: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Feature {
    pub title: String,
    pub text: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub text: String,
}

/// Static display records, rendered in declaration order.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct SiteContent {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
}

impl SiteContent {
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Loads the bundled content. A broken document renders empty sections
    /// instead of taking the page down.
    pub fn load() -> Self {
        match Self::parse(SITE_JSON) {
            Ok(content) => content,
            Err(e) => {
                log::error!("Failed to parse site content: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_content_parses_in_declaration_order() {
        let content = SiteContent::parse(SITE_JSON).expect("bundled content");
        let ids: Vec<&str> = content.projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p1", "p2", "p3", "p4", "p5", "p6"]);
        assert_eq!(content.features.len(), 3);
        assert_eq!(content.features[0].title, "Mobile-first");
        assert_eq!(content.testimonials.len(), 3);
        assert_eq!(content.testimonials[2].name, "Grace Ade");
    }

    #[test]
    fn project_ids_are_unique() {
        let content = SiteContent::load();
        let mut ids: Vec<&str> = content.projects.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), content.projects.len());
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let content = SiteContent::parse(r#"{ "features": [] }"#).expect("partial content");
        assert!(content.projects.is_empty());
        assert!(content.testimonials.is_empty());
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(SiteContent::parse(r#"{ "projects": [ { "id": 1 } ] }"#).is_err());
    }
}
