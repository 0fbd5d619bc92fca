//! Page host adapter: document title, `<meta>` upserts and smooth scrolling.
//!
//! Everything here is best effort. A missing window, document or element is
//! logged and skipped, never surfaced to the user.

use std::fmt;

use wasm_bindgen::JsValue;
use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetaKey {
    Name(&'static str),
    Property(&'static str),
}

impl MetaKey {
    pub fn attribute(&self) -> &'static str {
        match self {
            MetaKey::Name(_) => "name",
            MetaKey::Property(_) => "property",
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            MetaKey::Name(v) | MetaKey::Property(v) => v,
        }
    }

    pub fn selector(&self) -> String {
        format!("meta[{}=\"{}\"]", self.attribute(), self.value())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MetaTag {
    pub key: MetaKey,
    pub content: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetaUpsert {
    Updated,
    Created,
}

#[derive(Debug, Clone, PartialEq)]
pub enum HostError {
    NoWindow,
    NoDocument,
    NoHead,
    Dom(String),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::NoWindow => write!(f, "window is not available"),
            HostError::NoDocument => write!(f, "document is not available"),
            HostError::NoHead => write!(f, "document has no <head>"),
            HostError::Dom(msg) => write!(f, "DOM operation failed: {}", msg),
        }
    }
}

impl std::error::Error for HostError {}

impl From<JsValue> for HostError {
    fn from(value: JsValue) -> Self {
        HostError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub trait PageHost {
    fn set_title(&self, title: &str) -> Result<(), HostError>;

    /// Sets `content` on the meta tag matching `key`, creating the tag
    /// first when the document has none.
    fn upsert_meta(&self, key: &MetaKey, content: &str) -> Result<MetaUpsert, HostError>;

    /// Smooth-scrolls the element with `id` to the top of the viewport.
    /// `Ok(false)` means no such element exists.
    fn scroll_to_section(&self, id: &str) -> Result<bool, HostError>;
}

/// Applies the title and every tag, skipping the ones the host rejects.
/// Returns how many tags were written.
pub fn apply_metadata<H: PageHost + ?Sized>(host: &H, title: &str, tags: &[MetaTag]) -> usize {
    if let Err(e) = host.set_title(title) {
        log::warn!("Could not set document title: {}", e);
    }

    let mut applied = 0;
    for tag in tags {
        match host.upsert_meta(&tag.key, tag.content) {
            Ok(outcome) => {
                log::debug!("Meta {} {:?}", tag.key.selector(), outcome);
                applied += 1;
            }
            Err(e) => log::warn!("Skipping meta {}: {}", tag.key.selector(), e),
        }
    }
    applied
}

/// Scrolls to a section if the host has it. Missing targets are a no-op.
pub fn scroll_to<H: PageHost + ?Sized>(host: &H, id: &str) {
    match host.scroll_to_section(id) {
        Ok(true) => {}
        Ok(false) => log::warn!("Scroll target #{} not found", id),
        Err(e) => log::warn!("Could not scroll to #{}: {}", id, e),
    }
}

pub struct BrowserHost {
    document: Document,
}

impl BrowserHost {
    pub fn new() -> Result<Self, HostError> {
        let window = web_sys::window().ok_or(HostError::NoWindow)?;
        let document = window.document().ok_or(HostError::NoDocument)?;
        Ok(Self { document })
    }
}

impl PageHost for BrowserHost {
    fn set_title(&self, title: &str) -> Result<(), HostError> {
        self.document.set_title(title);
        Ok(())
    }

    fn upsert_meta(&self, key: &MetaKey, content: &str) -> Result<MetaUpsert, HostError> {
        let (element, outcome) = match self.document.query_selector(&key.selector())? {
            Some(existing) => (existing, MetaUpsert::Updated),
            None => {
                let head = self.document.head().ok_or(HostError::NoHead)?;
                let element = self.document.create_element("meta")?;
                element.set_attribute(key.attribute(), key.value())?;
                head.append_child(&element)?;
                (element, MetaUpsert::Created)
            }
        };
        element.set_attribute("content", content)?;
        Ok(outcome)
    }

    fn scroll_to_section(&self, id: &str) -> Result<bool, HostError> {
        let Some(element) = self.document.get_element_by_id(id) else {
            return Ok(false);
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(true)
    }
}

/// Runs `f` against the browser host, logging instead of failing when the
/// page has no document (e.g. during prerender).
pub fn with_browser<F: FnOnce(&BrowserHost)>(f: F) {
    match BrowserHost::new() {
        Ok(host) => f(&host),
        Err(e) => log::warn!("Page host unavailable: {}", e),
    }
}
