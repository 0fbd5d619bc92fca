use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::forms::{FormVariant, SubmissionForm};
use crate::components::header::Header;
use crate::components::reveal::Reveal;
use crate::config::{self, sections};
use crate::content::SiteContent;
use crate::host::BrowserHost;
use crate::state::nav::{scroll_to_contact, NavAction, NavState};
use crate::state::reveal::{
    Motion, FEATURE_STEP_MS, HERO_SUBTITLE_DELAY_MS, PROJECT_STEP_MS, TESTIMONIAL_STEP_MS,
};

#[function_component(Landing)]
pub fn landing() -> Html {
    let nav = use_reducer(NavState::default);
    let content = use_memo(|_| SiteContent::load(), ());

    let on_nav = {
        let nav = nav.clone();
        Callback::from(move |action: NavAction| nav.dispatch(action))
    };

    let on_contact = {
        let nav = nav.clone();
        Callback::from(move |_: ()| {
            let host = BrowserHost::new()
                .map_err(|e| log::warn!("Cannot scroll to contact: {}", e))
                .ok();
            nav.dispatch(scroll_to_contact(host.as_ref()));
        })
    };
    let contact_click = {
        let on_contact = on_contact.clone();
        Callback::from(move |_: MouseEvent| on_contact.emit(()))
    };

    html! {
        <div class="app-root">
            <style>{LANDING_CSS}</style>
            <a href={format!("#{}", sections::MAIN)} class="sr-only">{"Skip to content"}</a>

            <Header nav={*nav} on_nav={on_nav} on_contact={on_contact.clone()} />

            <main id={sections::MAIN}>
                <section class="hero" id={sections::HOME}>
                    <div class="container hero-inner">
                        <div class="hero-left">
                            <Reveal tag="h1" class="hero-title" motion={Motion::fade_up()}>
                                {"Build. Learn. Vibin. — "}<span class="accent-learn">{"Tixible"}</span>
                            </Reveal>

                            <Reveal tag="p" class="hero-sub" motion={Motion::fade().delayed(HERO_SUBTITLE_DELAY_MS)}>
                                {"We build AI-powered, mobile-first apps that help students learn smarter, \
                                  creators publish faster, and everyday users get more done — even on low-data phones."}
                            </Reveal>

                            <div class="hero-cta">
                                <button
                                    class="cta-btn primary"
                                    onclick={contact_click.clone()}
                                    aria-label="Get early access — join waitlist"
                                >
                                    {"Get Early Access"}
                                </button>
                                <a class="small link" href={format!("#{}", sections::PROJECTS)}>{"View Projects →"}</a>
                            </div>

                            <div class="features">
                                { for content.features.iter().enumerate().map(|(i, f)| html! {
                                    <Reveal
                                        class="feature"
                                        motion={Motion::fade_up().staggered(i + 1, FEATURE_STEP_MS)}
                                    >
                                        <h4>{&f.title}</h4>
                                        <p class="small">{&f.text}</p>
                                    </Reveal>
                                }) }
                            </div>

                            <SubmissionForm variant={FormVariant::NewsletterInline} />
                        </div>

                        <Reveal tag="aside" class="card hero-preview" motion={Motion::zoom_in()}>
                            <img
                                src={config::PREVIEW_IMAGE}
                                alt="Tixible app preview on a mobile device"
                                loading="lazy"
                                width="320"
                                height="600"
                                style="width: 100%; border-radius: 12px;"
                            />
                        </Reveal>
                    </div>
                </section>

                <section id={sections::PROJECTS} class="section container" aria-labelledby="projects-heading">
                    <div class="section-header">
                        <h2 id="projects-heading">{"Projects"}</h2>
                        <div class="small">{"Focused on education, music, and AI"}</div>
                    </div>
                    <div class="projects-grid">
                        { for content.projects.iter().enumerate().map(|(i, p)| {
                            let title_id = format!("{}-title", p.id);
                            html! {
                                <Reveal
                                    key={p.id.clone()}
                                    tag="article"
                                    class="project-card"
                                    motion={Motion::project_card().staggered(i, PROJECT_STEP_MS)}
                                    aria_labelledby={AttrValue::from(title_id.clone())}
                                >
                                    <h5 id={title_id}>{&p.title}</h5>
                                    <p class="small">{&p.desc}</p>
                                    <button
                                        class="submit"
                                        onclick={contact_click.clone()}
                                        aria-label={format!("Join beta for {}", p.title)}
                                    >
                                        {"Join Beta"}
                                    </button>
                                </Reveal>
                            }
                        }) }
                    </div>
                </section>

                <section id={sections::TESTIMONIALS} class="section container" aria-labelledby="testimonials-heading">
                    <div class="section-header">
                        <h2 id="testimonials-heading">{"What People Are Saying"}</h2>
                        <div class="small">{"Early impressions from students, creators and teachers"}</div>
                    </div>
                    <div class="testimonials-grid">
                        { for content.testimonials.iter().enumerate().map(|(i, t)| html! {
                            <Reveal
                                class="card testimonial"
                                motion={Motion::testimonial_card().staggered(i, TESTIMONIAL_STEP_MS)}
                                aria_label={AttrValue::from(format!("{} testimonial", t.name))}
                            >
                                <p class="small quote">{format!("“{}”", t.text)}</p>
                                <div class="testimonial-meta small">
                                    <strong>{&t.name}</strong>{" — "}<span>{&t.role}</span>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </section>

                <section class="section container newsletter-large" aria-labelledby="newsletter-heading">
                    <div class="section-header">
                        <h2 id="newsletter-heading">{"Stay in the loop"}</h2>
                        <div class="small">{"Join early access and receive product updates."}</div>
                    </div>
                    <SubmissionForm variant={FormVariant::NewsletterLarge} />
                </section>

                <section id={sections::ABOUT} class="section container" aria-labelledby="about-heading">
                    <h2 id="about-heading">{"About Tixible"}</h2>
                    <p class="small">
                        {"Tixible exists to reimagine access to opportunity across Africa by building elegant, \
                          locally-aware digital products that make learning, creating, and everyday life dramatically easier."}
                    </p>
                    <p class="small">
                        {"Our mission is to design and scale mobile-first apps that solve real, measurable problems \
                          for youth, creators and learners — using practical AI, human-centered design and low-data engineering."}
                    </p>
                </section>

                <section id={sections::CONTACT} class="section container" aria-labelledby="contact-heading">
                    <div class="section-header">
                        <h2 id="contact-heading">{"Contact & Join Beta"}</h2>
                        <div class="small">{"Want to partner, hire us, or join the beta? Drop a message and we'll reply."}</div>
                    </div>
                    <div class="contact-grid">
                        <div class="card contact-card">
                            <h3>{"Let’s build something great"}</h3>
                            <p class="small">{"Send a message and we’ll reply via email."}</p>
                            <SubmissionForm variant={FormVariant::Contact} />
                        </div>

                        <div class="aside-column">
                            <div class="card">
                                <div class="small">
                                    <strong>{"Email"}</strong><br />
                                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                                </div>
                                <div class="small" style="margin-top: 12px;">
                                    <strong>{"Location"}</strong><br />{config::LOCATION}
                                </div>
                            </div>

                            <div class="card" style="margin-top: 12px;">
                                <div class="text-sm small">{"Follow"}</div>
                                <div style="margin-top: 12px; display: flex; gap: 8px;">
                                    { for ["GitHub", "Twitter", "LinkedIn", "Instagram"].iter().map(|label| html! {
                                        <a class="outline-btn" href="#" rel="noopener noreferrer">{*label}</a>
                                    }) }
                                </div>
                            </div>
                        </div>
                    </div>
                </section>

                <Footer on_contact={on_contact} />
            </main>
        </div>
    }
}

const LANDING_CSS: &str = r#"
:root {
    --bg: #0b0f1a;
    --card: #141a2a;
    --text: #e8ecf4;
    --muted: #9aa4b8;
    --accent: #7c5cff;
    --accent-2: #22d3ee;
    --success: #34d399;
    --error: #f87171;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
}

a { color: inherit; }

.sr-only {
    position: absolute;
    width: 1px;
    height: 1px;
    padding: 0;
    margin: -1px;
    overflow: hidden;
    clip: rect(0, 0, 0, 0);
    border: 0;
}

.container {
    max-width: 1120px;
    margin: 0 auto;
    padding: 0 1.25rem;
}

.small { font-size: 0.95rem; color: var(--muted); line-height: 1.6; }

.card {
    background: var(--card);
    border-radius: 16px;
    padding: 1.25rem;
    border: 1px solid rgba(255, 255, 255, 0.06);
}

/* Header */
.header {
    position: sticky;
    top: 0;
    z-index: 20;
    background: rgba(11, 15, 26, 0.85);
    backdrop-filter: blur(10px);
}

.header-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    height: 68px;
}

.brand { display: flex; align-items: center; gap: 0.75rem; }

.logo-icon {
    width: 38px;
    height: 38px;
    border-radius: 10px;
    display: grid;
    place-items: center;
    font-weight: 800;
    background: linear-gradient(45deg, var(--accent), var(--accent-2));
}

.logo-text { font-weight: 700; font-size: 1.15rem; }

.nav { display: flex; gap: 1.5rem; }

.nav-link { text-decoration: none; color: var(--muted); transition: color 0.2s ease; }
.nav-link:hover { color: var(--text); }

.actions { display: flex; align-items: center; gap: 0.75rem; }

.cta-btn, .submit {
    border: none;
    border-radius: 10px;
    padding: 0.7rem 1.2rem;
    font-weight: 600;
    cursor: pointer;
    color: white;
    background: rgba(124, 92, 255, 0.25);
    transition: transform 0.2s ease, background 0.2s ease;
}

.cta-btn.primary, .submit { background: linear-gradient(45deg, var(--accent), #5b8cff); }
.cta-btn:hover, .submit:hover { transform: scale(1.03); }
.cta-btn:disabled, .submit:disabled { opacity: 0.6; cursor: progress; transform: none; }

.mobile-nav {
    display: none;
    background: none;
    border: 1px solid rgba(255, 255, 255, 0.15);
    color: var(--text);
    border-radius: 8px;
    padding: 0.4rem 0.7rem;
    font-size: 1.2rem;
    cursor: pointer;
}

.nav-panel {
    position: fixed;
    top: 0;
    right: 0;
    height: 100vh;
    width: min(78vw, 320px);
    padding: 5rem 1.5rem;
    display: flex;
    flex-direction: column;
    gap: 1.25rem;
    background: var(--card);
    transform: translateX(100%);
    transition: transform 0.3s ease;
    z-index: 30;
}

.nav-panel.open { transform: translateX(0); }
.nav-panel a { text-decoration: none; font-size: 1.1rem; }

.mobile-overlay {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.5);
    opacity: 0;
    pointer-events: none;
    transition: opacity 0.3s ease;
    z-index: 25;
}

.mobile-overlay.show { opacity: 1; pointer-events: auto; }

/* Hero */
.hero { padding: 5rem 0 3rem; }

.hero-inner {
    display: grid;
    grid-template-columns: 1.3fr 1fr;
    gap: 3rem;
    align-items: center;
}

.hero-title { font-size: 3rem; line-height: 1.1; margin: 0 0 1rem; }

.accent-learn {
    background: linear-gradient(45deg, var(--accent), var(--accent-2));
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}

.hero-sub { color: var(--muted); font-size: 1.15rem; line-height: 1.6; }

.hero-cta { display: flex; align-items: center; gap: 1.25rem; margin: 1.75rem 0; }
.link { text-decoration: none; }

.features {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 1rem;
    margin-bottom: 2rem;
}

.feature h4 { margin: 0 0 0.4rem; }

.newsletter-inline, .newsletter-form {
    display: flex;
    flex-wrap: wrap;
    gap: 0.6rem;
}

input, textarea {
    flex: 1;
    min-width: 200px;
    padding: 0.7rem 0.9rem;
    border-radius: 10px;
    border: 1px solid rgba(255, 255, 255, 0.12);
    background: rgba(255, 255, 255, 0.04);
    color: var(--text);
    font: inherit;
}

.form-note { width: 100%; min-height: 1.4rem; font-size: 0.9rem; margin-top: 0.4rem; }
.form-note.success { color: var(--success); }
.form-note.error { color: var(--error); }
.form-note.sending { color: var(--muted); }

/* Sections */
.section { padding: 4rem 1.25rem; }

.section-header { margin-bottom: 2rem; }
.section-header h2 { margin: 0 0 0.4rem; font-size: 2rem; }

.projects-grid, .testimonials-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 1.25rem;
}

.project-card {
    background: var(--card);
    border-radius: 16px;
    padding: 1.25rem;
    border: 1px solid rgba(255, 255, 255, 0.06);
}

.project-card h5 { font-size: 1.1rem; margin: 0 0 0.5rem; }

.testimonial .quote { font-style: italic; }
.testimonial-meta { margin-top: 1rem; }

.contact-grid {
    display: grid;
    grid-template-columns: 1.4fr 1fr;
    gap: 1.5rem;
}

.contact-form { display: flex; flex-direction: column; gap: 0.75rem; }
.contact-form textarea { min-height: 140px; resize: vertical; }

.outline-btn {
    border: 1px solid rgba(255, 255, 255, 0.2);
    border-radius: 8px;
    padding: 0.35rem 0.6rem;
    font-size: 0.85rem;
    text-decoration: none;
}

/* Footer */
.footer { padding: 3rem 0 2rem; border-top: 1px solid rgba(255, 255, 255, 0.06); }

.footer-grid {
    display: grid;
    grid-template-columns: 2fr 1fr 1fr 1fr;
    gap: 2rem;
}

.footer-col ul { list-style: none; padding: 0; margin: 0; }
.footer-col li { margin-bottom: 0.5rem; }
.footer-col a { text-decoration: none; color: var(--muted); }
.socials { display: flex; flex-direction: column; gap: 0.5rem; }

.footer-bottom { text-align: center; margin-top: 2rem; }

.floating-contact {
    position: fixed;
    right: 1.25rem;
    bottom: 1.25rem;
    width: 52px;
    height: 52px;
    border-radius: 50%;
    border: none;
    font-size: 1.3rem;
    color: white;
    cursor: pointer;
    background: linear-gradient(45deg, var(--accent), var(--accent-2));
    box-shadow: 0 8px 24px rgba(124, 92, 255, 0.35);
    z-index: 15;
}

@media (max-width: 900px) {
    .nav, .actions .cta-btn { display: none; }
    .mobile-nav { display: inline-block; }
    .hero-inner, .contact-grid { grid-template-columns: 1fr; }
    .projects-grid, .testimonials-grid { grid-template-columns: 1fr 1fr; }
    .footer-grid { grid-template-columns: 1fr 1fr; }
}

@media (max-width: 600px) {
    .hero-title { font-size: 2.2rem; }
    .features, .projects-grid, .testimonials-grid { grid-template-columns: 1fr; }
}
"#;
