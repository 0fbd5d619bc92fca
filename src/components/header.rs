use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::config::{self, sections};
use crate::state::nav::{NavAction, NavState};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub nav: NavState,
    pub on_nav: Callback<NavAction>,
    pub on_contact: Callback<()>,
}

const LINKS: &[(&str, &str)] = &[
    (sections::PROJECTS, "Projects"),
    (sections::ABOUT, "About"),
    (sections::TESTIMONIALS, "Testimonials"),
    (sections::CONTACT, "Contact"),
];

/// Brand bar, desktop links, mobile toggle and the slide-in panel with its
/// overlay. The Escape listener lives exactly as long as this component.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps { nav, on_nav, on_contact } = props;
    let open = nav.open;

    {
        let on_nav = on_nav.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                on_nav.emit(NavAction::Escape);
            }
        });
    }

    let close = {
        let on_nav = on_nav.clone();
        Callback::from(move |_: MouseEvent| on_nav.emit(NavAction::Close))
    };

    let toggle = {
        let on_nav = on_nav.clone();
        Callback::from(move |_: MouseEvent| on_nav.emit(NavAction::Toggle))
    };

    let contact = {
        let on_contact = on_contact.clone();
        Callback::from(move |_: MouseEvent| on_contact.emit(()))
    };

    let panel_links = LINKS.iter().map(|(id, label)| {
        // The contact link also scrolls; the others just close the panel
        let onclick = if *id == sections::CONTACT {
            let close = close.clone();
            let contact = contact.clone();
            Callback::from(move |e: MouseEvent| {
                close.emit(e.clone());
                contact.emit(e);
            })
        } else {
            close.clone()
        };
        html! { <a href={format!("#{}", id)} {onclick}>{*label}</a> }
    });

    html! {
        <>
            <div
                class={classes!("mobile-overlay", open.then(|| "show"))}
                onclick={close.clone()}
                aria-hidden={(!open).to_string()}
            />

            <header class="header" role="banner">
                <div class="container header-inner">
                    <div class="brand">
                        <div class="logo-icon" aria-hidden="true">{"T"}</div>
                        <div>
                            <div class="logo-text">{"Tixible"}</div>
                            <div class="small">{"Innovating Tomorrow, Today"}</div>
                        </div>
                    </div>

                    <nav class="nav" role="navigation" aria-label="Primary navigation">
                        { for LINKS.iter().map(|(id, label)| html! {
                            <a class="nav-link" href={format!("#{}", id)}>{*label}</a>
                        }) }
                    </nav>

                    <div class="actions">
                        <button
                            class="cta-btn"
                            onclick={contact.clone()}
                            aria-label="Join beta — contact us"
                        >
                            {"Join Beta"}
                        </button>

                        <button
                            class="mobile-nav"
                            aria-label={nav.toggle_label()}
                            aria-expanded={open.to_string()}
                            aria-controls={config::NAV_PANEL_ID}
                            onclick={toggle}
                        >
                            <span aria-hidden="true">{nav.toggle_icon()}</span>
                            <span class="sr-only">{nav.toggle_label()}</span>
                        </button>
                    </div>
                </div>

                <div
                    id={config::NAV_PANEL_ID}
                    class={classes!("nav-panel", open.then(|| "open"))}
                    role="dialog"
                    aria-modal="false"
                >
                    { for panel_links }
                </div>
            </header>
        </>
    }
}
