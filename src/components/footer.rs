use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::config::{self, sections};

// Several links are placeholders until the pages exist.
const ABOUT_LINKS: &[(&str, &str)] = &[
    ("About Us", sections::ABOUT),
    ("Our Projects", sections::PROJECTS),
    ("Contact", sections::CONTACT),
    ("Careers", ""),
];
const SUPPORT_LINKS: &[&str] = &["Help Center", "Privacy Policy", "Terms & Conditions"];
const SOCIALS: &[&str] = &["Twitter", "GitHub", "LinkedIn", "Instagram"];

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_contact: Callback<()>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = Local::now().year();
    let onclick = {
        let on_contact = props.on_contact.clone();
        Callback::from(move |_: MouseEvent| on_contact.emit(()))
    };

    html! {
        <footer class="footer" role="contentinfo">
            <div class="container footer-grid">
                <div class="footer-col">
                    <img src={config::OG_IMAGE} alt="Tixible Logo" style="width: 100px; margin-bottom: 12px;" />
                    <p class="small">{"Smart, affordable digital tools for learning, music, and everyday life."}</p>
                </div>

                <div class="footer-col">
                    <h4>{"About"}</h4>
                    <ul>
                        { for ABOUT_LINKS.iter().map(|(label, id)| html! {
                            <li><a href={format!("#{}", id)}>{*label}</a></li>
                        }) }
                    </ul>
                </div>

                <div class="footer-col">
                    <h4>{"Support"}</h4>
                    <ul>
                        { for SUPPORT_LINKS.iter().map(|label| html! {
                            <li><a href="#">{*label}</a></li>
                        }) }
                    </ul>
                </div>

                <div class="footer-col">
                    <h4>{"Connect"}</h4>
                    <div class="socials">
                        { for SOCIALS.iter().map(|label| html! { <a href="#">{*label}</a> }) }
                    </div>
                </div>
            </div>

            <button
                class="floating-contact"
                aria-label="Open contact section"
                title="Contact us"
                {onclick}
            >
                {"✉"}
            </button>

            <div class="footer-bottom small">
                {format!("© {} Tixible. All rights reserved.", year)}
            </div>
        </footer>
    }
}
