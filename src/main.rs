use yew::prelude::*;
use log::info;

mod config;
mod content;
mod host;
mod state {
    pub mod form;
    pub mod nav;
    pub mod reveal;
}
mod components {
    pub mod footer;
    pub mod forms;
    pub mod header;
    pub mod reveal;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;


#[function_component]
fn App() -> Html {
    // Title and SEO tags, once per page load
    use_effect_with_deps(
        move |_| {
            host::with_browser(|page| {
                let applied = host::apply_metadata(page, config::SITE_TITLE, config::META_TAGS);
                info!("Applied {} of {} meta tags", applied, config::META_TAGS.len());
            });
            || ()
        },
        (),
    );

    html! {
        <Landing />
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!("error initializing log:", e.to_string());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
