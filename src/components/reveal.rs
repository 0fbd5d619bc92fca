use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{js_sys, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

use crate::state::reveal::{Motion, RevealState};

/// Tracks whether `node` has ever intersected the viewport.
///
/// The observer disconnects itself after the first hit, and on unmount.
#[hook]
pub fn use_reveal(node: NodeRef) -> RevealState {
    let state = use_state(RevealState::default);

    {
        let setter = state.setter();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let fallback = setter.clone();
                let mut seen = RevealState::Hidden;
                let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                    move |entries: js_sys::Array, observer: IntersectionObserver| {
                        let intersecting = entries.iter().any(|entry| {
                            entry
                                .unchecked_into::<IntersectionObserverEntry>()
                                .is_intersecting()
                        });
                        if seen.observe(intersecting) {
                            log::trace!("Element revealed");
                            setter.set(seen);
                            observer.disconnect();
                        }
                    },
                );

                let observer = match (
                    node.cast::<web_sys::Element>(),
                    IntersectionObserver::new(callback.as_ref().unchecked_ref()),
                ) {
                    (Some(element), Ok(observer)) => {
                        observer.observe(&element);
                        Some(observer)
                    }
                    (None, _) => None,
                    (_, Err(e)) => {
                        // No observer support: show the element straight away
                        log::warn!("IntersectionObserver unavailable: {:?}", e);
                        fallback.set(RevealState::Visible);
                        None
                    }
                };

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(callback);
                }
            },
            node,
        );
    }

    *state
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_else(|| "div".to_string())]
    pub tag: String,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub motion: Motion,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub aria_labelledby: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps children in `tag`, hidden until first scrolled into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let state = use_reveal(node.clone());

    html! {
        <@{props.tag.clone()}
            ref={node}
            class={props.class.clone()}
            style={props.motion.style(state)}
            aria-label={props.aria_label.clone()}
            aria-labelledby={props.aria_labelledby.clone()}
        >
            { for props.children.iter() }
        </@>
    }
}
