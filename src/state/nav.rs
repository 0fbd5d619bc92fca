use std::rc::Rc;

use yew::Reducible;

use crate::config;
use crate::host::{self, PageHost};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    Toggle,
    /// Overlay click, link selection or scroll-to-contact.
    Close,
    Escape,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub open: bool,
}

impl NavState {
    pub fn apply(self, action: NavAction) -> Self {
        match action {
            NavAction::Toggle => Self { open: !self.open },
            NavAction::Close => Self { open: false },
            NavAction::Escape if self.open => Self { open: false },
            NavAction::Escape => self,
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.open {
            "Close navigation"
        } else {
            "Open navigation"
        }
    }

    pub fn toggle_icon(&self) -> &'static str {
        if self.open {
            "✕"
        } else {
            "☰"
        }
    }
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            return self;
        }
        log::debug!("Navigation panel {}", if next.open { "opened" } else { "closed" });
        Rc::new(next)
    }
}

/// Shared "scroll to contact" action. Scrolls when a host is available and
/// always yields `Close`, whether or not the panel was open.
pub fn scroll_to_contact<H: PageHost + ?Sized>(host: Option<&H>) -> NavAction {
    if let Some(host) = host {
        host::scroll_to(host, config::sections::CONTACT);
    }
    NavAction::Close
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::fake::FakeHost;

    const OPEN: NavState = NavState { open: true };
    const CLOSED: NavState = NavState { open: false };

    #[test]
    fn toggle_twice_returns_to_start() {
        for start in [OPEN, CLOSED] {
            let after = start.apply(NavAction::Toggle).apply(NavAction::Toggle);
            assert_eq!(after, start);
        }
    }

    #[test]
    fn close_is_idempotent() {
        assert_eq!(OPEN.apply(NavAction::Close), CLOSED);
        assert_eq!(OPEN.apply(NavAction::Close).apply(NavAction::Close), CLOSED);
        assert_eq!(CLOSED.apply(NavAction::Close), CLOSED);
    }

    #[test]
    fn escape_closes_open_panel_only() {
        assert_eq!(OPEN.apply(NavAction::Escape), CLOSED);
        assert_eq!(CLOSED.apply(NavAction::Escape), CLOSED);
    }

    #[test]
    fn reducer_keeps_same_rc_when_nothing_changes() {
        let closed = Rc::new(CLOSED);
        let after = closed.clone().reduce(NavAction::Escape);
        assert!(Rc::ptr_eq(&closed, &after));

        let opened = closed.reduce(NavAction::Toggle);
        assert!(opened.open);
    }

    #[test]
    fn labels_follow_open_state() {
        assert_eq!(CLOSED.toggle_label(), "Open navigation");
        assert_eq!(OPEN.toggle_label(), "Close navigation");
        assert_eq!(OPEN.toggle_icon(), "✕");
    }

    #[test]
    fn scroll_to_contact_always_closes() {
        let host = FakeHost::with_sections(&["contact"]);
        for start in [OPEN, CLOSED] {
            let action = scroll_to_contact(Some(&host));
            assert_eq!(start.apply(action), CLOSED);
        }
        assert_eq!(host.scrolled.borrow().len(), 2);
    }

    #[test]
    fn scroll_to_contact_without_target_still_closes() {
        let host = FakeHost::default();
        assert_eq!(OPEN.apply(scroll_to_contact(Some(&host))), CLOSED);
        assert!(host.scrolled.borrow().is_empty());

        assert_eq!(OPEN.apply(scroll_to_contact::<FakeHost>(None)), CLOSED);
    }
}
