use std::fmt;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Sending,
    Success,
    Error,
}

impl FormStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormStatus::Idle => "idle",
            FormStatus::Sending => "sending",
            FormStatus::Success => "success",
            FormStatus::Error => "error",
        }
    }
}

impl fmt::Display for FormStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Newsletter,
    Contact,
}

impl FormKind {
    pub fn delay_ms(&self) -> u32 {
        match self {
            FormKind::Newsletter => config::NEWSLETTER_DELAY_MS,
            FormKind::Contact => config::CONTACT_DELAY_MS,
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            FormKind::Newsletter => config::NEWSLETTER_SUCCESS,
            FormKind::Contact => config::CONTACT_SUCCESS,
        }
    }

    fn required(&self) -> &'static [Field] {
        match self {
            FormKind::Newsletter => &[Field::Email],
            FormKind::Contact => &[Field::Name, Field::Email, Field::Message],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }
}

/// A completion the caller must deliver back through
/// [`FormController::complete`] once `delay_ms` has elapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pending {
    pub token: u64,
    pub delay_ms: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Newsletter submitted with no email; nothing changes.
    Ignored,
    /// Required contact fields missing; status is now `Error`.
    Rejected,
    Scheduled(Pending),
}

/// Status, message and field values of one form.
///
/// Every submission that reaches `Sending` is tagged with a fresh token.
/// Only the completion carrying the latest token may move the form to
/// `Success`, so an earlier timer can never overwrite a newer submission.
#[derive(Clone, Debug, PartialEq)]
pub struct FormController {
    kind: FormKind,
    status: FormStatus,
    message: String,
    values: FormValues,
    latest: u64,
}

impl FormController {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            status: FormStatus::Idle,
            message: String::new(),
            values: FormValues::default(),
            latest: 0,
        }
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn is_sending(&self) -> bool {
        self.status == FormStatus::Sending
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        self.values.set(field, value);
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        let missing = self
            .kind
            .required()
            .iter()
            .any(|field| self.values.get(*field).is_empty());

        if missing {
            return match self.kind {
                // Native `required` blocks this in the browser already
                FormKind::Newsletter => SubmitOutcome::Ignored,
                FormKind::Contact => {
                    self.status = FormStatus::Error;
                    self.message = config::CONTACT_MISSING_FIELDS.to_string();
                    SubmitOutcome::Rejected
                }
            };
        }

        self.latest += 1;
        self.status = FormStatus::Sending;
        self.message.clear();
        SubmitOutcome::Scheduled(Pending {
            token: self.latest,
            delay_ms: self.kind.delay_ms(),
        })
    }

    /// Delivers a simulated completion. Returns false when the token was
    /// superseded by a later submission and nothing changed.
    pub fn complete(&mut self, token: u64) -> bool {
        if token != self.latest || self.status != FormStatus::Sending {
            return false;
        }
        self.status = FormStatus::Success;
        self.message = self.kind.success_message().to_string();
        self.values = FormValues::default();
        true
    }
}

/// The one outstanding completion handle of a form, keyed by token.
///
/// Storing a new handle drops the previous one, and dropping the slot drops
/// whatever is still pending. With `gloo_timers::callback::Timeout` as `H`
/// a dropped handle is a cancelled timer.
#[derive(Debug)]
pub struct PendingSlot<H> {
    current: Option<(u64, H)>,
}

impl<H> Default for PendingSlot<H> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<H> PendingSlot<H> {
    /// Holds `handle` for `token`, returning the token it superseded.
    pub fn replace(&mut self, token: u64, handle: H) -> Option<u64> {
        self.current
            .replace((token, handle))
            .map(|(superseded, _)| superseded)
    }

    /// Releases the handle once its completion has been delivered. A token
    /// that is no longer current leaves the slot untouched.
    pub fn settle(&mut self, token: u64) -> bool {
        if self.token() != Some(token) {
            return false;
        }
        self.current = None;
        true
    }

    pub fn token(&self) -> Option<u64> {
        self.current.as_ref().map(|(token, _)| *token)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    /// Counts how many handles were dropped, i.e. timers cancelled.
    struct Handle(Rc<Cell<u32>>);

    impl Drop for Handle {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn scheduled(outcome: SubmitOutcome) -> Pending {
        match outcome {
            SubmitOutcome::Scheduled(pending) => pending,
            other => panic!("expected a scheduled completion, got {:?}", other),
        }
    }

    fn contact(name: &str, email: &str, message: &str) -> FormController {
        let mut form = FormController::new(FormKind::Contact);
        form.set_field(Field::Name, name.to_string());
        form.set_field(Field::Email, email.to_string());
        form.set_field(Field::Message, message.to_string());
        form
    }

    #[test]
    fn starts_idle_with_no_message() {
        for kind in [FormKind::Newsletter, FormKind::Contact] {
            let form = FormController::new(kind);
            assert_eq!(form.status(), FormStatus::Idle);
            assert!(form.message().is_empty());
            assert_eq!(*form.values(), FormValues::default());
        }
    }

    #[test]
    fn newsletter_goes_sending_then_success_after_600ms() {
        let mut form = FormController::new(FormKind::Newsletter);
        form.set_field(Field::Email, "a@b.com".to_string());

        let pending = scheduled(form.submit());
        assert_eq!(form.status(), FormStatus::Sending);
        assert!(form.message().is_empty());
        assert_eq!(pending.delay_ms, 600);

        assert!(form.complete(pending.token));
        assert_eq!(form.status(), FormStatus::Success);
        assert_eq!(form.message(), "Thanks — you’re on the waitlist!");
        assert_eq!(form.values().email, "");
    }

    #[test]
    fn empty_newsletter_submit_changes_nothing() {
        let mut form = FormController::new(FormKind::Newsletter);
        let before = form.clone();
        assert_eq!(form.submit(), SubmitOutcome::Ignored);
        assert_eq!(form, before);
    }

    #[test]
    fn contact_with_missing_name_is_rejected_without_scheduling() {
        let mut form = contact("", "x@y.com", "hi");
        assert_eq!(form.submit(), SubmitOutcome::Rejected);
        assert_eq!(form.status(), FormStatus::Error);
        assert_eq!(form.message(), "Please fill all fields.");
        // Fields are kept so the user can correct them
        assert_eq!(form.values().email, "x@y.com");
        // No completion was handed out, so none can land
        assert!(!form.complete(1));
        assert_eq!(form.status(), FormStatus::Error);
    }

    #[test]
    fn each_contact_field_is_required() {
        for (name, email, message) in [("", "e", "m"), ("n", "", "m"), ("n", "e", "")] {
            let mut form = contact(name, email, message);
            assert_eq!(form.submit(), SubmitOutcome::Rejected);
        }
    }

    #[test]
    fn contact_recovers_from_error_on_resubmit() {
        let mut form = contact("", "x@y.com", "hi");
        form.submit();
        form.set_field(Field::Name, "Ada".to_string());

        let pending = scheduled(form.submit());
        assert_eq!(form.status(), FormStatus::Sending);
        assert!(form.message().is_empty());
        assert_eq!(pending.delay_ms, 800);

        assert!(form.complete(pending.token));
        assert_eq!(form.status(), FormStatus::Success);
        assert_eq!(form.message(), "Message sent — we will reply soon.");
        assert_eq!(*form.values(), FormValues::default());
    }

    #[test]
    fn success_persists_until_next_submission() {
        let mut form = FormController::new(FormKind::Newsletter);
        form.set_field(Field::Email, "a@b.com".to_string());
        let pending = scheduled(form.submit());
        form.complete(pending.token);

        assert!(!form.complete(pending.token));
        assert_eq!(form.status(), FormStatus::Success);

        form.set_field(Field::Email, "c@d.com".to_string());
        scheduled(form.submit());
        assert_eq!(form.status(), FormStatus::Sending);
    }

    #[test]
    fn stale_completion_cannot_finish_a_newer_submission() {
        let mut form = FormController::new(FormKind::Newsletter);
        form.set_field(Field::Email, "a@b.com".to_string());
        let first = scheduled(form.submit());
        form.set_field(Field::Email, "c@d.com".to_string());
        let second = scheduled(form.submit());
        assert!(second.token > first.token);

        assert!(!form.complete(first.token));
        assert_eq!(form.status(), FormStatus::Sending);
        assert_eq!(form.values().email, "c@d.com");

        assert!(form.complete(second.token));
        assert_eq!(form.status(), FormStatus::Success);
    }

    #[test]
    fn message_is_only_set_for_terminal_states() {
        let mut form = contact("", "", "");
        form.submit();
        assert!(!form.message().is_empty());

        let mut form = contact("n", "e", "m");
        form.submit();
        assert!(form.message().is_empty());
    }

    #[test]
    fn status_renders_lowercase() {
        assert_eq!(FormStatus::Sending.to_string(), "sending");
        assert_eq!(FormStatus::Error.as_str(), "error");
    }

    #[test]
    fn sending_only_between_submit_and_completion() {
        let mut form = FormController::new(FormKind::Newsletter);
        assert!(!form.is_sending());

        form.set_field(Field::Email, "a@b.com".to_string());
        let pending = scheduled(form.submit());
        assert!(form.is_sending());

        form.complete(pending.token);
        assert!(!form.is_sending());
    }

    #[test]
    fn rejected_contact_is_not_sending() {
        let mut form = contact("", "", "");
        form.submit();
        assert!(!form.is_sending());
    }

    #[test]
    fn newer_submission_cancels_the_pending_handle() {
        let dropped = Rc::new(Cell::new(0));
        let mut slot = PendingSlot::default();

        assert_eq!(slot.replace(1, Handle(dropped.clone())), None);
        assert_eq!(dropped.get(), 0);

        assert_eq!(slot.replace(2, Handle(dropped.clone())), Some(1));
        assert_eq!(dropped.get(), 1);
        assert_eq!(slot.token(), Some(2));
    }

    #[test]
    fn stale_token_does_not_release_the_current_handle() {
        let dropped = Rc::new(Cell::new(0));
        let mut slot = PendingSlot::default();
        slot.replace(1, Handle(dropped.clone()));
        slot.replace(2, Handle(dropped.clone()));

        assert!(!slot.settle(1));
        assert_eq!(slot.token(), Some(2));
        assert_eq!(dropped.get(), 1);

        assert!(slot.settle(2));
        assert_eq!(slot.token(), None);
        assert_eq!(dropped.get(), 2);
    }

    #[test]
    fn dropping_the_form_cancels_what_is_pending() {
        let dropped = Rc::new(Cell::new(0));
        {
            let mut form = FormController::new(FormKind::Contact);
            form.set_field(Field::Name, "Ada".to_string());
            form.set_field(Field::Email, "x@y.com".to_string());
            form.set_field(Field::Message, "hi".to_string());
            let pending = scheduled(form.submit());

            let mut slot = PendingSlot::default();
            slot.replace(pending.token, Handle(dropped.clone()));
            assert_eq!(dropped.get(), 0);
        }
        assert_eq!(dropped.get(), 1);
    }
}
