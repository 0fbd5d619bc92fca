use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::state::form::{Field, FormController, FormKind, PendingSlot, SubmitOutcome};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormVariant {
    /// Single email row inside the hero.
    NewsletterInline,
    /// Standalone "Stay in the loop" block.
    NewsletterLarge,
    Contact,
}

impl FormVariant {
    fn kind(&self) -> FormKind {
        match self {
            FormVariant::NewsletterInline | FormVariant::NewsletterLarge => FormKind::Newsletter,
            FormVariant::Contact => FormKind::Contact,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            FormVariant::NewsletterInline => "newsletter-inline",
            FormVariant::NewsletterLarge => "newsletter-large",
            FormVariant::Contact => "contact",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SubmissionFormProps {
    pub variant: FormVariant,
}

pub enum FormMsg {
    Input(Field, String),
    Submit,
    Completed(u64),
}

/// One lead-capture form and its simulated submission.
///
/// The pending completion timer is owned here, so it is cancelled when a
/// newer submission replaces it or when the form is destroyed.
pub struct SubmissionForm {
    controller: FormController,
    pending: PendingSlot<Timeout>,
}

impl Component for SubmissionForm {
    type Message = FormMsg;
    type Properties = SubmissionFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            controller: FormController::new(ctx.props().variant.kind()),
            pending: PendingSlot::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let name = ctx.props().variant.name();
        match msg {
            FormMsg::Input(field, value) => {
                self.controller.set_field(field, value);
                true
            }
            FormMsg::Submit => match self.controller.submit() {
                SubmitOutcome::Ignored => false,
                SubmitOutcome::Rejected => {
                    log::info!("Form {} -> {}", name, self.controller.status());
                    true
                }
                SubmitOutcome::Scheduled(pending) => {
                    log::info!("Form {} -> {}", name, self.controller.status());
                    let link = ctx.link().clone();
                    let timer = Timeout::new(pending.delay_ms, move || {
                        link.send_message(FormMsg::Completed(pending.token));
                    });
                    if let Some(superseded) = self.pending.replace(pending.token, timer) {
                        log::debug!("Form {} cancelled pending completion {}", name, superseded);
                    }
                    true
                }
            },
            FormMsg::Completed(token) => {
                self.pending.settle(token);
                if !self.controller.complete(token) {
                    log::debug!("Form {} ignored stale completion {}", name, token);
                    return false;
                }
                log::info!("Form {} -> {}", name, self.controller.status());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            FormMsg::Submit
        });
        let sending = self.controller.is_sending();

        match ctx.props().variant {
            FormVariant::NewsletterInline => html! {
                <form
                    class="newsletter-inline"
                    {onsubmit}
                    aria-label="Subscribe to Tixible newsletter"
                >
                    { self.input(ctx, Field::Email, "email", "your@email.com", "Email address for newsletter") }
                    <button type="submit" class="cta-btn" aria-label="Join waitlist" disabled={sending}>
                        {"Join Waitlist"}
                    </button>
                    { self.status_region() }
                </form>
            },
            FormVariant::NewsletterLarge => html! {
                <>
                    <form
                        class="newsletter-form"
                        {onsubmit}
                        aria-label="Join the Tixible waitlist"
                    >
                        { self.input(ctx, Field::Email, "email", "Enter your email", "Email address") }
                        <button type="submit" class="cta-btn primary" aria-label="Join waitlist button" disabled={sending}>
                            {"Join Waitlist"}
                        </button>
                    </form>
                    { self.status_region() }
                </>
            },
            FormVariant::Contact => {
                let oninput_message = ctx.link().callback(|e: InputEvent| {
                    let area: HtmlTextAreaElement = e.target_unchecked_into();
                    FormMsg::Input(Field::Message, area.value())
                });
                html! {
                    <form {onsubmit} class="contact-form" aria-label="Contact form">
                        { self.input(ctx, Field::Name, "text", "Your name", "Your name") }
                        { self.input(ctx, Field::Email, "email", "you@example.com", "Your email") }
                        <textarea
                            id="message"
                            name="message"
                            placeholder="Tell us about your idea or partnership"
                            required={true}
                            aria-label="Message content"
                            value={self.controller.values().message.clone()}
                            oninput={oninput_message}
                        />
                        <button type="submit" class="submit" aria-label="Send message" disabled={sending}>
                            {"Send message"}
                        </button>
                        { self.status_region() }
                    </form>
                }
            }
        }
    }
}

impl SubmissionForm {
    fn input(
        &self,
        ctx: &Context<Self>,
        field: Field,
        kind: &'static str,
        placeholder: &'static str,
        label: &'static str,
    ) -> Html {
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            FormMsg::Input(field, input.value())
        });
        let name = match field {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        };
        // Only the contact form carries element ids; two newsletter forms share the page
        let id = (ctx.props().variant == FormVariant::Contact).then(|| name);

        html! {
            <input
                {id}
                {name}
                type={kind}
                {placeholder}
                required={true}
                aria-label={label}
                value={self.controller.values().get(field).to_string()}
                {oninput}
            />
        }
    }

    fn status_region(&self) -> Html {
        html! {
            <div
                class={classes!("form-note", self.controller.status().as_str())}
                role="status"
                aria-live="polite"
            >
                { self.controller.message() }
            </div>
        }
    }
}
