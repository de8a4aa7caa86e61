use yew::prelude::*;
use web_sys::HtmlInputElement;
use wasm_bindgen_futures::spawn_local;

use crate::config::SiteConfig;
use crate::leads::form::{FormState, LastResult, LeadForm};
use crate::leads::transport::FetchTransport;

/// Where the form is shown. Only wording and layout differ, the submission is the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormVariant {
    Modal,
    Inline,
}

impl FormVariant {
    pub fn submit_label(self, submitting: bool) -> &'static str {
        match (self, submitting) {
            (_, true) => "Submitting…",
            (FormVariant::Modal, false) => "Request Early Access",
            (FormVariant::Inline, false) => "Request Access",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            FormVariant::Modal => "Success. You're on the list.",
            FormVariant::Inline => "Success. Welcome to the inner circle.",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            FormVariant::Modal => "Something went wrong. Please try again.",
            FormVariant::Inline => "Please try again.",
        }
    }

    fn class(self) -> &'static str {
        match self {
            FormVariant::Modal => "lead-form lead-form--modal",
            FormVariant::Inline => "lead-form lead-form--inline",
        }
    }
}

/// The line shown under the form, if any.
pub fn status_message(variant: FormVariant, state: &FormState) -> Option<String> {
    if let Some(invalid) = state.invalid {
        return Some(invalid.to_string());
    }
    match state.last_result {
        LastResult::None => None,
        LastResult::Success => Some(variant.success_message().to_string()),
        LastResult::Failure => Some(variant.failure_message().to_string()),
    }
}

#[derive(Properties, PartialEq)]
pub struct LeadCaptureFormProps {
    pub config: SiteConfig,
    pub variant: FormVariant,
}

#[function_component(LeadCaptureForm)]
pub fn lead_capture_form(props: &LeadCaptureFormProps) -> Html {
    let redraw = use_force_update();
    let form = {
        let redraw = redraw.clone();
        use_memo(
            move |config: &SiteConfig| {
                LeadForm::new(config, FetchTransport).on_change(move || redraw.force_update())
            },
            props.config.clone(),
        )
    };

    let on_first_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set_first_name(input.value());
        })
    };

    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set_email(input.value());
        })
    };

    let on_country = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set_country(input.value());
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.is_submitting() {
                return;
            }
            let form = form.clone();
            spawn_local(async move {
                form.submit().await;
            });
        })
    };

    let variant = props.variant;
    let state = form.state();
    let status = status_message(variant, &state);

    let fields = match variant {
        FormVariant::Modal => html! {
            <>
                <div class="lead-field">
                    <label>{"First Name"}</label>
                    <input
                        value={state.first_name.clone()}
                        oninput={on_first_name}
                        required=true
                        placeholder="Alex"
                    />
                </div>
                <div class="lead-field">
                    <label>{"Email"}</label>
                    <input
                        type="email"
                        value={state.email.clone()}
                        oninput={on_email}
                        required=true
                        placeholder="you@email.com"
                    />
                </div>
                <div class="lead-field">
                    <label>{"Country"}</label>
                    <input
                        value={state.country.clone()}
                        oninput={on_country}
                        placeholder="Greece"
                    />
                </div>
            </>
        },
        FormVariant::Inline => html! {
            <>
                <input
                    value={state.first_name.clone()}
                    oninput={on_first_name}
                    required=true
                    placeholder="First Name"
                />
                <input
                    type="email"
                    value={state.email.clone()}
                    oninput={on_email}
                    required=true
                    placeholder="Email"
                />
                <input
                    value={state.country.clone()}
                    oninput={on_country}
                    placeholder="Country"
                />
            </>
        },
    };

    html! {
        <form class={variant.class()} {onsubmit}>
            { fields }
            <button type="submit" class="lead-submit" disabled={state.submitting}>
                { variant.submit_label(state.submitting) }
                if variant == FormVariant::Modal {
                    <i class="arrow">{"→"}</i>
                }
            </button>
            if let Some(status) = status {
                <p class="lead-status">{ status }</p>
            }
            <style>
                {r#"
                .lead-form input {
                    width: 100%;
                    background: rgba(23, 23, 23, 0.8);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 8px;
                    padding: 0.6rem 0.75rem;
                    color: #f5f5f5;
                    box-sizing: border-box;
                }
                .lead-form input::placeholder {
                    color: #737373;
                }
                .lead-form input:focus {
                    outline: none;
                    border-color: #818cf8;
                }
                .lead-form--modal {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .lead-field label {
                    display: block;
                    font-size: 0.875rem;
                    color: #d4d4d4;
                    margin-bottom: 0.25rem;
                }
                .lead-form--inline {
                    margin-top: 1.5rem;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 0.75rem;
                }
                .lead-form--inline input {
                    background: rgba(10, 10, 10, 0.6);
                    padding: 0.75rem;
                    font-size: 0.875rem;
                }
                .lead-submit {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    font-weight: 600;
                    border: none;
                    border-radius: 8px;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }
                .lead-form--modal .lead-submit {
                    margin-top: 0.5rem;
                    padding: 0.75rem;
                    color: #000;
                    background: linear-gradient(to right, #6366f1, #a5b4fc);
                }
                .lead-form--modal .lead-submit:hover {
                    background: linear-gradient(to right, #818cf8, #fcd34d);
                }
                .lead-form--inline .lead-submit {
                    padding: 0.75rem 1rem;
                    color: #171717;
                    background: #fcd34d;
                }
                .lead-form--inline .lead-submit:hover {
                    background: #fde68a;
                }
                .lead-submit:disabled {
                    opacity: 0.6;
                    cursor: default;
                }
                .lead-status {
                    font-size: 0.875rem;
                    color: #d4d4d4;
                }
                .lead-form--modal .lead-status {
                    text-align: center;
                }
                .lead-form--inline .lead-status {
                    grid-column: 1 / -1;
                    margin: 0;
                }
                @media (max-width: 768px) {
                    .lead-form--inline {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leads::submission::LeadValidationError;

    #[test]
    fn test_submit_label() {
        assert_eq!(FormVariant::Modal.submit_label(false), "Request Early Access");
        assert_eq!(FormVariant::Inline.submit_label(false), "Request Access");
        assert_eq!(FormVariant::Modal.submit_label(true), "Submitting…");
        assert_eq!(FormVariant::Inline.submit_label(true), "Submitting…");
    }

    #[test]
    fn test_status_message_per_variant() {
        let mut state = FormState::default();
        assert_eq!(status_message(FormVariant::Modal, &state), None);

        state.last_result = LastResult::Success;
        assert_eq!(
            status_message(FormVariant::Modal, &state).as_deref(),
            Some("Success. You're on the list.")
        );
        assert_eq!(
            status_message(FormVariant::Inline, &state).as_deref(),
            Some("Success. Welcome to the inner circle.")
        );

        state.last_result = LastResult::Failure;
        assert_eq!(
            status_message(FormVariant::Modal, &state).as_deref(),
            Some("Something went wrong. Please try again.")
        );
        assert_eq!(
            status_message(FormVariant::Inline, &state).as_deref(),
            Some("Please try again.")
        );
    }

    #[test]
    fn test_validation_error_takes_precedence() {
        let state = FormState {
            last_result: LastResult::Failure,
            invalid: Some(LeadValidationError::InvalidEmail),
            ..FormState::default()
        };
        assert_eq!(
            status_message(FormVariant::Inline, &state).as_deref(),
            Some("Please enter a valid email address.")
        );
    }
}
