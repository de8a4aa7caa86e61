use yew::prelude::*;

use crate::components::lead_capture::{FormVariant, LeadCaptureForm};
use crate::config::SiteConfig;

#[derive(Properties, PartialEq)]
pub struct WaitlistModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub config: SiteConfig,
}

// Stays mounted while closed so typed fields and an in-flight request survive reopening.
#[function_component(WaitlistModal)]
pub fn waitlist_modal(props: &WaitlistModalProps) -> Html {
    let close_modal = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="waitlist-modal" hidden={!props.open}>
            <div class="waitlist-modal__backdrop" onclick={close_modal}></div>
            <div class="waitlist-modal__content">
                <div class="waitlist-modal__eyebrow">
                    <span class="icon">{"✉"}</span>
                    <span>{"Join the Waitlist for Early Access"}</span>
                </div>
                <LeadCaptureForm config={props.config.clone()} variant={FormVariant::Modal} />
                <p class="waitlist-modal__note">
                    <span class="icon">{"🔒"}</span>
                    {" Private pre-launch access to the Genistein Patent updates and longevity research."}
                </p>
            </div>
            <style>
                {r#"
                .waitlist-modal {
                    position: fixed;
                    inset: 0;
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .waitlist-modal[hidden] {
                    display: none;
                }
                .waitlist-modal__backdrop {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.7);
                }
                .waitlist-modal__content {
                    position: relative;
                    width: 100%;
                    max-width: 32rem;
                    margin: 0 1rem;
                    padding: 1.5rem;
                    border-radius: 16px;
                    background: rgba(23, 23, 23, 0.9);
                    backdrop-filter: blur(24px);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    animation: modalRise 0.3s ease-out;
                }
                .waitlist-modal__eyebrow {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #e5e5e5;
                    margin-bottom: 1rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    font-size: 0.75rem;
                }
                .waitlist-modal__note {
                    margin-top: 1rem;
                    text-align: center;
                    font-size: 0.75rem;
                    color: #737373;
                }
                @keyframes modalRise {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                "#}
            </style>
        </div>
    }
}
