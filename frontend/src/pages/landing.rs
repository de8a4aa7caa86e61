use chrono::Datelike;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::lead_capture::{FormVariant, LeadCaptureForm};
use crate::components::molecular_graphic::MolecularGraphic;
use crate::components::waitlist_modal::WaitlistModal;
use crate::config::SiteConfig;

const HERO_SCENE: &str = "https://prod.spline.design/5EwoDiC2tChvmy4K/scene.splinecode";

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub config: SiteConfig,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let modal_open = use_bool_toggle(false);

    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: MouseEvent| modal_open.set(true))
    };

    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: ()| modal_open.set(false))
    };

    let year = chrono::Local::now().year();

    html! {
        <div class="landing-page">
            <header class="hero">
                <div class="hero-scene">
                    <spline-viewer url={HERO_SCENE}></spline-viewer>
                </div>
                <div class="hero-shade"></div>
                <div class="hero-content">
                    <div class="hero-eyebrow">
                        <span class="icon">{"🛡"}</span>
                        <span>{"The Genistein Project"}</span>
                    </div>
                    <h1 class="hero-title">
                        <span>{"A Molecule Beyond Time."}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"From the mind of George K. Vasileiou — The Genistein Patent is redefining the frontiers of anti-aging science."}
                    </p>
                    <div class="hero-cta-group">
                        <button class="hero-cta" onclick={open_modal.clone()}>
                            {"Join the Waitlist for Early Access"}
                        </button>
                        <span class="hero-tagline">{"Where Science Meets Immortality."}</span>
                    </div>
                </div>
            </header>

            <section class="science-section">
                <div class="section-inner science-grid">
                    <div>
                        <h2>{"The Secret Within Genistein."}</h2>
                        <p>
                            {"Genistein, a powerful phytoestrogen derived from soy, inhibits the enzyme α-glucosidase — slowing sugar metabolism and mimicking the mechanisms behind life-extension drugs like Metformin and Acarbose."}
                        </p>
                        <p>
                            {"Through proprietary modification, the Genistein-bound-Glucose molecule enhances enzymatic inhibition, blocking sugar absorption and thereby reducing glycation — a root cause of aging. This is the pathway to a longer, healthier life."}
                        </p>
                    </div>
                    <div>
                        <MolecularGraphic />
                        <p class="caption">{"An abstract visualization of molecular bonding between Genistein and Glucose."}</p>
                    </div>
                </div>
            </section>

            <section class="era-section">
                <div class="section-inner narrow centered">
                    <h2>{"A New Era Begins."}</h2>
                    <p>
                        {"This is not a supplement. This is a patented breakthrough in biochemical longevity — a re-engineered molecule that could reshape how humanity ages. Early collaborators and investors will gain access to proprietary research, development updates, and pre-launch invitations."}
                    </p>
                    <button class="era-cta" onclick={open_modal}>
                        {"Enter the Inner Circle "}
                        <i class="arrow">{"→"}</i>
                    </button>
                </div>
            </section>

            <section class="about-section">
                <div class="section-inner narrow about-grid">
                    <div class="about-heading">
                        <div class="about-rule"></div>
                        <h3>{"The Mind Behind the Molecule."}</h3>
                    </div>
                    <div class="about-body">
                        <p>
                            {"George K. Vasileiou, B.Sc. in Cognitive Science and Psychology, is a researcher, biogerontologist, and health philosopher. His methodology integrates biochemical innovation with the timeless principles of Ancient Greek philosophy — uniting soma, nous, and pneuma in pursuit of human perfection."}
                        </p>
                        <p class="about-quote">{"“Optimising longevity through directed discipline makes life worth living.”"}</p>
                    </div>
                </div>
            </section>

            <section class="capture-section">
                <div class="capture-card">
                    <div class="capture-eyebrow">
                        <span class="icon">{"✉"}</span>
                        <span>{"Join the Waitlist for Early Access"}</span>
                    </div>
                    <LeadCaptureForm config={props.config.clone()} variant={FormVariant::Inline} />
                    <p class="capture-note">{"Private pre-launch access to the Genistein Patent updates and longevity research."}</p>
                </div>
            </section>

            <footer class="site-footer">
                <div class="section-inner footer-row">
                    <p>{format!("© {} The Genistein Project. All rights reserved.", year)}</p>
                    <div class="footer-tags">
                        <span>{"Genistein Patent"}</span>
                        <span>{"Longevity Innovation"}</span>
                        <span>{"α-Glucosidase Inhibition"}</span>
                    </div>
                </div>
            </footer>

            <WaitlistModal open={*modal_open} on_close={close_modal} config={props.config.clone()} />

            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: #0a0a0a;
                    color: #f5f5f5;
                    overflow-x: hidden;
                }
                .section-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .section-inner.narrow {
                    max-width: 64rem;
                }
                .centered {
                    text-align: center;
                }
                .icon {
                    font-style: normal;
                }
                .hero {
                    position: relative;
                    height: 90vh;
                    min-height: 640px;
                    width: 100%;
                    overflow: hidden;
                }
                .hero-scene {
                    position: absolute;
                    inset: 0;
                }
                .hero-scene spline-viewer {
                    width: 100%;
                    height: 100%;
                }
                .hero-shade {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    background: linear-gradient(to bottom, rgba(0, 0, 0, 0.4), rgba(0, 0, 0, 0.6), rgba(10, 10, 10, 0.95));
                }
                .hero-content {
                    position: relative;
                    z-index: 10;
                    height: 100%;
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                }
                .hero-eyebrow,
                .capture-eyebrow {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: rgba(252, 211, 77, 0.8);
                    font-size: 0.75rem;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                }
                .hero-title {
                    margin-top: 1rem;
                    font-size: 4.5rem;
                    font-weight: 600;
                    line-height: 0.95;
                }
                .hero-title span {
                    background: linear-gradient(to right, #fafafa, #fde68a);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-subtitle {
                    margin-top: 1.5rem;
                    max-width: 42rem;
                    color: #d4d4d4;
                }
                .hero-cta-group {
                    margin-top: 2rem;
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    gap: 1rem;
                }
                .hero-cta {
                    background: #f5f5f5;
                    color: #0a0a0a;
                    font-weight: 600;
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 9999px;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }
                .hero-cta:hover {
                    background: #fde68a;
                }
                .hero-tagline {
                    font-size: 0.875rem;
                    color: #a3a3a3;
                }
                .science-section {
                    position: relative;
                    padding: 7rem 0;
                    background: linear-gradient(to bottom, #0a0a0a, #1e1b4b);
                }
                .science-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                }
                .science-section h2,
                .era-section h2 {
                    font-size: 2.25rem;
                    font-weight: 600;
                    margin-bottom: 1rem;
                }
                .science-section p,
                .era-section p,
                .about-body p {
                    color: #d4d4d4;
                    line-height: 1.7;
                }
                .science-section p + p {
                    margin-top: 1rem;
                }
                .caption {
                    margin-top: 0.75rem;
                    font-size: 0.875rem;
                    color: #a3a3a3;
                }
                .era-section {
                    padding: 7rem 0;
                    background: #0a0a0a;
                }
                .era-section p {
                    max-width: 48rem;
                    margin: 1rem auto 0;
                }
                .era-cta {
                    margin-top: 2rem;
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #000;
                    font-weight: 600;
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 9999px;
                    cursor: pointer;
                    background: linear-gradient(to right, #6366f1, #fcd34d);
                }
                .era-cta:hover {
                    background: linear-gradient(to right, #818cf8, #fde68a);
                }
                .about-section {
                    padding: 7rem 0;
                    background: linear-gradient(to bottom, #0a0a0a, #000);
                }
                .about-grid {
                    display: grid;
                    grid-template-columns: 2fr 3fr;
                    gap: 3rem;
                    align-items: start;
                }
                .about-rule {
                    width: 7rem;
                    height: 4px;
                    border-radius: 9999px;
                    margin-bottom: 1.5rem;
                    background: linear-gradient(to right, #fcd34d, #6366f1);
                }
                .about-heading h3 {
                    font-size: 1.875rem;
                    font-weight: 600;
                }
                .about-quote {
                    margin-top: 1rem;
                    font-style: italic;
                    color: #a3a3a3 !important;
                }
                .capture-section {
                    padding: 7rem 1.5rem;
                    background: #0a0a0a;
                }
                .capture-card {
                    max-width: 48rem;
                    margin: 0 auto;
                    padding: 2rem;
                    border-radius: 16px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: linear-gradient(to bottom right, rgba(30, 27, 75, 0.6), rgba(23, 23, 23, 0.6));
                }
                .capture-note {
                    margin-top: 0.75rem;
                    font-size: 0.75rem;
                    color: #737373;
                }
                .site-footer {
                    padding: 2.5rem 0;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(0, 0, 0, 0.9);
                }
                .footer-row {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    font-size: 0.875rem;
                    color: #a3a3a3;
                }
                .footer-tags {
                    display: flex;
                    gap: 1.5rem;
                }
                @media (max-width: 768px) {
                    .hero-title {
                        font-size: 3rem;
                    }
                    .science-grid,
                    .about-grid {
                        grid-template-columns: 1fr;
                    }
                    .science-section,
                    .era-section,
                    .about-section,
                    .capture-section {
                        padding-top: 5rem;
                        padding-bottom: 5rem;
                    }
                    .footer-row {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </div>
    }
}
