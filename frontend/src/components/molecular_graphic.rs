use yew::prelude::*;

const BOND_COUNT: u32 = 12;

/// Abstract bonding motif: a grid of drifting bond lines around a pulsing ring.
#[function_component(MolecularGraphic)]
pub fn molecular_graphic() -> Html {
    html! {
        <div class="molecule">
            <div class="molecule__glow"></div>
            <div class="molecule__bonds">
                { for (0..BOND_COUNT).map(|i| html! {
                    <div
                        key={i.to_string()}
                        class="molecule__bond"
                        style={format!("animation-duration: {}s;", 3 + i % 3)}
                    ></div>
                }) }
            </div>
            <div class="molecule__ring"></div>
            <style>
                {r#"
                .molecule {
                    position: relative;
                    width: 100%;
                    height: 16rem;
                }
                .molecule__glow {
                    position: absolute;
                    inset: 0;
                    border-radius: 12px;
                    background: linear-gradient(to right, rgba(49, 46, 129, 0), rgba(79, 70, 229, 0.1), rgba(245, 158, 11, 0.1));
                }
                .molecule__bonds {
                    position: absolute;
                    inset: 0;
                    display: grid;
                    grid-template-columns: repeat(6, 1fr);
                    gap: 0.5rem;
                    opacity: 0.6;
                }
                .molecule__bond {
                    height: 2px;
                    background: linear-gradient(to right, rgba(99, 102, 241, 0.4), rgba(251, 191, 36, 0.4));
                    animation-name: bondDrift;
                    animation-iteration-count: infinite;
                    animation-timing-function: ease-in-out;
                }
                .molecule__ring {
                    position: absolute;
                    left: 50%;
                    top: 50%;
                    width: 10rem;
                    height: 10rem;
                    border-radius: 50%;
                    border: 1px solid rgba(252, 211, 77, 0.3);
                    transform: translate(-50%, -50%);
                    animation: ringPulse 3s ease-in-out infinite alternate;
                }
                @keyframes bondDrift {
                    0% { opacity: 0.2; transform: translateY(0); }
                    50% { opacity: 0.8; transform: translateY(-6px); }
                    100% { opacity: 0.2; transform: translateY(0); }
                }
                @keyframes ringPulse {
                    from { transform: translate(-50%, -50%) scale(0.95); }
                    to { transform: translate(-50%, -50%) scale(1); }
                }
                "#}
            </style>
        </div>
    }
}
