use yew::prelude::*;

use super::scroll_effects::{interpolate, use_scroll_progress};
use crate::i18n::use_strings;
use crate::sections::Section;

const STEP_ICONS: [&str; 5] = ["👤", "🧭", "📖", "📈", "🏆"];
const PARTICLES: usize = 20;

/// Spread of the background particles, as percentages of the section.
pub fn particle_position(index: usize) -> (f64, f64) {
    const GOLDEN: f64 = 0.618_033_988_75;
    let left = (index as f64 * GOLDEN * 100.0) % 100.0;
    let top = (index as f64 * GOLDEN * GOLDEN * 100.0 + 37.0) % 100.0;
    (left, top)
}

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    let strings = use_strings();
    let section_ref = use_node_ref();
    let progress = use_scroll_progress(section_ref.clone());
    let line_length = interpolate(progress, &[(0.0, 0.0), (0.8, 1.0)]);

    html! {
        <section id={Section::HowItWorks.id()} class="how-section" ref={section_ref}>
            <style>
                {r#"
                .how-section { position: relative; padding: 6rem 0; overflow: hidden; }
                .particle {
                    position: absolute;
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 9999px;
                    background: var(--primary);
                    opacity: 0.1;
                    animation-name: floatParticle;
                    animation-iteration-count: infinite;
                    animation-timing-function: ease-in-out;
                }
                @keyframes floatParticle {
                    0%, 100% { transform: translateY(0); opacity: 0.1; }
                    50% { transform: translateY(-30px); opacity: 0.3; }
                }
                .timeline { position: relative; max-width: 64rem; margin: 0 auto; }
                .timeline-line {
                    position: absolute;
                    left: 50%;
                    top: 0;
                    width: 2px;
                    height: 100%;
                    transform-origin: top;
                    background: linear-gradient(to bottom, var(--primary), var(--secondary));
                }
                .steps { display: flex; flex-direction: column; gap: 6rem; }
                .step {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                    opacity: 0;
                    animation: fadeUp 0.8s ease-out forwards;
                }
                .step.reverse { flex-direction: row-reverse; }
                .step-body { flex: 1; }
                .step-card { padding: 2rem; border-radius: 1rem; transition: transform 0.2s; }
                .step-card:hover { transform: scale(1.02); }
                .step-heading { display: flex; align-items: center; gap: 1rem; margin-bottom: 1rem; }
                .step-number {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 9999px;
                    background: rgba(124, 58, 237, 0.2);
                    color: var(--primary);
                    font-size: 1.5rem;
                    font-weight: 700;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .step-heading h3 { font-size: 1.5rem; font-weight: 700; }
                .step-icon {
                    position: relative;
                    z-index: 10;
                    width: 6rem;
                    height: 6rem;
                    border-radius: 1rem;
                    font-size: 2.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(to bottom right, var(--primary), var(--secondary));
                    transition: transform 0.2s;
                }
                .step-icon:hover { transform: scale(1.1) rotate(5deg); }
                .step-spacer { flex: 1; }
                @media (max-width: 768px) {
                    .timeline-line, .step-spacer { display: none; }
                    .step, .step.reverse { flex-direction: column; }
                    .step-icon { width: 5rem; height: 5rem; }
                }
                "#}
            </style>
            <div class="particles">
                { for (0..PARTICLES).map(|i| {
                    let (left, top) = particle_position(i);
                    html! {
                        <div
                            class="particle"
                            style={format!(
                                "left: {:.1}%; top: {:.1}%; animation-duration: {:.1}s; animation-delay: {:.1}s;",
                                left, top, 3.0 + i as f64 * 0.5, i as f64 * 0.2
                            )}
                        ></div>
                    }
                }) }
            </div>

            <div class="container">
                <div class="section-header">
                    <h2 class="gradient-text">{strings.how_title}</h2>
                    <p class="muted">{strings.how_subtitle}</p>
                </div>

                <div class="timeline">
                    <div class="timeline-line" style={format!("transform: scaleY({:.3});", line_length)}></div>
                    <div class="steps">
                        { for strings.steps.iter().zip(STEP_ICONS).enumerate().map(|(index, (step, icon))| html! {
                            <div
                                class={classes!("step", (index % 2 == 1).then(|| "reverse"))}
                                style={format!("animation-delay: {}ms;", index * 200)}
                            >
                                <div class="step-body">
                                    <div class="step-card glass hover-glow">
                                        <div class="step-heading">
                                            <div class="step-number">{(index + 1).to_string()}</div>
                                            <h3>{step.title}</h3>
                                        </div>
                                        <p class="muted">{step.description}</p>
                                    </div>
                                </div>
                                <div class="step-icon hover-glow">{icon}</div>
                                <div class="step-spacer"></div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particles_stay_inside_the_section() {
        for i in 0..PARTICLES {
            let (left, top) = particle_position(i);
            assert!((0.0..100.0).contains(&left), "left {}", left);
            assert!((0.0..100.0).contains(&top), "top {}", top);
        }
    }

    #[test]
    fn particles_do_not_stack() {
        let positions: Vec<_> = (0..PARTICLES).map(particle_position).collect();
        for (i, a) in positions.iter().enumerate() {
            for b in &positions[i + 1..] {
                assert!(a != b);
            }
        }
    }
}
