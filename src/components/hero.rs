use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::{HERO_VIDEO_SRC, VOICE_LISTEN_MS};
use crate::i18n::use_strings;
use crate::sections::{scroll_to_section, Section};

const CHAR_STAGGER_MS: usize = 50;

/// Characters of `text` with their entrance delay, continuing after
/// `already_shown` characters.
pub fn staggered_chars(text: &str, already_shown: usize) -> Vec<(char, usize)> {
    text.chars()
        .enumerate()
        .map(|(i, c)| (c, (already_shown + i) * CHAR_STAGGER_MS))
        .collect()
}

fn split_title(text: &str, already_shown: usize) -> Html {
    html! {
        { for staggered_chars(text, already_shown).into_iter().map(|(c, delay)| {
            let white_space = if c == ' ' { "pre" } else { "normal" };
            html! {
                <span
                    class="hero-char"
                    style={format!("animation-delay: {}ms; white-space: {};", delay, white_space)}
                >
                    {c.to_string()}
                </span>
            }
        }) }
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let strings = use_strings();
    let listening = use_state(|| false);
    let listen_timer = use_mut_ref(|| None::<Timeout>);

    let on_voice = {
        let listening = listening.clone();
        let listen_timer = listen_timer.clone();
        Callback::from(move |_: MouseEvent| {
            listening.set(!*listening);
            let listening = listening.clone();
            // replacing the handle cancels a pending reset
            *listen_timer.borrow_mut() = Some(Timeout::new(VOICE_LISTEN_MS, move || {
                listening.set(false);
            }));
        })
    };

    let go_to = |section: Section| {
        Callback::from(move |_: MouseEvent| scroll_to_section(section))
    };

    let title1_len = strings.hero_title1.chars().count();

    html! {
        <section id={Section::Home.id()} class="hero">
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }
                .hero-video {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    z-index: 0;
                }
                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.7);
                    z-index: 10;
                }
                .hero-content {
                    position: relative;
                    z-index: 20;
                    text-align: center;
                    color: #ffffff;
                    padding: 100px 1rem 2rem;
                }
                .hero-title1 { font-size: clamp(3rem, 7vw, 4.5rem); font-weight: 700; margin-bottom: 1rem; }
                .hero-title2 { font-size: clamp(2.25rem, 6vw, 3.75rem); font-weight: 700; margin-bottom: 2rem; }
                .hero-char {
                    display: inline-block;
                    opacity: 0;
                    animation: heroCharIn 0.5s ease-out forwards;
                }
                @keyframes heroCharIn {
                    from { opacity: 0; transform: translateY(50px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .hero-description {
                    font-size: 1.25rem;
                    color: #e5e7eb;
                    max-width: 42rem;
                    margin: 0 auto 3rem;
                    opacity: 0;
                    animation: fadeUp 0.8s ease-out 1.5s forwards;
                }
                .hero-cta-group {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    opacity: 0;
                    animation: fadeUp 0.8s ease-out 2s forwards;
                }
                .hero-cta-group .btn { font-size: 1.125rem; padding: 1.25rem 2rem; }
                .hero-cta-group .btn-outline { color: #ffffff; }
                .hero-mic.listening { background: rgba(124, 58, 237, 0.2); animation: glowPulse 1s infinite; }
                .voice-wave {
                    margin-top: 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.25rem;
                }
                .voice-bar {
                    width: 0.25rem;
                    height: 2rem;
                    border-radius: 9999px;
                    background: var(--primary);
                    animation: voiceBar 0.5s ease-in-out infinite;
                }
                @keyframes voiceBar {
                    0%, 100% { transform: scaleY(1); }
                    50% { transform: scaleY(2); }
                }
                .scroll-indicator {
                    position: absolute;
                    bottom: 0.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    font-size: 2rem;
                    color: #e5e7eb;
                    opacity: 0;
                    animation: fadeIn 1s ease 3s forwards, bounce 2s ease-in-out 3s infinite;
                }
                "#}
            </style>
            <video class="hero-video" autoplay=true muted=true loop=true playsinline=true>
                <source src={HERO_VIDEO_SRC} type="video/mp4" />
                {"Your browser does not support the video tag."}
            </video>
            <div class="hero-overlay"></div>

            <div class="hero-content">
                <div class="hero-title1">
                    { split_title(strings.hero_title1, 0) }
                </div>
                <div class="hero-title2 gradient-text">
                    { split_title(strings.hero_title2, title1_len) }
                </div>
                <p class="hero-description">
                    {"Experience the future of education with AI-powered learning, personalized courses, and globally recognized certifications."}
                </p>
                <div class="hero-cta-group">
                    <button class="btn btn-primary" onclick={go_to(Section::HowItWorks)}>
                        {strings.hero_get_started}
                    </button>
                    <button class="btn btn-outline" onclick={go_to(Section::Courses)}>
                        {strings.hero_explore_courses}
                    </button>
                    <button
                        class={classes!("btn", "btn-ghost", "hero-mic", (*listening).then(|| "listening"))}
                        onclick={on_voice}
                        aria-label={strings.hero_voice}
                        aria-pressed={(*listening).to_string()}
                    >
                        {"🎤"}
                    </button>
                </div>
                if *listening {
                    <div class="voice-wave">
                        { for (0..5).map(|i| html! {
                            <div class="voice-bar" style={format!("animation-delay: {}ms;", i * 100)}></div>
                        }) }
                    </div>
                }
                <div class="scroll-indicator">{"⌄"}</div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_title_continues_the_stagger() {
        let first = staggered_chars("Hi", 0);
        assert_eq!(first, vec![('H', 0), ('i', 50)]);
        let second = staggered_chars("Yo", 2);
        assert_eq!(second, vec![('Y', 100), ('o', 150)]);
    }

    #[test]
    fn stagger_counts_characters_not_bytes() {
        let chars = staggered_chars("जहाँ", 0);
        assert_eq!(chars.len(), "जहाँ".chars().count());
        assert_eq!(chars.last().map(|(_, d)| *d), Some((chars.len() - 1) * 50));
    }
}
