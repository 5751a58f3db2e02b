use web_sys::MouseEvent;
use yew::prelude::*;

use super::scroll_effects::use_revealed;
use crate::i18n::use_strings;
use crate::sections::Section;

/// Single-open, collapsible: opening an item closes the other, clicking the
/// open item closes it.
pub fn toggle_open(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    index: usize,
    question: &'static str,
    answer: &'static str,
    is_open: bool,
    on_toggle: Callback<usize>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };

    html! {
        <div
            class={classes!("faq-item", "glass", "hover-glow", props.is_open.then(|| "open"))}
            style={format!("animation-delay: {}ms;", props.index * 100)}
        >
            <button class="faq-question" onclick={toggle} aria-expanded={props.is_open.to_string()}>
                <span class="question-text">{props.question}</span>
                <span class="toggle-icon">{"⌄"}</span>
            </button>
            if props.is_open {
                <div class="faq-answer muted">{props.answer}</div>
            }
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let strings = use_strings();
    let open = use_state(|| None::<usize>);
    let section_ref = use_node_ref();
    let revealed = use_revealed(section_ref.clone());

    let on_toggle = {
        let open = open.clone();
        Callback::from(move |index: usize| open.set(toggle_open(*open, index)))
    };

    html! {
        <section id={Section::Faq.id()} class="faq-section" ref={section_ref}>
            <style>
                {r#"
                .faq-section {
                    position: relative;
                    padding: 6rem 0;
                    overflow: hidden;
                    background: linear-gradient(to bottom, transparent, rgba(236, 72, 153, 0.05), transparent);
                }
                .faq-list {
                    max-width: 48rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .faq-item {
                    border-radius: 0.75rem;
                    padding: 0 1.5rem;
                }
                .revealed .faq-item {
                    opacity: 0;
                    animation: slideInLeft 0.5s ease-out forwards;
                }
                @keyframes slideInLeft {
                    from { opacity: 0; transform: translateX(-20px); }
                    to { opacity: 1; transform: translateX(0); }
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1rem 0;
                    background: none;
                    border: none;
                    color: inherit;
                    font-size: 1.125rem;
                    font-weight: 600;
                    text-align: left;
                    cursor: pointer;
                    transition: color 0.2s;
                }
                .faq-question:hover { color: var(--primary); }
                .toggle-icon { transition: transform 0.2s; }
                .faq-item.open .toggle-icon { transform: rotate(180deg); }
                .faq-answer {
                    padding-bottom: 1rem;
                    line-height: 1.625;
                    animation: fadeIn 0.2s ease-out;
                }
                "#}
            </style>
            <div class={classes!("container", "reveal", revealed.then(|| "revealed"))}>
                <div class="section-header">
                    <h2 class="gradient-text">{strings.faq_title}</h2>
                    <p class="muted">{strings.faq_subtitle}</p>
                </div>
                <div class="faq-list">
                    { for strings.faqs.iter().enumerate().map(|(index, entry)| html! {
                        <FaqItem
                            {index}
                            question={entry.question}
                            answer={entry.answer}
                            is_open={*open == Some(index)}
                            on_toggle={on_toggle.clone()}
                        />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_an_item_closes_the_other() {
        let open = toggle_open(None, 2);
        assert_eq!(open, Some(2));
        assert_eq!(toggle_open(open, 4), Some(4));
    }

    #[test]
    fn clicking_the_open_item_collapses_it() {
        assert_eq!(toggle_open(Some(3), 3), None);
    }
}
