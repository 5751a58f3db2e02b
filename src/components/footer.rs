use chrono::Datelike;
use yew::prelude::*;

use super::scroll_effects::use_revealed;
use crate::i18n::use_strings;

const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("Facebook", "f"),
    ("Twitter", "𝕏"),
    ("Instagram", "◎"),
    ("LinkedIn", "in"),
];

pub fn copyright_line(year: i32, rights: &str) -> String {
    format!("© {} Eduverse. {}", year, rights)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let strings = use_strings();
    let footer_ref = use_node_ref();
    let revealed = use_revealed(footer_ref.clone());
    let year = chrono::Local::now().year();

    html! {
        <footer class={classes!("site-footer", "reveal", revealed.then(|| "revealed"))} ref={footer_ref}>
            <style>
                {r#"
                .site-footer {
                    position: relative;
                    border-top: 1px solid var(--border);
                    background: linear-gradient(to bottom, transparent, rgba(124, 58, 237, 0.05));
                }
                .footer-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 3rem;
                    padding: 4rem 0 3rem;
                }
                .footer-brand h3 { font-size: 1.5rem; font-weight: 700; margin-bottom: 1rem; }
                .footer-brand p { margin-bottom: 1.5rem; }
                .footer-column h4 { font-size: 1.125rem; font-weight: 600; margin-bottom: 1rem; }
                .footer-column ul { list-style: none; padding: 0; display: flex; flex-direction: column; gap: 0.75rem; }
                .footer-column a { color: var(--muted); text-decoration: none; transition: color 0.2s; }
                .footer-column a:hover { color: var(--primary); }
                .socials { display: flex; gap: 1rem; }
                .social-link {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 9999px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: inherit;
                    text-decoration: none;
                    font-weight: 700;
                    transition: transform 0.2s;
                }
                .social-link:hover { transform: translateY(-2px) scale(1.1); }
                .contact-item { display: flex; gap: 0.75rem; align-items: flex-start; }
                .footer-bottom {
                    padding: 2rem 0;
                    border-top: 1px solid var(--border);
                    text-align: center;
                }
                @media (max-width: 1024px) {
                    .footer-grid { grid-template-columns: repeat(2, 1fr); }
                }
                @media (max-width: 640px) {
                    .footer-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <h3 class="gradient-text">{"Eduverse"}</h3>
                        <p class="muted">{strings.footer_tagline}</p>
                        <div class="socials">
                            { for SOCIAL_LINKS.iter().map(|(name, glyph)| html! {
                                <a href="#" class="social-link glass hover-glow" aria-label={*name}>{*glyph}</a>
                            }) }
                        </div>
                    </div>

                    <div class="footer-column">
                        <h4>{strings.footer_learn}</h4>
                        <ul>
                            { for strings.footer_learn_links.iter().map(|item| html! {
                                <li><a href="#">{*item}</a></li>
                            }) }
                        </ul>
                    </div>

                    <div class="footer-column">
                        <h4>{strings.footer_company}</h4>
                        <ul>
                            { for strings.footer_company_links.iter().map(|item| html! {
                                <li><a href="#">{*item}</a></li>
                            }) }
                        </ul>
                    </div>

                    <div class="footer-column">
                        <h4>{strings.footer_contact_info}</h4>
                        <ul>
                            <li class="contact-item"><span>{"✉"}</span><span class="muted">{strings.footer_email}</span></li>
                            <li class="contact-item"><span>{"☎"}</span><span class="muted">{strings.footer_phone}</span></li>
                            <li class="contact-item"><span>{"📍"}</span><span class="muted">{strings.footer_address}</span></li>
                        </ul>
                    </div>
                </div>

                <div class="footer-bottom muted">
                    <p>{copyright_line(year, strings.footer_rights)}</p>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_year_and_rights() {
        assert_eq!(
            copyright_line(2025, "All rights reserved."),
            "© 2025 Eduverse. All rights reserved."
        );
    }
}
