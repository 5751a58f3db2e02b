use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{LOGO_SRC, NAV_SCROLL_THRESHOLD};
use crate::i18n::{use_strings, Lang, LangContext};
use crate::sections::{scroll_to_section, Section};

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub logged_in: bool,
    pub on_auth: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let NavbarProps { logged_in, on_auth } = props;
    let strings = use_strings();
    let lang_ctx = use_context::<LangContext>();
    let menu_open = use_state(|| false);
    let lang_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > NAV_SCROLL_THRESHOLD;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let toggle_lang = {
        let lang_open = lang_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            lang_open.set(!*lang_open);
        })
    };

    let auth_click = {
        let on_auth = on_auth.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            on_auth.emit(());
        })
    };

    let nav_links = Section::NAV.iter().map(|&section| {
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_section(section);
        });
        html! {
            <a href={section.href()} class="nav-link" {onclick}>
                {section.nav_label(strings)}
                <span class="nav-underline"></span>
            </a>
        }
    });

    let lang_items = Lang::ALL.iter().map(|&lang| {
        let active = lang_ctx.as_ref().map(|ctx| ctx.lang == lang).unwrap_or(false);
        let lang_ctx = lang_ctx.clone();
        let lang_open = lang_open.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            lang_open.set(false);
            if let Some(ctx) = &lang_ctx {
                ctx.set_lang.emit(lang);
            }
        });
        html! {
            <button class={classes!("lang-item", active.then(|| "active"))} lang={lang.code()} {onclick}>
                {lang.native_name()}
            </button>
        }
    });

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    background: #ffffff;
                    color: #000000;
                    border-bottom: 1px solid rgba(0, 0, 0, 0.08);
                    padding: 1rem 0;
                    transition: all 0.3s ease;
                    animation: navSlideDown 0.5s ease-out;
                }
                .top-nav.scrolled {
                    padding: 0.75rem 0;
                    box-shadow: 0 10px 15px rgba(124, 58, 237, 0.1);
                }
                @keyframes navSlideDown {
                    from { transform: translateY(-100px); }
                    to { transform: translateY(0); }
                }
                .nav-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    text-decoration: none;
                }
                .nav-logo img {
                    height: 3rem;
                    width: 3rem;
                }
                .nav-logo span {
                    font-size: 1.5rem;
                    font-weight: 700;
                }
                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-link {
                    position: relative;
                    color: rgba(0, 0, 0, 0.8);
                    font-weight: 500;
                    text-decoration: none;
                    transition: color 0.2s;
                }
                .nav-link:hover { color: #000; }
                .nav-underline {
                    position: absolute;
                    bottom: -2px;
                    left: 0;
                    width: 0;
                    height: 2px;
                    background: var(--primary);
                    transition: width 0.3s;
                }
                .nav-link:hover .nav-underline { width: 100%; }
                .nav-actions {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .lang-menu { position: relative; }
                .lang-dropdown {
                    position: absolute;
                    right: 0;
                    top: 2.75rem;
                    display: flex;
                    flex-direction: column;
                    min-width: 8rem;
                    padding: 0.25rem;
                    border-radius: 0.75rem;
                }
                .lang-item {
                    text-align: left;
                    padding: 0.5rem 0.75rem;
                    border: none;
                    background: transparent;
                    color: inherit;
                    border-radius: 0.5rem;
                    cursor: pointer;
                }
                .lang-item:hover, .lang-item.active { background: rgba(124, 58, 237, 0.15); }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: #000;
                }
                @media (max-width: 768px) {
                    .burger-menu { display: flex; }
                    .nav-links {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 1rem;
                        background: #ffffff;
                    }
                    .nav-links.mobile-menu-open { display: flex; }
                }
                "#}
            </style>
            <div class="nav-content">
                <a href={Section::Home.href()} class="nav-logo">
                    <img src={LOGO_SRC} alt="Eduverse Logo" />
                    <span class="gradient-text">{"Eduverse"}</span>
                </a>

                <div class={classes!("nav-links", (*menu_open).then(|| "mobile-menu-open"))}>
                    { for nav_links }
                </div>

                <div class="nav-actions">
                    <div class="lang-menu">
                        <button class="btn btn-ghost btn-icon" onclick={toggle_lang} aria-label={strings.nav_language}>
                            {"🌐"}
                        </button>
                        if *lang_open {
                            <div class="lang-dropdown glass">
                                { for lang_items }
                            </div>
                        }
                    </div>
                    if *logged_in {
                        <button class="btn btn-outline" onclick={auth_click}>
                            <span class="btn-icon-left">{"👤"}</span>
                            {strings.nav_logout}
                        </button>
                    } else {
                        <button class="btn btn-ghost" onclick={auth_click.clone()}>
                            {strings.nav_sign_in}
                        </button>
                        <button class="btn btn-primary" onclick={auth_click}>
                            {strings.nav_log_in}
                        </button>
                    }
                    <button class="burger-menu" onclick={toggle_menu}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </div>
        </nav>
    }
}
