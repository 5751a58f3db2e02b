use log::{info, warn};
use stylist::yew::Global;
use stylist::StyleSource;
use yew::prelude::*;

mod config;
mod i18n;
mod sections;
mod enquiry {
    pub mod client;
    pub mod draft;
    pub mod workflow;
}
mod auth {
    pub mod session;
}
mod components {
    pub mod courses;
    pub mod enquiry_form;
    pub mod faq;
    pub mod footer;
    pub mod hero;
    pub mod how_it_works;
    pub mod navbar;
    pub mod scroll_effects;
    pub mod toast;
}
mod pages {
    pub mod landing;
}

use auth::session::{prompt_for_name, AuthSession, BrowserStorage};
use components::navbar::Navbar;
use i18n::{Lang, LangContext};
use pages::landing::Landing;

const GLOBAL_CSS: &str = r#"
    :root {
        --primary: #7c3aed;
        --secondary: #ec4899;
        --border: rgba(148, 163, 184, 0.25);
        --muted: #94a3b8;
        --background: #0b0b14;
        --foreground: #f8fafc;
    }
    *, *::before, *::after { box-sizing: border-box; }
    html { scroll-behavior: smooth; }
    body {
        margin: 0;
        background: var(--background);
        color: var(--foreground);
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        overflow-x: hidden;
    }
    h1, h2, h3, h4, p { margin: 0; }
    .landing-page { min-height: 100vh; }
    .container { max-width: 1280px; margin: 0 auto; padding: 0 1rem; position: relative; z-index: 10; }
    .section-header { text-align: center; margin-bottom: 4rem; }
    .section-header h2 { font-size: clamp(2.25rem, 5vw, 3.75rem); font-weight: 700; margin-bottom: 1rem; }
    .section-header p { font-size: 1.25rem; }
    .muted { color: var(--muted); }
    .gradient-text {
        background: linear-gradient(45deg, var(--primary), var(--secondary));
        -webkit-background-clip: text;
        background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .glass {
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid var(--border);
        backdrop-filter: blur(12px);
    }
    .hover-glow { transition: box-shadow 0.3s ease; }
    .hover-glow:hover { box-shadow: 0 0 24px rgba(124, 58, 237, 0.45); }
    .btn {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.5rem 1rem;
        border-radius: 0.5rem;
        border: 1px solid transparent;
        font: inherit;
        font-weight: 500;
        cursor: pointer;
        color: inherit;
        background: transparent;
        transition: background 0.2s, opacity 0.2s;
    }
    .btn-primary { background: var(--primary); color: #ffffff; }
    .btn-primary:hover { opacity: 0.9; }
    .btn-outline { border-color: rgba(124, 58, 237, 0.5); }
    .btn-outline:hover { background: rgba(124, 58, 237, 0.1); }
    .btn-ghost:hover { background: rgba(124, 58, 237, 0.1); }
    .btn-icon { padding: 0.5rem; }
    .reveal { opacity: 0; }
    .reveal.revealed { animation: fadeUp 0.8s ease-out forwards; }
    .fade-up { opacity: 0; animation: fadeUp 0.8s ease-out forwards; }
    @keyframes fadeUp {
        from { opacity: 0; transform: translateY(30px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes fadeIn {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    @keyframes bounce {
        0%, 100% { transform: translate(-50%, 0); }
        50% { transform: translate(-50%, 10px); }
    }
    @keyframes spin { to { transform: rotate(360deg); } }
    @keyframes glowPulse {
        0%, 100% { box-shadow: 0 0 0 rgba(124, 58, 237, 0); }
        50% { box-shadow: 0 0 24px rgba(124, 58, 237, 0.6); }
    }
"#;

fn global_styles() -> Html {
    match StyleSource::try_from(GLOBAL_CSS) {
        Ok(css) => html! { <Global {css} /> },
        Err(e) => {
            warn!("Could not parse global stylesheet: {}", e);
            html! {}
        }
    }
}

#[function_component]
fn App() -> Html {
    let session = use_state(|| AuthSession::load(&BrowserStorage));
    let lang = use_state(Lang::default);

    let lang_ctx = {
        let lang_setter = lang.clone();
        LangContext {
            lang: *lang,
            set_lang: Callback::from(move |next: Lang| {
                info!("Switching language to {}", next.code());
                lang_setter.set(next);
            }),
        }
    };

    let handle_auth = {
        let session = session.clone();
        let prompt = lang.strings().login_prompt;
        Callback::from(move |_| {
            let mut next = (*session).clone();
            match next.toggle(&BrowserStorage, || prompt_for_name(prompt)) {
                Ok(()) => session.set(next),
                Err(e) => warn!("Auth toggle failed: {}", e),
            }
        })
    };

    html! {
        <ContextProvider<LangContext> context={lang_ctx}>
            { global_styles() }
            <Navbar logged_in={session.is_logged_in()} on_auth={handle_auth} />
            <Landing />
        </ContextProvider<LangContext>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
