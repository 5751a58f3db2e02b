const DEFAULT_INTAKE_URL: &str = "https://formspree.io/f/mldpyvng";

/// Formspree form receiving enquiries. Can be pointed elsewhere at build time
/// with `EDUVERSE_INTAKE_URL`.
pub fn get_intake_url() -> &'static str {
    match option_env!("EDUVERSE_INTAKE_URL") {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_INTAKE_URL,
    }
}

#[cfg(debug_assertions)]
pub fn get_log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> log::Level {
    log::Level::Info
}

pub const LOGGED_IN_KEY: &str = "eduverse_logged_in";
pub const USER_NAME_KEY: &str = "eduverse_user";

pub const DOCUMENT_TITLE: &str = "Eduverse - Where Learning Meets Innovation";

// px scrolled before the navbar collapses
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

pub const TOAST_DISMISS_MS: u32 = 5_000;
pub const VOICE_LISTEN_MS: u32 = 2_000;

pub const LOGO_SRC: &str = "/assets/EduVerse.png";
pub const HERO_VIDEO_SRC: &str = "/assets/SMG.mp4";
