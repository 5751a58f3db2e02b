use log::debug;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::i18n::Strings;

/// Anchored sections of the page, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    Courses,
    HowItWorks,
    Faq,
    Contact,
}

impl Section {
    /// Sections linked from the navbar.
    pub const NAV: [Section; 4] = [
        Section::Home,
        Section::Courses,
        Section::HowItWorks,
        Section::Contact,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Courses => "courses",
            Section::HowItWorks => "how-it-works",
            Section::Faq => "faq",
            Section::Contact => "contact",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.id())
    }

    pub fn nav_label(&self, strings: &Strings) -> &'static str {
        match self {
            Section::Home => strings.nav_home,
            Section::Courses => strings.nav_courses,
            Section::HowItWorks => strings.nav_how_it_works,
            Section::Faq => strings.faq_title,
            Section::Contact => strings.nav_contact,
        }
    }
}

/// Smooth-scrolls to the section. Missing elements are ignored.
pub fn scroll_to_section(section: Section) {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(section.id()));

    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => debug!("No element with id {}", section.id()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Lang;

    #[test]
    fn anchors_match_page_ids() {
        assert_eq!(Section::HowItWorks.id(), "how-it-works");
        assert_eq!(Section::Contact.href(), "#contact");
    }

    #[test]
    fn navbar_links_skip_faq() {
        assert!(!Section::NAV.contains(&Section::Faq));
        let labels: Vec<_> = Section::NAV
            .iter()
            .map(|s| s.nav_label(Lang::En.strings()))
            .collect();
        assert_eq!(labels, ["Home", "Courses", "How It Works", "Contact"]);
    }
}
