use log::info;
use yew::prelude::*;

use crate::components::{
    courses::ExploreCourses, enquiry_form::EnquiryForm, faq::Faq, footer::Footer,
    hero::Hero, how_it_works::HowItWorks,
};
use crate::config::DOCUMENT_TITLE;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Title and scroll position only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                if let Some(document) = window.document() {
                    document.set_title(DOCUMENT_TITLE);
                }
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            info!("Landing page mounted");
            || ()
        },
        (),
    );

    html! {
        <main class="landing-page">
            <Hero />
            <ExploreCourses />
            <HowItWorks />
            <Faq />
            <EnquiryForm />
            <Footer />
        </main>
    }
}
