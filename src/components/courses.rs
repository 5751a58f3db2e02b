use yew::prelude::*;

use super::scroll_effects::{interpolate, use_scroll_progress};
use crate::i18n::use_strings;
use crate::sections::Section;

pub struct Course {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub gradient: (&'static str, &'static str),
}

pub const COURSES: [Course; 6] = [
    Course {
        icon: "📖",
        title: "Elementary Education",
        description: "1st-5th Grade interactive learning with games and quizzes",
        gradient: ("#3b82f6", "#06b6d4"),
    },
    Course {
        icon: "🎓",
        title: "Middle School",
        description: "6th-8th Grade comprehensive curriculum",
        gradient: ("#a855f7", "#ec4899"),
    },
    Course {
        icon: "💻",
        title: "High School",
        description: "9th-12th Grade advanced courses and AP classes",
        gradient: ("#22c55e", "#10b981"),
    },
    Course {
        icon: "🎨",
        title: "Creative Arts",
        description: "Design, music, and digital arts programs",
        gradient: ("#f97316", "#ef4444"),
    },
    Course {
        icon: "💼",
        title: "Professional Certifications",
        description: "Industry-recognized certificates and skills",
        gradient: ("#eab308", "#f59e0b"),
    },
    Course {
        icon: "🌐",
        title: "University Degrees",
        description: "Fully accredited bachelor and master programs",
        gradient: ("#6366f1", "#a855f7"),
    },
];

impl Course {
    fn gradient_css(&self, direction: &str) -> String {
        format!(
            "background: linear-gradient({}, {}, {});",
            direction, self.gradient.0, self.gradient.1
        )
    }
}

#[function_component(ExploreCourses)]
pub fn explore_courses() -> Html {
    let strings = use_strings();
    let section_ref = use_node_ref();
    let progress = use_scroll_progress(section_ref.clone());

    let opacity = interpolate(progress, &[(0.0, 0.0), (0.2, 1.0), (0.8, 1.0), (1.0, 0.0)]);
    let scale = interpolate(progress, &[(0.0, 0.8), (0.2, 1.0)]);

    html! {
        <section id={Section::Courses.id()} class="courses-section" ref={section_ref}>
            <style>
                {r#"
                .courses-section {
                    position: relative;
                    padding: 6rem 0;
                    overflow: hidden;
                    background: linear-gradient(to bottom, transparent, rgba(124, 58, 237, 0.05), transparent);
                }
                .courses-track {
                    display: flex;
                    gap: 1.5rem;
                    overflow-x: auto;
                    padding-bottom: 2rem;
                    scroll-snap-type: x mandatory;
                    scrollbar-width: none;
                }
                .courses-track::-webkit-scrollbar { display: none; }
                .course-card {
                    flex-shrink: 0;
                    width: 20rem;
                    scroll-snap-align: center;
                    padding: 1.5rem;
                    border-radius: 1rem;
                    transition: transform 0.3s ease;
                    opacity: 0;
                    animation: slideInRight 0.6s ease-out forwards;
                }
                .course-card:hover { transform: scale(1.05) rotateY(5deg); }
                .course-icon {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 0.75rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2rem;
                    margin-bottom: 1rem;
                    transition: transform 0.3s;
                }
                .course-card:hover .course-icon { transform: scale(1.1); }
                .course-card h3 { font-size: 1.5rem; font-weight: 700; margin-bottom: 0.75rem; }
                .course-line {
                    height: 0.25rem;
                    border-radius: 9999px;
                    margin-top: 1rem;
                    width: 0;
                    animation: growWidth 0.8s ease-out forwards;
                }
                @keyframes slideInRight {
                    from { opacity: 0; transform: translateX(100px); }
                    to { opacity: 1; transform: translateX(0); }
                }
                @keyframes growWidth {
                    to { width: 100%; }
                }
                .scroll-hint { text-align: center; margin-top: 2rem; font-size: 0.875rem; }
                "#}
            </style>
            <div
                class="container"
                style={format!("opacity: {:.3}; transform: scale({:.3});", opacity, scale)}
            >
                <div class="section-header">
                    <h2 class="gradient-text">{strings.courses_title}</h2>
                    <p class="muted">{strings.courses_subtitle}</p>
                </div>

                <div class="courses-track">
                    { for COURSES.iter().enumerate().map(|(index, course)| html! {
                        <div
                            class="course-card glass hover-glow"
                            style={format!("animation-delay: {}ms;", index * 100)}
                        >
                            <div class="course-icon" style={course.gradient_css("to bottom right")}>
                                {course.icon}
                            </div>
                            <h3>{course.title}</h3>
                            <p class="muted">{course.description}</p>
                            <div
                                class="course-line"
                                style={format!("{} animation-delay: {}ms;", course.gradient_css("to right"), index * 100 + 300)}
                            ></div>
                        </div>
                    }) }
                </div>

                <p class="scroll-hint muted">{"← Scroll horizontally to explore all courses →"}</p>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_has_six_distinct_courses() {
        let mut titles: Vec<_> = COURSES.iter().map(|c| c.title).collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), 6);
    }

    #[test]
    fn gradient_uses_both_colours() {
        let css = COURSES[0].gradient_css("to right");
        assert_eq!(css, "background: linear-gradient(to right, #3b82f6, #06b6d4);");
    }
}
