use dioxus::prelude::*;

use crate::content::TESTIMONIALS;
use crate::i18n;
use crate::t;

#[component]
pub fn TestimonialsSection() -> Element {
    i18n::use_language();
    rsx! {
        section { class: "section section--muted testimonials",
            div { class: "section__inner",
                header { class: "section__header reveal",
                    h2 { class: "section__title", {t!("testimonials-title")} }
                    div { class: "section__rule" }
                }
                div { class: "testimonials__grid",
                    for (index, entry) in TESTIMONIALS.into_iter().enumerate() {
                        blockquote {
                            key: "{entry.name}",
                            class: "testimonial reveal",
                            style: "--stagger: {index}",
                            img { class: "testimonial__avatar", src: entry.avatar, alt: entry.name }
                            p { class: "testimonial__quote", "“{entry.quote}”" }
                            footer {
                                cite { class: "testimonial__name", "{entry.name}" }
                                span { class: "testimonial__role", "{entry.role}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
