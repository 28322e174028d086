use dioxus::prelude::*;

use crate::components::icons::{self, Icon};
use crate::content::ABOUT_IMAGE;
use crate::core::scroll::Anchor;
use crate::i18n;
use crate::t;

#[component]
pub fn AboutSection() -> Element {
    i18n::use_language();
    let values = [
        (icons::SMILE, t!("about-value-community-title"), t!("about-value-community-body")),
        (icons::SHIELD, t!("about-value-sourcing-title"), t!("about-value-sourcing-body")),
        (icons::CUP, t!("about-value-craft-title"), t!("about-value-craft-body")),
    ];

    rsx! {
        section { id: Anchor::About.id(), class: "section section--warm about",
            div { class: "section__inner",
                header { class: "section__header reveal",
                    h2 { class: "section__title", {t!("about-title")} }
                    div { class: "section__rule" }
                    p { class: "about__story", {t!("about-story")} }
                }
                div { class: "about__grid",
                    div { class: "about__image reveal reveal--left",
                        img { src: ABOUT_IMAGE, alt: t!("about-image-alt") }
                    }
                    div { class: "about__values reveal reveal--right",
                        h3 { {t!("about-values-title")} }
                        for (icon, heading, body) in values {
                            div { key: "{heading}", class: "about__value",
                                div { class: "about__value-icon", Icon { svg: icon } }
                                div {
                                    h4 { "{heading}" }
                                    p { "{body}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
