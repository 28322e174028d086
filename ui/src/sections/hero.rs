use dioxus::prelude::*;

use crate::components::icons::{self, Icon};
use crate::content::HERO_BACKGROUND;
use crate::core::scroll::{self, Anchor};
use crate::i18n;
use crate::t;

/// Full-height banner. Headline, subtitle and CTA fade up in sequence (CSS delays).
///
/// Without `on_cta` the button smooth-scrolls to the menu.
#[component]
pub fn HeroSection(
    title: Option<String>,
    subtitle: Option<String>,
    cta_text: Option<String>,
    background_image: Option<String>,
    on_cta: Option<EventHandler<MouseEvent>>,
) -> Element {
    i18n::use_language();
    let title = title.unwrap_or_else(|| t!("hero-title"));
    let subtitle = subtitle.unwrap_or_else(|| t!("hero-subtitle"));
    let cta_text = cta_text.unwrap_or_else(|| t!("hero-cta"));
    let background = background_image.unwrap_or_else(|| HERO_BACKGROUND.to_string());

    let on_click = move |evt: MouseEvent| match on_cta {
        Some(handler) => handler.call(evt),
        None => scroll::scroll_into_view(Anchor::Menu),
    };

    rsx! {
        section { class: "hero",
            div {
                class: "hero__backdrop",
                style: "background-image: url('{background}');",
                div { class: "hero__overlay" }
            }
            div { class: "hero__content animate-rise",
                h1 { class: "hero__title animate-rise animate-delay-1", "{title}" }
                p { class: "hero__subtitle animate-rise animate-delay-2", "{subtitle}" }
                div { class: "animate-rise animate-delay-3",
                    button {
                        r#type: "button",
                        class: "button button--accent button--large hero__cta",
                        onclick: on_click,
                        "{cta_text}"
                        Icon { svg: icons::ARROW_DOWN, class: "hero__cta-icon" }
                    }
                }
            }
            div { class: "hero__scroll-hint", aria_label: t!("hero-scroll-hint"),
                Icon { svg: icons::ARROW_DOWN }
            }
        }
    }
}
