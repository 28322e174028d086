use dioxus::prelude::*;

use crate::content::GALLERY;
use crate::i18n;
use crate::t;

#[component]
pub fn GallerySection() -> Element {
    i18n::use_language();
    rsx! {
        section { class: "section gallery",
            div { class: "section__inner",
                header { class: "section__header reveal",
                    h2 { class: "section__title", {t!("gallery-title")} }
                    div { class: "section__rule" }
                    p { class: "section__subtitle", {t!("gallery-intro")} }
                }
                div { class: "gallery__grid",
                    for (index, image) in GALLERY.into_iter().enumerate() {
                        figure {
                            key: "{image.src}",
                            class: "gallery__item reveal reveal--zoom",
                            style: "--stagger: {index}",
                            img { src: image.src, alt: image.alt, "loading": "lazy" }
                            figcaption { class: "gallery__caption", "{image.alt}" }
                        }
                    }
                }
            }
        }
    }
}
