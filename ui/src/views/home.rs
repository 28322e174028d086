use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::components::{AppNavbar, SiteHead};
use crate::core::scroll::{Anchor, REVEAL_OBSERVER_JS};
use crate::i18n;
use crate::sections::{
    AboutSection, ContactSection, GallerySection, HeroSection, MenuSection, SiteFooter,
    TestimonialsSection,
};

/// The whole site: sections in fixed vertical order, with the scroll anchors the
/// navbar targets.
#[component]
pub fn Home() -> Element {
    let lang_current = i18n::use_language();
    debug!(lang = %lang_current, "home render");

    // Reads no signals, so it runs once after the sections first mount. A
    // language switch re-renders in place and keeps the revealed classes.
    use_effect(move || {
        let _ = document::eval(REVEAL_OBSERVER_JS);
    });

    rsx! {
        SiteHead {}
        div { class: "site",
            div { id: Anchor::Hero.id(),
                AppNavbar {}
                HeroSection {}
            }
            div { id: Anchor::Menu.id(), MenuSection {} }
            AboutSection {}
            GallerySection {}
            TestimonialsSection {}
            ContactSection {}
            SiteFooter {}
        }
    }
}
