use dioxus::prelude::*;

use crate::content::BRAND_NAME;
use crate::i18n;
use crate::t;

/// Shared theme (tokens, layout, sections). Desktop builds embed the same file.
const THEME_CSS: Asset = asset!("/assets/theme/main.css");
pub const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

/// Document title, description and the shared stylesheet.
///
/// Release native builds inline the theme so packaged binaries don't depend on
/// an asset directory being shipped next to them.
#[component]
pub fn SiteHead() -> Element {
    i18n::use_language();
    let description = t!("site-description");

    rsx! {
        document::Title { "{BRAND_NAME}" }
        document::Meta { name: "description", content: "{description}" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Link { rel: "stylesheet", href: THEME_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{THEME_CSS_INLINE}" }
        }
    }
}
