use dioxus::prelude::*;

use crate::components::SiteHead;
use crate::i18n;
use crate::t;

/// Fallback for unknown paths. `segments` is the unmatched route, shown back to the visitor.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    i18n::use_language();
    let path = format!("/{}", segments.join("/"));

    rsx! {
        SiteHead {}
        section { class: "page page-not-found",
            h1 { {t!("not-found-title")} }
            p { {t!("not-found-body", path = path)} }
            a { class: "button button--primary", href: "/", {t!("not-found-back")} }
        }
    }
}
