//! Inline SVG icons (stroke style, 24×24 viewbox). Rendered through `Icon`.

use dioxus::prelude::*;

macro_rules! stroke_icon {
    ($($body:literal),+ $(,)?) => {
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="100%" height="100%" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
            $($body),+,
            "</svg>"
        )
    };
}

pub const MENU: &str = stroke_icon!(
    r#"<line x1="4" y1="6" x2="20" y2="6"/>"#,
    r#"<line x1="4" y1="12" x2="20" y2="12"/>"#,
    r#"<line x1="4" y1="18" x2="20" y2="18"/>"#,
);

pub const CLOSE: &str = stroke_icon!(r#"<path d="M18 6 6 18"/>"#, r#"<path d="m6 6 12 12"/>"#);

pub const ARROW_DOWN: &str = stroke_icon!(r#"<path d="M12 5v14"/>"#, r#"<path d="m19 12-7 7-7-7"/>"#);

pub const SEARCH: &str = stroke_icon!(
    r#"<circle cx="11" cy="11" r="8"/>"#,
    r#"<path d="m21 21-4.3-4.3"/>"#,
);

pub const SEND: &str = stroke_icon!(
    r#"<path d="m22 2-7 20-4-9-9-4Z"/>"#,
    r#"<path d="M22 2 11 13"/>"#,
);

pub const MAP_PIN: &str = stroke_icon!(
    r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/>"#,
    r#"<circle cx="12" cy="10" r="3"/>"#,
);

pub const PHONE: &str = stroke_icon!(
    r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"/>"#,
);

pub const MAIL: &str = stroke_icon!(
    r#"<rect x="2" y="4" width="20" height="16" rx="2"/>"#,
    r#"<path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#,
);

pub const CLOCK: &str = stroke_icon!(
    r#"<circle cx="12" cy="12" r="10"/>"#,
    r#"<polyline points="12 6 12 12 16 14"/>"#,
);

pub const INSTAGRAM: &str = stroke_icon!(
    r#"<rect x="2" y="2" width="20" height="20" rx="5" ry="5"/>"#,
    r#"<path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"/>"#,
    r#"<line x1="17.5" y1="6.5" x2="17.51" y2="6.5"/>"#,
);

pub const FACEBOOK: &str = stroke_icon!(
    r#"<path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"/>"#,
);

pub const TWITTER: &str = stroke_icon!(
    r#"<path d="M23 3a10.9 10.9 0 0 1-3.14 1.53 4.48 4.48 0 0 0-7.86 3v1A10.66 10.66 0 0 1 3 4s-4 9 5 13a11.64 11.64 0 0 1-7 2c9 5 20 0 20-11.5a4.5 4.5 0 0 0-.08-.83A7.72 7.72 0 0 0 23 3z"/>"#,
);

// About section value markers.
pub const SMILE: &str = stroke_icon!(
    r#"<path d="M12 22c5.523 0 10-4.477 10-10S17.523 2 12 2 2 6.477 2 12s4.477 10 10 10z"/>"#,
    r#"<path d="M8 14s1.5 2 4 2 4-2 4-2"/>"#,
    r#"<line x1="9" y1="9" x2="9.01" y2="9"/>"#,
    r#"<line x1="15" y1="9" x2="15.01" y2="9"/>"#,
);

pub const SHIELD: &str = stroke_icon!(r#"<path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"/>"#);

pub const CUP: &str = stroke_icon!(
    r#"<path d="M18 8h1a4 4 0 0 1 0 8h-1"/>"#,
    r#"<path d="M2 8h16v9a4 4 0 0 1-4 4H6a4 4 0 0 1-4-4V8z"/>"#,
    r#"<line x1="6" y1="1" x2="6" y2="4"/>"#,
    r#"<line x1="10" y1="1" x2="10" y2="4"/>"#,
    r#"<line x1="14" y1="1" x2="14" y2="4"/>"#,
);

/// Decorative icon; hidden from assistive tech (pair it with a text label or `aria-label`).
#[component]
pub fn Icon(svg: &'static str, class: Option<String>) -> Element {
    let extra = class.unwrap_or_default();
    rsx! {
        span {
            class: "icon {extra}",
            aria_hidden: "true",
            dangerous_inner_html: svg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_are_complete_svg_documents() {
        for svg in [
            MENU, CLOSE, ARROW_DOWN, SEARCH, SEND, MAP_PIN, PHONE, MAIL, CLOCK, INSTAGRAM,
            FACEBOOK, TWITTER, SMILE, SHIELD, CUP,
        ] {
            assert!(svg.starts_with("<svg "));
            assert!(svg.ends_with("</svg>"));
            assert!(svg.contains("viewBox=\"0 0 24 24\""));
        }
    }
}
