#![cfg(test)]
//! The shared theme is inlined into release desktop builds (`ui::components::site_head`).
//! A broken path or truncated file would only show up at runtime as an unstyled window.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(!EMBEDDED_CSS.trim().is_empty(), "theme stylesheet is empty");
    assert!(!NAVBAR_CSS.trim().is_empty(), "navbar stylesheet is empty");
}

#[test]
fn embedded_css_contains_expected_tokens() {
    let required = ["--color-bg", "--color-amber-600", "body {", ".button--primary"];
    for token in required {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}

#[test]
fn navbar_css_covers_scrolled_and_mobile_states() {
    for token in [
        ".navbar {",
        ".navbar--scrolled",
        ".navbar__toggle",
        ".navbar__mobile",
        "@media (max-width: 768px)",
    ] {
        assert!(NAVBAR_CSS.contains(token), "navbar.css is missing `{token}`");
    }
}

#[test]
fn ui_crate_inlines_the_same_theme() {
    assert_eq!(ui::components::site_head::THEME_CSS_INLINE, EMBEDDED_CSS);
}
