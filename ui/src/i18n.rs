//! Internationalization (i18n) support for `brewbloom-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/brewbloom_ui.ftl   (fallback/reference)
//!   es-ES/brewbloom_ui.ftl
//!   fr-FR/brewbloom_ui.ftl
//! ```
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! crate::i18n::init(); // idempotent
//! let label = t!("nav-menu");
//! let footer = t!("footer-copyright", year = 2025);
//! ```
//!
//! To add a locale, copy `en-US/brewbloom_ui.ftl` into `i18n/<lang-id>/`,
//! translate the values (keep IDs and variables identical), register the file in
//! `tests/i18n_missing_keys.rs` and run the tests.
//!
//! Catalog entries and testimonials are content, not UI copy, and stay untranslated.
use std::sync::Once;

use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-menu")
///     t!("contact-follow-on", network = "Instagram")
///
/// Expands to `fl!(&*LOADER, ...)` so every lookup routes through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain. `fl!` derives it from the package name with `-` mapped to `_`,
/// so the fallback file is `i18n/en-US/brewbloom_ui.ftl`.
const DOMAIN: &str = "brewbloom_ui";

/// Fallback locale tag.
pub const FALLBACK_LANGUAGE: &str = "en-US";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = select_languages(&requested) {
            warn!("failed selecting languages ({err}); continuing with fallback");
        }
    });
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()),
    };
    select_languages(&[lang])?;
    info!(language = tag, "switched language");
    Ok(())
}

/// Load `requested` into the global loader.
///
/// Bundles are rebuilt on every selection, so the isolation setting has to be
/// reapplied each time to keep placeables free of bidi marks.
fn select_languages(requested: &[LanguageIdentifier]) -> Result<(), i18n_embed::I18nEmbedError> {
    i18n_embed::select(&*LOADER, &Localizations, requested)?;
    LOADER.set_use_isolating(false);
    Ok(())
}

/// Subscribe the calling component to the global language code provided by the
/// platform shell, so its `t!` lookups re-render after a switch.
///
/// Without a provider this reads the loader directly and never re-renders.
pub fn use_language() -> String {
    match try_use_context::<Signal<String>>() {
        Some(code) => code(),
        None => current_language(),
    }
}

/// Tag of the language currently loaded (falls back to `en-US`).
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
