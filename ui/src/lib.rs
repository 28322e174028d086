//! Shared UI crate for the Brew & Bloom site. Sections, content and views live here;
//! the platform crates only launch and route.

pub mod content;
pub mod core;
pub mod i18n;
pub mod sections;
pub mod views;

pub mod components {
    // Site navbar with scroll tracking and locale switcher (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;

    // Inline SVG icon set (components/icons.rs)
    pub mod icons;
    pub use icons::Icon;

    // Stylesheets and document metadata (components/site_head.rs)
    pub mod site_head;
    pub use site_head::SiteHead;
}

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
