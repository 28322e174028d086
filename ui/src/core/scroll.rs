//! Navigation scroll controller.
//!
//! `NavState` is pure and owned by the navbar as a signal. The browser side
//! (reading `window.scrollY`, smooth scrolling) goes through `document::eval`
//! so the same code drives both the web and the desktop webview.

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

/// The navbar switches to its solid style once the page is scrolled past this offset.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Installs a passive scroll listener that reports `window.scrollY` back to Rust.
/// The initial offset is sent immediately so a reload mid-page renders correctly.
///
/// Only one listener lives on `window`: a remounted navbar replaces the previous
/// one, whose eval channel is gone.
pub const SCROLL_LISTENER_JS: &str = r#"
if (window.__bbScroll) {
    window.removeEventListener("scroll", window.__bbScroll);
}
window.__bbScroll = () => dioxus.send(window.scrollY);
window.addEventListener("scroll", window.__bbScroll, { passive: true });
window.__bbScroll();
"#;

/// Marks `.reveal` elements visible the first time a third of them enters the
/// viewport. The `js-reveal` root class gates the hidden start state, so content
/// stays visible if this never runs.
pub const REVEAL_OBSERVER_JS: &str = r#"
document.documentElement.classList.add("js-reveal");
const observer = new IntersectionObserver((entries) => {
    for (const entry of entries) {
        if (entry.isIntersecting) {
            entry.target.classList.add("reveal--visible");
            observer.unobserve(entry.target);
        }
    }
}, { threshold: 0.3 });
document.querySelectorAll(".reveal:not(.reveal--visible)").forEach((el) => observer.observe(el));
"#;

/// Named scroll targets on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Hero,
    Menu,
    About,
    Contact,
}

impl Anchor {
    /// Navbar order.
    pub const ALL: [Anchor; 4] = [Anchor::Hero, Anchor::Menu, Anchor::About, Anchor::Contact];

    /// DOM id of the section wrapper.
    pub fn id(self) -> &'static str {
        match self {
            Anchor::Hero => "hero-section",
            Anchor::Menu => "menu-section",
            Anchor::About => "about-section",
            Anchor::Contact => "contact",
        }
    }

    /// Fragment used as the link `href` (progressive fallback when scripting is off).
    pub fn href(self) -> &'static str {
        match self {
            Anchor::Hero => "#",
            Anchor::Menu => "#menu-section",
            Anchor::About => "#about-section",
            Anchor::Contact => "#contact",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    scrolled: bool,
    mobile_menu_open: bool,
}

impl NavState {
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    /// Feed a new scroll offset. Returns `true` when the scrolled flag flipped.
    pub fn observe_scroll(&mut self, offset_px: f64) -> bool {
        let scrolled = offset_px > SCROLL_THRESHOLD_PX;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    /// The state after scrolling to `offset_px`, or `None` when nothing visible
    /// changes. Lets the navbar skip signal writes for most scroll events.
    pub fn after_scroll(mut self, offset_px: f64) -> Option<NavState> {
        self.observe_scroll(offset_px).then_some(self)
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Picking any nav link closes the mobile menu.
    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }
}

/// Smooth-scroll the viewport to `anchor`. Missing targets are a no-op.
pub fn scroll_into_view(anchor: Anchor) {
    debug!(target_id = anchor.id(), "smooth scroll to anchor");
    let script = format!(
        r#"document.getElementById("{}")?.scrollIntoView({{ behavior: "smooth" }});"#,
        anchor.id()
    );
    let _ = document::eval(&script);
}

/// Smooth-scroll back to the top of the page.
pub fn scroll_to_top() {
    let _ = document::eval(r#"window.scrollTo({ top: 0, behavior: "smooth" });"#);
}
