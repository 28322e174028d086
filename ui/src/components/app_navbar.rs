use crate::components::icons::{self, Icon};
use crate::content::BRAND_NAME;
use crate::core::scroll::{self, Anchor, NavState, SCROLL_LISTENER_JS};
use crate::i18n;
use crate::t;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

// Navbar stylesheet (inlined as well in release native builds)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Fixed site navbar.
///
/// Tracks the page scroll offset through a `document::eval` listener (solid
/// background once past the threshold), owns the mobile menu flag, and
/// smooth-scrolls to the home page anchors. The locale switcher writes to the
/// global language signal when the platform provides one.
#[component]
pub fn AppNavbar() -> Element {
    i18n::init();

    let mut nav = use_signal(NavState::default);
    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Reactive dependency on the global language code (if provided)
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    use_future(move || async move {
        let mut listener = document::eval(SCROLL_LISTENER_JS);
        while let Ok(offset) = listener.recv::<f64>().await {
            // Write only on a flag flip; every write re-renders the navbar.
            let next = nav.peek().after_scroll(offset);
            if let Some(next) = next {
                debug!(offset, scrolled = next.is_scrolled(), "navbar scroll state changed");
                nav.set(next);
            }
        }
    });

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        if i18n::set_language(&val).is_ok() {
            current_lang.set(val.clone());
            if let Some(mut code) = lang_code_ctx {
                code.set(val);
            }
        }
    };

    let state = nav();
    let navbar_class = if state.is_scrolled() {
        "navbar navbar--scrolled"
    } else {
        "navbar"
    };
    let toggle_icon = if state.is_mobile_menu_open() {
        icons::CLOSE
    } else {
        icons::MENU
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        nav { id: "navbar", class: "{navbar_class}",
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                a {
                    class: "navbar__brand",
                    href: "#",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        scroll::scroll_to_top();
                    },
                    "{BRAND_NAME}"
                }

                div { class: "navbar__links",
                    for anchor in Anchor::ALL {
                        {render_nav_link(nav, anchor, "navbar__link")}
                    }
                }

                div { class: "navbar__actions",
                    if show_switcher {
                        div { class: "navbar__locale",
                            label {
                                class: "visually-hidden",
                                r#for: "locale-select",
                                {t!("nav-language-label")}
                            }
                            select {
                                id: "locale-select",
                                value: "{current_lang()}",
                                oninput: on_change,
                                for code in langs() {
                                    option { key: "{code}", value: "{code}", "{code}" }
                                }
                            }
                        }
                    }
                    button {
                        r#type: "button",
                        class: "navbar__toggle",
                        aria_label: t!("nav-toggle"),
                        aria_expanded: "{state.is_mobile_menu_open()}",
                        onclick: move |_| nav.with_mut(NavState::toggle_mobile_menu),
                        Icon { svg: toggle_icon }
                    }
                }
            }

            if state.is_mobile_menu_open() {
                div { class: "navbar__mobile",
                    for anchor in Anchor::ALL {
                        {render_nav_link(nav, anchor, "navbar__mobile-link")}
                    }
                }
            }
        }
    }
}

fn render_nav_link(mut nav: Signal<NavState>, anchor: Anchor, class: &'static str) -> Element {
    rsx! {
        a {
            key: "{anchor.id()}",
            class: "{class}",
            href: anchor.href(),
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                nav.with_mut(NavState::close_mobile_menu);
                scroll::scroll_into_view(anchor);
            },
            {nav_label(anchor)}
        }
    }
}

fn nav_label(anchor: Anchor) -> String {
    match anchor {
        Anchor::Hero => t!("nav-home"),
        Anchor::Menu => t!("nav-menu"),
        Anchor::About => t!("nav-about"),
        Anchor::Contact => t!("nav-contact"),
    }
}
