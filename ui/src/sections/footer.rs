use dioxus::prelude::*;

use crate::components::icons::Icon;
use crate::content::{self, BRAND_NAME, BUSINESS_HOURS, SOCIAL_LINKS};
use crate::core::format;
use crate::sections::contact::view::day_range_label;
use crate::i18n;
use crate::t;

#[component]
pub fn SiteFooter() -> Element {
    i18n::use_language();
    let year = format::copyright_year();

    rsx! {
        footer { class: "site-footer",
            div { class: "section__inner site-footer__grid",
                div { class: "site-footer__brand",
                    h3 { "{BRAND_NAME}" }
                    p { {t!("footer-tagline")} }
                    div { class: "site-footer__social",
                        for link in SOCIAL_LINKS {
                            a {
                                key: "{link.network}",
                                href: link.url,
                                aria_label: t!("contact-follow-on", network = link.network),
                                Icon { svg: link.icon }
                            }
                        }
                    }
                }

                div {
                    h4 { {t!("footer-hours-title")} }
                    ul {
                        for row in BUSINESS_HOURS {
                            li { key: "{row.hours}", "{day_range_label(row.days)}: {row.hours}" }
                        }
                    }
                }

                div {
                    h4 { {t!("footer-contact-title")} }
                    ul {
                        li { "{content::ADDRESS}" }
                        li { "{content::EMAIL}" }
                        li { "{content::PHONE}" }
                    }
                }

                div {
                    h4 { {t!("footer-newsletter-title")} }
                    p { {t!("footer-newsletter-body")} }
                    form {
                        class: "site-footer__newsletter",
                        onsubmit: move |evt: FormEvent| evt.prevent_default(),
                        input {
                            r#type: "email",
                            class: "input",
                            placeholder: t!("footer-newsletter-placeholder"),
                        }
                        button { r#type: "submit", class: "button button--accent",
                            {t!("footer-join")}
                        }
                    }
                }
            }
            div { class: "site-footer__legal",
                p { {t!("footer-copyright", year = year)} }
            }
        }
    }
}
