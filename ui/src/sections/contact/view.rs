use dioxus::prelude::*;

use crate::components::icons::{self, Icon};
use crate::content::{self, DayRange, BUSINESS_HOURS, SOCIAL_LINKS};
use crate::core::scroll::Anchor;
use crate::i18n;
use crate::t;

use super::form::{process_events, ContactEvent, ContactForm, Field, SubmitStatus};

/// Contact form, map, details, opening hours, social links and newsletter box.
///
/// Submit/dismiss go through one coroutine so they apply in order; the
/// coroutine (and any pending delay) is dropped with the section.
#[component]
pub fn ContactSection(class: Option<String>) -> Element {
    i18n::use_language();
    let mut form = use_signal(ContactForm::default);

    let events = use_coroutine(move |rx: UnboundedReceiver<ContactEvent>| async move {
        process_events(&mut form, rx).await;
    });

    let extra_class = class.unwrap_or_default();

    rsx! {
        section { id: Anchor::Contact.id(), class: "section contact {extra_class}",
            div { class: "section__inner",
                header { class: "section__header",
                    h2 { class: "section__title", {t!("contact-title")} }
                    p { class: "section__subtitle", {t!("contact-intro")} }
                }

                div { class: "contact__grid",
                    ContactFormCard {
                        form,
                        on_event: move |event: ContactEvent| events.send(event),
                    }

                    div { class: "contact__aside",
                        div { class: "contact__map",
                            iframe {
                                src: content::MAP_EMBED_URL,
                                width: "100%",
                                height: "100%",
                                style: "border: 0;",
                                title: t!("contact-map-title"),
                                "loading": "lazy",
                                "referrerpolicy": "no-referrer-when-downgrade",
                            }
                        }
                        ContactDetails {}
                        NewsletterCard {}
                    }
                }
            }
        }
    }
}

/// The form card: editable fields, or the success panel once submitted.
///
/// Field edits write `form` directly; submit and dismiss are handed to `on_event`.
#[component]
pub fn ContactFormCard(form: Signal<ContactForm>, on_event: EventHandler<ContactEvent>) -> Element {
    i18n::use_language();
    let snapshot = form();

    rsx! {
        div { class: "card contact__form-card",
            div { class: "card__content",
                if snapshot.status() == SubmitStatus::Submitted {
                    div { class: "contact__success",
                        div { class: "contact__success-icon",
                            Icon { svg: icons::SEND }
                        }
                        h3 { {t!("contact-sent-title")} }
                        p { {t!("contact-sent-body")} }
                        button {
                            r#type: "button",
                            class: "button button--primary",
                            onclick: move |_| on_event.call(ContactEvent::Dismiss),
                            {t!("contact-send-another")}
                        }
                    }
                } else {
                    {render_form(form, &snapshot, on_event)}
                }
            }
        }
    }
}

fn render_form(
    mut form: Signal<ContactForm>,
    snapshot: &ContactForm,
    on_event: EventHandler<ContactEvent>,
) -> Element {
    let sending = snapshot.status() == SubmitStatus::Submitting;
    let submit_label = if sending {
        t!("contact-sending")
    } else {
        t!("contact-send")
    };

    rsx! {
        form {
            class: "contact__form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_event.call(ContactEvent::Submit);
            },
            div { class: "field",
                label { class: "field__label", r#for: "name", {t!("contact-name-label")} }
                input {
                    id: "name",
                    name: "name",
                    class: "input",
                    value: "{snapshot.name}",
                    placeholder: t!("contact-name-placeholder"),
                    required: true,
                    oninput: move |evt: FormEvent| form.with_mut(|f| f.set_field(Field::Name, evt.value())),
                }
            }
            div { class: "field",
                label { class: "field__label", r#for: "email", {t!("contact-email-label")} }
                input {
                    id: "email",
                    name: "email",
                    r#type: "email",
                    class: "input",
                    value: "{snapshot.email}",
                    placeholder: t!("contact-email-placeholder"),
                    required: true,
                    oninput: move |evt: FormEvent| form.with_mut(|f| f.set_field(Field::Email, evt.value())),
                }
            }
            div { class: "field",
                label { class: "field__label", r#for: "message", {t!("contact-message-label")} }
                textarea {
                    id: "message",
                    name: "message",
                    class: "input input--textarea",
                    value: "{snapshot.message}",
                    placeholder: t!("contact-message-placeholder"),
                    required: true,
                    oninput: move |evt: FormEvent| form.with_mut(|f| f.set_field(Field::Message, evt.value())),
                }
            }
            button {
                r#type: "submit",
                class: "button button--primary button--block",
                disabled: sending,
                "{submit_label}"
            }
        }
    }
}

#[component]
fn ContactDetails() -> Element {
    i18n::use_language();
    rsx! {
        div { class: "card contact__details",
            div { class: "card__content",
                div { class: "contact__detail",
                    Icon { svg: icons::MAP_PIN }
                    div {
                        h4 { {t!("contact-address-label")} }
                        p { "{content::ADDRESS}" }
                    }
                }
                div { class: "contact__detail",
                    Icon { svg: icons::PHONE }
                    div {
                        h4 { {t!("contact-phone-label")} }
                        p { "{content::PHONE}" }
                    }
                }
                div { class: "contact__detail",
                    Icon { svg: icons::MAIL }
                    div {
                        h4 { {t!("contact-email-heading")} }
                        p { "{content::EMAIL}" }
                    }
                }

                hr { class: "separator" }

                div { class: "contact__hours",
                    div { class: "contact__detail",
                        Icon { svg: icons::CLOCK }
                        h4 { {t!("contact-hours-title")} }
                    }
                    dl { class: "hours-table",
                        for row in BUSINESS_HOURS {
                            div { key: "{row.hours}", class: "hours-table__row",
                                dt { {day_range_label(row.days)} }
                                dd { "{row.hours}" }
                            }
                        }
                    }
                }

                hr { class: "separator" }

                div { class: "contact__social",
                    h4 { {t!("contact-follow-title")} }
                    div { class: "contact__social-links",
                        for link in SOCIAL_LINKS {
                            a {
                                key: "{link.network}",
                                class: "social-link tooltip",
                                href: link.url,
                                aria_label: t!("contact-follow-on", network = link.network),
                                "data-tooltip": t!("contact-follow-on", network = link.network),
                                Icon { svg: link.icon }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Cosmetic newsletter signup; nothing is sent.
#[component]
fn NewsletterCard() -> Element {
    i18n::use_language();
    rsx! {
        div { class: "card card--dark contact__newsletter",
            div { class: "card__content",
                h4 { {t!("newsletter-title")} }
                p { {t!("newsletter-body")} }
                div { class: "contact__newsletter-row",
                    input {
                        r#type: "email",
                        class: "input input--dark",
                        placeholder: t!("newsletter-placeholder"),
                    }
                    button { r#type: "button", class: "button button--accent",
                        {t!("newsletter-subscribe")}
                    }
                }
            }
        }
    }
}

/// Localized label for an opening-hours row. Shared with the footer.
pub fn day_range_label(days: DayRange) -> String {
    match days {
        DayRange::Weekdays => t!("hours-weekdays"),
        DayRange::Saturday => t!("hours-saturday"),
        DayRange::Sunday => t!("hours-sunday"),
    }
}
