//! Server-side renders of the stateful sections.
//!
//! Every test pins the loader to en-US; nothing in this binary switches away from it.

use dioxus::prelude::*;
use ui::sections::contact::{ContactEvent, ContactForm, ContactFormCard, Field};
use ui::sections::menu::MenuItem;
use ui::sections::MenuSection;

fn render(app: fn() -> Element) -> String {
    ui::i18n::init();
    ui::i18n::set_language("en-US").unwrap();

    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn filled() -> ContactForm {
    let mut form = ContactForm::default();
    form.set_field(Field::Name, "Ada".into());
    form.set_field(Field::Email, "ada@example.com".into());
    form.set_field(Field::Message, "Table for two on Sunday?".into());
    form
}

#[component]
fn EmptyMenu() -> Element {
    rsx! { MenuSection { items: Vec::<MenuItem>::new() } }
}

#[component]
fn FullMenu() -> Element {
    rsx! { MenuSection {} }
}

#[component]
fn SendingCard() -> Element {
    let form = use_signal(|| {
        let mut form = filled();
        assert!(form.begin_submit());
        form
    });
    rsx! { ContactFormCard { form, on_event: move |_: ContactEvent| {} } }
}

#[component]
fn IdleCard() -> Element {
    let form = use_signal(filled);
    rsx! { ContactFormCard { form, on_event: move |_: ContactEvent| {} } }
}

#[component]
fn SubmittedCard() -> Element {
    let form = use_signal(|| {
        let mut form = filled();
        assert!(form.begin_submit());
        form.finish_submit();
        form
    });
    rsx! { ContactFormCard { form, on_event: move |_: ContactEvent| {} } }
}

#[test]
fn empty_menu_shows_the_empty_state() {
    let html = render(EmptyMenu);
    assert!(html.contains("menu__empty"), "{html}");
    assert!(html.contains("No menu items found."), "{html}");
    assert!(html.contains("Showing 0 items"), "{html}");
    assert!(!html.contains("menu-card"), "{html}");
}

#[test]
fn default_menu_renders_the_catalog() {
    let html = render(FullMenu);
    assert!(html.contains("Showing 8 items"), "{html}");
    assert!(html.contains("Signature Bloom Latte"));
    assert!(html.contains("Bestseller"));
    assert!(!html.contains("menu__empty"));
}

#[test]
fn sending_form_disables_submit() {
    let html = render(SendingCard);
    assert!(html.contains("Sending…"), "{html}");
    assert!(html.contains("disabled"), "{html}");
    // Fields keep their text while the message is in flight.
    assert!(html.contains("ada@example.com"));
}

#[test]
fn idle_form_offers_send() {
    let html = render(IdleCard);
    assert!(html.contains("Send Message"), "{html}");
    assert!(!html.contains("Sending…"));
}

#[test]
fn submitted_form_shows_the_success_panel() {
    let html = render(SubmittedCard);
    assert!(html.contains("Message Sent!"), "{html}");
    assert!(html.contains("Send Another Message"));
    assert!(!html.contains("contact__form\""), "{html}");
}
