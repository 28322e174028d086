use dioxus::prelude::*;

use crate::components::icons::{self, Icon};
use crate::core::format;
use crate::i18n;
use crate::t;

use super::catalog::{catalog, MenuItem};
use super::filter::{categories, Category, MenuFilter};

/// Filterable menu grid.
///
/// `items` defaults to the embedded catalog; `title` and `subtitle` default to the
/// localized headings. The category list is derived once when the section mounts.
#[component]
pub fn MenuSection(
    items: Option<Vec<MenuItem>>,
    title: Option<String>,
    subtitle: Option<String>,
) -> Element {
    i18n::use_language();
    let items = use_signal(move || items.unwrap_or_else(|| catalog().to_vec()));
    let category_list = use_signal(move || categories(&items.peek()));
    let mut filter = use_signal(MenuFilter::default);

    let visible = use_memo(move || {
        filter
            .read()
            .apply(&items.read())
            .into_iter()
            .cloned()
            .collect::<Vec<MenuItem>>()
    });

    let title = title.unwrap_or_else(|| t!("menu-title"));
    let subtitle = subtitle.unwrap_or_else(|| t!("menu-subtitle"));
    let active = filter.read().category.clone();
    let search = filter.read().search.clone();
    let visible_items = visible();
    let count = visible_items.len();

    rsx! {
        section { class: "section menu",
            div { class: "section__inner",
                header { class: "section__header",
                    h2 { class: "section__title menu__title", "{title}" }
                    p { class: "section__subtitle", "{subtitle}" }
                }

                div { class: "menu__controls",
                    label { class: "menu__search",
                        span { class: "visually-hidden", {t!("menu-search-label")} }
                        Icon { svg: icons::SEARCH, class: "menu__search-icon" }
                        input {
                            r#type: "search",
                            class: "input menu__search-input",
                            placeholder: t!("menu-search-placeholder"),
                            value: "{search}",
                            oninput: move |evt: FormEvent| {
                                let query = evt.value();
                                filter.with_mut(|f| f.search = query);
                            },
                        }
                    }

                    div { class: "menu__categories", role: "group",
                        for category in category_list() {
                            {render_category_button(filter, category.clone(), category == active)}
                        }
                    }
                }

                p { class: "menu__count", aria_live: "polite",
                    {t!("menu-result-count", count = count)}
                }

                if visible_items.is_empty() {
                    div { class: "menu__empty",
                        p { {t!("menu-empty")} }
                    }
                } else {
                    div { class: "menu__grid",
                        for (index, item) in visible_items.into_iter().enumerate() {
                            MenuCard { key: "{item.id}", item: item.clone(), index }
                        }
                    }
                }
            }
        }
    }
}

fn render_category_button(
    mut filter: Signal<MenuFilter>,
    category: Category,
    is_active: bool,
) -> Element {
    let class = if is_active {
        "button button--primary menu__category menu__category--active"
    } else {
        "button button--outline menu__category"
    };
    let label = match &category {
        Category::All => t!("menu-category-all"),
        Category::Named(name) => format::capitalize(name),
    };
    let key = category.label().to_string();

    rsx! {
        button {
            key: "{key}",
            r#type: "button",
            class: "{class}",
            aria_pressed: "{is_active}",
            onclick: move |_| {
                let selected = category.clone();
                filter.with_mut(|f| f.category = selected);
            },
            "{label}"
        }
    }
}

#[component]
fn MenuCard(item: MenuItem, index: usize) -> Element {
    i18n::use_language();
    let stagger = format!("--stagger: {index}");

    rsx! {
        article { class: "card menu-card", style: "{stagger}",
            div { class: "menu-card__media",
                img {
                    class: "menu-card__image",
                    src: "{item.image}",
                    alt: "{item.name}",
                    "loading": "lazy",
                }
                if item.is_bestseller() {
                    span { class: "badge badge--accent menu-card__badge",
                        {t!("menu-bestseller")}
                    }
                }
            }
            div { class: "card__content",
                div { class: "menu-card__heading",
                    h3 { class: "menu-card__name", "{item.name}" }
                    span { class: "menu-card__price", "{item.price}" }
                }
                p { class: "menu-card__description", "{item.description}" }
                if !item.tags.is_empty() {
                    ul { class: "menu-card__tags",
                        for tag in item.tags.iter() {
                            li { key: "{tag}", class: "badge badge--outline",
                                "{format::capitalize(tag)}"
                            }
                        }
                    }
                }
            }
        }
    }
}
