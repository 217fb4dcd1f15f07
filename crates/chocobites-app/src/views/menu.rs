use chocobites_core::{CategoryFilter, category_tabs, filter_products};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::fa_solid_icons::{FaChevronRight, FaHouse};

use crate::Route;
use crate::components::button::{Button, ButtonVariant};
use crate::components::{BackToTop, InstagramFeed, ProductCard};
use crate::platform::use_scroll_state;

const MENU_CSS: Asset = asset!("/assets/styling/menu.css");

/// The menu route showing `filter`.
pub fn menu_route(filter: CategoryFilter) -> Route {
    match filter {
        CategoryFilter::All => Route::Menu { category: None },
        CategoryFilter::Only(c) => Route::Menu {
            category: Some(c.slug().to_string()),
        },
    }
}

/// Product listing with category tabs.
///
/// The selected category lives in the `category` query parameter, so tab
/// clicks replace the current history entry rather than pushing new ones.
#[component]
pub fn Menu(category: Option<String>) -> Element {
    let selected = CategoryFilter::from_query(category.as_deref());
    let tabs = use_hook(category_tabs);
    let items = filter_products(selected);
    let scroll = use_scroll_state();
    let navigator = use_navigator();

    let filter_class = if scroll().filter_sticky {
        "category-filter sticky"
    } else {
        "category-filter"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: MENU_CSS }

        div { class: "menu-page",
            nav { class: "breadcrumbs",
                Link { to: Route::Home {}, class: "breadcrumb",
                    Icon { width: 18, height: 18, icon: FaHouse }
                    span { "Home" }
                }
                span { class: "breadcrumb-separator",
                    Icon { width: 16, height: 16, icon: FaChevronRight }
                }
                span { class: "breadcrumb breadcrumb-current", "Our Delights" }
            }

            div { class: filter_class,
                for tab in tabs.iter().copied() {
                    {
                        let active = tab.filter == selected;
                        let (variant, class) = if active {
                            (ButtonVariant::Primary, "category-tab selected")
                        } else {
                            (ButtonVariant::Outline, "category-tab")
                        };
                        rsx! {
                            Button {
                                key: "{tab.filter.slug()}",
                                variant,
                                class,
                                onclick: move |_| {
                                    tracing::debug!(category = tab.filter.slug(), "category selected");
                                    navigator.replace(menu_route(tab.filter));
                                },
                                span { "{tab.label}" }
                                span { class: "category-count", "{tab.count}" }
                            }
                        }
                    }
                }
            }

            div { class: "menu-grid",
                for (index, item) in items.iter().copied().enumerate() {
                    ProductCard { key: "{item.id}", product: item, index }
                }
            }

            if items.is_empty() {
                div { class: "menu-empty",
                    p { "No items found in this category." }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            navigator.replace(menu_route(CategoryFilter::All));
                        },
                        "View All Items"
                    }
                }
            }

            div { class: "menu-feed", InstagramFeed {} }

            BackToTop {}
        }
    }
}
