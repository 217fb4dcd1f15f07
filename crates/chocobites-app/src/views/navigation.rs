use chocobites_core::{NAV_LINKS, is_active_path};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::fa_solid_icons::{FaBars, FaXmark};

use super::Footer;
use crate::Route;
use crate::components::ThemeToggle;
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::platform::use_scroll_state;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

fn link_class(base: &str, active: bool) -> String {
    if active {
        format!("{base} active")
    } else {
        base.to_string()
    }
}

/// Site layout: fixed header, the routed page, then the footer.
///
/// The header turns opaque once the page scrolls past its threshold. Small
/// screens get a modal link list instead of the inline links.
#[component]
pub fn Navigation() -> Element {
    let route = use_route::<Route>();
    let current = route.to_string();
    let scroll = use_scroll_state();
    let mut menu_open = use_signal(|| false);

    let nav_class = if scroll().header_scrolled {
        "site-nav scrolled"
    } else {
        "site-nav"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header { class: "site-header",
            nav { class: nav_class,
                div { class: "nav-inner",
                    Link { to: Route::Home {}, class: "nav-logo",
                        img { src: "/images/logo.png", alt: "c_hoco_bites" }
                    }

                    div { class: "nav-links",
                        for link in NAV_LINKS.iter() {
                            Link {
                                key: "{link.href}",
                                to: link.href,
                                class: link_class("nav-link", is_active_path(link.href, &current)),
                                "{link.label}"
                                span { class: "nav-underline" }
                            }
                        }
                    }

                    div { class: "nav-actions",
                        ThemeToggle {}
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Icon,
                            class: "nav-menu-toggle",
                            aria_label: "Toggle menu",
                            onclick: move |_| menu_open.toggle(),
                            if menu_open() {
                                Icon { width: 24, height: 24, icon: FaXmark }
                            } else {
                                Icon { width: 24, height: 24, icon: FaBars }
                            }
                        }
                    }
                }
            }

            if menu_open() {
                div {
                    class: "mobile-menu-backdrop",
                    onclick: move |_| menu_open.set(false),
                    div {
                        class: "mobile-menu",
                        onclick: move |evt| evt.stop_propagation(),
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Icon,
                            class: "mobile-menu-close",
                            aria_label: "Close menu",
                            onclick: move |_| menu_open.set(false),
                            Icon { width: 24, height: 24, icon: FaXmark }
                        }
                        nav { class: "mobile-menu-links",
                            for link in NAV_LINKS.iter() {
                                Link {
                                    key: "{link.href}",
                                    to: link.href,
                                    class: link_class("mobile-menu-link", is_active_path(link.href, &current)),
                                    onclick: move |_| menu_open.set(false),
                                    "{link.label}"
                                }
                            }
                        }
                    }
                }
            }
        }

        main { class: "site-main", Outlet::<Route> {} }

        Footer {}
    }
}
