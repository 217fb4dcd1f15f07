use chocobites_core::{Category, CategoryFilter};
use chrono::Datelike;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::fa_brands_icons::FaInstagram;

use super::menu_route;
use crate::Route;
use crate::config::CONFIG;

const FOOTER_CSS: Asset = asset!("/assets/styling/footer.css");

#[component]
pub fn Footer() -> Element {
    let year = chrono::Local::now().year();
    let instagram_url = CONFIG.instagram_url.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: FOOTER_CSS }

        footer { class: "site-footer",
            div { class: "footer-grid",
                div { class: "footer-brand",
                    Link { to: Route::Home {},
                        h3 { class: "playfair", "c_hoco_bites" }
                    }
                    p { "Crafting moments of pure delight." }
                }

                div {
                    h4 { "Quick Links" }
                    ul {
                        li { Link { to: Route::Home {}, "Home" } }
                        li { Link { to: Route::Menu { category: None }, "Menu" } }
                        li { Link { to: Route::About {}, "About Us" } }
                        li { Link { to: Route::Contact {}, "Contact" } }
                    }
                }

                div {
                    h4 { "Products" }
                    ul {
                        for category in Category::ALL {
                            li { key: "{category}",
                                Link { to: menu_route(CategoryFilter::Only(category)), "{category.label()}" }
                            }
                        }
                    }
                }

                div {
                    h4 { "Connect With Us" }
                    a {
                        class: "footer-instagram",
                        href: "{instagram_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        Icon { width: 20, height: 20, icon: FaInstagram }
                        "Follow us on Instagram"
                    }
                }
            }

            div { class: "footer-copyright",
                p { "© {year} c_hoco_bites. All rights reserved." }
            }
        }
    }
}
