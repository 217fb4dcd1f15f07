//! c_hoco_bites bakery site.

#[allow(unused)]
use dioxus::prelude::*;

pub mod components;
pub mod config;
pub mod env;
pub mod platform;
pub mod views;

use views::{About, Contact, Home, Menu, MenuItem, Navigation, PageNotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navigation)]
        #[route("/")]
        Home {},
        #[route("/menu?:category")]
        Menu { category: Option<String> },
        #[route("/menu/:id")]
        MenuItem { id: u32 },
        #[route("/about")]
        About {},
        #[route("/contact")]
        Contact {},
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");
const THEME_CSS: Asset = asset!("/assets/styling/theme.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Title { "c_hoco_bites | Artisanal Chocolate Creations" }
        document::Meta {
            name: "description",
            content: "Discover luxury handcrafted chocolates made with passion and precision. Experience the art of chocolate making with c_hoco_bites.",
        }
        document::Link { rel: "preconnect", href: "https://fonts.googleapis.com" }
        document::Link { rel: "preconnect", href: "https://fonts.gstatic.com" }
        document::Link { rel: "stylesheet", href: "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&family=Playfair+Display:wght@400;700&display=swap" }
        document::Link { rel: "stylesheet", href: THEME_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
