use chocobites_core::Product;
use dioxus::prelude::*;

use super::button::ButtonSize;
use super::order_button::{InstagramOrderButton, OrderButton};
use crate::Route;

const PRODUCT_CARD_CSS: Asset = asset!("/assets/styling/product-card.css");

/// Delay between successive cards' entry animations.
pub const STAGGER_MS: usize = 100;

/// Grid card for a product.
///
/// `featured` cards (home page) are compact and order through the menu;
/// menu cards show the description and order through Instagram.
#[component]
pub fn ProductCard(
    product: &'static Product,
    #[props(default)] index: usize,
    #[props(default)] featured: bool,
) -> Element {
    let delay = index * STAGGER_MS;
    let price = product.price();
    let class = if featured {
        "product-card featured"
    } else {
        "product-card"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: PRODUCT_CARD_CSS }
        article {
            class,
            style: "animation-delay: {delay}ms",
            Link {
                to: Route::MenuItem { id: product.id },
                class: "product-card-image",
                img { src: product.image, alt: product.name, loading: "lazy" }
            }
            div { class: "product-card-body",
                Link {
                    to: Route::MenuItem { id: product.id },
                    class: "product-card-title",
                    h3 { "{product.name}" }
                }
                if !featured {
                    p { class: "product-card-description", "{product.description}" }
                }
                div { class: "product-card-footer",
                    span { class: "product-card-price", "{price}" }
                    if featured {
                        OrderButton { size: ButtonSize::Small }
                    } else {
                        InstagramOrderButton { size: ButtonSize::Small }
                    }
                }
            }
        }
    }
}
