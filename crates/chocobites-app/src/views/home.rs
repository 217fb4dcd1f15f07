use chocobites_core::{Category, CategoryFilter, featured_products, find_product};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::fa_solid_icons::FaLocationDot;

use super::menu_route;
use crate::Route;
use crate::components::button::{Button, ButtonSize};
use crate::components::{InstagramFeed, OrderButton, ProductCard, VideoBackground};

const HOME_CSS: Asset = asset!("/assets/styling/home.css");

const HERO_VIDEO: &str = "/videos/glaze.mp4";
const HERO_POSTER: &str = "/images/1KG CHOLATE CHIPS.jpg";
const FEATURED_COUNT: usize = 4;
/// The 1kg pack advertised in the special-offer block.
const SPECIAL_OFFER_ID: u32 = 5;

fn tile_image(category: Category) -> &'static str {
    match category {
        Category::Cookies => "/images/1KG CHOLATE CHIPS.jpg",
        Category::Brownies => "/images/brownies.jpg",
        Category::SpecialPacks => "/images/1kg ch.jpg",
    }
}

/// The Home page component that will be rendered when the current route is `[Route::Home]`
#[component]
pub fn Home() -> Element {
    let special = find_product(SPECIAL_OFFER_ID);

    rsx! {
        document::Link { rel: "stylesheet", href: HOME_CSS }

        section { class: "hero",
            VideoBackground {
                id: "hero-video",
                src: HERO_VIDEO,
                fallback_image: HERO_POSTER,
            }
            div { class: "hero-overlay",
                div { class: "hero-content",
                    h1 { class: "playfair",
                        "Freshly Baked"
                        br {}
                        "Artisanal Cookies"
                    }
                    p { "Handcrafted with love, baked to perfection. Experience the magic of homemade cookies." }
                    OrderButton { size: ButtonSize::Large, class: "luxury-button" }
                }
            }
        }

        section { class: "home-menu",
            h2 { "Our Menu" }
            p { class: "section-subtitle", "Discover our handcrafted selection of treats" }

            div { class: "category-tiles",
                for (i, category) in Category::ALL.into_iter().enumerate() {
                    Link {
                        key: "{category}",
                        to: menu_route(CategoryFilter::Only(category)),
                        class: "category-tile",
                        div {
                            class: "category-tile-inner",
                            style: "animation-delay: {i * 100}ms",
                            img { src: tile_image(category), alt: category.label() }
                            div { class: "category-tile-label",
                                h3 { "{category.label()}" }
                            }
                        }
                    }
                }
            }

            div { class: "featured-header",
                h2 { "Featured Products" }
                p { class: "section-subtitle", "Our most loved treats" }
            }
            div { class: "featured-grid",
                for product in featured_products(FEATURED_COUNT) {
                    ProductCard { key: "{product.id}", product, featured: true }
                }
            }
            div { class: "view-all",
                Link { to: Route::Menu { category: None },
                    Button { size: ButtonSize::Large, class: "luxury-button", "View All Products" }
                }
            }
        }

        if let Some(special) = special {
            section { class: "special-offer",
                div { class: "special-offer-text",
                    h2 { "Special Offer" }
                    p { class: "special-offer-lead", "Get our {special.name}" }
                    p { class: "special-offer-price", "{special.price()}" }
                    p { "Perfect for parties and events" }
                    OrderButton { size: ButtonSize::Large, class: "luxury-button" }
                }
                div { class: "special-offer-image",
                    img { src: special.image, alt: "Special Offer" }
                }
            }
        }

        section { id: "locations", class: "store-finder",
            h2 { class: "section-heading", "Find a Store" }
            p { class: "section-subtitle", "Fresh baked goods at a location near you" }
            div { class: "store-finder-box",
                Icon { width: 24, height: 24, icon: FaLocationDot }
                input { r#type: "text", placeholder: "Enter your zip code" }
                Button { class: "luxury-button", "Search" }
            }
        }

        section { class: "newsletter",
            h2 { class: "section-heading", "Join Our Sweet Community" }
            p { "Sign up for exclusive offers and be the first to know about new flavors!" }
            div { class: "newsletter-form",
                input { r#type: "email", placeholder: "Enter your email" }
                Button { class: "luxury-button", "Subscribe" }
            }
        }

        InstagramFeed {}
    }
}
