use chocobites_core::find_product;
use dioxus::prelude::*;

use crate::components::OrderButton;
use crate::components::button::ButtonSize;

const PRODUCT_CSS: Asset = asset!("/assets/styling/product.css");

#[component]
pub fn MenuItem(id: u32) -> Element {
    let Some(product) = find_product(id) else {
        tracing::debug!(id, "no product with this id");
        return rsx! {
            div { class: "not-found",
                p { "Product not found" }
            }
        };
    };
    let price = product.price();

    rsx! {
        document::Link { rel: "stylesheet", href: PRODUCT_CSS }

        div { class: "product-detail",
            div { class: "product-detail-image",
                img { src: product.image, alt: product.name }
            }

            div { class: "product-detail-info",
                h1 { "{product.name}" }
                p { class: "product-detail-price", "{price}" }
                p { class: "product-detail-description",
                    {product.long_description.unwrap_or(product.description)}
                }

                if !product.ingredients.is_empty() {
                    div {
                        h2 { "Ingredients" }
                        ul { class: "ingredients",
                            for ingredient in product.ingredients.iter() {
                                li { key: "{ingredient}", "{ingredient}" }
                            }
                        }
                    }
                }

                if let Some(nutrition) = product.nutrition {
                    div {
                        h2 { "Nutritional Information" }
                        dl { class: "nutrition",
                            div {
                                dt { "Calories" }
                                dd { "{nutrition.calories}" }
                            }
                            div {
                                dt { "Protein" }
                                dd { "{nutrition.protein}g" }
                            }
                            div {
                                dt { "Carbs" }
                                dd { "{nutrition.carbs}g" }
                            }
                            div {
                                dt { "Fat" }
                                dd { "{nutrition.fat}g" }
                            }
                        }
                    }
                }

                if let Some(allergens) = product.allergen_summary() {
                    div {
                        h2 { "Allergens" }
                        p { class: "allergens", "{allergens}" }
                    }
                }

                div { class: "product-detail-actions",
                    span { class: "product-detail-price large", "{price}" }
                    OrderButton { size: ButtonSize::Large, class: "luxury-button" }
                }
            }
        }
    }
}
