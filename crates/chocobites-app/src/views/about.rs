use dioxus::prelude::*;

use crate::Route;
use crate::components::button::{Button, ButtonSize};

const PAGES_CSS: Asset = asset!("/assets/styling/pages.css");

struct Value {
    title: &'static str,
    body: &'static str,
}

const VALUES: [Value; 3] = [
    Value {
        title: "Quality First",
        body: "We use only the finest ingredients, sourced from trusted suppliers who share our commitment to excellence.",
    },
    Value {
        title: "Handcrafted Care",
        body: "Every cookie is made by hand, ensuring the perfect texture and taste that machine-made products can't match.",
    },
    Value {
        title: "Community Focus",
        body: "We're more than a bakery - we're part of your community, creating sweet moments for every occasion.",
    },
];

#[component]
pub fn About() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: PAGES_CSS }

        section { class: "page-hero",
            img { src: "/images/brownies.jpg", alt: "Our bakery" }
            div { class: "page-hero-shade" }
            h1 { class: "playfair", "Our Story" }
        }

        section { class: "page-section narrow",
            h2 { class: "playfair", "A Sweet Journey" }
            p {
                "Founded in 2020, c_hoco_bites began with a simple passion: creating the perfect cookie. "
                "What started as weekend baking sessions in a small kitchen has grown into a beloved "
                "destination for cookie enthusiasts across the city."
            }
            p {
                "Our commitment to quality ingredients and traditional baking methods has never wavered. "
                "Each cookie is handcrafted with premium chocolate, fresh butter, and a sprinkle of love."
            }
        }

        section { class: "page-section accent",
            h2 { class: "playfair", "Our Values" }
            div { class: "values-grid",
                for value in VALUES.iter() {
                    div { key: "{value.title}", class: "value",
                        h3 { "{value.title}" }
                        p { "{value.body}" }
                    }
                }
            }
        }

        section { class: "page-section cta",
            h2 { class: "playfair", "Ready to Experience Our Cookies?" }
            p { "Join us for a taste of happiness in every bite." }
            Link { to: Route::Menu { category: None },
                Button { size: ButtonSize::Large, class: "luxury-button", "View Our Menu" }
            }
        }
    }
}
