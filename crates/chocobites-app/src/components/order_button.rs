use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::fa_brands_icons::FaInstagram;

use super::button::{Button, ButtonSize, ButtonVariant};
use crate::Route;
use crate::config::CONFIG;
use crate::platform;

/// Sends the visitor to the menu.
#[component]
pub fn OrderButton(
    #[props(default)] size: ButtonSize,
    #[props(default)] variant: ButtonVariant,
    #[props(into, default)] class: String,
) -> Element {
    let navigator = use_navigator();
    rsx! {
        Button {
            size,
            variant,
            class: "order-button {class}",
            onclick: move |evt: MouseEvent| {
                // Cards wrap this button in a link of their own
                evt.stop_propagation();
                evt.prevent_default();
                navigator.push(Route::Menu { category: None });
            },
            "Order Now"
        }
    }
}

fn icon_size(size: ButtonSize) -> u32 {
    match size {
        ButtonSize::Small => 16,
        ButtonSize::Large => 24,
        ButtonSize::Medium | ButtonSize::Icon => 20,
    }
}

/// Orders go through Instagram DMs; opens the profile in a new tab.
#[component]
pub fn InstagramOrderButton(
    #[props(default)] size: ButtonSize,
    #[props(default)] variant: ButtonVariant,
    #[props(into, default)] class: String,
) -> Element {
    let px = icon_size(size);
    rsx! {
        Button {
            size,
            variant,
            class: "order-button instagram-order-button {class}",
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                platform::open_external(&CONFIG.instagram_url);
            },
            Icon { width: px, height: px, icon: FaInstagram }
            "Order Now"
        }
    }
}
