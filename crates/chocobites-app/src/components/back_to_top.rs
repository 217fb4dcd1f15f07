use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::fa_solid_icons::FaArrowUp;

use super::button::{Button, ButtonSize};
use crate::platform::{self, use_scroll_state};

/// Floating button, shown once the page has scrolled far enough.
#[component]
pub fn BackToTop() -> Element {
    let scroll = use_scroll_state();
    if !scroll().show_back_to_top {
        return rsx! {};
    }
    rsx! {
        div { class: "back-to-top",
            Button {
                size: ButtonSize::Icon,
                aria_label: "Back to top",
                onclick: move |_| platform::scroll_to_top(),
                Icon { width: 20, height: 20, icon: FaArrowUp }
            }
        }
    }
}
