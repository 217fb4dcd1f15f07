use chocobites_core::Theme;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::fa_solid_icons::{FaMoon, FaSun};

use super::button::{Button, ButtonSize, ButtonVariant};

/// Light/dark switch. The stored preference is applied on first mount.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_signal(Theme::default);

    #[cfg(all(target_family = "wasm", target_os = "unknown"))]
    use_effect(move || {
        let stored = chocobites_browser::storage::load_theme();
        chocobites_browser::storage::apply_theme(stored);
        theme.set(stored);
    });

    let current = theme();
    let label = match current {
        Theme::Light => "Switch to dark mode",
        Theme::Dark => "Switch to light mode",
    };

    rsx! {
        Button {
            variant: ButtonVariant::Ghost,
            size: ButtonSize::Icon,
            class: "theme-toggle",
            aria_label: label,
            onclick: move |_| {
                let next = theme.peek().toggled();
                tracing::debug!(theme = %next, "theme toggled");
                #[cfg(all(target_family = "wasm", target_os = "unknown"))]
                {
                    chocobites_browser::storage::save_theme(next);
                    chocobites_browser::storage::apply_theme(next);
                }
                theme.set(next);
            },
            match current {
                Theme::Light => rsx! { Icon { width: 20, height: 20, icon: FaMoon } },
                Theme::Dark => rsx! { Icon { width: 20, height: 20, icon: FaSun } },
            }
        }
    }
}
