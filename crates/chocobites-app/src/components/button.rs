use dioxus::prelude::*;

const BUTTON_CSS: Asset = asset!("/assets/styling/button.css");

#[derive(Copy, Clone, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Ghost => "ghost",
        }
    }
}

#[derive(Copy, Clone, PartialEq, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
    Icon,
}

impl ButtonSize {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "size-sm",
            ButtonSize::Medium => "size-md",
            ButtonSize::Large => "size-lg",
            ButtonSize::Icon => "size-icon",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(into, default)] class: String,
    #[props(into, default = "button".to_string())] button_type: String,
    #[props(into, default)] aria_label: Option<String>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: BUTTON_CSS }
        button {
            class: "button {size.class()} {class}",
            "data-style": variant.class(),
            r#type: "{button_type}",
            aria_label: aria_label,
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
