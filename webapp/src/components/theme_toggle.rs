use dioxus::prelude::*;

use crate::app::theme::{toggle_theme, use_theme, use_theme_store};

#[derive(Clone, PartialEq, Props)]
pub struct ToggleThemeButtonProps {
    #[props(default = 26)]
    size: u32,
}

#[component]
pub fn ToggleThemeButton(props: ToggleThemeButtonProps) -> Element {
    let store = use_theme_store();
    let theme = use_theme();

    let icon_size = props.size;
    let box_size = props.size + 20;

    // moon while dark, sun while light
    let (icon, label) = if theme.is_dark() {
        ("\u{263E}", "Switch to light theme")
    } else {
        ("\u{2600}", "Switch to dark theme")
    };

    rsx! {
        button {
            class: "theme-toggle",
            style: "width: {box_size}px; height: {box_size}px; font-size: {icon_size}px;",
            title: "{label}",
            onclick: move |_| toggle_theme(store),
            "{icon}"
        }
    }
}
