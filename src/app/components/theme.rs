//! Light/dark theme toggle button.

use dioxus::prelude::*;

use super::icon::Icon;
use crate::app::theme::use_theme;
use crate::routes::NavIcon;

const DESKTOP_CLASS: &str = "inline-flex items-center justify-center p-2 rounded-md text-gray-700 hover:text-primary-700 hover:bg-gray-100 focus:outline-none focus-visible:ring-2 focus-visible:ring-primary-500 dark:text-gray-200 dark:hover:text-primary-400 dark:hover:bg-gray-800";

const MOBILE_CLASS: &str = "mt-2 w-full flex items-center justify-center space-x-2 px-3 py-2 rounded-md text-base font-medium text-gray-700 hover:text-primary-700 hover:bg-gray-50 dark:text-gray-200 dark:hover:text-primary-400 dark:hover:bg-gray-800";

/// Icon shown on the toggle: the theme you would switch to.
pub fn toggle_icon(is_dark: bool) -> NavIcon {
    if is_dark {
        NavIcon::Sun
    } else {
        NavIcon::Moon
    }
}

/// Theme toggle. The mobile variant is full-width with a text label.
#[component]
pub fn ThemeToggle(#[props(default = false)] mobile: bool) -> Element {
    let theme = use_theme();
    let icon = toggle_icon(theme.is_dark());

    if mobile {
        rsx! {
            button {
                r#type: "button",
                class: MOBILE_CLASS,
                "aria-label": "Toggle theme",
                onclick: move |_| theme.toggle(),
                Icon { icon, class: "h-5 w-5" }
                span { "Toggle Theme" }
            }
        }
    } else {
        rsx! {
            button {
                r#type: "button",
                class: DESKTOP_CLASS,
                "aria-label": "Toggle theme",
                title: "Toggle theme",
                onclick: move |_| theme.toggle(),
                Icon { icon, class: "h-5 w-5" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_icon_offers_opposite_theme() {
        assert_eq!(toggle_icon(true), NavIcon::Sun);
        assert_eq!(toggle_icon(false), NavIcon::Moon);
    }
}
