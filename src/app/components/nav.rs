//! Navigation bar component.

use dioxus::prelude::*;

use super::icon::Icon;
use super::theme::ThemeToggle;
use crate::app::Route;
use crate::config::NavConfig;
use crate::routes::{NavIcon, RouteDescriptor};

const NAV_CLASS: &str = "bg-white/80 dark:bg-gray-900/70 backdrop-blur supports-[backdrop-filter]:backdrop-blur-md border-b border-gray-100 dark:border-gray-800 shadow-sm fixed w-full top-0 z-50";

const LINK_BASE: &str = "flex items-center rounded-md font-medium transition-colors duration-200 focus:outline-none focus-visible:ring-2 focus-visible:ring-primary-500";
const LINK_DESKTOP: &str = "space-x-2 px-3 py-2 text-sm focus-visible:ring-offset-2";
const LINK_MOBILE: &str = "space-x-3 px-3 py-2 text-base";
const LINK_ACTIVE: &str = "text-primary-700 bg-primary-50 dark:text-primary-400 dark:bg-gray-800";
const LINK_IDLE: &str = "text-gray-700 hover:text-primary-700 hover:bg-gray-50 dark:text-gray-200 dark:hover:text-primary-400 dark:hover:bg-gray-800";

const MENU_BUTTON_CLASS: &str = "inline-flex items-center justify-center p-2 rounded-md text-gray-700 hover:text-primary-700 hover:bg-gray-100 focus:outline-none focus-visible:ring-2 focus-visible:ring-inset focus-visible:ring-primary-500 dark:text-gray-200 dark:hover:text-primary-400 dark:hover:bg-gray-800";

const MENU_PANEL_CLASS: &str = "px-2 pt-2 pb-3 space-y-1 sm:px-3 bg-white/95 dark:bg-gray-900/80 backdrop-blur border-t border-gray-200 dark:border-gray-800 shadow-sm";

/// Class list for a nav link
pub fn link_class(active: bool, mobile: bool) -> String {
    let layout = if mobile { LINK_MOBILE } else { LINK_DESKTOP };
    let state = if active { LINK_ACTIVE } else { LINK_IDLE };
    format!("{} {} {}", LINK_BASE, layout, state)
}

/// Open/closed state of the collapsed mobile menu
#[derive(Clone, Copy)]
pub struct MenuState {
    open: Signal<bool>,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        (self.open)()
    }

    pub fn toggle(&self) {
        let mut open = self.open;
        let next = !*open.peek();
        open.set(next);
    }

    /// Following a link always collapses the menu
    pub fn close(&self) {
        let mut open = self.open;
        open.set(false);
    }
}

/// Menu starts closed on every mount
pub fn use_menu_state() -> MenuState {
    let open = use_signal(|| false);
    MenuState { open }
}

/// Top navigation bar: brand, route links, theme toggle and collapsible menu.
#[component]
pub fn Navbar() -> Element {
    let config = use_context::<NavConfig>();
    let current_path = use_route::<Route>().to_string();
    let menu = use_menu_state();
    let brand = config.brand.clone();

    rsx! {
        nav { class: NAV_CLASS,
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "flex justify-between h-16",
                    div { class: "flex items-center",
                        Link { to: "/", class: "flex items-center space-x-2",
                            div { class: "w-8 h-8 bg-gradient-to-r from-primary-600 to-primary-800 rounded-lg flex items-center justify-center",
                                Icon { icon: NavIcon::TrendingUp, class: "w-5 h-5 text-white" }
                            }
                            span { class: "text-xl font-bold text-gray-900 dark:text-white", "{brand}" }
                        }
                    }

                    // Desktop navigation
                    div { class: "hidden md:flex items-center space-x-8",
                        for route in config.routes.iter() {
                            NavLink {
                                key: "{route.href}",
                                route: route.clone(),
                                active: route.is_active(&current_path),
                            }
                        }
                        ThemeToggle {}
                    }

                    // Mobile menu button
                    div { class: "md:hidden flex items-center",
                        button {
                            r#type: "button",
                            class: MENU_BUTTON_CLASS,
                            "aria-expanded": if menu.is_open() { "true" } else { "false" },
                            onclick: move |_| menu.toggle(),
                            span { class: "sr-only", "Open main menu" }
                            if menu.is_open() {
                                Icon { icon: NavIcon::Close, class: "block h-6 w-6" }
                            } else {
                                Icon { icon: NavIcon::Menu, class: "block h-6 w-6" }
                            }
                        }
                    }
                }
            }

            // Mobile menu
            if menu.is_open() {
                div { class: "md:hidden",
                    div { class: MENU_PANEL_CLASS,
                        for route in config.routes.iter() {
                            NavLink {
                                key: "{route.href}",
                                route: route.clone(),
                                active: route.is_active(&current_path),
                                mobile: true,
                                onfollow: move |_| menu.close(),
                            }
                        }
                        ThemeToggle { mobile: true }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct NavLinkProps {
    route: RouteDescriptor,
    /// Highlight as the current page
    active: bool,
    #[props(default = false)]
    mobile: bool,
    /// Called when the link is followed
    onfollow: Option<EventHandler<MouseEvent>>,
}

#[component]
fn NavLink(props: NavLinkProps) -> Element {
    let class = link_class(props.active, props.mobile);
    let icon_class = if props.mobile { "w-5 h-5" } else { "w-4 h-4" };
    let onfollow = props.onfollow;
    let name = props.route.name.clone();

    let followed = move |evt: MouseEvent| {
        if let Some(f) = &onfollow {
            f.call(evt);
        }
    };

    if props.active {
        rsx! {
            Link {
                to: props.route.href.clone(),
                class: "{class}",
                aria_current: "page",
                onclick: followed,
                Icon { icon: props.route.icon, class: icon_class }
                span { "{name}" }
            }
        }
    } else {
        rsx! {
            Link {
                to: props.route.href.clone(),
                class: "{class}",
                onclick: followed,
                Icon { icon: props.route.icon, class: icon_class }
                span { "{name}" }
            }
        }
    }
}
