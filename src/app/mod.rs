//! Dioxus application entry point.
//!
//! This module provides the main App component that serves as the root
//! of the Dioxus application.

use dioxus::prelude::*;

pub mod components;
pub mod pages;
pub mod theme;

use crate::config::NavConfig;
use components::Shell;
use pages::{About, Analysis, Home, NotFound};
use theme::use_theme_provider;

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Launch normally injects the config; fall back when mounted on its own
    use_hook(|| {
        if try_consume_context::<NavConfig>().is_none() {
            provide_context(NavConfig::embedded_or_default());
        }
    });

    // Initialize theme context at app root (handles localStorage + DOM class)
    use_theme_provider();

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/analysis")]
        Analysis {},
        #[route("/about")]
        About {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
