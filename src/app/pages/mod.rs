//! Routed page components.
//!
//! Page bodies are placeholders; the shell around them is what this crate owns.

use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        section {
            h1 { class: "text-3xl font-bold", "Market overview" }
            p { class: "mt-2 text-gray-600 dark:text-gray-300",
                "AI-assisted sentiment and trend signals for the stocks you follow."
            }
            Link {
                to: Route::Analysis {},
                class: "inline-block mt-6 px-4 py-2 rounded-md bg-primary-600 text-white hover:bg-primary-700",
                "Analyze a stock"
            }
        }
    }
}

#[component]
pub fn Analysis() -> Element {
    rsx! {
        section {
            h1 { class: "text-3xl font-bold", "Stock Analysis" }
            p { class: "mt-2 text-gray-600 dark:text-gray-300",
                "News sentiment and price context for a single ticker."
            }
        }
    }
}

#[component]
pub fn About() -> Element {
    rsx! {
        section {
            h1 { class: "text-3xl font-bold", "About" }
            p { class: "mt-2 text-gray-600 dark:text-gray-300",
                "StockAI combines market data with news sentiment analysis."
            }
        }
    }
}

/// Catch-all page; no nav link is highlighted here
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        section {
            h1 { class: "text-3xl font-bold", "Page not found" }
            p { class: "mt-2 text-gray-600 dark:text-gray-300", "Nothing lives at {path}." }
            Link { to: Route::Home {}, class: "inline-block mt-6 underline", "Back to home" }
        }
    }
}
