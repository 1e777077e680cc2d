//! Layout component wrapping all pages with the nav bar and footer.

use dioxus::prelude::*;

use super::nav::Navbar;
use crate::app::Route;
use crate::config::NavConfig;

/// "v<version> (<sha>)", assembled by build.rs
pub const BUILD_LABEL: &str = env!("STOCKAI_BUILD_LABEL");

/// Router layout: fixed nav bar on top, routed page below.
#[component]
pub fn Shell() -> Element {
    let brand = use_context::<NavConfig>().brand;

    rsx! {
        document::Title { "{brand}" }
        // Tailwind utilities; dark: variants key off <html class="dark">
        document::Link {
            rel: "stylesheet",
            href: asset!("/public/tailwind.css")
        }

        div { class: "min-h-screen bg-gray-50 text-gray-900 dark:bg-gray-950 dark:text-gray-100",
            Navbar {}
            main { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 pt-20 pb-8",
                Outlet::<Route> {}
            }
            footer { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center py-3",
                small { class: "text-gray-500 dark:text-gray-400", "{brand} {BUILD_LABEL}" }
            }
        }
    }
}
