//! Theme context bridging the resolver into Dioxus.
//!
//! Components read `is_dark` through a signal fed by a marker subscription,
//! and trigger `toggle` on the shared resolver.

use dioxus::prelude::*;

use crate::theme::{platform_backends, PlatformResolver, ThemeMarker, ThemeResolver};

/// Global theme state shared via context
#[derive(Clone, Copy)]
pub struct ThemeContext {
    is_dark: Signal<bool>,
    resolver: Signal<PlatformResolver>,
}

impl ThemeContext {
    /// Current effective theme
    pub fn is_dark(&self) -> bool {
        (self.is_dark)()
    }

    /// Flip and persist theme
    pub fn toggle(&self) {
        let mut resolver = self.resolver;
        let dark = resolver.write().toggle();
        tracing::info!("Theme toggled: {}", if dark { "dark" } else { "light" });
    }
}

/// Initialize theme context provider - call once at app root
pub fn use_theme_provider() -> ThemeContext {
    let resolver = use_signal(|| {
        let marker = ThemeMarker::new();

        // Reflect the marker on <html class="dark"> for Tailwind dark: variants
        #[cfg(target_arch = "wasm32")]
        marker.subscribe(apply_dark_class);

        let (store, query) = platform_backends();
        let mut resolver = ThemeResolver::new(store, query, marker);
        resolver.initialize();
        resolver
    });

    let is_dark = use_signal(|| resolver.peek().is_dark());

    use_hook(move || {
        resolver.peek().marker().subscribe(move |dark| {
            let mut is_dark = is_dark;
            is_dark.set(dark);
        });
    });

    use_context_provider(|| ThemeContext { is_dark, resolver })
}

/// Get theme context - use in any component
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

// ============ WASM-only helpers ============

#[cfg(target_arch = "wasm32")]
fn apply_dark_class(dark: bool) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());

    if let Some(root) = root {
        if let Err(e) = root.class_list().toggle_with_force("dark", dark) {
            tracing::debug!("Failed to sync dark class: {:?}", e);
        }
    }
}
