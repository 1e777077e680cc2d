//! Theme backends: the durable preference store and the OS color-scheme query.
//!
//! Browser builds use `localStorage` and `matchMedia`. Native builds and tests
//! use the in-process implementations.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::ThemeError;

/// Media query reporting an OS-level dark preference
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Per-origin durable key-value store.
///
/// Calls are synchronous and may fail (e.g. storage disabled in privacy mode).
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError>;
    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// "Does the environment prefer dark presentation?"
pub trait ColorSchemeQuery {
    fn prefers_dark(&self) -> Result<bool, ThemeError>;
}

/// In-process store. Clones share entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Fixed OS preference; `None` behaves like an environment without `matchMedia`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedColorScheme(pub Option<bool>);

impl ColorSchemeQuery for FixedColorScheme {
    fn prefers_dark(&self) -> Result<bool, ThemeError> {
        self.0.ok_or(ThemeError::PreferenceQueryUnavailable)
    }
}

// ============ WASM-only backends ============

#[cfg(target_arch = "wasm32")]
pub use browser::{LocalStorage, MediaQueryColorScheme};

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{ColorSchemeQuery, PreferenceStore, DARK_SCHEME_QUERY};
    use crate::error::ThemeError;

    fn local_storage() -> Result<web_sys::Storage, String> {
        let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err("localStorage not available".to_string()),
            Err(e) => Err(format!("{:?}", e)),
        }
    }

    /// `window.localStorage`
    #[derive(Clone, Copy, Debug, Default)]
    pub struct LocalStorage;

    impl PreferenceStore for LocalStorage {
        fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
            let storage = local_storage().map_err(ThemeError::StoreRead)?;
            storage
                .get_item(key)
                .map_err(|e| ThemeError::StoreRead(format!("{:?}", e)))
        }

        fn save(&self, key: &str, value: &str) -> Result<(), ThemeError> {
            let storage = local_storage().map_err(ThemeError::StoreWrite)?;
            storage
                .set_item(key, value)
                .map_err(|e| ThemeError::StoreWrite(format!("{:?}", e)))
        }
    }

    /// `window.matchMedia("(prefers-color-scheme: dark)")`
    #[derive(Clone, Copy, Debug, Default)]
    pub struct MediaQueryColorScheme;

    impl ColorSchemeQuery for MediaQueryColorScheme {
        fn prefers_dark(&self) -> Result<bool, ThemeError> {
            web_sys::window()
                .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
                .map(|mq| mq.matches())
                .ok_or(ThemeError::PreferenceQueryUnavailable)
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub type PlatformStore = LocalStorage;
#[cfg(target_arch = "wasm32")]
pub type PlatformColorScheme = MediaQueryColorScheme;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = MemoryStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformColorScheme = FixedColorScheme;

/// Backends for the current target
pub fn platform_backends() -> (PlatformStore, PlatformColorScheme) {
    (PlatformStore::default(), PlatformColorScheme::default())
}
