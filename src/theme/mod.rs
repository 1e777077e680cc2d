//! Theme resolution with persisted preference and OS fallback.
//!
//! At mount the effective theme is the persisted choice if there is one, else
//! the OS color-scheme preference, else light. Toggling persists the new choice
//! best-effort; storage failures never change what the user sees.

pub mod marker;
pub mod store;

pub use marker::{SubscriptionId, ThemeMarker};
pub use store::{
    platform_backends, ColorSchemeQuery, FixedColorScheme, MemoryStore, PlatformColorScheme,
    PlatformStore, PreferenceStore, DARK_SCHEME_QUERY,
};

/// Key of the durable preference record
pub const STORAGE_KEY: &str = "theme";

/// Persisted theme choice
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemePreference {
    Dark,
    Light,
    #[default]
    Unset,
}

impl ThemePreference {
    /// Anything other than "dark"/"light" reads as unset
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("dark") => ThemePreference::Dark,
            Some("light") => ThemePreference::Light,
            _ => ThemePreference::Unset,
        }
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        }
    }

    pub fn is_dark(&self) -> Option<bool> {
        match self {
            ThemePreference::Dark => Some(true),
            ThemePreference::Light => Some(false),
            ThemePreference::Unset => None,
        }
    }

    /// Stored record value (None for unset)
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            ThemePreference::Dark => Some("dark"),
            ThemePreference::Light => Some("light"),
            ThemePreference::Unset => None,
        }
    }
}

/// Precedence: stored choice, then OS preference, then light.
pub fn resolve_initial_theme(stored: Option<bool>, os_preference: Option<bool>) -> bool {
    stored.or(os_preference).unwrap_or(false)
}

/// Owns the effective dark flag and is the sole writer of its [`ThemeMarker`].
pub struct ThemeResolver<S, Q> {
    store: S,
    query: Q,
    marker: ThemeMarker,
    is_dark: bool,
}

impl<S: PreferenceStore, Q: ColorSchemeQuery> ThemeResolver<S, Q> {
    /// Starts light; call [`initialize`](Self::initialize) once at mount.
    pub fn new(store: S, query: Q, marker: ThemeMarker) -> Self {
        Self {
            store,
            query,
            marker,
            is_dark: false,
        }
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    pub fn marker(&self) -> &ThemeMarker {
        &self.marker
    }

    /// Persisted preference, with read failures collapsed to unset
    pub fn stored_preference(&self) -> ThemePreference {
        match self.store.load(STORAGE_KEY) {
            Ok(value) => {
                let preference = ThemePreference::parse(value.as_deref());
                if let (ThemePreference::Unset, Some(raw)) = (preference, value.as_deref()) {
                    tracing::debug!("Ignoring unrecognized stored theme {:?}", raw);
                }
                preference
            }
            Err(e) => {
                tracing::debug!("Theme preference unreadable, treating as unset: {}", e);
                ThemePreference::Unset
            }
        }
    }

    fn os_preference(&self) -> Option<bool> {
        match self.query.prefers_dark() {
            Ok(dark) => Some(dark),
            Err(e) => {
                tracing::debug!("{}, defaulting to light", e);
                None
            }
        }
    }

    /// Resolve the effective theme and publish it. Never fails.
    pub fn initialize(&mut self) -> bool {
        let stored = self.stored_preference().is_dark();
        // The OS is only consulted when nothing usable was persisted
        let os_preference = match stored {
            Some(_) => None,
            None => self.os_preference(),
        };

        self.is_dark = resolve_initial_theme(stored, os_preference);
        self.marker.publish(self.is_dark);

        tracing::debug!(
            "Theme initialized: dark={} (stored={:?}, os={:?})",
            self.is_dark,
            stored,
            os_preference
        );
        self.is_dark
    }

    /// Flip the theme; returns the new value.
    ///
    /// The in-memory flag and marker are updated before the write, so a failed
    /// write leaves the session consistent but unpersisted.
    pub fn toggle(&mut self) -> bool {
        let next = !self.is_dark;
        self.is_dark = next;
        self.marker.publish(next);

        if let Some(value) = ThemePreference::from_dark(next).as_str() {
            if let Err(e) = self.store.save(STORAGE_KEY, value) {
                tracing::debug!("Theme preference not persisted: {}", e);
            }
        }
        next
    }
}

/// Resolver wired to the backends for the current target
pub type PlatformResolver = ThemeResolver<PlatformStore, PlatformColorScheme>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ThemeError;

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn load(&self, _key: &str) -> Result<Option<String>, ThemeError> {
            Err(ThemeError::StoreRead("SecurityError".into()))
        }

        fn save(&self, _key: &str, _value: &str) -> Result<(), ThemeError> {
            Err(ThemeError::StoreWrite("QuotaExceededError".into()))
        }
    }

    /// Panics if consulted; proves the OS query is skipped
    struct UnreachableQuery;

    impl ColorSchemeQuery for UnreachableQuery {
        fn prefers_dark(&self) -> Result<bool, ThemeError> {
            panic!("OS preference must not be queried when a choice is stored");
        }
    }

    #[test]
    fn test_resolve_initial_theme_precedence() {
        assert!(resolve_initial_theme(Some(true), Some(false)));
        assert!(!resolve_initial_theme(Some(false), Some(true)));
        assert!(resolve_initial_theme(None, Some(true)));
        assert!(!resolve_initial_theme(None, Some(false)));
        assert!(!resolve_initial_theme(None, None));
    }

    #[test]
    fn test_preference_parse() {
        assert_eq!(ThemePreference::parse(Some("dark")), ThemePreference::Dark);
        assert_eq!(ThemePreference::parse(Some("light")), ThemePreference::Light);
        assert_eq!(ThemePreference::parse(None), ThemePreference::Unset);
        assert_eq!(ThemePreference::parse(Some("")), ThemePreference::Unset);
        assert_eq!(ThemePreference::parse(Some("Dark")), ThemePreference::Unset);
        assert_eq!(ThemePreference::parse(Some("system")), ThemePreference::Unset);
    }

    #[test]
    fn test_stored_choice_skips_os_query() {
        let store = MemoryStore::with_entry(STORAGE_KEY, "dark");
        let mut resolver = ThemeResolver::new(store, UnreachableQuery, ThemeMarker::new());
        assert!(resolver.initialize());
    }

    #[test]
    fn test_garbage_value_falls_through_to_os() {
        let store = MemoryStore::with_entry(STORAGE_KEY, "purple");
        let mut resolver =
            ThemeResolver::new(store, FixedColorScheme(Some(true)), ThemeMarker::new());
        assert!(resolver.initialize());
        assert_eq!(resolver.stored_preference(), ThemePreference::Unset);
    }

    #[test]
    fn test_broken_store_initialize_and_toggle() {
        let marker = ThemeMarker::new();
        let mut resolver =
            ThemeResolver::new(BrokenStore, FixedColorScheme(None), marker.clone());

        assert!(!resolver.initialize());
        assert!(!marker.is_dark());

        assert!(resolver.toggle());
        assert!(resolver.is_dark());
        assert!(marker.is_dark());
    }

    #[test]
    fn test_toggle_writes_light_value() {
        let store = MemoryStore::with_entry(STORAGE_KEY, "dark");
        let mut resolver =
            ThemeResolver::new(store.clone(), FixedColorScheme(None), ThemeMarker::new());
        resolver.initialize();

        assert!(!resolver.toggle());
        assert_eq!(store.get(STORAGE_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_initialize_does_not_write_store() {
        let store = MemoryStore::new();
        let mut resolver =
            ThemeResolver::new(store.clone(), FixedColorScheme(Some(true)), ThemeMarker::new());
        resolver.initialize();
        assert_eq!(store.get(STORAGE_KEY), None);
    }
}
