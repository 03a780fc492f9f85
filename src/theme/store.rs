//! The authoritative, persisted theme preference.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use super::accent::AccentColor;
use super::mode::{ColorMode, FallbackMode};
use super::preference::{ThemePatch, ThemePreference};
use super::tokens::ThemeTokens;
use crate::config::StorageKeys;
use crate::storage::PreferenceStorage;
use crate::store::{lock, Store, Subscription};

/// Owns the live [`ThemePreference`] and is the only path that mutates it.
///
/// Consumers receive a clone of the store (clones share state), read it with
/// [`current`](Self::current), react to changes through
/// [`subscribe`](Self::subscribe), and change it only via
/// [`toggle_mode`](Self::toggle_mode) and
/// [`set_accent_color`](Self::set_accent_color). Each mutation updates memory,
/// notifies subscribers, then writes the changed field to storage, all while
/// holding the storage lock, so concurrent mutations from clones are applied,
/// published and persisted in one order. Listeners must not mutate the store
/// from inside a notification. Storage failures are logged and otherwise
/// ignored: the in-memory value stays authoritative for the session.
///
/// # Example
///
/// ```rust
/// use dashboard_shell::{ColorMode, MemoryStorage, ThemeStore};
///
/// let storage = MemoryStorage::new();
/// let theme = ThemeStore::new(storage.clone());
/// theme.initialize();
///
/// theme.toggle_mode();
/// theme.set_accent_color("#722ED1");
///
/// let pref = theme.current();
/// assert_eq!(pref.mode, ColorMode::Dark);
/// assert_eq!(pref.accent_color, "#722ED1");
/// assert_eq!(storage.peek("theme").as_deref(), Some("dark"));
/// ```
#[derive(Clone)]
pub struct ThemeStore {
    state: Store<ThemePreference>,
    storage: Arc<Mutex<Box<dyn PreferenceStorage>>>,
    keys: StorageKeys,
    fallback: FallbackMode,
    initialized: Arc<AtomicBool>,
}

impl ThemeStore {
    /// Creates a store over `storage` with the stock keys and a light fallback.
    ///
    /// The store holds defaults until [`initialize`](Self::initialize) runs.
    pub fn new<S: PreferenceStorage + 'static>(storage: S) -> Self {
        let storage: Box<dyn PreferenceStorage> = Box::new(storage);
        Self {
            state: Store::new(ThemePreference::default()),
            storage: Arc::new(Mutex::new(storage)),
            keys: StorageKeys::default(),
            fallback: FallbackMode::default(),
            initialized: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Uses different storage keys.
    pub fn with_keys(mut self, keys: StorageKeys) -> Self {
        self.keys = keys;
        self
    }

    /// Chooses where the mode comes from when none is persisted.
    pub fn with_fallback(mut self, fallback: FallbackMode) -> Self {
        self.fallback = fallback;
        self
    }

    /// Loads the persisted preference. Runs once; later calls are no-ops.
    ///
    /// Each key is read independently. A missing, unreadable or malformed
    /// value falls back to its default without affecting the other key.
    pub fn initialize(&self) -> ThemePreference {
        if self.initialized.swap(true, Ordering::SeqCst) {
            log::debug!("theme store already initialized");
            return self.current();
        }

        let storage = lock(&self.storage);
        let mode = read(&**storage, &self.keys.mode)
            .and_then(|raw| match raw.parse::<ColorMode>() {
                Ok(mode) => Some(mode),
                Err(e) => {
                    log::warn!("ignoring persisted {}: {}", self.keys.mode, e);
                    None
                }
            })
            .unwrap_or_else(|| self.fallback.resolve());

        let accent_color = read(&**storage, &self.keys.accent_color)
            .and_then(|raw| {
                let parsed = AccentColor::from_persisted(&raw);
                if parsed.is_none() {
                    log::warn!("ignoring blank persisted {}", self.keys.accent_color);
                }
                parsed
            })
            .unwrap_or_default();

        let pref = ThemePreference { mode, accent_color };
        log::debug!(
            "theme initialized: mode={} accent={}",
            pref.mode,
            pref.accent_color
        );
        self.state.set(pref.clone());
        drop(storage);
        pref
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    /// The live preference.
    pub fn current(&self) -> ThemePreference {
        self.state.get()
    }

    /// Tokens for the live preference.
    pub fn resolved_tokens(&self) -> ThemeTokens {
        ThemeTokens::resolve(&self.current())
    }

    /// Flips between light and dark, persists the new mode, and returns it.
    pub fn toggle_mode(&self) -> ColorMode {
        let mut storage = lock(&self.storage);
        let mode = self.state.update(|pref| pref.mode = pref.mode.toggled()).mode;
        persist(&mut **storage, &self.keys.mode, mode.as_str());
        mode
    }

    /// Sets the accent color and persists it.
    ///
    /// Colors outside the palette are accepted as given.
    pub fn set_accent_color(&self, color: impl Into<AccentColor>) {
        let color = color.into();
        if !color.is_in_palette() {
            log::debug!("accent {} is not a palette color", color);
        }
        let value = color.as_str().to_string();
        let mut storage = lock(&self.storage);
        self.state.update(move |pref| pref.accent_color = color);
        persist(&mut **storage, &self.keys.accent_color, &value);
    }

    /// Applies a partial update, persisting only the fields it sets.
    pub fn apply(&self, patch: ThemePatch) {
        if patch.is_empty() {
            return;
        }
        let mode = patch.mode;
        let accent = patch.accent_color.clone();
        if let Some(ref color) = accent {
            if !color.is_in_palette() {
                log::debug!("accent {} is not a palette color", color);
            }
        }
        let mut storage = lock(&self.storage);
        self.state.update(move |pref| pref.apply(patch));
        if let Some(mode) = mode {
            persist(&mut **storage, &self.keys.mode, mode.as_str());
        }
        if let Some(color) = accent {
            persist(&mut **storage, &self.keys.accent_color, color.as_str());
        }
    }

    /// Registers a listener notified after every change.
    #[must_use = "dropping the subscription unsubscribes the listener"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&ThemePreference) + Send + Sync + 'static,
    {
        self.state.subscribe(listener)
    }

    pub fn subscriber_count(&self) -> usize {
        self.state.subscriber_count()
    }
}

fn read(storage: &dyn PreferenceStorage, key: &str) -> Option<String> {
    match storage.get(key) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("failed to read {} from preference storage: {}", key, e);
            None
        }
    }
}

fn persist(storage: &mut dyn PreferenceStorage, key: &str, value: &str) {
    if let Err(e) = storage.set(key, value) {
        log::warn!("failed to persist {}={}: {}", key, value, e);
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("current", &self.current())
            .field("keys", &self.keys)
            .field("fallback", &self.fallback)
            .field("initialized", &self.is_initialized())
            .finish()
    }
}
