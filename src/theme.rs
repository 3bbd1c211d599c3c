//! Theme switching: mirrors the chosen theme onto the root element as a
//! class marker, persists it, and optionally follows the system color
//! scheme.
//!
//! The controller holds at most one system-preference subscription. Every
//! `switch_theme` call releases the previous one before deciding whether to
//! register a new one, so repeated calls never stack listeners.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::config::{DomkitConfig, DEFAULT_STORAGE_KEY};
use crate::error::DomkitError;
use crate::platform::{ColorSchemeSignal, KeyValueStore, MarkerSet};

/// Requesting this theme follows the system color scheme.
pub const SYSTEM_THEME: &str = "system";

pub const DEFAULT_THEMES: [&str; 2] = ["light", "dark"];

/// Markers `set_theme` always strips, independent of the caller's list.
const SET_THEME_CLEANUP: [&str; 2] = ["light", "dark"];

/// A concrete theme resolved from the system preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

pub struct ThemeController<R, K, S>
where
    R: MarkerSet,
    K: KeyValueStore,
    S: ColorSchemeSignal,
{
    root: Rc<R>,
    store: Rc<K>,
    signal: S,
    storage_key: Rc<str>,
    subscription: RefCell<Option<S::Handle>>,
}

impl<R, K, S> ThemeController<R, K, S>
where
    R: MarkerSet + 'static,
    K: KeyValueStore + 'static,
    S: ColorSchemeSignal,
{
    pub fn new(root: Rc<R>, store: Rc<K>, signal: S) -> Self {
        Self {
            root,
            store,
            signal,
            storage_key: Rc::from(DEFAULT_STORAGE_KEY),
            subscription: RefCell::new(None),
        }
    }

    /// Fails if `config` does not validate (e.g. an empty storage key).
    pub fn with_config(
        root: Rc<R>,
        store: Rc<K>,
        signal: S,
        config: &DomkitConfig,
    ) -> Result<Self, DomkitError> {
        config.validate()?;
        let mut controller = Self::new(root, store, signal);
        controller.storage_key = Rc::from(config.storage_key.as_str());
        Ok(controller)
    }

    /// Switch to `theme`, or follow the system preference when it is
    /// `"system"`. `allowed_themes` lists the markers stripped first.
    ///
    /// An empty `theme` logs a warning and changes nothing.
    pub fn switch_theme(&self, theme: &str, allowed_themes: &[&str]) {
        if theme.is_empty() {
            warn!("switch_theme: no theme provided");
            return;
        }

        for name in allowed_themes {
            self.root.remove(name);
        }

        let previous = self.subscription.borrow_mut().take();
        if let Some(handle) = previous {
            self.signal.unsubscribe(handle);
        }

        if theme != SYSTEM_THEME {
            debug!("Switching to theme '{}'", theme);
            set_theme(&*self.root, &*self.store, &self.storage_key, theme);
            return;
        }

        let scheme = ColorScheme::from_prefers_dark(self.signal.prefers_dark());
        debug!("Following system color scheme, currently '{}'", scheme.as_str());
        set_theme(&*self.root, &*self.store, &self.storage_key, scheme.as_str());

        let root = Rc::clone(&self.root);
        let store = Rc::clone(&self.store);
        let key = Rc::clone(&self.storage_key);
        let handle = self.signal.subscribe(Rc::new(move |prefers_dark: bool| {
            let scheme = ColorScheme::from_prefers_dark(prefers_dark);
            debug!("System color scheme changed to '{}'", scheme.as_str());
            set_theme(&*root, &*store, &key, scheme.as_str());
        }));
        *self.subscription.borrow_mut() = Some(handle);
    }

    /// `switch_theme("system", ["light", "dark"])`.
    pub fn switch_system_theme(&self) {
        self.switch_theme(SYSTEM_THEME, &DEFAULT_THEMES);
    }

    /// The last persisted theme, or None if nothing was ever stored.
    pub fn get_theme(&self) -> Option<String> {
        self.store.get(&self.storage_key)
    }

    pub fn is_following_system(&self) -> bool {
        self.subscription.borrow().is_some()
    }
}

impl<R, K, S> Drop for ThemeController<R, K, S>
where
    R: MarkerSet,
    K: KeyValueStore,
    S: ColorSchemeSignal,
{
    fn drop(&mut self) {
        if let Some(handle) = self.subscription.get_mut().take() {
            self.signal.unsubscribe(handle);
        }
    }
}

/// Replace the light/dark marker with `theme` and persist it.
/// Nothing is persisted if the root rejects the marker.
pub(crate) fn set_theme(root: &impl MarkerSet, store: &impl KeyValueStore, key: &str, theme: &str) {
    if theme.is_empty() {
        warn!("set_theme: no theme provided");
        return;
    }

    for name in SET_THEME_CLEANUP {
        root.remove(name);
    }
    if !root.add(theme) {
        warn!("set_theme: '{}' is not a valid marker, not persisting", theme);
        return;
    }
    store.set(key, theme);
}
