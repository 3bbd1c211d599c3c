//! Capability traits for the browser globals the helpers depend on.
//!
//! Each trait has a web-sys backend in [`crate::web`] and an in-memory
//! backend in [`crate::memory`].

use std::rc::Rc;
use std::time::Duration;

use crate::error::DomkitError;
use crate::scroll::ScrollBehavior;

/// Class-like markers on the document root (`<html class="...">`).
/// Both operations are idempotent.
pub trait MarkerSet {
    /// Returns false if the marker was rejected (e.g. a name with whitespace).
    fn add(&self, name: &str) -> bool;
    fn remove(&self, name: &str);
    fn contains(&self, name: &str) -> bool;
}

/// Synchronous string key-value persistence, e.g. `localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Listener invoked with the new "prefers dark" value.
pub type SchemeListener = Rc<dyn Fn(bool)>;

/// The OS/browser color-scheme preference.
pub trait ColorSchemeSignal {
    /// Owns one registered listener until passed back to `unsubscribe`.
    type Handle;

    /// One-shot query: is dark currently preferred?
    fn prefers_dark(&self) -> bool;

    fn subscribe(&self, listener: SchemeListener) -> Self::Handle;

    fn unsubscribe(&self, handle: Self::Handle);
}

/// One-shot delayed callbacks, e.g. `setTimeout`.
pub trait Timer {
    type Handle: Copy;

    fn schedule(
        &self,
        delay: Duration,
        task: Box<dyn FnOnce()>,
    ) -> Result<Self::Handle, DomkitError>;

    /// Cancelling a handle that already fired is a no-op.
    fn cancel(&self, handle: Self::Handle);
}

/// An element that can be scrolled into view.
pub trait ScrollTarget {
    fn scroll_into_view(&self, behavior: ScrollBehavior);
}

/// Looks up elements by their `id` attribute.
pub trait ElementLookup {
    type Element: ScrollTarget;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
}

impl<T: MarkerSet + ?Sized> MarkerSet for Rc<T> {
    fn add(&self, name: &str) -> bool {
        (**self).add(name)
    }

    fn remove(&self, name: &str) {
        (**self).remove(name)
    }

    fn contains(&self, name: &str) -> bool {
        (**self).contains(name)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }
}

impl<T: ColorSchemeSignal + ?Sized> ColorSchemeSignal for Rc<T> {
    type Handle = T::Handle;

    fn prefers_dark(&self) -> bool {
        (**self).prefers_dark()
    }

    fn subscribe(&self, listener: SchemeListener) -> Self::Handle {
        (**self).subscribe(listener)
    }

    fn unsubscribe(&self, handle: Self::Handle) {
        (**self).unsubscribe(handle)
    }
}

impl<T: Timer + ?Sized> Timer for Rc<T> {
    type Handle = T::Handle;

    fn schedule(
        &self,
        delay: Duration,
        task: Box<dyn FnOnce()>,
    ) -> Result<Self::Handle, DomkitError> {
        (**self).schedule(delay, task)
    }

    fn cancel(&self, handle: Self::Handle) {
        (**self).cancel(handle)
    }
}
