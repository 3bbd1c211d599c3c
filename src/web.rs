//! web-sys backends for the capability traits, plus shortcuts that wire the
//! helpers to the live page.

use std::rc::Rc;
use std::time::Duration;

use tracing::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, MediaQueryList, MediaQueryListEvent, ScrollIntoViewOptions, Storage, Window};

use crate::config::DomkitConfig;
use crate::debounce::{self, Debounced};
use crate::error::DomkitError;
use crate::platform::{
    ColorSchemeSignal, ElementLookup, KeyValueStore, MarkerSet, SchemeListener, ScrollTarget,
    Timer,
};
use crate::scroll::{self, ScrollBehavior};
use crate::sniff::{self, Browser, Os};
use crate::theme::ThemeController;

pub type WebThemeController = ThemeController<DocumentRoot, LocalStore, MediaQuerySignal>;

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

pub fn window() -> Result<Window, DomkitError> {
    web_sys::window().ok_or_else(|| DomkitError::Window("No global window".to_string()))
}

pub fn document() -> Result<Document, DomkitError> {
    window()?
        .document()
        .ok_or_else(|| DomkitError::Document("Window has no document".to_string()))
}

pub fn navigator_user_agent() -> Result<String, DomkitError> {
    window()?
        .navigator()
        .user_agent()
        .map_err(|e| DomkitError::Window(format!("Failed to read user agent: {}", js_error(e))))
}

/// The class list of `<html>`.
pub struct DocumentRoot {
    element: Element,
}

impl DocumentRoot {
    pub fn new() -> Result<Self, DomkitError> {
        let element = document()?
            .document_element()
            .ok_or_else(|| DomkitError::Document("Document has no root element".to_string()))?;
        Ok(Self { element })
    }
}

impl MarkerSet for DocumentRoot {
    fn add(&self, name: &str) -> bool {
        match self.element.class_list().add_1(name) {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to add class '{}': {}", name, js_error(e));
                false
            }
        }
    }

    fn remove(&self, name: &str) {
        if let Err(e) = self.element.class_list().remove_1(name) {
            warn!("Failed to remove class '{}': {}", name, js_error(e));
        }
    }

    fn contains(&self, name: &str) -> bool {
        self.element.class_list().contains(name)
    }
}

/// `window.localStorage`.
pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    pub fn new() -> Result<Self, DomkitError> {
        let storage = window()?
            .local_storage()
            .map_err(|e| DomkitError::Storage(js_error(e)))?
            .ok_or_else(|| DomkitError::Storage("localStorage is unavailable".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = self.storage.set_item(key, value) {
            warn!("Failed to store '{}': {}", key, js_error(e));
        }
    }
}

/// `window.matchMedia(query)`; a match means dark is preferred.
pub struct MediaQuerySignal {
    query: MediaQueryList,
}

/// Keeps the `change` listener alive until handed back to `unsubscribe`.
pub struct MediaQuerySubscription {
    callback: Closure<dyn FnMut(MediaQueryListEvent)>,
}

impl MediaQuerySignal {
    pub fn new(media_query: &str) -> Result<Self, DomkitError> {
        let query = window()?
            .match_media(media_query)
            .map_err(|e| DomkitError::MediaQuery(js_error(e)))?
            .ok_or_else(|| {
                DomkitError::MediaQuery(format!("Unsupported media query: {}", media_query))
            })?;
        Ok(Self { query })
    }
}

impl ColorSchemeSignal for MediaQuerySignal {
    type Handle = MediaQuerySubscription;

    fn prefers_dark(&self) -> bool {
        self.query.matches()
    }

    fn subscribe(&self, listener: SchemeListener) -> MediaQuerySubscription {
        let callback = Closure::<dyn FnMut(MediaQueryListEvent)>::new(
            move |event: MediaQueryListEvent| listener(event.matches()),
        );
        if let Err(e) = self
            .query
            .add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
        {
            warn!("Failed to observe color scheme: {}", js_error(e));
        }
        MediaQuerySubscription { callback }
    }

    fn unsubscribe(&self, handle: MediaQuerySubscription) {
        if let Err(e) = self
            .query
            .remove_event_listener_with_callback("change", handle.callback.as_ref().unchecked_ref())
        {
            warn!("Failed to stop observing color scheme: {}", js_error(e));
        }
    }
}

/// `setTimeout` / `clearTimeout` on the global window.
pub struct WindowTimer {
    window: Window,
}

impl WindowTimer {
    pub fn new() -> Result<Self, DomkitError> {
        Ok(Self { window: window()? })
    }
}

impl Timer for WindowTimer {
    type Handle = i32;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Result<i32, DomkitError> {
        let callback = Closure::once_into_js(move || task());
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                delay.as_millis().min(i32::MAX as u128) as i32,
            )
            .map_err(|e| DomkitError::Timer(js_error(e)))
    }

    fn cancel(&self, handle: i32) {
        self.window.clear_timeout_with_handle(handle);
    }
}

pub struct WebDocument {
    document: Document,
}

impl WebDocument {
    pub fn new() -> Result<Self, DomkitError> {
        Ok(Self { document: document()? })
    }
}

impl ElementLookup for WebDocument {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }
}

impl ScrollTarget for Element {
    fn scroll_into_view(&self, behavior: ScrollBehavior) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(behavior.into());
        self.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Theme controller bound to `<html>`, `localStorage` and the configured media query.
pub fn theme_controller(config: &DomkitConfig) -> Result<WebThemeController, DomkitError> {
    ThemeController::with_config(
        Rc::new(DocumentRoot::new()?),
        Rc::new(LocalStore::new()?),
        MediaQuerySignal::new(&config.media_query)?,
        config,
    )
}

pub fn detect_browser() -> Result<Option<Browser>, DomkitError> {
    let user_agent = navigator_user_agent()?;
    Ok(sniff::detect_browser(&user_agent, &DocumentRoot::new()?))
}

pub fn detect_os() -> Result<Option<Os>, DomkitError> {
    let user_agent = navigator_user_agent()?;
    Ok(sniff::detect_os(&user_agent, &DocumentRoot::new()?))
}

pub fn scroll_into_view_by_id(
    id: &str,
    behavior: ScrollBehavior,
) -> Result<Option<Element>, DomkitError> {
    Ok(scroll::scroll_into_view_by_id(&WebDocument::new()?, id, behavior))
}

pub fn debounce<A, F>(callback: F, wait: Duration) -> Result<Debounced<A, WindowTimer>, DomkitError>
where
    F: Fn(A) + 'static,
{
    Ok(debounce::debounce(WindowTimer::new()?, callback, wait))
}
