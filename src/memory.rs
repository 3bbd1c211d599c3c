//! In-memory backends for the capability traits. Used by the test suite
//! and by hosts without a DOM.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use crate::error::DomkitError;
use crate::platform::{
    ColorSchemeSignal, ElementLookup, KeyValueStore, MarkerSet, SchemeListener, ScrollTarget,
    Timer,
};
use crate::scroll::ScrollBehavior;

/// Ordered marker list standing in for a root element's class list.
/// Like `DOMTokenList`, it rejects empty names and names containing whitespace.
#[derive(Debug, Default)]
pub struct MemoryRoot {
    markers: RefCell<Vec<String>>,
}

impl MemoryRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn markers(&self) -> Vec<String> {
        self.markers.borrow().clone()
    }
}

impl MarkerSet for MemoryRoot {
    fn add(&self, name: &str) -> bool {
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return false;
        }
        let mut markers = self.markers.borrow_mut();
        if !markers.iter().any(|m| m == name) {
            markers.push(name.to_string());
        }
        true
    }

    fn remove(&self, name: &str) {
        self.markers.borrow_mut().retain(|m| m != name);
    }

    fn contains(&self, name: &str) -> bool {
        self.markers.borrow().iter().any(|m| m == name)
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.writes.set(self.writes.get() + 1);
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// A color-scheme signal driven by hand. Counts subscribe/unsubscribe calls.
#[derive(Default)]
pub struct ManualSignal {
    prefers_dark: Cell<bool>,
    listeners: RefCell<Vec<(u64, SchemeListener)>>,
    next_id: Cell<u64>,
    subscribes: Cell<usize>,
    unsubscribes: Cell<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManualSubscription(u64);

impl ManualSignal {
    pub fn new(prefers_dark: bool) -> Self {
        Self {
            prefers_dark: Cell::new(prefers_dark),
            ..Self::default()
        }
    }

    /// Change the preference and notify every registered listener.
    pub fn set_prefers_dark(&self, dark: bool) {
        self.prefers_dark.set(dark);
        let listeners: Vec<SchemeListener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in listeners {
            listener(dark);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn subscribe_count(&self) -> usize {
        self.subscribes.get()
    }

    pub fn unsubscribe_count(&self) -> usize {
        self.unsubscribes.get()
    }
}

impl ColorSchemeSignal for ManualSignal {
    type Handle = ManualSubscription;

    fn prefers_dark(&self) -> bool {
        self.prefers_dark.get()
    }

    fn subscribe(&self, listener: SchemeListener) -> ManualSubscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.subscribes.set(self.subscribes.get() + 1);
        self.listeners.borrow_mut().push((id, listener));
        ManualSubscription(id)
    }

    fn unsubscribe(&self, handle: ManualSubscription) {
        self.unsubscribes.set(self.unsubscribes.get() + 1);
        self.listeners.borrow_mut().retain(|(id, _)| *id != handle.0);
    }
}

struct PendingTask {
    id: u32,
    due_ms: u64,
    task: Box<dyn FnOnce()>,
}

/// Virtual-clock timer. Tasks run only inside `advance`.
#[derive(Default)]
pub struct ManualTimer {
    now_ms: Cell<u64>,
    next_id: Cell<u32>,
    pending: RefCell<Vec<PendingTask>>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Move the clock forward, running due tasks in order of their deadline.
    pub fn advance(&self, by: Duration) {
        let target = self.now_ms.get() + by.as_millis() as u64;

        loop {
            let next = {
                let mut pending = self.pending.borrow_mut();
                let due = pending
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due_ms <= target)
                    .min_by_key(|(_, p)| (p.due_ms, p.id))
                    .map(|(idx, _)| idx);
                due.map(|idx| pending.remove(idx))
            };

            match next {
                Some(p) => {
                    self.now_ms.set(p.due_ms);
                    (p.task)();
                }
                None => break,
            }
        }

        self.now_ms.set(target);
    }
}

impl Timer for ManualTimer {
    type Handle = u32;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Result<u32, DomkitError> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.pending.borrow_mut().push(PendingTask {
            id,
            due_ms: self.now_ms.get() + delay.as_millis() as u64,
            task,
        });
        Ok(id)
    }

    fn cancel(&self, handle: u32) {
        self.pending.borrow_mut().retain(|p| p.id != handle);
    }
}

/// Element that records every scroll request it receives.
#[derive(Debug, Clone, Default)]
pub struct MemoryElement {
    pub id: String,
    scrolls: Rc<RefCell<Vec<ScrollBehavior>>>,
}

impl MemoryElement {
    pub fn scrolls(&self) -> Vec<ScrollBehavior> {
        self.scrolls.borrow().clone()
    }
}

impl ScrollTarget for MemoryElement {
    fn scroll_into_view(&self, behavior: ScrollBehavior) {
        self.scrolls.borrow_mut().push(behavior);
    }
}

#[derive(Debug, Default)]
pub struct MemoryDocument {
    elements: RefCell<HashMap<String, MemoryElement>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an element; clones returned from lookups share its scroll log.
    pub fn insert(&self, id: &str) -> MemoryElement {
        let element = MemoryElement {
            id: id.to_string(),
            scrolls: Rc::default(),
        };
        self.elements
            .borrow_mut()
            .insert(id.to_string(), element.clone());
        element
    }
}

impl ElementLookup for MemoryDocument {
    type Element = MemoryElement;

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.elements.borrow().get(id).cloned()
    }
}
