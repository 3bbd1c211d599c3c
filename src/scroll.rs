use crate::platform::{ElementLookup, ScrollTarget};

/// Mirrors the DOM `ScrollBehavior` enum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
    Auto,
}

impl From<ScrollBehavior> for web_sys::ScrollBehavior {
    fn from(behavior: ScrollBehavior) -> Self {
        match behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
            ScrollBehavior::Auto => web_sys::ScrollBehavior::Auto,
        }
    }
}

/// Scroll the element with the given id into view.
/// Returns the element if it exists; otherwise does nothing and returns None.
pub fn scroll_into_view_by_id<L: ElementLookup>(
    lookup: &L,
    id: &str,
    behavior: ScrollBehavior,
) -> Option<L::Element> {
    let element = lookup.element_by_id(id)?;
    element.scroll_into_view(behavior);
    Some(element)
}
