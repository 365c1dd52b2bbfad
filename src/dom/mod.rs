//! Backend abstraction over the host document.
//!
//! The engine never touches a real DOM directly; it reads geometry and
//! writes inline styles through these traits. [`MemoryDom`] is the
//! reference implementation used by the tests and demos; a WebView or
//! wasm binding would implement the same pair of traits.

mod memory;

pub use memory::{MemoryDom, MemoryElement};

/// Handle to a single element. Handles are cheap to clone and all clones
/// observe the same underlying element.
pub trait Element: Clone {
    /// Rendered height of the element.
    fn offset_height(&self) -> f64;

    /// Offset of the element from the top of the scrollable root.
    fn offset_top(&self) -> f64;

    /// Write one inline style property, overwriting any prior value for
    /// that key and leaving other keys untouched.
    fn set_style(&self, property: &str, value: &str);

    /// Read back an inline style property, if set.
    fn style(&self, property: &str) -> Option<String>;
}

/// Identifies a registered scroll listener so it can be detached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);

/// The document/viewport capabilities the engine depends on.
pub trait ScrollBackend {
    type Element: Element + 'static;

    /// Resolve an element by its id attribute.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Current vertical scroll offset of the viewport.
    fn scroll_offset(&self) -> f64;

    /// Current viewport height.
    fn viewport_height(&self) -> f64;

    /// Invoke `listener` whenever the scroll position changes. The
    /// callback carries no payload; it re-polls geometry on each call.
    fn add_scroll_listener(&self, listener: Box<dyn FnMut()>) -> ListenerId;

    /// Detach a previously registered listener.
    fn remove_scroll_listener(&self, id: ListenerId);
}
