//! In-memory document backend.
//!
//! Single-threaded by design: the engine runs each tick synchronously to
//! completion inside the scroll callback, so handles are plain `Rc`s with
//! interior mutability and the whole backend is `!Send`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::collections::HashSet;
use std::rc::Rc;

use super::{Element, ListenerId, ScrollBackend};

#[derive(Debug, Default)]
struct ElementState {
    offset_height: f64,
    offset_top: f64,
    styles: HashMap<String, String>,
}

/// Element handle into a [`MemoryDom`].
#[derive(Clone)]
pub struct MemoryElement {
    state: Rc<RefCell<ElementState>>,
}

impl MemoryElement {
    /// Replace the element's rendered geometry.
    pub fn set_geometry(&self, offset_height: f64, offset_top: f64) {
        let mut state = self.state.borrow_mut();
        state.offset_height = offset_height;
        state.offset_top = offset_top;
    }

    /// Snapshot of every inline style currently set on the element.
    pub fn styles(&self) -> HashMap<String, String> {
        self.state.borrow().styles.clone()
    }
}

impl Element for MemoryElement {
    fn offset_height(&self) -> f64 {
        self.state.borrow().offset_height
    }

    fn offset_top(&self) -> f64 {
        self.state.borrow().offset_top
    }

    fn set_style(&self, property: &str, value: &str) {
        self.state
            .borrow_mut()
            .styles
            .insert(property.to_string(), value.to_string());
    }

    fn style(&self, property: &str) -> Option<String> {
        self.state.borrow().styles.get(property).cloned()
    }
}

#[derive(Default)]
struct DomState {
    elements: HashMap<String, MemoryElement>,
    scroll_offset: f64,
    viewport_height: f64,
    listeners: Vec<(ListenerId, Box<dyn FnMut()>)>,
    detached: HashSet<ListenerId>,
    next_listener: u64,
}

/// An in-memory stand-in for the host document and viewport.
///
/// Clones share state, mirroring how multiple references to `document`
/// observe the same page.
#[derive(Clone, Default)]
pub struct MemoryDom {
    state: Rc<RefCell<DomState>>,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_viewport_height(height: f64) -> Self {
        let dom = Self::default();
        dom.set_viewport_height(height);
        dom
    }

    /// Register an element under `id` and return its handle.
    pub fn insert_element(&self, id: &str, offset_height: f64, offset_top: f64) -> MemoryElement {
        let element = MemoryElement {
            state: Rc::new(RefCell::new(ElementState {
                offset_height,
                offset_top,
                styles: HashMap::new(),
            })),
        };
        self.state
            .borrow_mut()
            .elements
            .insert(id.to_string(), element.clone());
        element
    }

    pub fn set_scroll_offset(&self, offset: f64) {
        self.state.borrow_mut().scroll_offset = offset;
    }

    pub fn set_viewport_height(&self, height: f64) {
        self.state.borrow_mut().viewport_height = height;
    }

    /// Move the viewport and notify listeners, like a real scroll event.
    pub fn scroll_to(&self, offset: f64) {
        self.set_scroll_offset(offset);
        self.emit_scroll();
    }

    /// Synchronously invoke every scroll listener.
    ///
    /// Listeners are taken out of the shared state for the duration of the
    /// dispatch so they may re-enter the backend (read geometry, register
    /// or remove listeners) without aliasing the `RefCell`.
    pub fn emit_scroll(&self) {
        let mut active = std::mem::take(&mut self.state.borrow_mut().listeners);
        for (id, listener) in active.iter_mut() {
            let skip = self.state.borrow().detached.contains(id);
            if !skip {
                listener();
            }
        }
        let mut state = self.state.borrow_mut();
        let added = std::mem::take(&mut state.listeners);
        active.extend(added);
        let detached = std::mem::take(&mut state.detached);
        active.retain(|(id, _)| !detached.contains(id));
        state.listeners = active;
    }

    /// Number of currently attached scroll listeners.
    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }
}

impl ScrollBackend for MemoryDom {
    type Element = MemoryElement;

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.state.borrow().elements.get(id).cloned()
    }

    fn scroll_offset(&self) -> f64 {
        self.state.borrow().scroll_offset
    }

    fn viewport_height(&self) -> f64 {
        self.state.borrow().viewport_height
    }

    fn add_scroll_listener(&self, listener: Box<dyn FnMut()>) -> ListenerId {
        let mut state = self.state.borrow_mut();
        let id = ListenerId(state.next_listener);
        state.next_listener += 1;
        state.listeners.push((id, listener));
        id
    }

    fn remove_scroll_listener(&self, id: ListenerId) {
        let mut state = self.state.borrow_mut();
        state.detached.insert(id);
        state.listeners.retain(|(listener_id, _)| *listener_id != id);
    }
}
