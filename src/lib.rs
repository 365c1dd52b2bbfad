//! Scroll-driven style animation.
//!
//! `scrollstyle` interpolates CSS style properties on a target element as
//! a function of a container element's scroll progress: a set of
//! percentage ranges, each carrying per-property `from`/`to` transitions,
//! is evaluated on every scroll tick into a patch of inline styles
//! (numeric lerp for opacity/transform/blur, `color-mix` for colors).
//!
//! The host document is abstracted behind the [`dom`] traits; the crate
//! ships an in-memory backend for tests, demos, and headless use.
//!
//! ```
//! use scrollstyle::prelude::*;
//!
//! let dom = MemoryDom::with_viewport_height(500.0);
//! dom.insert_element("container-1", 1000.0, 1000.0);
//! let content = dom.insert_element("content-1", 400.0, 1100.0);
//!
//! let options = vec![
//!     AnimationOption::range(0.0, 90.0)
//!         .style(StyleProperty::Opacity, 0.0, 1.0)
//!         .style(StyleProperty::Rotate, 45.0, 0.0),
//! ];
//!
//! let _binding = scrollstyle::bind(&dom, "container-1", "content-1", &options)?;
//! dom.scroll_to(950.0);
//! assert_eq!(content.style("opacity").as_deref(), Some("0.5"));
//! assert_eq!(content.style("transform").as_deref(), Some("rotate(22.5deg) "));
//! # Ok::<(), scrollstyle::error::BindError>(())
//! ```

pub mod animation;
pub mod dom;
pub mod engine;
pub mod error;
pub mod scroll;
pub mod style;

use animation::{validate_options, AnimationOption};
use dom::{Element, ListenerId, ScrollBackend};
use scroll::{ContainerGeometry, ViewportState};

pub mod prelude {
    pub use crate::animation::{
        validate_options, Animatable, AnimationOption, PercentageRange, StyleEndpoint,
        StyleTransition,
    };
    pub use crate::dom::{Element, ListenerId, MemoryDom, MemoryElement, ScrollBackend};
    pub use crate::engine::{tick, TickReport, Visibility};
    pub use crate::error::{BindError, StyleError, TickError};
    pub use crate::scroll::{in_view, scroll_percentage, ContainerGeometry, ViewportState};
    pub use crate::style::{StyleFragment, StylePatch, StyleProperty};
    pub use crate::{bind, Binding};
}

/// Attach a scroll animation to the backend.
///
/// Resolves both elements, validates the option list, runs the pipeline
/// once against current geometry, then re-runs it on every scroll
/// notification for the lifetime of the returned [`Binding`].
///
/// Tick-level failures (a transition with a missing or non-numeric
/// endpoint) are logged and swallowed inside the scroll callback — they
/// never unwind into the backend's event dispatch — and the binding
/// self-heals on the next tick once the configuration is fixed. Use
/// [`engine::tick`] directly when a tick's outcome needs to be observed.
///
/// Each `(container, target, options)` triple is independent; the same
/// option list may back any number of bindings.
pub fn bind<B>(
    backend: &B,
    container_id: &str,
    target_id: &str,
    options: &[AnimationOption],
) -> Result<Binding<B>, error::BindError>
where
    B: ScrollBackend + Clone + 'static,
{
    let container =
        backend
            .element_by_id(container_id)
            .ok_or_else(|| error::BindError::ElementNotFound {
                id: container_id.to_string(),
            })?;
    let target =
        backend
            .element_by_id(target_id)
            .ok_or_else(|| error::BindError::ElementNotFound {
                id: target_id.to_string(),
            })?;
    validate_options(options)?;

    let handle = backend.clone();
    let options = options.to_vec();
    let mut run = move || {
        let geometry = ContainerGeometry {
            offset_height: container.offset_height(),
            offset_top: container.offset_top(),
        };
        let viewport = ViewportState {
            scroll_offset: handle.scroll_offset(),
            height: handle.viewport_height(),
        };
        if let Err(error) = engine::tick(&target, geometry, viewport, &options) {
            log::warn!("scroll tick skipped: {error}");
        }
    };

    run();
    let listener = backend.add_scroll_listener(Box::new(run));

    Ok(Binding {
        backend: backend.clone(),
        listener,
        detached: false,
    })
}

/// Handle to an attached scroll animation.
///
/// Dropping the handle detaches the scroll listener; call
/// [`unbind`](Binding::unbind) to make the teardown explicit.
pub struct Binding<B: ScrollBackend> {
    backend: B,
    listener: ListenerId,
    detached: bool,
}

impl<B: ScrollBackend> Binding<B> {
    /// Detach the scroll listener. The target keeps whatever styles the
    /// last tick wrote.
    pub fn unbind(mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        if !self.detached {
            self.backend.remove_scroll_listener(self.listener);
            self.detached = true;
        }
    }
}

impl<B: ScrollBackend> std::fmt::Debug for Binding<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding")
            .field("listener", &self.listener)
            .field("detached", &self.detached)
            .finish_non_exhaustive()
    }
}

impl<B: ScrollBackend> Drop for Binding<B> {
    fn drop(&mut self) {
        self.detach();
    }
}
