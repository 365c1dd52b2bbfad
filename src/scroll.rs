//! Scroll progress measurement.
//!
//! Converts raw container/viewport geometry into a single signed
//! percentage. The value is deliberately unclamped: negative means the
//! container has not been reached yet, above 100 means it has been
//! scrolled past. Everything downstream keys off that classification.

/// Rendered geometry of the container element, sampled each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerGeometry {
    pub offset_height: f64,
    pub offset_top: f64,
}

/// Viewport state, sampled each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub scroll_offset: f64,
    pub height: f64,
}

/// Compute the container's scroll progress on the 0–100 scale.
///
/// A container pinned at the very top of the document (`offset_top == 0`)
/// has no "scroll into view" phase, so both the scroll baseline and the
/// scrollable span drop one viewport height.
///
/// Pure function of its inputs; a zero scrollable span cannot yield NaN —
/// the container is treated as pinned at its start (0) or classified out
/// of range with a signed infinity.
pub fn scroll_percentage(geometry: ContainerGeometry, viewport: ViewportState) -> f64 {
    let topmost = geometry.offset_top == 0.0;

    let mut total_scroll = viewport.scroll_offset + viewport.height;
    if topmost {
        total_scroll -= viewport.height;
    }

    let travelled = total_scroll - geometry.offset_top;
    let span = if topmost {
        geometry.offset_height - viewport.height
    } else {
        geometry.offset_height
    };

    if span == 0.0 {
        return if travelled == 0.0 {
            0.0
        } else {
            travelled.signum() * f64::INFINITY
        };
    }

    travelled / span * 100.0
}

/// Whether a percentage counts as "in view". Bounds are inclusive.
pub fn in_view(percentage: f64) -> bool {
    (0.0..=100.0).contains(&percentage)
}
