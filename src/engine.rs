//! The per-binding tick pipeline.
//!
//! A tick is a pure function of current geometry: compute the scroll
//! percentage, toggle visibility, then interpolate and apply every
//! matching option in list order. Ticks are idempotent, so rapid
//! consecutive scroll events need no locking or debouncing.

use crate::animation::AnimationOption;
use crate::dom::Element;
use crate::error::TickError;
use crate::scroll::{self, ContainerGeometry, ViewportState};

/// All-or-nothing visibility of the target, driven solely by whether the
/// percentage lies in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    fn as_css(self) -> &'static str {
        match self {
            Visibility::Visible => "visible",
            Visibility::Hidden => "hidden",
        }
    }
}

/// What one tick computed and applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// The container's scroll percentage this tick.
    pub percentage: f64,
    /// Visibility written to the target.
    pub visibility: Visibility,
    /// How many options matched and had their patch applied.
    pub options_applied: usize,
}

/// Run one tick of the pipeline against `target`.
///
/// Visibility is written before any interpolation, so a misconfigured
/// option cannot leave the target wrongly hidden or shown. A failing
/// option aborts the rest of the pass and surfaces as [`TickError`];
/// earlier options' writes stay in place, and the next tick starts over
/// from fresh geometry.
pub fn tick<E: Element>(
    target: &E,
    geometry: ContainerGeometry,
    viewport: ViewportState,
    options: &[AnimationOption],
) -> Result<TickReport, TickError> {
    let percentage = scroll::scroll_percentage(geometry, viewport);
    let visibility = if scroll::in_view(percentage) {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };
    target.set_style("visibility", visibility.as_css());

    if visibility == Visibility::Hidden {
        return Ok(TickReport {
            percentage,
            visibility,
            options_applied: 0,
        });
    }

    let mut options_applied = 0;
    for (index, option) in options.iter().enumerate() {
        if !option.percentage.contains(percentage) {
            continue;
        }
        let ratio = option.percentage.ratio(percentage);
        let patch = option.patch(ratio).map_err(|source| TickError {
            option: index,
            source,
        })?;
        patch.apply_to(target);
        options_applied += 1;
    }

    Ok(TickReport {
        percentage,
        visibility,
        options_applied,
    })
}
