//! The closed set of animatable style properties and the CSS fragments
//! they produce.
//!
//! Statically-built configurations can never name an unsupported
//! property: the enum is exhaustive and formatting is attached per
//! variant. Dynamically supplied configurations (JSON options) go through
//! [`StyleProperty::from_str`], where an unknown name surfaces as
//! [`StyleError::UnsupportedProperty`].

mod patch;

pub use patch::StylePatch;

use crate::error::StyleError;
use std::fmt;
use std::str::FromStr;

/// A style property the engine knows how to interpolate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    Opacity,
    TranslateX,
    TranslateY,
    Scale,
    Rotate,
    Blur,
    Color,
    Background,
}

impl StyleProperty {
    /// Every supported property, in a stable order.
    pub const ALL: &[StyleProperty] = &[
        StyleProperty::Opacity,
        StyleProperty::TranslateX,
        StyleProperty::TranslateY,
        StyleProperty::Scale,
        StyleProperty::Rotate,
        StyleProperty::Blur,
        StyleProperty::Color,
        StyleProperty::Background,
    ];

    /// The property's external (config-facing) name.
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleProperty::Opacity => "opacity",
            StyleProperty::TranslateX => "translateX",
            StyleProperty::TranslateY => "translateY",
            StyleProperty::Scale => "scale",
            StyleProperty::Rotate => "rotate",
            StyleProperty::Blur => "blur",
            StyleProperty::Color => "color",
            StyleProperty::Background => "background",
        }
    }

    /// Colors blend via `color-mix`; everything else is a numeric lerp.
    pub fn is_color(&self) -> bool {
        matches!(self, StyleProperty::Color | StyleProperty::Background)
    }

    /// True for properties that emit a transform-function fragment rather
    /// than a standalone patch entry.
    pub fn is_transform(&self) -> bool {
        matches!(
            self,
            StyleProperty::TranslateX
                | StyleProperty::TranslateY
                | StyleProperty::Scale
                | StyleProperty::Rotate
        )
    }

    /// Render an interpolated number into this property's CSS form.
    ///
    /// Only meaningful for the numeric properties; callers dispatch color
    /// properties to `color-mix` before reaching this.
    pub(crate) fn numeric_fragment(self, value: f64) -> StyleFragment {
        match self {
            StyleProperty::Opacity => StyleFragment::entry("opacity", value.to_string()),
            StyleProperty::TranslateX => {
                StyleFragment::transform(format!("translateX({value}px)"))
            }
            StyleProperty::TranslateY => {
                StyleFragment::transform(format!("translateY({value}px)"))
            }
            StyleProperty::Scale => StyleFragment::transform(format!("scale({value})")),
            StyleProperty::Rotate => StyleFragment::transform(format!("rotate({value}deg)")),
            StyleProperty::Blur => StyleFragment::entry("filter", format!("blur({value}px)")),
            StyleProperty::Color | StyleProperty::Background => {
                unreachable!("color properties interpolate via color-mix")
            }
        }
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleProperty {
    type Err = StyleError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        StyleProperty::ALL
            .iter()
            .copied()
            .find(|property| property.as_str() == name)
            .ok_or_else(|| StyleError::UnsupportedProperty {
                name: name.to_string(),
            })
    }
}

/// One raw piece of interpolated style, before composition.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleFragment {
    /// A standalone patch entry (`opacity`, `filter`, `color`, ...).
    Entry {
        property: &'static str,
        value: String,
    },
    /// A transform function (`rotate(…)`, `scale(…)`, ...) to be
    /// concatenated into the single `transform` entry.
    Transform(String),
}

impl StyleFragment {
    pub(crate) fn entry(property: &'static str, value: String) -> Self {
        StyleFragment::Entry { property, value }
    }

    pub(crate) fn transform(function: String) -> Self {
        StyleFragment::Transform(function)
    }
}
