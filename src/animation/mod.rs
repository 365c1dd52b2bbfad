//! Animation options: percentage ranges and the style transitions they
//! drive.
//!
//! Options are supplied once at bind time and are immutable afterwards.
//! Ranges may overlap; options are applied in list order each tick, so a
//! later option's writes win for any property both touch.

mod animatable;
pub mod schema;

pub use animatable::Animatable;

use crate::error::{BindError, StyleError};
use crate::style::{StyleFragment, StylePatch, StyleProperty};
use serde::Deserialize;
use std::fmt;

/// A range on the 0–100 scroll percentage scale. Bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PercentageRange {
    pub from: f64,
    pub to: f64,
}

impl PercentageRange {
    pub fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    /// Whether `percentage` falls inside the range.
    pub fn contains(&self, percentage: f64) -> bool {
        percentage >= self.from && percentage <= self.to
    }

    /// Local progress within the range: 0 at `from`, 1 at `to`.
    ///
    /// Divides by `to - from`; degenerate ranges are rejected at bind
    /// time so this never sees one.
    pub fn ratio(&self, percentage: f64) -> f64 {
        (percentage - self.from) / (self.to - self.from)
    }

    pub fn is_degenerate(&self) -> bool {
        self.from == self.to
    }
}

/// One endpoint of a style transition.
///
/// Numeric properties accept numbers or numeric strings (`"-100"`,
/// `"1.5"`); color properties carry CSS color strings verbatim.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StyleEndpoint {
    Number(f64),
    Text(String),
}

impl StyleEndpoint {
    /// Numeric view of the endpoint, using leading-float parsing for
    /// strings (`"10px"` → 10.0), matching how browsers read numbers.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleEndpoint::Number(value) => Some(*value),
            StyleEndpoint::Text(text) => leading_float(text),
        }
    }
}

impl fmt::Display for StyleEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleEndpoint::Number(value) => write!(f, "{value}"),
            StyleEndpoint::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for StyleEndpoint {
    fn from(value: f64) -> Self {
        StyleEndpoint::Number(value)
    }
}

impl From<i32> for StyleEndpoint {
    fn from(value: i32) -> Self {
        StyleEndpoint::Number(value.into())
    }
}

impl From<&str> for StyleEndpoint {
    fn from(text: &str) -> Self {
        StyleEndpoint::Text(text.to_string())
    }
}

impl From<String> for StyleEndpoint {
    fn from(text: String) -> Self {
        StyleEndpoint::Text(text)
    }
}

/// Parse the leading floating-point number of a string: optional sign,
/// digits with an optional fraction, optional exponent; trailing text is
/// ignored. Returns `None` when no digits lead the string.
fn leading_float(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    let mut seen_exponent = false;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    while let Some(&byte) = bytes.get(end) {
        match byte {
            b'0'..=b'9' => {
                seen_digit = true;
                end += 1;
            }
            b'.' if !seen_dot && !seen_exponent => {
                seen_dot = true;
                end += 1;
            }
            b'e' | b'E' if seen_digit && !seen_exponent => {
                let mut cursor = end + 1;
                if matches!(bytes.get(cursor), Some(b'+' | b'-')) {
                    cursor += 1;
                }
                if !matches!(bytes.get(cursor), Some(b'0'..=b'9')) {
                    break;
                }
                seen_exponent = true;
                end = cursor;
            }
            _ => break,
        }
    }

    if !seen_digit {
        return None;
    }
    text[..end].parse().ok()
}

/// A single property transition: where the value starts and where it
/// ends over the option's range.
///
/// Endpoints are optional in the data model so that an absent one is a
/// reportable condition rather than a deserialization dead end; both must
/// be present by the time the transition is interpolated.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleTransition {
    pub property: StyleProperty,
    pub from: Option<StyleEndpoint>,
    pub to: Option<StyleEndpoint>,
}

impl StyleTransition {
    pub fn new(
        property: StyleProperty,
        from: impl Into<StyleEndpoint>,
        to: impl Into<StyleEndpoint>,
    ) -> Self {
        Self {
            property,
            from: Some(from.into()),
            to: Some(to.into()),
        }
    }

    /// Interpolate this transition at `ratio` into a raw style fragment.
    pub fn interpolate(&self, ratio: f64) -> Result<StyleFragment, StyleError> {
        let (Some(from), Some(to)) = (&self.from, &self.to) else {
            return Err(StyleError::MissingEndpoint {
                property: self.property,
            });
        };

        if self.property.is_color() {
            // Blend in HSL space, weighted toward the end color.
            let weight = ratio * 100.0;
            return Ok(StyleFragment::entry(
                self.property.as_str(),
                format!("color-mix(in hsl, {from}, {to} {weight}%)"),
            ));
        }

        let start = self.numeric_endpoint(from)?;
        let end = self.numeric_endpoint(to)?;
        Ok(self
            .property
            .numeric_fragment(f64::lerp(&start, &end, ratio)))
    }

    fn numeric_endpoint(&self, endpoint: &StyleEndpoint) -> Result<f64, StyleError> {
        endpoint
            .as_number()
            .ok_or_else(|| StyleError::NonNumericEndpoint {
                property: self.property,
                value: endpoint.to_string(),
            })
    }
}

/// One percentage-range-scoped bundle of style transitions.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationOption {
    pub percentage: PercentageRange,
    pub styles: Vec<StyleTransition>,
}

impl AnimationOption {
    /// Start an option covering `from..=to` percent of the scroll.
    pub fn range(from: f64, to: f64) -> Self {
        Self {
            percentage: PercentageRange::new(from, to),
            styles: Vec::new(),
        }
    }

    /// Add a property transition. Transitions interpolate in insertion
    /// order, which also fixes the transform concatenation order.
    pub fn style(
        mut self,
        property: StyleProperty,
        from: impl Into<StyleEndpoint>,
        to: impl Into<StyleEndpoint>,
    ) -> Self {
        self.styles.push(StyleTransition::new(property, from, to));
        self
    }

    /// Interpolate every transition at `ratio` and compose the result
    /// into an applicable patch.
    pub fn patch(&self, ratio: f64) -> Result<StylePatch, StyleError> {
        let fragments = self
            .styles
            .iter()
            .map(|transition| transition.interpolate(ratio))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(StylePatch::compose(fragments))
    }
}

impl<'de> Deserialize<'de> for AnimationOption {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        schema::OptionSchema::deserialize(deserializer).map(Into::into)
    }
}

/// Bind-time validation of an option list.
pub fn validate_options(options: &[AnimationOption]) -> Result<(), BindError> {
    for (index, option) in options.iter().enumerate() {
        if option.percentage.is_degenerate() {
            return Err(BindError::DegenerateRange {
                index,
                at: option.percentage.from,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_contains_is_inclusive() {
        let range = PercentageRange::new(10.0, 90.0);
        assert!(range.contains(10.0));
        assert!(range.contains(90.0));
        assert!(!range.contains(9.999));
        assert!(!range.contains(90.001));
    }

    #[test]
    fn test_ratio_spans_the_range() {
        let range = PercentageRange::new(0.0, 90.0);
        assert_eq!(range.ratio(0.0), 0.0);
        assert_eq!(range.ratio(45.0), 0.5);
        assert_eq!(range.ratio(90.0), 1.0);
    }

    #[test]
    fn test_leading_float_parsing() {
        assert_eq!(leading_float("-100"), Some(-100.0));
        assert_eq!(leading_float("1.5e2"), Some(150.0));
        assert_eq!(leading_float("10px"), Some(10.0));
        assert_eq!(leading_float("  .5"), Some(0.5));
        assert_eq!(leading_float("2."), Some(2.0));
        assert_eq!(leading_float("1e"), Some(1.0));
        assert_eq!(leading_float("px"), None);
        assert_eq!(leading_float(""), None);
        assert_eq!(leading_float("-"), None);
    }

    #[test]
    fn test_interpolate_numeric_midpoint() {
        let transition = StyleTransition::new(StyleProperty::Opacity, 0.0, 1.0);
        assert_eq!(
            transition.interpolate(0.5).unwrap(),
            crate::style::StyleFragment::entry("opacity", "0.5".into())
        );
    }

    #[test]
    fn test_interpolate_boundaries_hit_endpoints_exactly() {
        let transition = StyleTransition::new(StyleProperty::Rotate, 45.0, 0.0);
        assert_eq!(
            transition.interpolate(0.0).unwrap(),
            crate::style::StyleFragment::transform("rotate(45deg)".into())
        );
        assert_eq!(
            transition.interpolate(1.0).unwrap(),
            crate::style::StyleFragment::transform("rotate(0deg)".into())
        );
    }

    #[test]
    fn test_interpolate_numeric_string_endpoints() {
        let transition = StyleTransition::new(StyleProperty::TranslateY, "-100", "0");
        assert_eq!(
            transition.interpolate(0.5).unwrap(),
            crate::style::StyleFragment::transform("translateY(-50px)".into())
        );
    }

    #[test]
    fn test_interpolate_color_mixes_in_hsl() {
        let transition = StyleTransition::new(StyleProperty::Background, "#bb99ff", "#ab6f33");
        assert_eq!(
            transition.interpolate(0.5).unwrap(),
            crate::style::StyleFragment::entry(
                "background",
                "color-mix(in hsl, #bb99ff, #ab6f33 50%)".into()
            )
        );
    }

    #[test]
    fn test_missing_endpoint_is_reported() {
        let transition = StyleTransition {
            property: StyleProperty::Opacity,
            from: Some(0.0.into()),
            to: None,
        };
        assert_eq!(
            transition.interpolate(0.5),
            Err(StyleError::MissingEndpoint {
                property: StyleProperty::Opacity
            })
        );
    }

    #[test]
    fn test_non_numeric_endpoint_is_reported() {
        let transition = StyleTransition::new(StyleProperty::Scale, "big", 1.0);
        assert_eq!(
            transition.interpolate(0.5),
            Err(StyleError::NonNumericEndpoint {
                property: StyleProperty::Scale,
                value: "big".into()
            })
        );
    }

    #[test]
    fn test_option_patch_composes_transforms_in_source_order() {
        let option = AnimationOption::range(0.0, 90.0)
            .style(StyleProperty::Opacity, 0.0, 1.0)
            .style(StyleProperty::Rotate, 45.0, 0.0);
        let patch = option.patch(0.5).unwrap();
        assert_eq!(patch.get("opacity"), Some("0.5"));
        assert_eq!(patch.get("transform"), Some("rotate(22.5deg) "));
    }

    #[test]
    fn test_degenerate_range_is_rejected() {
        let options = vec![
            AnimationOption::range(0.0, 50.0).style(StyleProperty::Opacity, 0.0, 1.0),
            AnimationOption::range(70.0, 70.0).style(StyleProperty::Scale, 1.0, 2.0),
        ];
        assert_eq!(
            validate_options(&options),
            Err(BindError::DegenerateRange { index: 1, at: 70.0 })
        );
    }

    #[test]
    fn test_reversed_range_never_matches() {
        let range = PercentageRange::new(90.0, 10.0);
        assert!(!range.contains(50.0));
    }
}
