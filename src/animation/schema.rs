//! External serializations of [`AnimationOption`].
//!
//! Two shapes exist in the wild for the same data model:
//!
//! - **nested**: `{"percentage": {"from": 0, "to": 90}, "styles": {"opacity": {"from": 0, "to": 1}}}`
//! - **flat**: `{"from": 0, "fromCss": {"opacity": 0}, "to": 90, "toCss": {"opacity": 1}}`
//!
//! Both deserialize into the canonical in-memory shape (range + ordered
//! transitions). Style maps are read in document order, which becomes the
//! application and transform-concatenation order. Unknown property names
//! fail deserialization.

use super::{AnimationOption, PercentageRange, StyleEndpoint, StyleTransition};
use crate::style::StyleProperty;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

#[derive(Deserialize)]
#[serde(untagged)]
pub(super) enum OptionSchema {
    Nested(NestedOption),
    Flat(FlatOption),
}

impl From<OptionSchema> for AnimationOption {
    fn from(schema: OptionSchema) -> Self {
        match schema {
            OptionSchema::Nested(nested) => nested.into(),
            OptionSchema::Flat(flat) => flat.into(),
        }
    }
}

/// The `percentage`/`styles` form.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct NestedOption {
    percentage: RangeSchema,
    styles: TransitionMap,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RangeSchema {
    from: f64,
    to: f64,
}

impl From<NestedOption> for AnimationOption {
    fn from(nested: NestedOption) -> Self {
        AnimationOption {
            percentage: PercentageRange::new(nested.percentage.from, nested.percentage.to),
            styles: nested.styles.0,
        }
    }
}

/// `styles` map: property name → endpoint pair, in document order.
struct TransitionMap(Vec<StyleTransition>);

#[derive(Deserialize)]
struct EndpointPair {
    from: Option<StyleEndpoint>,
    to: Option<StyleEndpoint>,
}

impl<'de> Deserialize<'de> for TransitionMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TransitionMapVisitor;

        impl<'de> Visitor<'de> for TransitionMapVisitor {
            type Value = TransitionMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of style property names to {from, to} pairs")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut transitions = Vec::new();
                while let Some(name) = map.next_key::<String>()? {
                    let property: StyleProperty =
                        name.parse().map_err(serde::de::Error::custom)?;
                    let pair: EndpointPair = map.next_value()?;
                    transitions.push(StyleTransition {
                        property,
                        from: pair.from,
                        to: pair.to,
                    });
                }
                Ok(TransitionMap(transitions))
            }
        }

        deserializer.deserialize_map(TransitionMapVisitor)
    }
}

/// The flat `from`/`fromCss`/`to`/`toCss` form.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct FlatOption {
    from: f64,
    #[serde(rename = "fromCss")]
    from_css: EndpointMap,
    to: f64,
    #[serde(rename = "toCss")]
    to_css: EndpointMap,
}

impl From<FlatOption> for AnimationOption {
    fn from(flat: FlatOption) -> Self {
        let mut remaining = flat.to_css.0;
        let mut styles = Vec::new();

        // fromCss drives the order; toCss-only properties follow, and
        // their missing `from` side surfaces as MissingEndpoint when the
        // transition is consumed.
        for (property, from) in flat.from_css.0 {
            let to = remaining
                .iter()
                .position(|(candidate, _)| *candidate == property)
                .map(|index| remaining.remove(index).1);
            styles.push(StyleTransition {
                property,
                from: Some(from),
                to,
            });
        }
        for (property, to) in remaining {
            styles.push(StyleTransition {
                property,
                from: None,
                to: Some(to),
            });
        }

        AnimationOption {
            percentage: PercentageRange::new(flat.from, flat.to),
            styles,
        }
    }
}

/// Flat-form CSS map: property name → endpoint value, in document order.
struct EndpointMap(Vec<(StyleProperty, StyleEndpoint)>);

impl<'de> Deserialize<'de> for EndpointMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EndpointMapVisitor;

        impl<'de> Visitor<'de> for EndpointMapVisitor {
            type Value = EndpointMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of style property names to endpoint values")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut endpoints = Vec::new();
                while let Some(name) = map.next_key::<String>()? {
                    let property: StyleProperty =
                        name.parse().map_err(serde::de::Error::custom)?;
                    endpoints.push((property, map.next_value()?));
                }
                Ok(EndpointMap(endpoints))
            }
        }

        deserializer.deserialize_map(EndpointMapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_schema_deserializes_in_document_order() {
        let option: AnimationOption = serde_json::from_str(
            r#"{
                "percentage": {"from": 0, "to": 90},
                "styles": {
                    "opacity": {"from": 0, "to": 1},
                    "translateY": {"from": "-100", "to": "0"},
                    "scale": {"from": 0.5, "to": 1}
                }
            }"#,
        )
        .unwrap();

        assert_eq!(option.percentage, PercentageRange::new(0.0, 90.0));
        let order: Vec<StyleProperty> = option.styles.iter().map(|s| s.property).collect();
        assert_eq!(
            order,
            vec![
                StyleProperty::Opacity,
                StyleProperty::TranslateY,
                StyleProperty::Scale
            ]
        );
        assert_eq!(option.styles[1].from, Some(StyleEndpoint::Text("-100".into())));
    }

    #[test]
    fn test_flat_schema_matches_nested_semantics() {
        let flat: AnimationOption = serde_json::from_str(
            r#"{
                "from": 90,
                "fromCss": {"opacity": 1, "scale": 1},
                "to": 100,
                "toCss": {"opacity": 0, "scale": 0.5}
            }"#,
        )
        .unwrap();
        let nested: AnimationOption = serde_json::from_str(
            r#"{
                "percentage": {"from": 90, "to": 100},
                "styles": {
                    "opacity": {"from": 1, "to": 0},
                    "scale": {"from": 1, "to": 0.5}
                }
            }"#,
        )
        .unwrap();

        assert_eq!(flat, nested);
    }

    #[test]
    fn test_flat_schema_with_one_sided_property_keeps_it_reportable() {
        let option: AnimationOption = serde_json::from_str(
            r#"{
                "from": 0,
                "fromCss": {"opacity": 0},
                "to": 50,
                "toCss": {"opacity": 1, "scale": 2}
            }"#,
        )
        .unwrap();

        assert_eq!(option.styles.len(), 2);
        assert_eq!(option.styles[1].property, StyleProperty::Scale);
        assert_eq!(option.styles[1].from, None);
        assert!(option.styles[1].interpolate(0.5).is_err());
    }

    #[test]
    fn test_unknown_property_fails_deserialization() {
        let result: Result<AnimationOption, _> = serde_json::from_str(
            r#"{
                "percentage": {"from": 0, "to": 90},
                "styles": {"foobar": {"from": 0, "to": 1}}
            }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_endpoint_survives_deserialization() {
        // Absent endpoints are a tick-time condition, not a parse error.
        let option: AnimationOption = serde_json::from_str(
            r#"{
                "percentage": {"from": 0, "to": 90},
                "styles": {"opacity": {"from": 0}}
            }"#,
        )
        .unwrap();
        assert_eq!(option.styles[0].to, None);
    }

    #[test]
    fn test_option_list_deserializes() {
        let options: Vec<AnimationOption> = serde_json::from_str(
            r#"[
                {"percentage": {"from": 0, "to": 90},
                 "styles": {"opacity": {"from": 0, "to": 1}}},
                {"from": 90, "fromCss": {"opacity": 1}, "to": 100, "toCss": {"opacity": 0}}
            ]"#,
        )
        .unwrap();
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].percentage.to, 90.0);
        assert_eq!(options[1].percentage.from, 90.0);
    }
}
