use crate::style::StyleProperty;
use thiserror::Error;

/// Errors raised while turning a style transition into a concrete CSS value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StyleError {
    /// The property name is outside the supported set.
    #[error("style property `{name}` is not supported")]
    UnsupportedProperty { name: String },

    /// A transition was consumed with `from` or `to` absent.
    #[error("style `{property}` needs both a `from` and a `to` value")]
    MissingEndpoint { property: StyleProperty },

    /// A numeric property carried an endpoint that has no leading number.
    #[error("style `{property}` endpoint `{value}` is not numeric")]
    NonNumericEndpoint { property: StyleProperty, value: String },
}

/// Errors raised while attaching an animation to the backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BindError {
    #[error("no element with id `{id}`")]
    ElementNotFound { id: String },

    /// A range with `from == to` would divide by zero when computing the
    /// local ratio; rejected up front instead of leaking NaN into styles.
    #[error("option {index} has an empty percentage range at {at}")]
    DegenerateRange { index: usize, at: f64 },
}

/// A scroll tick that could not build its style patch.
///
/// Carries the index of the offending option so a misconfigured entry can
/// be found without log interception.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("option {option}: {source}")]
pub struct TickError {
    pub option: usize,
    #[source]
    pub source: StyleError,
}
