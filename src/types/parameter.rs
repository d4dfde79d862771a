//! Parameter constraint types used by the provider spec tables.
//!
//! Specs are keyed by a provider's *native* parameter name and describe the
//! shape a value must have before the provider will accept it.

use std::fmt;

use serde::Serialize;

/// Value type a parameter expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    Number,
    Boolean,
    /// Free-form string, or an enumeration when [`ParamSpec::values`] is set.
    String,
}

impl ParamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::String => "string",
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Constraints for a single native parameter.
///
/// Constructed with `const` builders so provider tables can live in statics:
///
/// ```rust
/// use llm_strings::ParamSpec;
///
/// const TEMPERATURE: ParamSpec = ParamSpec::number()
///     .min(0.0)
///     .max(2.0)
///     .default_value("1")
///     .description("Sampling temperature");
/// assert_eq!(TEMPERATURE.max, Some(2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParamSpec {
    #[serde(rename = "type")]
    pub kind: ParamType,
    /// Minimum allowed value (inclusive).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Maximum allowed value (inclusive).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Allowed values for enumerated string params.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<&'static [&'static str]>,
    /// Provider default, as it would appear in a connection string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<&'static str>,
    #[serde(skip_serializing_if = "is_blank")]
    pub description: &'static str,
}

fn is_blank(s: &&str) -> bool {
    s.is_empty()
}

impl ParamSpec {
    const fn of(kind: ParamType) -> Self {
        Self {
            kind,
            min: None,
            max: None,
            values: None,
            default: None,
            description: "",
        }
    }

    /// A numeric parameter with no range.
    pub const fn number() -> Self {
        Self::of(ParamType::Number)
    }

    /// A boolean parameter (`true`/`false`/`0`/`1`).
    pub const fn boolean() -> Self {
        Self::of(ParamType::Boolean)
    }

    /// A free-form string parameter.
    pub const fn string() -> Self {
        Self::of(ParamType::String)
    }

    /// A string parameter restricted to `values`.
    pub const fn one_of(values: &'static [&'static str]) -> Self {
        let mut spec = Self::of(ParamType::String);
        spec.values = Some(values);
        spec
    }

    /// Set minimum value.
    pub const fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Set maximum value.
    pub const fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Set default value.
    pub const fn default_value(mut self, default: &'static str) -> Self {
        self.default = Some(default);
        self
    }

    /// Set the human-readable description.
    pub const fn description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    /// Whether this spec restricts values to an enumerated set.
    pub fn is_enum(&self) -> bool {
        self.values.is_some()
    }
}
