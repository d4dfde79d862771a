//! Validation result and policy types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How serious a validation issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The provider would reject (or misbehave on) the request.
    Error,

    /// Advisory only: unknown host, unrecognised parameter.
    ///
    /// Promoted to [`Severity::Error`] in strict mode.
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single problem found in a connection string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Native param name, or the synthetic `"host"` / `"url"`.
    pub param: String,
    pub value: String,
    pub message: String,
    pub severity: Severity,
}

impl ValidationIssue {
    pub fn error(
        param: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            param: param.into(),
            value: value.into(),
            message: message.into(),
            severity: Severity::Error,
        }
    }

    pub fn warning(
        param: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            param: param.into(),
            value: value.into(),
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.severity, self.message, self.param)
    }
}

/// Options for [`validate`](crate::validate()).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateOptions {
    /// Promote "unknown provider" and "unknown param" warnings to errors.
    #[serde(default)]
    pub strict: bool,
}

impl ValidateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable strict mode.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Severity used for the "unknown" issue categories.
    pub(crate) fn unknown_severity(&self) -> Severity {
        if self.strict {
            Severity::Error
        } else {
            Severity::Warning
        }
    }
}
