//! Public types for the llm-strings API.

mod connection;
mod normalize;
mod parameter;
mod validation;

pub use connection::ConnectionRecord;
pub use normalize::{NormalizeChange, NormalizeOptions, NormalizeResult};
pub use parameter::{ParamSpec, ParamType};
pub use validation::{Severity, ValidateOptions, ValidationIssue};
