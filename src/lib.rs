//! llm-strings - LLM connection strings
//!
//! A connection string names a provider endpoint, a model and its request
//! parameters in one URL:
//!
//! ```text
//! llm://[label[:apiKey]@]host/model[?key1=val1&key2=val2...]
//! ```
//!
//! This crate parses those strings, rewrites shorthand parameters into each
//! provider's native vocabulary, and validates the result against per-provider
//! rules. Everything is synchronous and side-effect free.
//!
//! # Normalize
//!
//! ```rust
//! use llm_strings::{NormalizeOptions, parse, normalize};
//!
//! let record = parse("llm://api.anthropic.com/claude-sonnet-4-5?temp=0.7&max=1024&cache=5m")?;
//! let result = normalize(&record, &NormalizeOptions::default().verbose(true));
//!
//! assert_eq!(result.config.get("temperature"), Some("0.7"));
//! assert_eq!(result.config.get("cache_control"), Some("ephemeral"));
//! assert_eq!(result.config.get("cache_ttl"), Some("5m"));
//! assert!(!result.changes.is_empty());
//! # Ok::<(), llm_strings::LlmStringsError>(())
//! ```
//!
//! # Validate
//!
//! ```rust
//! use llm_strings::{ValidateOptions, validate};
//!
//! let issues = validate(
//!     "llm://openrouter.ai/openai/o3?temp=0.7",
//!     &ValidateOptions::default(),
//! );
//! assert_eq!(issues.len(), 1);
//! assert!(issues[0].message.contains("reasoning model"));
//! ```

#[cfg(feature = "cli")]
pub mod config;
pub mod connection;
pub mod error;
pub mod normalize;
pub mod providers;
pub mod telemetry;
pub mod types;
pub mod validate;
pub mod version;

pub use connection::{build, parse};
pub use error::{LlmStringsError, Result};
pub use normalize::normalize;
pub use providers::{BedrockModelFamily, Provider};
pub use types::{
    ConnectionRecord, NormalizeChange, NormalizeOptions, NormalizeResult, ParamSpec, ParamType,
    Severity, ValidateOptions, ValidationIssue,
};
pub use validate::{validate, validate_record};
pub use version::PKG_VERSION;
