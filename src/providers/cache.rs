//! Prompt cache directives.
//!
//! `cache=true` expands to the provider's cache-control directive;
//! `cache=5m` additionally emits `cache_ttl=5m`.

use std::sync::LazyLock;

use regex::Regex;

use super::{Provider, bedrock_supports_caching};

/// Native name of the cache lifetime param emitted alongside the directive.
pub const CACHE_TTL_PARAM: &str = "cache_ttl";

/// Lifetimes accepted by providers with explicit cache control.
pub const CACHE_TTLS: &[&str] = &["5m", "1h"];

const TRUTHY: &[&str] = &["true", "1", "yes"];

static DURATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[mh]$").expect("duration pattern is valid"));

/// Directive value meaning "cache enabled", for providers with explicit cache control.
pub fn cache_value(provider: Provider) -> Option<&'static str> {
    match provider {
        Provider::Anthropic | Provider::Bedrock | Provider::OpenRouter | Provider::Vercel => {
            Some("ephemeral")
        }
        _ => None,
    }
}

/// Whether explicit caching works for this provider and model.
///
/// Only Bedrock depends on the model family; every other provider with a
/// cache directive accepts it for any model.
pub fn supports_cache(provider: Provider, model: &str) -> bool {
    match provider {
        Provider::Bedrock => bedrock_supports_caching(model),
        _ => cache_value(provider).is_some(),
    }
}

/// `true`, `1` or `yes`.
pub fn is_truthy(value: &str) -> bool {
    TRUTHY.contains(&value)
}

/// A TTL-style duration like `5m` or `1h`.
pub fn is_duration(value: &str) -> bool {
    DURATION.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_pattern() {
        assert!(is_duration("5m"));
        assert!(is_duration("1h"));
        assert!(is_duration("30m"));
        assert!(!is_duration("1d"));
        assert!(!is_duration("m"));
        assert!(!is_duration("5 m"));
        assert!(!is_duration("1.5h"));
    }

    #[test]
    fn truthy_values() {
        assert!(is_truthy("true"));
        assert!(is_truthy("1"));
        assert!(is_truthy("yes"));
        assert!(!is_truthy("false"));
        assert!(!is_truthy("TRUE"));
    }

    #[test]
    fn gateways_cache_any_model() {
        assert!(supports_cache(Provider::OpenRouter, "anthropic/claude-sonnet-4-5"));
        assert!(supports_cache(Provider::OpenRouter, "meta-llama/llama-3.3-70b"));
        assert!(supports_cache(Provider::Vercel, "claude-sonnet-4-5"));
    }

    #[test]
    fn providers_without_directives() {
        assert!(!supports_cache(Provider::OpenAI, "gpt-4o"));
        assert_eq!(cache_value(Provider::Google), None);
        assert_eq!(cache_value(Provider::Anthropic), Some("ephemeral"));
    }
}
