//! Provider registry: identifiers, detection and model-family predicates.
//!
//! Everything here is a total function over the closed [`Provider`] and
//! [`BedrockModelFamily`] enums plus static tables. Lookups return `None`
//! (or `false`) for anything unrecognised; callers decide how severe that is.
//!
//! - [`params`] — alias table and canonical → native name maps
//! - [`specs`] — native-name keyed [`ParamSpec`](crate::ParamSpec) tables
//! - [`cache`] — cache directive values, TTLs and support rules

pub mod cache;
pub mod params;
pub mod specs;

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// LLM provider identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    OpenAI,
    Anthropic,
    Google,
    Mistral,
    Cohere,
    /// Multi-tenant host; the model family is encoded in the model id.
    Bedrock,
    /// Gateway; the target vendor is a `vendor/` prefix on the model id.
    OpenRouter,
    /// Gateway; the target vendor is a `vendor/` prefix on the model id.
    Vercel,
}

impl Provider {
    /// Every provider, in host detection order.
    pub const ALL: [Provider; 8] = [
        Provider::OpenRouter,
        Provider::Vercel,
        Provider::Bedrock,
        Provider::OpenAI,
        Provider::Anthropic,
        Provider::Google,
        Provider::Mistral,
        Provider::Cohere,
    ];

    /// Providers that serve their own models directly.
    pub const DIRECT: [Provider; 5] = [
        Provider::OpenAI,
        Provider::Anthropic,
        Provider::Google,
        Provider::Mistral,
        Provider::Cohere,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAI => "openai",
            Self::Anthropic => "anthropic",
            Self::Google => "google",
            Self::Mistral => "mistral",
            Self::Cohere => "cohere",
            Self::Bedrock => "bedrock",
            Self::OpenRouter => "openrouter",
            Self::Vercel => "vercel",
        }
    }

    /// Parse a provider id as produced by [`Provider::as_str`].
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == id)
    }

    /// Host substrings identifying this provider.
    fn host_signatures(&self) -> &'static [&'static str] {
        match self {
            Self::OpenAI => &["openai"],
            Self::Anthropic => &["anthropic"],
            Self::Google => &["googleapis", "generativelanguage"],
            Self::Mistral => &["mistral"],
            Self::Cohere => &["cohere"],
            Self::Bedrock => &["bedrock"],
            Self::OpenRouter => &["openrouter"],
            Self::Vercel => &["vercel"],
        }
    }

    /// Whether this provider serves its own models (not a gateway or multi-tenant host).
    pub fn is_direct(&self) -> bool {
        Self::DIRECT.contains(self)
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Model families hosted on Bedrock, read from the model id prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BedrockModelFamily {
    Anthropic,
    Meta,
    Amazon,
    Mistral,
    Cohere,
    Ai21,
}

impl BedrockModelFamily {
    pub const ALL: [BedrockModelFamily; 6] = [
        BedrockModelFamily::Anthropic,
        BedrockModelFamily::Meta,
        BedrockModelFamily::Amazon,
        BedrockModelFamily::Mistral,
        BedrockModelFamily::Cohere,
        BedrockModelFamily::Ai21,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Anthropic => "anthropic",
            Self::Meta => "meta",
            Self::Amazon => "amazon",
            Self::Mistral => "mistral",
            Self::Cohere => "cohere",
            Self::Ai21 => "ai21",
        }
    }
}

impl fmt::Display for BedrockModelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cross-region inference prefixes that precede the family token.
const BEDROCK_ROUTING_PREFIXES: &[&str] =
    &["us", "eu", "apac", "au", "jp", "ca", "us-gov", "global"];

/// Gateway model prefixes that don't match a provider id verbatim.
const GATEWAY_PREFIX_ALIASES: &[(&str, Provider)] = &[("mistralai", Provider::Mistral)];

static REASONING_MODEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^o[134](?:-|$)").expect("reasoning model pattern is valid"));

/// Detect the provider from a connection string host.
///
/// Gateways are checked first, then Bedrock, then the direct vendors.
pub fn detect_provider(host: &str) -> Option<Provider> {
    let host = host.to_ascii_lowercase();
    Provider::ALL.into_iter().find(|provider| {
        provider
            .host_signatures()
            .iter()
            .any(|sig| host.contains(sig))
    })
}

/// Resolve the vendor behind a gateway from a `vendor/model` id.
///
/// Only direct providers are returned; unknown prefixes yield `None`.
pub fn detect_gateway_sub_provider(model: &str) -> Option<Provider> {
    let (prefix, _) = model.split_once('/')?;
    let prefix = prefix.to_ascii_lowercase();
    Provider::from_id(&prefix)
        .filter(Provider::is_direct)
        .or_else(|| {
            GATEWAY_PREFIX_ALIASES
                .iter()
                .find(|(alias, _)| *alias == prefix)
                .map(|(_, p)| *p)
        })
}

/// The model id with any `vendor/` prefix removed.
pub fn strip_gateway_prefix(model: &str) -> &str {
    model.split_once('/').map_or(model, |(_, rest)| rest)
}

/// Detect the model family of a Bedrock model id.
///
/// `us.anthropic.claude-sonnet-4-5-20250929-v1:0` → `Anthropic`.
pub fn detect_bedrock_model_family(model: &str) -> Option<BedrockModelFamily> {
    let lower = model.to_ascii_lowercase();
    let mut segments = lower.split('.');
    let first = segments.next()?;
    let family = if BEDROCK_ROUTING_PREFIXES.contains(&first) {
        segments.next()?
    } else {
        first
    };
    BedrockModelFamily::ALL.into_iter().find(|f| f.as_str() == family)
}

/// Whether a Bedrock model accepts explicit prompt caching.
///
/// Anthropic models do; of Amazon's own models only Nova does.
pub fn bedrock_supports_caching(model: &str) -> bool {
    match detect_bedrock_model_family(model) {
        Some(BedrockModelFamily::Anthropic) => true,
        Some(BedrockModelFamily::Amazon) => model.to_ascii_lowercase().contains("nova"),
        _ => false,
    }
}

/// Whether a model is an OpenAI reasoning model (o1, o3, o4 series).
///
/// Gateway prefixes are ignored, so `openai/o3` counts.
pub fn is_reasoning_model(model: &str) -> bool {
    let name = strip_gateway_prefix(model).to_ascii_lowercase();
    REASONING_MODEL.is_match(&name)
}

/// Whether requests to this provider can reach OpenAI models.
pub fn can_host_openai_models(provider: Provider) -> bool {
    matches!(provider, Provider::OpenAI | Provider::OpenRouter | Provider::Vercel)
}

/// Whether the provider proxies to other vendors.
pub fn is_gateway_provider(provider: Provider) -> bool {
    matches!(provider, Provider::OpenRouter | Provider::Vercel)
}

/// The provider whose rules apply to the request: the gateway's sub-provider
/// when one resolves, otherwise the detected provider.
pub fn effective_provider(provider: Provider, sub_provider: Option<Provider>) -> Provider {
    match sub_provider {
        Some(sub) if is_gateway_provider(provider) => sub,
        _ => provider,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_hosts_win_over_vendor_substrings() {
        // an openrouter host mentioning openai must still be openrouter
        assert_eq!(detect_provider("openai.openrouter.ai"), Some(Provider::OpenRouter));
    }

    #[test]
    fn bedrock_checked_before_vendors() {
        assert_eq!(detect_provider("bedrock-anthropic.example.com"), Some(Provider::Bedrock));
    }

    #[test]
    fn host_detection_is_case_insensitive() {
        assert_eq!(detect_provider("API.OpenAI.com"), Some(Provider::OpenAI));
    }

    #[test]
    fn from_id_round_trips() {
        for provider in Provider::ALL {
            assert_eq!(Provider::from_id(provider.as_str()), Some(provider));
        }
        assert_eq!(Provider::from_id("azure"), None);
    }

    #[test]
    fn only_vendors_are_direct() {
        let direct: Vec<_> = Provider::ALL.into_iter().filter(Provider::is_direct).collect();
        assert_eq!(direct, Provider::DIRECT);
        assert!(!Provider::Bedrock.is_direct());
        assert!(!Provider::OpenRouter.is_direct());
    }

    #[test]
    fn routing_prefix_without_family() {
        assert_eq!(detect_bedrock_model_family("us"), None);
        assert_eq!(detect_bedrock_model_family(""), None);
    }

    #[test]
    fn effective_provider_ignores_sub_for_non_gateways() {
        assert_eq!(
            effective_provider(Provider::Bedrock, Some(Provider::Anthropic)),
            Provider::Bedrock
        );
        assert_eq!(
            effective_provider(Provider::OpenRouter, Some(Provider::Anthropic)),
            Provider::Anthropic
        );
        assert_eq!(effective_provider(Provider::Vercel, None), Provider::Vercel);
    }
}
