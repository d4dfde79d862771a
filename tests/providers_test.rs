//! Tests for the provider registry: detection, families and table consistency.

use llm_strings::providers::cache::{CACHE_TTLS, cache_value, supports_cache};
use llm_strings::providers::params::{
    ALIASES, CACHE, REASONING_UNSUPPORTED, canonical_name, native_name, param_map,
    reasoning_max_tokens,
};
use llm_strings::providers::specs::{param_spec, spec_table};
use llm_strings::providers::{
    bedrock_supports_caching, can_host_openai_models, detect_bedrock_model_family,
    detect_gateway_sub_provider, detect_provider, is_gateway_provider, is_reasoning_model,
    strip_gateway_prefix,
};
use llm_strings::{BedrockModelFamily, ParamType, Provider};

// ============================================================================
// Host detection
// ============================================================================

#[test]
fn detects_direct_providers() {
    assert_eq!(detect_provider("api.openai.com"), Some(Provider::OpenAI));
    assert_eq!(detect_provider("api.anthropic.com"), Some(Provider::Anthropic));
    assert_eq!(
        detect_provider("generativelanguage.googleapis.com"),
        Some(Provider::Google)
    );
    assert_eq!(detect_provider("api.mistral.ai"), Some(Provider::Mistral));
    assert_eq!(detect_provider("api.cohere.com"), Some(Provider::Cohere));
}

#[test]
fn detects_gateways_and_bedrock() {
    assert_eq!(detect_provider("openrouter.ai"), Some(Provider::OpenRouter));
    assert_eq!(
        detect_provider("ai-gateway.vercel.sh"),
        Some(Provider::Vercel)
    );
    assert_eq!(
        detect_provider("bedrock-runtime.us-east-1.amazonaws.com"),
        Some(Provider::Bedrock)
    );
}

#[test]
fn unknown_host_is_none() {
    assert_eq!(detect_provider("localhost:11434"), None);
    assert_eq!(detect_provider("example.com"), None);
}

// ============================================================================
// Gateway sub-providers
// ============================================================================

#[test]
fn gateway_sub_provider_from_prefix() {
    assert_eq!(
        detect_gateway_sub_provider("anthropic/claude-sonnet-4-5"),
        Some(Provider::Anthropic)
    );
    assert_eq!(
        detect_gateway_sub_provider("openai/o3"),
        Some(Provider::OpenAI)
    );
    assert_eq!(
        detect_gateway_sub_provider("google/gemini-2.5-pro"),
        Some(Provider::Google)
    );
    assert_eq!(
        detect_gateway_sub_provider("mistralai/mistral-large"),
        Some(Provider::Mistral)
    );
}

#[test]
fn gateway_sub_provider_none_cases() {
    assert_eq!(detect_gateway_sub_provider("gpt-4o"), None);
    assert_eq!(detect_gateway_sub_provider("meta-llama/llama-3.3-70b"), None);
    // gateways and multi-tenant hosts are never sub-providers
    assert_eq!(detect_gateway_sub_provider("openrouter/auto"), None);
    assert_eq!(detect_gateway_sub_provider("bedrock/anything"), None);
}

#[test]
fn strip_prefix() {
    assert_eq!(strip_gateway_prefix("openai/o3"), "o3");
    assert_eq!(strip_gateway_prefix("o3"), "o3");
    assert_eq!(strip_gateway_prefix("a/b/c"), "b/c");
}

// ============================================================================
// Bedrock families
// ============================================================================

#[test]
fn bedrock_family_from_model_id() {
    let cases = [
        (
            "anthropic.claude-3-5-sonnet-20240620-v1:0",
            Some(BedrockModelFamily::Anthropic),
        ),
        ("meta.llama3-70b-instruct-v1:0", Some(BedrockModelFamily::Meta)),
        ("amazon.nova-pro-v1:0", Some(BedrockModelFamily::Amazon)),
        ("mistral.mistral-large-2407-v1:0", Some(BedrockModelFamily::Mistral)),
        ("cohere.command-r-plus-v1:0", Some(BedrockModelFamily::Cohere)),
        ("ai21.jamba-1-5-large-v1:0", Some(BedrockModelFamily::Ai21)),
        ("deepseek.r1-v1:0", None),
    ];
    for (model, expected) in cases {
        assert_eq!(detect_bedrock_model_family(model), expected, "{model}");
    }
}

#[test]
fn bedrock_family_skips_routing_prefix() {
    for prefix in ["us", "eu", "apac", "global"] {
        let model = format!("{prefix}.anthropic.claude-sonnet-4-5-20250929-v1:0");
        assert_eq!(
            detect_bedrock_model_family(&model),
            Some(BedrockModelFamily::Anthropic),
            "{model}"
        );
    }
    assert_eq!(
        detect_bedrock_model_family("us.amazon.nova-lite-v1:0"),
        Some(BedrockModelFamily::Amazon)
    );
}

#[test]
fn bedrock_caching_support() {
    assert!(bedrock_supports_caching("anthropic.claude-3-7-sonnet-20250219-v1:0"));
    assert!(bedrock_supports_caching("us.anthropic.claude-sonnet-4-5-20250929-v1:0"));
    assert!(bedrock_supports_caching("amazon.nova-pro-v1:0"));
    assert!(bedrock_supports_caching("us.amazon.nova-micro-v1:0"));
    assert!(!bedrock_supports_caching("amazon.titan-text-express-v1"));
    assert!(!bedrock_supports_caching("meta.llama3-70b-instruct-v1:0"));
    assert!(!bedrock_supports_caching("unknown-model"));
}

// ============================================================================
// Model predicates
// ============================================================================

#[test]
fn reasoning_models() {
    for model in ["o1", "o1-mini", "o3", "o3-mini", "o4-mini", "openai/o3", "openai/o4-mini"] {
        assert!(is_reasoning_model(model), "{model}");
    }
    for model in ["gpt-4o", "gpt-4o-mini", "o2", "omni", "claude-opus-4", "anthropic/claude-3"] {
        assert!(!is_reasoning_model(model), "{model}");
    }
}

#[test]
fn openai_hosting_and_gateways() {
    assert!(can_host_openai_models(Provider::OpenAI));
    assert!(can_host_openai_models(Provider::OpenRouter));
    assert!(can_host_openai_models(Provider::Vercel));
    assert!(!can_host_openai_models(Provider::Anthropic));
    assert!(!can_host_openai_models(Provider::Bedrock));

    let gateways: Vec<_> = Provider::ALL
        .into_iter()
        .filter(|p| is_gateway_provider(*p))
        .collect();
    assert_eq!(gateways, [Provider::OpenRouter, Provider::Vercel]);
}

// ============================================================================
// Table consistency
// ============================================================================

#[test]
fn every_mapped_native_name_has_a_spec() {
    for provider in Provider::ALL {
        for (canonical, native) in param_map(provider) {
            assert!(
                param_spec(provider, native).is_some(),
                "{provider}: {canonical} maps to {native} which has no spec"
            );
        }
    }
}

#[test]
fn alias_values_are_canonical_in_some_provider() {
    for (alias, canonical) in ALIASES {
        assert!(
            Provider::ALL
                .iter()
                .any(|p| native_name(*p, canonical).is_some()),
            "{alias} → {canonical}"
        );
        assert!(canonical_name(canonical).is_none(), "{canonical} is also an alias");
    }
}

#[test]
fn reasoning_tables_line_up_with_specs() {
    for provider in Provider::ALL {
        if let Some((max_tokens, reasoning_max)) = reasoning_max_tokens(provider) {
            assert!(can_host_openai_models(provider), "{provider}");
            assert!(param_spec(provider, max_tokens).is_some(), "{provider}");
            assert!(param_spec(provider, reasoning_max).is_some(), "{provider}");
        }
    }
    for name in REASONING_UNSUPPORTED {
        assert!(param_spec(Provider::OpenAI, name).is_some(), "{name}");
    }
}

#[test]
fn cache_capable_providers_have_cache_specs() {
    for provider in Provider::ALL {
        let Some(enabled) = cache_value(provider) else {
            assert!(native_name(provider, CACHE).is_none(), "{provider}");
            continue;
        };
        let native = native_name(provider, CACHE).expect("cache param mapped");
        let spec = param_spec(provider, native).expect("cache directive spec");
        assert!(spec.values.is_some_and(|v| v.contains(&enabled)));

        let ttl = param_spec(provider, "cache_ttl").expect("cache ttl spec");
        assert_eq!(ttl.values, Some(CACHE_TTLS));
    }
}

#[test]
fn cache_support_by_provider() {
    assert!(supports_cache(Provider::Anthropic, "claude-sonnet-4-5"));
    assert!(supports_cache(
        Provider::Bedrock,
        "us.anthropic.claude-sonnet-4-5-20250929-v1:0"
    ));
    assert!(!supports_cache(Provider::Bedrock, "meta.llama3-70b-instruct-v1:0"));
    assert!(!supports_cache(Provider::Google, "gemini-2.5-pro"));
    assert!(supports_cache(Provider::Vercel, "anthropic/claude-sonnet-4-5"));
}

#[test]
fn spec_tables_are_typed() {
    let temp = param_spec(Provider::OpenAI, "temperature").unwrap();
    assert_eq!(temp.kind, ParamType::Number);
    assert_eq!(temp.max, Some(2.0));

    let anthropic_temp = param_spec(Provider::Anthropic, "temperature").unwrap();
    assert_eq!(anthropic_temp.max, Some(1.0));

    let stream = param_spec(Provider::Google, "stream").unwrap();
    assert_eq!(stream.kind, ParamType::Boolean);

    assert!(spec_table(Provider::Cohere).iter().any(|(n, _)| *n == "p"));
}
