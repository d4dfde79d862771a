//! Per-provider parameter constraints, keyed by native name.
//!
//! Gateway tables are deliberately loose: they accept the widest range any
//! upstream vendor does, since the real limit depends on where the request
//! ends up. The validator prefers the sub-provider's table when a gateway
//! model prefix resolves.

use super::Provider;
use super::cache::CACHE_TTLS;
use crate::types::ParamSpec;

const EFFORT_LEVELS: &[&str] = &["minimal", "low", "medium", "high"];
const EPHEMERAL: &[&str] = &["ephemeral"];

const STREAM: ParamSpec = ParamSpec::boolean()
    .default_value("false")
    .description("Stream the response");
const STOP: ParamSpec = ParamSpec::string().description("Stop sequence(s)");
const SEED: ParamSpec = ParamSpec::number().description("Deterministic sampling seed");
const MAX_TOKENS: ParamSpec = ParamSpec::number()
    .min(1.0)
    .description("Maximum tokens to generate");
const TOP_P: ParamSpec = ParamSpec::number()
    .min(0.0)
    .max(1.0)
    .description("Nucleus sampling probability mass");
const PENALTY: ParamSpec = ParamSpec::number()
    .min(-2.0)
    .max(2.0)
    .default_value("0");
const CACHE_CONTROL: ParamSpec =
    ParamSpec::one_of(EPHEMERAL).description("Prompt cache directive");
const CACHE_TTL: ParamSpec = ParamSpec::one_of(CACHE_TTLS).description("Prompt cache lifetime");

const OPENAI_SPECS: &[(&str, ParamSpec)] = &[
    (
        "temperature",
        ParamSpec::number()
            .min(0.0)
            .max(2.0)
            .default_value("1")
            .description("Sampling temperature"),
    ),
    ("max_tokens", MAX_TOKENS),
    (
        "max_completion_tokens",
        ParamSpec::number()
            .min(1.0)
            .description("Token limit for reasoning models, including reasoning tokens"),
    ),
    ("top_p", TOP_P.default_value("1")),
    ("frequency_penalty", PENALTY),
    ("presence_penalty", PENALTY),
    ("stop", STOP),
    ("n", ParamSpec::number().min(1.0).max(128.0).default_value("1")),
    ("seed", SEED),
    ("stream", STREAM),
    (
        "reasoning_effort",
        ParamSpec::one_of(EFFORT_LEVELS)
            .default_value("medium")
            .description("Reasoning effort for o-series models"),
    ),
];

const ANTHROPIC_SPECS: &[(&str, ParamSpec)] = &[
    (
        "temperature",
        ParamSpec::number()
            .min(0.0)
            .max(1.0)
            .default_value("1")
            .description("Sampling temperature"),
    ),
    ("max_tokens", MAX_TOKENS),
    ("top_p", TOP_P),
    (
        "top_k",
        ParamSpec::number()
            .min(0.0)
            .description("Sample from the top K options"),
    ),
    ("stop_sequences", STOP),
    ("stream", STREAM),
    ("cache_control", CACHE_CONTROL),
    ("cache_ttl", CACHE_TTL),
];

const GOOGLE_SPECS: &[(&str, ParamSpec)] = &[
    (
        "temperature",
        ParamSpec::number()
            .min(0.0)
            .max(2.0)
            .default_value("1")
            .description("Sampling temperature"),
    ),
    ("maxOutputTokens", MAX_TOKENS),
    ("topP", TOP_P),
    (
        "topK",
        ParamSpec::number()
            .min(1.0)
            .description("Sample from the top K options"),
    ),
    ("frequencyPenalty", PENALTY),
    ("presencePenalty", PENALTY),
    ("stopSequences", STOP),
    (
        "candidateCount",
        ParamSpec::number().min(1.0).max(8.0).default_value("1"),
    ),
    ("seed", SEED),
    ("stream", STREAM),
];

const MISTRAL_SPECS: &[(&str, ParamSpec)] = &[
    (
        "temperature",
        ParamSpec::number()
            .min(0.0)
            .max(1.5)
            .default_value("0.7")
            .description("Sampling temperature"),
    ),
    ("max_tokens", MAX_TOKENS),
    ("top_p", TOP_P.default_value("1")),
    ("frequency_penalty", PENALTY),
    ("presence_penalty", PENALTY),
    ("stop", STOP),
    ("n", ParamSpec::number().min(1.0).default_value("1")),
    ("random_seed", SEED.min(0.0)),
    ("stream", STREAM),
    (
        "safe_prompt",
        ParamSpec::boolean()
            .default_value("false")
            .description("Inject the safety system prompt"),
    ),
];

const COHERE_SPECS: &[(&str, ParamSpec)] = &[
    (
        "temperature",
        ParamSpec::number()
            .min(0.0)
            .max(1.0)
            .default_value("0.3")
            .description("Sampling temperature"),
    ),
    ("max_tokens", MAX_TOKENS),
    (
        "p",
        ParamSpec::number()
            .min(0.01)
            .max(0.99)
            .default_value("0.75")
            .description("Nucleus sampling probability mass"),
    ),
    (
        "k",
        ParamSpec::number()
            .min(0.0)
            .max(500.0)
            .default_value("0")
            .description("Sample from the top K options"),
    ),
    ("frequency_penalty", ParamSpec::number().min(0.0).max(1.0)),
    ("presence_penalty", ParamSpec::number().min(0.0).max(1.0)),
    ("stop_sequences", STOP),
    ("seed", SEED),
    ("stream", STREAM),
];

const BEDROCK_SPECS: &[(&str, ParamSpec)] = &[
    (
        "temperature",
        ParamSpec::number()
            .min(0.0)
            .max(1.0)
            .description("Sampling temperature"),
    ),
    ("maxTokens", MAX_TOKENS),
    ("topP", TOP_P),
    (
        "topK",
        ParamSpec::number()
            .min(0.0)
            .max(500.0)
            .description("Sample from the top K options (Anthropic, Cohere, Mistral only)"),
    ),
    ("stopSequences", STOP),
    ("stream", STREAM),
    ("cache_control", CACHE_CONTROL),
    ("cache_ttl", CACHE_TTL),
];

const OPENROUTER_SPECS: &[(&str, ParamSpec)] = &[
    (
        "temperature",
        ParamSpec::number()
            .min(0.0)
            .max(2.0)
            .default_value("1")
            .description("Sampling temperature"),
    ),
    ("max_tokens", MAX_TOKENS),
    ("max_completion_tokens", MAX_TOKENS),
    ("top_p", TOP_P),
    ("top_k", ParamSpec::number().min(0.0)),
    ("frequency_penalty", PENALTY),
    ("presence_penalty", PENALTY),
    ("stop", STOP),
    ("n", ParamSpec::number().min(1.0)),
    ("seed", SEED),
    ("stream", STREAM),
    ("reasoning_effort", ParamSpec::one_of(EFFORT_LEVELS)),
    ("cache_control", CACHE_CONTROL),
    ("cache_ttl", CACHE_TTL),
];

const VERCEL_SPECS: &[(&str, ParamSpec)] = &[
    (
        "temperature",
        ParamSpec::number()
            .min(0.0)
            .max(2.0)
            .description("Sampling temperature"),
    ),
    ("max_tokens", MAX_TOKENS),
    ("max_completion_tokens", MAX_TOKENS),
    ("top_p", TOP_P),
    ("top_k", ParamSpec::number().min(0.0)),
    ("frequency_penalty", PENALTY),
    ("presence_penalty", PENALTY),
    ("stop", STOP),
    ("seed", SEED),
    ("stream", STREAM),
    ("reasoning_effort", ParamSpec::one_of(EFFORT_LEVELS)),
    ("cache_control", CACHE_CONTROL),
    ("cache_ttl", CACHE_TTL),
];

/// Native name → spec table for a provider.
pub fn spec_table(provider: Provider) -> &'static [(&'static str, ParamSpec)] {
    match provider {
        Provider::OpenAI => OPENAI_SPECS,
        Provider::Anthropic => ANTHROPIC_SPECS,
        Provider::Google => GOOGLE_SPECS,
        Provider::Mistral => MISTRAL_SPECS,
        Provider::Cohere => COHERE_SPECS,
        Provider::Bedrock => BEDROCK_SPECS,
        Provider::OpenRouter => OPENROUTER_SPECS,
        Provider::Vercel => VERCEL_SPECS,
    }
}

/// Spec for a provider's native param.
pub fn param_spec(provider: Provider, native: &str) -> Option<&'static ParamSpec> {
    spec_table(provider)
        .iter()
        .find(|(name, _)| *name == native)
        .map(|(_, spec)| spec)
}
