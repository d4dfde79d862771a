//! Parameter name tables: shorthand aliases and per-provider native names.
//!
//! Names move through three vocabularies:
//! 1. **shorthand** — what users type (`temp`, `max`, `topk`)
//! 2. **canonical** — one snake_case name per concept (`temperature`, `max_tokens`)
//! 3. **native** — the provider's own spelling (`maxOutputTokens`, `p`, `random_seed`)

use super::Provider;

pub const TEMPERATURE: &str = "temperature";
pub const MAX_TOKENS: &str = "max_tokens";
pub const TOP_P: &str = "top_p";
pub const TOP_K: &str = "top_k";
pub const FREQUENCY_PENALTY: &str = "frequency_penalty";
pub const PRESENCE_PENALTY: &str = "presence_penalty";
pub const STOP: &str = "stop";
pub const N: &str = "n";
pub const SEED: &str = "seed";
pub const STREAM: &str = "stream";
pub const REASONING_EFFORT: &str = "reasoning_effort";
pub const SAFE_PROMPT: &str = "safe_prompt";
/// Pseudo-parameter expanded into a provider cache directive.
pub const CACHE: &str = "cache";

/// Shorthand → canonical. Many-to-one; no value is itself a key.
pub const ALIASES: &[(&str, &str)] = &[
    ("temp", TEMPERATURE),
    ("max", MAX_TOKENS),
    ("max_out", MAX_TOKENS),
    ("max_output", MAX_TOKENS),
    ("max_output_tokens", MAX_TOKENS),
    ("maxTokens", MAX_TOKENS),
    ("maxOutputTokens", MAX_TOKENS),
    ("max_tokens_to_sample", MAX_TOKENS),
    ("topp", TOP_P),
    ("topP", TOP_P),
    ("nucleus", TOP_P),
    ("topk", TOP_K),
    ("topK", TOP_K),
    ("freq", FREQUENCY_PENALTY),
    ("freq_penalty", FREQUENCY_PENALTY),
    ("frequencyPenalty", FREQUENCY_PENALTY),
    ("pres", PRESENCE_PENALTY),
    ("pres_penalty", PRESENCE_PENALTY),
    ("presencePenalty", PRESENCE_PENALTY),
    ("stop_sequences", STOP),
    ("stopSequences", STOP),
    ("stop_sequence", STOP),
    ("candidateCount", N),
    ("candidate_count", N),
    ("random_seed", SEED),
    ("reasoning", REASONING_EFFORT),
    ("effort", REASONING_EFFORT),
    ("reasoningEffort", REASONING_EFFORT),
    ("caching", CACHE),
    ("cache_prompt", CACHE),
];

const OPENAI_PARAMS: &[(&str, &str)] = &[
    (TEMPERATURE, "temperature"),
    (MAX_TOKENS, "max_tokens"),
    (TOP_P, "top_p"),
    (FREQUENCY_PENALTY, "frequency_penalty"),
    (PRESENCE_PENALTY, "presence_penalty"),
    (STOP, "stop"),
    (N, "n"),
    (SEED, "seed"),
    (STREAM, "stream"),
    (REASONING_EFFORT, "reasoning_effort"),
];

const ANTHROPIC_PARAMS: &[(&str, &str)] = &[
    (TEMPERATURE, "temperature"),
    (MAX_TOKENS, "max_tokens"),
    (TOP_P, "top_p"),
    (TOP_K, "top_k"),
    (STOP, "stop_sequences"),
    (STREAM, "stream"),
    (CACHE, "cache_control"),
];

const GOOGLE_PARAMS: &[(&str, &str)] = &[
    (TEMPERATURE, "temperature"),
    (MAX_TOKENS, "maxOutputTokens"),
    (TOP_P, "topP"),
    (TOP_K, "topK"),
    (FREQUENCY_PENALTY, "frequencyPenalty"),
    (PRESENCE_PENALTY, "presencePenalty"),
    (STOP, "stopSequences"),
    (N, "candidateCount"),
    (SEED, "seed"),
    (STREAM, "stream"),
];

const MISTRAL_PARAMS: &[(&str, &str)] = &[
    (TEMPERATURE, "temperature"),
    (MAX_TOKENS, "max_tokens"),
    (TOP_P, "top_p"),
    (FREQUENCY_PENALTY, "frequency_penalty"),
    (PRESENCE_PENALTY, "presence_penalty"),
    (STOP, "stop"),
    (N, "n"),
    (SEED, "random_seed"),
    (STREAM, "stream"),
    (SAFE_PROMPT, "safe_prompt"),
];

const COHERE_PARAMS: &[(&str, &str)] = &[
    (TEMPERATURE, "temperature"),
    (MAX_TOKENS, "max_tokens"),
    (TOP_P, "p"),
    (TOP_K, "k"),
    (FREQUENCY_PENALTY, "frequency_penalty"),
    (PRESENCE_PENALTY, "presence_penalty"),
    (STOP, "stop_sequences"),
    (SEED, "seed"),
    (STREAM, "stream"),
];

// Converse API inferenceConfig names; topK travels in additionalModelRequestFields.
const BEDROCK_PARAMS: &[(&str, &str)] = &[
    (TEMPERATURE, "temperature"),
    (MAX_TOKENS, "maxTokens"),
    (TOP_P, "topP"),
    (TOP_K, "topK"),
    (STOP, "stopSequences"),
    (STREAM, "stream"),
    (CACHE, "cache_control"),
];

const OPENROUTER_PARAMS: &[(&str, &str)] = &[
    (TEMPERATURE, "temperature"),
    (MAX_TOKENS, "max_tokens"),
    (TOP_P, "top_p"),
    (TOP_K, "top_k"),
    (FREQUENCY_PENALTY, "frequency_penalty"),
    (PRESENCE_PENALTY, "presence_penalty"),
    (STOP, "stop"),
    (N, "n"),
    (SEED, "seed"),
    (STREAM, "stream"),
    (REASONING_EFFORT, "reasoning_effort"),
    (CACHE, "cache_control"),
];

const VERCEL_PARAMS: &[(&str, &str)] = &[
    (TEMPERATURE, "temperature"),
    (MAX_TOKENS, "max_tokens"),
    (TOP_P, "top_p"),
    (TOP_K, "top_k"),
    (FREQUENCY_PENALTY, "frequency_penalty"),
    (PRESENCE_PENALTY, "presence_penalty"),
    (STOP, "stop"),
    (SEED, "seed"),
    (STREAM, "stream"),
    (REASONING_EFFORT, "reasoning_effort"),
    (CACHE, "cache_control"),
];

/// Native params reasoning models reject.
pub const REASONING_UNSUPPORTED: &[&str] =
    &[TEMPERATURE, TOP_P, FREQUENCY_PENALTY, PRESENCE_PENALTY];

/// Canonical name for a shorthand key.
pub fn canonical_name(key: &str) -> Option<&'static str> {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, canonical)| *canonical)
}

/// Canonical → native name table for a provider.
pub fn param_map(provider: Provider) -> &'static [(&'static str, &'static str)] {
    match provider {
        Provider::OpenAI => OPENAI_PARAMS,
        Provider::Anthropic => ANTHROPIC_PARAMS,
        Provider::Google => GOOGLE_PARAMS,
        Provider::Mistral => MISTRAL_PARAMS,
        Provider::Cohere => COHERE_PARAMS,
        Provider::Bedrock => BEDROCK_PARAMS,
        Provider::OpenRouter => OPENROUTER_PARAMS,
        Provider::Vercel => VERCEL_PARAMS,
    }
}

/// The provider's native name for a canonical param, if it accepts it.
pub fn native_name(provider: Provider, canonical: &str) -> Option<&'static str> {
    param_map(provider)
        .iter()
        .find(|(c, _)| *c == canonical)
        .map(|(_, native)| *native)
}

/// Reverse lookup: the canonical name behind a provider's native name.
pub fn canonical_for_native(provider: Provider, native: &str) -> Option<&'static str> {
    param_map(provider)
        .iter()
        .find(|(_, n)| *n == native)
        .map(|(canonical, _)| *canonical)
}

/// Whether `key` is one of the provider's native names.
pub fn is_native_name(provider: Provider, key: &str) -> bool {
    param_map(provider).iter().any(|(_, native)| *native == key)
}

/// `(max tokens, reasoning max tokens)` native names for providers that
/// rename the token limit when talking to reasoning models.
pub fn reasoning_max_tokens(provider: Provider) -> Option<(&'static str, &'static str)> {
    match provider {
        Provider::OpenAI | Provider::OpenRouter | Provider::Vercel => {
            Some(("max_tokens", "max_completion_tokens"))
        }
        _ => None,
    }
}
