//! Normalizer: rewrites connection-string params into a provider's native vocabulary.
//!
//! Each param is processed on its own:
//! 1. shorthand aliases expand to canonical names (`temp` → `temperature`)
//! 2. `cache` expands into the provider's cache directive, or is dropped
//! 3. canonical names become native names (`max_tokens` → `maxOutputTokens`)
//! 4. reasoning models get `max_completion_tokens` instead of `max_tokens`
//!
//! Keys that are already native for the detected provider skip steps 1 and 3,
//! so normalizing normalized output is a no-op. Unknown hosts only get step 1.
//!
//! When several input keys land on the same native name, one survives no
//! matter the input order: a key given in its final spelling beats any
//! shorthand, otherwise the alphabetically first input key wins.

use indexmap::IndexMap;
use tracing::debug;

use crate::providers::cache::{
    CACHE_TTL_PARAM, cache_value, is_duration, is_truthy, supports_cache,
};
use crate::providers::params::{
    CACHE, canonical_name, is_native_name, native_name, reasoning_max_tokens,
};
use crate::providers::{
    Provider, can_host_openai_models, detect_gateway_sub_provider, detect_provider,
    effective_provider, is_gateway_provider, is_reasoning_model,
};
use crate::telemetry;
use crate::types::{ConnectionRecord, NormalizeChange, NormalizeOptions, NormalizeResult};

/// Collects rewrites when verbose; always traces them.
struct ChangeLog {
    verbose: bool,
    changes: Vec<NormalizeChange>,
}

impl ChangeLog {
    fn new(verbose: bool) -> Self {
        Self {
            verbose,
            changes: Vec::new(),
        }
    }

    fn record(&mut self, from: &str, to: Option<&str>, value: &str, reason: &str) {
        debug!(from, to, value, reason, "normalized param");
        if self.verbose {
            self.changes.push(NormalizeChange {
                from: from.to_string(),
                to: to.map(str::to_string),
                value: value.to_string(),
                reason: reason.to_string(),
            });
        }
    }
}

/// A param headed for the output, with the input key it came from.
struct Emitted {
    source: String,
    value: String,
}

/// Output params keyed by native name.
struct Output {
    params: IndexMap<String, Emitted>,
}

impl Output {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            params: IndexMap::with_capacity(capacity),
        }
    }

    /// Insert `key`, resolving a collision with an earlier input key.
    fn emit(&mut self, log: &mut ChangeLog, source: &str, key: String, value: &str) {
        match self.params.get_mut(&key) {
            Some(existing) if precedence(&existing.source, &key) <= precedence(source, &key) => {
                log.record(source, None, value, "duplicate param");
            }
            Some(existing) => {
                log.record(&existing.source, None, &existing.value, "duplicate param");
                *existing = Emitted {
                    source: source.to_string(),
                    value: value.to_string(),
                };
            }
            None => {
                self.params.insert(
                    key,
                    Emitted {
                        source: source.to_string(),
                        value: value.to_string(),
                    },
                );
            }
        }
    }

    fn into_params(self) -> IndexMap<String, String> {
        self.params
            .into_iter()
            .map(|(key, emitted)| (key, emitted.value))
            .collect()
    }
}

/// Lower wins: exact spellings first, then by input key.
fn precedence<'a>(source: &'a str, key: &str) -> (bool, &'a str) {
    (source != key, source)
}

/// Normalize a connection record's params for its provider.
///
/// Never fails: unknown hosts and unsupported params pass through for the
/// validator to report.
///
/// ```rust
/// use llm_strings::{ConnectionRecord, NormalizeOptions, Provider, normalize};
///
/// let record = ConnectionRecord::new("generativelanguage.googleapis.com", "gemini-2.5-pro")
///     .param("temp", "0.7")
///     .param("max", "1024");
/// let result = normalize(&record, &NormalizeOptions::default());
///
/// assert_eq!(result.provider, Some(Provider::Google));
/// assert_eq!(result.config.get("temperature"), Some("0.7"));
/// assert_eq!(result.config.get("maxOutputTokens"), Some("1024"));
/// ```
pub fn normalize(record: &ConnectionRecord, options: &NormalizeOptions) -> NormalizeResult {
    let provider = detect_provider(&record.host);
    let sub_provider = provider
        .filter(|p| is_gateway_provider(*p))
        .and_then(|_| detect_gateway_sub_provider(&record.model));

    metrics::counter!(telemetry::NORMALIZE_TOTAL,
        "provider" => provider.map_or("unknown", |p| p.as_str()))
    .increment(1);

    let mut log = ChangeLog::new(options.verbose);
    let mut output = Output::with_capacity(record.params.len());

    for (source, value) in &record.params {
        let native_already = provider.is_some_and(|p| is_native_name(p, source));
        let mut key = source.clone();

        if !native_already && let Some(canonical) = canonical_name(&key) {
            log.record(&key, Some(canonical), value, "alias");
            key = canonical.to_string();
        }

        let Some(provider) = provider else {
            output.emit(&mut log, source, key, value);
            continue;
        };

        if key == CACHE {
            match cache_directive(provider, &record.model) {
                None => {
                    log.record(&key, None, value, "cache not supported by provider/model");
                    continue;
                }
                Some((native, enabled)) if is_truthy(value) => {
                    log.record(&key, Some(native), enabled, "cache directive");
                    output.emit(&mut log, source, native.to_string(), enabled);
                    continue;
                }
                Some((native, enabled)) if is_duration(value) => {
                    log.record(&key, Some(native), enabled, "cache directive");
                    log.record(&key, Some(CACHE_TTL_PARAM), value, "cache ttl");
                    output.emit(&mut log, source, native.to_string(), enabled);
                    output.emit(&mut log, source, CACHE_TTL_PARAM.to_string(), value);
                    continue;
                }
                // anything else is left for the validator to judge
                Some(_) => {}
            }
        }

        if !native_already
            && let Some(native) = native_name(provider, &key)
            && native != key
        {
            log.record(&key, Some(native), value, "provider param name");
            key = native.to_string();
        }

        let effective = effective_provider(provider, sub_provider);
        if can_host_openai_models(effective)
            && is_reasoning_model(&record.model)
            && let Some((max_tokens, reasoning_max)) = reasoning_max_tokens(provider)
            && key == max_tokens
        {
            log.record(&key, Some(reasoning_max), value, "reasoning model token limit");
            key = reasoning_max.to_string();
        }

        output.emit(&mut log, source, key, value);
    }

    NormalizeResult {
        config: ConnectionRecord {
            params: output.into_params(),
            ..record.clone()
        },
        provider,
        sub_provider,
        changes: log.changes,
    }
}

/// `(native param, enabled value)` when the provider/model supports explicit caching.
fn cache_directive(provider: Provider, model: &str) -> Option<(&'static str, &'static str)> {
    if !supports_cache(provider, model) {
        return None;
    }
    Some((native_name(provider, CACHE)?, cache_value(provider)?))
}
