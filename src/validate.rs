//! Validator: checks normalized params against the receiving provider's rules.
//!
//! The connection string is parsed and normalized first, so what gets checked
//! is exactly what would be sent. Gateway requests are checked against the
//! vendor the model prefix routes to, falling back to the gateway's own
//! (loose) table when no vendor resolves.
//!
//! Checks per param, first match wins:
//! 1. sampling params on OpenAI reasoning models
//! 2. Bedrock family restrictions (`topK`, `cache_control`)
//! 3. unknown params
//! 4. spec lookup (params without a spec stop here)
//! 5. Anthropic temperature / top_p exclusion
//! 6. type, range and enum checks

use indexmap::IndexMap;
use tracing::debug;

use crate::connection::parse;
use crate::normalize::normalize;
use crate::providers::cache::CACHE_TTL_PARAM;
use crate::providers::params::{
    CACHE, REASONING_EFFORT, REASONING_UNSUPPORTED, TEMPERATURE, TOP_K, TOP_P,
    canonical_for_native, is_native_name, native_name,
};
use crate::providers::specs::param_spec;
use crate::providers::{
    BedrockModelFamily, Provider, bedrock_supports_caching, can_host_openai_models,
    detect_bedrock_model_family, effective_provider, is_gateway_provider, is_reasoning_model,
};
use crate::telemetry;
use crate::types::{
    ConnectionRecord, NormalizeOptions, NormalizeResult, ParamSpec, ParamType, ValidateOptions,
    ValidationIssue,
};

/// Bedrock families that accept `topK`.
const BEDROCK_TOP_K_FAMILIES: &[BedrockModelFamily] = &[
    BedrockModelFamily::Anthropic,
    BedrockModelFamily::Cohere,
    BedrockModelFamily::Mistral,
];

const BOOLEAN_VALUES: &[&str] = &["true", "false", "0", "1"];

/// Validate a raw connection string.
///
/// Never fails: a malformed string yields a single error on the synthetic
/// `"url"` param, an unknown host a single issue on `"host"`.
///
/// ```rust
/// use llm_strings::{Severity, ValidateOptions, validate};
///
/// let issues = validate("llm://api.openai.com/gpt-4o?temp=3.0", &ValidateOptions::default());
/// assert_eq!(issues.len(), 1);
/// assert_eq!(issues[0].param, "temperature");
/// assert_eq!(issues[0].severity, Severity::Error);
/// ```
pub fn validate(connection: &str, options: &ValidateOptions) -> Vec<ValidationIssue> {
    match parse(connection) {
        Ok(record) => validate_record(&record, options),
        Err(err) => {
            let issues = vec![ValidationIssue::error("url", "", err.to_string())];
            record_issue_metrics(&issues);
            issues
        }
    }
}

/// Validate an already-parsed connection record.
pub fn validate_record(
    record: &ConnectionRecord,
    options: &ValidateOptions,
) -> Vec<ValidationIssue> {
    let NormalizeResult {
        config,
        provider,
        sub_provider,
        ..
    } = normalize(record, &NormalizeOptions::default());

    metrics::counter!(telemetry::VALIDATE_TOTAL,
        "provider" => provider.map_or("unknown", |p| p.as_str()))
    .increment(1);

    let Some(provider) = provider else {
        let issues = vec![ValidationIssue {
            param: "host".to_string(),
            value: record.host.clone(),
            message: format!("Unknown provider for host \"{}\"", record.host),
            severity: options.unknown_severity(),
        }];
        record_issue_metrics(&issues);
        return issues;
    };

    let target = Target::new(provider, sub_provider, &config);
    let mut issues = Vec::new();
    for (key, value) in &config.params {
        if let Some(issue) = target.check(key, value, options) {
            issues.push(issue);
        }
    }

    debug!(
        provider = %provider,
        sub_provider = sub_provider.map(|p| p.as_str()),
        params = config.params.len(),
        issues = issues.len(),
        "validated connection"
    );
    record_issue_metrics(&issues);
    issues
}

fn record_issue_metrics(issues: &[ValidationIssue]) {
    for issue in issues {
        metrics::counter!(telemetry::VALIDATION_ISSUES_TOTAL,
            "severity" => issue.severity.as_str())
        .increment(1);
    }
}

/// Where a request ends up, and the normalized params headed there.
struct Target<'a> {
    /// Provider detected from the host; params are spelled in its vocabulary.
    provider: Provider,
    /// Vendor behind a gateway, when the model prefix resolves.
    sub_provider: Option<Provider>,
    /// Provider whose rules apply.
    effective: Provider,
    model: &'a str,
    bedrock_family: Option<BedrockModelFamily>,
    params: &'a IndexMap<String, String>,
}

impl<'a> Target<'a> {
    fn new(
        provider: Provider,
        sub_provider: Option<Provider>,
        config: &'a ConnectionRecord,
    ) -> Self {
        let bedrock_family = if provider == Provider::Bedrock {
            detect_bedrock_model_family(&config.model)
        } else {
            None
        };
        Self {
            provider,
            sub_provider,
            effective: effective_provider(provider, sub_provider),
            model: &config.model,
            bedrock_family,
            params: &config.params,
        }
    }

    /// The gateway sub-provider, when it drives validation.
    fn routed_sub_provider(&self) -> Option<Provider> {
        self.sub_provider.filter(|_| is_gateway_provider(self.provider))
    }

    /// Whether the request reaches an Anthropic model.
    fn targets_anthropic(&self) -> bool {
        match self.provider {
            Provider::Anthropic => true,
            Provider::Bedrock => self.bedrock_family == Some(BedrockModelFamily::Anthropic),
            _ => self.routed_sub_provider() == Some(Provider::Anthropic),
        }
    }

    /// Spec for a native param, translating gateway spellings to the
    /// sub-provider's through the canonical name when needed.
    ///
    /// Cache directives are applied by the gateway itself, so they keep the
    /// gateway's spec whatever vendor the model routes to.
    fn spec(&self, key: &str) -> Option<&'static ParamSpec> {
        param_spec(self.effective, key)
            .or_else(|| {
                let sub = self.routed_sub_provider()?;
                let canonical = canonical_for_native(self.provider, key)?;
                param_spec(sub, native_name(sub, canonical)?)
            })
            .or_else(|| {
                self.routed_sub_provider()?;
                let cache_key =
                    native_name(self.provider, CACHE) == Some(key) || key == CACHE_TTL_PARAM;
                cache_key.then(|| param_spec(self.provider, key)).flatten()
            })
    }

    fn is_known(&self, key: &str) -> bool {
        is_native_name(self.effective, key) || self.spec(key).is_some()
    }

    fn check(&self, key: &str, value: &str, options: &ValidateOptions) -> Option<ValidationIssue> {
        if can_host_openai_models(self.effective)
            && is_reasoning_model(self.model)
            && REASONING_UNSUPPORTED.contains(&key)
        {
            let effort = native_name(self.provider, REASONING_EFFORT).unwrap_or(REASONING_EFFORT);
            return Some(ValidationIssue::error(
                key,
                value,
                format!(
                    "\"{key}\" is not supported by reasoning model \"{}\"; use \"{effort}\" instead",
                    self.model
                ),
            ));
        }

        if self.provider == Provider::Bedrock
            && let Some(issue) = self.check_bedrock(key, value)
        {
            return Some(issue);
        }

        if !self.is_known(key) {
            return Some(ValidationIssue {
                param: key.to_string(),
                value: value.to_string(),
                message: format!("Unknown param \"{key}\" for {}", self.effective),
                severity: options.unknown_severity(),
            });
        }

        let spec = self.spec(key)?;

        if self.targets_anthropic()
            && let (Some(temperature), Some(top_p)) = (
                native_name(self.provider, TEMPERATURE),
                native_name(self.provider, TOP_P),
            )
            && key == temperature
            && self.params.contains_key(top_p)
        {
            return Some(ValidationIssue::error(
                key,
                value,
                format!(
                    "Cannot specify both \"{temperature}\" and \"{top_p}\" for Anthropic models"
                ),
            ));
        }

        check_value(key, value, spec)
    }

    fn check_bedrock(&self, key: &str, value: &str) -> Option<ValidationIssue> {
        let family = self.bedrock_family.map_or("this", |f| f.as_str());

        if native_name(Provider::Bedrock, TOP_K) == Some(key)
            && !self
                .bedrock_family
                .is_some_and(|f| BEDROCK_TOP_K_FAMILIES.contains(&f))
        {
            return Some(ValidationIssue::error(
                key,
                value,
                format!(
                    "\"{key}\" is not supported for {family} models on Bedrock (Anthropic, Cohere and Mistral only)"
                ),
            ));
        }

        if native_name(Provider::Bedrock, CACHE) == Some(key)
            && !bedrock_supports_caching(self.model)
        {
            return Some(ValidationIssue::error(
                key,
                value,
                format!(
                    "Prompt caching is not supported for model \"{}\" on Bedrock",
                    self.model
                ),
            ));
        }

        None
    }
}

/// Type, range and enum check for a single value.
fn check_value(key: &str, value: &str, spec: &ParamSpec) -> Option<ValidationIssue> {
    match spec.kind {
        ParamType::Number => {
            let Some(n) = value.trim().parse::<f64>().ok().filter(|n| n.is_finite()) else {
                return Some(ValidationIssue::error(
                    key,
                    value,
                    format!("\"{key}\" should be a number, got \"{value}\""),
                ));
            };
            if let Some(min) = spec.min
                && n < min
            {
                return Some(ValidationIssue::error(
                    key,
                    value,
                    format!("\"{key}\" must be >= {min}, got {value}"),
                ));
            }
            if let Some(max) = spec.max
                && n > max
            {
                return Some(ValidationIssue::error(
                    key,
                    value,
                    format!("\"{key}\" must be <= {max}, got {value}"),
                ));
            }
            None
        }
        ParamType::Boolean if !BOOLEAN_VALUES.contains(&value) => Some(ValidationIssue::error(
            key,
            value,
            format!("\"{key}\" should be a boolean (true, false, 0 or 1), got \"{value}\""),
        )),
        ParamType::Boolean => None,
        ParamType::String => match spec.values {
            Some(values) if !values.contains(&value) => Some(ValidationIssue::error(
                key,
                value,
                format!("\"{key}\" must be one of: {}, got \"{value}\"", values.join(", ")),
            )),
            _ => None,
        },
    }
}
