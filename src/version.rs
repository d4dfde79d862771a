//! Build metadata embedded by vergen, for `llmstr version`.

/// Package version from Cargo.toml.
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

const UNKNOWN: &str = "unknown";

/// Git commit SHA at build time, or "unknown" outside a checkout.
pub const GIT_SHA: &str = match option_env!("VERGEN_GIT_SHA") {
    Some(sha) => sha,
    None => UNKNOWN,
};

/// Build timestamp (RFC 3339), or "unknown".
pub const BUILD_TIMESTAMP: &str = match option_env!("VERGEN_BUILD_TIMESTAMP") {
    Some(ts) => ts,
    None => UNKNOWN,
};

/// First seven characters of [`GIT_SHA`].
pub fn short_sha() -> &'static str {
    &GIT_SHA[..7.min(GIT_SHA.len())]
}

/// `{version}` for release builds without git metadata, otherwise
/// `{version}+{sha}` with a `.dirty` suffix for modified trees.
pub fn version_string() -> String {
    if GIT_SHA == UNKNOWN {
        return PKG_VERSION.to_string();
    }
    let dirty = option_env!("VERGEN_GIT_DIRTY") == Some("true");
    format!(
        "{PKG_VERSION}+{}{}",
        short_sha(),
        if dirty { ".dirty" } else { "" }
    )
}
