//! Normalizer options and output.

use serde::{Deserialize, Serialize};

use crate::providers::Provider;
use crate::types::ConnectionRecord;

/// Options for [`normalize`](crate::normalize()).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeOptions {
    /// Record every rewrite in [`NormalizeResult::changes`].
    #[serde(default)]
    pub verbose: bool,
}

impl NormalizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the change log.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// One rewrite performed by the normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeChange {
    pub from: String,
    /// Destination key, or `None` when the param was dropped.
    pub to: Option<String>,
    pub value: String,
    pub reason: String,
}

/// Output of [`normalize`](crate::normalize()).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizeResult {
    /// The input record with rewritten params.
    pub config: ConnectionRecord,
    pub provider: Option<Provider>,
    /// Provider resolved from a gateway model prefix.
    pub sub_provider: Option<Provider>,
    /// Empty unless [`NormalizeOptions::verbose`] was set.
    pub changes: Vec<NormalizeChange>,
}
