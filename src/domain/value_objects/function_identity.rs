//! Function Identity Value Object
//!
//! The raw `functionName` setting is either a plain name or a table keyed by
//! execution mode:
//!
//! ```toml
//! functionName = "orders"
//!
//! # or
//! [functionName]
//! production = "orders-prod"
//! develop = "orders-dev"
//! ```

use serde::{Deserialize, Serialize};

use super::ExecutionMode;

/// Raw shape of the `functionName` setting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FunctionIdentitySpec {
    /// Same name in every mode
    Fixed(String),
    /// One name per execution mode
    PerMode {
        #[serde(default)]
        production: Option<String>,
        #[serde(default)]
        develop: Option<String>,
    },
}

impl FunctionIdentitySpec {
    /// Pick the name for `mode`.
    ///
    /// A per-mode table without an entry for `mode` yields an empty string;
    /// the upload task rejects it.
    pub fn resolve(&self, mode: ExecutionMode) -> String {
        match (self, mode) {
            (Self::Fixed(name), _) => name.clone(),
            (Self::PerMode { production, .. }, ExecutionMode::Production) => {
                production.clone().unwrap_or_default()
            }
            (Self::PerMode { develop, .. }, ExecutionMode::Develop) => {
                develop.clone().unwrap_or_default()
            }
        }
    }
}
