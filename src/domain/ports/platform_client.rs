//! Platform Client Port
//!
//! Talks to the remote function platform: uploads artifacts and reads
//! function metadata.

use std::path::Path;

use thiserror::Error;

use crate::config::TargetConfig;
use crate::error::LambdaResult;

/// Failure of a remote query
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// The function does not exist (HTTP 404)
    #[error("function '{function}' was not found")]
    NotFound { function: String },

    /// Anything else: credentials, permissions, network, throttling
    #[error("platform request failed: {0}")]
    Other(String),
}

/// Remote function metadata, passed through as returned by the platform
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionInfo(pub serde_json::Value);

impl FunctionInfo {
    /// Pretty-printed JSON
    pub fn to_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}

pub trait PlatformClient {
    /// Upload `artifact` as the code of `config.function_identity`
    fn deploy_artifact(&self, artifact: &Path, config: &TargetConfig) -> LambdaResult<()>;

    /// Fetch metadata for `function`
    fn get_function_info(
        &self,
        function: &str,
        config: &TargetConfig,
    ) -> Result<FunctionInfo, PlatformError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_names_function() {
        let err = PlatformError::NotFound {
            function: "orders-dev".to_string(),
        };
        assert!(err.to_string().contains("orders-dev"));
    }

    #[test]
    fn function_info_pretty_prints() {
        let info = FunctionInfo(serde_json::json!({"Configuration": {"FunctionName": "orders"}}));
        let pretty = info.to_pretty();
        assert!(pretty.contains("\"FunctionName\": \"orders\""));
        assert!(pretty.contains('\n'));
    }
}
