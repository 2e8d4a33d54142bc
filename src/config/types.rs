//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ExecutionMode, FunctionIdentitySpec, TargetLayout};

use super::loader;

/// Region used when the config file names none
pub const DEFAULT_REGION: &str = "us-west-2";

/// Port the local runner listens on when the config file names none
pub const DEFAULT_LOCAL_PORT: u16 = 3000;

/// Handler used when a missing function has to be created
pub const DEFAULT_HANDLER: &str = "index.handler";

/// Runtime used when a missing function has to be created
pub const DEFAULT_RUNTIME: &str = "nodejs18.x";

/// Contents of `lambda-config.toml` / `lambda-config.json`, as written
///
/// Every key is optional. Keys are camelCase:
///
/// ```toml
/// region = "eu-west-1"
/// accessKeyId = "AKIA..."
/// secretAccessKey = "..."
/// role = "arn:aws:iam::123456789012:role/lambda"
///
/// [functionName]
/// production = "orders-prod"
/// develop = "orders-dev"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConfig {
    #[serde(default)]
    pub function_name: Option<FunctionIdentitySpec>,

    #[serde(default)]
    pub region: Option<String>,

    #[serde(default)]
    pub access_key_id: Option<String>,

    #[serde(default)]
    pub secret_access_key: Option<String>,

    #[serde(default)]
    pub session_token: Option<String>,

    #[serde(default)]
    pub role: Option<String>,

    #[serde(default)]
    pub handler: Option<String>,

    #[serde(default)]
    pub runtime: Option<String>,

    #[serde(default)]
    pub timeout: Option<u32>,

    #[serde(default)]
    pub memory_size: Option<u32>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub publish: Option<bool>,

    #[serde(default)]
    pub local_port: Option<u16>,
}

/// AWS credentials taken verbatim from the config file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: String,
}

impl Credentials {
    /// `true` when no field was configured
    pub fn is_empty(&self) -> bool {
        self.access_key_id.is_empty()
            && self.secret_access_key.is_empty()
            && self.session_token.is_empty()
    }
}

/// Function settings applied on upload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploySettings {
    pub role: Option<String>,
    pub handler: Option<String>,
    pub runtime: Option<String>,
    pub timeout: Option<u32>,
    pub memory_size: Option<u32>,
    pub description: Option<String>,
    pub publish: bool,
}

impl DeploySettings {
    /// `true` when any setting besides `publish` must be pushed to the function configuration
    pub fn has_configuration_changes(&self) -> bool {
        self.role.is_some()
            || self.handler.is_some()
            || self.runtime.is_some()
            || self.timeout.is_some()
            || self.memory_size.is_some()
            || self.description.is_some()
    }
}

/// Resolved configuration for one deployable target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetConfig {
    /// Remote function name; always a plain string after resolution
    pub function_identity: String,
    pub region: String,
    pub credentials: Credentials,
    pub deploy: DeploySettings,
    pub local_port: u16,
    /// Mode the identity was resolved for
    pub mode: ExecutionMode,
}

impl TargetConfig {
    /// Apply defaults to a raw config.
    ///
    /// `target_name` is the fallback function name. An empty `functionName`
    /// or `region` counts as unset; an empty per-mode entry does not.
    pub fn from_raw(raw: RawConfig, target_name: &str, mode: ExecutionMode) -> Self {
        let function_identity = match raw.function_name {
            Some(FunctionIdentitySpec::Fixed(name)) if name.is_empty() => target_name.to_string(),
            Some(spec) => spec.resolve(mode),
            None => target_name.to_string(),
        };

        Self {
            function_identity,
            region: raw
                .region
                .filter(|region| !region.is_empty())
                .unwrap_or_else(|| DEFAULT_REGION.to_string()),
            credentials: Credentials {
                access_key_id: raw.access_key_id.unwrap_or_default(),
                secret_access_key: raw.secret_access_key.unwrap_or_default(),
                session_token: raw.session_token.unwrap_or_default(),
            },
            deploy: DeploySettings {
                role: raw.role,
                handler: raw.handler,
                runtime: raw.runtime,
                timeout: raw.timeout,
                memory_size: raw.memory_size,
                description: raw.description,
                publish: raw.publish.unwrap_or(false),
            },
            local_port: raw.local_port.unwrap_or(DEFAULT_LOCAL_PORT),
            mode,
        }
    }

    /// Load and resolve the config beside the target's entry module.
    ///
    /// Never fails: a missing or malformed file resolves like an empty one.
    pub fn resolve(layout: &TargetLayout, mode: ExecutionMode) -> Self {
        loader::resolve_target_config(layout, mode)
    }
}

/// External programs the adapters spawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainConfig {
    pub npx: String,
    pub npm: String,
    pub zip: String,
    pub aws: String,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            npx: "npx".to_string(),
            npm: "npm".to_string(),
            zip: "zip".to_string(),
            aws: "aws".to_string(),
        }
    }
}

impl ToolchainConfig {
    /// Defaults with `LAMBDA_TASKS_*` overrides applied
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply environment variable overrides (LAMBDA_TASKS_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::toolchain_with_env_overrides(self, |key| std::env::var(key).ok())
    }
}
