//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::value_objects::{ExecutionMode, TargetLayout};

use super::types::{RawConfig, TargetConfig, ToolchainConfig};

/// Why a config file could not be used.
///
/// Never shown to the user: every variant resolves to an empty config.
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("no config file in {}", dir.display())]
    NotFound { dir: PathBuf },

    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML in {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load the first existing config file for `layout`
pub fn load_raw_config(layout: &TargetLayout) -> Result<RawConfig, ConfigLoadError> {
    let path = layout
        .config_candidates()
        .into_iter()
        .find(|p| p.is_file())
        .ok_or_else(|| ConfigLoadError::NotFound {
            dir: layout.root().to_path_buf(),
        })?;
    load_raw_config_file(&path)
}

/// Load one config file; the format follows the extension (`.json` or TOML)
pub fn load_raw_config_file(path: &Path) -> Result<RawConfig, ConfigLoadError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut unknown_keys: Vec<String> = Vec::new();
    let is_json = path.extension().is_some_and(|ext| ext == "json");

    let raw = if is_json {
        let mut de = serde_json::Deserializer::from_str(&content);
        let raw: RawConfig = serde_ignored::deserialize(&mut de, |p| {
            unknown_keys.push(p.to_string());
        })
        .and_then(|raw| de.end().map(|()| raw))
        .map_err(|source| ConfigLoadError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        raw
    } else {
        let de = toml::de::Deserializer::new(&content);
        serde_ignored::deserialize(de, |p| {
            unknown_keys.push(p.to_string());
        })
        .map_err(|source| ConfigLoadError::Toml {
            path: path.to_path_buf(),
            source,
        })?
    };

    for key in &unknown_keys {
        tracing::debug!(file = %path.display(), key = %key, "ignoring unknown config key");
    }

    Ok(raw)
}

/// Resolve the target config, discarding any load failure.
pub fn resolve_target_config(layout: &TargetLayout, mode: ExecutionMode) -> TargetConfig {
    let raw = load_raw_config(layout).unwrap_or_else(|err| {
        tracing::debug!("using empty config: {}", err);
        RawConfig::default()
    });
    TargetConfig::from_raw(raw, layout.name(), mode)
}

/// Apply tool overrides from `lookup` (the process environment in production)
pub(crate) fn toolchain_with_env_overrides(
    mut config: ToolchainConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> ToolchainConfig {
    let overrides: [(&str, &mut String); 4] = [
        ("LAMBDA_TASKS_NPX", &mut config.npx),
        ("LAMBDA_TASKS_NPM", &mut config.npm),
        ("LAMBDA_TASKS_ZIP", &mut config.zip),
        ("LAMBDA_TASKS_AWS", &mut config.aws),
    ];

    for (key, slot) in overrides {
        if let Some(value) = lookup(key).filter(|v| !v.trim().is_empty()) {
            *slot = value;
        }
    }

    config
}
