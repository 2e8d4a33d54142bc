//! Execution Mode Value Object
//!
//! Selects which entry of a per-mode function name is deployed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Execution mode for an orchestration run
///
/// Chosen once on the command line (`--production`) and passed explicitly
/// to configuration resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Day-to-day development deploys (default)
    #[default]
    Develop,
    /// Production deploys
    Production,
}

impl ExecutionMode {
    /// Map the `--production` flag to a mode
    pub fn from_production_flag(production: bool) -> Self {
        if production {
            Self::Production
        } else {
            Self::Develop
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Develop => "develop",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
