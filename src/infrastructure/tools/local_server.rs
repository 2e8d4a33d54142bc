//! Local HTTP Runner
//!
//! Starts the `local-server.ts` harness written by `init` under `ts-node`.
//! Blocks until the server exits.

use std::path::Path;
use std::process::Command;

use crate::config::TargetConfig;
use crate::domain::ports::LocalRunner;
use crate::domain::value_objects::LOCAL_SERVER_FILE;
use crate::error::{LambdaError, LambdaResult};

use super::command::run_inherited;

pub struct NodeLocalRunner {
    npx: String,
}

impl NodeLocalRunner {
    pub fn new(npx: impl Into<String>) -> Self {
        Self { npx: npx.into() }
    }

    fn command(&self, server: &Path, entry: &Path, config: &TargetConfig) -> Command {
        let mut cmd = Command::new(&self.npx);
        cmd.arg("ts-node")
            .arg(server)
            .env("LAMBDA_ENTRY", entry)
            .env("PORT", config.local_port.to_string())
            .env("AWS_LAMBDA_FUNCTION_NAME", &config.function_identity)
            .env("AWS_REGION", &config.region);
        let credentials = &config.credentials;
        for (key, value) in [
            ("AWS_ACCESS_KEY_ID", &credentials.access_key_id),
            ("AWS_SECRET_ACCESS_KEY", &credentials.secret_access_key),
            ("AWS_SESSION_TOKEN", &credentials.session_token),
        ] {
            if !value.is_empty() {
                cmd.env(key, value);
            }
        }
        cmd
    }
}

impl LocalRunner for NodeLocalRunner {
    fn serve(&self, entry: &Path, config: &TargetConfig) -> LambdaResult<()> {
        let server = entry
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(LOCAL_SERVER_FILE);
        if !server.is_file() {
            return Err(LambdaError::ToolFailed {
                tool: "ts-node".to_string(),
                message: format!("{} not found; run the init task first", server.display()),
            });
        }

        tracing::info!(
            "serving {} on port {}",
            config.function_identity,
            config.local_port
        );
        run_inherited("ts-node", &mut self.command(&server, entry, config))
    }
}
