//! AWS CLI Platform Client
//!
//! Drives `aws lambda ...` with JSON output. Credentials from the target
//! config are handed to the child through the standard `AWS_*` variables
//! and only when set, so an empty config falls back to the CLI's own
//! credential chain.

use std::path::Path;
use std::process::Command;

use crate::config::{DeploySettings, TargetConfig, DEFAULT_HANDLER, DEFAULT_RUNTIME};
use crate::domain::ports::{FunctionInfo, PlatformClient, PlatformError};
use crate::error::{LambdaError, LambdaResult};

use super::command::run_captured;

/// Error code the Lambda API returns for an unknown function (HTTP 404)
const NOT_FOUND_CODE: &str = "ResourceNotFoundException";

pub struct AwsCliPlatform {
    aws: String,
}

impl AwsCliPlatform {
    pub fn new(aws: impl Into<String>) -> Self {
        Self { aws: aws.into() }
    }

    /// `aws lambda <subcommand...> --region <region> --output json` with credentials
    fn lambda_command(&self, subcommand: &[&str], config: &TargetConfig) -> Command {
        let mut cmd = Command::new(&self.aws);
        cmd.arg("lambda")
            .args(subcommand)
            .args(["--region", config.region.as_str(), "--output", "json"]);
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

    /// Run a mutating call; any failure aborts the upload.
    fn call(&self, subcommand: &str, args: Vec<String>, config: &TargetConfig) -> LambdaResult<()> {
        let mut cmd = self.lambda_command(&[subcommand], config);
        cmd.args(args);
        let captured = run_captured("aws", &mut cmd)?;
        if !captured.success {
            return Err(classify_failure(&config.function_identity, &captured.stderr).into());
        }
        tracing::info!("aws lambda {} succeeded", subcommand);
        Ok(())
    }
}

/// Map the CLI's stderr to a platform error
fn classify_failure(function: &str, stderr: &str) -> PlatformError {
    if stderr.contains(NOT_FOUND_CODE) {
        PlatformError::NotFound {
            function: function.to_string(),
        }
    } else {
        let detail = stderr.trim();
        PlatformError::Other(if detail.is_empty() {
            "aws exited with a failure status".to_string()
        } else {
            detail.to_string()
        })
    }
}

fn zip_file_arg(artifact: &Path) -> String {
    format!("fileb://{}", artifact.display())
}

fn update_code_args(function: &str, artifact: &Path, publish: bool) -> Vec<String> {
    let mut args = vec![
        "--function-name".to_string(),
        function.to_string(),
        "--zip-file".to_string(),
        zip_file_arg(artifact),
    ];
    if publish {
        args.push("--publish".to_string());
    }
    args
}

/// Only settings present in the config are sent
fn configuration_args(function: &str, settings: &DeploySettings) -> Vec<String> {
    let mut args = vec!["--function-name".to_string(), function.to_string()];
    let mut push = |flag: &str, value: Option<String>| {
        if let Some(value) = value {
            args.push(flag.to_string());
            args.push(value);
        }
    };
    push("--role", settings.role.clone());
    push("--handler", settings.handler.clone());
    push("--runtime", settings.runtime.clone());
    push("--timeout", settings.timeout.map(|t| t.to_string()));
    push("--memory-size", settings.memory_size.map(|m| m.to_string()));
    push("--description", settings.description.clone());
    args
}

fn create_args(function: &str, role: &str, artifact: &Path, settings: &DeploySettings) -> Vec<String> {
    let mut args = vec![
        "--function-name".to_string(),
        function.to_string(),
        "--role".to_string(),
        role.to_string(),
        "--runtime".to_string(),
        settings
            .runtime
            .clone()
            .unwrap_or_else(|| DEFAULT_RUNTIME.to_string()),
        "--handler".to_string(),
        settings
            .handler
            .clone()
            .unwrap_or_else(|| DEFAULT_HANDLER.to_string()),
        "--zip-file".to_string(),
        zip_file_arg(artifact),
    ];
    if let Some(timeout) = settings.timeout {
        args.extend(["--timeout".to_string(), timeout.to_string()]);
    }
    if let Some(memory) = settings.memory_size {
        args.extend(["--memory-size".to_string(), memory.to_string()]);
    }
    if let Some(description) = &settings.description {
        args.extend(["--description".to_string(), description.clone()]);
    }
    if settings.publish {
        args.push("--publish".to_string());
    }
    args
}

impl PlatformClient for AwsCliPlatform {
    fn deploy_artifact(&self, artifact: &Path, config: &TargetConfig) -> LambdaResult<()> {
        let function = &config.function_identity;
        let settings = &config.deploy;

        match self.get_function_info(function, config) {
            Ok(_) => {
                self.call(
                    "update-function-code",
                    update_code_args(function, artifact, settings.publish),
                    config,
                )?;
                if settings.has_configuration_changes() {
                    // the code update must settle before the configuration call is accepted
                    self.wait_until_updated(function, config)?;
                    self.call(
                        "update-function-configuration",
                        configuration_args(function, settings),
                        config,
                    )?;
                }
                Ok(())
            }
            Err(PlatformError::NotFound { .. }) => match &settings.role {
                Some(role) => self.call(
                    "create-function",
                    create_args(function, role, artifact, settings),
                    config,
                ),
                None => Err(LambdaError::ToolFailed {
                    tool: "aws".to_string(),
                    message: format!(
                        "function {} does not exist in {}; set `role` in the lambda config to create it",
                        function, config.region
                    ),
                }),
            },
            Err(other) => Err(other.into()),
        }
    }

    fn get_function_info(
        &self,
        function: &str,
        config: &TargetConfig,
    ) -> Result<FunctionInfo, PlatformError> {
        let mut cmd = self.lambda_command(&["get-function"], config);
        cmd.args(["--function-name", function]);

        let captured = run_captured("aws", &mut cmd).map_err(|e| PlatformError::Other(e.to_string()))?;
        if !captured.success {
            return Err(classify_failure(function, &captured.stderr));
        }

        serde_json::from_str(&captured.stdout)
            .map(FunctionInfo)
            .map_err(|e| PlatformError::Other(format!("unreadable get-function output: {}", e)))
    }
}

impl AwsCliPlatform {
    fn wait_until_updated(&self, function: &str, config: &TargetConfig) -> LambdaResult<()> {
        let mut cmd = self.lambda_command(&["wait", "function-updated"], config);
        cmd.args(["--function-name", function]);
        let captured = run_captured("aws", &mut cmd)?;
        if !captured.success {
            return Err(classify_failure(function, &captured.stderr).into());
        }
        Ok(())
    }
}
