//! Test environment builder for isolated lambda-tasks testing.
//!
//! Provides `TestEnv` - a temp directory holding one target (`orders/`),
//! plus helpers to run the CLI against it with the external toolchain
//! replaced by harmless programs.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Name of the target directory inside the temp root
pub const TARGET_NAME: &str = "orders";

/// A minimal handler module
pub const ENTRY_MODULE: &str =
    "export const handler = async () => ({ statusCode: 200, body: 'ok' });\n";

/// Result of running a lambda-tasks CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment.
///
/// Every tool variable (`LAMBDA_TASKS_NPX`, `_NPM`, `_ZIP`, `_AWS`) points at
/// `true` unless replaced with `with_tool_script`, so no test reaches the
/// network.
pub struct TestEnv {
    /// Temporary root holding the target and any fake tools
    pub root: TempDir,
    target: PathBuf,
    tools: Vec<(String, String)>,
    bin: PathBuf,
}

impl TestEnv {
    /// Create a new TestEnvBuilder
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// The target directory
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Get path relative to the target directory
    pub fn target_path(&self, relative: &str) -> PathBuf {
        self.target.join(relative)
    }

    /// Get path relative to the temp root
    pub fn root_path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Run the CLI with the target directory as working directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from_with_env(&self.target, args, &[])
    }

    /// Run the CLI from the target directory with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(&self.target, args, env_vars)
    }

    /// Run the CLI from a specific directory
    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        self.run_from_with_env(cwd, args, &[])
    }

    /// Run the CLI from a specific directory with extra env vars.
    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");

        for (key, value) in &self.tools {
            cmd.env(key, value);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute lambda-tasks");

        Self::output_to_result(output)
    }

    /// Convert Command output to TestResult
    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Write a file into the target directory
    pub fn write_target_file(&self, relative_path: &str, content: &str) {
        let full_path = self.target_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Read a file from the target directory
    pub fn read_target_file(&self, relative_path: &str) -> String {
        std::fs::read_to_string(self.target_path(relative_path))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative_path, e))
    }
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    entry_module: bool,
    manifest: Option<String>,
    config: Option<(String, String)>,
    scripts: Vec<(String, String)>,
}

impl TestEnvBuilder {
    /// Create a new builder: a target with an entry module and nothing else
    pub fn new() -> Self {
        Self {
            entry_module: true,
            manifest: None,
            config: None,
            scripts: Vec::new(),
        }
    }

    /// Do not create `index.ts`
    pub fn without_entry_module(mut self) -> Self {
        self.entry_module = false;
        self
    }

    /// Write `package.json`
    pub fn with_manifest(mut self, json: &str) -> Self {
        self.manifest = Some(json.to_string());
        self
    }

    /// Write `lambda-config.toml`
    pub fn with_config(mut self, toml: &str) -> Self {
        self.config = Some(("lambda-config.toml".to_string(), toml.to_string()));
        self
    }

    /// Write `lambda-config.json`
    pub fn with_json_config(mut self, json: &str) -> Self {
        self.config = Some(("lambda-config.json".to_string(), json.to_string()));
        self
    }

    /// Replace a tool (`npx`, `npm`, `zip` or `aws`) with a shell script
    pub fn with_tool_script(mut self, tool: &str, script: &str) -> Self {
        self.scripts.push((tool.to_string(), script.to_string()));
        self
    }

    /// Build the TestEnv
    pub fn build(self) -> TestEnv {
        let root = TempDir::new().expect("Failed to create temp dir");
        let target = root.path().join(TARGET_NAME);
        std::fs::create_dir_all(&target).expect("Failed to create target dir");

        if self.entry_module {
            std::fs::write(target.join("index.ts"), ENTRY_MODULE)
                .expect("Failed to write index.ts");
        }
        if let Some(manifest) = &self.manifest {
            std::fs::write(target.join("package.json"), manifest)
                .expect("Failed to write package.json");
        }
        if let Some((name, content)) = &self.config {
            std::fs::write(target.join(name), content).expect("Failed to write config");
        }

        let mut tools: Vec<(String, String)> = ["NPX", "NPM", "ZIP", "AWS"]
            .iter()
            .map(|t| (format!("LAMBDA_TASKS_{}", t), "true".to_string()))
            .collect();

        let bin_dir = root.path().join("bin");
        for (tool, script) in &self.scripts {
            std::fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");
            let path = bin_dir.join(tool);
            std::fs::write(&path, script).expect("Failed to write tool script");
            make_executable(&path);

            let key = format!("LAMBDA_TASKS_{}", tool.to_uppercase());
            if let Some(entry) = tools.iter_mut().find(|(k, _)| *k == key) {
                entry.1 = path.display().to_string();
            }
        }

        TestEnv {
            root,
            target,
            tools,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_lambda-tasks")),
        }
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = std::fs::metadata(path)
        .expect("Failed to stat tool script")
        .permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms).expect("Failed to chmod tool script");
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}
