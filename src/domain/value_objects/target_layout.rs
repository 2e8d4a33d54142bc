//! Target Layout Value Object
//!
//! Every path the lifecycle reads or writes, derived from the target
//! directory alone.

use std::path::{Path, PathBuf};

/// File name of the compilation root inside a target
pub const ENTRY_MODULE: &str = "index.ts";

/// Config file names, in lookup order
pub const CONFIG_FILES: [&str; 2] = ["lambda-config.toml", "lambda-config.json"];

/// Dependency manifest copied into the bundle
pub const MANIFEST_FILE: &str = "package.json";

/// Local invocation harness written by `init`
pub const LOCAL_SERVER_FILE: &str = "local-server.ts";

/// Output directory, relative to the target
pub const DIST_DIR: &str = "dist";

/// Paths for one target directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetLayout {
    root: PathBuf,
    name: String,
}

impl TargetLayout {
    /// Derive the layout for `root`.
    ///
    /// The target name is the last path component. `.` and relative paths
    /// are resolved against the current directory first so that `.` still
    /// yields a real name.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let absolute = if root.is_absolute() {
            root.clone()
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(&root))
                .unwrap_or_else(|_| root.clone())
        };
        let name = normalized_name(&absolute).unwrap_or_else(|| "lambda".to_string());
        Self { root, name }
    }

    /// Target directory as given
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Base name of the target directory
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entry_module(&self) -> PathBuf {
        self.root.join(ENTRY_MODULE)
    }

    /// Config file candidates next to the entry module, in lookup order
    pub fn config_candidates(&self) -> Vec<PathBuf> {
        CONFIG_FILES.iter().map(|f| self.root.join(f)).collect()
    }

    pub fn manifest(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }

    pub fn local_server(&self) -> PathBuf {
        self.root.join(LOCAL_SERVER_FILE)
    }

    /// `<target>/dist`
    pub fn dist_root(&self) -> PathBuf {
        self.root.join(DIST_DIR)
    }

    /// `<target>/dist/<name>`: compiled and installed bundle
    pub fn bundle_dir(&self) -> PathBuf {
        self.dist_root().join(&self.name)
    }

    /// `<name>.zip`
    pub fn artifact_name(&self) -> String {
        format!("{}.zip", self.name)
    }

    /// `<target>/dist/<name>.zip`
    pub fn artifact(&self) -> PathBuf {
        self.dist_root().join(self.artifact_name())
    }
}

/// Last normal component of `path`, ignoring `.` and trailing separators
fn normalized_name(path: &Path) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();
    for component in path.components() {
        match component {
            std::path::Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            std::path::Component::ParentDir => {
                parts.pop();
            }
            _ => {}
        }
    }
    parts.pop()
}
