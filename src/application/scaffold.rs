//! Scaffolding for a new target
//!
//! Writes a fixed template tree into the target directory. Files that
//! already exist are kept.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{ENTRY_MODULE, LOCAL_SERVER_FILE, MANIFEST_FILE};
use crate::error::LambdaResult;

/// `(file name, contents)` of every template
pub const TEMPLATES: [(&str, &str); 5] = [
    (ENTRY_MODULE, include_str!("../../templates/index.ts")),
    (LOCAL_SERVER_FILE, include_str!("../../templates/local-server.ts")),
    (MANIFEST_FILE, include_str!("../../templates/package.json")),
    ("tsconfig.json", include_str!("../../templates/tsconfig.json")),
    ("lambda-config.toml", include_str!("../../templates/lambda-config.toml")),
];

/// What `scaffold` did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub created: Vec<PathBuf>,
    pub kept: Vec<PathBuf>,
}

impl ScaffoldReport {
    /// One line per file, created files first
    pub fn messages(&self) -> Vec<String> {
        let created = self
            .created
            .iter()
            .map(|path| format!("created {}", path.display()));
        let kept = self
            .kept
            .iter()
            .map(|path| format!("kept existing {}", path.display()));
        created.chain(kept).collect()
    }
}

pub struct Scaffolder {
    root: PathBuf,
}

impl Scaffolder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Write the templates, creating the target directory if needed
    pub fn scaffold(&self) -> LambdaResult<ScaffoldReport> {
        std::fs::create_dir_all(&self.root)?;

        let mut report = ScaffoldReport::default();
        for (name, content) in TEMPLATES {
            let path = self.root.join(name);
            if path.exists() {
                report.kept.push(path);
                continue;
            }
            write_atomic(&path, content)?;
            report.created.push(path);
        }
        Ok(report)
    }
}

/// Write via a temp file in the same directory, then rename into place
fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn scaffold_writes_every_template() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("orders");

        let report = Scaffolder::new(&root).scaffold().unwrap();

        assert_eq!(report.created.len(), TEMPLATES.len());
        assert!(report.kept.is_empty());
        assert!(root.join("index.ts").is_file());
        assert!(root.join("lambda-config.toml").is_file());
    }

    #[test]
    fn scaffold_keeps_existing_files() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("index.ts"), "export const handler = 1;").unwrap();

        let report = Scaffolder::new(dir.path()).scaffold().unwrap();

        assert_eq!(report.kept, vec![dir.path().join("index.ts")]);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("index.ts")).unwrap(),
            "export const handler = 1;"
        );
    }

    #[test]
    fn report_messages_list_created_before_kept() {
        let report = ScaffoldReport {
            created: vec![PathBuf::from("orders/tsconfig.json")],
            kept: vec![PathBuf::from("orders/index.ts")],
        };

        assert_eq!(
            report.messages(),
            vec!["created orders/tsconfig.json", "kept existing orders/index.ts"]
        );
    }

    #[test]
    fn scaffolded_config_resolves_to_defaults() {
        use crate::config::{TargetConfig, DEFAULT_REGION};
        use crate::domain::value_objects::{ExecutionMode, TargetLayout};

        let dir = tempdir().unwrap();
        let root = dir.path().join("payments");
        Scaffolder::new(&root).scaffold().unwrap();

        let config = TargetConfig::resolve(&TargetLayout::new(&root), ExecutionMode::Develop);
        assert_eq!(config.function_identity, "payments");
        assert_eq!(config.region, DEFAULT_REGION);
    }
}
