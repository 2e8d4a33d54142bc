//! Installer Port
//!
//! Materializes runtime dependencies next to a copied package manifest.

use std::path::Path;

use crate::error::LambdaResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InstallOptions {
    /// Skip development dependencies
    pub production: bool,
}

pub trait Installer {
    /// Install the dependencies declared by the manifest in `manifest_dir`
    fn install(&self, manifest_dir: &Path, options: InstallOptions) -> LambdaResult<()>;
}
