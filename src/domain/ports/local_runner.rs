//! Local Runner Port
//!
//! Serves a target locally, emulating the remote invocation environment.

use std::path::Path;

use crate::config::TargetConfig;
use crate::error::LambdaResult;

pub trait LocalRunner {
    /// Serve `entry` until the server is stopped externally
    fn serve(&self, entry: &Path, config: &TargetConfig) -> LambdaResult<()>;
}
