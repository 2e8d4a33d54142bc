//! External Toolchain Adapters
//!
//! Port implementations that shell out to node, npm, zip and the AWS CLI.

mod aws;
pub mod command;
mod esbuild;
mod local_server;
mod npm;
mod zip;

pub use aws::AwsCliPlatform;
pub use esbuild::{EsbuildCompiler, BUNDLE_ENTRY};
pub use local_server::NodeLocalRunner;
pub use npm::NpmInstaller;
pub use zip::ZipArchiver;
