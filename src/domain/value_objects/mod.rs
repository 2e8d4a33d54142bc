//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod artifact_digest;
mod execution_mode;
mod function_identity;
mod operation;
mod target_layout;

pub use artifact_digest::ArtifactDigest;
pub use execution_mode::ExecutionMode;
pub use function_identity::FunctionIdentitySpec;
pub use operation::Operation;
pub use target_layout::{
    TargetLayout, CONFIG_FILES, DIST_DIR, ENTRY_MODULE, LOCAL_SERVER_FILE, MANIFEST_FILE,
};
