//! Operation value object - the named lifecycle operations a user can run

use std::fmt;

/// Named operation exposed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Operation {
    /// Remove the output directory
    Clean,
    /// Compile the release bundle
    Build,
    /// Install production dependencies into the bundle
    Npm,
    /// Archive the bundle
    Zip,
    /// Run a development compile pass for diagnostics
    Lint,
    /// Clean, then zip
    Package,
    /// Upload the archive to the platform
    Upload,
    /// Package, then upload
    Deploy,
    /// Show the deployed function's metadata
    Info,
    /// Serve the function locally
    Run,
    /// Scaffold a new target
    Init,
    /// List the available operations
    Lambda,
}

impl Operation {
    pub const ALL: [Operation; 12] = [
        Operation::Clean,
        Operation::Build,
        Operation::Npm,
        Operation::Zip,
        Operation::Lint,
        Operation::Package,
        Operation::Upload,
        Operation::Deploy,
        Operation::Info,
        Operation::Run,
        Operation::Init,
        Operation::Lambda,
    ];

    /// Task name in the graph
    pub fn name(self) -> &'static str {
        match self {
            Self::Clean => "clean",
            Self::Build => "build",
            Self::Npm => "npm",
            Self::Zip => "zip",
            Self::Lint => "lint",
            Self::Package => "package",
            Self::Upload => "upload",
            Self::Deploy => "deploy",
            Self::Info => "info",
            Self::Run => "run",
            Self::Init => "init",
            Self::Lambda => "lambda",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Self::Clean => "remove the dist directory",
            Self::Build => "compile the release bundle",
            Self::Npm => "install production dependencies into the bundle",
            Self::Zip => "build, install and archive the bundle",
            Self::Lint => "type-check the function without packaging",
            Self::Package => "package up your function for deployment",
            Self::Upload => "upload the packaged archive",
            Self::Deploy => "package up, then deploy your lambda function",
            Self::Info => "display info about your deployed lambda function",
            Self::Run => "run your function inside a local HTTP frontend",
            Self::Init => "set up your directory for typescript and easy debugging",
            Self::Lambda => "list the available operations",
        }
    }

    /// The text printed by the `lambda` operation
    pub fn listing(program: &str) -> String {
        let width = Self::ALL.iter().map(|op| op.name().len()).max().unwrap_or(0);
        let mut out = String::from("the following tasks are available:\n");
        for op in Self::ALL {
            out.push_str(&format!(
                "    {} {:<width$} - {}\n",
                program,
                op.name(),
                op.summary(),
                width = width
            ));
        }
        out
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn value_enum_names_match_task_names() {
        for op in Operation::ALL {
            let parsed = Operation::from_str(op.name(), false).unwrap();
            assert_eq!(parsed, op);
        }
    }

    #[test]
    fn listing_mentions_every_operation() {
        let listing = Operation::listing("lambda-tasks");
        for op in Operation::ALL {
            assert!(listing.contains(&format!("lambda-tasks {}", op.name())));
        }
    }
}
