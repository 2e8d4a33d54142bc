//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - A single optional positional names the operation; none behaves like `lambda`
//! - Global flags (--json, --color, --verbose) apply to every operation

use std::path::PathBuf;

use clap::Parser;

use crate::domain::value_objects::{ExecutionMode, Operation};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// lambda-tasks - build, package and deploy one AWS Lambda function
#[derive(Parser, Debug)]
#[command(name = "lambda-tasks")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'lambda-tasks lambda' to list the available tasks.")]
pub struct Cli {
    /// Operation to run
    #[arg(value_enum)]
    pub task: Option<Operation>,

    /// Target directory containing index.ts
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,

    /// Resolve the production function name instead of the develop one
    #[arg(long)]
    pub production: bool,

    /// Output format for CI
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Operation to run; no task means `lambda`
    pub fn operation(&self) -> Operation {
        self.task.unwrap_or(Operation::Lambda)
    }

    pub fn mode(&self) -> ExecutionMode {
        ExecutionMode::from_production_flag(self.production)
    }
}
