//! lambda-tasks CLI - build, package and deploy a single AWS Lambda function
//!
//! Usage: lambda-tasks [OPTIONS] [TASK]
//!
//! Run `lambda-tasks lambda` (or no task at all) for the task list.

mod commands;
mod ui;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lambda_tasks::presentation::Cli;

use crate::ui::context::UiContext;

/// Default log level for a `-v` count; `RUST_LOG` takes precedence
fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ui = UiContext::new(cli.json, cli.color);
    if let Err(err) = commands::dispatch(&cli, &ui) {
        ui::error::print_error(&err, &ui);
        std::process::exit(1);
    }
}
