//! Common test utilities for lambda-tasks CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated target directory plus helpers to run the binary
//! - Assertion macros: `assert_exists!`, `assert_not_exists!`

#![allow(dead_code)]

pub mod assertions;
pub mod env;

pub use assertions::*;
pub use env::*;
