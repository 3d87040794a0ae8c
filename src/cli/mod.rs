//! Command line interface

pub mod commands;
pub mod display;
pub mod merge;

pub use self::commands::{CliArgs, Commands};
