//! Slovar CLI library
//!
//! This library provides the command-line interface for converting text
//! between Serbian Cyrillic, Serbian Latin and Croatian, and for growing the
//! JSON dictionary the Croatian variant draws on.

pub mod commands;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
