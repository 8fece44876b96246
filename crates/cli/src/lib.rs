//! Tallybank CLI - command parsing and dispatch

pub mod commands;

pub use commands::{execute, parse, Command};
