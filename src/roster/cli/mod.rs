//! # CLI Layer
//!
//! This module is **one possible UI client** for roster, not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Handles argument parsing
//! - Formats output for human consumption
//! - Decides exit codes (through `main.rs`)
//!
//! ## Structure
//!
//! - `setup.rs`: clap argument definitions
//! - `commands.rs`: context setup and per-command handlers
//! - `shell.rs`: the interactive input loop
//! - `render.rs` + `templates/`: term, json and html output
//! - `styles.rs`: the semantic style theme
//! - `logging.rs`: tracing subscriber setup

mod commands;
mod logging;
mod render;
mod setup;
mod shell;
mod styles;
mod templates;

pub use commands::run;
