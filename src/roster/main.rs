//! # Roster CLI
//!
//! The CLI lives in `cli/`; this file only invokes `cli::run()` and turns an
//! error into exit status 1.
//!
//! ## Commands
//!
//! - `roster` / `roster list`: load the roster and print it, optionally after
//!   `--sort` and `--search`
//! - `roster shell`: interactive session; each line is a search or sort action
//!   applied to the same view state
//! - `roster config`: show or change the data location and output format
//!
//! ## Output
//!
//! `--output term` (default) renders styled tables through minijinja templates,
//! `--output json` prints the view-model, `--output html` prints a standalone page.
//! A failed load still prints the main table, with a single error row, and
//! exits with status 1.

mod cli;

use colored::Colorize;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}
