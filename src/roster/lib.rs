//! # Roster Architecture
//!
//! Roster is a **UI-agnostic student roster library**: it loads a list of
//! students, answers search and sort requests, and describes the table(s) a UI
//! should draw. The `roster` binary is one client of it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders views, runs the shell          │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Input controller, owns the single ViewState              │
//! │  - Maps actions to queries, picks single vs. split layout   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Query Layer (query.rs) + View Model (view.rs)              │
//! │  - Pure search / sort / filter / partition functions        │
//! │  - Serializable tables and rows for any renderer            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Source Layer (source/)                                     │
//! │  - DataSource trait: file, HTTP, in-memory                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes and returns regular Rust values, never
//! writes to stdout/stderr and never exits the process. The only I/O is the
//! one-time fetch done by a [`source::DataSource`].
//!
//! ## Known Gap: Gender View
//!
//! The gender view has exactly two tables, female and male, matched
//! case-insensitively. Students whose gender is anything else (or missing)
//! appear in neither table. The API reports how many were left out but does
//! not invent a third table.
//!
//! ## Module Overview
//!
//! - [`api`]: The controller facade, entry point for all operations
//! - [`query`]: Search, sort, filter and partition functions
//! - [`view`]: View state, actions and the table view-model
//! - [`source`]: Where the roster is loaded from
//! - [`model`]: The `StudentRecord` type
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod source;
pub mod view;
