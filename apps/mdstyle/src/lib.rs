//! mdstyle core library.
//!
//! This crate exposes programmatic APIs for validating markdown documentation
//! against a small house style (list spacing and nested bullet indentation)
//! and for fixing violations in place.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `checks`: Line-pattern checks and in-place fixes.
//! - `lint`: File and directory traversal producing a `LintResult`.
//! - `models`: Issue, per-file report, and summary structs.
//! - `output`: Human/JSON printers.
//! - `utils`: Console prefixes and path display helpers.
pub mod checks;
pub mod cli;
pub mod config;
pub mod lint;
pub mod models;
pub mod output;
pub mod utils;
