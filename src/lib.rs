//! # tureng - English-Turkish Dictionary CLI
//!
//! `tureng` looks up bilingual dictionary entries on tureng.com and prints
//! the extracted translations as an aligned console table.
//!
//! ## Features
//!
//! - **Both directions**: English→Turkish and Turkish→English queries are
//!   detected automatically from the result page
//! - **Typed entries**: every translation carries its grammatical class
//!   (noun, verb, adjective, adverb) when the page provides one
//! - **Filtering**: include flags narrow the output to selected word
//!   types; a display count bounds the total
//! - **Suggestions**: misspelled queries print the site's "did you mean"
//!   alternatives
//!
//! ## Quick Start
//!
//! ```bash
//! # Look up a word
//! tureng brave
//!
//! # Multi-word queries
//! tureng give up
//!
//! # Only verbs, at most 20 entries
//! tureng -v -c 20 brave
//! ```
//!
//! ## Configuration
//!
//! Defaults are read from `~/.config/tureng/config.toml`:
//!
//! ```toml
//! [tureng]
//! count = 20
//! types = ["noun", "verb"]
//! ```
//!
//! CLI flags and the `TURENG_DISPLAY_COUNT` environment variable take
//! precedence over the config file.

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and override resolution.
pub mod config;

/// Extraction and classification of lookup-page markup.
pub mod extract;

/// HTTP fetching of lookup pages.
pub mod fetch;

/// Terminal rendering of lookup results.
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Terminal UI components (spinner, colors).
pub mod ui;
