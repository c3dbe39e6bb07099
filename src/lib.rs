//! Lexi - extract hard-coded strings from Rails sources into I18n YAML files
//!
//! Lexi replaces a selected string in a Ruby (`.rb`) or ERB (`.erb`) file with
//! an `I18n.t` call and stores the string in the base-locale YAML file next to
//! the source's application root. Interpolated expressions become named
//! `%{placeholders}`, and a string that already has a key reuses it.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: `.lexirc.json` loading and validation
//! - `core`: Extraction engine and locale index
//! - `mcp`: Model Context Protocol server implementation
//! - `workspace`: A project root with its config and loaded locale data

pub mod cli;
pub mod config;
pub mod core;
pub mod mcp;
pub mod workspace;
