//! Extraction engine.
//!
//! A selection flows through these modules in order:
//!
//! 1. `processor` picks the grammar for the file type (`classify` decides for ERB)
//! 2. `extract` replaces embedded expressions with `%{slug}` placeholders (`slug`)
//! 3. `locale` looks for an existing key holding the same value
//! 4. `paths` derives a new key and its locale file, `locale` merge-writes it
//! 5. `call` renders the `I18n.t` call that replaces the selection
//!
//! `usage` goes the other way, from `I18n.t` calls back to locale entries.

pub mod call;
pub mod classify;
pub mod document;
mod error;
pub mod extract;
pub mod locale;
pub mod paths;
pub mod processor;
pub mod slug;
pub mod usage;

pub use error::ExtractError;
