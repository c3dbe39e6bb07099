//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes extraction and key lookups to AI coding agents over stdio.
//!
//! ## Module Structure
//!
//! - `server`: tool definitions and the stdio entry point
//! - `types`: tool parameters and results

mod server;
pub mod types;

pub use server::{LexiMcpServer, run_server};
