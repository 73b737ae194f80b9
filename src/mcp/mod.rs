//! Model Context Protocol (MCP) server implementation.
//!
//! This module provides an MCP server that exposes pinolint functionality
//! to AI assistants. The server implements the MCP specification for tool
//! calling over stdio.
//!
//! ## Module Structure
//!
//! - `server`: Main MCP server implementation
//! - `types`: MCP-specific type definitions

mod server;
pub mod types;

pub use server::{PinolintMcpServer, run_server};
