//! CLI integration tests for tagdown.
//!
//! These tests execute the compiled binary and verify CLI behavior including:
//! - Subcommand behavior (render, scan)
//! - Stdin/stdout handling
//! - Exit codes
//! - File I/O and config discovery

mod common;
mod render;
mod scan;
