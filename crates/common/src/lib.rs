//! Common utilities and constants used across the abiscan crates.
//!
//! This crate provides the chain ID constants of the networks abiscan knows an
//! explorer for, hex quantity parsing for JSON-RPC responses, and small file and
//! environment helpers shared by the configuration crate.

/// Constants used throughout the abiscan codebase.
pub mod constants;

/// Error types for the common utilities.
pub mod error;

/// General utility functions and types for common tasks.
pub mod utils;
