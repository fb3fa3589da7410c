/// Environment variable utilities.
pub mod env;

/// Hexadecimal decoding utilities.
pub mod hex;

/// Input/output utilities for file manipulation.
pub mod io;
