//! Treetab CLI library.
//!
//! Exposed as a library so the command implementations can be exercised by
//! integration tests without spawning the binary.

pub mod cli;
pub mod commands;
pub mod logging;
