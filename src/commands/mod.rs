//! Command handlers behind the CLI.
//!
//! Each handler takes the runtime, runs one use case and returns a
//! user-facing `String` error.

pub mod availability;
pub mod catalog;
pub mod error;
pub mod watch;
