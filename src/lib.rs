//! Curio library
//!
//! Bootstrap, command handlers and the terminal view behind the `curio` binary.

pub mod bootstrap;
pub mod commands;
pub mod view;

pub use bootstrap::AppRuntime;
