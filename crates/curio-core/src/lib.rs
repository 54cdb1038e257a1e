//! # curio-core
//!
//! Core domain models and business logic for Curio.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod availability;
pub mod catalog;
pub mod config;
pub mod ids;
pub mod ports;

// Re-export commonly used types at the crate root
pub use availability::{Countdown, NextOpenRule, SalesStatus, SalesWindow};
pub use catalog::{CatalogError, Item, ItemForm, ItemStatus, NewItem, ValidationError};
pub use config::AppConfig;
pub use ids::ItemId;
