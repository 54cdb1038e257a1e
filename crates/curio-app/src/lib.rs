//! Curio application layer
//!
//! Use cases over the core ports: the catalog store, the sales clock and the
//! background tasks that keep a view up to date.

pub mod builder;
pub mod deps;
pub mod usecases;

pub use builder::App;
pub use deps::AppDeps;
