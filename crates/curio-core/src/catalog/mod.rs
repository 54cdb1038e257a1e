//! Catalog domain: items, their availability state machine and creation input.

pub mod error;
pub mod form;
pub mod item;
pub mod seed;
pub mod state_machine;

pub use error::{CatalogError, ValidationError};
pub use form::{ItemForm, NewItem};
pub use item::{Item, ItemStatus};
pub use seed::sample_items;
pub use state_machine::{ItemAction, TransitionError};
