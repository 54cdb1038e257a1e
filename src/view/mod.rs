//! Plain-text rendering of the storefront.

mod render;
mod terminal;

pub use render::{render_catalog, render_item, render_status};
pub use terminal::TerminalView;
