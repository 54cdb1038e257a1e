use thiserror::Error;

use crate::ids::ItemId;

/// Failures reported by catalog operations.
///
/// Every variant carries a message suitable for showing to the user as-is.
/// None of them is retried; the catalog is left unchanged.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Purchase of an item that is missing, inactive or already sold.
    #[error("item {item_id} is not available or already sold")]
    NotAvailable { item_id: ItemId },

    /// Status change requested for an id the catalog does not know.
    #[error("item {item_id} not found")]
    NotFound { item_id: ItemId },

    /// Status change requested for a sold item.
    #[error("item {item_id} is already sold")]
    AlreadySold { item_id: ItemId },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The backing medium failed to load or persist the catalog.
    #[error("storage error: {0:#}")]
    Storage(#[from] anyhow::Error),
}

/// Missing or malformed fields on item creation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid price {0:?}: expected a non-negative number")]
    InvalidPrice(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_user_facing() {
        let err = CatalogError::NotAvailable {
            item_id: ItemId::from("3"),
        };
        assert_eq!(err.to_string(), "item 3 is not available or already sold");

        let err = CatalogError::from(ValidationError::MissingField("name"));
        assert_eq!(err.to_string(), "missing required field: name");
    }

    #[test]
    fn storage_errors_keep_context_chain() {
        let source = anyhow::anyhow!("disk full").context("write catalog failed");
        let err = CatalogError::from(source);
        assert_eq!(err.to_string(), "storage error: write catalog failed: disk full");
    }
}
