use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Catalog item identifier.
///
/// Ids are assigned by the catalog store as decimal strings ("1", "2", ...).
/// Ids read back from storage are accepted as-is, even when not numeric.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl_id!(ItemId);

impl ItemId {
    /// Numeric value of the id, or `None` when the id is not a decimal number.
    pub fn numeric(&self) -> Option<u64> {
        self.0.trim().parse().ok()
    }

    /// Allocate the id following every numeric id in `existing`.
    ///
    /// Returns `"1"` for an empty catalog. Non-numeric ids do not take part.
    pub fn next_after<'a>(existing: impl IntoIterator<Item = &'a ItemId>) -> Self {
        let next = existing
            .into_iter()
            .filter_map(ItemId::numeric)
            .max()
            .map_or(1, |max| max + 1);
        Self(next.to_string())
    }
}
