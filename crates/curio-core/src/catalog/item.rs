use serde::{Deserialize, Serialize};

use crate::ids::ItemId;

/// Availability status of a catalog item.
///
/// 商品的可售状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    /// Hidden from customers. Every new item starts here.
    Inactive,
    /// Purchasable while the shop is open.
    Enabled,
    /// Purchased. Terminal.
    Sold,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Inactive => "inactive",
            ItemStatus::Enabled => "enabled",
            ItemStatus::Sold => "sold",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ItemStatus::Sold)
    }
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A one-of-a-kind catalog entry.
///
/// Field names are serialized in camelCase so the persisted array keeps the
/// `imageUrl` / `galleryUrls` layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    #[serde(default)]
    pub gallery_urls: Vec<String>,
    pub status: ItemStatus,
}

impl Item {
    /// Whether a customer may buy this item right now.
    pub fn can_purchase(&self, sales_open: bool) -> bool {
        sales_open && self.status == ItemStatus::Enabled
    }
}
