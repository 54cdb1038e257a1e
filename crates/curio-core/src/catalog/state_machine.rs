//! Item availability state machine.
//!
//! ```text
//! inactive --toggle--> enabled --toggle--> inactive
//! enabled  --purchase--> sold
//! ```
//!
//! Every other combination is rejected and leaves the status untouched.

use super::item::ItemStatus;

/// Operations that move an item between statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemAction {
    Toggle,
    Purchase,
}

impl std::fmt::Display for ItemAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemAction::Toggle => f.write_str("toggle"),
            ItemAction::Purchase => f.write_str("purchase"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot {action} an item that is {from}")]
pub struct TransitionError {
    pub from: ItemStatus,
    pub action: ItemAction,
}

impl ItemStatus {
    /// Pure transition function.
    pub fn apply(self, action: ItemAction) -> Result<ItemStatus, TransitionError> {
        match (self, action) {
            (ItemStatus::Inactive, ItemAction::Toggle) => Ok(ItemStatus::Enabled),
            (ItemStatus::Enabled, ItemAction::Toggle) => Ok(ItemStatus::Inactive),
            (ItemStatus::Enabled, ItemAction::Purchase) => Ok(ItemStatus::Sold),
            (from, action) => Err(TransitionError { from, action }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ItemStatus; 3] = [ItemStatus::Inactive, ItemStatus::Enabled, ItemStatus::Sold];

    #[test]
    fn toggle_flips_between_inactive_and_enabled() {
        assert_eq!(ItemStatus::Inactive.apply(ItemAction::Toggle), Ok(ItemStatus::Enabled));
        assert_eq!(ItemStatus::Enabled.apply(ItemAction::Toggle), Ok(ItemStatus::Inactive));
    }

    #[test]
    fn purchase_requires_enabled() {
        assert_eq!(ItemStatus::Enabled.apply(ItemAction::Purchase), Ok(ItemStatus::Sold));
        assert_eq!(
            ItemStatus::Inactive.apply(ItemAction::Purchase),
            Err(TransitionError {
                from: ItemStatus::Inactive,
                action: ItemAction::Purchase,
            })
        );
    }

    #[test]
    fn nothing_leaves_sold() {
        for action in [ItemAction::Toggle, ItemAction::Purchase] {
            assert!(ItemStatus::Sold.apply(action).is_err());
        }
    }

    #[test]
    fn only_purchase_reaches_sold() {
        for from in ALL {
            if from.apply(ItemAction::Toggle) == Ok(ItemStatus::Sold) {
                panic!("toggle reached sold from {from}");
            }
        }
    }

    #[test]
    fn error_message_names_action_and_status() {
        let err = ItemStatus::Sold.apply(ItemAction::Toggle).unwrap_err();
        assert_eq!(err.to_string(), "cannot toggle an item that is sold");
    }
}
