use curio_core::{Item, SalesStatus};

/// One line per item; purchasable items are marked `[buy]`.
pub fn render_catalog(items: &[Item], sales_open: bool) -> String {
    if items.is_empty() {
        return "(no items)\n".to_string();
    }

    let mut out = String::new();
    for item in items {
        out.push_str(&render_item(item, sales_open));
        out.push('\n');
    }
    out
}

pub fn render_item(item: &Item, sales_open: bool) -> String {
    let marker = if item.can_purchase(sales_open) {
        "  [buy]"
    } else {
        ""
    };
    format!(
        "{:>4}  {:<30} {:>10.2}  {:<8}{}",
        item.id.as_str(),
        item.name,
        item.price,
        item.status.as_str(),
        marker
    )
}

pub fn render_status(status: &SalesStatus, window: &str) -> String {
    if status.is_open {
        format!("Shop is OPEN ({window})")
    } else {
        format!(
            "Shop is CLOSED ({window}); opens in {} at {}",
            status.countdown,
            status.next_open.format("%a %Y-%m-%d %H:%M")
        )
    }
}
