//! Sample catalog written to an empty backing medium on first access.

use crate::ids::ItemId;

use super::item::{Item, ItemStatus};

const PLACEHOLDER: &str = "https://placehold.co/400x300";

fn placeholder(palette: &str, text: &str) -> String {
    format!("{PLACEHOLDER}/{palette}?text={text}")
}

fn sample(
    id: &str,
    name: &str,
    description: &str,
    price: f64,
    palette: &str,
    cover: &str,
    views: &[&str],
) -> Item {
    Item {
        id: ItemId::from(id),
        name: name.to_string(),
        description: description.to_string(),
        price,
        image_url: placeholder(palette, cover),
        gallery_urls: views.iter().map(|view| placeholder(palette, view)).collect(),
        status: ItemStatus::Inactive,
    }
}

/// The four seeded items, ids "1" through "4", all inactive.
pub fn sample_items() -> Vec<Item> {
    vec![
        sample(
            "1",
            "Antique Ceramic Vase",
            "A hand-made ceramic vase with unique patterns, perfect for any collection. One of a kind.",
            120.0,
            "F2F2F2/7F7F7F",
            "Antique+Vase",
            &["Vase+View+1", "Vase+View+2", "Vase+View+3"],
        ),
        sample(
            "2",
            "Abstract Bronze Sculpture",
            "Modern bronze sculpture for contemporary spaces. Limited edition of 1.",
            350.0,
            "D9D9D9/4D4D4D",
            "Bronze+Sculpture",
            &["Sculpture+View+1", "Sculpture+View+2"],
        ),
        sample(
            "3",
            "Vintage Pocket Watch",
            "Elegant early 20th century pocket watch in working order. A collector's gem.",
            200.0,
            "BFBFBF/2A2A2A",
            "Vintage+Watch",
            &["Watch+View+1", "Watch+View+2", "Watch+View+3"],
        ),
        sample(
            "4",
            "Japanese Tea Cup Set",
            "Exclusive hand-painted Japanese ceramic tea set. Only one set available.",
            85.0,
            "E6E6E6/6B6B6B",
            "Japanese+Tea+Set",
            &["Tea+Set+View+1", "Tea+Set+View+2"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_four_inactive_items_with_sequential_ids() {
        let items = sample_items();

        let ids: Vec<&str> = items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
        assert!(items.iter().all(|item| item.status == ItemStatus::Inactive));
    }

    #[test]
    fn seed_items_pass_creation_rules() {
        for item in sample_items() {
            assert!(!item.name.is_empty());
            assert!(!item.description.is_empty());
            assert!(item.price >= 0.0);
            assert!(item.image_url.starts_with(PLACEHOLDER));
            assert!(!item.gallery_urls.is_empty());
        }
    }
}
