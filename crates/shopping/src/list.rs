use ulid::Ulid;

use crate::categorization::categorize;
use crate::types::{CATEGORY_ORDER, Category, ShoppingItem};

/// Append a hand-written entry. Blank text is ignored.
///
/// Custom entries carry no amount and never go through the normalizer, so
/// "2 packs of bin bags" is listed as typed.
pub fn add_custom_item<'a>(
    items: &'a mut Vec<ShoppingItem>,
    text: &str,
) -> Option<&'a ShoppingItem> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    items.push(ShoppingItem {
        id: Ulid::new().to_string(),
        name: text.to_owned(),
        base_item: text.to_owned(),
        amount: None,
        unit: None,
        category: categorize(text),
        checked: false,
    });

    items.last()
}

pub fn toggle_item(items: &mut [ShoppingItem], id: &str) -> bool {
    let Some(item) = items.iter_mut().find(|item| item.id == id) else {
        return false;
    };

    item.checked = !item.checked;

    true
}

pub fn remove_item(items: &mut Vec<ShoppingItem>, id: &str) -> bool {
    let len = items.len();
    items.retain(|item| item.id != id);

    items.len() != len
}

/// Drop every checked entry, returning how many were removed.
pub fn clear_checked(items: &mut Vec<ShoppingItem>) -> usize {
    let len = items.len();
    items.retain(|item| !item.checked);

    len - items.len()
}

pub fn uncheck_all(items: &mut [ShoppingItem]) {
    for item in items.iter_mut() {
        item.checked = false;
    }
}

/// Group entries for display, in [`CATEGORY_ORDER`]. Empty categories are omitted.
pub fn group_by_category(items: &[ShoppingItem]) -> Vec<(Category, Vec<&ShoppingItem>)> {
    CATEGORY_ORDER
        .iter()
        .filter_map(|&category| {
            let group: Vec<_> = items
                .iter()
                .filter(|item| item.category == category)
                .collect();

            (!group.is_empty()).then_some((category, group))
        })
        .collect()
}
