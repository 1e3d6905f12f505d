use ulid::Ulid;

use crate::format::{format_item_name, should_hide_amount};
use crate::normalize::normalize_ingredient;
use crate::types::{NormalizedIngredient, RawIngredient, ShoppingItem};

/// What happened to the lines of one aggregation batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregationReport {
    /// Lines that became a new entry.
    pub added: usize,
    /// Lines absorbed by an existing unchecked entry.
    pub merged: usize,
    /// Lines filtered out by the normalizer.
    pub discarded: usize,
}

impl AggregationReport {
    /// Nothing new was added, but at least one line was already on the list.
    pub fn is_all_present(&self) -> bool {
        self.added == 0 && self.merged > 0
    }
}

impl ShoppingItem {
    /// Fresh unchecked entry with a new id.
    pub fn new(ingredient: NormalizedIngredient) -> Self {
        let name = format_item_name(
            &ingredient.base_item,
            ingredient.amount,
            ingredient.unit.as_deref(),
            ingredient.category,
        );

        Self {
            id: Ulid::new().to_string(),
            name,
            base_item: ingredient.base_item,
            amount: ingredient.amount,
            unit: ingredient.unit,
            category: ingredient.category,
            checked: false,
        }
    }

    pub fn hides_amount(&self) -> bool {
        should_hide_amount(
            &self.base_item,
            self.amount,
            self.unit.as_deref(),
            self.category,
        )
    }

    /// Re-render `name` from the other fields.
    pub fn refresh_name(&mut self) {
        self.name = format_item_name(
            &self.base_item,
            self.amount,
            self.unit.as_deref(),
            self.category,
        );
    }

    fn accepts(&self, ingredient: &NormalizedIngredient) -> bool {
        !self.checked
            && self.unit == ingredient.unit
            && items_are_equal(&self.base_item, &ingredient.base_item)
    }
}

/// Merge recipe lines into a shopping list.
///
/// Existing entries keep their order, new entries are appended in input order.
/// Lines merge into the first unchecked entry with an equivalent name and the
/// same unit; checked entries never absorb new quantity.
pub fn aggregate_ingredients(
    current: Vec<ShoppingItem>,
    ingredients: &[RawIngredient],
) -> Vec<ShoppingItem> {
    aggregate_ingredients_with_report(current, ingredients).0
}

pub fn aggregate_ingredients_with_report(
    current: Vec<ShoppingItem>,
    ingredients: &[RawIngredient],
) -> (Vec<ShoppingItem>, AggregationReport) {
    let mut items = current;
    let mut report = AggregationReport::default();

    for raw in ingredients {
        let Some(ingredient) = normalize_ingredient(&raw.amount, &raw.item) else {
            report.discarded += 1;
            continue;
        };

        let Some(existing) = items.iter_mut().find(|item| item.accepts(&ingredient)) else {
            tracing::debug!(
                base_item = ingredient.base_item,
                unit = ingredient.unit,
                "new shopping item"
            );
            items.push(ShoppingItem::new(ingredient));
            report.added += 1;
            continue;
        };

        report.merged += 1;

        if existing.hides_amount() {
            tracing::trace!(base_item = existing.base_item, "staple already listed");
            continue;
        }

        let amount = existing.amount.unwrap_or(1.0) + ingredient.amount.unwrap_or(1.0);
        existing.amount = Some(amount);
        existing.refresh_name();

        tracing::debug!(
            id = existing.id,
            base_item = existing.base_item,
            amount,
            "merged into shopping item"
        );
    }

    (items, report)
}

/// Compare two item names, treating naive singular and plural forms as equal.
///
/// Besides exact (case-insensitive) matches, the singular forms are compared, and
/// a name whose singular is a prefix of the other's also matches ("Chicken Breast"
/// and "Chicken Breasts").
pub fn items_are_equal(a: &str, b: &str) -> bool {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();

    if a == b {
        return true;
    }

    let a = singular(&a);
    let b = singular(&b);

    a == b || a.starts_with(b.as_str()) || b.starts_with(a.as_str())
}

fn singular(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies") {
        return format!("{stem}y");
    }

    if word.ends_with("oes") || word.ends_with("hes") || word.ends_with("ses") {
        return word[..word.len() - 2].to_owned();
    }

    if word.ends_with('s') && !word.ends_with("ss") {
        return word[..word.len() - 1].to_owned();
    }

    word.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singular() {
        assert_eq!(singular("berries"), "berry");
        assert_eq!(singular("tomatoes"), "tomato");
        assert_eq!(singular("peaches"), "peach");
        assert_eq!(singular("glasses"), "glass");
        assert_eq!(singular("carrots"), "carrot");
        assert_eq!(singular("asparagus"), "asparagu");
        assert_eq!(singular("cress"), "cress");
        assert_eq!(singular("rice"), "rice");
    }

    #[test]
    fn test_items_are_equal() {
        assert!(items_are_equal("Tomato", "Tomatoes"));
        assert!(items_are_equal("Raspberry", "raspberries"));
        assert!(items_are_equal(" Onion ", "onions"));
        assert!(items_are_equal("Chicken Breast", "Chicken Breasts"));
        assert!(items_are_equal("Peach", "Peaches"));
        assert!(!items_are_equal("Butter", "Milk"));
        assert!(!items_are_equal("Red Onion", "Onion"));
    }

    #[test]
    fn test_prefix_containment_is_loose() {
        // prefix matching is part of the heuristic, even when it over-matches
        assert!(items_are_equal("Egg", "Eggplant"));
        assert!(items_are_equal("Chicken", "Chicken Thighs"));
    }

    #[test]
    fn test_report_counts() {
        let (items, report) = aggregate_ingredients_with_report(
            vec![],
            &[
                RawIngredient::new("2", "Lemons"),
                RawIngredient::new("500ml", "Water"),
                RawIngredient::new("1", "Lemon"),
                RawIngredient::new("1 tsp", "Salt"),
            ],
        );

        assert_eq!(items.len(), 2);
        assert_eq!(
            report,
            AggregationReport {
                added: 2,
                merged: 1,
                discarded: 1
            }
        );
        assert!(!report.is_all_present());
    }

    #[test]
    fn test_discarded_only_batch_is_not_all_present() {
        let (items, report) =
            aggregate_ingredients_with_report(vec![], &[RawIngredient::new("1 cup", "Water")]);

        assert!(items.is_empty());
        assert_eq!(report.discarded, 1);
        assert!(!report.is_all_present());

        let (items, report) = aggregate_ingredients_with_report(items, &[]);
        assert!(items.is_empty());
        assert!(!report.is_all_present());
    }
}
