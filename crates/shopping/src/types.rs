use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Shopping aisle an item is filed under. Declaration order is display order.
#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
pub enum Category {
    #[strum(serialize = "Fruit & Veg")]
    #[serde(rename = "Fruit & Veg")]
    FruitAndVeg,
    #[strum(serialize = "Meat & Fish")]
    #[serde(rename = "Meat & Fish")]
    MeatAndFish,
    #[strum(serialize = "Dairy & Eggs")]
    #[serde(rename = "Dairy & Eggs")]
    DairyAndEggs,
    #[strum(serialize = "Bakery & Bread")]
    #[serde(rename = "Bakery & Bread")]
    BakeryAndBread,
    Pantry,
    Frozen,
    #[default]
    #[serde(other)]
    Other,
}

pub const CATEGORY_ORDER: &[Category] = Category::VARIANTS;

/// One entry of a persisted shopping list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    pub id: String,
    /// Rendered from the other fields, never read back as a source of truth.
    pub name: String,
    /// Merge key, together with `unit`.
    #[serde(default)]
    pub base_item: String,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub checked: bool,
}

/// An ingredient line as written in a recipe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawIngredient {
    #[serde(default)]
    pub amount: String,
    pub item: String,
}

impl RawIngredient {
    pub fn new(amount: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            item: item.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedIngredient {
    pub amount: Option<f64>,
    pub unit: Option<String>,
    pub base_item: String,
    pub category: Category,
}
