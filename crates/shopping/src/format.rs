use crate::types::Category;

/// Units small enough that the exact quantity of a pantry item is not worth showing.
const STAPLE_UNITS: &[&str] = &["tsp", "tbsp", "pinch", "handful", "clove", "cloves"];

/// Pantry items whose quantity is never shown, whatever the unit.
const STAPLE_KEYWORDS: &[&str] = &[
    "oil", "vinegar", "salt", "pepper", "honey", "syrup", "sauce", "stock", "paste", "extract",
    "essence", "starch", "powder", "cumin", "turmeric", "paprika", "cinnamon", "mustard", "spice",
    "curry", "juice",
];

/// Units written directly after the number ("200g" rather than "2 cups").
const ATTACHED_UNITS: &[&str] = &["g", "ml", "kg", "l"];

/// Below this many grams or millilitres a pantry amount is assumed to be in the cupboard already.
const SMALL_AMOUNT_THRESHOLD: f64 = 150.0;

/// Decide whether an entry should be listed by name only
///
/// Only Pantry items are ever hidden. A staple keyword in the name always hides the
/// amount; otherwise a missing or small unit does, as do small gram/ml quantities.
///
/// # Arguments
/// * `base_item` - Canonical item name
/// * `amount` - Quantity, if known
/// * `unit` - Unit token as stored on the item
/// * `category` - Category the item is filed under
pub fn should_hide_amount(
    base_item: &str,
    amount: Option<f64>,
    unit: Option<&str>,
    category: Category,
) -> bool {
    if category != Category::Pantry {
        return false;
    }

    let name = base_item.to_lowercase();
    if STAPLE_KEYWORDS.iter().any(|keyword| name.contains(keyword)) {
        return true;
    }

    let Some(unit) = unit.filter(|unit| !unit.is_empty()) else {
        return true;
    };

    if STAPLE_UNITS.contains(&unit.to_lowercase().as_str()) {
        return true;
    }

    matches!(unit, "g" | "ml") && amount.is_some_and(|amount| amount < SMALL_AMOUNT_THRESHOLD)
}

/// Format a quantity for display
///
/// Formats:
/// - Without fractions: rounded to 2 decimals, 1.234 → "1.23", 2.0 → "2"
/// - With fractions: 1.5 → "1½", 0.33 → "⅓", 2.75 → "2¾"
/// - Decimals without a glyph fall back to 2 decimals: 2.17 → "2.17"
///
/// # Arguments
/// * `amount` - The quantity to format
/// * `allow_fractions` - Render common decimals as Unicode fraction glyphs
pub fn format_quantity(amount: f64, allow_fractions: bool) -> String {
    if !allow_fractions {
        return format_decimal(amount);
    }

    let whole = amount.floor();
    let hundredths = ((amount - whole) * 100.0).round() as i64;

    let glyph = match hundredths {
        50 => "½",
        25 => "¼",
        75 => "¾",
        33 | 30 => "⅓",
        66 | 67 => "⅔",
        _ => return format_decimal(amount),
    };

    if whole > 0.0 {
        format!("{whole}{glyph}")
    } else {
        glyph.to_owned()
    }
}

fn format_decimal(amount: f64) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    // normalise -0 so it prints as "0"
    format!("{}", rounded + 0.0)
}

/// Render the display name of a shopping entry, e.g. "375g Butter", "1.5kg Flour",
/// "2 cups Milk", "x3 Lemon" or just "Olive Oil".
pub fn format_item_name(
    base_item: &str,
    amount: Option<f64>,
    unit: Option<&str>,
    category: Category,
) -> String {
    let Some(amount) = amount else {
        return base_item.to_owned();
    };

    if should_hide_amount(base_item, Some(amount), unit, category) {
        return base_item.to_owned();
    }

    let unit = unit.filter(|unit| !unit.is_empty());
    let (amount, unit) = match unit {
        Some(unit) if amount >= 1000.0 => match unit.to_lowercase().as_str() {
            "g" => (amount / 1000.0, Some("kg")),
            "ml" => (amount / 1000.0, Some("L")),
            _ => (amount, Some(unit)),
        },
        _ => (amount, unit),
    };

    let quantity = format_quantity(amount, unit.is_none());

    match unit {
        Some(unit) => {
            let separator = if ATTACHED_UNITS.contains(&unit.to_lowercase().as_str()) {
                ""
            } else {
                " "
            };
            format!("{quantity}{separator}{unit} {base_item}")
        }
        None if quantity == "1" => base_item.to_owned(),
        None => format!("x{quantity} {base_item}"),
    }
}
