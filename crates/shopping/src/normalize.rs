use std::sync::LazyLock;

use regex::Regex;

use crate::categorization::categorize;
use crate::types::NormalizedIngredient;

/// Descriptive words removed from item names, in removal order.
const STRIP_WORDS: &[&str] = &[
    "cold",
    "softened",
    "diced",
    "chopped",
    "fresh",
    "dried",
    "ground",
    "minced",
    "plain",
    "grated",
    "buffalo",
    "cloves",
    "paste",
    "juice of",
    "zest of",
    "handful",
    "pinch",
    "clove",
    "head",
    "stalk",
    "bunch",
    "whole",
    "cubed",
    "melted",
    "beaten",
    "cooked",
    "unsalted",
    "salted",
    "chilled",
    "room temperature",
    "warm",
    "hot",
];

const EGG_PARTS: &[&str] = &["egg yolk", "egg yolks", "egg white", "egg whites"];

static STRIP_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    STRIP_WORDS
        .iter()
        .map(|word| {
            Regex::new(&format!(r"(?i)(?-u:\b){}(?-u:\b)", regex::escape(word)))
                .expect("strip word pattern")
        })
        .collect()
});

static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(.*\)").expect("parenthetical pattern"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+)/([0-9]+)|[0-9]+(?:\.[0-9]+)?").expect("number pattern")
});

static UNIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z]+").expect("unit pattern"));

/// Turn a recipe line into a canonical shopping entry.
///
/// Returns `None` for lines that are never shopped for (water, blank items).
pub fn normalize_ingredient(amount_text: &str, item_text: &str) -> Option<NormalizedIngredient> {
    if item_text.trim().is_empty() {
        tracing::trace!(amount = amount_text, "blank ingredient discarded");
        return None;
    }

    let name = clean_item_name(item_text)?;
    let base_item = if name.is_empty() {
        title_case(item_text)
    } else {
        title_case(&name)
    };

    let (amount, unit) = parse_amount(amount_text);
    let category = categorize(&base_item);

    Some(NormalizedIngredient {
        amount,
        unit,
        base_item,
        category,
    })
}

/// Lowercased item name with notes and descriptive words removed.
///
/// `None` means the item is filtered out entirely.
fn clean_item_name(item_text: &str) -> Option<String> {
    let lower = item_text.to_lowercase();
    let mut name = PARENTHETICAL.replace_all(&lower, "").trim().to_owned();

    if let Some((head, _)) = name.split_once(',') {
        name = head.trim().to_owned();
    }

    if let Some((head, _)) = name.split_once(" for ") {
        name = head.trim().to_owned();
    }

    if EGG_PARTS.contains(&name.as_str()) {
        name = "egg".to_owned();
    }

    if name == "water" {
        tracing::trace!(item = item_text, "water discarded");
        return None;
    }

    for pattern in STRIP_PATTERNS.iter() {
        name = pattern.replace_all(&name, "").into_owned();
    }

    Some(WHITESPACE.replace_all(name.trim(), " ").into_owned())
}

fn title_case(text: &str) -> String {
    text.split(' ')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Amount and unit from free text such as "2 cups", "1/2 tsp" or "200g".
pub fn parse_amount(amount_text: &str) -> (Option<f64>, Option<String>) {
    let Some(captures) = NUMBER.captures(amount_text) else {
        return (None, None);
    };
    let Some(token) = captures.get(0) else {
        return (None, None);
    };

    let amount = match (captures.get(1), captures.get(2)) {
        (Some(numerator), Some(denominator)) => {
            let numerator = numerator.as_str().parse::<f64>().unwrap_or_default();
            let denominator = denominator.as_str().parse::<f64>().unwrap_or_default();
            if denominator == 0.0 {
                return (None, None);
            }
            numerator / denominator
        }
        _ => match token.as_str().parse::<f64>() {
            Ok(value) => value,
            Err(_) => return (None, None),
        },
    };

    let remaining = format!(
        "{}{}",
        &amount_text[..token.start()],
        &amount_text[token.end()..]
    );
    let unit = UNIT
        .find(remaining.trim())
        .map(|m| m.as_str().to_lowercase());

    (Some(amount), unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;

    fn base(item: &str) -> String {
        normalize_ingredient("", item).unwrap().base_item
    }

    #[test]
    fn test_notes_and_descriptors_are_removed() {
        assert_eq!(base("Plain Flour, sifted"), "Flour");
        assert_eq!(base("Butter for greasing"), "Butter");
        assert_eq!(base("Unsalted Butter (cold, cubed)"), "Butter");
        assert_eq!(base("2 cloves garlic, minced"), "2 Garlic");
        assert_eq!(base("Juice of 1 lemon"), "1 Lemon");
        assert_eq!(base("Eggs at room temperature"), "Eggs At");
        assert_eq!(base("finely   chopped   fresh parsley"), "Finely Parsley");
    }

    #[test]
    fn test_egg_parts_become_egg() {
        assert_eq!(base("Egg Yolks"), "Egg");
        assert_eq!(base("egg white, beaten"), "Egg");
        let egg = normalize_ingredient("2", "Egg Whites").unwrap();
        assert_eq!(egg.category, Category::DairyAndEggs);
    }

    #[test]
    fn test_water_is_discarded() {
        assert_eq!(normalize_ingredient("250ml", "Water"), None);
        assert_eq!(normalize_ingredient("", "water (boiling)"), None);
        assert_eq!(normalize_ingredient("1 cup", "Water, for the sauce"), None);
        assert!(normalize_ingredient("1 cup", "Cold Water").is_some());
        assert!(normalize_ingredient("1 cup", "Coconut Water").is_some());
    }

    #[test]
    fn test_blank_item_is_discarded() {
        assert_eq!(normalize_ingredient("2", "   "), None);
    }

    #[test]
    fn test_empty_name_falls_back_to_raw_text() {
        let item = normalize_ingredient("1", "chopped fresh").unwrap();
        assert_eq!(item.base_item, "Chopped Fresh");

        let item = normalize_ingredient("1", "Pinch").unwrap();
        assert_eq!(item.base_item, "Pinch");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("2 cups"), (Some(2.0), Some("cups".to_owned())));
        assert_eq!(parse_amount("200g"), (Some(200.0), Some("g".to_owned())));
        assert_eq!(parse_amount("1/2 tsp"), (Some(0.5), Some("tsp".to_owned())));
        assert_eq!(parse_amount("1.5 KG"), (Some(1.5), Some("kg".to_owned())));
        assert_eq!(parse_amount("3"), (Some(3.0), None));
        assert_eq!(parse_amount("about 4 large"), (Some(4.0), Some("about".to_owned())));
    }

    #[test]
    fn test_only_ascii_digits_are_numbers() {
        assert_eq!(parse_amount("\u{663} 2 cups"), (Some(2.0), Some("cups".to_owned())));
        assert_eq!(parse_amount("\u{663}"), (None, None));
    }

    #[test]
    fn test_word_boundaries_are_ascii() {
        // accented letters do not join a descriptor to its neighbour
        assert_eq!(base("Cafécold"), "Café");
        assert_eq!(base("Éfresh Basil"), "É Basil");
    }

    #[test]
    fn test_parse_amount_without_number() {
        assert_eq!(parse_amount(""), (None, None));
        assert_eq!(parse_amount("to taste"), (None, None));
        assert_eq!(parse_amount("a pinch"), (None, None));
    }

    #[test]
    fn test_parse_amount_zero_denominator() {
        assert_eq!(parse_amount("1/0 cup"), (None, None));
    }

    #[test]
    fn test_mixed_number_keeps_first_token() {
        // "1 1/2" reads as 1 with the rest as unit text
        assert_eq!(parse_amount("1 1/2 cups"), (Some(1.0), Some("cups".to_owned())));
    }

    #[test]
    fn test_normalized_unit_and_category() {
        let flour = normalize_ingredient("2 cups", "plain flour, sifted").unwrap();
        assert_eq!(flour.amount, Some(2.0));
        assert_eq!(flour.unit.as_deref(), Some("cups"));
        assert_eq!(flour.base_item, "Flour");
        assert_eq!(flour.category, Category::Pantry);
    }
}
