use std::sync::LazyLock;

use crate::types::Category;

/// Any of these in a name files the item under Pantry before the keyword table is consulted.
const PANTRY_KEYWORDS: &[&str] = &[
    "starch", "powder", "juice", "vinegar", "oil", "salt", "pepper", "sugar", "flour", "honey",
    "syrup", "sauce", "paste", "stock", "cumin", "turmeric", "paprika", "cinnamon", "mustard",
    "spice", "curry", "yeast", "extract", "essence", "saffron", "gherkin", "sweetcorn",
];

/// Keyword table as authored. Some keywords appear twice; see [`CATEGORY_KEYWORDS`].
const RAW_CATEGORY_KEYWORDS: &[(&str, Category)] = &[
    // Fruit & Veg
    ("onion", Category::FruitAndVeg),
    ("garlic", Category::FruitAndVeg),
    ("aubergine", Category::FruitAndVeg),
    ("lemon", Category::FruitAndVeg),
    ("berry", Category::FruitAndVeg),
    ("berries", Category::FruitAndVeg),
    ("strawberry", Category::FruitAndVeg),
    ("raspberry", Category::FruitAndVeg),
    ("blueberry", Category::FruitAndVeg),
    ("blackberry", Category::FruitAndVeg),
    ("carrot", Category::FruitAndVeg),
    ("potato", Category::FruitAndVeg),
    ("tomato", Category::FruitAndVeg),
    ("pepper", Category::FruitAndVeg),
    ("cucumber", Category::FruitAndVeg),
    ("lettuce", Category::FruitAndVeg),
    ("spinach", Category::FruitAndVeg),
    ("broccoli", Category::FruitAndVeg),
    ("cauliflower", Category::FruitAndVeg),
    ("apple", Category::FruitAndVeg),
    ("banana", Category::FruitAndVeg),
    ("avocado", Category::FruitAndVeg),
    ("lime", Category::FruitAndVeg),
    ("herbs", Category::FruitAndVeg),
    ("thyme", Category::FruitAndVeg),
    ("rosemary", Category::FruitAndVeg),
    ("parsley", Category::FruitAndVeg),
    ("coriander", Category::FruitAndVeg),
    ("cilantro", Category::FruitAndVeg),
    ("ginger", Category::FruitAndVeg),
    ("chili", Category::FruitAndVeg),
    ("mushroom", Category::FruitAndVeg),
    ("zucchini", Category::FruitAndVeg),
    ("courgette", Category::FruitAndVeg),
    ("leek", Category::FruitAndVeg),
    ("spring onion", Category::FruitAndVeg),
    ("scallion", Category::FruitAndVeg),
    ("orange", Category::FruitAndVeg),
    ("fruit", Category::FruitAndVeg),
    // Meat & Fish
    ("beef", Category::MeatAndFish),
    ("chicken", Category::MeatAndFish),
    ("pork", Category::MeatAndFish),
    ("lamb", Category::MeatAndFish),
    ("turkey", Category::MeatAndFish),
    ("bacon", Category::MeatAndFish),
    ("sausage", Category::MeatAndFish),
    ("ham", Category::MeatAndFish),
    ("mince", Category::MeatAndFish),
    ("steak", Category::MeatAndFish),
    ("chorizo", Category::MeatAndFish),
    ("patty", Category::MeatAndFish),
    ("patties", Category::MeatAndFish),
    ("salmon", Category::MeatAndFish),
    ("cod", Category::MeatAndFish),
    ("prawn", Category::MeatAndFish),
    ("shrimp", Category::MeatAndFish),
    ("tuna", Category::MeatAndFish),
    ("haddock", Category::MeatAndFish),
    ("sea bass", Category::MeatAndFish),
    // Dairy & Eggs
    ("milk", Category::DairyAndEggs),
    ("egg", Category::DairyAndEggs),
    ("butter", Category::DairyAndEggs),
    ("cheese", Category::DairyAndEggs),
    ("mozzarella", Category::DairyAndEggs),
    ("parmesan", Category::DairyAndEggs),
    ("cheddar", Category::DairyAndEggs),
    ("yogurt", Category::DairyAndEggs),
    ("cream", Category::DairyAndEggs),
    ("sour cream", Category::DairyAndEggs),
    ("feta", Category::DairyAndEggs),
    ("halloumi", Category::DairyAndEggs),
    ("mascarpone", Category::DairyAndEggs),
    // Bakery & Bread
    ("bread", Category::BakeryAndBread),
    ("baguette", Category::BakeryAndBread),
    ("roll", Category::BakeryAndBread),
    ("bun", Category::BakeryAndBread),
    ("tortilla", Category::BakeryAndBread),
    ("pitta", Category::BakeryAndBread),
    ("pastry", Category::BakeryAndBread),
    ("dough", Category::BakeryAndBread),
    ("croissant", Category::BakeryAndBread),
    ("lasagne sheets", Category::BakeryAndBread),
    // Pantry
    ("flour", Category::Pantry),
    ("sugar", Category::Pantry),
    ("salt", Category::Pantry),
    ("oil", Category::Pantry),
    ("vinegar", Category::Pantry),
    ("rice", Category::Pantry),
    ("pasta", Category::Pantry),
    ("spices", Category::Pantry),
    ("pepper", Category::Pantry),
    ("powder", Category::Pantry),
    ("syrup", Category::Pantry),
    ("honey", Category::Pantry),
    ("tahini", Category::Pantry),
    ("stock", Category::Pantry),
    ("sauce", Category::Pantry),
    ("paste", Category::Pantry),
    ("bean", Category::Pantry),
    ("lentil", Category::Pantry),
    ("chickpea", Category::Pantry),
    ("nut", Category::Pantry),
    ("seed", Category::Pantry),
    ("oats", Category::Pantry),
    ("cereal", Category::Pantry),
    ("cracker", Category::Pantry),
    ("tea", Category::Pantry),
    ("coffee", Category::Pantry),
    ("starch", Category::Pantry),
    ("powder", Category::Pantry),
    ("cumin", Category::Pantry),
    ("turmeric", Category::Pantry),
    ("paprika", Category::Pantry),
    ("cinnamon", Category::Pantry),
    ("mustard", Category::Pantry),
    ("yeast", Category::Pantry),
    ("gherkin", Category::Pantry),
    ("extract", Category::Pantry),
    ("essence", Category::Pantry),
    ("saffron", Category::Pantry),
    ("sweetcorn", Category::Pantry),
];

/// Keyword table with duplicates folded: a repeated keyword keeps the position of
/// its first entry and the category of its last.
pub static CATEGORY_KEYWORDS: LazyLock<Vec<(&'static str, Category)>> = LazyLock::new(|| {
    let mut keywords: Vec<(&'static str, Category)> =
        Vec::with_capacity(RAW_CATEGORY_KEYWORDS.len());

    for &(keyword, category) in RAW_CATEGORY_KEYWORDS {
        match keywords.iter_mut().find(|(existing, _)| *existing == keyword) {
            Some(entry) => entry.1 = category,
            None => keywords.push((keyword, category)),
        }
    }

    keywords
});

/// File a canonical item name under a shopping category.
///
/// Frozen wins over everything, then the pantry keywords, then the first
/// matching entry of [`CATEGORY_KEYWORDS`]. Matching is case-insensitive
/// substring containment.
pub fn categorize(base_item: &str) -> Category {
    let name = base_item.to_lowercase();

    if name.contains("frozen") {
        return Category::Frozen;
    }

    if PANTRY_KEYWORDS.iter().any(|keyword| name.contains(keyword)) {
        return Category::Pantry;
    }

    CATEGORY_KEYWORDS
        .iter()
        .find(|(keyword, _)| name.contains(keyword))
        .map(|&(_, category)| category)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frozen_takes_precedence() {
        assert_eq!(categorize("Frozen Sweetcorn"), Category::Frozen);
        assert_eq!(categorize("Frozen Peas"), Category::Frozen);
        assert_eq!(categorize("frozen chicken stock"), Category::Frozen);
    }

    #[test]
    fn test_pantry_keywords_beat_table() {
        assert_eq!(categorize("Sweetcorn"), Category::Pantry);
        assert_eq!(categorize("Chicken Stock"), Category::Pantry);
        assert_eq!(categorize("Lemon Juice"), Category::Pantry);
        assert_eq!(categorize("Tomato Puree"), Category::FruitAndVeg);
        assert_eq!(categorize("Garlic Powder"), Category::Pantry);
    }

    #[test]
    fn test_table_lookup() {
        assert_eq!(categorize("Red Onion"), Category::FruitAndVeg);
        assert_eq!(categorize("Chicken Breasts"), Category::MeatAndFish);
        assert_eq!(categorize("Sea Bass Fillets"), Category::MeatAndFish);
        assert_eq!(categorize("Butter"), Category::DairyAndEggs);
        assert_eq!(categorize("Greek Yogurt"), Category::DairyAndEggs);
        assert_eq!(categorize("Sourdough Bread"), Category::BakeryAndBread);
        assert_eq!(categorize("Basmati Rice"), Category::Pantry);
    }

    #[test]
    fn test_first_table_match_wins() {
        // "butter" is listed before "nut"
        assert_eq!(categorize("Butternut Squash"), Category::DairyAndEggs);
        // "ham" sits in the meat block, ahead of dairy
        assert_eq!(categorize("Graham Crackers"), Category::MeatAndFish);
    }

    #[test]
    fn test_unmatched_is_other() {
        assert_eq!(categorize("Kombu"), Category::Other);
        assert_eq!(categorize(""), Category::Other);
    }

    #[test]
    fn test_duplicate_keywords_resolve_to_last_definition() {
        let peppers: Vec<_> = CATEGORY_KEYWORDS
            .iter()
            .filter(|(keyword, _)| *keyword == "pepper")
            .collect();
        assert_eq!(peppers, vec![&("pepper", Category::Pantry)]);

        let position = CATEGORY_KEYWORDS
            .iter()
            .position(|(keyword, _)| *keyword == "pepper");
        assert_eq!(position, Some(13));

        let powders = CATEGORY_KEYWORDS
            .iter()
            .filter(|(keyword, _)| *keyword == "powder")
            .count();
        assert_eq!(powders, 1);

        assert_eq!(categorize("Red Pepper"), Category::Pantry);
        assert_eq!(categorize("Bell Peppers"), Category::Pantry);
    }
}
