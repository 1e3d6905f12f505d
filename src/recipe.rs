use larder_shopping::RawIngredient;
use serde::Deserialize;
use std::path::Path;

/// Accepted shapes of a recipe file.
#[derive(Deserialize)]
#[serde(untagged)]
enum RecipeFile {
    Recipe { ingredients: Vec<RawIngredient> },
    Lines(Vec<RawIngredient>),
}

/// Ingredient lines of a recipe document, either `{"ingredients": [...]}` or a bare array.
pub fn parse_ingredients(json: &str) -> anyhow::Result<Vec<RawIngredient>> {
    let ingredients = match serde_json::from_str(json)? {
        RecipeFile::Recipe { ingredients } => ingredients,
        RecipeFile::Lines(ingredients) => ingredients,
    };

    Ok(ingredients)
}

pub fn read_ingredients(path: impl AsRef<Path>) -> anyhow::Result<Vec<RawIngredient>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;

    parse_ingredients(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recipe_object() {
        let ingredients = parse_ingredients(
            r#"{"title":"Shakshuka","ingredients":[{"item":"Eggs","amount":"4"},{"item":"Chopped Tomatoes","amount":"400g"}]}"#,
        )
        .unwrap();

        assert_eq!(
            ingredients,
            vec![
                RawIngredient::new("4", "Eggs"),
                RawIngredient::new("400g", "Chopped Tomatoes"),
            ]
        );
    }

    #[test]
    fn test_parse_bare_array() {
        let ingredients = parse_ingredients(r#"[{"item":"Salt"}]"#).unwrap();
        assert_eq!(ingredients, vec![RawIngredient::new("", "Salt")]);
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert!(parse_ingredients(r#"{"title":"Toast"}"#).is_err());
        assert!(parse_ingredients("not json").is_err());
    }
}
