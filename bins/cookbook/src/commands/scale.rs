//! Scale command - scale a whole recipe file

use super::{read_input, Context};
use cookbook_cli::output::{format_row, label_width, print_json, Status};
use cookbook_core::{Error, Result, ResultExt};
use cookbook_scaling::{Recipe, ScaledRecipe, Servings};
use cookbook_telemetry::{metrics, Timer};
use std::path::Path;

/// Load `path` and scale it to `people`
pub fn scale_file(path: &Path, people: u32) -> Result<ScaledRecipe> {
    let people = Servings::new(people)?;
    let json = read_input(path)?;

    let recipe = Recipe::from_json(&json)
        .map_err(Error::from)
        .context(format!("Parsing {}", path.display()))
        .with_suggestion("Recipes are JSON objects with \"people\" and an \"ingredients\" array")?;

    let timer = Timer::start("scale_recipe_ms");
    let scaled = recipe.scaled(people)?;
    timer.stop();

    metrics().increment("recipes_scaled");
    let amounts = scaled.ingredients.iter().filter(|row| row.amount.is_some()).count()
        + scaled.nutrition.iter().filter(|row| row.amount.is_some()).count();
    metrics().increment_by("amounts_converted", amounts as u64);
    Ok(scaled)
}

/// Run scale command
pub fn run(path: &Path, people: u32, ctx: &Context) -> Result<()> {
    let scaled = scale_file(path, people)?;
    tracing::debug!(recipe = %scaled.name, base = %scaled.base, people = %scaled.people, "Scaled recipe");

    if ctx.json {
        print_json(&scaled)?;
        return Ok(());
    }

    let title = if scaled.name.is_empty() { "Recipe" } else { scaled.name.as_str() };
    Status::header(&format!("{} ({} → {} people)", title, scaled.base, scaled.people));

    let width = label_width(
        scaled
            .ingredients
            .iter()
            .map(|row| row.ingredient.as_str())
            .chain(scaled.nutrition.iter().map(|row| row.group.as_str())),
    );

    for row in &scaled.ingredients {
        let amount = row.amount.as_ref().map(ToString::to_string);
        println!("  {}", format_row(&row.ingredient, amount.as_deref(), width));
    }

    if !scaled.nutrition.is_empty() {
        println!();
        Status::detail("Nutrition");
        for row in &scaled.nutrition {
            let amount = row.amount.as_ref().map(ToString::to_string);
            println!("  {}", format_row(&row.group, amount.as_deref(), width));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cookbook_core::ErrorCode;
    use std::fs;
    use tempfile::TempDir;

    fn write_recipe(dir: &TempDir, json: &str) -> std::path::PathBuf {
        let path = dir.path().join("recipe.json");
        fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_scale_file() {
        let dir = TempDir::new().unwrap();
        let path = write_recipe(
            &dir,
            r#"{"name": "Omelette", "people": 1, "ingredients": [
                {"ingredient": "eggs", "amount": 2},
                {"ingredient": "milk", "amount": "½ dl"},
                {"ingredient": "salt", "amount": "a pinch"}
            ], "nutrition": [{"group": "protein", "amount": "13 g"}]}"#,
        );

        let scaled = scale_file(&path, 3).unwrap();
        let amounts: Vec<String> = scaled
            .ingredients
            .iter()
            .map(|row| row.amount.as_ref().unwrap().to_string())
            .collect();
        assert_eq!(amounts, ["6", "1.5 dl", "a pinch"]);
        assert_eq!(scaled.nutrition[0].amount.as_ref().unwrap().to_string(), "39 g");
    }

    #[test]
    fn test_missing_people() {
        let dir = TempDir::new().unwrap();
        let path = write_recipe(&dir, r#"{"name": "Toast", "ingredients": []}"#);

        let err = scale_file(&path, 2).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingServings);
    }

    #[test]
    fn test_bad_json_names_file() {
        let dir = TempDir::new().unwrap();
        let path = write_recipe(&dir, "{");

        let err = scale_file(&path, 2).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert!(err.context.unwrap().starts_with("Parsing"));
        assert!(err.suggestion.unwrap().contains("ingredients"));
    }
}
