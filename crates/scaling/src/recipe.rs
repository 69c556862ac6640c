//! Scaling whole recipes.
//!
//! A recipe is stored with the number of people it feeds and a list of
//! ingredient and nutrition rows, each with an optional amount.

use crate::{convert, DisplayValue, IngredientAmount, Result, ScalingError, Servings};
use serde::{Deserialize, Serialize};

/// An ingredient row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name
    pub ingredient: String,
    /// Amount as authored, if any
    #[serde(default)]
    pub amount: Option<IngredientAmount>,
}

/// A nutrition row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    /// Nutrient group, e.g. "protein"
    pub group: String,
    /// Amount as authored, if any
    #[serde(default)]
    pub amount: Option<IngredientAmount>,
}

/// The parts of a recipe that scale with the serving count.
///
/// Unknown fields in the stored recipe are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe name
    #[serde(default)]
    pub name: String,
    /// Number of people the amounts are written for
    #[serde(default)]
    pub people: Option<u32>,
    /// Ingredient rows
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Nutrition rows
    #[serde(default)]
    pub nutrition: Vec<Nutrition>,
}

/// A scaled ingredient row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaledIngredient {
    /// Ingredient name
    pub ingredient: String,
    /// Scaled amount
    pub amount: Option<DisplayValue>,
}

/// A scaled nutrition row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaledNutrition {
    /// Nutrient group
    pub group: String,
    /// Scaled amount
    pub amount: Option<DisplayValue>,
}

/// A recipe with every amount scaled to a new serving count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaledRecipe {
    /// Recipe name
    pub name: String,
    /// Serving count the recipe was written for
    pub base: Servings,
    /// Serving count the amounts now feed
    pub people: Servings,
    /// Scaled ingredient rows
    pub ingredients: Vec<ScaledIngredient>,
    /// Scaled nutrition rows
    pub nutrition: Vec<ScaledNutrition>,
}

impl Recipe {
    /// Parse a stored recipe from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The serving count the recipe was written for.
    pub fn servings(&self) -> Result<Servings> {
        match self.people {
            Some(people) if people > 0 => Servings::new(people),
            _ => Err(ScalingError::MissingServings(self.name.clone())),
        }
    }

    /// Scale every amount to `people`.
    ///
    /// # Example
    /// ```
    /// use cookbook_scaling::{Recipe, Servings};
    ///
    /// let recipe = Recipe::from_json(r#"{
    ///     "name": "Pancakes",
    ///     "people": 2,
    ///     "ingredients": [
    ///         {"ingredient": "flour", "amount": "200 g"},
    ///         {"ingredient": "eggs", "amount": 2},
    ///         {"ingredient": "salt"}
    ///     ]
    /// }"#).unwrap();
    ///
    /// let scaled = recipe.scaled(Servings::new(3).unwrap()).unwrap();
    /// assert_eq!(scaled.ingredients[0].amount.as_ref().unwrap().to_string(), "300 g");
    /// assert_eq!(scaled.ingredients[1].amount.as_ref().unwrap().to_string(), "3");
    /// assert!(scaled.ingredients[2].amount.is_none());
    /// ```
    pub fn scaled(&self, people: Servings) -> Result<ScaledRecipe> {
        let base = self.servings()?;
        let scale = |amount: &Option<IngredientAmount>| {
            amount.as_ref().map(|amount| convert(amount, base, people))
        };

        Ok(ScaledRecipe {
            name: self.name.clone(),
            base,
            people,
            ingredients: self
                .ingredients
                .iter()
                .map(|row| ScaledIngredient {
                    ingredient: row.ingredient.clone(),
                    amount: scale(&row.amount),
                })
                .collect(),
            nutrition: self
                .nutrition
                .iter()
                .map(|row| ScaledNutrition {
                    group: row.group.clone(),
                    amount: scale(&row.amount),
                })
                .collect(),
        })
    }
}
