//! WASM bindings for the scaling crate.
//!
//! The recipe page calls these when the reader changes the serving count.

use crate::{convert, scale_ratio, IngredientAmount, Servings};
use wasm_bindgen::prelude::*;

fn servings_pair(base: u32, people: u32) -> Result<(Servings, Servings), JsValue> {
    let base = Servings::new(base).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let people = Servings::new(people).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok((base, people))
}

/// Scale an amount given as JSON (a number or a string).
///
/// # Arguments
/// * `amount_json` - The amount, e.g. `2`, `1.5` or `"1 ½ cups"`
/// * `base` - People the amount is written for
/// * `people` - People to scale to
///
/// # Returns
/// JSON of the display value: a string, or a number for non-integer counts
#[wasm_bindgen]
pub fn convert_amount(amount_json: &str, base: u32, people: u32) -> Result<String, JsValue> {
    let (base, people) = servings_pair(base, people)?;
    let amount: IngredientAmount = serde_json::from_str(amount_json)
        .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?;

    serde_json::to_string(&convert(&amount, base, people))
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}

/// Scale an amount read from the page as text.
#[wasm_bindgen]
pub fn convert_text(text: &str, base: u32, people: u32) -> Result<String, JsValue> {
    let (base, people) = servings_pair(base, people)?;
    Ok(convert(&IngredientAmount::from(text), base, people).to_string())
}

/// The `people/base` factor as shown next to amounts that cannot be scaled.
#[wasm_bindgen]
pub fn scale_ratio_text(base: u32, people: u32) -> Result<String, JsValue> {
    let (base, people) = servings_pair(base, people)?;
    Ok(scale_ratio(base, people))
}
