//! Convert command - scale one amount

use super::Context;
use cookbook_cli::output::{print_json, Status};
use cookbook_core::Result;
use cookbook_scaling::{classify, convert, scale_ratio, DisplayValue, IngredientAmount, Servings};
use cookbook_telemetry::{metrics, Timer};
use owo_colors::OwoColorize;
use serde::Serialize;

/// Result of one conversion
#[derive(Debug, Serialize)]
pub struct ConvertReport {
    pub amount: IngredientAmount,
    pub shape: &'static str,
    pub base: Servings,
    pub people: Servings,
    pub ratio: String,
    pub result: DisplayValue,
}

impl ConvertReport {
    /// Parse `input` and scale it from `base` to `people`
    pub fn build(input: &str, base: u32, people: u32) -> Result<Self> {
        let base = Servings::new(base)?;
        let people = Servings::new(people)?;
        let amount = IngredientAmount::parse_lenient(input);

        let timer = Timer::start("convert_ms");
        let result = convert(&amount, base, people);
        timer.stop();
        metrics().increment("amounts_converted");

        Ok(Self {
            shape: classify(&amount).name(),
            ratio: scale_ratio(base, people),
            amount,
            base,
            people,
            result,
        })
    }
}

/// Run convert command
pub fn run(input: &str, base: u32, people: u32, ctx: &Context) -> Result<()> {
    let report = ConvertReport::build(input, base, people)?;
    tracing::debug!(shape = report.shape, ratio = %report.ratio, "Converted amount");

    if ctx.json {
        print_json(&report)?;
        return Ok(());
    }

    println!("{}", report.result.to_string().bold());
    if report.base != report.people {
        Status::info(&format!(
            "{} for {} people, scaled by {} for {}",
            report.amount, report.base, report.ratio, report.people
        ));
    }
    Ok(())
}
