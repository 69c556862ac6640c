//! Cookbook CLI - recipe scaling and listing search
//!
//! Runs the same conversions and search the recipe pages use, on local
//! JSON files.

use clap::{Parser, Subcommand};
use cookbook_cli::output::{print_error, print_error_report, Status};
use cookbook_core::config::Config;
use cookbook_core::exit_codes;
use cookbook_telemetry::{metrics, TelemetryConfig};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;

use commands::{convert, scale, search, Context};

/// Scale recipe amounts and search recipe listings
#[derive(Parser)]
#[command(name = "cookbook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file (defaults to cookbook.toml in the working directory)
    #[arg(short, long, global = true, env = "COOKBOOK_CONFIG")]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Print collected metrics to stderr on exit
    #[arg(long, global = true)]
    metrics: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scale a single amount from one serving count to another
    Convert {
        /// Amount as written, e.g. 3, 1.5, "1 ½ cups" or "200 g"
        #[arg(allow_negative_numbers = true)]
        amount: String,

        /// Serving count the amount is written for
        #[arg(short, long)]
        base: u32,

        /// Serving count to scale to
        #[arg(short, long)]
        people: u32,
    },

    /// Scale every amount of a recipe file
    Scale {
        /// Recipe JSON file
        recipe: PathBuf,

        /// Serving count to scale to
        #[arg(short, long)]
        people: u32,
    },

    /// Filter a recipe listing the way the search bar does
    Search {
        /// Search text; prefix with "advanced:" to include ingredients
        #[arg(default_value = "")]
        query: String,

        /// Listing JSON file
        #[arg(short, long)]
        items: PathBuf,

        /// Pages loaded so far
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        pages: u32,

        /// Only show saved recipes
        #[arg(long)]
        only_saved: bool,

        /// Sort the listing by this attribute first
        #[arg(long)]
        sort: Option<String>,

        /// Sort largest first
        #[arg(long, requires = "sort")]
        descending: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return report_failure(&e, cli.json),
    };

    let telemetry = &config.schema.telemetry;
    let level = if cli.verbose { "debug" } else { telemetry.log_level.as_str() };
    let telemetry_config = TelemetryConfig::with_level(level)
        .json(telemetry.json)
        .with_locations(cli.verbose);
    if let Err(e) = cookbook_telemetry::init_with_config(telemetry_config) {
        Status::warning(&format!("Logging disabled: {}", e));
    }

    let ctx = Context {
        config,
        json: cli.json,
    };

    let result = run(cli.command, &ctx);

    if cli.metrics {
        eprintln!("{}", metrics().export_json());
    }

    match result {
        Ok(()) => exit_code(exit_codes::SUCCESS),
        Err(e) => match e.downcast_ref::<cookbook_core::Error>() {
            Some(err) => report_failure(err, cli.json),
            None => {
                Status::error(&format!("{:#}", e));
                exit_code(exit_codes::FAILURE)
            }
        },
    }
}

fn run(command: Commands, ctx: &Context) -> anyhow::Result<()> {
    match command {
        Commands::Convert { amount, base, people } => convert::run(&amount, base, people, ctx)?,
        Commands::Scale { recipe, people } => scale::run(&recipe, people, ctx)?,
        Commands::Search {
            query,
            items,
            pages,
            only_saved,
            sort,
            descending,
        } => {
            let options = search::SearchOptions {
                query,
                pages: pages as usize,
                only_saved,
                sort,
                descending,
            };
            search::run(&items, &options, ctx)?
        }
    }
    Ok(())
}

fn report_failure(err: &cookbook_core::Error, json: bool) -> ExitCode {
    if json {
        print_error_report(err);
    } else {
        print_error(err);
    }
    exit_code(err.exit_code())
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_negative_amount_is_positional() {
        let cli = Cli::try_parse_from(["cookbook", "convert", "-1", "--base", "4", "--people", "2"]).unwrap();
        assert!(matches!(cli.command, Commands::Convert { ref amount, .. } if amount == "-1"));
    }

    #[test]
    fn test_zero_pages_rejected() {
        assert!(Cli::try_parse_from(["cookbook", "search", "soup", "--items", "x.json", "--pages", "0"]).is_err());
    }

    #[test]
    fn test_descending_requires_sort() {
        assert!(Cli::try_parse_from(["cookbook", "search", "--items", "x.json", "--descending"]).is_err());
        assert!(Cli::try_parse_from(["cookbook", "search", "--items", "x.json", "--sort", "time", "--descending"]).is_ok());
    }
}
