//! # Budget CLI
//!
//! Terminal front-end for the curtain & blinds estimator. Runs the same
//! calculator as the HTTP service and prints either a short report or the
//! JSON response.
//!
//! ```text
//! budget calculate --width 200 --height 150 --material blackout
//! budget --locale en calculate -w 1 -H 1 -m blackout --json
//! budget --catalog ./materials.toml materials
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use budget_core::{
    load_catalog_or_builtin, BudgetCalculator, BudgetRequest, BudgetResponse, CalcError, Locale,
    MaterialCatalog,
};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Exit status for rejected input
const EXIT_INVALID_INPUT: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "budget")]
#[command(about = "Curtain & blinds budget estimator", version)]
struct Cli {
    /// Material catalog file (.toml or .json); built-in catalog if omitted
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Language for error messages (pt-BR or en)
    #[arg(long, global = true, default_value = "pt-BR")]
    locale: Locale,

    #[arg(long, short, global = true, help = "Enable verbose output")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Calculate area and total cost for an opening
    Calculate {
        /// Opening width in centimeters
        #[arg(long, short, allow_negative_numbers = true)]
        width: f64,

        /// Opening height in centimeters
        #[arg(long, short = 'H', allow_negative_numbers = true)]
        height: f64,

        /// Material id from the catalog
        #[arg(long, short)]
        material: String,

        /// Print the JSON response instead of a report
        #[arg(long)]
        json: bool,
    },

    /// List the material catalog
    Materials {
        #[arg(long)]
        json: bool,
    },
}

fn init_logger(verbose: bool) {
    let default_filter = if verbose { "budget_core=debug,info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let catalog = Arc::new(load_catalog_or_builtin(cli.catalog.as_deref())?);

    match cli.command {
        Command::Calculate {
            width,
            height,
            material,
            json,
        } => {
            let calculator = BudgetCalculator::new(catalog);
            let request = BudgetRequest::new(width, height, material);

            match calculator.calculate(&request) {
                Ok(result) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&result)?);
                    } else {
                        print_report(&request, &result);
                    }
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    print_error(&e, cli.locale);
                    Ok(ExitCode::from(EXIT_INVALID_INPUT))
                }
            }
        }
        Command::Materials { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(catalog.materials())?);
            } else {
                print_materials(&catalog);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn print_report(request: &BudgetRequest, result: &BudgetResponse) {
    println!("═══════════════════════════════════════");
    println!("  BUDGET ESTIMATE");
    println!("═══════════════════════════════════════");
    println!();
    println!("Opening:");
    println!("  Width:    {} cm", request.width_cm.unwrap_or_default());
    println!("  Height:   {} cm", request.height_cm.unwrap_or_default());
    println!("  Material: {}", result.material_name);
    println!();
    println!("  Area:        {:.2} m²", result.area_m2);
    println!("  Unit price:  {} /m²", result.price_per_m2);
    println!();
    println!("═══════════════════════════════════════");
    println!("  TOTAL: {:.2}", result.total);
    println!("═══════════════════════════════════════");
}

fn print_materials(catalog: &MaterialCatalog) {
    println!("{:<16} {:<24} {:>10}", "ID", "NAME", "PRICE/m²");
    for mat in catalog {
        println!("{:<16} {:<24} {:>10.2}", mat.id, mat.name, mat.price_per_square_meter);
    }
}

fn print_error(error: &CalcError, locale: Locale) {
    eprintln!("Error: {}", error.user_message(locale));
    if let Ok(json) = serde_json::to_string_pretty(error) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}
