//! # creator-calc
//!
//! Command-line front end for the creator calculators.
//!
//! ```bash
//! creator-calc list
//! creator-calc fields brand_deal
//! creator-calc run engagement_rate -s followers=25000 -s likes=900 -s comments=60 -s shares=40
//! creator-calc --format json run multi_platform -s tiktok_views=1e6 -s youtube_views=1e5 -s instagram_views=5e5
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use creator_core::calculations::CalculatorId;
use creator_core::tables::{Niche, Region};
use creator_core::validation::{FieldKind, FormValues};
use creator_core::{CalcError, Evaluation, RateTables};
use serde_json::Value;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;

use config::{load_rate_tables, OutputFormat};

/// Command-line arguments for creator-calc
#[derive(Parser, Debug)]
#[command(name = "creator-calc")]
#[command(about = "TikTok creator earnings and engagement calculators")]
#[command(version)]
struct Cli {
    /// TOML file overriding the built-in regional and niche rates
    #[arg(long, global = true, env = "CREATOR_CALC_RATES")]
    rates: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text", env = "CREATOR_CALC_FORMAT")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every calculator
    List,
    /// Show the form fields of a calculator
    Fields {
        /// Calculator slug, e.g. brand_deal
        calculator: String,
    },
    /// Run a calculator on field values
    Run {
        /// Calculator slug, e.g. engagement_rate
        calculator: String,
        /// Field value as name=value (repeatable)
        #[arg(short = 's', long = "set", value_parser = parse_assignment)]
        values: Vec<(String, String)>,
    },
    /// Show the regional rate table
    Regions,
    /// Show the niche rate table
    Niches,
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing field name in '{raw}'"));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

fn build_form(values: &[(String, String)]) -> FormValues {
    values
        .iter()
        .map(|(name, value)| (name.clone(), Value::String(value.clone())))
        .collect()
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for results
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "creator_cli=info,creator_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    debug!(?cli, "parsed arguments");

    let tables = load_rate_tables(cli.rates.as_deref())?;

    match &cli.command {
        Command::List => list(cli.format),
        Command::Fields { calculator } => fields(calculator, cli.format),
        Command::Run { calculator, values } => run(calculator, values, &tables, cli.format),
        Command::Regions => regions(&tables, cli.format),
        Command::Niches => niches(&tables, cli.format),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

fn list(format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        let entries: Vec<Value> = CalculatorId::ALL
            .iter()
            .map(|id| {
                serde_json::json!({
                    "slug": id.slug(),
                    "name": id.display_name(),
                    "description": id.description(),
                })
            })
            .collect();
        return print_json(&entries);
    }

    for id in CalculatorId::ALL {
        println!("{:<24} {}", id.slug(), id.description());
    }
    Ok(())
}

fn fields(calculator: &str, format: OutputFormat) -> Result<()> {
    let id = CalculatorId::from_slug(calculator)?;

    if format == OutputFormat::Json {
        let entries: Vec<Value> = id
            .fields()
            .iter()
            .map(|rule| {
                let options = match rule.kind {
                    FieldKind::Choice(options) => Some(options),
                    FieldKind::Number => None,
                };
                serde_json::json!({
                    "name": rule.name,
                    "label": rule.label,
                    "required": rule.required,
                    "min": rule.min,
                    "max": rule.max,
                    "positive": rule.positive,
                    "step": rule.step,
                    "options": options,
                })
            })
            .collect();
        return print_json(&entries);
    }

    println!("{} ({})", id.display_name(), id.slug());
    println!("{}", id.description());
    println!();
    for rule in id.fields() {
        let mut constraints = Vec::new();
        if let Some(min) = rule.min {
            constraints.push(format!(">= {min}"));
        }
        if let Some(max) = rule.max {
            constraints.push(format!("<= {max}"));
        }
        if rule.positive {
            constraints.push("> 0".to_string());
        }
        if let FieldKind::Choice(options) = rule.kind {
            constraints.push(format!("one of {}", options.join(", ")));
        }
        if !rule.required {
            constraints.push("optional".to_string());
        }
        println!("  {:<28} {:<28} {}", rule.name, rule.label, constraints.join(", "));
    }
    Ok(())
}

fn run(calculator: &str, values: &[(String, String)], tables: &RateTables, format: OutputFormat) -> Result<()> {
    let id = CalculatorId::from_slug(calculator)?;
    let form = build_form(values);
    info!(calculator = id.slug(), fields = form.len(), "running calculator");

    let evaluation = match id.evaluate(&form, tables) {
        Ok(evaluation) => evaluation,
        Err(CalcError::Validation { errors }) => {
            if format == OutputFormat::Json {
                print_json(&serde_json::json!({ "valid": false, "errors": errors }))?;
            } else {
                eprintln!("Invalid input for {}:", id.display_name());
                for (field, message) in &errors {
                    eprintln!("  {field}: {message}");
                }
            }
            bail!("{} field(s) failed validation", errors.len());
        }
        Err(err) => return Err(err.into()),
    };

    match format {
        OutputFormat::Json => print_json(&evaluation),
        OutputFormat::Text => {
            print_evaluation(&evaluation);
            Ok(())
        }
    }
}

fn print_evaluation(evaluation: &Evaluation) {
    println!("{}", evaluation.calculator.display_name());
    println!();
    for line in render_value("", &evaluation.result) {
        println!("  {line}");
    }
    if let Some(text) = &evaluation.interpretation {
        println!();
        println!("{text}");
    }
}

/// Flatten a JSON result into "path: value" lines.
fn render_value(prefix: &str, value: &Value) -> Vec<String> {
    match value {
        Value::Object(map) => map
            .iter()
            .flat_map(|(key, child)| {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                render_value(&path, child)
            })
            .collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .flat_map(|(i, child)| render_value(&format!("{prefix}[{i}]"), child))
            .collect(),
        Value::String(s) => vec![format!("{prefix}: {s}")],
        other => vec![format!("{prefix}: {other}")],
    }
}

fn regions(tables: &RateTables, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(&tables.regions);
    }

    println!(
        "{:<6} {:<14} {:>8} {:>8} {:>16} {:>16}",
        "code", "region", "rpm x", "brand x", "avg rpm", "avg cpm"
    );
    for region in Region::ALL {
        let profile = tables.regions.get(region);
        println!(
            "{:<6} {:<14} {:>8.2} {:>8.2} {:>7.3}-{:<8.3} {:>7.2}-{:<8.2}",
            region.code(),
            profile.name,
            profile.rpm_multiplier,
            profile.brand_deal_multiplier,
            profile.avg_rpm.min,
            profile.avg_rpm.max,
            profile.avg_cpm.min,
            profile.avg_cpm.max,
        );
    }
    Ok(())
}

fn niches(tables: &RateTables, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(&tables.niches);
    }

    println!("{:<10} {:<20} {:>8} {:>8}", "key", "niche", "rpm x", "brand x");
    for niche in Niche::ALL {
        let profile = tables.niches.get(niche);
        println!(
            "{:<10} {:<20} {:>8.2} {:>8.2}",
            niche.key(),
            niche.display_name(),
            profile.rpm_multiplier,
            profile.brand_deal_multiplier,
        );
    }
    Ok(())
}
