//! Rank Parcels
//!
//! Scores the parcel catalog for one persona and prints the markdown report.
//! An optional council transcript is run through the sentiment scraper first
//! and its suggestion replaces the sentiment weight.
//!
//! Run with: cargo run --bin rank_parcels -- --persona solar --weight rail=9

use anyhow::{Context, Result};
use clap::Parser;
use parcel_scorer_rust::parcel::{upper_midwest, ParcelCatalog};
use parcel_scorer_rust::report::{MarkdownFormatter, RankingReport};
use parcel_scorer_rust::{Persona, Session};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "rank_parcels", about = "Rank land parcels by weighted suitability")]
struct Cli {
    /// Persona preset: data_center, industrial or solar
    #[arg(long, default_value = "data_center", env = "DEFAULT_PERSONA")]
    persona: String,

    /// Weight override as key=value (repeatable), e.g. --weight flood_risk=4
    #[arg(long = "weight", value_name = "KEY=VALUE")]
    weights: Vec<String>,

    /// JSON parcel catalog (defaults to the built-in Upper Midwest parcels)
    #[arg(long, env = "PARCELS_FILE")]
    parcels: Option<PathBuf>,

    /// Council transcript file to run through the sentiment scraper
    #[arg(long)]
    transcript: Option<PathBuf>,
}

fn parse_override(raw: &str) -> Result<(&str, i64)> {
    let (key, value) = raw
        .split_once('=')
        .with_context(|| format!("Weight override '{}' must look like key=value", raw))?;
    let value = value
        .trim()
        .parse()
        .with_context(|| format!("Weight override '{}' has a non-integer value", raw))?;
    Ok((key.trim(), value))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("parcel_scorer_rust=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let catalog = match &cli.parcels {
        Some(path) => ParcelCatalog::load(path)
            .with_context(|| format!("Failed to load parcel catalog {:?}", path))?,
        None => upper_midwest(),
    };

    let persona: Persona = cli.persona.parse()?;
    let mut session = Session::new(persona);

    for raw in &cli.weights {
        let (key, value) = parse_override(raw)?;
        session.set_weight(key.parse()?, value)?;
    }

    if let Some(path) = &cli.transcript {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read transcript {:?}", path))?;
        session.run_sentiment_scraper(&text);
    }

    let report = RankingReport::build(&catalog, session.persona(), session.weights())
        .with_scraped_sentiment(session.last_scraped_sentiment());

    println!("{}", MarkdownFormatter::format(&report));

    Ok(())
}
