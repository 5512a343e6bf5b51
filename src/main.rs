//! `manabo-atlas` — flood risk dashboard, map atlas and resilience advisor
//! for the barangays of Manabo, Abra.
//!
//! # Flow
//! 1. Load `.env` and parse CLI arguments ([`cli`]).
//! 2. Install the stderr log subscriber (`RUST_LOG`, or `-v` for debug).
//! 3. Load config ([`config::load_config`]).
//! 4. Dispatch the subcommand:
//!    - `dashboard` / `atlas` rate the built-in dataset ([`data`], [`rating`])
//!    - `maps` manages custom map images ([`atlas`])
//!    - `advise` talks to the chat service ([`advisor`])
//!    - `about` summarizes the study behind the data
//!    - `chart` / `report` render PNG and PDF output ([`report`])

mod advisor;
mod atlas;
mod cli;
mod config;
mod data;
mod models;
mod rating;
mod report;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use advisor::gemini::GeminiClient;
use advisor::Conversation;
use atlas::{data_url, FileStore, ImageCache, Persistence};
use cli::{ChartCommand, Cli, Command, MapsCommand, ReportFormat};
use config::{load_config, Config};
use models::{Barangay, MapCategory};
use rating::palette::theme_color;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cwd = std::env::current_dir()?;
    let config = load_config(&cwd, cli.config.as_deref())?;
    debug!(?config, "configuration loaded");

    match cli.command {
        Command::Dashboard { barangay, format } => {
            let selected = lookup(&barangay)?;
            match format {
                ReportFormat::Terminal => report::terminal::render_dashboard(selected)?,
                ReportFormat::Json => println!("{}", serde_json::to_string_pretty(selected)?),
            }
        }

        Command::Atlas { category, format } => {
            let category = MapCategory::from(category);
            let mut cache = open_cache(&config);
            let status = cache.resolve(category, &config.atlas.asset_dir);
            let image = cache.get(category);
            let rows = report::atlas_rows(category);

            match format {
                ReportFormat::Terminal => {
                    report::terminal::render_atlas(category, &rows, &image, status)?
                }
                ReportFormat::Json => {
                    let out = serde_json::json!({
                        "category": category,
                        "figure": category.figure(),
                        "color": theme_color(category).hex(),
                        "map": {
                            "isCustom": image.is_custom,
                            "status": status.to_string(),
                        },
                        "rows": rows,
                    });
                    println!("{}", serde_json::to_string_pretty(&out)?);
                }
            }
        }

        Command::Maps(command) => run_maps(command, &config)?,

        Command::Advise { message } => run_advisor(&config, message.join(" ")).await?,

        Command::Chart(ChartCommand::Bars { category, out }) => {
            let category = MapCategory::from(category);
            let out = out.unwrap_or_else(|| {
                PathBuf::from(format!("{}_ranking.png", category.key().to_lowercase()))
            });
            report::chart::render_bars(category, &report::atlas_rows(category), &out)?;
            println!("Chart written to: {}", out.display());
        }

        Command::Chart(ChartCommand::Radar { barangay, out }) => {
            let selected = lookup(&barangay)?;
            let out = out.unwrap_or_else(|| PathBuf::from(format!("{}_radar.png", selected.id)));
            report::chart::render_radar(selected, &out)?;
            println!("Chart written to: {}", out.display());
        }

        Command::About { format } => match format {
            ReportFormat::Terminal => report::terminal::render_about(&data::STUDY)?,
            ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&data::STUDY)?),
        },

        Command::Report { pdf } => report::pdf::render(&pdf)?,
    }

    Ok(())
}

fn lookup(id: &str) -> Result<&'static Barangay> {
    match data::find(id) {
        Some(b) => Ok(b),
        None => {
            let known: Vec<&str> = data::BARANGAYS.iter().map(|b| b.id).collect();
            bail!("Unknown barangay '{}'. Known ids: {}", id, known.join(", "))
        }
    }
}

fn open_cache(config: &Config) -> ImageCache<FileStore> {
    let store = FileStore::new(&config.atlas.store_dir(), Some(config.atlas.quota_bytes));
    debug!(path = %store.path().display(), "opening custom map store");
    ImageCache::open(store)
}

fn run_maps(command: MapsCommand, config: &Config) -> Result<()> {
    let mut cache = open_cache(config);
    let asset_dir = &config.atlas.asset_dir;

    match command {
        MapsCommand::Status => {
            let entries: Vec<_> = MapCategory::ALL
                .into_iter()
                .map(|c| {
                    let status = cache.resolve(c, asset_dir);
                    (c, cache.get(c), status)
                })
                .collect();
            report::terminal::render_map_status(&entries)?;
            println!(
                " {} custom map(s) stored in {}",
                cache.custom_categories().count(),
                cache.store().path().display()
            );
        }

        MapsCommand::Put { category, file } => {
            let category = MapCategory::from(category);
            let bytes = std::fs::read(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let blob = data_url::encode(&bytes)
                .with_context(|| format!("{} is not a supported image", file.display()))?;

            if let Some((w, h)) = data_url::dimensions(&bytes) {
                debug!(width = w, height = h, "decoded custom map header");
            }

            match cache.put(category, blob) {
                Persistence::Saved => println!(
                    "{} {} now uses {}",
                    "✓".green(),
                    category.figure().bold(),
                    file.display()
                ),
                Persistence::SessionOnly(e) => eprintln!(
                    "{} Image loaded but could not be saved to local storage ({}). It will be lost when this session ends.",
                    "!".yellow().bold(),
                    e
                ),
            }
        }

        MapsCommand::Clear { category } => {
            let category = MapCategory::from(category);
            let had_custom = cache.is_custom(category);
            cache.clear(category).context("Failed to update custom map store")?;
            let status = cache.resolve(category, asset_dir);
            if had_custom {
                println!(
                    "{} Custom map removed for {}. {}",
                    "✓".green(),
                    category.figure().bold(),
                    status
                );
            } else {
                println!("{} has no custom map. {}", category.figure(), status);
            }
        }

        MapsCommand::Retry { category } => {
            let category = MapCategory::from(category);
            cache.retry(category);
            let status = cache.resolve(category, asset_dir);
            let image = cache.get(category);
            println!("{}: {} ({})", category.figure(), status, report::terminal::describe_source(&image));
        }

        MapsCommand::Export { category, out } => {
            let category = MapCategory::from(category);
            let image = cache.get(category);
            if !image.is_custom {
                bail!("{} has no custom map to export", category.figure());
            }
            let (mime, bytes) = data_url::decode(&image.source)?;
            let out = out.unwrap_or_else(|| {
                PathBuf::from(format!(
                    "{}_map.{}",
                    category.key().to_lowercase(),
                    data_url::extension(&mime)
                ))
            });
            write_file(&out, &bytes)?;
            println!("Map written to: {}", out.display());
        }
    }

    Ok(())
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))
}

async fn run_advisor(config: &Config, message: String) -> Result<()> {
    let client = GeminiClient::new(&config.advisor, config::api_key())?;
    let mut conversation = Conversation::new();

    if !message.trim().is_empty() {
        ask(&mut conversation, &client, &message).await?;
        return Ok(());
    }

    for m in conversation.messages() {
        report::terminal::render_message(m)?;
    }
    println!("{}", "Type a question, or `exit` to leave.".dimmed());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if matches!(line, "exit" | "quit") {
            break;
        }
        ask(&mut conversation, &client, line).await?;
    }
    Ok(())
}

async fn ask(conversation: &mut Conversation, client: &GeminiClient, input: &str) -> Result<()> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.set_message("Analyzing thesis data...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let reply = conversation.send(client, input).await;
    spinner.finish_and_clear();

    if let Some(reply) = reply {
        report::terminal::render_message(reply)?;
    }
    Ok(())
}
