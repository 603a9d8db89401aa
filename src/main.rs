mod builds;
mod export;
mod parser;
mod scraper;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "kb_scraper",
    about = "Scrape published Windows security updates per OS build"
)]
struct Cli {
    /// Write tab-delimited output to this file
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,
    /// Write SQL CREATE TABLE + INSERT statements to this file
    #[arg(long, value_name = "PATH")]
    sql: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let builds = fetch_all_builds().await?;

    // No output option at all means delimited text on stdout.
    if cli.csv.is_none() && cli.sql.is_none() {
        print!("{}", export::render_csv(&builds));
        std::io::stdout().flush()?;
        return Ok(());
    }

    if let Some(path) = &cli.csv {
        write_output(path, &export::render_csv(&builds))?;
        info!("Wrote delimited output to {}", path.display());
    }
    if let Some(path) = &cli.sql {
        write_output(path, &export::render_sql(&builds))?;
        info!("Wrote SQL output to {}", path.display());
    }

    Ok(())
}

/// Fetch and parse every registered build sequentially, in registry order.
///
/// The first failed fetch or parse aborts the whole run; there is no partial
/// result. Each page is fetched once even when both outputs are requested.
async fn fetch_all_builds() -> Result<export::BuildUpdates> {
    let client = reqwest::Client::new();

    let pb = ProgressBar::new(builds::SUPPORTED_BUILDS.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} builds")?
            .progress_chars("=> "),
    );

    let mut collected = Vec::with_capacity(builds::SUPPORTED_BUILDS.len());
    for &(build, url) in builds::SUPPORTED_BUILDS {
        let html = scraper::fetch_page(&client, url).await?;
        let updates = parser::parse_updates(&html, url)?;
        info!("Build {}: {} updates", build, updates.len());
        collected.push((build, updates));
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(collected)
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
