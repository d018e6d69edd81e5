mod config;
mod export;
mod fetch;
mod parser;
mod pipeline;
mod record;

use std::time::Instant;

use clap::Parser;
use url::Url;

use config::Config;
use pipeline::RunOutcome;

/// Takes no options: the directory host, list page and output file are fixed.
#[derive(Parser)]
#[command(
    name = "headquarter_scraper",
    about = "Export the annualreports.com featured company directory to CSV"
)]
struct Cli {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let _ = Cli::parse();
    let config = Config::new(Url::parse(config::BASE_URL)?);

    // An aborted run has already reported why; it still exits 0.
    if let RunOutcome::Written(summary) = pipeline::run(&config).await? {
        tracing::debug!(?summary, "run complete");
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }
    Ok(())
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
