use std::path::PathBuf;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::config::Config;
use crate::export;
use crate::fetch::Fetcher;
use crate::parser::{detail, list};
use crate::record::CompanyRecord;

/// Counts for a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub companies: usize,
    pub details_fetched: usize,
    pub details_failed: usize,
    pub output: PathBuf,
}

#[derive(Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Written(RunSummary),
    /// The listing page could not be fetched or parsed. Nothing was written.
    Aborted(String),
}

/// FETCH_LIST → FETCH_DETAIL × N → WRITE. One request at a time, in page order.
pub async fn run(config: &Config) -> Result<RunOutcome> {
    let fetcher = Fetcher::new(config.base_url.clone())?;

    let list_url = fetcher.resolve(&config.listing_path)?;
    info!("Fetching company list: {}", list_url);
    let Some(list_html) = fetcher.get(&list_url).await else {
        return Ok(abort("Failed to retrieve the main page.".to_string()));
    };

    let entries = match list::parse_list(&list_html) {
        Ok(entries) => entries,
        Err(e) => return Ok(abort(e.to_string())),
    };
    info!("Found {} companies on the list page", entries.len());

    let pb = ProgressBar::new(entries.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec}, eta {eta})")?
            .progress_chars("=> "),
    );

    let mut companies: Vec<CompanyRecord> = Vec::with_capacity(entries.len());
    let mut details_fetched = 0usize;
    let mut details_failed = 0usize;

    for mut company in entries {
        if let Some(link) = company.detail_link.clone() {
            match fetch_detail(&fetcher, &link).await {
                Some(html) => {
                    company.merge_details(detail::parse_detail(&html));
                    details_fetched += 1;
                }
                None => {
                    let url = detail_url(&fetcher, &link);
                    pb.suspend(|| println!("Failed to fetch details for {}", url));
                    details_failed += 1;
                }
            }
        }

        companies.push(company);
        pb.inc(1);
        if let Some(line) = checkpoint(companies.len(), config.progress_every) {
            pb.suspend(|| println!("{}", line));
        }
    }
    pb.finish_and_clear();

    export::write_csv(&config.output, &companies)?;
    println!("Data successfully written to '{}'", config.output.display());

    let summary = RunSummary {
        companies: companies.len(),
        details_fetched,
        details_failed,
        output: config.output.clone(),
    };
    info!(
        "Wrote {} companies ({} details, {} failed)",
        summary.companies, summary.details_fetched, summary.details_failed
    );
    Ok(RunOutcome::Written(summary))
}

/// Progress line after `processed` records, every `every` records (0 disables).
fn checkpoint(processed: usize, every: usize) -> Option<String> {
    (every > 0 && processed > 0 && processed % every == 0)
        .then(|| format!("{} companies searched", processed))
}

fn abort(reason: String) -> RunOutcome {
    println!("{}", reason);
    warn!("Run aborted: {}", reason);
    RunOutcome::Aborted(reason)
}

async fn fetch_detail(fetcher: &Fetcher, link: &str) -> Option<String> {
    match fetcher.resolve(link) {
        Ok(url) => fetcher.get(&url).await,
        Err(e) => {
            warn!("{:#}", e);
            None
        }
    }
}

fn detail_url(fetcher: &Fetcher, link: &str) -> String {
    fetcher
        .resolve(link)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| link.to_string())
}
