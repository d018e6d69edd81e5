use std::path::PathBuf;

use url::Url;

pub const BASE_URL: &str = "https://www.annualreports.com";
pub const LISTING_PATH: &str = "/FeaturedProgram/15";
pub const OUTPUT_FILE: &str = "company headquarter dataset.csv";
pub const PROGRESS_EVERY: usize = 50;

/// Everything a run needs to know. Built once in `main` and handed to the pipeline.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: Url,
    pub listing_path: String,
    pub output: PathBuf,
    pub progress_every: usize,
}

impl Config {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            listing_path: LISTING_PATH.to_string(),
            output: PathBuf::from(OUTPUT_FILE),
            progress_every: PROGRESS_EVERY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_directory_constants() {
        let c = Config::new(Url::parse(BASE_URL).unwrap());
        assert_eq!(c.base_url.as_str(), "https://www.annualreports.com/");
        assert_eq!(c.listing_path, "/FeaturedProgram/15");
        assert_eq!(c.output, PathBuf::from("company headquarter dataset.csv"));
        assert_eq!(c.progress_every, 50);
    }
}
