//! Command-line arguments for the hitlog attribution report

use crate::config::{AttributionConfig, TieBreak, ARTICLE_PREFIX, DEFAULT_TOP_N, REGISTRATION_URL};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hitlog-attribution")]
#[command(version)]
#[command(about = "Rank the articles users read before registering", long_about = None)]
pub struct Cli {
    /// Hitlog CSV with page_name, page_url, user_id and timestamp columns
    pub input: PathBuf,

    /// Where to write the ranked report
    pub output: PathBuf,

    /// Number of pages to keep in the report
    #[arg(short = 'n', long = "top", value_name = "N", default_value_t = DEFAULT_TOP_N)]
    pub top_n: usize,

    /// page_url that marks a registration
    #[arg(long, value_name = "URL", default_value = REGISTRATION_URL)]
    pub registration_url: String,

    /// page_url prefix of pages eligible for attribution
    #[arg(long, value_name = "PREFIX", default_value = ARTICLE_PREFIX)]
    pub content_prefix: String,

    /// Ordering for pages with the same total
    #[arg(long, value_enum, default_value_t = TieBreak::PageUrl)]
    pub tie_break: TieBreak,

    /// Enable debug logging to stderr
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    pub fn attribution_config(&self) -> AttributionConfig {
        AttributionConfig {
            top_n: self.top_n,
            registration_url: self.registration_url.clone(),
            content_prefix: self.content_prefix.clone(),
            tie_break: self.tie_break,
        }
    }
}
