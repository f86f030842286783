use clap::ValueEnum;

pub const DEFAULT_TOP_N: usize = 3;
pub const REGISTRATION_URL: &str = "/register";
pub const ARTICLE_PREFIX: &str = "/articles/";

/// Secondary ordering for pages with the same total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TieBreak {
    /// Ascending page_url, then page_name
    #[default]
    PageUrl,
    /// Ascending page_name, then page_url
    PageName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributionConfig {
    pub top_n: usize,
    pub registration_url: String,
    pub content_prefix: String,
    pub tie_break: TieBreak,
}

impl Default for AttributionConfig {
    fn default() -> Self {
        AttributionConfig {
            top_n: DEFAULT_TOP_N,
            registration_url: REGISTRATION_URL.to_owned(),
            content_prefix: ARTICLE_PREFIX.to_owned(),
            tie_break: TieBreak::default(),
        }
    }
}

impl AttributionConfig {
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn is_registration(&self, page_url: &str) -> bool {
        page_url == self.registration_url
    }

    pub fn is_content(&self, page_url: &str) -> bool {
        page_url.starts_with(&self.content_prefix)
    }
}
