use log::debug;
use scraper::Html;
use std::time::Duration;

use crate::config::HttpConfig;
use crate::error::IngestError;

/// Fetches a web page and reduces it to plain text.
pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    pub fn new(config: &HttpConfig) -> Result<Self, IngestError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client })
    }

    /// Fetch `url` and return its visible text, one line per text node,
    /// so the segmenter and the line-oriented extractors see the same
    /// shape a pasted document has.
    pub async fn fetch_text(&self, url: &str) -> Result<String, IngestError> {
        let html = self.client.get(url).send().await?.text().await?;
        debug!("Fetched {} bytes from {}", html.len(), url);
        Ok(html_to_text(&html))
    }
}

/// Strip markup, keeping line breaks at text-node boundaries.
fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    document
        .root_element()
        .text()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
