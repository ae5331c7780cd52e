use std::time::Duration;

use crate::config::HttpConfig;
use crate::error::IngestError;
use crate::ingest::{ingest_text, IngestReport};
use crate::source::{resolve, InputSource};
use crate::store::RecipeStore;

/// Builder for configuring and executing an ingestion run
#[derive(Debug, Default)]
pub struct RecipeIngesterBuilder {
    source: Option<InputSource>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl RecipeIngesterBuilder {
    /// Set the input source to a URL
    ///
    /// # Example
    /// ```
    /// use recipe_ingest::RecipeIngester;
    ///
    /// let builder = RecipeIngester::builder()
    ///     .url("https://example.com/recipes");
    /// ```
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.source = Some(InputSource::Url(url.into()));
        self
    }

    /// Set the input source to pasted text
    ///
    /// # Example
    /// ```
    /// use recipe_ingest::RecipeIngester;
    ///
    /// let builder = RecipeIngester::builder()
    ///     .text("2 cups flour\nInstructions\nMix everything together well.");
    /// ```
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.source = Some(InputSource::Text(text.into()));
        self
    }

    /// Set the input source to an uploaded file's bytes
    ///
    /// The bytes are decoded as UTF-8 before processing; anything else
    /// fails the run with a decode error.
    pub fn file_bytes(mut self, bytes: Vec<u8>) -> Self {
        self.source = Some(InputSource::FileBytes(bytes));
        self
    }

    /// Set a timeout for HTTP requests (URL sources only)
    ///
    /// # Example
    /// ```
    /// use recipe_ingest::RecipeIngester;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeIngester::builder()
    ///     .url("https://example.com/recipes")
    ///     .timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Override the user agent sent with page requests
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Resolve the source and ingest every recipe found into `store`.
    ///
    /// # Errors
    /// Returns `IngestError` if:
    /// - No input source was specified
    /// - The URL fetch fails
    /// - File bytes are not valid UTF-8
    ///
    /// Store failures for individual recipes do not fail the run; they
    /// are counted in the returned report.
    pub async fn run(self, store: &mut dyn RecipeStore) -> Result<IngestReport, IngestError> {
        let source = self.source.ok_or_else(|| {
            IngestError::Builder(
                "No input source specified. Use .url(), .text() or .file_bytes()".to_string(),
            )
        })?;

        let mut http = HttpConfig::default();
        if let Some(timeout) = self.timeout {
            http.timeout_secs = timeout.as_secs();
        }
        if let Some(agent) = self.user_agent {
            http.user_agent = agent;
        }

        let raw = resolve(source, &http).await?;
        Ok(ingest_text(&raw, store))
    }
}

/// Main entry point for the builder API
pub struct RecipeIngester;

impl RecipeIngester {
    /// Creates a new builder for an ingestion run
    ///
    /// # Example
    /// ```
    /// use recipe_ingest::RecipeIngester;
    ///
    /// let builder = RecipeIngester::builder();
    /// ```
    pub fn builder() -> RecipeIngesterBuilder {
        RecipeIngesterBuilder::default()
    }
}
