use log::debug;

use crate::config::HttpConfig;
use crate::error::IngestError;
use crate::fetch::PageFetcher;

/// Where one ingestion run's raw text comes from
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Fetch page content from a URL and strip its markup
    Url(String),
    /// Use pasted text as-is
    Text(String),
    /// Decode an uploaded file's bytes as UTF-8 text
    FileBytes(Vec<u8>),
}

/// Resolve a source into a single raw text blob.
///
/// A fetch or decode failure aborts the whole ingestion; retry policy,
/// if any, belongs to the caller.
pub async fn resolve(source: InputSource, http: &HttpConfig) -> Result<String, IngestError> {
    match source {
        InputSource::Url(url) => {
            debug!("Resolving text from URL: {url}");
            PageFetcher::new(http)?.fetch_text(&url).await
        }
        InputSource::Text(text) => Ok(text),
        InputSource::FileBytes(bytes) => Ok(String::from_utf8(bytes)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn literal_text_passes_through() {
        let text = resolve(InputSource::Text("as-is".to_string()), &HttpConfig::default())
            .await
            .unwrap();
        assert_eq!(text, "as-is");
    }

    #[tokio::test]
    async fn file_bytes_decode_as_utf8() {
        let source = InputSource::FileBytes("1 cup rice".as_bytes().to_vec());
        let text = resolve(source, &HttpConfig::default()).await.unwrap();
        assert_eq!(text, "1 cup rice");
    }

    #[tokio::test]
    async fn invalid_utf8_is_a_decode_error() {
        let source = InputSource::FileBytes(vec![0xff, 0xfe, 0x00]);
        let err = resolve(source, &HttpConfig::default()).await.unwrap_err();
        assert!(matches!(err, IngestError::Decode(_)));
    }
}
