//! Outbound verse lookup.
//!
//! The resolver only depends on the [`VerseSource`] trait. The production
//! implementation queries getbible.net; [`OfflineSource`] is used when remote
//! lookups are turned off.

use crate::config::LookupConfig;
use reqwest::blocking::Client;
use serde_json::Value;

/// Why a remote lookup produced no text
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("online lookup disabled")]
    Disabled,

    #[error("request timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("malformed payload: {0}")]
    Malformed(String),

    #[error("payload contained no verses")]
    NoVerses,
}

impl LookupError {
    /// Hard failures say nothing about the reference itself, so their
    /// placeholder must not be cached.
    pub fn is_hard(&self) -> bool {
        matches!(self, LookupError::Disabled)
    }
}

/// Something that can fetch verse text for a human-readable reference
pub trait VerseSource {
    /// Fetch the verse segments for `reference` (e.g. `约翰福音 3:16-18`),
    /// in the order the service returned them.
    fn fetch(&self, reference: &str) -> Result<Vec<String>, LookupError>;
}

impl<T: VerseSource + ?Sized> VerseSource for &T {
    fn fetch(&self, reference: &str) -> Result<Vec<String>, LookupError> {
        (**self).fetch(reference)
    }
}

impl<T: VerseSource + ?Sized> VerseSource for Box<T> {
    fn fetch(&self, reference: &str) -> Result<Vec<String>, LookupError> {
        (**self).fetch(reference)
    }
}

/// Source used when remote lookups are turned off
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineSource;

impl VerseSource for OfflineSource {
    fn fetch(&self, _reference: &str) -> Result<Vec<String>, LookupError> {
        Err(LookupError::Disabled)
    }
}

/// getbible.net JSON(P) passage lookup
pub struct GetBibleSource {
    client: Client,
    base_url: String,
    version: String,
}

impl GetBibleSource {
    pub fn new(config: &LookupConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            version: config.version.clone(),
        })
    }
}

impl VerseSource for GetBibleSource {
    fn fetch(&self, reference: &str) -> Result<Vec<String>, LookupError> {
        tracing::debug!("Requesting {} from {}", reference, self.base_url);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("passage", reference), ("version", self.version.as_str())])
            .send()
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body = response.text().map_err(classify)?;
        parse_payload(&body)
    }
}

fn classify(e: reqwest::Error) -> LookupError {
    if e.is_timeout() {
        LookupError::Timeout
    } else {
        LookupError::Transport(e.to_string())
    }
}

/// Build the configured source
///
/// Falls back to [`OfflineSource`] if lookups are disabled or the HTTP client
/// cannot be created.
pub fn from_config(config: &LookupConfig) -> Box<dyn VerseSource> {
    if !config.enabled {
        tracing::info!("Remote verse lookup disabled");
        return Box::new(OfflineSource);
    }

    match GetBibleSource::new(config) {
        Ok(source) => Box::new(source),
        Err(e) => {
            tracing::warn!("Unable to create HTTP client: {}. Working offline.", e);
            Box::new(OfflineSource)
        }
    }
}

/// Extract verse segments from a getbible.net response body
///
/// Accepts plain JSON or a JSONP body wrapped as `(...)` or `(...);`.
/// Expected shape: `{"book": [{"chapter": {"16": {"verse": "..."}}}]}`.
pub fn parse_payload(body: &str) -> Result<Vec<String>, LookupError> {
    let mut text = body.trim();
    if text.is_empty() {
        return Err(LookupError::NoVerses);
    }

    if let Some(stripped) = text.strip_suffix(';') {
        text = stripped.trim_end();
    }
    if let Some(inner) = text.strip_prefix('(').and_then(|t| t.strip_suffix(')')) {
        text = inner;
    }

    let data: Value =
        serde_json::from_str(text).map_err(|e| LookupError::Malformed(e.to_string()))?;

    let chapter = data
        .get("book")
        .ok_or_else(|| LookupError::Malformed("missing 'book'".into()))?
        .get(0)
        .and_then(|book| book.get("chapter"))
        .and_then(Value::as_object)
        .ok_or_else(|| LookupError::Malformed("missing 'chapter' in first book".into()))?;

    let segments: Vec<String> = chapter
        .values()
        .filter_map(|info| info.get("verse").and_then(Value::as_str))
        .map(|verse| verse.trim().to_string())
        .collect();

    if segments.is_empty() {
        return Err(LookupError::NoVerses);
    }
    Ok(segments)
}
