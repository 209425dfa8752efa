//! Verse resolution: cache, built-in table, remote source, placeholder.
//!
//! Resolution never fails. Every call performs at most one cache write and at
//! most one remote lookup; there is no retry.

use crate::cache::VerseCache;
use crate::source::{LookupError, VerseSource};
use crate::types::Reference;
use crate::verses;

pub struct VerseResolver<S> {
    cache: VerseCache,
    source: S,
}

impl<S: VerseSource> VerseResolver<S> {
    pub fn new(cache: VerseCache, source: S) -> Self {
        Self { cache, source }
    }

    pub fn cache(&self) -> &VerseCache {
        &self.cache
    }

    /// Resolve the text of `book chapter:verse_start[-verse_end]`
    pub fn resolve(
        &mut self,
        book: &str,
        chapter: u32,
        verse_start: u32,
        verse_end: Option<u32>,
    ) -> String {
        let reference = Reference::verses(book, chapter, verse_start, verse_end);
        self.resolve_reference(&reference)
    }

    pub fn resolve_reference(&mut self, reference: &Reference) -> String {
        let key = reference.cache_key();

        if let Some(text) = self.cache.get(&key) {
            tracing::debug!("Cache hit for {}", key);
            return text.to_string();
        }

        if let Some(text) = verses::lookup(&key) {
            tracing::debug!("Built-in verse for {}", key);
            self.remember(&key, text);
            return text.to_string();
        }

        let passage = reference.to_string();
        let fetched = self
            .source
            .fetch(&passage)
            .map(|segments| segments.join(" "))
            .and_then(|text| {
                if text.trim().is_empty() {
                    Err(LookupError::NoVerses)
                } else {
                    Ok(text)
                }
            });

        match fetched {
            Ok(text) => {
                tracing::info!("Fetched {} from remote source", passage);
                self.remember(&key, &text);
                text
            }
            Err(e) => self.fallback(reference, &key, e),
        }
    }

    /// Near-miss from the same chapter, else a placeholder
    fn fallback(&mut self, reference: &Reference, key: &str, error: LookupError) -> String {
        tracing::warn!("Lookup of {} failed: {}", reference, error);

        if let Some((near_key, text)) = verses::first_with_prefix(&reference.chapter_key_prefix())
        {
            tracing::info!("Using built-in {} in place of {}", near_key, key);
            return text.to_string();
        }

        if error.is_hard() {
            return format!("经文 {} 暂时无法获取：{}", reference, error);
        }

        let placeholder = format!("经文 {} 暂时无法获取，请稍后再试。", reference);
        self.remember(key, &placeholder);
        placeholder
    }

    fn remember(&mut self, key: &str, text: &str) {
        if let Err(e) = self.cache.insert(key, text) {
            tracing::warn!(
                "Failed to persist verse cache {:?}: {}",
                self.cache.path(),
                e
            );
        }
    }
}

/// Text shown for a whole-chapter reading: the chapter reference itself
pub fn chapter_reference(book: &str, chapter: u32) -> String {
    Reference::chapter(book, chapter).to_string()
}
