//! Core domain types for the Lamp study tracker.
//!
//! This module defines the fundamental types used throughout the system:
//! - References to passages and their display/cache forms
//! - Reading passages and memorization verses
//! - The persisted study plan

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Reference Types
// ============================================================================

/// A pointer to a Bible passage: book, chapter and an optional verse range
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Reference {
    pub book: String,
    pub chapter: u32,
    pub verse_start: Option<u32>,
    pub verse_end: Option<u32>,
}

impl Reference {
    /// Reference to a whole chapter
    pub fn chapter(book: impl Into<String>, chapter: u32) -> Self {
        Self {
            book: book.into(),
            chapter,
            verse_start: None,
            verse_end: None,
        }
    }

    /// Reference to a verse, or a verse range when `verse_end` is given
    ///
    /// A `verse_end` of zero is treated as absent.
    pub fn verses(
        book: impl Into<String>,
        chapter: u32,
        verse_start: u32,
        verse_end: Option<u32>,
    ) -> Self {
        Self {
            book: book.into(),
            chapter,
            verse_start: Some(verse_start),
            verse_end: verse_end.filter(|&end| end != 0),
        }
    }

    /// Key under which resolved text is cached: `book_chapter_start[_end]`.
    ///
    /// Chapter references have no verse component and key as `book_chapter`.
    pub fn cache_key(&self) -> String {
        match (self.verse_start, self.verse_end) {
            (Some(start), Some(end)) => {
                format!("{}_{}_{}_{}", self.book, self.chapter, start, end)
            }
            (Some(start), None) => format!("{}_{}_{}", self.book, self.chapter, start),
            (None, _) => format!("{}_{}", self.book, self.chapter),
        }
    }

    /// Prefix shared by every cache key in the same chapter
    pub fn chapter_key_prefix(&self) -> String {
        format!("{}_{}_", self.book, self.chapter)
    }

    /// Check the structural invariants against the catalog
    pub fn is_valid(&self) -> bool {
        let max_chapter = crate::catalog::chapter_count(&self.book);
        if self.chapter < 1 || self.chapter > max_chapter {
            return false;
        }
        match (self.verse_start, self.verse_end) {
            (Some(start), Some(end)) => start >= 1 && end >= start,
            (Some(start), None) => start >= 1,
            (None, Some(_)) => false,
            (None, None) => true,
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.book, self.chapter)?;
        if let Some(start) = self.verse_start {
            write!(f, ":{}", start)?;
            if let Some(end) = self.verse_end {
                write!(f, "-{}", end)?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// Plan Entries
// ============================================================================

/// A chapter the user reads every day
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReadingPassage {
    pub book: String,
    pub chapter: u32,
}

impl ReadingPassage {
    pub fn reference(&self) -> Reference {
        Reference::chapter(self.book.clone(), self.chapter)
    }
}

/// A verse (or verse range) in the memorization rotation
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemorizationVerse {
    pub book: String,
    pub chapter: u32,
    pub verse_start: u32,
    #[serde(default)]
    pub verse_end: Option<u32>,
    /// User-supplied text; overrides resolved text when non-empty
    #[serde(default)]
    pub custom_text: Option<String>,
}

impl MemorizationVerse {
    pub fn reference(&self) -> Reference {
        Reference::verses(
            self.book.clone(),
            self.chapter,
            self.verse_start,
            self.verse_end,
        )
    }

    /// Custom text, if the user supplied a non-empty one
    pub fn custom_text(&self) -> Option<&str> {
        self.custom_text.as_deref().filter(|text| !text.is_empty())
    }
}

// ============================================================================
// Study Plan
// ============================================================================

/// The persisted study plan
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StudyPlan {
    #[serde(default)]
    pub reading_passages: Vec<ReadingPassage>,
    #[serde(default)]
    pub memorization_verses: Vec<MemorizationVerse>,
}

impl StudyPlan {
    /// Plan used on first start or when the stored plan cannot be read:
    /// one reading passage (诗篇 1) and one memorization verse (约翰福音 3:16).
    pub fn starter() -> Self {
        Self {
            reading_passages: vec![ReadingPassage {
                book: "诗篇".into(),
                chapter: 1,
            }],
            memorization_verses: vec![MemorizationVerse {
                book: "约翰福音".into(),
                chapter: 3,
                verse_start: 16,
                verse_end: Some(16),
                custom_text: Some(String::new()),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_display() {
        assert_eq!(Reference::chapter("诗篇", 23).to_string(), "诗篇 23");
        assert_eq!(
            Reference::verses("约翰福音", 3, 16, None).to_string(),
            "约翰福音 3:16"
        );
        assert_eq!(
            Reference::verses("箴言", 3, 5, Some(6)).to_string(),
            "箴言 3:5-6"
        );
    }

    #[test]
    fn test_cache_key() {
        assert_eq!(
            Reference::verses("约翰福音", 3, 16, None).cache_key(),
            "约翰福音_3_16"
        );
        assert_eq!(
            Reference::verses("诗篇", 1, 1, Some(2)).cache_key(),
            "诗篇_1_1_2"
        );
        assert_eq!(
            Reference::verses("诗篇", 1, 1, Some(2)).chapter_key_prefix(),
            "诗篇_1_"
        );
    }

    #[test]
    fn test_zero_verse_end_is_absent() {
        let reference = Reference::verses("约翰福音", 3, 16, Some(0));
        assert_eq!(reference.verse_end, None);
        assert_eq!(reference.cache_key(), "约翰福音_3_16");
        assert_eq!(reference.to_string(), "约翰福音 3:16");
    }

    #[test]
    fn test_reference_validity() {
        assert!(Reference::verses("约翰福音", 3, 16, Some(16)).is_valid());
        assert!(Reference::chapter("启示录", 22).is_valid());
        assert!(!Reference::chapter("启示录", 23).is_valid());
        assert!(!Reference::chapter("不存在的书", 1).is_valid());
        assert!(!Reference::verses("约翰福音", 3, 16, Some(15)).is_valid());
        assert!(!Reference::verses("约翰福音", 0, 1, None).is_valid());
    }

    #[test]
    fn test_custom_text_empty_is_none() {
        let mut verse = StudyPlan::starter().memorization_verses.remove(0);
        assert_eq!(verse.custom_text(), None);

        verse.custom_text = Some("我的经文".into());
        assert_eq!(verse.custom_text(), Some("我的经文"));
    }

    #[test]
    fn test_plan_missing_fields_default_to_empty() {
        let plan: StudyPlan = serde_json::from_str("{}").unwrap();
        assert!(plan.reading_passages.is_empty());
        assert!(plan.memorization_verses.is_empty());

        let plan: StudyPlan = serde_json::from_str(
            r#"{"memorization_verses":[{"book":"诗篇","chapter":23,"verse_start":1}]}"#,
        )
        .unwrap();
        assert_eq!(plan.memorization_verses[0].verse_end, None);
        assert_eq!(plan.memorization_verses[0].custom_text, None);
    }
}
