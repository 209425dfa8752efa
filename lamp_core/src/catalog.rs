//! Reference catalog of the 66 canonical books.
//!
//! Book names follow the Chinese Union Version. The table is static; lookups
//! never fail and unknown books report zero chapters.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use std::ops::RangeInclusive;

/// Number of Old Testament books at the head of the canonical order
pub const OLD_TESTAMENT_LEN: usize = 39;

/// Books in traditional canonical order with their chapter counts
static BOOKS: [(&str, u32); 66] = [
    // Old Testament
    ("创世记", 50),
    ("出埃及记", 40),
    ("利未记", 27),
    ("民数记", 36),
    ("申命记", 34),
    ("约书亚记", 24),
    ("士师记", 21),
    ("路得记", 4),
    ("撒母耳记上", 31),
    ("撒母耳记下", 24),
    ("列王纪上", 22),
    ("列王纪下", 25),
    ("历代志上", 29),
    ("历代志下", 36),
    ("以斯拉记", 10),
    ("尼希米记", 13),
    ("以斯帖记", 10),
    ("约伯记", 42),
    ("诗篇", 150),
    ("箴言", 31),
    ("传道书", 12),
    ("雅歌", 8),
    ("以赛亚书", 66),
    ("耶利米书", 52),
    ("耶利米哀歌", 5),
    ("以西结书", 48),
    ("但以理书", 12),
    ("何西阿书", 14),
    ("约珥书", 3),
    ("阿摩司书", 9),
    ("俄巴底亚书", 1),
    ("约拿书", 4),
    ("弥迦书", 7),
    ("那鸿书", 3),
    ("哈巴谷书", 3),
    ("西番雅书", 3),
    ("哈该书", 2),
    ("撒迦利亚书", 14),
    ("玛拉基书", 4),
    // New Testament
    ("马太福音", 28),
    ("马可福音", 16),
    ("路加福音", 24),
    ("约翰福音", 21),
    ("使徒行传", 28),
    ("罗马书", 16),
    ("哥林多前书", 16),
    ("哥林多后书", 13),
    ("加拉太书", 6),
    ("以弗所书", 6),
    ("腓立比书", 4),
    ("歌罗西书", 4),
    ("帖撒罗尼迦前书", 5),
    ("帖撒罗尼迦后书", 3),
    ("提摩太前书", 6),
    ("提摩太后书", 4),
    ("提多书", 3),
    ("腓利门书", 1),
    ("希伯来书", 13),
    ("雅各书", 5),
    ("彼得前书", 5),
    ("彼得后书", 3),
    ("约翰一书", 5),
    ("约翰二书", 1),
    ("约翰三书", 1),
    ("犹大书", 1),
    ("启示录", 22),
];

static CANONICAL_ORDER: Lazy<Vec<&'static str>> =
    Lazy::new(|| BOOKS.iter().map(|(name, _)| *name).collect());

static CHAPTER_COUNTS: Lazy<HashMap<&'static str, u32>> =
    Lazy::new(|| BOOKS.iter().copied().collect());

/// The two halves of the canon
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Testament {
    Old,
    New,
}

/// Number of chapters in `book`, or 0 if the book is unknown
pub fn chapter_count(book: &str) -> u32 {
    CHAPTER_COUNTS.get(book).copied().unwrap_or(0)
}

/// All 66 book names, Old Testament first
pub fn canonical_order() -> &'static [&'static str] {
    &CANONICAL_ORDER
}

pub fn is_known_book(book: &str) -> bool {
    CHAPTER_COUNTS.contains_key(book)
}

pub fn testament_of(book: &str) -> Option<Testament> {
    let position = canonical_order().iter().position(|name| *name == book)?;
    if position < OLD_TESTAMENT_LEN {
        Some(Testament::Old)
    } else {
        Some(Testament::New)
    }
}

/// Books of one testament, in canonical order
pub fn books_in(testament: Testament) -> &'static [&'static str] {
    let (old, new) = canonical_order().split_at(OLD_TESTAMENT_LEN);
    match testament {
        Testament::Old => old,
        Testament::New => new,
    }
}

/// Selectable chapters of `book`; empty for unknown books
pub fn chapters(book: &str) -> RangeInclusive<u32> {
    1..=chapter_count(book)
}

/// Validate the catalog and the built-in verse table for consistency
///
/// Returns a list of validation errors, or empty Vec if valid.
pub fn validate() -> Vec<String> {
    let mut errors = Vec::new();

    if BOOKS.len() != 66 {
        errors.push(format!("Catalog has {} books, expected 66", BOOKS.len()));
    }

    let mut seen = HashSet::new();
    for (name, chapters) in BOOKS.iter() {
        if name.is_empty() {
            errors.push("Book has empty name".to_string());
        }
        if !seen.insert(*name) {
            errors.push(format!("Book '{}' listed more than once", name));
        }
        if *chapters == 0 {
            errors.push(format!("Book '{}' has no chapters", name));
        }
    }

    if books_in(Testament::New).len() != 27 {
        errors.push(format!(
            "New Testament has {} books, expected 27",
            books_in(Testament::New).len()
        ));
    }

    // Built-in verse keys must point into the catalog
    for (key, text) in crate::verses::entries() {
        if text.is_empty() {
            errors.push(format!("Built-in verse '{}' has empty text", key));
        }
        let mut parts = key.split('_');
        let book = parts.next().unwrap_or_default();
        let chapter = parts.next().and_then(|c| c.parse::<u32>().ok());
        match chapter {
            Some(chapter) if chapter >= 1 && chapter <= chapter_count(book) => {}
            _ => errors.push(format!(
                "Built-in verse '{}' does not reference a catalog chapter",
                key
            )),
        }
        let verses: Vec<Option<u32>> = parts.map(|v| v.parse::<u32>().ok()).collect();
        if verses.is_empty() || verses.len() > 2 || verses.iter().any(Option::is_none) {
            errors.push(format!("Built-in verse '{}' has a malformed verse part", key));
        }
    }

    errors
}
