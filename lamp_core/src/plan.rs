//! Study plan store.
//!
//! Holds the reading list and the memorization rotation. The plan is read once
//! when the store is opened and every successful mutation rewrites the plan
//! file before returning.

use crate::persist;
use crate::types::{MemorizationVerse, ReadingPassage, Reference, StudyPlan};
use crate::Result;
use chrono::{Datelike, Local, NaiveDate};
use std::path::{Path, PathBuf};

/// File name of the plan inside the data directory
pub const PLAN_FILE: &str = "study_plan.json";

pub struct PlanStore {
    path: PathBuf,
    plan: StudyPlan,
}

impl PlanStore {
    /// Open the plan stored at `path`
    ///
    /// If the file is missing or corrupt, the starter plan is used and
    /// written back. A failure to write it is logged, not returned.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match persist::read_json::<StudyPlan>(&path, "study plan") {
            Some(plan) => Self { path, plan },
            None => {
                let store = Self {
                    path,
                    plan: StudyPlan::starter(),
                };
                if let Err(e) = store.save() {
                    tracing::warn!("Failed to write starter plan to {:?}: {}", store.path, e);
                }
                store
            }
        }
    }

    /// Plan that lives at `<data_dir>/study_plan.json`
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::open(data_dir.join(PLAN_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn plan(&self) -> &StudyPlan {
        &self.plan
    }

    pub fn reading_passages(&self) -> &[ReadingPassage] {
        &self.plan.reading_passages
    }

    pub fn memorization_verses(&self) -> &[MemorizationVerse] {
        &self.plan.memorization_verses
    }

    fn save(&self) -> Result<()> {
        persist::write_json(&self.path, &self.plan)
    }

    /// Write `plan` to disk, then make it the current plan
    ///
    /// On a failed write the in-memory plan is left untouched.
    fn commit(&mut self, plan: StudyPlan) -> Result<()> {
        persist::write_json(&self.path, &plan)?;
        self.plan = plan;
        Ok(())
    }

    /// Append a chapter to the reading list
    ///
    /// Returns `Ok(false)` if the chapter is not in the book or the passage
    /// is already listed.
    pub fn add_reading_passage(&mut self, book: &str, chapter: u32) -> Result<bool> {
        if !Reference::chapter(book, chapter).is_valid() {
            tracing::debug!("Rejected reading passage {} {}: no such chapter", book, chapter);
            return Ok(false);
        }

        let exists = self
            .plan
            .reading_passages
            .iter()
            .any(|p| p.book == book && p.chapter == chapter);
        if exists {
            tracing::debug!("Rejected reading passage {} {}: already listed", book, chapter);
            return Ok(false);
        }

        let mut plan = self.plan.clone();
        plan.reading_passages.push(ReadingPassage {
            book: book.to_string(),
            chapter,
        });
        self.commit(plan)?;
        tracing::info!("Added reading passage {} {}", book, chapter);
        Ok(true)
    }

    pub fn remove_reading_passage(&mut self, index: usize) -> Result<bool> {
        if index >= self.plan.reading_passages.len() {
            return Ok(false);
        }
        let mut plan = self.plan.clone();
        let removed = plan.reading_passages.remove(index);
        self.commit(plan)?;
        tracing::info!("Removed reading passage {} {}", removed.book, removed.chapter);
        Ok(true)
    }

    /// Append a verse to the memorization rotation
    ///
    /// Duplicates are allowed. Returns `Ok(false)` if the chapter is not in
    /// the book, `verse_start` is zero, or `verse_end` precedes `verse_start`.
    /// A `verse_end` of zero means no range.
    pub fn add_memorization_verse(
        &mut self,
        book: &str,
        chapter: u32,
        verse_start: u32,
        verse_end: Option<u32>,
        custom_text: Option<String>,
    ) -> Result<bool> {
        let reference = Reference::verses(book, chapter, verse_start, verse_end);
        if !reference.is_valid() {
            tracing::debug!("Rejected memorization verse {}", reference);
            return Ok(false);
        }

        let mut plan = self.plan.clone();
        plan.memorization_verses.push(MemorizationVerse {
            book: book.to_string(),
            chapter,
            verse_start,
            verse_end: reference.verse_end,
            custom_text,
        });
        self.commit(plan)?;
        tracing::info!("Added memorization verse {}", reference);
        Ok(true)
    }

    pub fn remove_memorization_verse(&mut self, index: usize) -> Result<bool> {
        if index >= self.plan.memorization_verses.len() {
            return Ok(false);
        }
        let mut plan = self.plan.clone();
        let removed = plan.memorization_verses.remove(index);
        self.commit(plan)?;
        tracing::info!("Removed memorization verse {}", removed.reference());
        Ok(true)
    }

    /// Replace the custom text of the verse at `index`
    pub fn update_verse_text(&mut self, index: usize, text: impl Into<String>) -> Result<bool> {
        if index >= self.plan.memorization_verses.len() {
            return Ok(false);
        }
        let mut plan = self.plan.clone();
        plan.memorization_verses[index].custom_text = Some(text.into());
        self.commit(plan)?;
        Ok(true)
    }

    /// Every reading passage, formatted as `"{book} {chapter}"`
    ///
    /// The reading list does not rotate; all of it is read every day.
    pub fn daily_reading_passages(&self) -> Vec<String> {
        self.plan
            .reading_passages
            .iter()
            .map(|p| p.reference().to_string())
            .collect()
    }

    /// Today's memorization verse, by the local calendar
    pub fn daily_memorization_verse(&self) -> Option<&MemorizationVerse> {
        self.daily_memorization_verse_on(Local::now().date_naive())
    }

    pub fn daily_memorization_verse_on(&self, date: NaiveDate) -> Option<&MemorizationVerse> {
        self.daily_memorization_index_on(date)
            .map(|index| &self.plan.memorization_verses[index])
    }

    /// Rotation index for `date`: `(day_of_year - 1) mod len`
    pub fn daily_memorization_index_on(&self, date: NaiveDate) -> Option<usize> {
        let len = self.plan.memorization_verses.len();
        if len == 0 {
            return None;
        }
        Some(date.ordinal0() as usize % len)
    }
}
