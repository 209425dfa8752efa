//! Today's devotion: everything a front end shows for one calendar day.

use crate::plan::PlanStore;
use crate::resolver::VerseResolver;
use crate::source::VerseSource;
use chrono::{Datelike, NaiveDate};

/// Memorization part of a devotion
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MemorizationOfDay {
    /// The rotation is empty
    Unset,
    Verse {
        /// Position in the plan, for editing the custom text
        index: usize,
        reference: String,
        text: String,
        has_custom_text: bool,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DailyDevotion {
    pub date: NaiveDate,
    pub day_of_year: u32,
    pub reading_passages: Vec<String>,
    pub memorization: MemorizationOfDay,
}

/// Compose the devotion for `date`
///
/// Custom text wins over resolved text; an empty resolution is replaced by a
/// short notice naming the reference.
pub fn compose_devotion<S: VerseSource>(
    plan: &PlanStore,
    resolver: &mut VerseResolver<S>,
    date: NaiveDate,
) -> DailyDevotion {
    let memorization = match plan.daily_memorization_index_on(date) {
        None => MemorizationOfDay::Unset,
        Some(index) => {
            let verse = &plan.memorization_verses()[index];
            let reference = verse.reference();
            let (text, has_custom_text) = match verse.custom_text() {
                Some(custom) => (custom.to_string(), true),
                None => (resolver.resolve_reference(&reference), false),
            };
            let text = if text.trim().is_empty() {
                format!("获取 {} 内容时出现问题，请稍后再试。", reference)
            } else {
                text
            };
            MemorizationOfDay::Verse {
                index,
                reference: reference.to_string(),
                text,
                has_custom_text,
            }
        }
    };

    DailyDevotion {
        date,
        day_of_year: date.ordinal(),
        reading_passages: plan.daily_reading_passages(),
        memorization,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::VerseCache;
    use crate::source::OfflineSource;

    fn setup(dir: &std::path::Path) -> (PlanStore, VerseResolver<OfflineSource>) {
        (
            PlanStore::in_dir(dir),
            VerseResolver::new(VerseCache::in_dir(dir), OfflineSource),
        )
    }

    #[test]
    fn test_starter_plan_devotion() {
        let temp_dir = tempfile::tempdir().unwrap();
        let (plan, mut resolver) = setup(temp_dir.path());
        let date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();

        let devotion = compose_devotion(&plan, &mut resolver, date);

        assert_eq!(devotion.day_of_year, 32);
        assert_eq!(devotion.reading_passages, vec!["诗篇 1".to_string()]);
        match devotion.memorization {
            MemorizationOfDay::Verse {
                index,
                reference,
                text,
                has_custom_text,
            } => {
                assert_eq!(index, 0);
                assert_eq!(reference, "约翰福音 3:16-16");
                // Offline: near-miss from the built-in table
                assert!(text.starts_with("神爱世人"));
                assert!(!has_custom_text);
            }
            MemorizationOfDay::Unset => panic!("expected a verse"),
        }
    }

    #[test]
    fn test_custom_text_overrides_resolution() {
        let temp_dir = tempfile::tempdir().unwrap();
        let (mut plan, mut resolver) = setup(temp_dir.path());
        plan.update_verse_text(0, "自定义经文").unwrap();

        let devotion = compose_devotion(
            &plan,
            &mut resolver,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        );

        assert!(matches!(
            devotion.memorization,
            MemorizationOfDay::Verse { ref text, has_custom_text: true, .. } if text == "自定义经文"
        ));
        assert!(resolver.cache().is_empty());
    }

    #[test]
    fn test_unset_when_rotation_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let (mut plan, mut resolver) = setup(temp_dir.path());
        plan.remove_memorization_verse(0).unwrap();

        let devotion = compose_devotion(
            &plan,
            &mut resolver,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        );
        assert_eq!(devotion.memorization, MemorizationOfDay::Unset);
    }
}
