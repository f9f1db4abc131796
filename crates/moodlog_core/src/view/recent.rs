//! Recent-entries pager.
//!
//! Shows one calendar day at a time and steps between days that have
//! entries. The draft is listed with committed entries but cannot be removed.

use crate::model::entry::{EntryDate, MoodDraft, MoodEntry};
use crate::model::mood::MoodDefinition;
use crate::view::days::{local_day, sorted_days_desc};
use chrono::{NaiveDate, TimeZone};
use std::collections::BTreeMap;

/// One row in the day panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentItem<'a> {
    pub date: EntryDate,
    pub mood: Option<&'a MoodDefinition>,
    pub activities: &'a [String],
    pub note: &'a str,
    /// `false` for the draft row.
    pub removable: bool,
}

impl<'a> RecentItem<'a> {
    fn from_entry(entry: &'a MoodEntry) -> Self {
        Self {
            date: entry.date,
            mood: Some(&entry.mood),
            activities: &entry.activities,
            note: &entry.note,
            removable: true,
        }
    }

    fn from_draft(draft: &'a MoodDraft) -> Self {
        Self {
            date: draft.date,
            mood: draft.mood.as_ref(),
            activities: &draft.activities,
            note: &draft.note,
            removable: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecentEntries<'a> {
    groups: BTreeMap<NaiveDate, Vec<RecentItem<'a>>>,
    days_desc: Vec<NaiveDate>,
    today: NaiveDate,
    current: NaiveDate,
}

impl<'a> RecentEntries<'a> {
    /// Builds the pager positioned on `today`.
    pub fn new<Tz: TimeZone>(
        entries: &'a [MoodEntry],
        draft: Option<&'a MoodDraft>,
        today: NaiveDate,
        tz: &Tz,
    ) -> Self {
        let mut groups: BTreeMap<NaiveDate, Vec<RecentItem<'a>>> = BTreeMap::new();
        let items = draft
            .map(RecentItem::from_draft)
            .into_iter()
            .chain(entries.iter().map(RecentItem::from_entry));
        for item in items {
            groups
                .entry(local_day(&item.date, tz))
                .or_default()
                .push(item);
        }
        let days_desc = sorted_days_desc(&groups);

        Self {
            groups,
            days_desc,
            today,
            current: today,
        }
    }

    pub fn current_day(&self) -> NaiveDate {
        self.current
    }

    /// Days with at least one row, newest first.
    pub fn days(&self) -> &[NaiveDate] {
        &self.days_desc
    }

    /// Rows for the current day; empty when nothing was logged.
    pub fn items(&self) -> &[RecentItem<'a>] {
        self.groups
            .get(&self.current)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether an older day with entries exists.
    ///
    /// When the current day has no entries at all, any logged day counts as
    /// older, so the pager can always jump back into history.
    pub fn has_previous(&self) -> bool {
        match self.current_index() {
            Some(index) => index + 1 < self.days_desc.len(),
            None => !self.days_desc.is_empty(),
        }
    }

    /// Whether a newer day with entries exists; always `false` on today.
    pub fn has_next(&self) -> bool {
        self.current != self.today && self.current_index().is_some_and(|index| index > 0)
    }

    /// Steps to the next older day. Returns `false` when already oldest.
    pub fn previous_day(&mut self) -> bool {
        let target = match self.current_index() {
            Some(index) => self.days_desc.get(index + 1),
            None => self.days_desc.first(),
        };
        self.move_to(target.copied())
    }

    /// Steps to the next newer day. Returns `false` when already newest.
    pub fn next_day(&mut self) -> bool {
        let target = self
            .current_index()
            .and_then(|index| index.checked_sub(1))
            .and_then(|index| self.days_desc.get(index));
        self.move_to(target.copied())
    }

    fn move_to(&mut self, target: Option<NaiveDate>) -> bool {
        match target {
            Some(day) => {
                self.current = day;
                true
            }
            None => false,
        }
    }

    fn current_index(&self) -> Option<usize> {
        self.days_desc.iter().position(|day| *day == self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::RecentEntries;
    use crate::model::entry::{MoodDraft, MoodEntry};
    use crate::model::mood::builtin_mood;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn entry(day: u32, label: &str) -> MoodEntry {
        MoodEntry {
            date: Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap(),
            mood: builtin_mood(label).unwrap(),
            activities: Vec::new(),
            note: String::new(),
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn navigates_between_logged_days() {
        let entries = vec![entry(1, "Sad"), entry(3, "Happy"), entry(5, "Calm")];
        let mut pager = RecentEntries::new(&entries, None, day(5), &Utc);
        assert_eq!(pager.items().len(), 1);
        assert!(pager.has_previous());
        assert!(!pager.has_next());

        assert!(pager.previous_day());
        assert_eq!(pager.current_day(), day(3));
        assert!(pager.has_next());

        assert!(pager.previous_day());
        assert_eq!(pager.current_day(), day(1));
        assert!(!pager.has_previous());
        assert!(!pager.previous_day());

        assert!(pager.next_day());
        assert!(pager.next_day());
        assert_eq!(pager.current_day(), day(5));
        assert!(!pager.next_day());
    }

    #[test]
    fn empty_today_jumps_to_newest_logged_day() {
        let entries = vec![entry(1, "Sad"), entry(3, "Happy")];
        let mut pager = RecentEntries::new(&entries, None, day(10), &Utc);
        assert!(pager.items().is_empty());
        assert!(pager.has_previous());
        assert!(!pager.has_next());
        assert!(pager.previous_day());
        assert_eq!(pager.current_day(), day(3));
    }

    #[test]
    fn draft_is_listed_first_and_not_removable() {
        let entries = vec![entry(5, "Sad")];
        let draft = MoodDraft::new(
            builtin_mood("Happy").unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 5, 18, 0, 0).unwrap(),
        );
        let pager = RecentEntries::new(&entries, Some(&draft), day(5), &Utc);
        let items = pager.items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].mood.unwrap().label, "Happy");
        assert!(!items[0].removable);
        assert!(items[1].removable);
    }
}
