//! Calendar-day grouping over committed entries.

use crate::model::entry::{EntryDate, MoodEntry};
use chrono::{NaiveDate, TimeZone};
use std::collections::BTreeMap;

/// Calendar day of `date` as seen in `tz`.
pub fn local_day<Tz: TimeZone>(date: &EntryDate, tz: &Tz) -> NaiveDate {
    date.with_timezone(tz).date_naive()
}

/// Groups entries by calendar day, keeping submission order within a day.
pub fn group_by_day<'a, Tz: TimeZone>(
    entries: &'a [MoodEntry],
    tz: &Tz,
) -> BTreeMap<NaiveDate, Vec<&'a MoodEntry>> {
    let mut groups: BTreeMap<NaiveDate, Vec<&'a MoodEntry>> = BTreeMap::new();
    for entry in entries {
        groups
            .entry(local_day(&entry.date, tz))
            .or_default()
            .push(entry);
    }
    groups
}

/// Group keys, newest day first.
pub fn sorted_days_desc<V>(groups: &BTreeMap<NaiveDate, V>) -> Vec<NaiveDate> {
    groups.keys().rev().copied().collect()
}

/// Entry shown for `day`; the last submitted one wins.
pub fn entry_for_day<'a, Tz: TimeZone>(
    entries: &'a [MoodEntry],
    day: NaiveDate,
    tz: &Tz,
) -> Option<&'a MoodEntry> {
    entries
        .iter()
        .rev()
        .find(|entry| local_day(&entry.date, tz) == day)
}

#[cfg(test)]
mod tests {
    use super::{entry_for_day, group_by_day, local_day, sorted_days_desc};
    use crate::model::entry::MoodEntry;
    use crate::model::mood::builtin_mood;
    use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};

    fn entry(day: u32, hour: u32, label: &str) -> MoodEntry {
        MoodEntry {
            date: Utc.with_ymd_and_hms(2024, 3, day, hour, 0, 0).unwrap(),
            mood: builtin_mood(label).unwrap(),
            activities: Vec::new(),
            note: String::new(),
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn groups_keep_submission_order_and_sort_desc() {
        let entries = vec![entry(2, 8, "Happy"), entry(1, 9, "Sad"), entry(2, 20, "Calm")];
        let groups = group_by_day(&entries, &Utc);
        assert_eq!(sorted_days_desc(&groups), vec![day(2), day(1)]);
        let labels: Vec<_> = groups[&day(2)]
            .iter()
            .map(|entry| entry.mood.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Happy", "Calm"]);
    }

    #[test]
    fn last_entry_of_day_wins() {
        let entries = vec![entry(2, 8, "Happy"), entry(2, 20, "Calm")];
        assert_eq!(
            entry_for_day(&entries, day(2), &Utc).unwrap().mood.label,
            "Calm"
        );
        assert!(entry_for_day(&entries, day(3), &Utc).is_none());
    }

    #[test]
    fn day_boundary_follows_time_zone() {
        let late = entry(1, 23, "Happy");
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(local_day(&late.date, &Utc), day(1));
        assert_eq!(local_day(&late.date, &plus_two), day(2));
    }
}
