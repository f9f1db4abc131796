//! Month calendar view model.
//!
//! # Invariants
//! - The grid starts on a Sunday and ends on a Saturday, so its length is a
//!   multiple of seven.
//! - Each cell shows at most one entry: the last one submitted that day.

use crate::model::entry::MoodEntry;
use crate::view::days::local_day;
use chrono::{Datelike, Days, Months, NaiveDate, TimeZone};
use std::collections::BTreeMap;

/// One cell of the month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay<'a> {
    pub date: NaiveDate,
    /// `false` for leading/trailing days borrowed from adjacent months.
    pub in_month: bool,
    pub entry: Option<&'a MoodEntry>,
}

/// Details panel for the highlighted day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySummary {
    /// Long date, e.g. `March 5, 2024`.
    pub title: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct MoodCalendar<'a> {
    today: NaiveDate,
    days: Vec<CalendarDay<'a>>,
    /// Shown entry per day across the whole journal, not just the grid.
    by_day: BTreeMap<NaiveDate, &'a MoodEntry>,
    selected: Option<NaiveDate>,
}

impl<'a> MoodCalendar<'a> {
    /// Builds the grid for the month containing `today`.
    pub fn for_month<Tz: TimeZone>(today: NaiveDate, entries: &'a [MoodEntry], tz: &Tz) -> Self {
        let mut by_day = BTreeMap::new();
        for entry in entries {
            by_day.insert(local_day(&entry.date, tz), entry);
        }

        let (first, last) = grid_bounds(today);
        let days = first
            .iter_days()
            .take_while(|date| *date <= last)
            .map(|date| CalendarDay {
                date,
                in_month: date.year() == today.year() && date.month() == today.month(),
                entry: by_day.get(&date).copied(),
            })
            .collect();

        Self {
            today,
            days,
            by_day,
            selected: None,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn days(&self) -> &[CalendarDay<'a>] {
        &self.days
    }

    /// Grid rows, Sunday first.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDay<'a>]> {
        self.days.chunks(7)
    }

    /// Highlights `date`; dates outside the visible weeks are accepted too.
    pub fn select(&mut self, date: NaiveDate) {
        self.selected = Some(date);
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// Summary for the highlighted day, or `None` when nothing is selected.
    pub fn selected_summary(&self) -> Option<DaySummary> {
        let date = self.selected?;
        let lines = match self.by_day.get(&date) {
            Some(entry) => vec![
                format!("Mood: {}", entry.mood.label),
                format!(
                    "Note: {}",
                    if entry.note.is_empty() {
                        "No note added"
                    } else {
                        entry.note.as_str()
                    }
                ),
            ],
            None => vec!["No mood logged for this day".to_string()],
        };

        Some(DaySummary {
            title: long_date(date),
            lines,
        })
    }
}

/// Formats a day as `March 5, 2024`.
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Short weekday headers in grid order.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

fn grid_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let month_start = today - Days::new(u64::from(today.day0()));
    let month_end = month_start
        .checked_add_months(Months::new(1))
        .and_then(|next_month| next_month.pred_opt())
        .unwrap_or(today);

    let lead = u64::from(month_start.weekday().num_days_from_sunday());
    let trail = 6 - u64::from(month_end.weekday().num_days_from_sunday());
    (month_start - Days::new(lead), month_end + Days::new(trail))
}

#[cfg(test)]
mod tests {
    use super::{long_date, MoodCalendar};
    use crate::model::entry::MoodEntry;
    use crate::model::mood::builtin_mood;
    use chrono::{Datelike, NaiveDate, TimeZone, Utc, Weekday};

    fn day(month: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, d).unwrap()
    }

    #[test]
    fn grid_covers_whole_weeks_around_month() {
        // March 2024 starts on a Friday and ends on a Sunday.
        let calendar = MoodCalendar::for_month(day(3, 15), &[], &Utc);
        let days = calendar.days();
        assert_eq!(days.len() % 7, 0);
        assert_eq!(days[0].date, day(2, 25));
        assert_eq!(days[0].date.weekday(), Weekday::Sun);
        assert_eq!(days.last().unwrap().date, day(4, 6));
        assert!(!days[0].in_month);
        assert_eq!(days.iter().filter(|cell| cell.in_month).count(), 31);
        assert_eq!(calendar.weeks().count(), 6);
    }

    #[test]
    fn selected_summary_reports_entry_or_absence() {
        let entries = vec![MoodEntry {
            date: Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap(),
            mood: builtin_mood("Excited").unwrap(),
            activities: Vec::new(),
            note: String::new(),
        }];
        let mut calendar = MoodCalendar::for_month(day(3, 15), &entries, &Utc);
        assert!(calendar.selected_summary().is_none());

        calendar.select(day(3, 5));
        let summary = calendar.selected_summary().unwrap();
        assert_eq!(summary.title, "March 5, 2024");
        assert_eq!(summary.lines, vec!["Mood: Excited", "Note: No note added"]);

        calendar.select(day(3, 6));
        assert_eq!(
            calendar.selected_summary().unwrap().lines,
            vec!["No mood logged for this day"]
        );
    }

    #[test]
    fn selecting_a_logged_day_outside_the_grid_reports_its_entry() {
        let entries = vec![MoodEntry {
            date: Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap(),
            mood: builtin_mood("Happy").unwrap(),
            activities: Vec::new(),
            note: "snow day".to_string(),
        }];
        let mut calendar = MoodCalendar::for_month(day(3, 15), &entries, &Utc);
        assert!(calendar.days().iter().all(|cell| cell.entry.is_none()));

        calendar.select(day(1, 10));
        let summary = calendar.selected_summary().unwrap();
        assert_eq!(summary.title, "January 10, 2024");
        assert_eq!(summary.lines, vec!["Mood: Happy", "Note: snow day"]);
    }

    #[test]
    fn later_entry_wins_the_day_cell() {
        let entries = vec![
            MoodEntry {
                date: Utc.with_ymd_and_hms(2024, 3, 5, 8, 0, 0).unwrap(),
                mood: builtin_mood("Sad").unwrap(),
                activities: Vec::new(),
                note: String::new(),
            },
            MoodEntry {
                date: Utc.with_ymd_and_hms(2024, 3, 5, 20, 0, 0).unwrap(),
                mood: builtin_mood("Calm").unwrap(),
                activities: Vec::new(),
                note: String::new(),
            },
        ];
        let calendar = MoodCalendar::for_month(day(3, 15), &entries, &Utc);
        let cell = calendar
            .days()
            .iter()
            .find(|cell| cell.date == day(3, 5))
            .unwrap();
        assert_eq!(cell.entry.unwrap().mood.label, "Calm");
    }

    #[test]
    fn long_date_has_no_zero_padding() {
        assert_eq!(long_date(day(1, 9)), "January 9, 2024");
    }
}
