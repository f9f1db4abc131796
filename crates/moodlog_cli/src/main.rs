//! CLI smoke entry point.
//!
//! # Responsibility
//! - Open the configured journal and print its derived views.
//! - Verify `moodlog_core` wiring without any UI runtime.

use chrono::Local;
use moodlog_core::view::calendar::{long_date, WEEKDAY_HEADERS};
use moodlog_core::{init_logging, MoodCalendar, MoodStore, RecentEntries, StoreConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = StoreConfig::from_env();
    if let Err(err) = init_logging(&config.log_level, &config.log_dir) {
        eprintln!("moodlog logging disabled: {err}");
    }

    let store = match MoodStore::open(&config) {
        Ok(store) => store,
        Err(err) => {
            log::error!("event=cli_open module=cli status=error error={err}");
            eprintln!("moodlog failed to open {}: {err}", config.db_path.display());
            return ExitCode::FAILURE;
        }
    };

    println!("moodlog_core version={}", moodlog_core::core_version());
    println!("journal={}", config.db_path.display());

    let moods = store
        .list_moods()
        .into_iter()
        .map(|mood| format!("{} {}", mood.emoji, mood.label))
        .collect::<Vec<_>>();
    println!("moods: {}", moods.join(", "));

    let today = Local::now().date_naive();
    let snapshot = store.snapshot();

    let calendar = MoodCalendar::for_month(today, snapshot.entries, &Local);
    println!();
    println!("{}", WEEKDAY_HEADERS.join("  "));
    for week in calendar.weeks() {
        let row = week
            .iter()
            .map(|cell| match (cell.in_month, cell.entry) {
                (false, _) => "  . ".to_string(),
                (true, Some(entry)) => format!(" {} ", entry.mood.emoji),
                (true, None) => format!("{:>3} ", cell.date.format("%-d")),
            })
            .collect::<String>();
        println!("{row}");
    }

    let recent = RecentEntries::new(snapshot.entries, snapshot.draft, today, &Local);
    println!();
    println!("{}", long_date(recent.current_day()));
    if recent.items().is_empty() {
        println!("  No entries for this date.");
    }
    for item in recent.items() {
        let label = item.mood.map_or("?", |mood| mood.label.as_str());
        println!(
            "  {} {label} [{}] {}",
            item.date.with_timezone(&Local).format("%H:%M"),
            item.activities.join(", "),
            item.note
        );
    }

    ExitCode::SUCCESS
}
