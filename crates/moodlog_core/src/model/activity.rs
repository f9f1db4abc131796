//! Activity tag catalog and set helpers.

/// Built-in activity tags, in display order.
pub const BUILTIN_ACTIVITIES: &[&str] = &[
    "Exercise",
    "Good sleep",
    "Work",
    "Socializing",
    "Reading",
    "Meditation",
    "Hobby",
    "Eating",
    "Watching Movies",
    "Gaming",
    "Traveling",
    "Shopping",
    "Listening to Music",
];

/// Returns the built-in activity tags as owned strings.
pub fn builtin_activities() -> Vec<String> {
    BUILTIN_ACTIVITIES.iter().map(|tag| (*tag).to_string()).collect()
}

/// Returns whether `label` is one of the built-in tags (exact match).
pub fn is_builtin_activity(label: &str) -> bool {
    BUILTIN_ACTIVITIES.contains(&label)
}

/// Returns `activities` with `label` flipped in or out.
///
/// Removal drops every occurrence; insertion appends at the end so the
/// remaining order is stable.
pub fn toggle_activity(activities: &[String], label: &str) -> Vec<String> {
    if activities.iter().any(|existing| existing == label) {
        activities
            .iter()
            .filter(|existing| existing.as_str() != label)
            .cloned()
            .collect()
    } else {
        let mut toggled = activities.to_vec();
        toggled.push(label.to_string());
        toggled
    }
}

/// Drops repeated labels, keeping the first occurrence of each.
pub fn dedup_activities(activities: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(activities.len());
    for label in activities {
        if !unique.contains(&label) {
            unique.push(label);
        }
    }
    unique
}
