//! Transient notification surface.
//!
//! Notices are fire-and-forget; no notifier can reject or acknowledge one.

use log::info;
use std::cell::RefCell;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

/// Success notice raised by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    MoodAdded,
    EntryRemoved,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Self::MoodAdded => "Mood added! Check Recent entries",
            Self::EntryRemoved => "Mood entry removed successfully",
        }
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Default notifier writing notices to the core log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        info!("event=notice module=store status=ok notice={notice:?}");
    }
}

/// Notifier that keeps every notice, for hosts that render them later.
///
/// Clones share the same list.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notices: Rc<RefCell<Vec<Notice>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns all recorded notices, oldest first.
    pub fn drain(&self) -> Vec<Notice> {
        self.notices.borrow_mut().drain(..).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::{Notice, Notifier, RecordingNotifier};

    #[test]
    fn recording_notifier_drains_in_order() {
        let notifier = RecordingNotifier::new();
        let handle = notifier.clone();
        notifier.notify(Notice::MoodAdded);
        notifier.notify(Notice::EntryRemoved);
        assert_eq!(handle.drain(), vec![Notice::MoodAdded, Notice::EntryRemoved]);
        assert!(handle.drain().is_empty());
    }

    #[test]
    fn notice_messages_match_ui_copy() {
        assert_eq!(Notice::MoodAdded.to_string(), "Mood added! Check Recent entries");
        assert_eq!(
            Notice::EntryRemoved.message(),
            "Mood entry removed successfully"
        );
    }
}
