// src/notify.rs
//! Transient user-facing confirmations ("toasts") raised after save/unsave

use serde::Serialize;
use std::sync::Mutex;

use crate::app_log;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    pub fn job_saved() -> Self {
        Self::new("Job saved", "Job added to your saved list")
    }

    pub fn job_removed() -> Self {
        Self::new("Job removed", "Job removed from your saved list")
    }

    pub fn for_save_state(saved: bool) -> Self {
        if saved {
            Self::job_saved()
        } else {
            Self::job_removed()
        }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification);
}

/// Sends notifications to the log
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: &Notification) {
        app_log!(
            info,
            "{}: {}",
            notification.title,
            notification.description
        );
    }
}

/// Keeps every notification in memory
#[derive(Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.seen
            .lock()
            .map(|seen| seen.clone())
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(notification.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_save_state() {
        assert_eq!(Notification::for_save_state(true).title, "Job saved");
        assert_eq!(
            Notification::for_save_state(false).description,
            "Job removed from your saved list"
        );
    }

    #[test]
    fn test_recording_notifier() {
        let notifier = RecordingNotifier::new();
        notifier.notify(&Notification::job_saved());
        notifier.notify(&Notification::job_removed());

        let titles: Vec<String> = notifier
            .notifications()
            .into_iter()
            .map(|n| n.title)
            .collect();
        assert_eq!(titles, vec!["Job saved", "Job removed"]);
    }
}
