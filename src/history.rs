//! Append-only log of completed sessions.
//!
//! Entries record the duration that was configured when the countdown
//! completed, so later edits in settings do not rewrite the past. The log
//! is never reordered, filtered, or capped; it lives exactly as long as
//! the process.

use std::time::Duration;

use crate::config::TimerType;
use crate::i18n::{tr, Language, Text};
use crate::theme::Styles;

/// One completed session. Immutable once appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    /// The type that ran to completion.
    pub timer_type: TimerType,
    /// The duration configured for that type at completion time.
    pub duration: Duration,
}

/// The session history log.
#[derive(Debug, Clone, Default)]
pub struct Model {
    entries: Vec<Entry>,
}

/// Creates an empty log.
pub fn new() -> Model {
    Model::default()
}

impl Model {
    /// Appends `entry`, preserving insertion order. Never fails.
    pub fn append(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// The full ordered log.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Whether no session has completed yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of completed sessions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Renders the history panel: localized title, then one line per entry
    /// (type label colored per type, duration in whole minutes), or the
    /// localized placeholder when empty.
    pub fn view(&self, lang: Language, styles: &Styles) -> String {
        let mut lines = vec![styles.panel_title.render(tr(lang, Text::TimerHistory))];

        if self.entries.is_empty() {
            lines.push(styles.history_empty.render(tr(lang, Text::NoHistory)));
        } else {
            for entry in &self.entries {
                let label = styles
                    .entry(entry.timer_type)
                    .render(tr(lang, entry.timer_type.label()));
                let minutes = entry.duration.as_secs() / 60;
                let duration = styles
                    .entry_duration
                    .render(&format!("{} {}", minutes, tr(lang, Text::Minutes)));
                lines.push(format!("{label}  {duration}"));
            }
        }

        lines.join("\n")
    }
}
