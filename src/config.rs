//! Timer types and their configured durations.
//!
//! The three timer types are a fixed set; each maps to one configured
//! duration, defaulting to the classic 25/5/15 minute split. Durations are
//! only ever changed through [`Durations::set_minutes`], which silently
//! rejects anything that is not a positive whole number of minutes.

use std::time::Duration;

use crate::i18n::Text;

/// Default pomodoro length in minutes.
pub const DEFAULT_POMODORO_MINUTES: u64 = 25;
/// Default short break length in minutes.
pub const DEFAULT_SHORT_BREAK_MINUTES: u64 = 5;
/// Default long break length in minutes.
pub const DEFAULT_LONG_BREAK_MINUTES: u64 = 15;

/// The kind of countdown currently configured or running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerType {
    /// A focused-work interval.
    Pomodoro,
    /// A short rest between pomodoros.
    ShortBreak,
    /// A longer rest after a set of pomodoros.
    LongBreak,
}

impl TimerType {
    /// All timer types in display order.
    pub const ALL: [TimerType; 3] = [
        TimerType::Pomodoro,
        TimerType::ShortBreak,
        TimerType::LongBreak,
    ];

    /// The translation key for this type's label.
    pub fn label(&self) -> Text {
        match self {
            TimerType::Pomodoro => Text::Pomodoro,
            TimerType::ShortBreak => Text::ShortBreak,
            TimerType::LongBreak => Text::LongBreak,
        }
    }
}

/// Configured duration for each timer type.
///
/// Always fully populated; there is no "unset" state. A page of settings UI
/// sits in front of [`set_minutes`](Durations::set_minutes), but the setter
/// itself enforces the only validation rule this application has: minutes
/// must be strictly positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Durations {
    pomodoro: Duration,
    short_break: Duration,
    long_break: Duration,
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            pomodoro: Duration::from_secs(DEFAULT_POMODORO_MINUTES * 60),
            short_break: Duration::from_secs(DEFAULT_SHORT_BREAK_MINUTES * 60),
            long_break: Duration::from_secs(DEFAULT_LONG_BREAK_MINUTES * 60),
        }
    }
}

impl Durations {
    /// Creates the default 25/5/15 configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the configured duration for `timer_type`.
    pub fn get(&self, timer_type: TimerType) -> Duration {
        match timer_type {
            TimerType::Pomodoro => self.pomodoro,
            TimerType::ShortBreak => self.short_break,
            TimerType::LongBreak => self.long_break,
        }
    }

    /// Returns the configured duration in whole minutes, for display and
    /// for prefilling the settings fields.
    pub fn minutes(&self, timer_type: TimerType) -> u64 {
        self.get(timer_type).as_secs() / 60
    }

    /// Sets the duration for `timer_type` to `minutes` minutes.
    ///
    /// Values that are zero or negative are rejected without mutating
    /// anything and without surfacing an error; the return value reports
    /// whether the configuration changed.
    pub fn set_minutes(&mut self, timer_type: TimerType, minutes: i64) -> bool {
        if minutes <= 0 {
            return false;
        }
        let duration = Duration::from_secs(minutes as u64 * 60);
        match timer_type {
            TimerType::Pomodoro => self.pomodoro = duration,
            TimerType::ShortBreak => self.short_break = duration,
            TimerType::LongBreak => self.long_break = duration,
        }
        true
    }
}
