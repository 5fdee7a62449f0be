//! Live wall-clock display.
//!
//! Runs its own one-second tick, fully independent of the countdown's
//! cadence: the clock keeps refreshing while the countdown is paused and
//! vice versa. The tick is re-armed unconditionally on every refresh and
//! dies with the program, which is the only unmount this application has.
//!
//! Formatting is a pure function over a captured [`DateTime`], localized to
//! the active display language, so it can be tested without a running
//! clock.

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use chrono::{DateTime, Local};

use crate::i18n::Language;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Refresh cadence of the clock line.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(1);

/// One-second refresh message for a clock instance.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// Id of the clock this tick belongs to.
    pub id: i64,
}

/// Clock component state: the instant captured at the last refresh.
#[derive(Debug, Clone)]
pub struct Model {
    now: DateTime<Local>,
    interval: Duration,
    id: i64,
}

/// Creates a clock primed with the current local time.
pub fn new() -> Model {
    Model {
        now: Local::now(),
        interval: REFRESH_INTERVAL,
        id: next_id(),
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl Model {
    /// The unique id of this clock instance.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The instant captured at the last refresh.
    pub fn now(&self) -> DateTime<Local> {
        self.now
    }

    /// Arms the first refresh; call once from the application's `init`.
    pub fn init(&self) -> Cmd {
        self.tick()
    }

    fn tick(&self) -> Cmd {
        let id = self.id;
        bubbletea_tick(self.interval, move |_| Box::new(TickMsg { id }) as Msg)
    }

    /// Refreshes on this clock's own ticks; everything else is ignored.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if let Some(tick) = msg.downcast_ref::<TickMsg>() {
            if tick.id != self.id {
                return None;
            }
            self.now = Local::now();
            return Some(self.tick());
        }
        None
    }

    /// The captured instant rendered in `lang`.
    pub fn view(&self, lang: Language) -> String {
        format_datetime(&self.now, lang)
    }
}

/// Formats a date-time with full weekday and date plus seconds, in the
/// locale belonging to `lang`. Total over all supported languages, so
/// there is no fallback path to take.
pub fn format_datetime(datetime: &DateTime<Local>, lang: Language) -> String {
    datetime
        .format_localized("%A, %e %B %Y, %H:%M:%S", lang.locale())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Local> {
        // 2024-03-01 was a Friday.
        Local.with_ymd_and_hms(2024, 3, 1, 13, 5, 9).unwrap()
    }

    #[test]
    fn test_formatting_is_localized() {
        let dt = fixed_datetime();

        let en = format_datetime(&dt, Language::En);
        assert!(en.contains("Friday"), "got {en}");
        assert!(en.contains("March"), "got {en}");

        let de = format_datetime(&dt, Language::De);
        assert!(de.contains("Freitag"), "got {de}");
        assert!(de.contains("März"), "got {de}");

        let it = format_datetime(&dt, Language::It);
        assert!(it.contains("venerdì"), "got {it}");
    }

    #[test]
    fn test_formatting_keeps_seconds() {
        let dt = fixed_datetime();
        for lang in crate::i18n::LANGUAGES {
            assert!(format_datetime(&dt, lang).contains("13:05:09"));
        }
    }

    #[test]
    fn test_foreign_tick_is_ignored() {
        let mut clock = new();
        let before = clock.now();

        let foreign: Msg = Box::new(TickMsg { id: clock.id() + 999 });
        assert!(clock.update(&foreign).is_none());
        assert_eq!(clock.now(), before);
    }

    #[test]
    fn test_own_tick_refreshes_and_rearms() {
        let mut clock = new();
        let own: Msg = Box::new(TickMsg { id: clock.id() });
        assert!(clock.update(&own).is_some());
    }

    #[test]
    fn test_unique_ids() {
        assert_ne!(new().id(), new().id());
    }
}
