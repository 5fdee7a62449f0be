//! The countdown state machine.
//!
//! This is the heart of the application: a component tracking the active
//! timer type, the remaining time, and whether the countdown is running.
//! While running it re-arms a one-second [`TickMsg`] after every decrement;
//! stopping, resetting, or switching type simply stops re-arming and bumps
//! an internal tag so that any tick already scheduled against the old
//! countdown is rejected when it arrives.
//!
//! The model moves between three states:
//!
//! - **Idle-Ready**: not running, time remaining. Entered by [`Model::select`]
//!   and [`Model::reset`] from any state.
//! - **Running**: ticking down once per second.
//! - **Elapsed**: remaining time hit zero. The model emits a single
//!   [`CompletedMsg`] and stops; it stays at zero until the next select or
//!   reset. Toggling while elapsed is a deliberate no-op.
//!
//! # Integration
//!
//! ```rust
//! use pomotea::config::TimerType;
//! use pomotea::countdown;
//! use std::time::Duration;
//!
//! let timer = countdown::new(TimerType::Pomodoro, Duration::from_secs(1500));
//! assert!(!timer.running());
//! assert_eq!(timer.view(), "25:00");
//!
//! // Space bar pressed: the returned command will deliver a StartStopMsg.
//! let _cmd = timer.toggle().expect("not elapsed");
//! ```

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};

use crate::config::TimerType;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Cadence of the countdown.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// One-second cadence message for a countdown instance.
///
/// Carries the instance id plus the tag current when it was scheduled; a
/// tick whose tag no longer matches was scheduled against a countdown that
/// has since been stopped, reset, or switched, and is dropped.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// Id of the countdown this tick belongs to.
    pub id: i64,
    tag: u64,
}

/// Outcome of [`Model::toggle`], delivered through the runtime.
#[derive(Debug, Clone)]
pub struct StartStopMsg {
    /// Id of the countdown this message targets.
    pub id: i64,
    running: bool,
}

/// Emitted exactly once when the countdown reaches zero.
///
/// The application appends the history entry on receipt, reading the
/// duration configured for `timer_type` at that moment.
#[derive(Debug, Clone)]
pub struct CompletedMsg {
    /// Id of the countdown that completed.
    pub id: i64,
    /// The timer type that ran to completion.
    pub timer_type: TimerType,
}

/// Countdown component state.
#[derive(Debug, Clone)]
pub struct Model {
    timer_type: TimerType,
    remaining: Duration,
    interval: Duration,
    running: bool,
    id: i64,
    tag: u64,
}

/// Creates an idle countdown of the given type and duration.
///
/// Unlike a kitchen timer the countdown does not start on creation; it
/// waits in Idle-Ready until toggled.
pub fn new(timer_type: TimerType, duration: Duration) -> Model {
    Model {
        timer_type,
        remaining: duration,
        interval: TICK_INTERVAL,
        running: false,
        id: next_id(),
        tag: 0,
    }
}

impl Model {
    /// The unique id of this countdown instance.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The currently active timer type.
    pub fn timer_type(&self) -> TimerType {
        self.timer_type
    }

    /// Time left on the countdown.
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Whether the countdown has reached zero.
    pub fn elapsed(&self) -> bool {
        self.remaining.is_zero()
    }

    /// Whether the countdown is actively ticking. An elapsed countdown is
    /// never running, whatever the flag says.
    pub fn running(&self) -> bool {
        self.running && !self.elapsed()
    }

    /// Switches to `timer_type` with a fresh `duration`.
    ///
    /// Allowed from any state; an in-progress countdown is discarded
    /// without a history entry. Lands in Idle-Ready.
    pub fn select(&mut self, timer_type: TimerType, duration: Duration) {
        self.timer_type = timer_type;
        self.remaining = duration;
        self.stop_ticking();
    }

    /// Restores `duration` on the current type and stops. Lands in
    /// Idle-Ready from any state.
    pub fn reset(&mut self, duration: Duration) {
        self.remaining = duration;
        self.stop_ticking();
    }

    /// Overwrites the remaining time without touching the running flag.
    ///
    /// Used when the duration of the active type is edited in settings:
    /// the countdown picks up the new value mid-flight.
    pub fn sync_duration(&mut self, duration: Duration) {
        self.remaining = duration;
    }

    /// Returns the command that flips the running state, or `None` while
    /// elapsed: a countdown at zero has to be re-armed with a select or
    /// reset before it can run again.
    pub fn toggle(&self) -> Option<Cmd> {
        if self.elapsed() {
            return None;
        }
        Some(self.start_stop(!self.running()))
    }

    fn stop_ticking(&mut self) {
        self.running = false;
        self.tag = self.tag.wrapping_add(1);
    }

    fn start_stop(&self, running: bool) -> Cmd {
        let id = self.id;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(StartStopMsg { id, running }) as Msg
        })
    }

    fn tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(self.interval, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }

    fn completed(&self) -> Cmd {
        let id = self.id;
        let timer_type = self.timer_type;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(CompletedMsg { id, timer_type }) as Msg
        })
    }

    /// Processes countdown messages; everything else is ignored.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if let Some(start_stop) = msg.downcast_ref::<StartStopMsg>() {
            if start_stop.id != self.id || start_stop.running == self.running {
                return None;
            }
            if start_stop.running {
                if self.elapsed() {
                    return None;
                }
                self.running = true;
                self.tag = self.tag.wrapping_add(1);
                return Some(self.tick());
            }
            self.stop_ticking();
            return None;
        }

        if let Some(tick) = msg.downcast_ref::<TickMsg>() {
            if tick.id != self.id || tick.tag != self.tag || !self.running() {
                return None;
            }
            self.remaining = self.remaining.saturating_sub(self.interval);
            if self.elapsed() {
                self.running = false;
                return Some(self.completed());
            }
            return Some(self.tick());
        }

        None
    }

    /// The remaining time as zero-padded `MM:SS`.
    pub fn view(&self) -> String {
        format_remaining(self.remaining)
    }
}

/// Formats a duration as zero-padded `MM:SS`.
pub fn format_remaining(duration: Duration) -> String {
    let total = duration.as_secs();
    format!("{:02}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick_msg(model: &Model) -> Msg {
        Box::new(TickMsg {
            id: model.id(),
            tag: model.tag,
        })
    }

    fn start_msg(model: &Model) -> Msg {
        Box::new(StartStopMsg {
            id: model.id(),
            running: true,
        })
    }

    #[test]
    fn test_new_is_idle_ready() {
        let timer = new(TimerType::Pomodoro, Duration::from_secs(1500));
        assert_eq!(timer.timer_type(), TimerType::Pomodoro);
        assert_eq!(timer.remaining(), Duration::from_secs(1500));
        assert!(!timer.running());
        assert!(!timer.elapsed());
    }

    #[test]
    fn test_unique_ids() {
        let a = new(TimerType::Pomodoro, Duration::from_secs(10));
        let b = new(TimerType::ShortBreak, Duration::from_secs(10));
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_start_then_tick_decrements_by_one_second() {
        let mut timer = new(TimerType::Pomodoro, Duration::from_secs(3));
        assert!(timer.update(&start_msg(&timer)).is_some());
        assert!(timer.running());

        let cmd = timer.update(&tick_msg(&timer));
        assert!(cmd.is_some());
        assert_eq!(timer.remaining(), Duration::from_secs(2));
    }

    #[test]
    fn test_full_run_emits_completion_and_stops() {
        let mut timer = new(TimerType::ShortBreak, Duration::from_secs(3));
        timer.update(&start_msg(&timer));

        for _ in 0..2 {
            assert!(timer.update(&tick_msg(&timer)).is_some());
        }
        assert_eq!(timer.remaining(), Duration::from_secs(1));

        // Final tick: remaining hits zero, a command is still returned (it
        // carries the CompletedMsg) and the countdown is no longer running.
        assert!(timer.update(&tick_msg(&timer)).is_some());
        assert!(timer.elapsed());
        assert!(!timer.running());

        // No further ticks are accepted at zero.
        assert!(timer.update(&tick_msg(&timer)).is_none());
        assert_eq!(timer.remaining(), Duration::ZERO);
    }

    #[test]
    fn test_toggle_at_zero_is_a_no_op() {
        let mut timer = new(TimerType::Pomodoro, Duration::from_secs(1));
        timer.update(&start_msg(&timer));
        timer.update(&tick_msg(&timer));
        assert!(timer.elapsed());

        assert!(timer.toggle().is_none());

        // Even a stray start message cannot re-arm an elapsed countdown.
        assert!(timer.update(&start_msg(&timer)).is_none());
        assert!(!timer.running());
    }

    #[test]
    fn test_select_discards_in_progress_countdown() {
        let mut timer = new(TimerType::Pomodoro, Duration::from_secs(100));
        timer.update(&start_msg(&timer));
        let stale = tick_msg(&timer);
        timer.update(&stale);
        assert_eq!(timer.remaining(), Duration::from_secs(99));

        timer.select(TimerType::LongBreak, Duration::from_secs(900));
        assert_eq!(timer.timer_type(), TimerType::LongBreak);
        assert_eq!(timer.remaining(), Duration::from_secs(900));
        assert!(!timer.running());
    }

    #[test]
    fn test_stale_tick_is_rejected_after_reset() {
        let mut timer = new(TimerType::Pomodoro, Duration::from_secs(10));
        timer.update(&start_msg(&timer));
        let stale = tick_msg(&timer);

        timer.reset(Duration::from_secs(10));
        timer.update(&start_msg(&timer));

        // The tick scheduled before the reset carries the old tag.
        assert!(timer.update(&stale).is_none());
        assert_eq!(timer.remaining(), Duration::from_secs(10));
    }

    #[test]
    fn test_reset_restores_duration_and_stops() {
        let mut timer = new(TimerType::Pomodoro, Duration::from_secs(60));
        timer.update(&start_msg(&timer));
        timer.update(&tick_msg(&timer));
        assert_eq!(timer.remaining(), Duration::from_secs(59));

        timer.reset(Duration::from_secs(60));
        assert_eq!(timer.remaining(), Duration::from_secs(60));
        assert!(!timer.running());
    }

    #[test]
    fn test_pause_keeps_remaining_time() {
        let mut timer = new(TimerType::Pomodoro, Duration::from_secs(30));
        timer.update(&start_msg(&timer));
        timer.update(&tick_msg(&timer));

        let pause: Msg = Box::new(StartStopMsg {
            id: timer.id(),
            running: false,
        });
        timer.update(&pause);
        assert!(!timer.running());
        assert_eq!(timer.remaining(), Duration::from_secs(29));

        // Ticks while paused change nothing.
        assert!(timer.update(&tick_msg(&timer)).is_none());
        assert_eq!(timer.remaining(), Duration::from_secs(29));
    }

    #[test]
    fn test_foreign_ids_are_ignored() {
        let mut timer = new(TimerType::Pomodoro, Duration::from_secs(10));
        timer.update(&start_msg(&timer));

        let foreign: Msg = Box::new(TickMsg {
            id: timer.id() + 999,
            tag: timer.tag,
        });
        assert!(timer.update(&foreign).is_none());
        assert_eq!(timer.remaining(), Duration::from_secs(10));
    }

    #[test]
    fn test_sync_duration_preserves_running_flag() {
        let mut timer = new(TimerType::Pomodoro, Duration::from_secs(1500));
        timer.update(&start_msg(&timer));
        assert!(timer.running());

        timer.sync_duration(Duration::from_secs(3000));
        assert!(timer.running());
        assert_eq!(timer.remaining(), Duration::from_secs(3000));

        // The armed ticker still applies to the synced value.
        assert!(timer.update(&tick_msg(&timer)).is_some());
        assert_eq!(timer.remaining(), Duration::from_secs(2999));
    }

    #[test]
    fn test_simulated_default_pomodoro_session() {
        let mut timer = new(TimerType::Pomodoro, Duration::from_secs(1500));
        timer.update(&start_msg(&timer));

        for _ in 0..1500 {
            timer.update(&tick_msg(&timer));
        }

        assert!(timer.elapsed());
        assert!(!timer.running());
        assert_eq!(timer.remaining(), Duration::ZERO);
    }

    #[test]
    fn test_format_remaining() {
        assert_eq!(format_remaining(Duration::from_secs(1500)), "25:00");
        assert_eq!(format_remaining(Duration::from_secs(65)), "01:05");
        assert_eq!(format_remaining(Duration::from_secs(0)), "00:00");
        assert_eq!(format_remaining(Duration::from_secs(600)), "10:00");
    }
}
