#![warn(missing_docs)]

//! # pomotea
//!
//! A Pomodoro countdown timer for the terminal, built on
//! [bubbletea-rs](https://github.com/whit3rabbit/bubbletea-rs) with
//! [lipgloss](https://github.com/whit3rabbit/lipgloss-rs) styling.
//!
//! Three timer types (pomodoro, short break, long break) with configurable
//! durations, an in-memory history of completed sessions, a localized live
//! clock, five display languages, and a light/dark theme toggle. Nothing is
//! persisted; a run of the program is one sitting.
//!
//! ## Architecture
//!
//! Every part follows the Elm Architecture pattern the runtime imposes:
//! components are plain structs with `update()` and `view()` methods, time
//! passes as messages produced by `tick` commands, and the root [`app::App`]
//! model owns all state and routes every message. The countdown and the
//! clock each run their own independent one-second cadence; the countdown's
//! ticker only re-arms while it is running.
//!
//! ## Keys
//!
//! | Key | Action |
//! |-----|--------|
//! | `1` / `2` / `3` | select pomodoro / short break / long break |
//! | `space` | start or pause |
//! | `r` | reset |
//! | `s` | settings overlay (`esc`/`enter` closes) |
//! | `t` | toggle light/dark theme |
//! | `l` | cycle display language |
//! | `q`, `ctrl+c` | quit |

pub mod app;
pub mod clock;
pub mod config;
pub mod countdown;
pub mod history;
pub mod i18n;
pub mod keymap;
pub mod settings;
pub mod theme;

pub use app::App;
pub use config::{Durations, TimerType};
pub use i18n::{tr, Language, Text};
pub use theme::Theme;
