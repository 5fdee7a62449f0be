//! The application root: state ownership, key routing, view composition.
//!
//! `App` is the single owner of every piece of state. All mutation happens
//! inside [`update`](bubbletea_rs::Model::update) through the component
//! methods: key presses select timer types, toggle the countdown, open the
//! settings overlay, flip the theme, or cycle the language; countdown
//! completion messages append to the history. The two one-second cadences
//! (countdown and clock) arrive here as ordinary messages and are forwarded
//! to their components, which re-arm themselves.

use bubbletea_rs::{quit, Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::{KeyCode, KeyModifiers};

use crate::clock;
use crate::config::{Durations, TimerType};
use crate::countdown;
use crate::history;
use crate::i18n::{tr, Language, Text, LANGUAGES};
use crate::keymap::AppKeyMap;
use crate::settings;
use crate::theme::{Styles, Theme};

/// Root model owning all application state.
#[derive(Debug)]
pub struct App {
    durations: Durations,
    countdown: countdown::Model,
    clock: clock::Model,
    history: history::Model,
    settings: settings::Model,
    keys: AppKeyMap,
    theme: Theme,
    styles: Styles,
    language: Language,
}

impl App {
    /// Builds the default application state: pomodoro selected and idle,
    /// empty history, light theme, English.
    pub fn new() -> Self {
        let durations = Durations::default();
        let countdown = countdown::new(TimerType::Pomodoro, durations.get(TimerType::Pomodoro));
        Self {
            durations,
            countdown,
            clock: clock::new(),
            history: history::new(),
            settings: settings::new(),
            keys: AppKeyMap::default(),
            theme: Theme::Light,
            styles: Styles::new(Theme::Light),
            language: Language::En,
        }
    }

    /// The configured durations (read-only).
    pub fn durations(&self) -> &Durations {
        &self.durations
    }

    /// The session history (read-only).
    pub fn history(&self) -> &history::Model {
        &self.history
    }

    /// The active display language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// The active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// The countdown component (read-only).
    pub fn countdown(&self) -> &countdown::Model {
        &self.countdown
    }

    fn select(&mut self, timer_type: TimerType) {
        self.countdown
            .select(timer_type, self.durations.get(timer_type));
    }

    fn apply_settings_event(&mut self, event: settings::Event) {
        match event {
            settings::Event::Changed(timer_type, minutes) => {
                if self.durations.set_minutes(timer_type, minutes) {
                    tracing::debug!(?timer_type, minutes, "duration updated");
                    if timer_type == self.countdown.timer_type() {
                        self.countdown.sync_duration(self.durations.get(timer_type));
                    }
                }
            }
            settings::Event::Closed => {}
        }
    }

    fn handle_key(&mut self, key: &KeyMsg) -> Option<Cmd> {
        // ctrl+c always quits, even with the overlay open.
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.key == KeyCode::Char('c') {
            return Some(quit());
        }

        if self.settings.is_open() {
            if let Some(event) = self.settings.update(key) {
                self.apply_settings_event(event);
            }
            return None;
        }

        if self.keys.quit.matches(key) {
            return Some(quit());
        }
        if self.keys.pomodoro.matches(key) {
            self.select(TimerType::Pomodoro);
            return None;
        }
        if self.keys.short_break.matches(key) {
            self.select(TimerType::ShortBreak);
            return None;
        }
        if self.keys.long_break.matches(key) {
            self.select(TimerType::LongBreak);
            return None;
        }
        if self.keys.toggle.matches(key) {
            return self.countdown.toggle();
        }
        if self.keys.reset.matches(key) {
            self.countdown
                .reset(self.durations.get(self.countdown.timer_type()));
            return None;
        }
        if self.keys.settings.matches(key) {
            self.settings.open(&self.durations);
            return None;
        }
        if self.keys.theme.matches(key) {
            self.theme = self.theme.toggle();
            self.styles = Styles::new(self.theme);
            return None;
        }
        if self.keys.language.matches(key) {
            self.language = self.language.next();
            return None;
        }
        None
    }

    fn header(&self) -> String {
        let title = self.styles.app_title.render(tr(self.language, Text::AppTitle));
        let flags: String = LANGUAGES
            .iter()
            .map(|lang| {
                if *lang == self.language {
                    self.styles.flag_active.render(lang.flag())
                } else {
                    self.styles.flag_inactive.render(lang.flag())
                }
            })
            .collect();
        format!("{title}  {flags} {}", self.theme.indicator())
    }

    fn timer_panel(&self) -> String {
        let tabs: Vec<String> = TimerType::ALL
            .iter()
            .map(|&timer_type| {
                let label = tr(self.language, timer_type.label());
                if timer_type == self.countdown.timer_type() {
                    self.styles.tab_active.render(label)
                } else {
                    self.styles.tab_inactive.render(label)
                }
            })
            .collect();

        let readout = self.styles.timer.render(&self.countdown.view());

        let toggle_label = if self.countdown.running() {
            tr(self.language, Text::Pause)
        } else {
            tr(self.language, Text::Start)
        };
        let controls = format!(
            "{} {}",
            self.styles.control_primary.render(toggle_label),
            self.styles
                .control_secondary
                .render(tr(self.language, Text::Reset)),
        );

        format!("{}\n\n    {readout}\n\n{controls}", tabs.join(" "))
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl BubbleTeaModel for App {
    fn init() -> (Self, Option<Cmd>) {
        let app = App::new();
        // Only the clock starts ticking; the countdown waits for a toggle.
        let cmd = app.clock.init();
        (app, Some(cmd))
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(done) = msg.downcast_ref::<countdown::CompletedMsg>() {
            if done.id == self.countdown.id() {
                let entry = history::Entry {
                    timer_type: done.timer_type,
                    duration: self.durations.get(done.timer_type),
                };
                tracing::debug!(
                    timer_type = ?entry.timer_type,
                    seconds = entry.duration.as_secs(),
                    "session completed"
                );
                self.history.append(entry);
            }
            return None;
        }

        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key);
        }

        if let Some(cmd) = self.countdown.update(&msg) {
            return Some(cmd);
        }
        self.clock.update(&msg)
    }

    fn view(&self) -> String {
        let body = if self.settings.is_open() {
            self.settings.view(self.language, &self.styles)
        } else {
            self.timer_panel()
        };

        format!(
            "{}\n{}\n\n{}\n\n{}\n\n{}\n",
            self.header(),
            self.styles.clock.render(&self.clock.view(self.language)),
            body,
            self.history.view(self.language, &self.styles),
            self.keys.help_line(self.language, &self.styles),
        )
    }
}
