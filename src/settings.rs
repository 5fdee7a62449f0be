//! The settings overlay.
//!
//! A modal form with one minutes field per timer type. While open it
//! captures all key input: up/down (or tab/shift-tab) move focus between
//! fields, characters and backspace edit the focused one, esc or enter
//! close the overlay. Every edit is re-parsed immediately; a value that
//! parses to a positive integer is reported as a [`Event::Changed`] for the
//! application to apply, anything else changes nothing and shows no error.
//! That mirrors the one validation rule the configuration has.

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

use crate::config::{Durations, TimerType};
use crate::i18n::{tr, Language, Text};
use crate::theme::Styles;

const MAX_FIELD_LEN: usize = 5;
const CURSOR: &str = "▌";

/// What a key press did to the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The focused field now holds a valid minute count for this type.
    Changed(TimerType, i64),
    /// The overlay was closed.
    Closed,
}

#[derive(Debug, Clone)]
struct Field {
    timer_type: TimerType,
    value: String,
}

/// Settings overlay state.
#[derive(Debug, Clone)]
pub struct Model {
    fields: Vec<Field>,
    focus: usize,
    open: bool,
}

/// Creates a closed settings overlay.
pub fn new() -> Model {
    Model {
        fields: TimerType::ALL
            .iter()
            .map(|&timer_type| Field {
                timer_type,
                value: String::new(),
            })
            .collect(),
        focus: 0,
        open: false,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl Model {
    /// Whether the overlay is currently shown and capturing input.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Opens the overlay, prefilling each field with the currently
    /// configured minutes and focusing the first one.
    pub fn open(&mut self, durations: &Durations) {
        for field in &mut self.fields {
            field.value = durations.minutes(field.timer_type).to_string();
        }
        self.focus = 0;
        self.open = true;
    }

    /// Closes the overlay.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// The current text of the field for `timer_type`, for tests and
    /// rendering.
    pub fn value(&self, timer_type: TimerType) -> &str {
        self.fields
            .iter()
            .find(|f| f.timer_type == timer_type)
            .map(|f| f.value.as_str())
            .unwrap_or("")
    }

    /// Handles one key press while open.
    pub fn update(&mut self, msg: &KeyMsg) -> Option<Event> {
        if !self.open {
            return None;
        }

        match msg.key {
            KeyCode::Esc | KeyCode::Enter => {
                self.close();
                Some(Event::Closed)
            }
            KeyCode::Up | KeyCode::BackTab => {
                self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
                None
            }
            KeyCode::Down | KeyCode::Tab => {
                self.focus = (self.focus + 1) % self.fields.len();
                None
            }
            KeyCode::Backspace => {
                self.fields[self.focus].value.pop();
                self.parse_focused()
            }
            KeyCode::Char(c) if msg.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                if self.fields[self.focus].value.len() < MAX_FIELD_LEN {
                    self.fields[self.focus].value.push(c);
                }
                self.parse_focused()
            }
            _ => None,
        }
    }

    // Positive integers become a change event; everything else is silently
    // dropped, leaving the stored configuration untouched.
    fn parse_focused(&self) -> Option<Event> {
        let field = &self.fields[self.focus];
        match field.value.trim().parse::<i64>() {
            Ok(minutes) if minutes > 0 => Some(Event::Changed(field.timer_type, minutes)),
            _ => None,
        }
    }

    /// Renders the overlay panel.
    pub fn view(&self, lang: Language, styles: &Styles) -> String {
        let mut lines = vec![styles.panel_title.render(tr(lang, Text::TimerSettings))];

        for (index, field) in self.fields.iter().enumerate() {
            let label = styles
                .field_label
                .render(tr(lang, field.timer_type.label()));
            let value = if index == self.focus {
                styles
                    .field_focused
                    .render(&format!("{}{}", field.value, CURSOR))
            } else {
                styles.field_value.render(&field.value)
            };
            let unit = styles.field_unit.render(tr(lang, Text::Minutes));
            lines.push(format!("{label}: {value} {unit}"));
        }

        lines.push(String::new());
        lines.push(
            styles
                .field_unit
                .render(&format!("esc/enter {}", tr(lang, Text::Close))),
        );

        lines.join("\n")
    }
}
