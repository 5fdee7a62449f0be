//! Key bindings and the help line.
//!
//! A [`Binding`] couples the key codes that trigger an action with the hint
//! shown for it in the help line. [`AppKeyMap`] holds one binding per
//! application action; descriptions are [`Text`] keys so the help line
//! follows the active display language.

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

use crate::i18n::{tr, Language, Text};
use crate::theme::Styles;

/// Separator between help line items.
pub const BULLET: &str = "•";

/// A single key binding with its help hint.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyCode>,
    /// The key hint shown in the help line, e.g. `"space"`.
    pub hint: &'static str,
    /// Translation key for the action description.
    pub description: Text,
}

impl Binding {
    /// Creates a binding for `keys` with its help hint and description.
    pub fn new(keys: Vec<KeyCode>, hint: &'static str, description: Text) -> Self {
        Self {
            keys,
            hint,
            description,
        }
    }

    /// Whether `msg` triggers this binding. Modified keys never match;
    /// modifiers are reserved for the terminal (ctrl+c).
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if !msg.modifiers.is_empty() && msg.modifiers != KeyModifiers::SHIFT {
            return false;
        }
        self.keys.contains(&msg.key)
    }
}

/// All application-level key bindings.
#[derive(Debug, Clone)]
pub struct AppKeyMap {
    /// Select the pomodoro timer type.
    pub pomodoro: Binding,
    /// Select the short break timer type.
    pub short_break: Binding,
    /// Select the long break timer type.
    pub long_break: Binding,
    /// Start or pause the countdown.
    pub toggle: Binding,
    /// Reset the countdown to the configured duration.
    pub reset: Binding,
    /// Open the settings overlay.
    pub settings: Binding,
    /// Toggle the light/dark theme.
    pub theme: Binding,
    /// Cycle the display language.
    pub language: Binding,
    /// Quit the application.
    pub quit: Binding,
}

impl Default for AppKeyMap {
    fn default() -> Self {
        Self {
            pomodoro: Binding::new(vec![KeyCode::Char('1')], "1", Text::Pomodoro),
            short_break: Binding::new(vec![KeyCode::Char('2')], "2", Text::ShortBreak),
            long_break: Binding::new(vec![KeyCode::Char('3')], "3", Text::LongBreak),
            toggle: Binding::new(vec![KeyCode::Char(' ')], "space", Text::Start),
            reset: Binding::new(vec![KeyCode::Char('r')], "r", Text::Reset),
            settings: Binding::new(vec![KeyCode::Char('s')], "s", Text::TimerSettings),
            theme: Binding::new(vec![KeyCode::Char('t')], "t", Text::Theme),
            language: Binding::new(vec![KeyCode::Char('l')], "l", Text::Language),
            quit: Binding::new(vec![KeyCode::Char('q')], "q", Text::Quit),
        }
    }
}

impl AppKeyMap {
    /// The bindings shown in the help line, in display order.
    pub fn help_bindings(&self) -> Vec<&Binding> {
        vec![
            &self.toggle,
            &self.reset,
            &self.settings,
            &self.theme,
            &self.language,
            &self.quit,
        ]
    }

    /// Renders the bullet-separated help line in `lang`.
    pub fn help_line(&self, lang: Language, styles: &Styles) -> String {
        let separator = styles.help_separator.render(&format!(" {} ", BULLET));
        self.help_bindings()
            .iter()
            .map(|binding| {
                format!(
                    "{} {}",
                    styles.help_key.render(binding.hint),
                    styles.help_desc.render(tr(lang, binding.description)),
                )
            })
            .collect::<Vec<_>>()
            .join(&separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[test]
    fn test_bindings_match_their_keys() {
        let keys = AppKeyMap::default();
        assert!(keys.toggle.matches(&key(KeyCode::Char(' '))));
        assert!(keys.reset.matches(&key(KeyCode::Char('r'))));
        assert!(keys.quit.matches(&key(KeyCode::Char('q'))));
        assert!(!keys.quit.matches(&key(KeyCode::Char('x'))));
    }

    #[test]
    fn test_control_modified_keys_do_not_match() {
        let keys = AppKeyMap::default();
        let msg = KeyMsg {
            key: KeyCode::Char('r'),
            modifiers: KeyModifiers::CONTROL,
        };
        assert!(!keys.reset.matches(&msg));
    }

    #[test]
    fn test_help_line_is_localized() {
        let keys = AppKeyMap::default();
        let styles = Styles::new(Theme::Light);

        let en = lipgloss_extras::lipgloss::strip_ansi(&keys.help_line(Language::En, &styles));
        assert!(en.contains("space Start"));
        assert!(en.contains("q quit"));

        let es = lipgloss_extras::lipgloss::strip_ansi(&keys.help_line(Language::Es, &styles));
        assert!(es.contains("space Iniciar"));
        assert!(es.contains("q salir"));
    }

    #[test]
    fn test_help_line_uses_bullet_separator() {
        let keys = AppKeyMap::default();
        let styles = Styles::new(Theme::Dark);
        let line = lipgloss_extras::lipgloss::strip_ansi(&keys.help_line(Language::En, &styles));
        assert!(line.matches(BULLET).count() >= 5);
    }
}
