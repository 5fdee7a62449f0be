//! Light/dark theming.
//!
//! The theme is an in-app toggle rather than terminal-background detection,
//! so instead of lipgloss adaptive colors each [`Theme`] picks its concrete
//! palette up front and [`Styles::new`] builds every style the view needs
//! from it. Toggling rebuilds the styles; nothing else in the application
//! changes.

use lipgloss_extras::prelude::*;

use crate::config::TimerType;

/// The active visual theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Dark text on a light terminal background.
    Light,
    /// Light text on a dark terminal background.
    Dark,
}

impl Theme {
    /// The opposite theme.
    pub fn toggle(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Indicator glyph for the help line: the symbol of the theme a toggle
    /// would switch to.
    pub fn indicator(&self) -> &'static str {
        match self {
            Theme::Light => "☾",
            Theme::Dark => "☀",
        }
    }
}

// Shared accent, used by both palettes.
const ACCENT: &str = "#6366F1";
const ACCENT_TEXT: &str = "#FFFFFF";

struct Palette {
    text: &'static str,
    subtle: &'static str,
    faint: &'static str,
    pomodoro: &'static str,
    short_break: &'static str,
    long_break: &'static str,
}

const LIGHT: Palette = Palette {
    text: "#111827",
    subtle: "#6B7280",
    faint: "#D1D5DB",
    pomodoro: "#EF4444",
    short_break: "#22C55E",
    long_break: "#3B82F6",
};

const DARK: Palette = Palette {
    text: "#F9FAFB",
    subtle: "#9CA3AF",
    faint: "#4B5563",
    pomodoro: "#F87171",
    short_break: "#4ADE80",
    long_break: "#60A5FA",
};

/// Every style the composed view uses, built for one theme.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Application title in the header row.
    pub app_title: Style,
    /// The localized wall-clock line.
    pub clock: Style,
    /// Timer-type tab for the active type.
    pub tab_active: Style,
    /// Timer-type tab for the other types.
    pub tab_inactive: Style,
    /// The large `MM:SS` countdown readout.
    pub timer: Style,
    /// Start/pause control label.
    pub control_primary: Style,
    /// Reset control label.
    pub control_secondary: Style,
    /// Panel titles (history, settings).
    pub panel_title: Style,
    /// Empty-history placeholder.
    pub history_empty: Style,
    /// History entry label for pomodoros.
    pub entry_pomodoro: Style,
    /// History entry label for short breaks.
    pub entry_short_break: Style,
    /// History entry label for long breaks.
    pub entry_long_break: Style,
    /// History entry duration column.
    pub entry_duration: Style,
    /// Flag of the active language.
    pub flag_active: Style,
    /// Flags of the other languages.
    pub flag_inactive: Style,
    /// Label of a settings field.
    pub field_label: Style,
    /// Value of an unfocused settings field.
    pub field_value: Style,
    /// Value of the focused settings field.
    pub field_focused: Style,
    /// Unit suffix after a settings field.
    pub field_unit: Style,
    /// Key names in the help line.
    pub help_key: Style,
    /// Descriptions in the help line.
    pub help_desc: Style,
    /// Separator between help line items.
    pub help_separator: Style,
}

impl Styles {
    /// Builds the full style set for `theme`.
    pub fn new(theme: Theme) -> Self {
        let palette = match theme {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
        };

        let accent_block = Style::new()
            .background(Color::from(ACCENT))
            .foreground(Color::from(ACCENT_TEXT))
            .padding(0, 1, 0, 1);

        Self {
            app_title: Style::new()
                .foreground(Color::from(ACCENT))
                .bold(true),
            clock: Style::new().foreground(Color::from(palette.subtle)),
            tab_active: accent_block.clone().bold(true),
            tab_inactive: Style::new()
                .foreground(Color::from(palette.subtle))
                .padding(0, 1, 0, 1),
            timer: Style::new()
                .foreground(Color::from(palette.text))
                .bold(true),
            control_primary: accent_block.clone(),
            control_secondary: Style::new()
                .foreground(Color::from(palette.subtle))
                .padding(0, 1, 0, 1),
            panel_title: Style::new()
                .foreground(Color::from(palette.text))
                .bold(true),
            history_empty: Style::new().foreground(Color::from(palette.subtle)),
            entry_pomodoro: Style::new()
                .foreground(Color::from(palette.pomodoro))
                .bold(true),
            entry_short_break: Style::new()
                .foreground(Color::from(palette.short_break))
                .bold(true),
            entry_long_break: Style::new()
                .foreground(Color::from(palette.long_break))
                .bold(true),
            entry_duration: Style::new().foreground(Color::from(palette.subtle)),
            flag_active: accent_block.clone(),
            flag_inactive: Style::new().padding(0, 1, 0, 1).faint(true),
            field_label: Style::new().foreground(Color::from(palette.text)),
            field_value: Style::new().foreground(Color::from(palette.subtle)),
            field_focused: accent_block,
            field_unit: Style::new().foreground(Color::from(palette.subtle)),
            help_key: Style::new().foreground(Color::from(palette.subtle)),
            help_desc: Style::new().foreground(Color::from(palette.faint)),
            help_separator: Style::new().foreground(Color::from(palette.faint)),
        }
    }

    /// The history entry style for `timer_type`.
    pub fn entry(&self, timer_type: TimerType) -> &Style {
        match timer_type {
            TimerType::Pomodoro => &self.entry_pomodoro,
            TimerType::ShortBreak => &self.entry_short_break,
            TimerType::LongBreak => &self.entry_long_break,
        }
    }
}
