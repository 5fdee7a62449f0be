//! UI languages and translation tables.
//!
//! All user-facing text goes through [`tr`], which resolves a [`Text`] key
//! against the active language's table. Five languages are compiled in;
//! English is the fallback for any key a table does not carry, and the raw
//! key identifier is the last resort so a missing translation can never
//! panic or render an empty string.
//!
//! # Usage
//!
//! ```rust
//! use pomotea::i18n::{tr, Language, Text};
//!
//! assert_eq!(tr(Language::En, Text::Start), "Start");
//! assert_eq!(tr(Language::De, Text::ShortBreak), "Kurze Pause");
//! ```

use std::collections::HashMap;

use chrono::Locale;
use once_cell::sync::Lazy;

/// A selectable display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// English (fallback language).
    En,
    /// Spanish.
    Es,
    /// Portuguese.
    Pt,
    /// Italian.
    It,
    /// German.
    De,
}

/// All supported languages, in selector display order.
pub const LANGUAGES: [Language; 5] = [
    Language::En,
    Language::Es,
    Language::Pt,
    Language::It,
    Language::De,
];

impl Language {
    /// The two-letter language code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Pt => "pt",
            Language::It => "it",
            Language::De => "de",
        }
    }

    /// The flag glyph shown in the language selector.
    pub fn flag(&self) -> &'static str {
        match self {
            Language::En => "🇬🇧",
            Language::Es => "🇪🇸",
            Language::Pt => "🇵🇹",
            Language::It => "🇮🇹",
            Language::De => "🇩🇪",
        }
    }

    /// The chrono locale used for date formatting in this language.
    pub fn locale(&self) -> Locale {
        match self {
            Language::En => Locale::en_GB,
            Language::Es => Locale::es_ES,
            Language::Pt => Locale::pt_PT,
            Language::It => Locale::it_IT,
            Language::De => Locale::de_DE,
        }
    }

    /// The next language in selector order, wrapping around.
    pub fn next(&self) -> Language {
        let index = LANGUAGES.iter().position(|l| l == self).unwrap_or(0);
        LANGUAGES[(index + 1) % LANGUAGES.len()]
    }
}

/// A translatable piece of UI text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Text {
    /// The application title.
    AppTitle,
    /// Label for the pomodoro timer type.
    Pomodoro,
    /// Label for the short break timer type.
    ShortBreak,
    /// Label for the long break timer type.
    LongBreak,
    /// Start button label.
    Start,
    /// Pause button label.
    Pause,
    /// Reset button label.
    Reset,
    /// Unit label for whole minutes.
    Minutes,
    /// History panel title.
    TimerHistory,
    /// Empty-history placeholder line.
    NoHistory,
    /// Settings overlay title.
    TimerSettings,
    /// Close action label for the settings overlay.
    Close,
    /// Theme toggle label in the help line.
    Theme,
    /// Language selector label in the help line.
    Language,
    /// Quit action label in the help line.
    Quit,
}

impl Text {
    /// The raw key identifier, used as the final fallback when no table
    /// carries a translation.
    pub fn key(&self) -> &'static str {
        match self {
            Text::AppTitle => "appTitle",
            Text::Pomodoro => "pomodoro",
            Text::ShortBreak => "shortBreak",
            Text::LongBreak => "longBreak",
            Text::Start => "start",
            Text::Pause => "pause",
            Text::Reset => "reset",
            Text::Minutes => "minutes",
            Text::TimerHistory => "timerHistory",
            Text::NoHistory => "noHistory",
            Text::TimerSettings => "timerSettings",
            Text::Close => "close",
            Text::Theme => "theme",
            Text::Language => "language",
            Text::Quit => "quit",
        }
    }
}

type Table = HashMap<Text, &'static str>;

fn table(entries: &[(Text, &'static str)]) -> Table {
    entries.iter().copied().collect()
}

static TABLES: Lazy<HashMap<Language, Table>> = Lazy::new(|| {
    let mut tables = HashMap::new();

    tables.insert(
        Language::En,
        table(&[
            (Text::AppTitle, "Pomodoro Timer"),
            (Text::Pomodoro, "Pomodoro"),
            (Text::ShortBreak, "Short Break"),
            (Text::LongBreak, "Long Break"),
            (Text::Start, "Start"),
            (Text::Pause, "Pause"),
            (Text::Reset, "Reset"),
            (Text::Minutes, "minutes"),
            (Text::TimerHistory, "Timer History"),
            (Text::NoHistory, "No timers completed yet"),
            (Text::TimerSettings, "Timer Settings"),
            (Text::Close, "Close"),
            (Text::Theme, "theme"),
            (Text::Language, "language"),
            (Text::Quit, "quit"),
        ]),
    );

    tables.insert(
        Language::Es,
        table(&[
            (Text::AppTitle, "Temporizador Pomodoro"),
            (Text::Pomodoro, "Pomodoro"),
            (Text::ShortBreak, "Descanso Corto"),
            (Text::LongBreak, "Descanso Largo"),
            (Text::Start, "Iniciar"),
            (Text::Pause, "Pausar"),
            (Text::Reset, "Reiniciar"),
            (Text::Minutes, "minutos"),
            (Text::TimerHistory, "Historial de Temporizadores"),
            (Text::NoHistory, "Aún no hay temporizadores completados"),
            (Text::TimerSettings, "Configuración del Temporizador"),
            (Text::Close, "Cerrar"),
            (Text::Theme, "tema"),
            (Text::Language, "idioma"),
            (Text::Quit, "salir"),
        ]),
    );

    tables.insert(
        Language::Pt,
        table(&[
            (Text::AppTitle, "Temporizador Pomodoro"),
            (Text::Pomodoro, "Pomodoro"),
            (Text::ShortBreak, "Pausa Curta"),
            (Text::LongBreak, "Pausa Longa"),
            (Text::Start, "Iniciar"),
            (Text::Pause, "Pausar"),
            (Text::Reset, "Reiniciar"),
            (Text::Minutes, "minutos"),
            (Text::TimerHistory, "Histórico de Temporizadores"),
            (Text::NoHistory, "Nenhum temporizador concluído ainda"),
            (Text::TimerSettings, "Definições do Temporizador"),
            (Text::Close, "Fechar"),
            (Text::Theme, "tema"),
            (Text::Language, "idioma"),
            (Text::Quit, "sair"),
        ]),
    );

    tables.insert(
        Language::It,
        table(&[
            (Text::AppTitle, "Timer Pomodoro"),
            (Text::Pomodoro, "Pomodoro"),
            (Text::ShortBreak, "Pausa Breve"),
            (Text::LongBreak, "Pausa Lunga"),
            (Text::Start, "Avvia"),
            (Text::Pause, "Pausa"),
            (Text::Reset, "Reimposta"),
            (Text::Minutes, "minuti"),
            (Text::TimerHistory, "Cronologia Timer"),
            (Text::NoHistory, "Nessun timer completato"),
            (Text::TimerSettings, "Impostazioni Timer"),
            (Text::Close, "Chiudi"),
            (Text::Theme, "tema"),
            (Text::Language, "lingua"),
            (Text::Quit, "esci"),
        ]),
    );

    tables.insert(
        Language::De,
        table(&[
            (Text::AppTitle, "Pomodoro-Timer"),
            (Text::Pomodoro, "Pomodoro"),
            (Text::ShortBreak, "Kurze Pause"),
            (Text::LongBreak, "Lange Pause"),
            (Text::Start, "Start"),
            (Text::Pause, "Pause"),
            (Text::Reset, "Zurücksetzen"),
            (Text::Minutes, "Minuten"),
            (Text::TimerHistory, "Timer-Verlauf"),
            (Text::NoHistory, "Noch keine Timer abgeschlossen"),
            (Text::TimerSettings, "Timer-Einstellungen"),
            (Text::Close, "Schließen"),
            (Text::Theme, "Design"),
            (Text::Language, "Sprache"),
            (Text::Quit, "Beenden"),
        ]),
    );

    tables
});

/// Resolves `text` in `lang`, falling back to English and finally to the
/// raw key identifier.
pub fn tr(lang: Language, text: Text) -> &'static str {
    TABLES
        .get(&lang)
        .and_then(|t| t.get(&text))
        .or_else(|| TABLES.get(&Language::En).and_then(|t| t.get(&text)))
        .copied()
        .unwrap_or_else(|| text.key())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TEXT: [Text; 15] = [
        Text::AppTitle,
        Text::Pomodoro,
        Text::ShortBreak,
        Text::LongBreak,
        Text::Start,
        Text::Pause,
        Text::Reset,
        Text::Minutes,
        Text::TimerHistory,
        Text::NoHistory,
        Text::TimerSettings,
        Text::Close,
        Text::Theme,
        Text::Language,
        Text::Quit,
    ];

    #[test]
    fn test_every_language_resolves_every_key() {
        for lang in LANGUAGES {
            for text in ALL_TEXT {
                let resolved = tr(lang, text);
                assert!(!resolved.is_empty(), "{:?}/{:?} resolved empty", lang, text);
            }
        }
    }

    #[test]
    fn test_panel_titles_are_translated_not_keys() {
        assert_eq!(tr(Language::En, Text::TimerHistory), "Timer History");
        assert_eq!(tr(Language::It, Text::TimerHistory), "Cronologia Timer");
        assert_ne!(tr(Language::De, Text::NoHistory), Text::NoHistory.key());
    }

    #[test]
    fn test_translations_differ_between_languages() {
        assert_eq!(tr(Language::En, Text::ShortBreak), "Short Break");
        assert_eq!(tr(Language::Es, Text::ShortBreak), "Descanso Corto");
        assert_eq!(tr(Language::De, Text::ShortBreak), "Kurze Pause");
    }

    #[test]
    fn test_language_cycle_visits_all_and_wraps() {
        let mut lang = Language::En;
        let mut seen = Vec::new();
        for _ in 0..LANGUAGES.len() {
            seen.push(lang);
            lang = lang.next();
        }
        assert_eq!(seen, LANGUAGES.to_vec());
        assert_eq!(lang, Language::En);
    }

    #[test]
    fn test_codes_and_flags_are_distinct() {
        for (i, a) in LANGUAGES.iter().enumerate() {
            for b in &LANGUAGES[i + 1..] {
                assert_ne!(a.code(), b.code());
                assert_ne!(a.flag(), b.flag());
            }
        }
    }
}
