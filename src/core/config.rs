use std::str::FromStr;

use thiserror::Error;
use tracing::Level;

use crate::core::models::TaskStatus;

pub const DEFAULT_STORAGE_KEY: &str = "saving";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unsupported language `{0}`, expected `en` or `nl`")]
    UnknownLocale(String),
    #[error("invalid log level `{0}`")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
    Dutch,
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::English),
            "nl" => Ok(Locale::Dutch),
            _ => Err(ConfigError::UnknownLocale(s.to_string())),
        }
    }
}

/// Every string the board shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub new_task: &'static str,
    pub form_heading: &'static str,
    pub title_placeholder: &'static str,
    pub description_placeholder: &'static str,
    pub submit: &'static str,
    pub cancel: &'static str,
    pub delete: &'static str,
    pub complete: &'static str,
    pub start: &'static str,
    pub loading: &'static str,
    pub total: &'static str,
    pub todo: &'static str,
    pub in_progress: &'static str,
    pub done: &'static str,
}

impl Labels {
    pub fn column(&self, status: TaskStatus) -> &'static str {
        match status {
            TaskStatus::Todo => self.todo,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Done => self.done,
        }
    }
}

const ENGLISH: Labels = Labels {
    title: "Kanban Board",
    subtitle: "Organise your tasks",
    new_task: "New Task",
    form_heading: "Add Task",
    title_placeholder: "Task title *",
    description_placeholder: "Description...",
    submit: "Add",
    cancel: "Cancel",
    delete: "Delete",
    complete: "Complete",
    start: "In Progress",
    loading: "Loading...",
    total: "Total tasks",
    todo: "To Do",
    in_progress: "In Progress",
    done: "Done",
};

const DUTCH: Labels = Labels {
    title: "Kanban Board",
    subtitle: "Organiseer je taken",
    new_task: "Nieuwe Taak",
    form_heading: "Taak Toevoegen!",
    title_placeholder: "Taak titel *",
    description_placeholder: "Beschrijving...",
    submit: "Toevoegen",
    cancel: "Annuleren",
    delete: "Verwijderen",
    complete: "Voltooien",
    start: "Bezig",
    loading: "Laden...",
    total: "Totaal aantal taken",
    todo: "Te Doen",
    in_progress: "Bezig",
    done: "Klaar",
};

impl Locale {
    pub fn labels(&self) -> Labels {
        match self {
            Locale::English => ENGLISH,
            Locale::Dutch => DUTCH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub storage_key: String,
    pub locale: Locale,
    pub log_level: Level,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            locale: Locale::default(),
            log_level: Level::INFO,
        }
    }
}

impl BoardConfig {
    /// Reads `lang` and `log` from a page query string such as
    /// `?lang=nl&log=debug`. Other keys are ignored.
    pub fn from_query(query: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        for pair in query.trim_start_matches('?').split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "lang" => config.locale = value.parse()?,
                "log" => {
                    config.log_level = value
                        .parse()
                        .map_err(|_| ConfigError::InvalidLogLevel(value.to_string()))?;
                }
                _ => {}
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("?")]
    #[case("?utm_source=mail")]
    fn empty_query_gives_defaults(#[case] query: &str) {
        assert_eq!(BoardConfig::from_query(query).unwrap(), BoardConfig::default());
    }

    #[test]
    fn defaults_use_the_saving_key() {
        let config = BoardConfig::default();
        assert_eq!(config.storage_key, "saving");
        assert_eq!(config.locale, Locale::English);
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn reads_language_and_log_level() {
        let config = BoardConfig::from_query("?lang=NL&log=debug").unwrap();
        assert_eq!(config.locale, Locale::Dutch);
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[rstest]
    #[case("?lang=fr", ConfigError::UnknownLocale("fr".into()))]
    #[case("?lang", ConfigError::UnknownLocale("".into()))]
    #[case("?log=loud", ConfigError::InvalidLogLevel("loud".into()))]
    fn rejects_bad_values(#[case] query: &str, #[case] expected: ConfigError) {
        assert_eq!(BoardConfig::from_query(query).unwrap_err(), expected);
    }

    #[rstest]
    #[case(Locale::English, ["To Do", "In Progress", "Done"])]
    #[case(Locale::Dutch, ["Te Doen", "Bezig", "Klaar"])]
    fn column_labels_follow_locale(#[case] locale: Locale, #[case] expected: [&str; 3]) {
        let labels = locale.labels();
        assert_eq!(TaskStatus::all().map(|status| labels.column(status)), expected);
    }
}
