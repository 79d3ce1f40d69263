//! Display strings and plural rules.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::model::filter::FilterKind;

/// Display language for labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    Ru,
    En,
}

/// Grammatical number chosen for a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralCategory {
    One,
    Few,
    Many,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ru => "ru",
            Self::En => "en",
        }
    }

    /// Picks the plural category for `count`.
    ///
    /// - `ru`: one for 1, few for 2..=4, many for 0 and 5 or more.
    /// - `en`: one for 1, many otherwise.
    pub fn plural_category(self, count: usize) -> PluralCategory {
        match (self, count) {
            (_, 1) => PluralCategory::One,
            (Self::Ru, 2..=4) => PluralCategory::Few,
            _ => PluralCategory::Many,
        }
    }

    /// Label for the unfiltered task total, e.g. `Всего: 3 задачи`.
    pub fn total_label(self, total: usize) -> String {
        let noun = match (self, self.plural_category(total)) {
            (Self::Ru, PluralCategory::One) => "задача",
            (Self::Ru, PluralCategory::Few) => "задачи",
            (Self::Ru, PluralCategory::Many) => "задач",
            (Self::En, PluralCategory::One) => "task",
            (Self::En, _) => "tasks",
        };
        match self {
            Self::Ru => format!("Всего: {total} {noun}"),
            Self::En => format!("Total: {total} {noun}"),
        }
    }

    pub fn completed_label(self, completed: usize) -> String {
        match self {
            Self::Ru => format!("Завершено: {completed}"),
            Self::En => format!("Completed: {completed}"),
        }
    }

    pub fn delete_label(self) -> &'static str {
        match self {
            Self::Ru => "Удалить",
            Self::En => "Delete",
        }
    }

    pub fn filter_label(self, kind: FilterKind) -> &'static str {
        match (self, kind) {
            (Self::Ru, FilterKind::All) => "Все",
            (Self::Ru, FilterKind::Active) => "Активные",
            (Self::Ru, FilterKind::Completed) => "Завершённые",
            (Self::En, FilterKind::All) => "All",
            (Self::En, FilterKind::Active) => "Active",
            (Self::En, FilterKind::Completed) => "Completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLocaleError(String);

impl Display for ParseLocaleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unsupported locale `{}`; expected ru|en", self.0)
    }
}

impl Error for ParseLocaleError {}

impl FromStr for Locale {
    type Err = ParseLocaleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ru" => Ok(Self::Ru),
            "en" => Ok(Self::En),
            other => Err(ParseLocaleError(other.to_string())),
        }
    }
}
