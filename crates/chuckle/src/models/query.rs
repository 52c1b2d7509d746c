use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::errors::{JokeError, JokeResult};

/// Joke categories. `All` spans every category of a language.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Category {
    #[default]
    Neutral,
    Chuck,
    All,
}

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Language {
    #[default]
    En,
    De,
    Es,
}

impl Category {
    pub fn parse(value: &str) -> JokeResult<Self> {
        Category::from_str(value.trim())
            .map_err(|_| JokeError::UnknownCategory(value.to_string()))
    }
}

impl Language {
    pub fn parse(value: &str) -> JokeResult<Self> {
        Language::from_str(value.trim())
            .map_err(|_| JokeError::UnknownLanguage(value.to_string()))
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JokeQuery {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub category: Category,
}

impl JokeQuery {
    pub fn new(language: Language, category: Category) -> Self {
        Self { language, category }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Category::parse("Chuck").unwrap(), Category::Chuck);
        assert_eq!(Category::parse(" all ").unwrap(), Category::All);
        assert_eq!(Language::parse("DE").unwrap(), Language::De);
    }

    #[test]
    fn test_parse_unknown_values() {
        assert!(matches!(
            Category::parse("knock-knock"),
            Err(JokeError::UnknownCategory(c)) if c == "knock-knock"
        ));
        assert!(matches!(
            Language::parse("xx"),
            Err(JokeError::UnknownLanguage(l)) if l == "xx"
        ));
    }

    #[test]
    fn test_display_matches_wire_format() {
        for category in Category::iter() {
            let wire = serde_json::to_value(category).unwrap();
            assert_eq!(wire, serde_json::json!(category.to_string()));
        }
        assert_eq!(Language::Es.as_ref(), "es");
    }

    #[test]
    fn test_query_defaults() {
        let query: JokeQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query, JokeQuery::new(Language::En, Category::Neutral));
    }
}
