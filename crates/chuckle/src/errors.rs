use thiserror::Error;

use crate::models::query::{Category, Language};

#[non_exhaustive]
#[derive(Error, Debug)]
pub enum JokeError {
    #[error("No jokes available for category '{category}' in language '{language}'")]
    NoJokes {
        language: Language,
        category: Category,
    },

    #[error("Provider does not serve category '{category}' in language '{language}'")]
    UnsupportedQuery {
        language: Language,
        category: Category,
    },

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Joke corpus is malformed: {0}")]
    Corpus(String),

    #[error(transparent)]
    Provider(#[from] anyhow::Error),
}

impl JokeError {
    /// Recover a typed error that a provider raised through `anyhow`
    pub fn from_provider(err: anyhow::Error) -> Self {
        match err.downcast::<JokeError>() {
            Ok(err) => err,
            Err(err) => JokeError::Provider(err),
        }
    }
}

pub type JokeResult<T> = Result<T, JokeError>;
