use anyhow::Result;
use async_trait::async_trait;
use include_dir::{include_dir, Dir};
use serde::Deserialize;
use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::base::JokeProvider;
use super::configs::BuiltinProviderConfig;
use crate::errors::{JokeError, JokeResult};
use crate::models::query::{Category, JokeQuery, Language};

// One JSON document per language, named by its ISO code
static JOKE_FILES: Dir = include_dir!("$CARGO_MANIFEST_DIR/jokes");

#[derive(Debug, Default, Deserialize)]
struct Corpus {
    #[serde(default)]
    neutral: Vec<String>,
    #[serde(default)]
    chuck: Vec<String>,
}

impl Corpus {
    fn jokes(&self, category: Category) -> Vec<String> {
        match category {
            Category::Neutral => self.neutral.clone(),
            Category::Chuck => self.chuck.clone(),
            Category::All => self
                .neutral
                .iter()
                .chain(self.chuck.iter())
                .cloned()
                .collect(),
        }
    }
}

/// Serves jokes from the corpus compiled into the binary
pub struct BuiltinProvider {
    corpora: HashMap<Language, Corpus>,
}

impl BuiltinProvider {
    pub fn new(_config: BuiltinProviderConfig) -> JokeResult<Self> {
        let mut corpora = HashMap::new();
        for language in Language::iter() {
            let path = format!("{}.json", language);
            // A language without a file simply has no jokes
            let Some(file) = JOKE_FILES.get_file(&path) else {
                continue;
            };
            let corpus: Corpus = serde_json::from_slice(file.contents())
                .map_err(|e| JokeError::Corpus(format!("{}: {}", path, e)))?;
            corpora.insert(language, corpus);
        }
        Ok(Self { corpora })
    }
}

#[async_trait]
impl JokeProvider for BuiltinProvider {
    async fn get_jokes(&self, query: &JokeQuery) -> Result<Vec<String>> {
        let jokes = self
            .corpora
            .get(&query.language)
            .map(|corpus| corpus.jokes(query.category))
            .unwrap_or_default();
        tracing::debug!(
            language = %query.language,
            category = %query.category,
            count = jokes.len(),
            "builtin jokes lookup"
        );
        Ok(jokes)
    }
}
