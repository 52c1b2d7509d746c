use anyhow::Result;
use async_trait::async_trait;
use rand::seq::SliceRandom;

use crate::errors::JokeError;
use crate::models::query::JokeQuery;

/// Base trait for joke providers (embedded corpus, remote API, etc)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JokeProvider: Send + Sync {
    /// Every joke matching the query, in a stable order. May be empty.
    async fn get_jokes(&self, query: &JokeQuery) -> Result<Vec<String>>;

    /// One joke matching the query, picked at random
    async fn get_joke(&self, query: &JokeQuery) -> Result<String> {
        let jokes = self.get_jokes(query).await?;
        jokes
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or_else(|| {
                JokeError::NoJokes {
                    language: query.language,
                    category: query.category,
                }
                .into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::query::{Category, Language};

    struct FixedProvider(Vec<String>);

    #[async_trait]
    impl JokeProvider for FixedProvider {
        async fn get_jokes(&self, _query: &JokeQuery) -> Result<Vec<String>> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_get_joke_picks_from_results() -> Result<()> {
        let provider = FixedProvider(vec!["one".to_string(), "two".to_string()]);

        let joke = provider.get_joke(&JokeQuery::default()).await?;
        assert!(joke == "one" || joke == "two");
        Ok(())
    }

    #[tokio::test]
    async fn test_get_joke_on_empty_results() {
        let provider = FixedProvider(vec![]);

        let query = JokeQuery::new(Language::De, Category::Chuck);
        let err = provider.get_joke(&query).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<JokeError>(),
            Some(JokeError::NoJokes {
                language: Language::De,
                category: Category::Chuck
            })
        ));
    }
}
