use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use super::base::JokeProvider;
use super::configs::RemoteProviderConfig;
use crate::errors::JokeError;
use crate::models::query::{Category, JokeQuery, Language};

#[derive(Debug, Deserialize)]
struct RandomJoke {
    value: String,
}

/// Fetches jokes from a chucknorris.io compatible API
pub struct RemoteProvider {
    client: Client,
    config: RemoteProviderConfig,
}

impl RemoteProvider {
    pub fn new(config: RemoteProviderConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { client, config })
    }

    fn serves(query: &JokeQuery) -> bool {
        query.language == Language::En && matches!(query.category, Category::Chuck | Category::All)
    }

    async fn get(&self, path: &str) -> Result<RandomJoke> {
        let url = format!("{}/{}", self.config.host.trim_end_matches('/'), path);
        tracing::debug!(%url, "requesting remote joke");

        let response = self.client.get(&url).send().await?;

        match response.status() {
            StatusCode::OK => Ok(response.json().await?),
            status if status == StatusCode::TOO_MANY_REQUESTS || status.as_u16() >= 500 => {
                Err(anyhow!("Server error: {}", status))
            }
            status => Err(anyhow!("Request failed: {} ({})", status, url)),
        }
    }
}

#[async_trait]
impl JokeProvider for RemoteProvider {
    async fn get_jokes(&self, query: &JokeQuery) -> Result<Vec<String>> {
        if !Self::serves(query) {
            return Err(JokeError::UnsupportedQuery {
                language: query.language,
                category: query.category,
            }
            .into());
        }

        let joke = self.get("jokes/random").await?;
        Ok(vec![joke.value])
    }
}
