use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::Mutex;

use crate::models::query::JokeQuery;
use crate::providers::base::JokeProvider;

/// A mock provider that returns pre-configured jokes for testing.
/// Clones share the record of received queries.
#[derive(Clone)]
pub struct MockProvider {
    jokes: Vec<String>,
    failure: Option<String>,
    queries: Arc<Mutex<Vec<JokeQuery>>>,
}

impl MockProvider {
    /// Create a new mock provider that answers every query with `jokes`
    pub fn new<S: Into<String>>(jokes: Vec<S>) -> Self {
        Self {
            jokes: jokes.into_iter().map(Into::into).collect(),
            failure: None,
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock provider whose every call fails with `message`
    pub fn failing<S: Into<String>>(message: S) -> Self {
        Self {
            jokes: Vec::new(),
            failure: Some(message.into()),
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queries received so far, oldest first
    pub fn queries(&self) -> Vec<JokeQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl JokeProvider for MockProvider {
    async fn get_jokes(&self, query: &JokeQuery) -> Result<Vec<String>> {
        self.queries.lock().unwrap().push(*query);
        match &self.failure {
            Some(message) => Err(anyhow!("{}", message)),
            None => Ok(self.jokes.clone()),
        }
    }
}
