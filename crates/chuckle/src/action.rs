use serde_json::Value;

use crate::errors::{JokeError, JokeResult};
use crate::models::query::{Category, JokeQuery, Language};
use crate::models::response::{ActionResult, SlashResponse};
use crate::providers::base::JokeProvider;

/// The query the action always asks its provider for
pub const ACTION_QUERY: JokeQuery = JokeQuery {
    language: Language::En,
    category: Category::Chuck,
};

/// Reply to a slash command with the provider's first Chuck Norris joke.
///
/// `args` is accepted for the host's invocation contract and otherwise ignored.
/// An empty result set is an error: there is no fallback joke.
pub async fn invoke(provider: &dyn JokeProvider, _args: &Value) -> JokeResult<ActionResult> {
    let jokes = provider
        .get_jokes(&ACTION_QUERY)
        .await
        .map_err(JokeError::from_provider)?;

    let joke = jokes.into_iter().next().ok_or(JokeError::NoJokes {
        language: ACTION_QUERY.language,
        category: ACTION_QUERY.category,
    })?;

    Ok(SlashResponse::in_channel(joke).into())
}

/// An action bound to one provider, for hosts that serve many invocations
pub struct JokeAction {
    provider: Box<dyn JokeProvider + Send + Sync>,
}

impl JokeAction {
    pub fn new(provider: Box<dyn JokeProvider + Send + Sync>) -> Self {
        Self { provider }
    }

    pub async fn invoke(&self, args: &Value) -> JokeResult<ActionResult> {
        let result = invoke(self.provider.as_ref(), args).await;
        if let Err(err) = &result {
            tracing::error!(error = %err, "joke action failed");
        }
        result
    }
}
