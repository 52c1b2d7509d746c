use chuckle::action::JokeAction;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub action: Arc<JokeAction>,
}

impl AppState {
    pub fn new(action: JokeAction) -> Self {
        Self {
            action: Arc::new(action),
        }
    }
}
