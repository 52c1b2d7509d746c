use serde::{Deserialize, Serialize};

/// How a chat host should display the reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    /// Visible to everyone in the channel
    InChannel,
    /// Visible only to the user who ran the command
    Ephemeral,
}

/// The reply a slash command host renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlashResponse {
    pub response_type: ResponseType,
    pub text: String,
}

impl SlashResponse {
    pub fn in_channel<S: Into<String>>(text: S) -> Self {
        Self {
            response_type: ResponseType::InChannel,
            text: text.into(),
        }
    }

    pub fn ephemeral<S: Into<String>>(text: S) -> Self {
        Self {
            response_type: ResponseType::Ephemeral,
            text: text.into(),
        }
    }
}

/// What an action returns to its host; `body` becomes the HTTP reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    pub body: SlashResponse,
}

impl From<SlashResponse> for ActionResult {
    fn from(body: SlashResponse) -> Self {
        Self { body }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_action_result_shape() {
        let result = ActionResult::from(SlashResponse::in_channel("hello"));
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"body": {"response_type": "in_channel", "text": "hello"}})
        );
    }

    #[test]
    fn test_ephemeral_tag() {
        let value = serde_json::to_value(SlashResponse::ephemeral("psst")).unwrap();
        assert_eq!(value["response_type"], json!("ephemeral"));
    }
}
