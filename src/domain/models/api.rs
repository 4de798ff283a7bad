#[cfg(test)]
#[path = "api_test.rs"]
mod tests;

use async_trait::async_trait;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::AttachmentFile;
use super::ChatId;
use super::ChatSummary;
use super::Profile;

pub const NETWORK_ERROR_MESSAGE: &str = "Network error or unable to connect to the server.";

/// Uniform failure of a remote call. Carries a message fit to show the user
/// and the HTTP status when the server answered at all.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub status: Option<u16>,
}

impl ApiError {
    pub fn network() -> ApiError {
        return ApiError {
            message: NETWORK_ERROR_MESSAGE.to_string(),
            status: None,
        };
    }

    pub fn invalid_response(details: &str) -> ApiError {
        return ApiError {
            message: format!("Unexpected response from the server: {details}"),
            status: None,
        };
    }

    /// Builds an error from a non-2xx response, preferring the server's own
    /// `detail` message.
    pub fn from_response(status: u16, body: &str) -> ApiError {
        let mut message = format!("Server error: {status}");
        if let Ok(payload) = serde_json::from_str::<serde_json::Value>(body) {
            let detail = &payload["detail"];
            if let Some(msg) = detail
                .as_array()
                .and_then(|details| return details.first())
                .and_then(|first| return first["msg"].as_str())
            {
                message = msg.to_string();
            } else if let Some(msg) = detail.as_str() {
                message = msg.to_string();
            }
        }

        return ApiError {
            message,
            status: Some(status),
        };
    }

    pub fn is_unauthorized(&self) -> bool {
        return self.status == Some(401);
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryMessage {
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendReply {
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub chat_id: Option<ChatId>,
    #[serde(default)]
    pub model_key: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameReply {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelReply {
    #[serde(default)]
    pub chat_id: Option<ChatId>,
    #[serde(default)]
    pub model_key: Option<String>,
}

#[async_trait]
pub trait ChatApi {
    /// Password grant login.
    async fn login_email(&self, email: &str, password: &str) -> ApiResult<AccessToken>;

    /// Exchanges a Google ID token for an access token.
    async fn login_google(&self, id_token: &str) -> ApiResult<AccessToken>;

    /// Issues a short lived guest token.
    async fn login_guest(&self) -> ApiResult<AccessToken>;

    async fn register(&self, email: &str, password: &str) -> ApiResult<()>;

    async fn confirm(&self, email: &str, code: &str) -> ApiResult<()>;

    async fn list_chats(&self, token: &str) -> ApiResult<Vec<ChatSummary>>;

    /// History of a chat as the server returns it, newest first.
    async fn chat_history(&self, token: &str, chat_id: ChatId) -> ApiResult<Vec<HistoryMessage>>;

    /// Sends a text message. Without a `chat_id` the server starts a new chat.
    async fn send_message(
        &self,
        token: &str,
        chat_id: Option<ChatId>,
        message: &str,
    ) -> ApiResult<SendReply>;

    /// Sends a prompt with image attachments as a single multipart request.
    async fn send_image(
        &self,
        token: &str,
        chat_id: Option<ChatId>,
        prompt: &str,
        files: &[AttachmentFile],
    ) -> ApiResult<SendReply>;

    /// Makes a chat the active one server side. Returns the selected chat
    /// when the server echoes it back.
    async fn select_chat(&self, token: &str, chat_id: ChatId) -> ApiResult<Option<ChatSummary>>;

    async fn rename_chat(&self, token: &str, chat_id: ChatId, title: &str)
        -> ApiResult<RenameReply>;

    async fn change_model(
        &self,
        token: &str,
        chat_id: ChatId,
        model_key: &str,
    ) -> ApiResult<ModelReply>;

    async fn delete_chat(&self, token: &str, chat_id: ChatId) -> ApiResult<()>;

    async fn profile(&self, token: &str) -> ApiResult<Option<Profile>>;
}

pub type ApiBox = Box<dyn ChatApi + Send + Sync>;
