#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

use async_trait::async_trait;
use reqwest::multipart;
use reqwest::RequestBuilder;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::AccessToken;
use crate::domain::models::ApiError;
use crate::domain::models::ApiResult;
use crate::domain::models::AttachmentFile;
use crate::domain::models::ChatApi;
use crate::domain::models::ChatId;
use crate::domain::models::ChatSummary;
use crate::domain::models::HistoryMessage;
use crate::domain::models::ModelReply;
use crate::domain::models::Profile;
use crate::domain::models::RenameReply;
use crate::domain::models::SendReply;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct GoogleLoginRequest {
    id_token: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct RegisterRequest {
    email: String,
    password: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ConfirmRequest {
    email: String,
    code: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct MessageRequest {
    chat_id: Option<ChatId>,
    message: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ChatRequest {
    chat_id: ChatId,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct TitleRequest {
    chat_id: ChatId,
    title: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ModelRequest {
    chat_id: ChatId,
    model_key: String,
}

/// The chat list endpoint answers with a list, a lone chat or null.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
enum ChatListResponse {
    Many(Vec<ChatSummary>),
    One(Box<ChatSummary>),
}

fn required<T>(payload: Option<T>) -> ApiResult<T> {
    if let Some(val) = payload {
        return Ok(val);
    }

    return Err(ApiError::invalid_response("empty body"));
}

pub struct HttpApi {
    url: String,
    client: reqwest::Client,
}

impl Default for HttpApi {
    fn default() -> HttpApi {
        return HttpApi::new(Config::get(ConfigKey::ApiURL));
    }
}

impl HttpApi {
    pub fn new(url: String) -> HttpApi {
        return HttpApi {
            url: url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        };
    }

    fn endpoint(&self, path: &str) -> String {
        return format!("{url}{path}", url = self.url);
    }

    fn post(&self, path: &str, token: Option<&str>) -> RequestBuilder {
        let mut req = self.client.post(self.endpoint(path));
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }

        return req;
    }

    fn get(&self, path: &str, token: &str) -> RequestBuilder {
        return self.client.get(self.endpoint(path)).bearer_auth(token);
    }

    /// Sends a request and decodes its JSON body. Empty bodies, 204s and a
    /// literal `null` all decode to `None`.
    async fn execute<T: DeserializeOwned>(&self, req: RequestBuilder) -> ApiResult<Option<T>> {
        let res = req
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|err| {
                tracing::error!(error = ?err, "Failed to reach the Luch API");
                return ApiError::network();
            })?;

        let status = res.status();
        let url = res.url().path().to_string();
        let body = res.text().await.map_err(|err| {
            tracing::error!(error = ?err, url = %url, "Failed to read Luch API response");
            return ApiError::network();
        })?;

        if !status.is_success() {
            tracing::error!(
                status = status.as_u16(),
                url = %url,
                body = %body,
                "Luch API request failed"
            );
            return Err(ApiError::from_response(status.as_u16(), &body));
        }

        if status == StatusCode::NO_CONTENT || body.trim().is_empty() {
            return Ok(None);
        }

        tracing::debug!(status = status.as_u16(), url = %url, "Luch API response");

        return serde_json::from_str::<Option<T>>(&body).map_err(|err| {
            tracing::error!(error = ?err, url = %url, "Failed to decode Luch API response");
            return ApiError::invalid_response(&err.to_string());
        });
    }

    async fn execute_empty(&self, req: RequestBuilder) -> ApiResult<()> {
        self.execute::<serde_json::Value>(req).await?;
        return Ok(());
    }
}

#[async_trait]
impl ChatApi for HttpApi {
    #[allow(clippy::implicit_return)]
    async fn login_email(&self, email: &str, password: &str) -> ApiResult<AccessToken> {
        let form = [
            ("grant_type", "password"),
            ("username", email),
            ("password", password),
            ("scope", ""),
            ("client_id", ""),
            ("client_secret", ""),
        ];
        let req = self.post("/api/login/email", None).form(&form);

        return required(self.execute(req).await?);
    }

    #[allow(clippy::implicit_return)]
    async fn login_google(&self, id_token: &str) -> ApiResult<AccessToken> {
        let req = self
            .post("/api/login/google", None)
            .json(&GoogleLoginRequest {
                id_token: id_token.to_string(),
            });

        return required(self.execute(req).await?);
    }

    #[allow(clippy::implicit_return)]
    async fn login_guest(&self) -> ApiResult<AccessToken> {
        let req = self.post("/api/login/guest", None);
        return required(self.execute(req).await?);
    }

    #[allow(clippy::implicit_return)]
    async fn register(&self, email: &str, password: &str) -> ApiResult<()> {
        let req = self.post("/api/register", None).json(&RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
        });

        return self.execute_empty(req).await;
    }

    #[allow(clippy::implicit_return)]
    async fn confirm(&self, email: &str, code: &str) -> ApiResult<()> {
        let req = self.post("/api/confirm", None).json(&ConfirmRequest {
            email: email.to_string(),
            code: code.to_string(),
        });

        return self.execute_empty(req).await;
    }

    #[allow(clippy::implicit_return)]
    async fn list_chats(&self, token: &str) -> ApiResult<Vec<ChatSummary>> {
        let res = self
            .execute::<ChatListResponse>(self.get("/api/chats", token))
            .await?;

        match res {
            Some(ChatListResponse::Many(chats)) => return Ok(chats),
            Some(ChatListResponse::One(chat)) => return Ok(vec![*chat]),
            None => return Ok(vec![]),
        }
    }

    #[allow(clippy::implicit_return)]
    async fn chat_history(&self, token: &str, chat_id: ChatId) -> ApiResult<Vec<HistoryMessage>> {
        let req = self.get(&format!("/api/chat/talk/{chat_id}"), token);
        let messages = self.execute::<Vec<HistoryMessage>>(req).await?;

        return Ok(messages.unwrap_or_default());
    }

    #[allow(clippy::implicit_return)]
    async fn send_message(
        &self,
        token: &str,
        chat_id: Option<ChatId>,
        message: &str,
    ) -> ApiResult<SendReply> {
        let req = self
            .post("/api/chat/message", Some(token))
            .json(&MessageRequest {
                chat_id,
                message: message.to_string(),
            });

        return required(self.execute(req).await?);
    }

    #[allow(clippy::implicit_return)]
    async fn send_image(
        &self,
        token: &str,
        chat_id: Option<ChatId>,
        prompt: &str,
        files: &[AttachmentFile],
    ) -> ApiResult<SendReply> {
        let mut form = multipart::Form::new().text("prompt", prompt.to_string());
        for file in files {
            let part = multipart::Part::bytes(file.bytes.clone())
                .file_name(file.name.to_string())
                .mime_str(&file.mime)
                .map_err(|err| return ApiError::invalid_response(&err.to_string()))?;
            form = form.part("file", part);
        }

        let mut req = self.post("/api/chat/image", Some(token));
        if let Some(id) = chat_id {
            req = req.query(&[("chat_id", id)]);
        }

        return required(self.execute(req.multipart(form)).await?);
    }

    #[allow(clippy::implicit_return)]
    async fn select_chat(&self, token: &str, chat_id: ChatId) -> ApiResult<Option<ChatSummary>> {
        let req = self
            .post("/api/chat/select", Some(token))
            .json(&ChatRequest { chat_id });

        return self.execute(req).await;
    }

    #[allow(clippy::implicit_return)]
    async fn rename_chat(
        &self,
        token: &str,
        chat_id: ChatId,
        title: &str,
    ) -> ApiResult<RenameReply> {
        let req = self
            .post("/api/chat/title", Some(token))
            .json(&TitleRequest {
                chat_id,
                title: title.to_string(),
            });

        let reply = self.execute::<RenameReply>(req).await?;
        return Ok(reply.unwrap_or_default());
    }

    #[allow(clippy::implicit_return)]
    async fn change_model(
        &self,
        token: &str,
        chat_id: ChatId,
        model_key: &str,
    ) -> ApiResult<ModelReply> {
        let req = self
            .post("/api/chat/model", Some(token))
            .json(&ModelRequest {
                chat_id,
                model_key: model_key.to_string(),
            });

        let reply = self.execute::<ModelReply>(req).await?;
        return Ok(reply.unwrap_or_default());
    }

    #[allow(clippy::implicit_return)]
    async fn delete_chat(&self, token: &str, chat_id: ChatId) -> ApiResult<()> {
        let req = self
            .post("/api/chat/delete", Some(token))
            .json(&ChatRequest { chat_id });

        return self.execute_empty(req).await;
    }

    #[allow(clippy::implicit_return)]
    async fn profile(&self, token: &str) -> ApiResult<Option<Profile>> {
        return self.execute(self.get("/api/profile", token)).await;
    }
}
