#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;

use std::path::PathBuf;

use anyhow::Result;
use tokio::sync::mpsc;

use super::attachments;
use crate::domain::models::ApiBox;
use crate::domain::models::ApiError;
use crate::domain::models::Attachments;
use crate::domain::models::Author;
use crate::domain::models::BotAnswer;
use crate::domain::models::Capability;
use crate::domain::models::ChatId;
use crate::domain::models::ChatList;
use crate::domain::models::Denial;
use crate::domain::models::Event;
use crate::domain::models::HistoryMessage;
use crate::domain::models::Message;
use crate::domain::models::MessageType;
use crate::domain::models::ProfileView;
use crate::domain::models::Prompt;
use crate::domain::models::Screen;
use crate::domain::models::SessionState;
use crate::domain::models::StoreBox;
use crate::domain::models::StoreKey;
use crate::domain::models::TitleEdit;
use crate::domain::models::MAX_TITLE_LENGTH;

const CONFIRMATION_CODE_LENGTH: usize = 6;

fn history_to_messages(entry: HistoryMessage) -> Vec<Message> {
    let content = match entry.content {
        Some(content) => content,
        None => return vec![],
    };

    if entry.role == "user" {
        return vec![Message::new(Author::User, &content)];
    }

    return BotAnswer::parse(&content).into_messages();
}

/// Owns the client side session: who the user is, which chat is selected,
/// the chat list, the active capability and the staged attachments. Every
/// change is reported to the renderer as an `Event`.
pub struct SessionController {
    api: ApiBox,
    store: StoreBox,
    tx: mpsc::UnboundedSender<Event>,
    session: SessionState,
    chats: ChatList,
    current_chat: Option<ChatId>,
    capability: Capability,
    attachments: Attachments,
    title_edit: TitleEdit,
    registered_email: Option<String>,
    reset_email: Option<String>,
}

impl SessionController {
    /// Restores the session from the store. A stored token is trusted without
    /// a verification call.
    pub fn new(
        api: ApiBox,
        store: StoreBox,
        guest_request_limit: u32,
        tx: mpsc::UnboundedSender<Event>,
    ) -> SessionController {
        let auth_token = store.get(StoreKey::AuthToken);
        let guest_requests = store
            .get(StoreKey::GuestRequests)
            .and_then(|count| return count.parse::<u32>().ok())
            .unwrap_or(0);

        return SessionController {
            api,
            store,
            tx,
            session: SessionState::restore(auth_token, guest_requests, guest_request_limit),
            chats: ChatList::default(),
            current_chat: None,
            capability: Capability::default(),
            attachments: Attachments::default(),
            title_edit: TitleEdit::default(),
            registered_email: None,
            reset_email: None,
        };
    }

    pub fn session(&self) -> &SessionState {
        return &self.session;
    }

    pub fn current_chat(&self) -> Option<ChatId> {
        return self.current_chat;
    }

    pub fn capability(&self) -> Capability {
        return self.capability;
    }

    fn emit(&self, event: Event) -> Result<()> {
        self.tx.send(event)?;
        return Ok(());
    }

    fn notice(&self, text: &str) -> Result<()> {
        return self.emit(Event::Notice(Message::new(Author::Luch, text)));
    }

    fn error_notice(&self, text: &str) -> Result<()> {
        return self.emit(Event::Notice(Message::new_with_type(
            Author::Luch,
            MessageType::Error,
            text,
        )));
    }

    fn deny(&self, denial: Denial) -> Result<()> {
        tracing::debug!(?denial, session = %self.session.kind(), "Action denied");
        match denial {
            Denial::NoSession { limit_reached } => {
                return self.emit(Event::PromptShown(Prompt::AuthActionRequired {
                    limit_reached,
                }));
            }
            Denial::GuestLimitReached => {
                return self.emit(Event::PromptShown(Prompt::AuthActionRequired {
                    limit_reached: true,
                }));
            }
            Denial::GuestCapability => {
                return self.notice("Guest mode only supports Quick requests.");
            }
        }
    }

    /// Reports a failed remote call. A rejected token while authenticated
    /// ends the session.
    fn api_failure(&mut self, err: &ApiError) -> Result<()> {
        if err.is_unauthorized() && self.session.is_authenticated() {
            return self.force_logout();
        }

        return self.error_notice(&err.message);
    }

    fn auth_token(&self) -> String {
        return self.session.token().unwrap_or_default().to_string();
    }

    fn header_title(&self) -> Option<String> {
        if let Some(chat) = self.current_chat.and_then(|id| return self.chats.get(id)) {
            return Some(chat.display_title());
        }

        return None;
    }

    fn emit_chat_list(&self) -> Result<()> {
        return self.emit(Event::ChatListChanged(
            self.chats.as_slice().to_vec(),
            self.current_chat,
        ));
    }

    fn emit_attachments(&self) -> Result<()> {
        return self.emit(Event::AttachmentsChanged(self.attachments.previews()));
    }

    fn clear_attachments(&mut self) -> Result<()> {
        if self.attachments.is_empty() {
            return Ok(());
        }

        self.attachments.clear();
        return self.emit_attachments();
    }

    fn apply_capability(&mut self, capability: Capability) -> Result<()> {
        if !capability.accepts_attachments() {
            self.clear_attachments()?;
        }

        self.capability = capability;
        return self.emit(Event::CapabilityChanged(capability));
    }

    /// Empty thread with no chat selected.
    fn show_welcome(&mut self, header: Option<&str>) -> Result<()> {
        self.current_chat = None;
        self.emit(Event::ThreadCleared())?;
        return self.emit(Event::ChatTitleChanged(
            header.map(|title| return title.to_string()),
        ));
    }

    fn reset_chat_state(&mut self) -> Result<()> {
        self.chats.clear();
        self.current_chat = None;
        self.title_edit.cancel();
        self.attachments.clear();
        self.capability = Capability::default();

        self.emit(Event::AttachmentsChanged(vec![]))?;
        self.emit(Event::CapabilityChanged(self.capability))?;
        return self.emit_chat_list();
    }

    /// Announces the restored session and loads its data.
    pub async fn init(&mut self) -> Result<()> {
        self.emit(Event::SessionChanged(self.session.kind()))?;
        self.emit(Event::CapabilityChanged(self.capability))?;
        self.emit(Event::ScreenChanged(Screen::App))?;

        if self.session.is_authenticated() {
            self.load_user_chats().await?;
            return self.load_profile().await;
        }

        self.emit(Event::ProfileChanged(ProfileView::default()))?;
        return self.show_welcome(None);
    }

    async fn establish(&mut self, token: &str) -> Result<()> {
        if let Err(err) = self.session.authenticate(token) {
            return self.error_notice(&err.to_string());
        }

        self.store.set(StoreKey::AuthToken, token)?;
        self.store.remove(StoreKey::GuestRequests)?;
        tracing::debug!("Session authenticated");

        self.reset_chat_state()?;
        self.emit(Event::SessionChanged(self.session.kind()))?;
        self.emit(Event::ScreenChanged(Screen::App))?;
        self.load_user_chats().await?;
        return self.load_profile().await;
    }

    pub async fn login_email(&mut self, email: &str, password: &str) -> Result<()> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return self.error_notice("Please enter your email and password.");
        }

        match self.api.login_email(email, password).await {
            Ok(token) => return self.establish(&token.access_token).await,
            Err(err) => return self.error_notice(&err.message),
        }
    }

    pub async fn login_google(&mut self, id_token: &str) -> Result<()> {
        let id_token = id_token.trim();
        if id_token.is_empty() {
            return self.error_notice("A Google ID token is required.");
        }

        match self.api.login_google(id_token).await {
            Ok(token) => return self.establish(&token.access_token).await,
            Err(err) => return self.error_notice(&err.message),
        }
    }

    /// Starts a guest session. Refused while the persisted guest allowance is
    /// used up, so the limit holds across restarts.
    pub async fn enter_guest(&mut self) -> Result<()> {
        if self.session.is_authenticated() {
            return self.notice("You are already logged in.");
        }

        if self.session.is_guest() {
            return self.notice("You are already using Luch as a guest.");
        }

        if self.session.guest_limit_reached() {
            return self.deny(Denial::NoSession {
                limit_reached: true,
            });
        }

        let token = match self.api.login_guest().await {
            Ok(token) => token,
            Err(err) => return self.error_notice(&err.message),
        };

        if let Err(err) = self.session.enter_guest(&token.access_token) {
            return self.error_notice(&err.to_string());
        }

        self.store.set(
            StoreKey::GuestRequests,
            &self.session.guest_request_count().to_string(),
        )?;

        self.reset_chat_state()?;
        self.emit(Event::SessionChanged(self.session.kind()))?;
        self.emit(Event::ScreenChanged(Screen::App))?;
        return self.show_welcome(Some("Guest chat"));
    }

    pub async fn register(&mut self, email: &str, password: &str, confirm: &str) -> Result<()> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() || confirm.is_empty() {
            return self.error_notice("Please fill in all fields.");
        }

        if password != confirm {
            return self.error_notice("Passwords do not match.");
        }

        if let Err(err) = self.api.register(email, password).await {
            return self.error_notice(&err.message);
        }

        self.registered_email = Some(email.to_string());
        self.emit(Event::ScreenChanged(Screen::VerifyEmail))?;
        return self.notice(&format!(
            "We sent a {CONFIRMATION_CODE_LENGTH}-digit code to {email}. Enter it with /confirm."
        ));
    }

    pub async fn confirm_email(&mut self, code: &str) -> Result<()> {
        let email = match &self.registered_email {
            Some(email) => email.to_string(),
            None => return self.error_notice("Register first to receive a confirmation code."),
        };

        let code = code.trim();
        if code.chars().count() != CONFIRMATION_CODE_LENGTH {
            return self.error_notice(&format!(
                "Please enter the {CONFIRMATION_CODE_LENGTH}-digit code from the email."
            ));
        }

        if let Err(err) = self.api.confirm(&email, code).await {
            return self.error_notice(&err.message);
        }

        self.registered_email = None;
        self.emit(Event::ScreenChanged(Screen::Login))?;
        return self.notice("Email confirmed. You can now log in.");
    }

    /// Local only. No reset email is sent.
    pub fn forgot_password(&mut self, email: &str) -> Result<()> {
        let email = email.trim();
        if email.is_empty() {
            return self.error_notice("Please enter your email.");
        }

        self.reset_email = Some(email.to_string());
        self.emit(Event::ScreenChanged(Screen::ResetPassword))?;
        return self.notice(&format!("Choose a new password for {email}."));
    }

    /// Local only. The new password is never sent anywhere.
    pub fn reset_password(&mut self, password: &str, confirm: &str) -> Result<()> {
        if password.is_empty() || confirm.is_empty() {
            return self.error_notice("Please fill in both password fields.");
        }

        if password != confirm {
            return self.error_notice("Passwords do not match.");
        }

        self.emit(Event::ScreenChanged(Screen::PasswordChanged))?;
        if let Some(email) = self.reset_email.take() {
            return self.notice(&format!(
                "The password for {email} was changed. You can now log in."
            ));
        }

        return Ok(());
    }

    /// Ends an authenticated session. Guests only leave by logging in, so the
    /// guest request counter can not be reset from the prompt.
    pub fn logout(&mut self) -> Result<()> {
        if self.session.is_guest() {
            return self.notice("Guest sessions end when you log in or register.");
        }

        self.session.logout();
        self.store.remove(StoreKey::AuthToken)?;
        self.store.remove(StoreKey::GuestRequests)?;
        tracing::debug!("Session cleared");

        self.reset_chat_state()?;
        self.emit(Event::SessionChanged(self.session.kind()))?;
        self.emit(Event::ProfileChanged(ProfileView::default()))?;
        self.emit(Event::ScreenChanged(Screen::App))?;
        return self.show_welcome(None);
    }

    fn force_logout(&mut self) -> Result<()> {
        tracing::warn!("Stored token rejected by the server, logging out");
        self.logout()?;
        self.emit(Event::ScreenChanged(Screen::Login))?;
        return self.error_notice("Your session has expired. Please log in again.");
    }

    pub fn show_screen(&self, screen: Screen) -> Result<()> {
        return self.emit(Event::ScreenChanged(screen));
    }

    /// Syncs the chat list with the server. The active chat becomes current;
    /// with none active the first chat is selected.
    pub async fn load_user_chats(&mut self) -> Result<()> {
        if !self.session.is_authenticated() {
            return self.notice("Log in to see your chats.");
        }

        let chats = match self.api.list_chats(&self.auth_token()).await {
            Ok(chats) => chats,
            Err(err) => return self.api_failure(&err),
        };

        self.chats.replace(chats);
        self.current_chat = self.chats.active_id();
        self.emit_chat_list()?;

        if let Some(chat_id) = self.current_chat {
            self.emit(Event::ChatTitleChanged(self.header_title()))?;
            return self.load_chat_messages(chat_id).await;
        }

        if let Some(first) = self.chats.first_id() {
            return self.select_chat(first).await;
        }

        return self.show_welcome(None);
    }

    async fn load_chat_messages(&mut self, chat_id: ChatId) -> Result<()> {
        if !self.session.is_authenticated() {
            return self.show_welcome(Some("Guest chat"));
        }

        match self.api.chat_history(&self.auth_token(), chat_id).await {
            Ok(history) => {
                let messages = history
                    .into_iter()
                    .rev()
                    .flat_map(history_to_messages)
                    .collect::<Vec<Message>>();

                return self.emit(Event::ThreadLoaded(messages));
            }
            Err(err) => {
                if err.is_unauthorized() {
                    return self.force_logout();
                }

                self.emit(Event::ThreadCleared())?;
                return self.emit(Event::MessageAppended(Message::new_with_type(
                    Author::Luch,
                    MessageType::Error,
                    &format!("Failed to load messages: {}", err.message),
                )));
            }
        }
    }

    /// Makes `chat_id` the selected chat once the server confirmed it. A
    /// failure leaves the selection untouched.
    pub async fn select_chat(&mut self, chat_id: ChatId) -> Result<()> {
        if !self.session.is_authenticated() {
            return self.deny(Denial::NoSession {
                limit_reached: self.session.guest_limit_reached(),
            });
        }

        if self.chats.get(chat_id).is_none() {
            return self.error_notice(&format!("There is no chat #{chat_id}."));
        }

        let selected = match self.api.select_chat(&self.auth_token(), chat_id).await {
            Ok(selected) => selected,
            Err(err) => {
                tracing::error!(chat_id, error = %err, "Failed to select chat");
                return self.api_failure(&err);
            }
        };

        let selected_id = selected
            .map(|chat| return chat.id)
            .filter(|id| return self.chats.get(*id).is_some())
            .unwrap_or(chat_id);

        self.chats.mark_active(selected_id);
        self.current_chat = Some(selected_id);
        self.title_edit.cancel();

        self.emit_chat_list()?;
        self.emit(Event::ChatTitleChanged(self.header_title()))?;
        return self.load_chat_messages(selected_id).await;
    }

    pub fn new_chat(&mut self) -> Result<()> {
        if let Err(denial) = self.session.check_session() {
            return self.deny(denial);
        }

        self.title_edit.cancel();
        if self.session.is_guest() {
            return self.show_welcome(Some("Guest chat"));
        }

        self.show_welcome(Some("New chat"))?;
        return self.emit_chat_list();
    }

    /// Switches the capability used for the next request. With a selected
    /// chat the server has to accept the new model first.
    pub async fn set_capability(&mut self, capability: Capability) -> Result<()> {
        if let Err(denial) = self.session.check(capability) {
            return self.deny(denial);
        }

        if capability == self.capability {
            return Ok(());
        }

        let selected = self
            .current_chat
            .filter(|_| return self.session.is_authenticated());
        if let Some(chat_id) = selected {
            let reply = match self
                .api
                .change_model(&self.auth_token(), chat_id, capability.model_key())
                .await
            {
                Ok(reply) => reply,
                Err(err) => return self.api_failure(&err),
            };

            let model_key = reply
                .model_key
                .unwrap_or_else(|| return capability.model_key().to_string());
            self.chats.set_model_key(chat_id, &model_key);
            self.emit_chat_list()?;
        }

        return self.apply_capability(capability);
    }

    /// Stages images for the next analyze-photo request. The batch is added
    /// all at once after every file was read, or not at all when it would
    /// exceed the attachment limit.
    pub async fn attach_files(&mut self, paths: Vec<PathBuf>) -> Result<()> {
        if let Err(denial) = self.session.check(self.capability) {
            return self.deny(denial);
        }

        if !self.capability.accepts_attachments() {
            return self.notice("Switch to the analyze-photo mode to attach images.");
        }

        if paths.is_empty() {
            return Ok(());
        }

        if !self.attachments.can_accept(paths.len()) {
            return self.emit(Event::PromptShown(Prompt::AttachmentLimit));
        }

        let batch = attachments::load_batch(&paths).await;
        let skipped = paths.len() - batch.len();
        if skipped > 0 {
            self.notice(&format!(
                "Skipped {skipped} file(s). Only readable png, jpeg, gif, webp or bmp images can be attached."
            ))?;
        }

        self.attachments.extend(batch);
        return self.emit_attachments();
    }

    pub fn detach_file(&mut self, id: &str) -> Result<()> {
        if !self.attachments.remove(id) {
            return self.error_notice(&format!("No attachment with id {id}."));
        }

        return self.emit_attachments();
    }

    /// Sends `text` and the staged attachments with the active capability.
    pub async fn send_message(&mut self, text: &str) -> Result<()> {
        let text = text.trim();

        if let Err(denial) = self.session.check_session() {
            return self.deny(denial);
        }

        if self.session.is_guest() && !self.capability.allowed_for_guest() {
            self.deny(Denial::GuestCapability)?;
            self.clear_attachments()?;
            return self.apply_capability(Capability::Quick);
        }

        if text.is_empty() && self.attachments.is_empty() {
            return self.error_notice("Type a message or attach an image first.");
        }

        if self.capability.accepts_attachments() && self.attachments.is_empty() {
            return self.error_notice("Attach at least one image to use analyze-photo.");
        }

        if !self.capability.accepts_attachments() && !self.attachments.is_empty() {
            self.notice("Attachments are only sent in analyze-photo mode and were removed.")?;
            self.clear_attachments()?;
            if text.is_empty() {
                return Ok(());
            }
        }

        let token = self.auth_token();
        let chat_id = if self.session.is_authenticated() {
            self.current_chat
        } else {
            None
        };
        let capability = self.capability;

        let staged = self.attachments.take();
        if !staged.is_empty() {
            self.emit_attachments()?;
        }

        if !text.is_empty() {
            self.emit(Event::MessageAppended(Message::new(Author::User, text)))?;
        }

        for attachment in staged.iter() {
            self.emit(Event::MessageAppended(Message::new_with_type(
                Author::User,
                MessageType::Image,
                &attachment.preview_source,
            )))?;
        }

        if capability == Capability::Smart {
            self.emit(Event::ThinkingStarted())?;
        }

        let res = if capability.accepts_attachments() {
            let files = staged
                .into_iter()
                .map(|attachment| return attachment.file)
                .collect::<Vec<_>>();
            self.api.send_image(&token, chat_id, text, &files).await
        } else {
            self.api.send_message(&token, chat_id, text).await
        };

        if capability == Capability::Smart {
            self.emit(Event::ThinkingFinished())?;
        }

        let reply = match res {
            Ok(reply) => reply,
            Err(err) => {
                if err.is_unauthorized() && self.session.is_authenticated() {
                    return self.force_logout();
                }

                return self.emit(Event::MessageAppended(Message::new_with_type(
                    Author::Bot,
                    MessageType::Error,
                    &format!("Error: {}", err.message),
                )));
            }
        };

        let answer = BotAnswer::parse(&reply.answer.unwrap_or_default());
        for message in answer.into_messages() {
            self.emit(Event::MessageAppended(message))?;
        }

        if self.session.is_guest() {
            return self.record_guest_request();
        }

        match reply.chat_id {
            Some(reply_chat) if Some(reply_chat) != self.current_chat => {
                self.current_chat = Some(reply_chat);
                return self.resync_chats().await;
            }
            _ => {
                if let Some(chat_id) = self.current_chat {
                    let model_key = reply
                        .model_key
                        .unwrap_or_else(|| return capability.model_key().to_string());
                    self.chats.touch(chat_id, Some(&model_key));
                    self.emit_chat_list()?;
                }
            }
        }

        return Ok(());
    }

    /// Refreshes the chat list after the server started a new chat, keeping
    /// the thread as it is.
    async fn resync_chats(&mut self) -> Result<()> {
        let chats = match self.api.list_chats(&self.auth_token()).await {
            Ok(chats) => chats,
            Err(err) => return self.api_failure(&err),
        };

        self.chats.replace(chats);
        if let Some(chat_id) = self.current_chat {
            if self.chats.get(chat_id).is_some() {
                self.chats.mark_active(chat_id);
            }
        }

        self.emit_chat_list()?;
        return self.emit(Event::ChatTitleChanged(self.header_title()));
    }

    fn record_guest_request(&mut self) -> Result<()> {
        let count = self.session.record_guest_request();
        self.store.set(StoreKey::GuestRequests, &count.to_string())?;

        if self.session.guest_limit_reached() {
            self.notice(&format!(
                "You have used all {} guest requests. Log in or register to keep chatting.",
                self.session.guest_request_limit()
            ))?;
            return self.emit(Event::PromptShown(Prompt::AuthActionRequired {
                limit_reached: true,
            }));
        }

        return Ok(());
    }

    pub fn begin_rename(&mut self, chat_id: ChatId) -> Result<()> {
        if !self.session.is_authenticated() {
            return self.deny(Denial::NoSession {
                limit_reached: self.session.guest_limit_reached(),
            });
        }

        let title = match self.chats.get(chat_id) {
            Some(chat) => chat.display_title(),
            None => return self.error_notice(&format!("There is no chat #{chat_id}.")),
        };

        self.title_edit.begin(chat_id, &title);
        return self.notice(&format!(
            "Renaming \"{title}\". Send /rename {chat_id} <title> to save or /cancel to keep it."
        ));
    }

    pub fn cancel_rename(&mut self) -> Result<()> {
        if self.title_edit.editing_chat().is_none() {
            return Ok(());
        }

        self.title_edit.cancel();
        return self.notice("Rename cancelled.");
    }

    /// Commits a title edit for `chat_id`. Unchanged or blank titles are
    /// dropped without a request.
    pub async fn rename_chat(&mut self, chat_id: ChatId, title: &str) -> Result<()> {
        if !self.session.is_authenticated() {
            return self.deny(Denial::NoSession {
                limit_reached: self.session.guest_limit_reached(),
            });
        }

        let original = match self.chats.get(chat_id) {
            Some(chat) => chat.display_title(),
            None => return self.error_notice(&format!("There is no chat #{chat_id}.")),
        };

        if self.title_edit.editing_chat() != Some(chat_id) {
            self.title_edit.begin(chat_id, &original);
        }
        self.title_edit.input(title);

        let (chat_id, title) = match self.title_edit.commit() {
            Some(rename) => rename,
            None => return self.notice("The title was left unchanged."),
        };

        if title.chars().count() > MAX_TITLE_LENGTH {
            return self.error_notice(&format!(
                "Chat titles can be at most {MAX_TITLE_LENGTH} characters long."
            ));
        }

        let reply = match self.api.rename_chat(&self.auth_token(), chat_id, &title).await {
            Ok(reply) => reply,
            Err(err) => return self.api_failure(&err),
        };

        self.chats.set_title(chat_id, &reply.title.unwrap_or(title));
        self.emit_chat_list()?;
        if self.current_chat == Some(chat_id) {
            self.emit(Event::ChatTitleChanged(self.header_title()))?;
        }

        return Ok(());
    }

    /// Deletes a chat once the server confirmed it. Losing the selection
    /// selects the first remaining chat.
    pub async fn delete_chat(&mut self, chat_id: ChatId) -> Result<()> {
        if !self.session.is_authenticated() {
            return self.deny(Denial::NoSession {
                limit_reached: self.session.guest_limit_reached(),
            });
        }

        if self.chats.get(chat_id).is_none() {
            return self.error_notice(&format!("There is no chat #{chat_id}."));
        }

        if let Err(err) = self.api.delete_chat(&self.auth_token(), chat_id).await {
            return self.api_failure(&err);
        }

        self.chats.remove(chat_id);
        if self.title_edit.editing_chat() == Some(chat_id) {
            self.title_edit.cancel();
        }
        if self.current_chat == Some(chat_id) {
            self.current_chat = None;
        }

        self.emit_chat_list()?;
        if self.current_chat.is_some() {
            return Ok(());
        }

        if let Some(first) = self.chats.first_id() {
            return self.select_chat(first).await;
        }

        return self.show_welcome(None);
    }

    pub async fn load_profile(&mut self) -> Result<()> {
        if !self.session.is_authenticated() {
            return self.emit(Event::ProfileChanged(ProfileView::default()));
        }

        match self.api.profile(&self.auth_token()).await {
            Ok(Some(profile)) => {
                return self.emit(Event::ProfileChanged(ProfileView::from(&profile)));
            }
            Ok(None) => return self.emit(Event::ProfileChanged(ProfileView::default())),
            Err(err) => {
                if err.is_unauthorized() {
                    return self.force_logout();
                }

                tracing::warn!(error = %err, "Failed to load profile");
                return self.emit(Event::ProfileChanged(ProfileView::default()));
            }
        }
    }

    pub fn help(&self, text: &str) -> Result<()> {
        return self.notice(text);
    }

    pub fn quit(&self) -> Result<()> {
        return self.emit(Event::Quit());
    }
}
