#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;

use super::SessionController;
use crate::domain::models::Action;

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /login [EMAIL] - Log in with email and password. The password is asked for separately.
- /google [ID_TOKEN] - Log in with a Google ID token.
- /guest - Continue as a guest. Guests get a few Quick requests before they have to log in.
- /register [EMAIL] - Create an account. You will be asked for a password twice.
- /confirm [CODE] - Confirm your email with the 6 character code you received.
- /forgot [EMAIL] - Start a password reset.
- /reset - Choose a new password after /forgot.
- /logout - Log out and forget the stored token.
- /new (/n) - Start a new chat.
- /chats (/ls) - Reload your chats from the server.
- /select (/s) [CHAT_ID] - Open a chat.
- /rename [CHAT_ID] [TITLE?] - Rename a chat. Without a title, starts editing the current title.
- /cancel - Stop renaming.
- /delete (/rm) [CHAT_ID] - Delete a chat.
- /mode (/m) [quick,smart,analyze-photo] - Switch the request type.
- /attach (/a) [PATH...] - Attach up to 5 images. Only works in analyze-photo mode.
- /detach [ATTACHMENT_ID] - Remove a staged image.
- /profile (/p) - Show your plan and usage.
- /subscription - Show subscription plans.
- /quit /exit (/q) - Exit Luch.
- /help (/h) - Provides this help menu.

Anything that is not a command is sent as a message with the current mode.
        "#;

    return text.trim().to_string();
}

pub struct ActionsService {}

impl ActionsService {
    /// Drives the controller one action at a time until the prompt quits or
    /// goes away.
    pub async fn start(
        mut controller: SessionController,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        controller.init().await?;

        while let Some(action) = rx.recv().await {
            let name: &'static str = (&action).into();
            tracing::debug!(action = name, "Handling action");
            match action {
                Action::Attach(paths) => controller.attach_files(paths).await?,
                Action::BeginRename(chat_id) => controller.begin_rename(chat_id)?,
                Action::CancelRename() => controller.cancel_rename()?,
                Action::ConfirmEmail(code) => controller.confirm_email(&code).await?,
                Action::DeleteChat(chat_id) => controller.delete_chat(chat_id).await?,
                Action::Detach(id) => controller.detach_file(&id)?,
                Action::EnterGuest() => controller.enter_guest().await?,
                Action::ForgotPassword(email) => controller.forgot_password(&email)?,
                Action::Help() => controller.help(&help_text())?,
                Action::LoadProfile() => controller.load_profile().await?,
                Action::LoginEmail(email, password) => {
                    controller.login_email(&email, &password).await?;
                }
                Action::LoginGoogle(id_token) => controller.login_google(&id_token).await?,
                Action::Logout() => controller.logout()?,
                Action::NewChat() => controller.new_chat()?,
                Action::RefreshChats() => controller.load_user_chats().await?,
                Action::Register(email, password, confirm) => {
                    controller.register(&email, &password, &confirm).await?;
                }
                Action::RenameChat(chat_id, title) => {
                    controller.rename_chat(chat_id, &title).await?;
                }
                Action::ResetPassword(password, confirm) => {
                    controller.reset_password(&password, &confirm)?;
                }
                Action::SelectChat(chat_id) => controller.select_chat(chat_id).await?,
                Action::SendMessage(text) => controller.send_message(&text).await?,
                Action::SetCapability(capability) => {
                    controller.set_capability(capability).await?;
                }
                Action::ShowScreen(screen) => controller.show_screen(screen)?,
                Action::Quit() => {
                    controller.quit()?;
                    return Ok(());
                }
            }
        }

        return Ok(());
    }
}
