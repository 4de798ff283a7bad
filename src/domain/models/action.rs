use std::path::PathBuf;

use super::Capability;
use super::ChatId;
use super::Screen;

/// Requests from the prompt to the controller.
#[derive(Clone, Debug, PartialEq, Eq, strum::IntoStaticStr)]
pub enum Action {
    Attach(Vec<PathBuf>),
    BeginRename(ChatId),
    CancelRename(),
    ConfirmEmail(String),
    DeleteChat(ChatId),
    Detach(String),
    EnterGuest(),
    ForgotPassword(String),
    Help(),
    LoadProfile(),
    LoginEmail(String, String),
    LoginGoogle(String),
    Logout(),
    NewChat(),
    RefreshChats(),
    Register(String, String, String),
    RenameChat(ChatId, String),
    ResetPassword(String, String),
    SelectChat(ChatId),
    SendMessage(String),
    SetCapability(Capability),
    ShowScreen(Screen),
    Quit(),
}
