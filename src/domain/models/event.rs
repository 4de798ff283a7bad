use super::AttachmentPreview;
use super::Capability;
use super::ChatId;
use super::ChatSummary;
use super::Message;
use super::ProfileView;
use super::Prompt;
use super::Screen;
use super::SessionKind;

/// Everything the controller asks the renderer to show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    AttachmentsChanged(Vec<AttachmentPreview>),
    CapabilityChanged(Capability),
    ChatListChanged(Vec<ChatSummary>, Option<ChatId>),
    ChatTitleChanged(Option<String>),
    MessageAppended(Message),
    Notice(Message),
    ProfileChanged(ProfileView),
    PromptShown(Prompt),
    ScreenChanged(Screen),
    SessionChanged(SessionKind),
    ThinkingStarted(),
    ThinkingFinished(),
    ThreadCleared(),
    ThreadLoaded(Vec<Message>),
    Quit(),
}
