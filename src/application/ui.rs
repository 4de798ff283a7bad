#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;
use yansi::Paint;

use crate::domain::models::AttachmentPreview;
use crate::domain::models::Author;
use crate::domain::models::ChatId;
use crate::domain::models::ChatSummary;
use crate::domain::models::Event;
use crate::domain::models::Message;
use crate::domain::models::MessageType;
use crate::domain::models::ProfileView;
use crate::domain::models::Prompt;
use crate::domain::models::Screen;
use crate::domain::models::MAX_ATTACHMENTS;

fn format_image(source: &str) -> String {
    let mime = source
        .strip_prefix("data:")
        .and_then(|rest| return rest.split(';').next())
        .unwrap_or("image");

    return format!("[{mime}]");
}

fn format_message(message: &Message) -> String {
    let author = message.author.to_string();
    match message.message_type() {
        MessageType::Normal => {
            let author = match message.author {
                Author::User => Paint::green(author).bold(),
                Author::Bot => Paint::cyan(author).bold(),
                Author::Luch => Paint::magenta(author).bold(),
            };
            return format!("{author}: {}", message.text);
        }
        MessageType::Error => {
            return Paint::red(format!("{author}: {}", message.text)).to_string();
        }
        MessageType::Reasoning => {
            return Paint::new(format!("{author} (reasoning): {}", message.text))
                .dimmed()
                .to_string();
        }
        MessageType::Image => {
            return format!(
                "{}: {}",
                Paint::green(author).bold(),
                format_image(&message.text)
            );
        }
    }
}

fn format_chats(chats: &[ChatSummary], current: Option<ChatId>) -> Vec<String> {
    if chats.is_empty() {
        return vec!["No chats yet.".to_string()];
    }

    let mut lines = vec![Paint::new("Chats:").bold().to_string()];
    for chat in chats {
        let marker = if Some(chat.id) == current { "*" } else { " " };
        let model = chat
            .model_key
            .as_deref()
            .map(|key| return format!(" ({key})"))
            .unwrap_or_default();
        lines.push(format!("{marker} #{} {}{model}", chat.id, chat.display_title()));
    }

    return lines;
}

fn format_attachments(attachments: &[AttachmentPreview]) -> Vec<String> {
    if attachments.is_empty() {
        return vec!["No images attached.".to_string()];
    }

    let mut lines = vec![format!(
        "Attached images ({}/{MAX_ATTACHMENTS}):",
        attachments.len()
    )];
    for attachment in attachments {
        lines.push(format!(
            "  [{}] {} ({} bytes)",
            attachment.id, attachment.name, attachment.size
        ));
    }

    return lines;
}

fn format_profile(profile: &ProfileView) -> Vec<String> {
    return vec![
        format!("{} ({})", Paint::new(&profile.username).bold(), profile.status),
        format!("Subscription until: {}", profile.expires),
        format!(
            "Quick: {} | Smart: {} | Photo analysis: {}",
            profile.fast, profile.smart, profile.vision
        ),
    ];
}

fn format_prompt(prompt: Prompt) -> Vec<String> {
    match prompt {
        Prompt::AuthActionRequired { limit_reached } => {
            let mut lines = vec![Paint::yellow("Please log in to continue.").to_string()];
            if limit_reached {
                lines.push(
                    "Your guest requests are used up. Use /login, /google or /register.".to_string(),
                );
            } else {
                lines.push(
                    "Use /login, /google or /register, or /guest to try it out first.".to_string(),
                );
            }
            return lines;
        }
        Prompt::AttachmentLimit => {
            return vec![Paint::yellow(format!(
                "You can attach at most {MAX_ATTACHMENTS} images to one request."
            ))
            .to_string()];
        }
    }
}

fn format_screen(screen: Screen) -> Vec<String> {
    let text = match screen {
        Screen::App => return vec![],
        Screen::Login => "Log in with /login [EMAIL] or /google [ID_TOKEN]. New here? /register",
        Screen::Register => "Create an account with /register [EMAIL].",
        Screen::VerifyEmail => "We sent you a code. Confirm your email with /confirm [CODE].",
        Screen::ForgotPassword => "Send /forgot [EMAIL] to reset your password.",
        Screen::ResetPassword => "Choose a new password with /reset.",
        Screen::PasswordChanged => "Your password was changed. Log in again with /login.",
        Screen::Subscription => {
            "Subscriptions raise your daily Smart and photo analysis limits. Your current plan is shown by /profile."
        }
    };

    return vec![
        Paint::new(screen.to_string()).underline().bold().to_string(),
        text.to_string(),
    ];
}

/// Turns a controller event in to terminal lines.
pub fn render(event: Event) -> Vec<String> {
    match event {
        Event::AttachmentsChanged(attachments) => return format_attachments(&attachments),
        Event::CapabilityChanged(capability) => {
            return vec![format!("Mode: {}", Paint::cyan(capability))];
        }
        Event::ChatListChanged(chats, current) => return format_chats(&chats, current),
        Event::ChatTitleChanged(title) => {
            return title
                .map(|title| return Paint::new(format!("== {title} ==")).bold().to_string())
                .into_iter()
                .collect();
        }
        Event::MessageAppended(message) | Event::Notice(message) => {
            return vec![format_message(&message)];
        }
        Event::ProfileChanged(profile) => return format_profile(&profile),
        Event::PromptShown(prompt) => return format_prompt(prompt),
        Event::ScreenChanged(screen) => return format_screen(screen),
        Event::SessionChanged(kind) => {
            return vec![Paint::new(format!("Session: {kind}")).dimmed().to_string()];
        }
        Event::ThinkingStarted() => {
            return vec![Paint::new("Thinking...").dimmed().italic().to_string()];
        }
        Event::ThinkingFinished() => return vec![],
        Event::ThreadCleared() => return vec!["".to_string()],
        Event::ThreadLoaded(messages) => {
            return messages.iter().map(format_message).collect();
        }
        Event::Quit() => return vec!["Bye!".to_string()],
    }
}

/// Prints events until the controller quits or goes away.
pub async fn start(mut rx: mpsc::UnboundedReceiver<Event>) -> Result<()> {
    while let Some(event) = rx.recv().await {
        let quit = event == Event::Quit();
        for line in render(event) {
            println!("{line}");
        }

        if quit {
            break;
        }
    }

    return Ok(());
}
