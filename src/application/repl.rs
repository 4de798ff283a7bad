#[cfg(test)]
#[path = "repl_test.rs"]
mod tests;

use std::path::PathBuf;

use anyhow::bail;
use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use dialoguer::Input;
use dialoguer::Password;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tokio::sync::mpsc;
use yansi::Paint;

use crate::domain::models::Action;
use crate::domain::models::Capability;
use crate::domain::models::ChatId;
use crate::domain::models::Screen;
use crate::domain::models::SlashCommand;

/// Questions the prompt asks outside of the main input line.
pub trait Asker {
    fn input(&mut self, prompt: &str) -> Result<String>;

    fn password(&mut self, prompt: &str) -> Result<String>;

    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

pub struct TerminalAsker {}

impl Asker for TerminalAsker {
    fn input(&mut self, prompt: &str) -> Result<String> {
        let text = Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .interact_text()?;

        return Ok(text);
    }

    fn password(&mut self, prompt: &str) -> Result<String> {
        let password = Password::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .interact()?;

        return Ok(password);
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(false)
            .interact()?;

        return Ok(confirmed);
    }
}

fn arg_or_ask(cmd: &SlashCommand, asker: &mut dyn Asker, prompt: &str) -> Result<String> {
    let rest = cmd.rest(0);
    if !rest.is_empty() {
        return Ok(rest);
    }

    return asker.input(prompt);
}

fn chat_id_arg(cmd: &SlashCommand) -> Result<ChatId> {
    let arg = match cmd.args.first() {
        Some(arg) => arg,
        None => bail!("A chat id is required. /chats lists them."),
    };

    match arg.parse::<ChatId>() {
        Ok(id) => return Ok(id),
        Err(_) => bail!(format!("'{arg}' is not a chat id.")),
    }
}

/// Translates one line of input in to an action. Blank lines and declined
/// confirmations produce nothing.
pub fn to_action(line: &str, asker: &mut dyn Asker) -> Result<Option<Action>> {
    let text = line.trim();
    if text.is_empty() {
        return Ok(None);
    }

    let cmd = match SlashCommand::parse(text) {
        Some(cmd) => cmd,
        None => return Ok(Some(Action::SendMessage(text.to_string()))),
    };

    if cmd.is_quit() {
        return Ok(Some(Action::Quit()));
    }
    if cmd.is_help() {
        return Ok(Some(Action::Help()));
    }
    if cmd.is_login() {
        let email = arg_or_ask(&cmd, asker, "Email")?;
        let password = asker.password("Password")?;
        return Ok(Some(Action::LoginEmail(email, password)));
    }
    if cmd.is_login_google() {
        let id_token = arg_or_ask(&cmd, asker, "Google ID token")?;
        return Ok(Some(Action::LoginGoogle(id_token)));
    }
    if cmd.is_guest() {
        return Ok(Some(Action::EnterGuest()));
    }
    if cmd.is_register() {
        let email = arg_or_ask(&cmd, asker, "Email")?;
        let password = asker.password("Password")?;
        let confirm = asker.password("Repeat password")?;
        return Ok(Some(Action::Register(email, password, confirm)));
    }
    if cmd.is_confirm() {
        let code = arg_or_ask(&cmd, asker, "Confirmation code")?;
        return Ok(Some(Action::ConfirmEmail(code)));
    }
    if cmd.is_forgot_password() {
        let email = arg_or_ask(&cmd, asker, "Email")?;
        return Ok(Some(Action::ForgotPassword(email)));
    }
    if cmd.is_reset_password() {
        let password = asker.password("New password")?;
        let confirm = asker.password("Repeat new password")?;
        return Ok(Some(Action::ResetPassword(password, confirm)));
    }
    if cmd.is_logout() {
        return Ok(Some(Action::Logout()));
    }
    if cmd.is_new_chat() {
        return Ok(Some(Action::NewChat()));
    }
    if cmd.is_chat_list() {
        return Ok(Some(Action::RefreshChats()));
    }
    if cmd.is_select() {
        return Ok(Some(Action::SelectChat(chat_id_arg(&cmd)?)));
    }
    if cmd.is_rename() {
        let chat_id = chat_id_arg(&cmd)?;
        let title = cmd.rest(1);
        if title.is_empty() {
            return Ok(Some(Action::BeginRename(chat_id)));
        }
        return Ok(Some(Action::RenameChat(chat_id, title)));
    }
    if cmd.is_cancel() {
        return Ok(Some(Action::CancelRename()));
    }
    if cmd.is_delete() {
        let chat_id = chat_id_arg(&cmd)?;
        if !asker.confirm(&format!("Delete chat #{chat_id}?"))? {
            return Ok(None);
        }
        return Ok(Some(Action::DeleteChat(chat_id)));
    }
    if cmd.is_mode() {
        let capability = cmd
            .args
            .first()
            .and_then(|arg| return Capability::parse(arg));
        match capability {
            Some(capability) => return Ok(Some(Action::SetCapability(capability))),
            None => bail!("Pick one of quick, smart or analyze-photo."),
        }
    }
    if cmd.is_attach() {
        if cmd.args.is_empty() {
            bail!("Give at least one image path to attach.");
        }
        let paths = cmd
            .args
            .iter()
            .map(PathBuf::from)
            .collect::<Vec<PathBuf>>();
        return Ok(Some(Action::Attach(paths)));
    }
    if cmd.is_detach() {
        match cmd.args.first() {
            Some(id) => return Ok(Some(Action::Detach(id.to_string()))),
            None => bail!("Give the id of the attachment to remove."),
        }
    }
    if cmd.is_profile() {
        return Ok(Some(Action::LoadProfile()));
    }
    if cmd.is_subscription() {
        return Ok(Some(Action::ShowScreen(Screen::Subscription)));
    }

    return Ok(Some(Action::SendMessage(text.to_string())));
}

/// Reads lines until the user quits or input closes. Runs on a blocking
/// thread since both the line editor and the prompts own the terminal.
pub fn start(tx: mpsc::UnboundedSender<Action>) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    let mut asker = TerminalAsker {};

    loop {
        let line = match editor.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                tx.send(Action::Quit())?;
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        if !line.trim().is_empty() {
            editor.add_history_entry(line.as_str())?;
        }

        match to_action(&line, &mut asker) {
            Ok(Some(action)) => {
                let quit = action == Action::Quit();
                tx.send(action)?;
                if quit {
                    return Ok(());
                }
            }
            Ok(None) => {}
            Err(err) => eprintln!("{}", Paint::red(err.to_string())),
        }
    }
}
