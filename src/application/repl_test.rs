use std::collections::VecDeque;
use std::path::PathBuf;

use anyhow::Result;

use super::to_action;
use super::Asker;
use crate::domain::models::Action;
use crate::domain::models::Capability;
use crate::domain::models::Screen;

#[derive(Default)]
struct ScriptedAsker {
    answers: VecDeque<String>,
    confirm: bool,
    asked: Vec<String>,
}

impl ScriptedAsker {
    fn with_answers(answers: &[&str]) -> ScriptedAsker {
        return ScriptedAsker {
            answers: answers.iter().map(|e| return e.to_string()).collect(),
            ..ScriptedAsker::default()
        };
    }

    fn next(&mut self, prompt: &str) -> Result<String> {
        self.asked.push(prompt.to_string());
        return Ok(self.answers.pop_front().unwrap_or_default());
    }
}

impl Asker for ScriptedAsker {
    fn input(&mut self, prompt: &str) -> Result<String> {
        return self.next(prompt);
    }

    fn password(&mut self, prompt: &str) -> Result<String> {
        return self.next(prompt);
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        self.asked.push(prompt.to_string());
        return Ok(self.confirm);
    }
}

#[test]
fn it_ignores_blank_lines() -> Result<()> {
    let mut asker = ScriptedAsker::default();
    assert_eq!(to_action("   ", &mut asker)?, None);
    return Ok(());
}

#[test]
fn it_sends_plain_text() -> Result<()> {
    let mut asker = ScriptedAsker::default();
    assert_eq!(
        to_action("  what is rust?  ", &mut asker)?,
        Some(Action::SendMessage("what is rust?".to_string()))
    );
    return Ok(());
}

#[test]
fn it_sends_unknown_commands_as_text() -> Result<()> {
    let mut asker = ScriptedAsker::default();
    assert_eq!(
        to_action("/shrug", &mut asker)?,
        Some(Action::SendMessage("/shrug".to_string()))
    );
    return Ok(());
}

#[test]
fn it_logs_in_with_a_hidden_password() -> Result<()> {
    let mut asker = ScriptedAsker::with_answers(&["hunter2"]);
    assert_eq!(
        to_action("/login ann@example.com", &mut asker)?,
        Some(Action::LoginEmail(
            "ann@example.com".to_string(),
            "hunter2".to_string()
        ))
    );
    assert_eq!(asker.asked, vec!["Password".to_string()]);
    return Ok(());
}

#[test]
fn it_asks_for_a_missing_email() -> Result<()> {
    let mut asker = ScriptedAsker::with_answers(&["ann@example.com", "hunter2"]);
    assert_eq!(
        to_action("/login", &mut asker)?,
        Some(Action::LoginEmail(
            "ann@example.com".to_string(),
            "hunter2".to_string()
        ))
    );
    return Ok(());
}

#[test]
fn it_registers_with_a_repeated_password() -> Result<()> {
    let mut asker = ScriptedAsker::with_answers(&["secret1", "secret2"]);
    assert_eq!(
        to_action("/register ann@example.com", &mut asker)?,
        Some(Action::Register(
            "ann@example.com".to_string(),
            "secret1".to_string(),
            "secret2".to_string()
        ))
    );
    return Ok(());
}

#[test]
fn it_resets_the_password() -> Result<()> {
    let mut asker = ScriptedAsker::with_answers(&["new-secret", "new-secret"]);
    assert_eq!(
        to_action("/reset", &mut asker)?,
        Some(Action::ResetPassword(
            "new-secret".to_string(),
            "new-secret".to_string()
        ))
    );
    return Ok(());
}

#[test]
fn it_selects_a_chat() -> Result<()> {
    let mut asker = ScriptedAsker::default();
    assert_eq!(to_action("/s 12", &mut asker)?, Some(Action::SelectChat(12)));
    return Ok(());
}

#[test]
fn it_rejects_a_bad_chat_id() {
    let mut asker = ScriptedAsker::default();
    let res = to_action("/select twelve", &mut asker);
    assert_eq!(
        res.unwrap_err().to_string(),
        "'twelve' is not a chat id.".to_string()
    );
}

#[test]
fn it_renames_with_a_title() -> Result<()> {
    let mut asker = ScriptedAsker::default();
    assert_eq!(
        to_action("/rename 11 Trip to Riga", &mut asker)?,
        Some(Action::RenameChat(11, "Trip to Riga".to_string()))
    );
    return Ok(());
}

#[test]
fn it_begins_a_rename_without_a_title() -> Result<()> {
    let mut asker = ScriptedAsker::default();
    assert_eq!(
        to_action("/rename 11", &mut asker)?,
        Some(Action::BeginRename(11))
    );
    return Ok(());
}

#[test]
fn it_deletes_after_confirming() -> Result<()> {
    let mut asker = ScriptedAsker {
        confirm: true,
        ..ScriptedAsker::default()
    };
    assert_eq!(to_action("/rm 13", &mut asker)?, Some(Action::DeleteChat(13)));
    assert_eq!(asker.asked, vec!["Delete chat #13?".to_string()]);
    return Ok(());
}

#[test]
fn it_keeps_the_chat_when_delete_is_declined() -> Result<()> {
    let mut asker = ScriptedAsker::default();
    assert_eq!(to_action("/delete 13", &mut asker)?, None);
    return Ok(());
}

#[test]
fn it_switches_mode() -> Result<()> {
    let mut asker = ScriptedAsker::default();
    assert_eq!(
        to_action("/mode analyze-photo", &mut asker)?,
        Some(Action::SetCapability(Capability::AnalyzePhoto))
    );
    assert_eq!(
        to_action("/m smart", &mut asker)?,
        Some(Action::SetCapability(Capability::Smart))
    );
    assert!(to_action("/m turbo", &mut asker).is_err());
    return Ok(());
}

#[test]
fn it_attaches_paths() -> Result<()> {
    let mut asker = ScriptedAsker::default();
    assert_eq!(
        to_action("/a cat.png dog.jpg", &mut asker)?,
        Some(Action::Attach(vec![
            PathBuf::from("cat.png"),
            PathBuf::from("dog.jpg")
        ]))
    );
    assert!(to_action("/attach", &mut asker).is_err());
    return Ok(());
}

#[test]
fn it_maps_simple_commands() -> Result<()> {
    let mut asker = ScriptedAsker::default();
    assert_eq!(to_action("/q", &mut asker)?, Some(Action::Quit()));
    assert_eq!(to_action("/guest", &mut asker)?, Some(Action::EnterGuest()));
    assert_eq!(to_action("/n", &mut asker)?, Some(Action::NewChat()));
    assert_eq!(to_action("/ls", &mut asker)?, Some(Action::RefreshChats()));
    assert_eq!(to_action("/cancel", &mut asker)?, Some(Action::CancelRename()));
    assert_eq!(to_action("/p", &mut asker)?, Some(Action::LoadProfile()));
    assert_eq!(to_action("/logout", &mut asker)?, Some(Action::Logout()));
    assert_eq!(
        to_action("/subscription", &mut asker)?,
        Some(Action::ShowScreen(Screen::Subscription))
    );
    assert_eq!(
        to_action("/confirm ABC123", &mut asker)?,
        Some(Action::ConfirmEmail("ABC123".to_string()))
    );
    return Ok(());
}
