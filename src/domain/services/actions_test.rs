extern crate tempdir;

use anyhow::Result;
use tempdir::TempDir;
use tokio::sync::mpsc;

use super::help_text;
use super::ActionsService;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Prompt;
use crate::domain::models::Screen;
use crate::domain::models::SessionKind;
use crate::domain::services::SessionController;
use crate::infrastructure::api::HttpApi;
use crate::infrastructure::stores::FileStore;

#[test]
fn it_lists_every_command_in_help() {
    let text = help_text();
    for command in ["/login", "/guest", "/select", "/rename", "/delete", "/mode", "/attach"] {
        assert!(text.contains(command), "missing {command}");
    }
}

#[tokio::test]
async fn it_handles_actions_until_quit() -> Result<()> {
    let dir = TempDir::new("luch-actions")?;
    let store = FileStore::load(dir.path().join("store.yaml"))?;
    let api = HttpApi::new("http://127.0.0.1:1".to_string());

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let controller = SessionController::new(Box::new(api), Box::new(store), 3, event_tx);

    action_tx.send(Action::SendMessage("Hello".to_string()))?;
    action_tx.send(Action::ShowScreen(Screen::Subscription))?;
    action_tx.send(Action::Quit())?;
    action_tx.send(Action::Help())?;

    ActionsService::start(controller, &mut action_rx).await?;

    let mut events = vec![];
    while let Ok(event) = event_rx.try_recv() {
        events.push(event);
    }

    assert_eq!(events[0], Event::SessionChanged(SessionKind::Anonymous));
    assert!(events.contains(&Event::PromptShown(Prompt::AuthActionRequired {
        limit_reached: false
    })));
    assert!(events.contains(&Event::ScreenChanged(Screen::Subscription)));
    assert_eq!(events.last(), Some(&Event::Quit()));

    return Ok(());
}
