use anyhow::Result;
use test_utils::chat_list_fixture;

use super::ChatList;
use super::ChatSummary;

fn fixture_list() -> Result<ChatList> {
    let chats: Vec<ChatSummary> = serde_json::from_str(chat_list_fixture())?;
    let mut list = ChatList::default();
    list.replace(chats);
    return Ok(list);
}

fn ids(list: &ChatList) -> Vec<i64> {
    return list
        .as_slice()
        .iter()
        .map(|chat| return chat.id)
        .collect::<Vec<i64>>();
}

#[test]
fn it_sorts_active_first_then_most_recent() -> Result<()> {
    let list = fixture_list()?;
    assert_eq!(ids(&list), vec![12, 13, 11]);
    assert_eq!(list.active_id(), Some(12));
    return Ok(());
}

#[test]
fn it_dedupes_by_id() -> Result<()> {
    let mut chats: Vec<ChatSummary> = serde_json::from_str(chat_list_fixture())?;
    chats.push(chats[0].clone());

    let mut list = ChatList::default();
    list.replace(chats);

    assert_eq!(list.as_slice().len(), 3);
    return Ok(());
}

#[test]
fn it_marks_exactly_one_chat_active() -> Result<()> {
    let mut list = fixture_list()?;
    list.mark_active(11);

    let active = list
        .as_slice()
        .iter()
        .filter(|chat| return chat.is_active)
        .count();

    assert_eq!(active, 1);
    assert_eq!(ids(&list), vec![11, 13, 12]);
    return Ok(());
}

#[test]
fn it_touches_a_chat_to_the_top_of_inactive_chats() -> Result<()> {
    let mut list = fixture_list()?;
    assert!(list.touch(11, Some("smart")));

    assert_eq!(ids(&list), vec![12, 11, 13]);
    assert_eq!(list.get(11).unwrap().model_key, Some("smart".to_string()));
    return Ok(());
}

#[test]
fn it_removes_chats() -> Result<()> {
    let mut list = fixture_list()?;
    assert!(list.remove(12));
    assert!(!list.remove(12));
    assert_eq!(list.first_id(), Some(13));
    assert_eq!(list.active_id(), None);
    return Ok(());
}

#[test]
fn it_falls_back_to_created_date_for_untitled_chats() -> Result<()> {
    let list = fixture_list()?;
    assert_eq!(list.get(11).unwrap().display_title(), "Holiday plans");
    assert_eq!(list.get(12).unwrap().display_title(), "Chat from 02.05.2024 10:15");

    let broken = ChatSummary {
        id: 99,
        title: None,
        created_at: "yesterday".to_string(),
        last_interaction_at: None,
        is_active: false,
        model_key: None,
    };
    assert_eq!(broken.display_title(), "Chat #99");
    return Ok(());
}
