#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;

use std::cmp::Ordering;

use chrono::DateTime;
use chrono::NaiveDateTime;
use chrono::SecondsFormat;
use chrono::TimeZone;
use chrono::Utc;
use serde_derive::Deserialize;
use serde_derive::Serialize;

pub type ChatId = i64;

pub const MAX_TITLE_LENGTH: usize = 28;

/// Parses the timestamps returned by the backend. Both RFC 3339 and naive
/// ISO 8601 (assumed UTC) are accepted.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Some(date.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&date));
    }

    return None;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSummary {
    pub id: ChatId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub last_interaction_at: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub model_key: Option<String>,
}

impl ChatSummary {
    pub fn display_title(&self) -> String {
        if let Some(title) = &self.title {
            if !title.is_empty() {
                return title.to_string();
            }
        }

        if let Some(created_at) = parse_timestamp(&self.created_at) {
            return format!("Chat from {}", created_at.format("%d.%m.%Y %H:%M"));
        }

        return format!("Chat #{}", self.id);
    }

    fn last_interaction(&self) -> Option<DateTime<Utc>> {
        return self
            .last_interaction_at
            .as_deref()
            .and_then(parse_timestamp);
    }
}

/// The authenticated user's chats. Entries are unique by id and the list is
/// re-sorted after every mutation, active chat first and then most recent
/// interaction first.
#[derive(Clone, Debug, Default)]
pub struct ChatList {
    chats: Vec<ChatSummary>,
}

impl ChatList {
    pub fn replace(&mut self, chats: Vec<ChatSummary>) {
        self.chats = vec![];
        for chat in chats {
            if self.get(chat.id).is_none() {
                self.chats.push(chat);
            }
        }

        self.sort();
    }

    pub fn clear(&mut self) {
        self.chats = vec![];
    }

    pub fn as_slice(&self) -> &[ChatSummary] {
        return &self.chats;
    }

    pub fn get(&self, id: ChatId) -> Option<&ChatSummary> {
        return self.chats.iter().find(|chat| return chat.id == id);
    }

    pub fn first_id(&self) -> Option<ChatId> {
        return self.chats.first().map(|chat| return chat.id);
    }

    pub fn active_id(&self) -> Option<ChatId> {
        return self
            .chats
            .iter()
            .find(|chat| return chat.is_active)
            .map(|chat| return chat.id);
    }

    /// Marks `id` as the only active chat.
    pub fn mark_active(&mut self, id: ChatId) {
        for chat in self.chats.iter_mut() {
            chat.is_active = chat.id == id;
        }

        self.sort();
    }

    pub fn set_title(&mut self, id: ChatId, title: &str) -> bool {
        if let Some(chat) = self.chats.iter_mut().find(|chat| return chat.id == id) {
            chat.title = Some(title.to_string());
            self.sort();
            return true;
        }

        return false;
    }

    pub fn set_model_key(&mut self, id: ChatId, model_key: &str) -> bool {
        if let Some(chat) = self.chats.iter_mut().find(|chat| return chat.id == id) {
            chat.model_key = Some(model_key.to_string());
            return true;
        }

        return false;
    }

    /// Bumps the interaction time of a chat after a follow-up message, so the
    /// list can be kept current without another sync with the server.
    pub fn touch(&mut self, id: ChatId, model_key: Option<&str>) -> bool {
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        if let Some(chat) = self.chats.iter_mut().find(|chat| return chat.id == id) {
            chat.last_interaction_at = Some(now);
            if let Some(key) = model_key {
                chat.model_key = Some(key.to_string());
            }
            self.sort();
            return true;
        }

        return false;
    }

    pub fn remove(&mut self, id: ChatId) -> bool {
        let before = self.chats.len();
        self.chats.retain(|chat| return chat.id != id);
        return self.chats.len() != before;
    }

    fn sort(&mut self) {
        self.chats.sort_by(|a, b| {
            let by_active = b.is_active.cmp(&a.is_active);
            if by_active != Ordering::Equal {
                return by_active;
            }

            // Chats without a parseable timestamp sink to the bottom.
            return b.last_interaction().cmp(&a.last_interaction());
        });
    }
}
