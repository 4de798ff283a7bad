#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::Author;

pub const REASONING_START: &str = "<think>";
pub const REASONING_END: &str = "</think>";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageType {
    Normal,
    Error,
    /// Collapsed model reasoning shown ahead of the answer it belongs to.
    Reasoning,
    /// A user attachment. The text holds the preview source.
    Image,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub author: Author,
    pub text: String,
    mtype: MessageType,
}

impl Message {
    pub fn new(author: Author, text: &str) -> Message {
        return Message {
            author,
            text: text.to_string().replace('\t', "  "),
            mtype: MessageType::Normal,
        };
    }

    pub fn new_with_type(author: Author, mtype: MessageType, text: &str) -> Message {
        return Message {
            author,
            text: text.to_string().replace('\t', "  "),
            mtype,
        };
    }

    pub fn message_type(&self) -> MessageType {
        return self.mtype;
    }
}

/// A bot answer split in to its reasoning block and the answer shown to the
/// user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BotAnswer {
    pub reasoning: Option<String>,
    pub text: String,
}

impl BotAnswer {
    /// Extracts the first `<think>...</think>` block from an answer. The block
    /// is removed from the primary text even when it is empty, but only a
    /// non-empty block produces reasoning.
    pub fn parse(answer: &str) -> BotAnswer {
        let start = match answer.find(REASONING_START) {
            Some(idx) => idx,
            None => {
                return BotAnswer {
                    reasoning: None,
                    text: answer.trim().to_string(),
                };
            }
        };

        let content_start = start + REASONING_START.len();
        let end = match answer[content_start..].find(REASONING_END) {
            Some(idx) => content_start + idx,
            None => {
                return BotAnswer {
                    reasoning: None,
                    text: answer.trim().to_string(),
                };
            }
        };

        let reasoning = answer[content_start..end].trim().to_string();
        let text = format!(
            "{}{}",
            &answer[..start],
            &answer[end + REASONING_END.len()..]
        );

        return BotAnswer {
            reasoning: if reasoning.is_empty() {
                None
            } else {
                Some(reasoning)
            },
            text: text.trim().to_string(),
        };
    }

    /// Thread entries for the answer, reasoning first. An empty answer yields
    /// no bot entry.
    pub fn into_messages(self) -> Vec<Message> {
        let mut messages = vec![];
        if let Some(reasoning) = self.reasoning {
            messages.push(Message::new_with_type(
                Author::Bot,
                MessageType::Reasoning,
                &reasoning,
            ));
        }

        if !self.text.is_empty() {
            messages.push(Message::new(Author::Bot, &self.text));
        }

        return messages;
    }
}
