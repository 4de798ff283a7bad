#[cfg(test)]
#[path = "title_edit_test.rs"]
mod tests;

use super::ChatId;

/// Inline chat title editing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TitleEdit {
    #[default]
    Idle,
    Editing {
        chat_id: ChatId,
        original: String,
        draft: String,
    },
}

impl TitleEdit {
    pub fn begin(&mut self, chat_id: ChatId, current_title: &str) {
        *self = TitleEdit::Editing {
            chat_id,
            original: current_title.to_string(),
            draft: current_title.to_string(),
        };
    }

    pub fn input(&mut self, text: &str) {
        if let TitleEdit::Editing { draft, .. } = self {
            *draft = text.to_string();
        }
    }

    /// Ends editing. Returns the rename to perform, if the trimmed draft is
    /// non-empty and differs from the original title.
    pub fn commit(&mut self) -> Option<(ChatId, String)> {
        let state = std::mem::take(self);
        if let TitleEdit::Editing {
            chat_id,
            original,
            draft,
        } = state
        {
            let title = draft.trim();
            if !title.is_empty() && title != original {
                return Some((chat_id, title.to_string()));
            }
        }

        return None;
    }

    pub fn cancel(&mut self) {
        *self = TitleEdit::Idle;
    }

    pub fn editing_chat(&self) -> Option<ChatId> {
        if let TitleEdit::Editing { chat_id, .. } = self {
            return Some(*chat_id);
        }

        return None;
    }
}
