#[cfg(test)]
#[path = "capability_test.rs"]
mod tests;

use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

/// The request type attached to every outgoing message.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Capability {
    #[default]
    Quick,
    Smart,
    AnalyzePhoto,
}

impl Capability {
    pub fn parse(text: &str) -> Option<Capability> {
        let text = text.trim().to_lowercase();
        if let Some(capability) = Capability::iter().find(|e| return e.to_string() == text) {
            return Some(capability);
        }

        return Capability::iter().find(|e| return e.model_key() == text);
    }

    /// Model key the backend expects for this capability.
    pub fn model_key(&self) -> &'static str {
        match self {
            Capability::Quick => return "fast",
            Capability::Smart => return "smart",
            Capability::AnalyzePhoto => return "vision",
        }
    }

    /// Guests may only send quick text requests.
    pub fn allowed_for_guest(&self) -> bool {
        return *self == Capability::Quick;
    }

    pub fn accepts_attachments(&self) -> bool {
        return *self == Capability::AnalyzePhoto;
    }
}
