#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;

use super::Capability;

pub const DEFAULT_GUEST_REQUEST_LIMIT: u32 = 3;

/// Who the client is talking to the backend as. Tokens live inside the
/// variants, so a guest or authenticated session can never exist without one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionMode {
    Anonymous,
    Guest { token: String },
    Authenticated { token: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum SessionKind {
    Anonymous,
    Guest,
    Authenticated,
}

/// Reason a capability-consuming action was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Denial {
    /// No session is established. `limit_reached` tells the prompt whether
    /// guest entry should still be offered.
    NoSession { limit_reached: bool },
    GuestLimitReached,
    GuestCapability,
}

#[derive(Clone, Debug)]
pub struct SessionState {
    mode: SessionMode,
    guest_request_count: u32,
    guest_request_limit: u32,
}

impl SessionState {
    /// Restores a session from persisted values. A stored token is trusted
    /// until the backend says otherwise.
    pub fn restore(
        auth_token: Option<String>,
        guest_request_count: u32,
        guest_request_limit: u32,
    ) -> SessionState {
        let mode = match auth_token {
            Some(token) if !token.is_empty() => SessionMode::Authenticated { token },
            _ => SessionMode::Anonymous,
        };

        return SessionState {
            mode,
            guest_request_count,
            guest_request_limit,
        };
    }

    pub fn kind(&self) -> SessionKind {
        match self.mode {
            SessionMode::Anonymous => return SessionKind::Anonymous,
            SessionMode::Guest { .. } => return SessionKind::Guest,
            SessionMode::Authenticated { .. } => return SessionKind::Authenticated,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        return self.kind() == SessionKind::Authenticated;
    }

    pub fn is_guest(&self) -> bool {
        return self.kind() == SessionKind::Guest;
    }

    /// Bearer token for protected calls.
    pub fn token(&self) -> Option<&str> {
        match &self.mode {
            SessionMode::Anonymous => return None,
            SessionMode::Guest { token } => return Some(token),
            SessionMode::Authenticated { token } => return Some(token),
        }
    }

    pub fn guest_request_count(&self) -> u32 {
        return self.guest_request_count;
    }

    pub fn guest_request_limit(&self) -> u32 {
        return self.guest_request_limit;
    }

    pub fn guest_limit_reached(&self) -> bool {
        return self.guest_request_count >= self.guest_request_limit;
    }

    /// Checks whether an action consuming `capability` may run. Every entry
    /// point that spends a request goes through here.
    pub fn check(&self, capability: Capability) -> std::result::Result<(), Denial> {
        self.check_session()?;
        if self.is_guest() && !capability.allowed_for_guest() {
            return Err(Denial::GuestCapability);
        }

        return Ok(());
    }

    /// Same as `check` without the capability restriction, used by actions
    /// that need a usable session but do not pick a model.
    pub fn check_session(&self) -> std::result::Result<(), Denial> {
        match self.mode {
            SessionMode::Anonymous => {
                return Err(Denial::NoSession {
                    limit_reached: self.guest_limit_reached(),
                });
            }
            SessionMode::Guest { .. } => {
                if self.guest_limit_reached() {
                    return Err(Denial::GuestLimitReached);
                }
            }
            SessionMode::Authenticated { .. } => {}
        }

        return Ok(());
    }

    pub fn authenticate(&mut self, token: &str) -> Result<()> {
        if token.is_empty() {
            bail!("The server returned an empty access token.");
        }

        self.mode = SessionMode::Authenticated {
            token: token.to_string(),
        };
        self.guest_request_count = 0;

        return Ok(());
    }

    pub fn enter_guest(&mut self, token: &str) -> Result<()> {
        if token.is_empty() {
            bail!("The server returned an empty guest token.");
        }

        self.mode = SessionMode::Guest {
            token: token.to_string(),
        };
        self.guest_request_count = 0;

        return Ok(());
    }

    pub fn logout(&mut self) {
        self.mode = SessionMode::Anonymous;
        self.guest_request_count = 0;
    }

    /// Counts a successful guest request and returns the new total.
    pub fn record_guest_request(&mut self) -> u32 {
        self.guest_request_count += 1;
        return self.guest_request_count;
    }
}
