#[cfg(test)]
#[path = "profile_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::parse_timestamp;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageCounter {
    #[serde(default)]
    pub used: Option<u64>,
    /// `None` means the plan has no limit.
    #[serde(default)]
    pub limit: Option<u64>,
}

impl UsageCounter {
    fn format(&self) -> String {
        let limit = match self.limit {
            Some(limit) => limit.to_string(),
            None => "∞".to_string(),
        };

        return format!("{}/{limit}", self.used.unwrap_or(0));
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub fast: Option<UsageCounter>,
    #[serde(default)]
    pub smart: Option<UsageCounter>,
    #[serde(default)]
    pub vision: Option<UsageCounter>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub expires: Option<String>,
    #[serde(default)]
    pub usage: Option<Usage>,
    #[serde(default)]
    pub used_today: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
}

/// Display-ready profile lines for the sidebar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileView {
    pub username: String,
    pub status: String,
    pub expires: String,
    pub fast: String,
    pub smart: String,
    pub vision: String,
}

impl Default for ProfileView {
    fn default() -> ProfileView {
        return ProfileView {
            username: "Email".to_string(),
            status: "free".to_string(),
            expires: "—".to_string(),
            fast: "0/0".to_string(),
            smart: "0/0".to_string(),
            vision: "0/0".to_string(),
        };
    }
}

fn format_counter(counter: &Option<UsageCounter>) -> String {
    if let Some(counter) = counter {
        return counter.format();
    }

    return "0/0".to_string();
}

impl From<&Profile> for ProfileView {
    fn from(profile: &Profile) -> ProfileView {
        let mut view = ProfileView {
            username: profile
                .email
                .clone()
                .unwrap_or_else(|| return "User".to_string()),
            status: profile
                .status
                .clone()
                .unwrap_or_else(|| return "free".to_string()),
            ..ProfileView::default()
        };

        if let Some(expires) = &profile.expires {
            view.expires = match parse_timestamp(expires) {
                Some(date) => date.format("%d.%m.%Y").to_string(),
                None => "invalid date".to_string(),
            };
        }

        if let Some(usage) = &profile.usage {
            view.fast = format_counter(&usage.fast);
            view.smart = format_counter(&usage.smart);
            view.vision = format_counter(&usage.vision);
        }

        return view;
    }
}
