use anyhow::Result;

use super::Profile;
use super::ProfileView;

#[test]
fn it_renders_defaults_without_a_profile() {
    let view = ProfileView::default();
    assert_eq!(view.username, "Email");
    assert_eq!(view.status, "free");
    assert_eq!(view.expires, "—");
    assert_eq!(view.fast, "0/0");
}

#[test]
fn it_renders_usage_and_expiry() -> Result<()> {
    let profile: Profile = serde_json::from_str(
        r#"{
            "email": "anna@example.com",
            "status": "premium",
            "expires": "2025-01-09T00:00:00",
            "usage": {
                "fast": {"used": 4, "limit": null},
                "smart": {"used": 2, "limit": 10}
            }
        }"#,
    )?;

    let view = ProfileView::from(&profile);
    assert_eq!(view.username, "anna@example.com");
    assert_eq!(view.status, "premium");
    assert_eq!(view.expires, "09.01.2025");
    assert_eq!(view.fast, "4/∞");
    assert_eq!(view.smart, "2/10");
    assert_eq!(view.vision, "0/0");

    return Ok(());
}

#[test]
fn it_flags_unparseable_expiry() -> Result<()> {
    let profile: Profile = serde_json::from_str(r#"{"email": "a@b.c", "expires": "soon"}"#)?;
    let view = ProfileView::from(&profile);
    assert_eq!(view.expires, "invalid date");
    assert_eq!(view.fast, "0/0");
    return Ok(());
}
