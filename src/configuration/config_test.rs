use anyhow::Result;
use once_cell::sync::Lazy;
use test_utils::insta_snapshot;
use tokio::sync::Mutex;

use super::Config;
use super::ConfigKey;
use crate::application::cli;

// Config is global, loads must not interleave.
static LOAD_LOCK: Lazy<Mutex<()>> = Lazy::new(|| return Mutex::new(()));

#[test]
fn it_serializes_to_valid_toml() {
    let res = Config::serialize_default(cli::build());
    let toml_res = res.parse::<toml_edit::Document>();
    assert!(toml_res.is_ok());

    insta_snapshot(|| {
        insta::assert_snapshot!(res, @r###"
# Base URL of the Luch API.
api-url = "http://localhost:8000"

# Number of requests a guest can send before logging in is required.
guest-request-limit = 3

# File holding the stored auth token and guest request count.
# store-file = ""
"###);
    });
}

#[tokio::test]
async fn it_loads_config_from_file() -> Result<()> {
    let _guard = LOAD_LOCK.lock().await;
    let matches = cli::build().try_get_matches_from(vec![
        "luch",
        "-c",
        "./config.example.toml",
        "--guest-request-limit",
        "5",
    ])?;
    Config::load(vec![&matches]).await?;

    assert_eq!(Config::get(ConfigKey::ApiURL), "https://luch.example.com");
    assert_eq!(Config::guest_request_limit(), 5);
    return Ok(());
}

#[tokio::test]
async fn it_fails_to_loads_config_from_file() -> Result<()> {
    let _guard = LOAD_LOCK.lock().await;
    let matches =
        cli::build().try_get_matches_from(vec!["luch", "-c", "./test/bad-config.toml"])?;
    let res = Config::load(vec![&matches]).await;
    assert!(res.is_err());
    return Ok(());
}
