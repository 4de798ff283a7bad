#![deny(clippy::implicit_return)]
#![allow(clippy::needless_return)]

mod application;
mod configuration;
mod domain;
mod infrastructure;

use std::env;
use std::process;

use anyhow::anyhow;
use anyhow::Error;
use anyhow::Result;
use domain::models::Action;
use domain::models::Event;
use domain::services::SessionController;
use infrastructure::api::HttpApi;
use infrastructure::stores::FileStore;
use tokio::sync::mpsc;
use tokio::task;
use yansi::Paint;

use crate::application::cli;
use crate::application::repl;
use crate::application::ui;
use crate::configuration::Config;
use crate::domain::services::actions::ActionsService;

fn handle_error(err: Error) {
    eprintln!(
            "{}",
            Paint::red(format!(
                "Oh no! Luch has failed with the following app version and error.\n\nVersion: {}\nCommit: {}\nError: {}",
                env!("CARGO_PKG_VERSION"),
                env!("VERGEN_GIT_DESCRIBE"),
                err
            ))
        );

    let backtrace = err.backtrace();
    if backtrace.to_string() == "disabled backtrace" {
        let args = env::args().collect::<Vec<String>>().join(" ");
        eprintln!("\nRunning the following can help explain further what the issue is:");
        eprintln!("\nRUST_BACKTRACE=1 {args}");
    } else {
        eprintln!("\n{}", backtrace);
    }

    process::exit(1);
}

fn flatten(res: Option<Result<Result<()>, task::JoinError>>) -> Result<()> {
    match res {
        Some(Ok(res)) => return res,
        Some(Err(join_err)) => return Err(anyhow!(join_err)),
        None => return Ok(()),
    }
}

#[tokio::main]
async fn main() {
    std::panic::set_hook(Box::new(|panic_info| {
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let debug_log_dir = env::var("LUCH_LOG_DIR").unwrap_or_else(|_| {
        return dirs::cache_dir()
            .unwrap_or_else(env::temp_dir)
            .join("luch")
            .to_string_lossy()
            .to_string();
    });

    let file_appender = tracing_appender::rolling::never(debug_log_dir, "debug.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    if env::var("RUST_LOG")
        .unwrap_or_else(|_| return "".to_string())
        .contains("luch")
    {
        tracing_subscriber::fmt()
            .json()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(writer)
            .init();
    }

    match cli::parse().await {
        Ok(true) => {}
        Ok(false) => process::exit(0),
        Err(ready_err) => {
            handle_error(ready_err);
            return;
        }
    }

    let store = match FileStore::load(FileStore::default_path()) {
        Ok(store) => store,
        Err(store_err) => {
            handle_error(store_err);
            return;
        }
    };

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();

    let controller = SessionController::new(
        Box::<HttpApi>::default(),
        Box::new(store),
        Config::guest_request_limit(),
        event_tx,
    );

    let mut background_futures = task::JoinSet::new();
    background_futures.spawn(async move {
        return ActionsService::start(controller, &mut action_rx).await;
    });

    let mut prompt_future = task::spawn_blocking(move || {
        return repl::start(action_tx);
    });

    let ui_future = ui::start(event_rx);
    tokio::pin!(ui_future);

    // Either side stopping cleanly still lets the renderer drain what the
    // controller already emitted.
    let (res, ui_done) = tokio::select!(
        res = background_futures.join_next() => (flatten(res), false),
        res = &mut prompt_future => (flatten(Some(res)), false),
        res = &mut ui_future => (res, true),
    );

    let res = match res {
        Ok(()) if !ui_done => ui_future.await,
        _ => res,
    };

    if let Err(err) = res {
        handle_error(err);
    }

    process::exit(0);
}
