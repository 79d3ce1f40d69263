//! Terminal host for the LazyTodo core.
//!
//! Reads one command per line, dispatches it as UI events and prints the
//! rendered list after every state change.

mod command;

use command::{parse_line, Command, HELP};
use lazytodo_core::{
    init_logging, render_html, render_text, AppConfig, StorageLocation, StoreMode, TaskListView,
    TaskStore, TodoBindings,
};
use log::info;
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("lazytodo: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(log_dir) = &config.log_dir {
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("lazytodo: file logging disabled: {err}");
        }
    }

    let store = TaskStore::new(config.locale, |view: &TaskListView| {
        print!("{}", render_text(view));
    });
    let mut ui = TodoBindings::new(store);
    let mode = ui
        .store_mut()
        .initialize(StorageLocation::File(config.db_path.clone()))
        .await;
    if mode == StoreMode::MemoryOnly {
        eprintln!(
            "lazytodo: could not open {}; changes will not be saved",
            config.db_path.display()
        );
    }

    let mut read_failed = false;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                eprintln!("lazytodo: failed to read input: {err}");
                read_failed = true;
                break;
            }
        };

        match parse_line(&line) {
            Ok(Command::Events(events)) => {
                for event in events {
                    ui.dispatch(event).await;
                }
            }
            Ok(Command::List) => print!("{}", render_text(&ui.store().view())),
            Ok(Command::Html) => print!("{}", render_html(&ui.store().view())),
            Ok(Command::Json) => match serde_json::to_string_pretty(ui.store().tasks()) {
                Ok(json) => println!("{json}"),
                Err(err) => eprintln!("lazytodo: {err}"),
            },
            Ok(Command::Help) => println!("{HELP}"),
            Ok(Command::Quit) => break,
            Ok(Command::Empty) => {}
            Err(message) => eprintln!("{message}"),
        }
    }

    let flushed = match ui.store().flush().await {
        Ok(()) => true,
        Err(err) => {
            eprintln!("lazytodo: pending changes may not be saved: {err}");
            false
        }
    };
    drop(ui);
    info!("event=app_exit module=cli status=ok");

    if flushed && !read_failed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
