//! Line parser for the terminal host.

use lazytodo_core::{FilterKind, Key, TaskId, UiEvent};

pub const HELP: &str = "\
commands:
  add <text>        add a task
  toggle <id>       flip completion of a task
  delete <id>       delete a task
  filter <kind>     show all | active | completed
  list              print the list again
  html              print the list as HTML
  json              print stored fields as JSON
  help              show this help
  quit              exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// UI events to dispatch in order.
    Events(Vec<UiEvent>),
    List,
    Html,
    Json,
    Help,
    Quit,
    Empty,
}

/// Parses one input line. Errors are user-facing messages.
pub fn parse_line(line: &str) -> Result<Command, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Command::Empty);
    }

    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(word, rest)| (word, rest.trim()));

    match word {
        "add" => Ok(Command::Events(vec![
            UiEvent::InputChanged(rest.to_string()),
            UiEvent::KeyPressed(Key::Enter),
        ])),
        "toggle" => Ok(Command::Events(vec![UiEvent::CheckboxClicked(
            parse_id(rest)?,
        )])),
        "delete" => Ok(Command::Events(vec![UiEvent::DeleteClicked(parse_id(
            rest,
        )?)])),
        "filter" => rest
            .parse::<FilterKind>()
            .map(|kind| Command::Events(vec![UiEvent::FilterClicked(kind)]))
            .map_err(|err| err.to_string()),
        "list" => Ok(Command::List),
        "html" => Ok(Command::Html),
        "json" => Ok(Command::Json),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command `{other}`; type `help`")),
    }
}

fn parse_id(raw: &str) -> Result<TaskId, String> {
    raw.parse::<TaskId>()
        .map_err(|_| format!("expected a numeric task id, got `{raw}`"))
}

#[cfg(test)]
mod tests {
    use super::{parse_line, Command};
    use lazytodo_core::{FilterKind, Key, UiEvent};

    #[test]
    fn add_keeps_inner_spacing_and_presses_enter() {
        assert_eq!(
            parse_line("add   Buy  milk ").unwrap(),
            Command::Events(vec![
                UiEvent::InputChanged("Buy  milk".to_string()),
                UiEvent::KeyPressed(Key::Enter),
            ])
        );
    }

    #[test]
    fn row_commands_need_numeric_ids() {
        assert_eq!(
            parse_line("toggle 1700000000000").unwrap(),
            Command::Events(vec![UiEvent::CheckboxClicked(1_700_000_000_000)])
        );
        assert_eq!(
            parse_line("delete 3").unwrap(),
            Command::Events(vec![UiEvent::DeleteClicked(3)])
        );
        assert!(parse_line("toggle abc").unwrap_err().contains("numeric"));
        assert!(parse_line("delete").is_err());
    }

    #[test]
    fn filter_and_plain_commands() {
        assert_eq!(
            parse_line("filter active").unwrap(),
            Command::Events(vec![UiEvent::FilterClicked(FilterKind::Active)])
        );
        assert!(parse_line("filter done").is_err());
        assert_eq!(parse_line("  ").unwrap(), Command::Empty);
        assert_eq!(parse_line("quit").unwrap(), Command::Quit);
        assert_eq!(parse_line("json").unwrap(), Command::Json);
        assert!(parse_line("frobnicate").is_err());
    }
}
