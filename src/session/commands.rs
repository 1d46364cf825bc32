//! Line commands read from stdin in watch mode

use crate::actions::{Action, ActionDescriptor, ActionError, ActionKind};
use crate::dashboard::UiEvent;
use strum::IntoEnumIterator;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Ui(UiEvent),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("{command} requires {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error(transparent)]
    Action(#[from] ActionError),
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "refresh" => Command::Ui(UiEvent::Click(Action::Refresh)),
        // The raw remainder, so queries may contain spaces
        "search" => Command::Ui(UiEvent::SearchInput {
            query: rest.to_string(),
        }),
        "filter" => {
            let mut parts = rest.splitn(2, char::is_whitespace);
            let name = parts.next().filter(|name| !name.is_empty()).ok_or(
                CommandError::MissingArgument {
                    command: "filter",
                    argument: "a name",
                },
            )?;
            let value = parts.next().map(str::trim).unwrap_or_default();
            Command::Ui(UiEvent::FilterChanged {
                name: name.to_string(),
                value: value.to_string(),
            })
        }
        "click" => {
            let mut parts = rest.split_whitespace();
            let kind = parts.next().ok_or(CommandError::MissingArgument {
                command: "click",
                argument: "an action kind",
            })?;
            let descriptor = ActionDescriptor::from_attributes(kind, parts.next())?;
            Command::Ui(UiEvent::Click(Action::try_from(descriptor)?))
        }
        "hide" => Command::Ui(UiEvent::VisibilityChanged { hidden: true }),
        "show" => Command::Ui(UiEvent::VisibilityChanged { hidden: false }),
        "backdrop" => Command::Ui(UiEvent::BackdropClick),
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return Err(CommandError::Unknown(word.to_string())),
    };
    Ok(Some(command))
}

pub fn help_text() -> String {
    let kinds = ActionKind::iter()
        .map(|kind| {
            if kind.requires_target() {
                format!("  {} <id>", kind)
            } else {
                format!("  {}", kind)
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Commands:\n  refresh\n  search <query>\n  filter <name> <value>\n  click <action> [id]\n  hide | show\n  backdrop\n  quit\nActions:\n{}",
        kinds
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::ExportTarget;

    #[test]
    fn test_blank_lines_are_skipped() {
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn test_search_keeps_spaces() {
        assert_eq!(
            parse_command("search  Anna Petrova "),
            Ok(Some(Command::Ui(UiEvent::SearchInput {
                query: "Anna Petrova".to_string()
            })))
        );
        assert_eq!(
            parse_command("search"),
            Ok(Some(Command::Ui(UiEvent::SearchInput {
                query: String::new()
            })))
        );
    }

    #[test]
    fn test_click_parses_typed_action() {
        assert_eq!(
            parse_command("click view-video 12"),
            Ok(Some(Command::Ui(UiEvent::Click(Action::ViewVideo(12)))))
        );
        assert_eq!(
            parse_command("click export-data"),
            Ok(Some(Command::Ui(UiEvent::Click(Action::Export(
                ExportTarget::Dashboard
            )))))
        );
    }

    #[test]
    fn test_click_errors() {
        assert_eq!(
            parse_command("click"),
            Err(CommandError::MissingArgument {
                command: "click",
                argument: "an action kind"
            })
        );
        assert_eq!(
            parse_command("click view-user-info"),
            Err(CommandError::Action(ActionError::MissingTarget(
                ActionKind::ViewUserInfo
            )))
        );
        assert!(matches!(
            parse_command("click viewVideo(3)"),
            Err(CommandError::Action(ActionError::UnknownKind(_)))
        ));
    }

    #[test]
    fn test_filter_and_visibility() {
        assert_eq!(
            parse_command("filter period last week"),
            Ok(Some(Command::Ui(UiEvent::FilterChanged {
                name: "period".to_string(),
                value: "last week".to_string()
            })))
        );
        assert!(parse_command("filter").is_err());
        assert_eq!(
            parse_command("HIDE"),
            Ok(Some(Command::Ui(UiEvent::VisibilityChanged { hidden: true })))
        );
        assert_eq!(parse_command("exit"), Ok(Some(Command::Quit)));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse_command("reload now"),
            Err(CommandError::Unknown("reload".to_string()))
        );
    }

    #[test]
    fn test_help_lists_targets() {
        let help = help_text();
        assert!(help.contains("  view-video <id>"));
        assert!(help.contains("  refresh\n"));
    }
}
