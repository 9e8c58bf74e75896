//! Line commands accepted by `kyc-intake run`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    /// Empty name clears the selection.
    Country(String),
    Deposit(String),
    /// `None` empties the picker.
    Document(Option<PathBuf>),
    /// `None` simulates an expired token.
    Verify(Option<String>),
    Submit,
    Back,
    Confirm,
    Status,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("Unknown command '{0}' (type 'help' for a list)")]
    UnknownCommand(String),
    #[error("'{command}' takes no arguments")]
    UnexpectedArgument { command: &'static str },
}

pub const HELP: &str = "\
Commands:
  country [name]     select a country (no name clears it)
  deposit <amount>   enter the deposit amount
  document [path]    attach proof of address (no path clears it)
  verify [token]     deliver a verification token (no token expires it)
  submit             review the form
  back               return to editing from review
  confirm            submit the reviewed form
  status             show the current form
  help               show this list
  quit               exit";

/// Parses one input line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<ScriptCommand>, ScriptError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let optional = |rest: &str| (!rest.is_empty()).then(|| rest.to_string());

    let command = match word.to_ascii_lowercase().as_str() {
        "country" => ScriptCommand::Country(rest.to_string()),
        "deposit" => ScriptCommand::Deposit(rest.to_string()),
        "document" => ScriptCommand::Document(optional(rest).map(PathBuf::from)),
        "verify" => ScriptCommand::Verify(optional(rest)),
        "submit" => no_args("submit", rest, ScriptCommand::Submit)?,
        "back" => no_args("back", rest, ScriptCommand::Back)?,
        "confirm" => no_args("confirm", rest, ScriptCommand::Confirm)?,
        "status" => no_args("status", rest, ScriptCommand::Status)?,
        "help" => ScriptCommand::Help,
        "quit" | "exit" => ScriptCommand::Quit,
        _ => return Err(ScriptError::UnknownCommand(word.to_string())),
    };
    Ok(Some(command))
}

fn no_args(
    command: &'static str,
    rest: &str,
    parsed: ScriptCommand,
) -> Result<ScriptCommand, ScriptError> {
    if rest.is_empty() {
        Ok(parsed)
    } else {
        Err(ScriptError::UnexpectedArgument { command })
    }
}
