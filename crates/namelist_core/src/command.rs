//! Host input parsing for the record list.
//!
//! # Responsibility
//! - Map one line of user input to a list `Command`.
//! - Report malformed input with a typed error instead of guessing.
//!
//! # Invariants
//! - Keywords are case-insensitive; arguments keep their original case.
//! - Names are never validated: `add` with no argument yields an empty name.

use crate::model::record::RecordId;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static HEAD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\S+)(?:\s+(.*))?$").expect("valid head regex"));
static ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+$").expect("valid id regex"));

/// Parsed user intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Form submission with a name value.
    Add(String),
    /// Rename the record `id`; the name may be empty.
    Rename { id: RecordId, name: String },
    /// Delete by record id.
    Delete(RecordId),
    /// Trigger the delete action of a displayed row (1-based position).
    Press(usize),
    /// Repaint the list.
    List,
    /// Print the collection as JSON.
    Export,
    Help,
    Quit,
}

impl Command {
    /// Whether executing this command changes the collection.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Self::Add(_) | Self::Rename { .. } | Self::Delete(_) | Self::Press(_)
        )
    }
}

/// Reasons an input line could not be turned into a `Command`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    Empty,
    UnknownCommand(String),
    MissingArgument(&'static str),
    InvalidId(String),
    InvalidRow(String),
}

impl Display for CommandParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty input"),
            Self::UnknownCommand(value) => write!(f, "unknown command: `{value}`"),
            Self::MissingArgument(name) => write!(f, "missing argument: {name}"),
            Self::InvalidId(value) => write!(f, "invalid record id: `{value}`"),
            Self::InvalidRow(value) => write!(f, "invalid row number: `{value}`"),
        }
    }
}

impl Error for CommandParseError {}

/// Help text listing accepted commands.
pub const HELP_TEXT: &str = "\
commands:
  add <name>           create a record (alias: crear)
  rename <id> <name>   rename a record (alias: actualizar)
  delete <id>          delete a record by id (alias: eliminar)
  press <row>          press the delete button of a displayed row
  list                 repaint the list (alias: mostrar)
  export               print the list as JSON
  help                 show this text
  quit                 exit";

/// Parses one input line.
///
/// Trailing line terminators are ignored; leading whitespace is skipped.
pub fn parse_command(line: &str) -> Result<Command, CommandParseError> {
    let line = line.trim_end_matches(['\r', '\n']).trim_start();
    let captures = HEAD_RE.captures(line).ok_or(CommandParseError::Empty)?;
    let keyword = captures
        .get(1)
        .map(|m| m.as_str().to_ascii_lowercase())
        .unwrap_or_default();
    let rest = captures.get(2).map(|m| m.as_str()).unwrap_or("");

    match keyword.as_str() {
        "add" | "crear" => Ok(Command::Add(rest.to_string())),
        "rename" | "actualizar" => {
            let args = HEAD_RE
                .captures(rest)
                .ok_or(CommandParseError::MissingArgument("id"))?;
            let id = parse_record_id(args.get(1).map(|m| m.as_str()).unwrap_or(""))?;
            let name = args.get(2).map(|m| m.as_str()).unwrap_or("").to_string();
            Ok(Command::Rename { id, name })
        }
        "delete" | "eliminar" => {
            let value = single_argument(rest, "id")?;
            Ok(Command::Delete(parse_record_id(value)?))
        }
        "press" => {
            let value = single_argument(rest, "row")?;
            match value.parse::<usize>() {
                Ok(row) if row > 0 => Ok(Command::Press(row)),
                _ => Err(CommandParseError::InvalidRow(value.to_string())),
            }
        }
        "list" | "mostrar" => Ok(Command::List),
        "export" => Ok(Command::Export),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        _ => Err(CommandParseError::UnknownCommand(keyword)),
    }
}

fn single_argument<'a>(rest: &'a str, name: &'static str) -> Result<&'a str, CommandParseError> {
    let value = rest.trim();
    if value.is_empty() {
        return Err(CommandParseError::MissingArgument(name));
    }
    Ok(value)
}

fn parse_record_id(value: &str) -> Result<RecordId, CommandParseError> {
    if !ID_RE.is_match(value) {
        return Err(CommandParseError::InvalidId(value.to_string()));
    }
    value
        .parse::<i64>()
        .map(RecordId::from_raw)
        .map_err(|_| CommandParseError::InvalidId(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{parse_record_id, single_argument, CommandParseError};

    #[test]
    fn parse_record_id_rejects_overflow() {
        let err = parse_record_id("99999999999999999999").unwrap_err();
        assert!(matches!(err, CommandParseError::InvalidId(_)));
    }

    #[test]
    fn single_argument_trims_and_requires_value() {
        assert_eq!(single_argument("  7 ", "row").unwrap(), "7");
        assert_eq!(
            single_argument("   ", "row").unwrap_err(),
            CommandParseError::MissingArgument("row")
        );
    }
}
