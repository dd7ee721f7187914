//! Text commands typed at the console prompt.

use admin_core::{pager::PageNavParseError, Command, PageNav};
use shared::{
    domain::{EditableField, RecordId},
    error::UnknownFieldError,
};
use thiserror::Error;

pub const HELP: &str = "\
commands:
  search <term>          filter rows (empty term clears)
  page first|prev|next|last|<n>
  select <id>            toggle one row
  select-page            toggle every row on this page
  delete <id>            delete one row
  delete-selected        delete all selected rows
  edit <id>              start editing a row
  set name|email <value> change the draft
  save | cancel          finish the edit
  show | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleInput {
    Apply(Command),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown command '{0}' (type 'help')")]
    Unknown(String),
    #[error("'{command}' needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error(transparent)]
    Page(#[from] PageNavParseError),
    #[error(transparent)]
    Field(#[from] UnknownFieldError),
}

pub fn parse_input(line: &str) -> Result<ConsoleInput, InputError> {
    let line = line.trim_start().trim_end_matches(['\r', '\n']);
    let (word, rest) = split_word(line);

    let input = match word.to_ascii_lowercase().as_str() {
        "" | "show" => ConsoleInput::Show,
        "help" | "?" => ConsoleInput::Help,
        "quit" | "exit" => ConsoleInput::Quit,
        "search" => ConsoleInput::Apply(Command::Search(rest.to_string())),
        "page" => {
            let nav: PageNav =
                required(rest.trim(), "page", "first, prev, next, last or a number")?.parse()?;
            ConsoleInput::Apply(Command::GotoPage(nav))
        }
        "select" => ConsoleInput::Apply(Command::ToggleSelect(record_id(rest, "select")?)),
        "select-page" => ConsoleInput::Apply(Command::ToggleSelectAllOnPage),
        "delete" => ConsoleInput::Apply(Command::DeleteOne(record_id(rest, "delete")?)),
        "delete-selected" => ConsoleInput::Apply(Command::DeleteSelected),
        "edit" => ConsoleInput::Apply(Command::StartEdit(record_id(rest, "edit")?)),
        "set" => {
            let rest = required(
                rest.trim_start(),
                "set",
                "a field (name or email) and a value",
            )?;
            let (field, value) = split_word(rest);
            let field: EditableField = field.parse()?;
            ConsoleInput::Apply(Command::EditField(field, value.to_string()))
        }
        "save" => ConsoleInput::Apply(Command::SaveEdit),
        "cancel" => ConsoleInput::Apply(Command::CancelEdit),
        other => return Err(InputError::Unknown(other.to_string())),
    };
    Ok(input)
}

/// Splits off the first word and the single whitespace character after it.
/// Anything further, leading or trailing spaces included, stays in the rest.
fn split_word(text: &str) -> (&str, &str) {
    text.split_once(char::is_whitespace).unwrap_or((text, ""))
}

fn required<'a>(
    rest: &'a str,
    command: &'static str,
    expected: &'static str,
) -> Result<&'a str, InputError> {
    if rest.is_empty() {
        Err(InputError::MissingArgument { command, expected })
    } else {
        Ok(rest)
    }
}

fn record_id(rest: &str, command: &'static str) -> Result<RecordId, InputError> {
    required(rest.trim(), command, "a record id").map(RecordId::from)
}

#[cfg(test)]
#[path = "tests/commands_tests.rs"]
mod tests;
