//! Line-oriented command language of the terminal front end.

use std::fmt;

use crate::state::modal::FormField;

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Empty line: just render again.
    Refresh,
    Go(String),
    Search(String),
    Category(String),
    ToggleDark,
    ToggleCompact,
    NewFolder,
    /// Adds a folder without going through the folder form.
    AddFolder(String),
    DeleteFolder(i64),
    NewBookmark,
    DeleteBookmark(i64),
    Open(i64),
    Set(FormField, String),
    Confirm,
    Cancel,
    /// Shows the current configuration.
    Config,
    /// Sets one configuration key from its raw text.
    ConfigSet(String, String),
    ConfigReset,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Unknown(String),
    MissingArgument(&'static str),
    InvalidId(String),
    UnknownField(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Unknown(cmd) => write!(f, "Unknown command: {} (try `help`)", cmd),
            CommandError::MissingArgument(usage) => write!(f, "Usage: {}", usage),
            CommandError::InvalidId(raw) => write!(f, "Not a valid id: {}", raw),
            CommandError::UnknownField(field) => {
                write!(f, "Unknown field: {} (name, url, category, tags)", field)
            }
        }
    }
}

impl std::error::Error for CommandError {}

pub const HELP: &str = "\
go <path>              switch page (/ or /main)
search [text]          filter bookmarks by name (empty clears)
category [name]        filter by category (empty shows all)
dark | compact         toggle dark mode / compact view
folder new             open the add-folder form
folder add <name>      add a folder directly
folder rm <id>         delete a folder
bookmark new           open the add-bookmark form
bookmark rm <id>       delete a bookmark
open <id>              open a bookmark in the browser
set <field> <value>    fill a form field (name, url, category, tags)
ok | cancel            submit or close the open form
config                 show settings
config set <key> <v>   change a setting (JSON or plain text)
config reset           restore default settings
help | quit";

/// Parses one input line.
pub fn parse(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Command::Refresh);
    }

    let (head, rest) = split_word(line);
    match head.to_ascii_lowercase().as_str() {
        "go" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument("go <path>"));
            }
            Ok(Command::Go(rest.to_string()))
        }
        "search" => Ok(Command::Search(rest.to_string())),
        "category" => Ok(Command::Category(rest.to_string())),
        "dark" => Ok(Command::ToggleDark),
        "compact" => Ok(Command::ToggleCompact),
        "folder" => parse_folder(rest),
        "bookmark" => parse_bookmark(rest),
        "open" => Ok(Command::Open(parse_id(rest, "open <id>")?)),
        "set" => {
            let (field, value) = split_word(rest);
            if field.is_empty() {
                return Err(CommandError::MissingArgument("set <field> <value>"));
            }
            let field = FormField::parse(field)
                .ok_or_else(|| CommandError::UnknownField(field.to_string()))?;
            Ok(Command::Set(field, value.to_string()))
        }
        "config" => parse_config(rest),
        "ok" => Ok(Command::Confirm),
        "cancel" => Ok(Command::Cancel),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn parse_folder(rest: &str) -> Result<Command, CommandError> {
    let (sub, arg) = split_word(rest);
    match sub {
        "new" => Ok(Command::NewFolder),
        "add" => {
            if arg.is_empty() {
                return Err(CommandError::MissingArgument("folder add <name>"));
            }
            Ok(Command::AddFolder(arg.to_string()))
        }
        "rm" | "delete" => Ok(Command::DeleteFolder(parse_id(arg, "folder rm <id>")?)),
        _ => Err(CommandError::MissingArgument("folder new | folder add <name> | folder rm <id>")),
    }
}

fn parse_bookmark(rest: &str) -> Result<Command, CommandError> {
    let (sub, arg) = split_word(rest);
    match sub {
        "new" => Ok(Command::NewBookmark),
        "rm" | "delete" => Ok(Command::DeleteBookmark(parse_id(arg, "bookmark rm <id>")?)),
        _ => Err(CommandError::MissingArgument("bookmark new | bookmark rm <id>")),
    }
}

fn parse_config(rest: &str) -> Result<Command, CommandError> {
    let (sub, arg) = split_word(rest);
    match sub {
        "" | "show" => Ok(Command::Config),
        "set" => {
            let (key, value) = split_word(arg);
            if key.is_empty() || value.is_empty() {
                return Err(CommandError::MissingArgument("config set <key> <value>"));
            }
            Ok(Command::ConfigSet(key.to_string(), value.to_string()))
        }
        "reset" => Ok(Command::ConfigReset),
        _ => Err(CommandError::MissingArgument("config | config set <key> <value> | config reset")),
    }
}

/// Accepts `42` and `#42`.
fn parse_id(raw: &str, usage: &'static str) -> Result<i64, CommandError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(CommandError::MissingArgument(usage));
    }
    raw.trim_start_matches('#')
        .parse()
        .map_err(|_| CommandError::InvalidId(raw.to_string()))
}

/// Splits off the first whitespace-delimited word; the remainder is trimmed.
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim();
    match s.find(char::is_whitespace) {
        Some(i) => (&s[..i], s[i..].trim()),
        None => (s, ""),
    }
}
