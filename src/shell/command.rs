//! Command parsing for the interactive shell.
//!
//! A line is validated as a whole first, then split on spaces. The first word
//! selects the command and may be any non-empty prefix of the command name, so
//! `d`, `del` and `delete` all select [`CommandKind::Delete`]. Words after the
//! expected arguments are ignored.

use crate::data_structures::letter_trie::Points;
use crate::error::shell::{ShellError, ShellResult};

/// Help text printed by the `help` command.
pub const HELP_MESSAGE: &str = "
You can use the following commands to interact with this application:

'add <name> <points>':       Adds a new entry made of a name and its points
'delete <name>':             Deletes an entry
'change <name> <points>':    Changes the points of an existing entry
'points <name>':             Prints the points stored for a name
'trie':                      Prints the data structure and all its entries
'new':                       Discards all entries and starts with an empty data structure
'quit':                      Quits the application
'help':                      Prints this message

Every command can also be called by a prefix of its name, e.g. 'a' or 'ad' for 'add'.
";

/// The commands understood by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Start over with an empty trie
    New,
    /// Add a new entry
    Add,
    /// Change the points of an entry
    Change,
    /// Delete an entry
    Delete,
    /// Print the points of an entry
    Points,
    /// Print the rendered trie
    Trie,
    /// Print the help text
    Help,
    /// Leave the shell
    Quit,
}

impl CommandKind {
    /// Every command, in matching order.
    pub const ALL: [CommandKind; 8] = [
        Self::New,
        Self::Add,
        Self::Change,
        Self::Delete,
        Self::Points,
        Self::Trie,
        Self::Help,
        Self::Quit,
    ];

    /// Full name of the command.
    pub fn name(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Add => "add",
            Self::Change => "change",
            Self::Delete => "delete",
            Self::Points => "points",
            Self::Trie => "trie",
            Self::Help => "help",
            Self::Quit => "quit",
        }
    }

    /// Resolves a command word, accepting any non-empty prefix of a command name.
    pub fn from_prefix(word: &str) -> Option<Self> {
        if word.is_empty() {
            return None;
        }
        Self::ALL.into_iter().find(|kind| kind.name().starts_with(word))
    }
}

/// A fully parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the trie with an empty one.
    New,
    /// Add `name` with `points`.
    Add {
        /// Name of the entry
        name: String,
        /// Points for the entry
        points: Points,
    },
    /// Change the points of `name`.
    Change {
        /// Name of the entry
        name: String,
        /// New points for the entry
        points: Points,
    },
    /// Delete `name`.
    Delete {
        /// Name of the entry
        name: String,
    },
    /// Print the points of `name`.
    Points {
        /// Name of the entry
        name: String,
    },
    /// Print the rendered trie.
    Trie,
    /// Print the help text.
    Help,
    /// Leave the shell.
    Quit,
}

/// Checks that a line only holds lowercase ASCII letters, ASCII digits and spaces.
pub fn validate_line(line: &str) -> ShellResult<()> {
    let valid = line
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' ');
    if valid {
        Ok(())
    } else {
        Err(ShellError::OnlyLowercase)
    }
}

/// Parses one input line into a [`Command`].
pub fn parse(line: &str) -> ShellResult<Command> {
    validate_line(line)?;

    let mut words = line.split(' ').filter(|word| !word.is_empty());
    let word = words.next().ok_or(ShellError::NoCommand)?;
    let kind = CommandKind::from_prefix(word).ok_or(ShellError::InvalidCommand)?;

    let command = match kind {
        CommandKind::New => Command::New,
        CommandKind::Add => {
            let name = parse_name(&mut words)?;
            let points = parse_points(&mut words)?;
            Command::Add { name, points }
        }
        CommandKind::Change => {
            let name = parse_name(&mut words)?;
            let points = parse_points(&mut words)?;
            Command::Change { name, points }
        }
        CommandKind::Delete => Command::Delete {
            name: parse_name(&mut words)?,
        },
        CommandKind::Points => Command::Points {
            name: parse_name(&mut words)?,
        },
        CommandKind::Trie => Command::Trie,
        CommandKind::Help => Command::Help,
        CommandKind::Quit => Command::Quit,
    };

    Ok(command)
}

fn parse_name<'a, I>(words: &mut I) -> ShellResult<String>
where
    I: Iterator<Item = &'a str>,
{
    let name = words.next().ok_or(ShellError::NoName)?;
    if name.chars().any(|c| c.is_ascii_digit()) {
        return Err(ShellError::NameContainsNumbers);
    }
    Ok(name.to_string())
}

fn parse_points<'a, I>(words: &mut I) -> ShellResult<Points>
where
    I: Iterator<Item = &'a str>,
{
    words
        .next()
        .and_then(|word| word.parse::<Points>().ok())
        .ok_or(ShellError::NoPoints)
}
