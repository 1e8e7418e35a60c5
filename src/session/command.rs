//! Session command parsing

use thiserror::Error;

use crate::{ChallengeId, Difficulty, NewChallenge};

/// Problems with a line of session input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    #[error("'{command}' needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),

    #[error("create expects 'title | category | description | difficulty [| tag, tag]'")]
    MalformedCreate,

    #[error("title must not be empty")]
    EmptyTitle,

    #[error("description must not be empty")]
    EmptyDescription,

    #[error("unknown difficulty '{0}' (easy, medium, hard)")]
    UnknownDifficulty(String),

    #[error("unknown category '{0}'")]
    UnknownCategory(String),
}

/// A parsed session command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Help,
    List,
    Show(ChallengeId),
    Create(NewChallenge),
    Join(ChallengeId),
    CheckIn(ChallengeId),
    NextDay,
    ResetDay,
    Rank(u32),
    Ladder,
    Profile,
    Dashboard,
    Search(String),
    Popular,
    Trending,
    Quit,
}

impl SessionCommand {
    /// Parse one line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, InputError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "help" | "?" => Self::Help,
            "list" | "ls" => Self::List,
            "show" => Self::Show(parse_id("show", rest)?),
            "create" | "new" => Self::Create(parse_create(rest)?),
            "join" => Self::Join(parse_id("join", rest)?),
            "checkin" | "check-in" => Self::CheckIn(parse_id("checkin", rest)?),
            "next-day" | "nextday" => Self::NextDay,
            "reset-day" => Self::ResetDay,
            "rank" => Self::Rank(parse_number("rank", "a day count", rest)?),
            "ladder" => Self::Ladder,
            "profile" => Self::Profile,
            "dashboard" => Self::Dashboard,
            "search" => Self::Search(rest.to_string()),
            "popular" => Self::Popular,
            "trending" => Self::Trending,
            "quit" | "exit" => Self::Quit,
            other => return Err(InputError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}

fn parse_id(command: &'static str, rest: &str) -> Result<ChallengeId, InputError> {
    let raw = rest.trim_start_matches('#');
    parse_number(command, "a challenge id", raw)
}

fn parse_number<T: std::str::FromStr>(
    command: &'static str,
    what: &'static str,
    rest: &str,
) -> Result<T, InputError> {
    let raw = rest.split_whitespace().next().ok_or(InputError::MissingArgument {
        command,
        what,
    })?;
    raw.parse()
        .map_err(|_| InputError::InvalidNumber(raw.to_string()))
}

/// `title | category | description | difficulty [| tag, tag]`
fn parse_create(rest: &str) -> Result<NewChallenge, InputError> {
    let fields: Vec<&str> = rest.split('|').map(str::trim).collect();
    if fields.len() < 4 || fields.len() > 5 {
        return Err(InputError::MalformedCreate);
    }

    let difficulty = Difficulty::from_str(fields[3])
        .ok_or_else(|| InputError::UnknownDifficulty(fields[3].to_string()))?;

    let mut input = NewChallenge::new(fields[0], fields[1], fields[2], difficulty);
    if let Some(tags) = fields.get(4) {
        for tag in tags.split(',') {
            input = input.with_tag(tag.trim());
        }
    }

    Ok(input)
}
