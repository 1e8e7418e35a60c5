//! Line-oriented session over a single engine
//!
//! Reads commands one line at a time and writes human-readable results.
//! State lives only as long as the session.

mod command;
pub mod format;

pub use command::{InputError, SessionCommand};

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::engine::{CheckInOutcome, ProgressEngine};
use crate::NewChallenge;

const HELP: &str = "\
Commands:
  list                         all challenges
  show <id>                    challenge details
  create <title> | <category> | <description> | <easy|medium|hard> [| tag, tag]
  join <id>                    join (resets score and streak)
  checkin <id>                 record today's check-in
  next-day                     move to the next day
  reset-day                    clear today's check-ins
  rank <days>                  tier for a day count
  ladder                       all rank tiers
  profile | dashboard          user summary
  search <text> | popular | trending
  quit";

/// Whether the session should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    engine: ProgressEngine,
    day: NaiveDate,
}

impl Session {
    /// Start a session on `today`
    pub fn new(mut engine: ProgressEngine, today: NaiveDate) -> Self {
        engine.start_day(today);
        Self { engine, day: today }
    }

    pub fn engine(&self) -> &ProgressEngine {
        &self.engine
    }

    pub fn day(&self) -> NaiveDate {
        self.day
    }

    /// Check input the engine takes on trust
    pub fn validate(&self, input: &NewChallenge) -> Result<(), InputError> {
        if input.title.trim().is_empty() {
            return Err(InputError::EmptyTitle);
        }
        if input.description.trim().is_empty() {
            return Err(InputError::EmptyDescription);
        }
        if !self.engine.categories().is_empty() && self.engine.category(&input.category).is_none()
        {
            return Err(InputError::UnknownCategory(input.category.clone()));
        }
        Ok(())
    }

    /// Run until end of input or `quit`
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        for line in input.lines() {
            let line = line.context("Failed to read session input")?;
            if self.execute(&line, out)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Execute one line. Bad input is reported to `out`, not returned.
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let command = match SessionCommand::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(e) => {
                writeln!(out, "error: {}", e)?;
                return Ok(Flow::Continue);
            }
        };

        tracing::debug!("session command: {:?}", command);
        self.apply(command, out)
            .with_context(|| "Failed to write session output")
    }

    fn apply<W: Write>(&mut self, command: SessionCommand, out: &mut W) -> std::io::Result<Flow> {
        let days = self.engine.settings().challenge_days;

        match command {
            SessionCommand::Help => writeln!(out, "{}", HELP)?,
            SessionCommand::List => {
                for challenge in self.engine.challenges() {
                    writeln!(out, "{}", format::challenge_line(challenge, days))?;
                }
            }
            SessionCommand::Show(id) => match self.engine.get(id) {
                Some(challenge) => {
                    for line in format::challenge_details(challenge, days) {
                        writeln!(out, "{}", line)?;
                    }
                    if self.engine.is_checked_in(id) {
                        writeln!(out, "    checked in today")?;
                    }
                }
                None => writeln!(out, "No challenge #{}", id)?,
            },
            SessionCommand::Create(input) => {
                if let Err(e) = self.validate(&input) {
                    writeln!(out, "error: {}", e)?;
                } else {
                    let id = self.engine.create_challenge(input).id;
                    self.write_events(out)?;
                    if let Some(challenge) = self.engine.get(id) {
                        writeln!(out, "    {}", format::challenge_line(challenge, days))?;
                    }
                }
            }
            SessionCommand::Join(id) => {
                if self.engine.join_challenge(id).is_none() {
                    writeln!(out, "No challenge #{}", id)?;
                }
                self.write_events(out)?;
            }
            SessionCommand::CheckIn(id) => match self.engine.check_in(id) {
                CheckInOutcome::Applied(_) => self.write_events(out)?,
                CheckInOutcome::AlreadyCheckedIn => {
                    writeln!(out, "#{} is already checked in today", id)?
                }
                CheckInOutcome::NotFound => writeln!(out, "No challenge #{}", id)?,
            },
            SessionCommand::NextDay => {
                if let Some(next) = self.day.succ_opt() {
                    self.day = next;
                    self.engine.start_day(next);
                }
                writeln!(out, "Day is now {}", self.day)?;
            }
            SessionCommand::ResetDay => {
                self.engine.clear_day_flags();
                writeln!(out, "Check-ins for {} cleared", self.day)?;
            }
            SessionCommand::Rank(total_days) => {
                let tier = self.engine.rank_for_days(total_days);
                writeln!(out, "{}", format::tier_line(tier))?;
                if let Some((next, missing)) = self.engine.next_tier(total_days) {
                    writeln!(out, "    {} more days to {} {}", missing, next.emoji, next.name)?;
                } else {
                    writeln!(out, "    top of the ladder")?;
                }
            }
            SessionCommand::Ladder => {
                for tier in self.engine.ladder().tiers() {
                    writeln!(out, "{}", format::tier_line(tier))?;
                }
            }
            SessionCommand::Profile => {
                let lines = format::profile_lines(self.engine.profile(), self.engine.profile_tier());
                for line in lines {
                    writeln!(out, "{}", line)?;
                }
            }
            SessionCommand::Dashboard => {
                writeln!(out, "{}", format::dashboard_line(&self.engine.dashboard()))?
            }
            SessionCommand::Search(query) => {
                let found = self.engine.search(&query, None);
                if found.is_empty() {
                    writeln!(out, "No challenges found.")?;
                }
                for challenge in found {
                    writeln!(out, "{}", format::challenge_line(challenge, days))?;
                }
            }
            SessionCommand::Popular => {
                for challenge in self.engine.popular() {
                    writeln!(out, "{}", format::challenge_line(challenge, days))?;
                }
            }
            SessionCommand::Trending => {
                for challenge in self.engine.trending() {
                    writeln!(out, "{}", format::challenge_line(challenge, days))?;
                }
            }
            SessionCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    /// Print and drop whatever the engine recorded
    fn write_events<W: Write>(&mut self, out: &mut W) -> std::io::Result<()> {
        for event in self.engine.take_events() {
            writeln!(out, "{}", event)?;
        }
        Ok(())
    }
}
