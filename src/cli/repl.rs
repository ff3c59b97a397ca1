//! Interactive bet slip over a line-oriented reader.
//!
//! Rows are numbered from 1 here; the slip itself is 0-based.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use tracing::{debug, warn};

use super::{describe, describe_slip};
use crate::slip::BetSlip;

const HELP: &str = "\
Commands:
  add [odds]         add a row, optionally filled
  set <row> <odds>   change a row
  remove <row>       delete a row
  wager [amount]     set the wager, or clear it when no amount is given
  list               show rows and wager
  calc               price the parlay
  reset              start over
  help               show this text
  quit               leave";

const INVALID_TEXT: &str = "Input is not valid text; line ignored.";

/// A single line of input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlipCommand {
    Add(Option<String>),
    Set { index: usize, odds: String },
    Remove(usize),
    Wager(Option<String>),
    List,
    Calc,
    Reset,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for the list.")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Row must be a number from 1 up, got '{0}'.")]
    BadRow(String),
}

fn parse_row(raw: &str) -> Result<usize, CommandError> {
    match raw.parse::<usize>() {
        Ok(row) if row >= 1 => Ok(row - 1),
        _ => Err(CommandError::BadRow(raw.to_string())),
    }
}

impl FromStr for SlipCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let Some(verb) = parts.next() else {
            return Err(CommandError::Usage("help"));
        };
        let args: Vec<&str> = parts.collect();

        match (verb.to_lowercase().as_str(), args.as_slice()) {
            ("add", []) => Ok(Self::Add(None)),
            ("add", [odds]) => Ok(Self::Add(Some(odds.to_string()))),
            ("add", _) => Err(CommandError::Usage("add [odds]")),
            ("set", [row, odds]) => Ok(Self::Set {
                index: parse_row(row)?,
                odds: odds.to_string(),
            }),
            ("set", _) => Err(CommandError::Usage("set <row> <odds>")),
            ("remove" | "rm", [row]) => Ok(Self::Remove(parse_row(row)?)),
            ("remove" | "rm", _) => Err(CommandError::Usage("remove <row>")),
            ("wager", []) => Ok(Self::Wager(None)),
            ("wager", [amount]) => Ok(Self::Wager(Some(amount.to_string()))),
            ("wager", _) => Err(CommandError::Usage("wager [amount]")),
            ("list" | "ls", []) => Ok(Self::List),
            ("calc" | "calculate", []) => Ok(Self::Calc),
            ("reset", []) => Ok(Self::Reset),
            ("help" | "?", []) => Ok(Self::Help),
            ("quit" | "exit" | "q", []) => Ok(Self::Quit),
            (other, _) => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Read commands from `input` until `quit` or end of input, writing prompts
/// and results to `out`.
///
/// A line that is not valid UTF-8 is reported and skipped; the session
/// carries on with the next line.
pub fn run<R: BufRead, W: Write>(
    slip: &mut BetSlip,
    mut input: R,
    out: &mut W,
    currency: &str,
) -> io::Result<()> {
    writeln!(out, "Parlay Calculator. Type 'help' for commands.")?;
    let mut buf = Vec::new();

    loop {
        write!(out, "> ")?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(out)?;
            break;
        }
        let Ok(line) = std::str::from_utf8(&buf) else {
            warn!(bytes = buf.len(), "Skipped line that is not valid UTF-8");
            writeln!(out, "{INVALID_TEXT}")?;
            continue;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let command = match line.parse::<SlipCommand>() {
            Ok(c) => c,
            Err(e) => {
                writeln!(out, "{e}")?;
                continue;
            }
        };
        debug!(?command, "Slip command");

        if command == SlipCommand::Quit {
            break;
        }
        apply(slip, command, out, currency)?;
    }

    Ok(())
}

fn apply<W: Write>(
    slip: &mut BetSlip,
    command: SlipCommand,
    out: &mut W,
    currency: &str,
) -> io::Result<()> {
    match command {
        SlipCommand::Add(odds) => match slip.add_row_with(odds.unwrap_or_default()) {
            Ok(index) => writeln!(out, "Added row {}.", index + 1)?,
            Err(e) => writeln!(out, "{}", describe_slip(&e))?,
        },
        SlipCommand::Set { index, odds } => {
            if let Err(e) = slip.set_row(index, odds) {
                writeln!(out, "{}", describe_slip(&e))?;
            }
        }
        SlipCommand::Remove(index) => match slip.remove_row(index) {
            Ok(_) => writeln!(out, "Removed row {}.", index + 1)?,
            Err(e) => writeln!(out, "{}", describe_slip(&e))?,
        },
        SlipCommand::Wager(Some(amount)) => slip.set_wager(amount),
        SlipCommand::Wager(None) => {
            slip.clear_wager();
            writeln!(out, "Wager cleared.")?;
        }
        SlipCommand::List => list(slip, out, currency)?,
        SlipCommand::Calc => match slip.calculate() {
            Ok(result) => writeln!(out, "{}", result.render(currency))?,
            Err(e) => writeln!(out, "{}", describe(&e))?,
        },
        SlipCommand::Reset => {
            slip.reset();
            writeln!(out, "Slip reset.")?;
        }
        SlipCommand::Help => writeln!(out, "{HELP}")?,
        SlipCommand::Quit => {}
    }
    Ok(())
}

fn list<W: Write>(slip: &BetSlip, out: &mut W, currency: &str) -> io::Result<()> {
    if slip.rows().is_empty() {
        writeln!(out, "  (no rows)")?;
    }
    for (i, row) in slip.rows().iter().enumerate() {
        let shown = if row.trim().is_empty() { "(empty)" } else { row.as_str() };
        writeln!(out, "  {}. {shown}", i + 1)?;
    }
    match slip.wager() {
        Some(w) => writeln!(out, "  Wager: {currency}{w}"),
        None => writeln!(out, "  Wager: none"),
    }
}
