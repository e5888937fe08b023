/*!
 * Console Commands
 * Parse operator lines into engine commands
 */

use crate::core::errors::EngineError;
use crate::core::limits::MAX_COMMAND_LINE_LEN;
use crate::core::types::{BurstTime, Energy, EngineResult, Pid, ResourceId};
use std::str::FromStr;

/// Placeholder for an empty resource list
const EMPTY_LIST: &str = "-";

pub const USAGE: &str = "\
Commands:
  add <pid> <burst_time> <energy>      register a process
  alloc <pid> <held> [requested]       record holdings, lists are comma separated, '-' for none
  schedule                             drain the queue in ascending energy order
  deadlock                             check recorded allocations for a wait cycle
  edges                                list the resource-wait graph
  stats                                show session statistics
  reset                                discard processes and allocations
  help                                 show this message
  quit                                 end the session";

/// One operator command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        pid: Pid,
        burst_time: BurstTime,
        energy: Energy,
    },
    Alloc {
        pid: Pid,
        allocated: Vec<ResourceId>,
        requested: Vec<ResourceId>,
    },
    Schedule,
    Deadlock,
    Edges,
    Stats,
    Reset,
    Help,
    Quit,
}

impl Command {
    /// Parse one line; blank lines and `#` comments yield `None`
    pub fn parse(line: &str) -> EngineResult<Option<Self>> {
        if line.len() > MAX_COMMAND_LINE_LEN {
            return Err(EngineError::InvalidInput(format!(
                "line exceeds {} bytes",
                MAX_COMMAND_LINE_LEN
            )));
        }

        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match verb.to_lowercase().as_str() {
            "add" => {
                expect_args("add", &args, 3, 3)?;
                let burst_time: BurstTime = parse_field("burst time", args[1])?;
                if burst_time == 0 {
                    return Err(EngineError::InvalidInput(
                        "burst time must be a positive integer".into(),
                    ));
                }
                Self::Add {
                    pid: parse_field("pid", args[0])?,
                    burst_time,
                    energy: parse_field("energy", args[2])?,
                }
            }
            "alloc" | "allocate" => {
                expect_args("alloc", &args, 2, 3)?;
                Self::Alloc {
                    pid: parse_field("pid", args[0])?,
                    allocated: parse_resources(args[1]),
                    requested: args.get(2).map(|s| parse_resources(s)).unwrap_or_default(),
                }
            }
            "schedule" | "run" => Self::no_args(Self::Schedule, &args)?,
            "deadlock" | "check" => Self::no_args(Self::Deadlock, &args)?,
            "edges" | "graph" => Self::no_args(Self::Edges, &args)?,
            "stats" => Self::no_args(Self::Stats, &args)?,
            "reset" => Self::no_args(Self::Reset, &args)?,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => {
                return Err(EngineError::InvalidInput(format!(
                    "unknown command '{}'",
                    other
                )))
            }
        };

        Ok(Some(command))
    }

    fn no_args(command: Self, args: &[&str]) -> EngineResult<Self> {
        if args.is_empty() {
            Ok(command)
        } else {
            Err(EngineError::InvalidInput(format!(
                "'{}' takes no arguments",
                command.name()
            )))
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::Alloc { .. } => "alloc",
            Self::Schedule => "schedule",
            Self::Deadlock => "deadlock",
            Self::Edges => "edges",
            Self::Stats => "stats",
            Self::Reset => "reset",
            Self::Help => "help",
            Self::Quit => "quit",
        }
    }
}

fn expect_args(verb: &str, args: &[&str], min: usize, max: usize) -> EngineResult<()> {
    if args.len() < min || args.len() > max {
        let expected = if min == max {
            min.to_string()
        } else {
            format!("{} to {}", min, max)
        };
        return Err(EngineError::InvalidInput(format!(
            "'{}' expects {} arguments, got {}",
            verb,
            expected,
            args.len()
        )));
    }
    Ok(())
}

fn parse_field<T: FromStr>(field: &str, raw: &str) -> EngineResult<T> {
    raw.parse().map_err(|_| {
        EngineError::InvalidInput(format!("{} must be an integer, got '{}'", field, raw))
    })
}

fn parse_resources(raw: &str) -> Vec<ResourceId> {
    if raw == EMPTY_LIST {
        return Vec::new();
    }
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ResourceId::from)
        .collect()
}
