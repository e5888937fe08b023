/*!
 * Console Session
 * Read commands, run them against the engine, write rendered results
 */

use super::command::Command;
use super::render::Renderer;
use crate::core::errors::EngineError;
use crate::core::limits::MAX_COMMAND_LINE_LEN;
use crate::core::types::{EngineResult, Pid};
use crate::deadlock::{DeadlockReport, Edge};
use crate::engine::{Engine, EngineSnapshot};
use crate::scheduler::Schedule;
use tokio::io::{self as io, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, warn};

/// Result of one executed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added(Pid),
    Recorded(Pid),
    Scheduled(Schedule),
    Deadlock(DeadlockReport),
    Edges(Vec<Edge>),
    Stats(EngineSnapshot),
    Reset,
    Help,
    Quit,
}

/// Counters for a finished session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub commands: usize,
    pub errors: usize,
}

/// Run one parsed command against the engine
pub fn execute(engine: &Engine, command: Command) -> EngineResult<Outcome> {
    let outcome = match command {
        Command::Add {
            pid,
            burst_time,
            energy,
        } => {
            engine.add_process(pid, burst_time, energy)?;
            Outcome::Added(pid)
        }
        Command::Alloc {
            pid,
            allocated,
            requested,
        } => {
            engine.record_allocation(pid, allocated, requested);
            Outcome::Recorded(pid)
        }
        Command::Schedule => Outcome::Scheduled(engine.schedule()),
        Command::Deadlock => Outcome::Deadlock(engine.detect_deadlock()),
        Command::Edges => Outcome::Edges(engine.edges()),
        Command::Stats => Outcome::Stats(engine.snapshot()),
        Command::Reset => {
            engine.reset();
            Outcome::Reset
        }
        Command::Help => Outcome::Help,
        Command::Quit => Outcome::Quit,
    };
    Ok(outcome)
}

/// Read one line of at most `MAX_COMMAND_LINE_LEN + 1` bytes into `buf`
///
/// Bytes past the cap are consumed and discarded up to the newline. Returns
/// `None` at end of input, otherwise whether the line was truncated.
async fn next_raw_line<R>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<Option<bool>>
where
    R: AsyncBufRead + Unpin,
{
    buf.clear();
    let mut truncated = false;
    let mut read_any = false;

    loop {
        let available = reader.fill_buf().await?;
        if available.is_empty() {
            return Ok(read_any.then_some(truncated));
        }
        read_any = true;

        let newline = available.iter().position(|&b| b == b'\n');
        let chunk = match newline {
            Some(idx) => &available[..idx],
            None => available,
        };

        let room = (MAX_COMMAND_LINE_LEN + 1).saturating_sub(buf.len());
        if chunk.len() > room {
            truncated = true;
        }
        buf.extend_from_slice(&chunk[..chunk.len().min(room)]);

        let used = chunk.len() + usize::from(newline.is_some());
        reader.consume(used);

        if newline.is_some() {
            return Ok(Some(truncated));
        }
    }
}

/// Validate a raw line before parsing
fn decode_line(raw: &[u8], truncated: bool) -> EngineResult<String> {
    if truncated {
        return Err(EngineError::InvalidInput(format!(
            "line exceeds {} bytes",
            MAX_COMMAND_LINE_LEN
        )));
    }
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8(raw.to_vec())
        .map_err(|_| EngineError::InvalidInput("line is not valid UTF-8".into()))
}

/// Drive a session until `quit` or end of input
///
/// Input errors are rendered and the session continues; only I/O failures
/// end it early.
pub async fn run_session<R, W>(
    engine: &Engine,
    mut reader: R,
    mut writer: W,
) -> EngineResult<SessionSummary>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let renderer = Renderer::new(engine.config().render);
    let mut summary = SessionSummary::default();
    let mut buf = Vec::with_capacity(128);

    while let Some(truncated) = next_raw_line(&mut reader, &mut buf).await? {
        let result = decode_line(&buf, truncated)
            .and_then(|line| Command::parse(&line))
            .and_then(|parsed| match parsed {
                Some(command) => {
                    debug!(command = command.name(), "Executing command");
                    execute(engine, command).map(Some)
                }
                None => Ok(None),
            });

        let output = match result {
            Ok(None) => continue,
            Ok(Some(Outcome::Quit)) => break,
            Ok(Some(outcome)) => {
                summary.commands += 1;
                renderer.outcome(&outcome)
            }
            Err(err) => {
                summary.commands += 1;
                summary.errors += 1;
                if err.is_user_error() {
                    warn!(error = %err, "Command rejected");
                } else {
                    error!(error = %err, "Command failed");
                }
                renderer.error(&err)
            }
        };

        writer.write_all(output.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn read_all(mut input: &[u8]) -> Vec<(Vec<u8>, bool)> {
        let mut buf = Vec::new();
        let mut lines = Vec::new();
        while let Some(truncated) = next_raw_line(&mut input, &mut buf).await.unwrap() {
            lines.push((buf.clone(), truncated));
        }
        lines
    }

    #[tokio::test]
    async fn test_raw_lines_split_on_newline() {
        let lines = read_all(b"add 1 5 30\r\nschedule\nlast").await;
        assert_eq!(
            lines,
            vec![
                (b"add 1 5 30\r".to_vec(), false),
                (b"schedule".to_vec(), false),
                (b"last".to_vec(), false),
            ]
        );
        assert!(read_all(b"").await.is_empty());
    }

    #[tokio::test]
    async fn test_overlong_line_is_capped_and_skipped() {
        let mut input = vec![b'x'; MAX_COMMAND_LINE_LEN * 3];
        input.extend_from_slice(b"\nstats\n");

        let lines = read_all(&input).await;
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].0.len(), MAX_COMMAND_LINE_LEN + 1);
        assert!(lines[0].1);
        assert_eq!(lines[1], (b"stats".to_vec(), false));
    }

    #[test]
    fn test_decode_line() {
        assert_eq!(decode_line(b"stats\r", false).unwrap(), "stats");
        assert_eq!(
            decode_line(b"add \xff 5 10", false),
            Err(EngineError::InvalidInput("line is not valid UTF-8".into()))
        );
        assert!(matches!(
            decode_line(b"stats", true),
            Err(EngineError::InvalidInput(_))
        ));
    }
}
