/*!
 * Result Rendering
 * Text for operators, JSON for visualizers
 */

use super::command::USAGE;
use super::session::Outcome;
use crate::core::config::Render;
use crate::core::errors::EngineError;
use crate::deadlock::DeadlockReport;
use crate::scheduler::Schedule;
use serde::Serialize;
use serde_json::json;

/// Formats outcomes in the configured output mode
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    mode: Render,
}

impl Renderer {
    pub const fn new(mode: Render) -> Self {
        Self { mode }
    }

    pub fn outcome(&self, outcome: &Outcome) -> String {
        match self.mode {
            Render::Text => text(outcome),
            Render::Json => json_outcome(outcome),
        }
    }

    pub fn error(&self, err: &EngineError) -> String {
        match self.mode {
            Render::Text => format!("Error: {}", err),
            Render::Json => json!({ "status": "error", "message": err.to_string(), "error": err })
                .to_string(),
        }
    }
}

fn text(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Added(pid) => format!("Process {} added successfully!", pid),
        Outcome::Recorded(pid) => format!("Resource allocation recorded for process {}.", pid),
        Outcome::Scheduled(schedule) => schedule_text(schedule),
        Outcome::Deadlock(report) => deadlock_text(report),
        Outcome::Edges(edges) if edges.is_empty() => "No resource edges recorded.".to_string(),
        Outcome::Edges(edges) => edges
            .iter()
            .map(|edge| edge.to_string())
            .collect::<Vec<_>>()
            .join("\n"),
        Outcome::Stats(snapshot) => format!(
            "Session {}: {} pending, {} with allocations, {} added, {} rejected, {} drained in {} runs, {} energy units scheduled",
            snapshot.session_id,
            snapshot.pending,
            snapshot.recorded_processes,
            snapshot.queue.total_added,
            snapshot.queue.total_rejected,
            snapshot.queue.total_drained,
            snapshot.queue.drains,
            snapshot.queue.energy_drained,
        ),
        Outcome::Reset => "Session reset.".to_string(),
        Outcome::Help => USAGE.to_string(),
        Outcome::Quit => String::new(),
    }
}

fn schedule_text(schedule: &Schedule) -> String {
    format!(
        "Execution Order: {:?}\nTotal Energy: {} units",
        schedule.pids(),
        schedule.total_energy
    )
}

fn deadlock_text(report: &DeadlockReport) -> String {
    if !report.deadlocked {
        return "No deadlock detected.".to_string();
    }
    let path = report
        .path()
        .iter()
        .map(|node| node.to_string())
        .collect::<Vec<_>>()
        .join(" -> ");
    format!("A deadlock has been detected!\nCycle: {}", path)
}

fn json_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Added(pid) => ok("added", json!({ "pid": pid })),
        Outcome::Recorded(pid) => ok("recorded", json!({ "pid": pid })),
        Outcome::Scheduled(schedule) => ok("schedule", schedule),
        Outcome::Deadlock(report) => ok("deadlock", report),
        Outcome::Edges(edges) => ok("edges", edges),
        Outcome::Stats(snapshot) => ok("stats", snapshot),
        Outcome::Reset => ok("reset", json!({})),
        Outcome::Help => ok("help", json!({ "usage": USAGE })),
        Outcome::Quit => ok("quit", json!({})),
    }
}

fn ok<T: Serialize>(kind: &str, data: T) -> String {
    json!({ "status": "ok", "kind": kind, "data": data }).to_string()
}
