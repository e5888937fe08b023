/*!
 * Energy Scheduler - Console Entry Point
 *
 * Reads operator commands from stdin and writes results to stdout:
 * - Process registration and energy-ordered scheduling
 * - Resource allocation recording and deadlock detection
 */

use energy_scheduler::cli::{run_session, USAGE};
use energy_scheduler::{init_tracing, Engine, EngineConfig};
use tokio::io::BufReader;
use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    if std::env::args().skip(1).any(|arg| arg == "-h" || arg == "--help") {
        println!("Usage: energy-sched < commands\n\n{}", USAGE);
        return Ok(());
    }

    init_tracing();

    let config = EngineConfig::from_env()?;
    info!(
        output = config.render.as_str(),
        max_queue_len = config.max_queue_len,
        "Energy scheduler starting"
    );

    let engine = Engine::new(config);
    let stdin = BufReader::new(tokio::io::stdin());
    let summary = run_session(&engine, stdin, tokio::io::stdout()).await?;

    info!(
        session = %engine.session_id(),
        commands = summary.commands,
        errors = summary.errors,
        "Session finished"
    );
    Ok(())
}
