/*!
 * Console Front End
 * Line-oriented operator interface over an engine session
 */

mod command;
mod render;
mod session;

pub use command::{Command, USAGE};
pub use render::Renderer;
pub use session::{execute, run_session, Outcome, SessionSummary};
