/*!
 * Monitoring
 * Structured tracing for engine operations
 */

mod tracer;

pub use tracer::{init_tracing, OperationSpan};
