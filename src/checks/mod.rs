//! Auxiliary checks outside the route/API verification
//!
//! A static type-check and a production build run as external processes
//! with a bounded wait; a third check probes a fixed list of backend
//! endpoints. A check that cannot reach a verdict (timeout, tool missing)
//! is reported as skipped rather than failed.

mod executor;
mod result;
mod runner;

pub use executor::{run_process, ProcessOutput};
pub use result::{CheckResult, CheckStatus, CheckSummary};
pub use runner::{run_endpoint_check, run_process_check, DiagnosticStyle, ProcessCheck};
