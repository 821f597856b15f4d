//! Route and API verification
//!
//! A run moves through these states:
//!
//! ```text
//! NotStarted -> Authenticating -> AuthFailed
//!                              -> CheckingFrontend -> FrontendUnreachable
//!                                                  -> Probing -> Aggregating -> Reported
//! ```
//!
//! Pages-only runs skip `Authenticating`. The engine only checks that each
//! declared API answers when called directly; it does not observe whether
//! the route actually calls it at runtime.

mod engine;
mod error;
mod outcome;
mod state;


pub use engine::{EngineSettings, RunObserver, SilentObserver, VerificationEngine};
pub use error::FatalPrecondition;
pub use outcome::{ApiOutcome, RouteOutcome};
pub use state::{RunMode, RunState};
