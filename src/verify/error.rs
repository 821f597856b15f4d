use thiserror::Error;

use crate::auth::AuthError;

/// Conditions that abort a run before any route is probed
#[derive(Debug, Error)]
pub enum FatalPrecondition {
    #[error("authentication failed: {0}")]
    AuthFailed(#[from] AuthError),
    #[error("frontend root {url} is unreachable: {reason}")]
    FrontendUnreachable { url: String, reason: String },
}
