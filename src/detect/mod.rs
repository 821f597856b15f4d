//! Client-side error detection over static HTTP responses
//!
//! The scan is a heuristic lower bound: it only sees what the server
//! delivered, so errors raised later in a browser go unnoticed, and an
//! unrelated word like "Error" in prose can produce a false positive.

mod finding;
mod matcher;

pub use finding::{ErrorFinding, FindingKind};
pub use matcher::{ErrorMatcher, ErrorSignature, HYDRATION_MARKERS, SCRIPT_SIGNATURES};
