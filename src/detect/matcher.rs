//! Static error signature scan over delivered page content

use regex::{Regex, RegexBuilder};

use super::finding::{ErrorFinding, FindingKind};

/// A known client-side failure class and the regex that detects it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorSignature {
    pub description: &'static str,
    pub pattern: &'static str,
}

/// Script error signatures, applied case-insensitively in this order
pub const SCRIPT_SIGNATURES: [ErrorSignature; 7] = [
    ErrorSignature {
        description: "TypeError: Cannot read properties of undefined",
        pattern: r"TypeError.*Cannot read properties of undefined",
    },
    ErrorSignature {
        description: "ReferenceError: is not defined",
        pattern: r"ReferenceError.*is not defined",
    },
    ErrorSignature {
        description: "SyntaxError: Unexpected token",
        pattern: r"SyntaxError.*Unexpected token",
    },
    ErrorSignature {
        description: "Error stack frame in script module",
        pattern: r"Error.*at.*\.(?:tsx?|jsx?|mjs):",
    },
    ErrorSignature {
        description: "Cannot read properties of null",
        pattern: r"Cannot read properties of null",
    },
    ErrorSignature {
        description: "undefined is not a function",
        pattern: r"undefined is not a function",
    },
    ErrorSignature {
        description: "Cannot access before initialization",
        pattern: r"Cannot access.*before initialization",
    },
];

/// Literal phrases that mark a hydration failure (case-sensitive)
pub const HYDRATION_MARKERS: [&str; 2] = ["Hydration failed", "Hydration error"];

/// Error-log call with a flat argument list
const LOGGED_ERROR_PATTERN: &str = r"console\.error\([^)]*\)";

/// Compiled matcher.
///
/// Purely textual: content is never executed or parsed. Overlapping
/// signatures are not deduplicated, so counts err on the high side.
#[derive(Debug, Clone)]
pub struct ErrorMatcher {
    signatures: Vec<(ErrorSignature, Regex)>,
    logged_error: Regex,
}

impl ErrorMatcher {
    pub fn new() -> Result<Self, regex::Error> {
        let signatures = SCRIPT_SIGNATURES
            .iter()
            .map(|sig| {
                RegexBuilder::new(sig.pattern)
                    .case_insensitive(true)
                    .build()
                    .map(|re| (*sig, re))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let logged_error = Regex::new(LOGGED_ERROR_PATTERN)?;

        Ok(Self {
            signatures,
            logged_error,
        })
    }

    /// Scan `text` and return every finding, in a stable order:
    /// script signatures first, then hydration, then logged errors.
    pub fn find_errors(&self, text: &str, route: &str) -> Vec<ErrorFinding> {
        let mut findings = Vec::new();

        for (sig, re) in &self.signatures {
            for m in re.find_iter(text) {
                findings.push(ErrorFinding::new(
                    FindingKind::ScriptError,
                    sig.description,
                    m.as_str(),
                    route,
                ));
            }
        }

        if let Some(marker) = HYDRATION_MARKERS.iter().find(|m| text.contains(*m)) {
            findings.push(ErrorFinding::new(
                FindingKind::HydrationError,
                HYDRATION_MARKERS.join(" | "),
                *marker,
                route,
            ));
        }

        for m in self.logged_error.find_iter(text) {
            findings.push(ErrorFinding::new(
                FindingKind::LoggedError,
                m.as_str(),
                m.as_str(),
                route,
            ));
        }

        findings
    }
}
