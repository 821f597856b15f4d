pub mod checks;
pub mod routes;
pub mod run;
pub mod scan;

/// Overall outcome of a command, mapped to the process exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Everything checked passed
    Passed,
    /// The command ran to completion but something failed
    ChecksFailed,
    /// A precondition failed and the run was abandoned
    Aborted,
}

impl Verdict {
    pub fn exit_code(self) -> i32 {
        match self {
            Verdict::Passed => 0,
            Verdict::ChecksFailed => 1,
            Verdict::Aborted => 2,
        }
    }

    pub fn from_passed(passed: bool) -> Self {
        if passed {
            Verdict::Passed
        } else {
            Verdict::ChecksFailed
        }
    }
}
