// crates/roundtrip-core/src/report.rs
//
// Binary pass/fail contract: exit 0 only for a matching round trip.

use std::process::ExitCode;

use crate::error::HarnessError;
use crate::runner::Outcome;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

#[derive(Debug, PartialEq, Eq)]
pub struct Report {
    status: u8,
    diagnostic: Option<String>,
}

impl Report {
    pub fn from_outcome(outcome: Outcome) -> Self {
        // Mismatch is reported through the exit status alone.
        let status = if outcome.is_match() {
            EXIT_SUCCESS
        } else {
            EXIT_FAILURE
        };
        Self::new(status, None)
    }

    pub fn from_error(err: &HarnessError) -> Self {
        Self::new(EXIT_FAILURE, Some(err.to_string()))
    }

    pub fn from_result(result: &Result<Outcome, HarnessError>) -> Self {
        match result {
            Ok(outcome) => Self::from_outcome(*outcome),
            Err(e) => Self::from_error(e),
        }
    }

    fn new(status: u8, diagnostic: Option<String>) -> Self {
        Self { status, diagnostic }
    }

    pub fn status(&self) -> u8 {
        self.status
    }

    pub fn diagnostic(&self) -> Option<&str> {
        self.diagnostic.as_deref()
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.status)
    }

    /// Write the diagnostic (if any) to stderr and return the exit code.
    pub fn emit(self) -> ExitCode {
        if let Some(text) = &self.diagnostic {
            eprintln!("{text}");
        }
        self.exit_code()
    }
}
