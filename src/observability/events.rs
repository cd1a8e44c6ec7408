//! Observability events for the advisor
//!
//! Every log line carries one of these as its `event` field. Names are
//! stable and upper snake case.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration loaded
    ConfigLoaded,
    /// Logging initialized
    LoggingReady,

    // Advisory run
    /// Requirements accepted, scoring begins
    AdviseStart,
    /// One topology scored
    CandidateEvaluated,
    /// Winning topology selected
    WinnerSelected,
    /// Requirements rejected before scoring
    RequestRejected,

    // Explain
    /// Structured explanation built
    ExplainComplete,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::LoggingReady => "LOGGING_READY",
            Event::AdviseStart => "ADVISE_START",
            Event::CandidateEvaluated => "CANDIDATE_EVALUATED",
            Event::WinnerSelected => "WINNER_SELECTED",
            Event::RequestRejected => "REQUEST_REJECTED",
            Event::ExplainComplete => "EXPLAIN_COMPLETE",
        }
    }

    /// Returns true if this event reports rejected input
    pub fn is_rejection(&self) -> bool {
        matches!(self, Event::RequestRejected)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
