//! Historians observe every simulated match.
//!
//! They are handed each [`MatchResult`] as soon as it is played, after both
//! teams have been updated. A historian that returns an error is dropped from
//! the tournament (or panics, see
//! [`TournamentConfig::panic_on_historian_error`](crate::league::TournamentConfig)).
mod null;
mod recording;

#[cfg(any(test, feature = "league-test-util"))]
mod failing;

use thiserror::Error;

use super::MatchResult;

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum HistorianError {
    #[error("Unable to record match")]
    UnableToRecordMatch,
    #[error("Historian storage is already borrowed")]
    StorageBorrowed,
}

pub trait MatchHistorian {
    /// Called once per simulated match.
    fn record_match(&mut self, result: &MatchResult) -> Result<(), HistorianError>;
}

pub use null::NullHistorian;
pub use recording::{MatchLog, RecordingHistorian};

#[cfg(any(test, feature = "league-test-util"))]
pub use failing::FailingHistorian;
