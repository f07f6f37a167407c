//! The tournament engine.
//!
//! A [`Tournament`] owns a generated [`PlayerPool`](crate::core::PlayerPool)
//! and a random source. Configuring it drafts teams, simulating a round plays
//! every pairing once, and the standings and team detail views are derived
//! from the resulting team state.
//!
//! # Example
//!
//! ```
//! use league_sim::league::{RecordMode, TournamentBuilder};
//!
//! let mut tournament = TournamentBuilder::new()
//!     .seed(2024)
//!     .record_mode(RecordMode::Tracked)
//!     .build();
//!
//! tournament.configure_tournament(6).unwrap();
//! tournament.simulate_round();
//!
//! for row in tournament.get_standings().iter() {
//!     assert_eq!(row.played, 5);
//! }
//! println!("{}", tournament.get_standings().to_table());
//! ```
mod allocator;
mod builder;
mod config;
mod historian;
mod scheduler;
mod simulation;
mod standings;
mod tournament;

#[cfg(any(test, feature = "league-test-util"))]
pub mod test_util;

pub use allocator::{Allocation, allocate_teams};
pub use builder::TournamentBuilder;
pub use config::{RecordMode, TournamentConfig};
pub use historian::{HistorianError, MatchHistorian, MatchLog, NullHistorian, RecordingHistorian};
pub use scheduler::{num_matches, round_robin_pairs};
pub use simulation::{
    GOAL_SKILL_DIVISOR, MAX_BONUS_GOALS, MatchOutcome, MatchResult, apply_result, base_goals,
    simulate_match,
};
pub use standings::{PlayerSummary, Standings, StandingsRow, TeamDetail, compare_rows};
pub use tournament::Tournament;

#[cfg(any(test, feature = "league-test-util"))]
pub use historian::FailingHistorian;
