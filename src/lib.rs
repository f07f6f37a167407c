//! `league_sim` simulates a single round robin league.
//!
//! A fixed pool of 100 players with random skill ratings is generated once.
//! From it the pool is drafted into 2 to 8 teams of 11, every team plays
//! every other team once, and the results are ranked into a league table.
//!
//! - [`core`] holds the domain values: players, the pool, teams and errors.
//! - [`league`] is the engine: drafting, match simulation, scheduling,
//!   standings and match historians.
//!
//! # Example
//!
//! ```
//! use league_sim::core::ErrorKind;
//! use league_sim::league::TournamentBuilder;
//!
//! let mut tournament = TournamentBuilder::new().seed(1).build();
//!
//! // Out of range team counts are rejected without touching state.
//! let err = tournament.configure_tournament(9).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
//!
//! tournament.configure_tournament(4).unwrap();
//! tournament.simulate_round();
//!
//! let standings = tournament.get_standings();
//! let leader = standings.leader().unwrap();
//! let detail = tournament.get_team_detail(leader.team_id).unwrap();
//! assert_eq!(detail.players.len(), 11);
//! ```
pub mod core;
pub mod league;
