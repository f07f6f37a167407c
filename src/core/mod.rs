//! Domain values shared by the whole crate: players, the player pool, teams
//! and the error type.
mod errors;
mod player;
mod team;

pub use errors::{ErrorKind, Result, TournamentError};
pub use player::{Player, PlayerId, PlayerPool};
pub use team::{Team, TeamId};

/// Number of players generated for every tournament.
pub const PLAYER_POOL_SIZE: usize = 100;
/// Players per team. A team never holds more.
pub const ROSTER_SIZE: usize = 11;
/// Fewest teams a tournament can be configured with.
pub const MIN_TEAMS: usize = 2;
/// Most teams a tournament can be configured with.
pub const MAX_TEAMS: usize = 8;
/// Lowest generated skill rating.
pub const MIN_SKILL: u8 = 50;
/// Highest generated skill rating.
pub const MAX_SKILL: u8 = 100;
pub const POINTS_FOR_WIN: u32 = 3;
pub const POINTS_FOR_DRAW: u32 = 1;
