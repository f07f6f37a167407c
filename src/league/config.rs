#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::core::{MAX_TEAMS, MIN_TEAMS, Result, TournamentError};

/// How the win/draw/loss columns of the standings are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RecordMode {
    /// Reconstruct the record from points: `won = points / 3`,
    /// `drawn = points % 3`, `played = teams - 1`, `lost` is the rest.
    ///
    /// This can't tell three draws from one win, and after repeated rounds
    /// `played` no longer matches what was simulated. `lost` is clamped at
    /// zero there rather than going negative.
    #[default]
    DerivedFromPoints,
    /// Use the counters the match simulator keeps for every team.
    Tracked,
}

/// Configuration for a tournament run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TournamentConfig {
    /// Seed of the tournament's random source. `None` until a builder fills
    /// in an entropy-drawn seed.
    pub seed: Option<u64>,
    /// Source of the standings' win/draw/loss columns
    pub record_mode: RecordMode,
    /// Panic when a match historian fails instead of dropping it.
    pub panic_on_historian_error: bool,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            seed: None,
            record_mode: RecordMode::DerivedFromPoints,
            panic_on_historian_error: false,
        }
    }
}

impl TournamentConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check a requested team count against `[MIN_TEAMS, MAX_TEAMS]`.
    pub fn validate_team_count(num_teams: usize) -> Result<()> {
        if !(MIN_TEAMS..=MAX_TEAMS).contains(&num_teams) {
            return Err(TournamentError::InvalidTeamCount {
                requested: num_teams,
                min: MIN_TEAMS,
                max: MAX_TEAMS,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TournamentConfig::default();
        assert!(config.seed.is_none());
        assert_eq!(config.record_mode, RecordMode::DerivedFromPoints);
        assert!(!config.panic_on_historian_error);
    }

    #[test]
    fn test_validate_team_count_bounds() {
        for n in MIN_TEAMS..=MAX_TEAMS {
            assert!(TournamentConfig::validate_team_count(n).is_ok());
        }
    }

    #[test]
    fn test_validate_team_count_rejects_out_of_range() {
        for n in [0, 1, 9, 100] {
            let err = TournamentConfig::validate_team_count(n).unwrap_err();
            assert_eq!(
                err,
                TournamentError::InvalidTeamCount {
                    requested: n,
                    min: MIN_TEAMS,
                    max: MAX_TEAMS,
                }
            );
        }
    }
}
