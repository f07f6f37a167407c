use thiserror::Error;

use super::TeamId;

/// The two broad failure categories an engine caller has to branch on.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ErrorKind {
    /// The requested configuration can't be built (bad team count or a
    /// roster overflow).
    InvalidConfiguration,
    /// A lookup referenced something that doesn't exist.
    NotFound,
}

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TournamentError {
    #[error("The tournament must have between {min} and {max} teams, got {requested}")]
    InvalidTeamCount {
        requested: usize,
        min: usize,
        max: usize,
    },

    #[error("Team {team_id} already has {capacity} players")]
    RosterFull { team_id: TeamId, capacity: usize },

    #[error("Team {0} not found")]
    TeamNotFound(TeamId),
}

impl TournamentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TournamentError::InvalidTeamCount { .. } | TournamentError::RosterFull { .. } => {
                ErrorKind::InvalidConfiguration
            }
            TournamentError::TeamNotFound(_) => ErrorKind::NotFound,
        }
    }
}

/// Result type for tournament operations
pub type Result<T> = std::result::Result<T, TournamentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let err = TournamentError::InvalidTeamCount {
            requested: 9,
            min: 2,
            max: 8,
        };
        assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);

        let err = TournamentError::RosterFull {
            team_id: 1,
            capacity: 11,
        };
        assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);

        assert_eq!(TournamentError::TeamNotFound(4).kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_error_messages() {
        let err = TournamentError::InvalidTeamCount {
            requested: 1,
            min: 2,
            max: 8,
        };
        assert_eq!(
            err.to_string(),
            "The tournament must have between 2 and 8 teams, got 1"
        );
        assert_eq!(
            TournamentError::TeamNotFound(12).to_string(),
            "Team 12 not found"
        );
    }
}
