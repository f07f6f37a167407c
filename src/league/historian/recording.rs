use std::{cell::RefCell, rc::Rc};

use super::{HistorianError, MatchHistorian};
use crate::core::TeamId;
use crate::league::MatchResult;

/// Shared, append-only list of recorded matches.
pub type MatchLog = Rc<RefCell<Vec<MatchResult>>>;

/// A historian that keeps every match it sees.
///
/// The log is shared, so grab a handle with [`RecordingHistorian::get_storage`]
/// before boxing the historian into a tournament and read it afterwards.
///
/// ```
/// use league_sim::league::{RecordingHistorian, TournamentBuilder};
///
/// let historian = RecordingHistorian::new();
/// let log = historian.get_storage();
///
/// let mut tournament = TournamentBuilder::new()
///     .seed(7)
///     .historian(Box::new(historian))
///     .build();
/// tournament.configure_tournament(4).unwrap();
/// tournament.simulate_round();
///
/// assert_eq!(log.borrow().len(), 6);
/// ```
#[derive(Default)]
pub struct RecordingHistorian {
    storage: MatchLog,
}

impl RecordingHistorian {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_storage(&self) -> MatchLog {
        self.storage.clone()
    }

    /// Every recorded match `team_id` took part in.
    pub fn matches_for(&self, team_id: TeamId) -> Vec<MatchResult> {
        self.storage
            .borrow()
            .iter()
            .filter(|result| result.involves(team_id))
            .copied()
            .collect()
    }
}

impl MatchHistorian for RecordingHistorian {
    fn record_match(&mut self, result: &MatchResult) -> Result<(), HistorianError> {
        self.storage
            .try_borrow_mut()
            .map_err(|_| HistorianError::StorageBorrowed)?
            .push(*result);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(home: TeamId, away: TeamId) -> MatchResult {
        MatchResult {
            home,
            away,
            home_goals: 1,
            away_goals: 1,
        }
    }

    #[test]
    fn test_records_in_order() {
        let mut historian = RecordingHistorian::new();
        let storage = historian.get_storage();

        historian.record_match(&result(1, 2)).unwrap();
        historian.record_match(&result(1, 3)).unwrap();
        historian.record_match(&result(2, 3)).unwrap();

        let log = storage.borrow();
        assert_eq!(log.len(), 3);
        assert_eq!((log[0].home, log[0].away), (1, 2));
        assert_eq!((log[2].home, log[2].away), (2, 3));
    }

    #[test]
    fn test_matches_for_team() {
        let mut historian = RecordingHistorian::new();
        historian.record_match(&result(1, 2)).unwrap();
        historian.record_match(&result(1, 3)).unwrap();
        historian.record_match(&result(2, 3)).unwrap();

        assert_eq!(historian.matches_for(3).len(), 2);
        assert_eq!(historian.matches_for(4).len(), 0);
    }

    #[test]
    fn test_borrowed_storage_is_an_error() {
        let mut historian = RecordingHistorian::new();
        let storage = historian.get_storage();
        let _guard = storage.borrow();

        assert_eq!(
            historian.record_match(&result(1, 2)),
            Err(HistorianError::StorageBorrowed)
        );
    }
}
