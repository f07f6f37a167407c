use tracing::warn;

use super::{HistorianError, MatchHistorian};
use crate::league::MatchResult;

/// A historian that refuses every match.
///
/// Used to exercise the tournament's historian error handling.
pub struct FailingHistorian;

impl MatchHistorian for FailingHistorian {
    fn record_match(&mut self, _result: &MatchResult) -> Result<(), HistorianError> {
        warn!("FailingHistorian intentionally returning error");
        Err(HistorianError::UnableToRecordMatch)
    }
}

#[cfg(test)]
mod tests {
    use crate::league::TournamentBuilder;

    use super::*;

    #[test]
    #[should_panic]
    fn test_panic_fail_historian() {
        let mut tournament = TournamentBuilder::new()
            .seed(3)
            .historian(Box::new(FailingHistorian))
            .panic_on_historian_error(true)
            .build();

        tournament.configure_tournament(2).unwrap();
        // The only match is refused and the flag turns that into a panic.
        tournament.simulate_round();
    }

    #[test_log::test]
    fn test_failing_historian_is_dropped() {
        let mut tournament = TournamentBuilder::new()
            .seed(3)
            .historian(Box::new(FailingHistorian))
            .build();

        tournament.configure_tournament(3).unwrap();
        tournament.simulate_round();

        assert_eq!(tournament.num_historians(), 0);
        // The round itself still completes.
        assert_eq!(tournament.fixtures().len(), 3);
    }
}
