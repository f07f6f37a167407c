use rand::{Rng, SeedableRng, rngs::StdRng};

use super::config::{RecordMode, TournamentConfig};
use super::historian::MatchHistorian;
use super::tournament::Tournament;

/// # TournamentBuilder
///
/// Collects the optional settings of a [`Tournament`] and then generates its
/// player pool. Every field has a default, so `TournamentBuilder::new().build()`
/// is a valid tournament with an entropy seeded random source.
///
/// ## Examples
///
/// ```
/// use league_sim::league::{RecordMode, TournamentBuilder};
///
/// let mut tournament = TournamentBuilder::new()
///     .seed(42)
///     .record_mode(RecordMode::Tracked)
///     .build();
///
/// tournament.configure_tournament(4).unwrap();
/// tournament.simulate_round();
/// assert_eq!(tournament.get_standings().len(), 4);
/// ```
///
/// Any generator can drive the tournament when the seeded `StdRng` isn't
/// what you want:
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use league_sim::league::TournamentBuilder;
///
/// let rng = StdRng::seed_from_u64(7);
/// let tournament = TournamentBuilder::new().build_with_rng(rng);
/// assert_eq!(tournament.player_pool().len(), 100);
/// ```
#[derive(Default)]
pub struct TournamentBuilder {
    seed: Option<u64>,
    record_mode: Option<RecordMode>,
    historians: Vec<Box<dyn MatchHistorian>>,
    panic_on_historian_error: bool,
}

impl TournamentBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the random source for a reproducible run.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Choose how the standings derive win/draw/loss columns.
    pub fn record_mode(mut self, record_mode: RecordMode) -> Self {
        self.record_mode = Some(record_mode);
        self
    }

    /// Add a match historian.
    pub fn historian(mut self, historian: Box<dyn MatchHistorian>) -> Self {
        self.historians.push(historian);
        self
    }

    /// Set the match historians, replacing any added so far.
    pub fn historians(mut self, historians: Vec<Box<dyn MatchHistorian>>) -> Self {
        self.historians = historians;
        self
    }

    /// Should the tournament panic if a historian errors.
    /// Default is false: the failing historian is removed and the error is
    /// logged.
    pub fn panic_on_historian_error(mut self, panic_on_historian_error: bool) -> Self {
        self.panic_on_historian_error = panic_on_historian_error;
        self
    }

    /// Build with a `StdRng` seeded from the configured seed, or from OS
    /// entropy when none was set. The seed actually used is kept in the
    /// tournament's config.
    pub fn build(self) -> Tournament<StdRng> {
        let seed = self.seed.unwrap_or_else(rand::random);
        let rng = StdRng::seed_from_u64(seed);
        let mut config = self.config();
        config.seed = Some(seed);
        Tournament::from_parts(config, self.historians, rng)
    }

    /// Build using the provided random source. Any configured seed is
    /// ignored and the config's seed is `None`.
    pub fn build_with_rng<R: Rng>(self, rng: R) -> Tournament<R> {
        let mut config = self.config();
        config.seed = None;
        Tournament::from_parts(config, self.historians, rng)
    }

    fn config(&self) -> TournamentConfig {
        TournamentConfig {
            seed: self.seed,
            record_mode: self.record_mode.unwrap_or_default(),
            panic_on_historian_error: self.panic_on_historian_error,
        }
    }
}
