use rand::{Rng, rngs::StdRng};
use tracing::{event, instrument, warn};

use crate::core::{PlayerPool, Result, Team, TeamId, TournamentError};

use super::allocator::allocate_teams;
use super::builder::TournamentBuilder;
use super::config::TournamentConfig;
use super::historian::MatchHistorian;
use super::scheduler::{num_matches, pair_mut, round_robin_pairs};
use super::simulation::{MatchResult, simulate_match};
use super::standings::{Standings, TeamDetail};

/// # Tournament
///
/// Owns the player pool, the current teams and the random source that
/// drives everything.
///
/// The pool is generated once, when the tournament is built. Teams only
/// exist after [`Tournament::configure_tournament`], and every
/// configuration replaces the previous teams, their stats and the fixture
/// log wholesale.
///
/// All randomness comes from the owned generator in a fixed order: pool
/// generation, then one shuffle per configuration, then two draws per
/// simulated match. A seeded tournament driven through the same calls
/// always produces the same league.
///
/// ```
/// use league_sim::league::Tournament;
///
/// let mut tournament = Tournament::new();
/// tournament.configure_tournament(2).unwrap();
/// tournament.simulate_round();
///
/// let standings = tournament.get_standings();
/// assert_eq!(standings.len(), 2);
/// assert!(tournament.get_team_detail(3).is_err());
/// ```
pub struct Tournament<R: Rng = StdRng> {
    config: TournamentConfig,
    pool: PlayerPool,
    teams: Vec<Team>,
    fixtures: Vec<MatchResult>,
    historians: Vec<Box<dyn MatchHistorian>>,
    rng: R,
}

impl Tournament<StdRng> {
    /// A tournament with default settings and an entropy seeded random
    /// source.
    pub fn new() -> Self {
        TournamentBuilder::new().build()
    }
}

impl Default for Tournament<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Tournament<R> {
    pub(crate) fn from_parts(
        config: TournamentConfig,
        historians: Vec<Box<dyn MatchHistorian>>,
        mut rng: R,
    ) -> Self {
        let pool = PlayerPool::generate(&mut rng);
        Self {
            config,
            pool,
            teams: Vec::new(),
            fixtures: Vec::new(),
            historians,
            rng,
        }
    }

    /// Draft `num_teams` fresh teams from the full player pool.
    ///
    /// Any previous teams, standings and fixtures are discarded. On error
    /// nothing changes: the previous teams stay in place and the random
    /// source hasn't advanced.
    #[instrument(level = "debug", skip(self))]
    pub fn configure_tournament(&mut self, num_teams: usize) -> Result<()> {
        let allocation = allocate_teams(&self.pool, num_teams, &mut self.rng)?;

        self.pool.apply_assignments(&allocation.assignments);
        self.teams = allocation.teams;
        self.fixtures.clear();

        event!(
            tracing::Level::INFO,
            num_teams,
            num_matches = num_matches(num_teams),
            "Configured tournament"
        );
        Ok(())
    }

    /// Play every pairing of the current teams once, in team order.
    ///
    /// Results accumulate: calling this twice without reconfiguring plays a
    /// second round on top of the first. Does nothing before the tournament
    /// has been configured.
    #[instrument(level = "debug", skip(self), fields(num_teams = self.teams.len()))]
    pub fn simulate_round(&mut self) {
        for (i, j) in round_robin_pairs(self.teams.len()) {
            let (home, away) = pair_mut(&mut self.teams, i, j);
            let result = simulate_match(home, away, &mut self.rng);
            self.fixtures.push(result);
            self.notify_historians(&result);
        }

        event!(
            tracing::Level::INFO,
            num_fixtures = self.fixtures.len(),
            "Simulated round"
        );
    }

    /// The current league table.
    pub fn get_standings(&self) -> Standings {
        Standings::from_teams(&self.teams, self.config.record_mode)
    }

    /// Roster and average skill of a team.
    pub fn get_team_detail(&self, team_id: TeamId) -> Result<TeamDetail> {
        self.team(team_id)
            .map(TeamDetail::from_team)
            .ok_or(TournamentError::TeamNotFound(team_id))
    }

    pub fn team(&self, team_id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|team| team.id() == team_id)
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn num_teams(&self) -> usize {
        self.teams.len()
    }

    pub fn is_configured(&self) -> bool {
        !self.teams.is_empty()
    }

    pub fn player_pool(&self) -> &PlayerPool {
        &self.pool
    }

    /// Every match played since the last configuration, in play order.
    pub fn fixtures(&self) -> &[MatchResult] {
        &self.fixtures
    }

    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    pub fn num_historians(&self) -> usize {
        self.historians.len()
    }

    fn notify_historians(&mut self, result: &MatchResult) {
        let panic_on_error = self.config.panic_on_historian_error;
        self.historians
            .retain_mut(|historian| match historian.record_match(result) {
                Ok(()) => true,
                Err(error) => {
                    if panic_on_error {
                        panic!("Historian failed to record match: {error}");
                    }
                    warn!(?error, "Historian failed to record match, removing it");
                    false
                }
            });
    }
}
