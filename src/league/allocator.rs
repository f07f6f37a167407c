use rand::{Rng, seq::SliceRandom};
use tracing::{debug, trace};

use crate::core::{Player, PlayerId, PlayerPool, ROSTER_SIZE, Result, Team, TeamId};

use super::config::TournamentConfig;

/// Freshly drafted teams plus the player -> team mapping that produced them.
///
/// Nothing in the pool is touched until the caller applies the allocation,
/// so a failed draft leaves the previous state intact.
#[derive(Debug, Clone)]
pub struct Allocation {
    pub teams: Vec<Team>,
    pub assignments: Vec<(PlayerId, TeamId)>,
}

/// Draft `num_teams` teams of [`ROSTER_SIZE`] players from the pool.
///
/// The whole pool is shuffled, then the first `num_teams * ROSTER_SIZE`
/// players are dealt out like cards: shuffled player `i` joins team
/// `i % num_teams`. Teams get ids `1..=num_teams` and default names.
///
/// The team count is validated before the random source is touched.
pub fn allocate_teams<R: Rng>(
    pool: &PlayerPool,
    num_teams: usize,
    rng: &mut R,
) -> Result<Allocation> {
    TournamentConfig::validate_team_count(num_teams)?;

    let mut teams: Vec<Team> = (1..=num_teams as TeamId)
        .map(Team::with_default_name)
        .collect();

    let mut shuffled: Vec<&Player> = pool.iter().collect();
    shuffled.shuffle(rng);

    let num_drafted = num_teams * ROSTER_SIZE;
    let mut assignments = Vec::with_capacity(num_drafted);

    for (idx, player) in shuffled.into_iter().take(num_drafted).enumerate() {
        let team = &mut teams[idx % num_teams];
        team.add_player(player.clone())?;
        trace!(player_id = player.id(), team_id = team.id(), "Drafted player");
        assignments.push((player.id(), team.id()));
    }

    debug!(num_teams, num_drafted, "Allocated teams");

    Ok(Allocation { teams, assignments })
}
