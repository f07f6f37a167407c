use std::hash::{Hash, Hasher};

use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::{MAX_SKILL, MIN_SKILL, PLAYER_POOL_SIZE, TeamId};

/// Stable identifier of a player within one tournament run.
pub type PlayerId = u32;

/// A single player.
///
/// Two players are the same player when their ids match. Skill and name are
/// fixed at creation; only the team back-reference changes, and only when
/// the player is drafted.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Player {
    id: PlayerId,
    name: String,
    skill: u8,
    team_id: Option<TeamId>,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, skill: u8) -> Self {
        Self {
            id,
            name: name.into(),
            skill,
            team_id: None,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn skill(&self) -> u8 {
        self.skill
    }

    /// The team this player was last drafted into, if any.
    pub fn team_id(&self) -> Option<TeamId> {
        self.team_id
    }

    pub(crate) fn set_team(&mut self, team_id: Option<TeamId>) {
        self.team_id = team_id;
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Player {}

impl Hash for Player {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// The fixed set of players every team is drafted from.
///
/// Generated once per tournament and never regenerated. Ids run `1..=100`
/// and are in order, so a player's index is `id - 1`.
#[derive(Debug, Clone)]
pub struct PlayerPool {
    players: Vec<Player>,
}

impl PlayerPool {
    /// Draw a fresh pool of [`PLAYER_POOL_SIZE`] players with skills uniform
    /// in `[MIN_SKILL, MAX_SKILL]`.
    #[instrument(level = "debug", skip(rng))]
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let players: Vec<Player> = (1..=PLAYER_POOL_SIZE as PlayerId)
            .map(|id| {
                let skill = rng.random_range(MIN_SKILL..=MAX_SKILL);
                Player::new(id, format!("Player {id}"), skill)
            })
            .collect();

        debug!(num_players = players.len(), "Generated player pool");

        Self { players }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        (id as usize)
            .checked_sub(1)
            .and_then(|idx| self.players.get(idx))
            .filter(|p| p.id == id)
    }

    /// Point every player's back-reference at the team given by
    /// `assignments`, clearing it for players not listed.
    pub(crate) fn apply_assignments(&mut self, assignments: &[(PlayerId, TeamId)]) {
        for player in self.players.iter_mut() {
            player.set_team(None);
        }
        for &(player_id, team_id) in assignments {
            if let Some(player) = self
                .players
                .get_mut((player_id as usize).wrapping_sub(1))
                .filter(|p| p.id == player_id)
            {
                player.set_team(Some(team_id));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_pool_has_sequential_ids() {
        let mut rng = StdRng::seed_from_u64(7);
        let pool = PlayerPool::generate(&mut rng);

        assert_eq!(pool.len(), PLAYER_POOL_SIZE);
        for (idx, player) in pool.iter().enumerate() {
            assert_eq!(player.id() as usize, idx + 1);
            assert_eq!(player.name(), format!("Player {}", idx + 1));
            assert!(player.team_id().is_none());
        }
    }

    #[test]
    fn test_pool_skills_in_range() {
        let mut rng = StdRng::seed_from_u64(1234);
        let pool = PlayerPool::generate(&mut rng);

        assert!(
            pool.iter()
                .all(|p| (MIN_SKILL..=MAX_SKILL).contains(&p.skill()))
        );
    }

    #[test]
    fn test_pool_skills_reach_both_bounds() {
        let mut rng = StdRng::seed_from_u64(4321);
        let skills: HashSet<u8> = (0..30)
            .flat_map(|_| {
                PlayerPool::generate(&mut rng)
                    .iter()
                    .map(Player::skill)
                    .collect::<Vec<_>>()
            })
            .collect();

        assert!(skills.contains(&MIN_SKILL));
        assert!(skills.contains(&MAX_SKILL));
        assert!(skills.iter().all(|s| (MIN_SKILL..=MAX_SKILL).contains(s)));
    }

    #[test]
    fn test_pool_same_seed_same_pool() {
        let pool_a = PlayerPool::generate(&mut StdRng::seed_from_u64(99));
        let pool_b = PlayerPool::generate(&mut StdRng::seed_from_u64(99));

        let skills_a: Vec<u8> = pool_a.iter().map(Player::skill).collect();
        let skills_b: Vec<u8> = pool_b.iter().map(Player::skill).collect();
        assert_eq!(skills_a, skills_b);
    }

    #[test]
    fn test_get_player() {
        let pool = PlayerPool::generate(&mut StdRng::seed_from_u64(3));

        assert_eq!(pool.get(1).map(Player::id), Some(1));
        assert_eq!(pool.get(100).map(Player::id), Some(100));
        assert!(pool.get(0).is_none());
        assert!(pool.get(101).is_none());
    }

    #[test]
    fn test_player_identity_is_id() {
        let a = Player::new(5, "Player 5", 60);
        let b = Player::new(5, "Someone else", 90);
        let c = Player::new(6, "Player 5", 60);

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<Player> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_apply_assignments_clears_previous() {
        let mut pool = PlayerPool::generate(&mut StdRng::seed_from_u64(3));

        pool.apply_assignments(&[(1, 1), (2, 2)]);
        assert_eq!(pool.get(1).and_then(Player::team_id), Some(1));
        assert_eq!(pool.get(2).and_then(Player::team_id), Some(2));

        pool.apply_assignments(&[(3, 1)]);
        assert!(pool.get(1).and_then(Player::team_id).is_none());
        assert!(pool.get(2).and_then(Player::team_id).is_none());
        assert_eq!(pool.get(3).and_then(Player::team_id), Some(1));
    }
}
