use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::errors::{Result, TournamentError};
use super::player::Player;
use super::{POINTS_FOR_DRAW, POINTS_FOR_WIN, ROSTER_SIZE};

/// Identifier of a team. Sequential from 1 within a configuration.
pub type TeamId = u32;

/// A team and its accumulated results for the current configuration.
///
/// The roster is a set keyed by player id, so the same player can't be
/// added twice and ordering carries no meaning.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Team {
    id: TeamId,
    name: String,
    roster: HashSet<Player>,
    pub(crate) points: u32,
    pub(crate) goals_for: u32,
    pub(crate) goals_against: u32,
    pub(crate) played: u32,
    pub(crate) won: u32,
    pub(crate) drawn: u32,
    pub(crate) lost: u32,
}

impl Team {
    pub fn new(id: TeamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            roster: HashSet::with_capacity(ROSTER_SIZE),
            points: 0,
            goals_for: 0,
            goals_against: 0,
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
        }
    }

    /// A team with the default name `Team {id}`.
    pub fn with_default_name(id: TeamId) -> Self {
        Self::new(id, format!("Team {id}"))
    }

    pub fn id(&self) -> TeamId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a player to the roster, pointing their back-reference at this
    /// team.
    ///
    /// Fails with [`TournamentError::RosterFull`] once the team holds
    /// [`ROSTER_SIZE`] players. Re-adding a player already on the roster is a
    /// no-op.
    pub fn add_player(&mut self, mut player: Player) -> Result<()> {
        if self.roster.len() >= ROSTER_SIZE {
            return Err(TournamentError::RosterFull {
                team_id: self.id,
                capacity: ROSTER_SIZE,
            });
        }
        player.set_team(Some(self.id));
        self.roster.insert(player);
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.roster.len() >= ROSTER_SIZE
    }

    pub fn num_players(&self) -> usize {
        self.roster.len()
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.roster.iter()
    }

    pub fn contains(&self, player: &Player) -> bool {
        self.roster.contains(player)
    }

    /// Mean skill of the roster, `None` for an empty team.
    pub fn average_skill(&self) -> Option<f64> {
        if self.roster.is_empty() {
            return None;
        }
        let total: u32 = self.roster.iter().map(|p| p.skill() as u32).sum();
        Some(total as f64 / self.roster.len() as f64)
    }

    /// Accumulated league points
    pub fn points(&self) -> u32 {
        self.points
    }

    /// Goals scored across every simulated match
    pub fn goals_for(&self) -> u32 {
        self.goals_for
    }

    /// Goals conceded across every simulated match
    pub fn goals_against(&self) -> u32 {
        self.goals_against
    }

    /// Matches actually simulated, counting replayed rounds
    pub fn played(&self) -> u32 {
        self.played
    }

    pub fn won(&self) -> u32 {
        self.won
    }

    pub fn drawn(&self) -> u32 {
        self.drawn
    }

    pub fn lost(&self) -> u32 {
        self.lost
    }

    pub fn goal_difference(&self) -> i64 {
        self.goals_for as i64 - self.goals_against as i64
    }

    /// Fold one match result into the running totals.
    pub(crate) fn record_match(&mut self, scored: u32, conceded: u32) {
        self.goals_for += scored;
        self.goals_against += conceded;
        self.played += 1;

        match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => {
                self.won += 1;
                self.points += POINTS_FOR_WIN;
            }
            std::cmp::Ordering::Equal => {
                self.drawn += 1;
                self.points += POINTS_FOR_DRAW;
            }
            std::cmp::Ordering::Less => {
                self.lost += 1;
            }
        }
    }
}
