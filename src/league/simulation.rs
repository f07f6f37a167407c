//! Match simulation.
//!
//! A side's score is `floor(average skill / 33)` plus a uniform bonus in
//! `0..=2`. With skills in `[50, 100]` the base is 1 to 3 goals, so a match
//! ends somewhere between 1-1 and 5-5.
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{POINTS_FOR_DRAW, POINTS_FOR_WIN, Team, TeamId};

/// Average skill points per guaranteed goal.
pub const GOAL_SKILL_DIVISOR: f64 = 33.0;
/// Largest random bonus added to a side's base goals.
pub const MAX_BONUS_GOALS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MatchOutcome {
    HomeWin,
    AwayWin,
    Draw,
}

/// The scoreline of one simulated match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatchResult {
    pub home: TeamId,
    pub away: TeamId,
    pub home_goals: u32,
    pub away_goals: u32,
}

impl MatchResult {
    pub fn outcome(&self) -> MatchOutcome {
        match self.home_goals.cmp(&self.away_goals) {
            std::cmp::Ordering::Greater => MatchOutcome::HomeWin,
            std::cmp::Ordering::Less => MatchOutcome::AwayWin,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
        }
    }

    /// Points awarded as `(home, away)`.
    pub fn points(&self) -> (u32, u32) {
        match self.outcome() {
            MatchOutcome::HomeWin => (POINTS_FOR_WIN, 0),
            MatchOutcome::AwayWin => (0, POINTS_FOR_WIN),
            MatchOutcome::Draw => (POINTS_FOR_DRAW, POINTS_FOR_DRAW),
        }
    }

    pub fn involves(&self, team_id: TeamId) -> bool {
        self.home == team_id || self.away == team_id
    }

    /// Goal difference from `team_id`'s point of view, `None` if the team
    /// didn't play in this match.
    pub fn goal_difference_for(&self, team_id: TeamId) -> Option<i64> {
        let diff = self.home_goals as i64 - self.away_goals as i64;
        if team_id == self.home {
            Some(diff)
        } else if team_id == self.away {
            Some(-diff)
        } else {
            None
        }
    }
}

/// Goals a team is guaranteed from its average skill alone.
pub fn base_goals(team: &Team) -> u32 {
    let average = team.average_skill().unwrap_or_default();
    (average / GOAL_SKILL_DIVISOR).floor() as u32
}

/// Play `home` against `away` and fold the result into both teams.
///
/// Draws exactly two values from `rng`: the home bonus, then the away bonus.
pub fn simulate_match<R: Rng>(home: &mut Team, away: &mut Team, rng: &mut R) -> MatchResult {
    let home_goals = base_goals(home) + rng.random_range(0..=MAX_BONUS_GOALS);
    let away_goals = base_goals(away) + rng.random_range(0..=MAX_BONUS_GOALS);

    apply_result(home, away, home_goals, away_goals)
}

/// Record a known scoreline on both teams.
pub fn apply_result(
    home: &mut Team,
    away: &mut Team,
    home_goals: u32,
    away_goals: u32,
) -> MatchResult {
    home.record_match(home_goals, away_goals);
    away.record_match(away_goals, home_goals);

    let result = MatchResult {
        home: home.id(),
        away: away.id(),
        home_goals,
        away_goals,
    };

    debug!(
        home = result.home,
        away = result.away,
        home_goals,
        away_goals,
        outcome = ?result.outcome(),
        "Simulated match"
    );

    result
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{SeedableRng, rngs::StdRng};

    use crate::core::{Player, ROSTER_SIZE};

    use super::*;

    fn team_with_skill(id: TeamId, skill: u8) -> Team {
        let mut team = Team::with_default_name(id);
        for n in 0..ROSTER_SIZE as u32 {
            let pid = id * 100 + n;
            team.add_player(Player::new(pid, format!("Player {pid}"), skill))
                .unwrap();
        }
        team
    }

    #[test]
    fn test_base_goals_from_skill() {
        assert_eq!(base_goals(&team_with_skill(1, 50)), 1);
        assert_eq!(base_goals(&team_with_skill(1, 65)), 1);
        assert_eq!(base_goals(&team_with_skill(1, 66)), 2);
        assert_eq!(base_goals(&team_with_skill(1, 98)), 2);
        assert_eq!(base_goals(&team_with_skill(1, 99)), 3);
        assert_eq!(base_goals(&team_with_skill(1, 100)), 3);
    }

    #[test]
    fn test_base_goals_empty_team() {
        assert_eq!(base_goals(&Team::with_default_name(1)), 0);
    }

    #[test]
    fn test_apply_result_home_win() {
        let mut home = team_with_skill(1, 70);
        let mut away = team_with_skill(2, 70);

        let result = apply_result(&mut home, &mut away, 3, 1);

        assert_eq!(result.outcome(), MatchOutcome::HomeWin);
        assert_eq!(result.points(), (3, 0));
        assert_eq!((home.points, away.points), (3, 0));
        assert_eq!((home.goals_for, home.goals_against), (3, 1));
        assert_eq!((away.goals_for, away.goals_against), (1, 3));
        assert_eq!((home.won, away.lost), (1, 1));
    }

    #[test]
    fn test_apply_result_draw() {
        let mut home = team_with_skill(1, 70);
        let mut away = team_with_skill(2, 90);

        let result = apply_result(&mut home, &mut away, 2, 2);

        assert_eq!(result.outcome(), MatchOutcome::Draw);
        assert_eq!((home.points, away.points), (1, 1));
        assert_eq!((home.drawn, away.drawn), (1, 1));
    }

    #[test]
    fn test_goal_difference_for() {
        let result = MatchResult {
            home: 1,
            away: 2,
            home_goals: 4,
            away_goals: 1,
        };
        assert_eq!(result.goal_difference_for(1), Some(3));
        assert_eq!(result.goal_difference_for(2), Some(-3));
        assert_eq!(result.goal_difference_for(3), None);
        assert!(result.involves(2));
        assert!(!result.involves(3));
    }

    #[test]
    fn test_simulated_goals_within_bounds() {
        let mut rng = StdRng::seed_from_u64(31337);

        for _ in 0..200 {
            let mut home = team_with_skill(1, 50);
            let mut away = team_with_skill(2, 100);
            let result = simulate_match(&mut home, &mut away, &mut rng);

            assert!((1..=1 + MAX_BONUS_GOALS).contains(&result.home_goals));
            assert!((3..=3 + MAX_BONUS_GOALS).contains(&result.away_goals));
        }
    }

    #[test]
    fn test_bonus_covers_every_value() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut home_bonuses = HashSet::new();
        let mut away_bonuses = HashSet::new();

        for _ in 0..1_000 {
            let mut home = team_with_skill(1, 70);
            let mut away = team_with_skill(2, 70);
            let result = simulate_match(&mut home, &mut away, &mut rng);

            home_bonuses.insert(result.home_goals - base_goals(&home));
            away_bonuses.insert(result.away_goals - base_goals(&away));
        }

        let expected: HashSet<u32> = (0..=MAX_BONUS_GOALS).collect();
        assert_eq!(home_bonuses, expected);
        assert_eq!(away_bonuses, expected);
    }

    #[test]
    fn test_same_seed_same_scorelines() {
        let play = |seed: u64| -> Vec<(u32, u32)> {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..20)
                .map(|_| {
                    let mut home = team_with_skill(1, 60);
                    let mut away = team_with_skill(2, 80);
                    let result = simulate_match(&mut home, &mut away, &mut rng);
                    (result.home_goals, result.away_goals)
                })
                .collect()
        };

        assert_eq!(play(5), play(5));
    }

    #[test]
    fn test_points_total_is_two_or_three() {
        let mut rng = StdRng::seed_from_u64(8);

        for _ in 0..100 {
            let mut home = team_with_skill(1, 75);
            let mut away = team_with_skill(2, 75);
            let result = simulate_match(&mut home, &mut away, &mut rng);

            let total = home.points + away.points;
            match result.outcome() {
                MatchOutcome::Draw => assert_eq!(total, 2),
                _ => assert_eq!(total, 3),
            }
        }
    }
}
