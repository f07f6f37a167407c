use std::collections::{HashMap, HashSet};

use approx::assert_relative_eq;
use rand::Rng;

use crate::core::{PLAYER_POOL_SIZE, ROSTER_SIZE, TeamId};

use super::Tournament;
use super::simulation::MatchOutcome;

/// Check every structural invariant of a tournament.
///
/// - The pool still holds all players with sequential ids.
/// - Every team is full and no player is on two teams.
/// - Pool back-references match the rosters exactly.
/// - Team totals equal the sums over the fixture log.
pub fn assert_valid_tournament<R: Rng>(tournament: &Tournament<R>) {
    validate_pool(tournament);
    validate_rosters(tournament);
    validate_totals(tournament);
}

fn validate_pool<R: Rng>(tournament: &Tournament<R>) {
    let pool = tournament.player_pool();
    assert_eq!(pool.len(), PLAYER_POOL_SIZE);
    for (idx, player) in pool.iter().enumerate() {
        assert_eq!(player.id() as usize, idx + 1);
    }
}

fn validate_rosters<R: Rng>(tournament: &Tournament<R>) {
    let mut drafted: HashMap<u32, TeamId> = HashMap::new();

    for (idx, team) in tournament.teams().iter().enumerate() {
        assert_eq!(team.id() as usize, idx + 1, "team ids must be sequential");
        assert_eq!(
            team.num_players(),
            ROSTER_SIZE,
            "team {} should be full",
            team.id()
        );

        for player in team.players() {
            assert_eq!(player.team_id(), Some(team.id()));
            let previous = drafted.insert(player.id(), team.id());
            assert!(
                previous.is_none(),
                "player {} is on teams {:?} and {}",
                player.id(),
                previous,
                team.id()
            );
        }
    }

    for player in tournament.player_pool().iter() {
        assert_eq!(
            player.team_id(),
            drafted.get(&player.id()).copied(),
            "pool back-reference for player {} is stale",
            player.id()
        );
    }

    if let Some(team) = tournament.teams().first() {
        let ids: HashSet<u32> = team.players().map(|p| p.id()).collect();
        assert_eq!(ids.len(), ROSTER_SIZE);
        let average = team.average_skill().unwrap_or_default();
        let manual: f64 = team.players().map(|p| p.skill() as f64).sum::<f64>()
            / team.num_players() as f64;
        assert_relative_eq!(average, manual);
    }
}

fn validate_totals<R: Rng>(tournament: &Tournament<R>) {
    let fixtures = tournament.fixtures();

    for team in tournament.teams() {
        let id = team.id();
        let mut goals_for = 0;
        let mut goals_against = 0;
        let mut goal_difference = 0;
        let mut points = 0;
        let mut played = 0;

        for fixture in fixtures.iter().filter(|f| f.involves(id)) {
            let (home_points, away_points) = fixture.points();
            if fixture.home == id {
                goals_for += fixture.home_goals;
                goals_against += fixture.away_goals;
                points += home_points;
            } else {
                goals_for += fixture.away_goals;
                goals_against += fixture.home_goals;
                points += away_points;
            }
            goal_difference += fixture.goal_difference_for(id).unwrap_or_default();
            played += 1;
        }

        assert_eq!(team.goals_for, goals_for);
        assert_eq!(team.goals_against, goals_against);
        assert_eq!(team.goal_difference(), goal_difference);
        assert_eq!(team.points, points);
        assert_eq!(team.played, played);
        assert_eq!(team.won + team.drawn + team.lost, team.played);
    }

    let total_points: u32 = tournament.teams().iter().map(|t| t.points).sum();
    let expected_points: u32 = fixtures
        .iter()
        .map(|f| match f.outcome() {
            MatchOutcome::Draw => 2,
            _ => 3,
        })
        .sum();
    assert_eq!(total_points, expected_points);

    let scored: u32 = tournament.teams().iter().map(|t| t.goals_for).sum();
    let conceded: u32 = tournament.teams().iter().map(|t| t.goals_against).sum();
    assert_eq!(scored, conceded);
}
