//! League table and team detail views.
//!
//! Both are snapshots derived from team state; nothing here mutates a team.
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, POINTS_FOR_WIN, Team, TeamId};

use super::config::RecordMode;

/// One line of the league table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StandingsRow {
    pub team_id: TeamId,
    pub name: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
}

impl StandingsRow {
    /// Build a row for `team` in a league of `num_teams` teams.
    pub fn from_team(team: &Team, num_teams: usize, mode: RecordMode) -> Self {
        let (played, won, drawn, lost) = match mode {
            RecordMode::DerivedFromPoints => {
                let played = num_teams.saturating_sub(1) as u32;
                let won = team.points / POINTS_FOR_WIN;
                let drawn = team.points % POINTS_FOR_WIN;
                // Replayed rounds can push won + drawn past played.
                let lost = played.saturating_sub(won + drawn);
                (played, won, drawn, lost)
            }
            RecordMode::Tracked => (team.played, team.won, team.drawn, team.lost),
        };

        Self {
            team_id: team.id(),
            name: team.name().to_string(),
            played,
            won,
            drawn,
            lost,
            goals_for: team.goals_for,
            goals_against: team.goals_against,
            goal_difference: team.goal_difference(),
            points: team.points,
        }
    }
}

/// Table order: points, then goal difference, then goals scored, all
/// descending. Anything still tied keeps its input order.
pub fn compare_rows(a: &StandingsRow, b: &StandingsRow) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference.cmp(&a.goal_difference))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
}

/// The ordered league table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Standings {
    rows: Vec<StandingsRow>,
}

impl Standings {
    /// Rank `teams`. The sort is stable, so teams level on every tie-breaker
    /// stay in the order given.
    pub fn from_teams(teams: &[Team], mode: RecordMode) -> Self {
        let rows = teams
            .iter()
            .map(|team| StandingsRow::from_team(team, teams.len(), mode))
            .collect();
        Self::from_rows(rows)
    }

    /// Rank already built rows.
    pub fn from_rows(mut rows: Vec<StandingsRow>) -> Self {
        rows.sort_by(compare_rows);
        Self { rows }
    }

    pub fn rows(&self) -> &[StandingsRow] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &StandingsRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The current leader, if any team exists.
    pub fn leader(&self) -> Option<&StandingsRow> {
        self.rows.first()
    }

    /// 1-based table position of a team.
    pub fn position_of(&self, team_id: TeamId) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| row.team_id == team_id)
            .map(|idx| idx + 1)
    }

    /// Fixed width plain text table.
    pub fn to_table(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{:<4}{:<12}{:>4}{:>4}{:>4}{:>4}{:>5}{:>5}{:>5}{:>5}\n",
            "#", "Team", "P", "W", "D", "L", "GF", "GA", "GD", "Pts"
        ));
        output.push_str(&"-".repeat(52));
        output.push('\n');

        for (rank, row) in self.rows.iter().enumerate() {
            output.push_str(&format!(
                "{:<4}{:<12}{:>4}{:>4}{:>4}{:>4}{:>5}{:>5}{:>+5}{:>5}\n",
                rank + 1,
                row.name,
                row.played,
                row.won,
                row.drawn,
                row.lost,
                row.goals_for,
                row.goals_against,
                row.goal_difference,
                row.points
            ));
        }

        output
    }

    /// Format the table as Markdown
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();
        output.push_str("| # | Team | P | W | D | L | GF | GA | GD | Pts |\n");
        output.push_str("|---|------|---|---|---|---|----|----|----|-----|\n");
        for (rank, row) in self.rows.iter().enumerate() {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} | {} | {:+} | {} |\n",
                rank + 1,
                row.name,
                row.played,
                row.won,
                row.drawn,
                row.lost,
                row.goals_for,
                row.goals_against,
                row.goal_difference,
                row.points
            ));
        }
        output
    }

    /// Serialize the table to pretty printed JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.rows)
    }
}

/// A player as shown in a team listing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlayerSummary {
    pub id: PlayerId,
    pub name: String,
    pub skill: u8,
}

/// A team's roster, strongest first, and its average skill.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TeamDetail {
    pub team_id: TeamId,
    pub name: String,
    pub players: Vec<PlayerSummary>,
    /// Mean roster skill rounded to one decimal place
    pub average_skill: f64,
}

impl TeamDetail {
    /// Players are ordered by skill descending; equal skills fall back to
    /// id so the listing is the same on every call.
    pub fn from_team(team: &Team) -> Self {
        let mut players: Vec<PlayerSummary> = team
            .players()
            .map(|p| PlayerSummary {
                id: p.id(),
                name: p.name().to_string(),
                skill: p.skill(),
            })
            .collect();
        players.sort_by(|a, b| b.skill.cmp(&a.skill).then_with(|| a.id.cmp(&b.id)));

        let average_skill = team
            .average_skill()
            .map(|avg| (avg * 10.0).round() / 10.0)
            .unwrap_or_default();

        Self {
            team_id: team.id(),
            name: team.name().to_string(),
            players,
            average_skill,
        }
    }

    pub fn to_text(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("=== {} ===\n", self.name));
        output.push_str("Players (skill):\n");
        for player in &self.players {
            output.push_str(&format!("{}: {}\n", player.name, player.skill));
        }
        output.push_str(&format!("Average skill: {:.1}\n", self.average_skill));
        output
    }
}
