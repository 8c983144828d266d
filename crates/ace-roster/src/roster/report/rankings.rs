use super::super::domain::{Player, ValueBand};
use super::super::import::{normalize_team, OwnerDirectory};
use super::super::valuation::classify_value;
use serde::Serialize;
use std::collections::BTreeMap;

/// One row of the GM leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamRanking {
    pub team: String,
    pub owner: String,
    pub players: usize,
    pub mean_value_pct: f64,
}

impl TeamRanking {
    pub fn band(&self) -> ValueBand {
        classify_value(self.mean_value_pct)
    }
}

#[derive(Default)]
struct TeamTally {
    players: usize,
    total_value_pct: f64,
}

/// Groups players by cleaned team and orders teams best value first.
///
/// Means are compared after rounding to one decimal; ties go to the team with
/// more players, then to the team key. Teams whose key is empty after cleaning
/// are left out. Rank is the 1-based position in the returned vector.
pub fn rank_by_team<'a, I>(players: I, owners: &OwnerDirectory) -> Vec<TeamRanking>
where
    I: IntoIterator<Item = &'a Player>,
{
    let mut tallies: BTreeMap<String, TeamTally> = BTreeMap::new();
    for player in players {
        let team = normalize_team(player.team());
        if team.is_empty() {
            continue;
        }
        let tally = tallies.entry(team).or_default();
        tally.players += 1;
        tally.total_value_pct += player.value_pct();
    }

    let mut rankings: Vec<TeamRanking> = tallies
        .into_iter()
        .map(|(team, tally)| TeamRanking {
            owner: owners.owner_for(&team).to_string(),
            team,
            players: tally.players,
            mean_value_pct: tally.total_value_pct / tally.players as f64,
        })
        .collect();

    rankings.sort_by(|a, b| {
        rounded_tenths(a.mean_value_pct)
            .cmp(&rounded_tenths(b.mean_value_pct))
            .then_with(|| b.players.cmp(&a.players))
    });
    rankings
}

/// Tenths with halves rounded toward positive infinity.
fn rounded_tenths(value: f64) -> i64 {
    (value * 10.0 + 0.5).floor() as i64
}
