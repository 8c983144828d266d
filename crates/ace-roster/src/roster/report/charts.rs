use super::super::domain::Player;
use super::super::import::{normalize_team, UNKNOWN_OWNER};
use serde::Serialize;
use std::collections::HashMap;

/// Axis headroom above the largest plotted value.
const AXIS_HEADROOM: f64 = 1.1;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub label: String,
    pub salary: f64,
    pub ace: f64,
}

/// Salary (x) against ACE estimate (y). Points above the diagonal are underpaid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryScatter {
    pub points: Vec<ScatterPoint>,
    pub salary_axis_max: f64,
    pub ace_axis_max: f64,
}

pub fn salary_scatter(pool: &[Player]) -> SalaryScatter {
    let points: Vec<ScatterPoint> = pool
        .iter()
        .map(|player| ScatterPoint {
            label: player.name().to_string(),
            salary: player.salary(),
            ace: player.ace(),
        })
        .collect();

    let max_salary = points.iter().map(|point| point.salary).fold(0.0, f64::max);
    let max_ace = points.iter().map(|point| point.ace).fold(0.0, f64::max);

    SalaryScatter {
        points,
        salary_axis_max: max_salary * AXIS_HEADROOM,
        ace_axis_max: max_ace * AXIS_HEADROOM,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositionSlice {
    pub player: String,
    pub salary_share_pct: f64,
    pub ace_share_pct: f64,
}

/// How a team's payroll splits across its players, actual against estimated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamComposition {
    pub team: String,
    pub slices: Vec<CompositionSlice>,
}

/// Teams appear in first-seen order, players in input order.
pub fn team_compositions<'a, I>(players: I) -> Vec<TeamComposition>
where
    I: IntoIterator<Item = &'a Player>,
{
    let mut order: Vec<(String, Vec<&Player>)> = Vec::new();
    let mut index_by_team: HashMap<String, usize> = HashMap::new();

    for player in players {
        let team = normalize_team(player.team());
        if team.is_empty() || team == UNKNOWN_OWNER {
            continue;
        }
        let index = *index_by_team.entry(team.clone()).or_insert_with(|| {
            order.push((team, Vec::new()));
            order.len() - 1
        });
        order[index].1.push(player);
    }

    order
        .into_iter()
        .map(|(team, members)| {
            let total_salary: f64 = members.iter().map(|player| player.salary()).sum();
            let total_ace: f64 = members.iter().map(|player| player.ace()).sum();
            let slices = members
                .iter()
                .map(|player| CompositionSlice {
                    player: player.name().to_string(),
                    salary_share_pct: share_pct(player.salary(), total_salary),
                    ace_share_pct: share_pct(player.ace(), total_ace),
                })
                .collect();
            TeamComposition { team, slices }
        })
        .collect()
}

fn share_pct(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        part / total * 100.0
    }
}
