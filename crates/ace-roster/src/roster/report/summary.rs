use super::super::domain::{Player, Position, ValueBand};
use super::super::valuation::classify_value;
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregate view of a roster. Every recognized position has an entry, even at zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterSummary {
    pub total_players: usize,
    pub position_counts: BTreeMap<Position, usize>,
    pub mean_value_pct: f64,
    pub cap_used: f64,
}

impl RosterSummary {
    /// Band of the mean, or `None` when the roster is empty.
    pub fn mean_value_band(&self) -> Option<ValueBand> {
        (self.total_players > 0).then(|| classify_value(self.mean_value_pct))
    }

    pub fn count_for(&self, position: Position) -> usize {
        self.position_counts.get(&position).copied().unwrap_or(0)
    }
}

pub fn summarize(roster: &[Player]) -> RosterSummary {
    let mut position_counts: BTreeMap<Position, usize> =
        Position::ordered().into_iter().map(|position| (position, 0)).collect();

    for position in roster.iter().filter_map(Player::position_kind) {
        *position_counts.entry(position).or_default() += 1;
    }

    let mean_value_pct = if roster.is_empty() {
        0.0
    } else {
        roster.iter().map(Player::value_pct).sum::<f64>() / roster.len() as f64
    };

    RosterSummary {
        total_players: roster.len(),
        position_counts,
        mean_value_pct,
        cap_used: roster.iter().map(Player::cap_hit).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_roster_has_zero_mean_and_counts() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_players, 0);
        assert_eq!(summary.mean_value_pct, 0.0);
        assert_eq!(summary.mean_value_band(), None);
        assert_eq!(summary.position_counts.len(), 5);
        assert!(summary.position_counts.values().all(|count| *count == 0));
    }

    #[test]
    fn counts_positions_and_averages_value() {
        let roster = vec![
            Player::new("A", "BOS", "PG", 5.0, 10.0),
            Player::new("B", "BOS", "PG", 15.0, 10.0),
            Player::new("C", "NYK", "C", 6.0, 10.0),
            Player::new("D", "NYK", "G-F", 10.0, 10.0),
        ];
        let summary = summarize(&roster);
        assert_eq!(summary.total_players, 4);
        assert_eq!(summary.count_for(Position::PointGuard), 2);
        assert_eq!(summary.count_for(Position::Center), 1);
        assert_eq!(summary.count_for(Position::SmallForward), 0);
        // (-50 + 50 - 40 + 0) / 4
        assert_eq!(summary.mean_value_pct, -10.0);
        assert_eq!(summary.mean_value_band(), Some(ValueBand::Fair));
        assert_eq!(summary.cap_used, 40.0);
    }

    #[test]
    fn summary_serializes_position_codes_as_keys() {
        let summary = summarize(&[Player::new("A", "BOS", "SF", 8.0, 10.0)]);
        let value = serde_json::to_value(&summary).expect("serializes");
        assert_eq!(value["total_players"], 1);
        assert_eq!(value["position_counts"]["SF"], 1);
        assert_eq!(value["position_counts"]["C"], 0);
        assert_eq!(value["cap_used"], 10.0);
    }
}
