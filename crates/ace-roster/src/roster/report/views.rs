use super::super::domain::{Player, Position, ValueBand};
use super::super::valuation::{format_money, format_value_pct};
use super::rankings::TeamRanking;
use super::summary::RosterSummary;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub name: String,
    pub team: String,
    pub position: String,
    pub salary: f64,
    pub salary_label: String,
    pub ace: f64,
    pub ace_label: String,
    pub value_pct: f64,
    pub value_label: String,
    pub band: ValueBand,
}

impl PlayerView {
    pub fn from_player(player: &Player) -> Self {
        Self {
            name: player.name().to_string(),
            team: player.team().to_string(),
            position: player.position().to_string(),
            salary: player.salary(),
            salary_label: format_money(player.salary()),
            ace: player.ace(),
            ace_label: format_money(player.ace()),
            value_pct: player.value_pct(),
            value_label: format_value_pct(player.value_pct()),
            band: player.value_band(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PositionCountEntry {
    pub position: Position,
    pub position_label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CapStatus {
    pub salary_cap: f64,
    pub used: f64,
    pub remaining: f64,
}

impl CapStatus {
    pub fn new(salary_cap: f64, used: f64) -> Self {
        Self {
            salary_cap,
            used,
            remaining: salary_cap - used,
        }
    }

    pub fn remaining_label(&self) -> String {
        format_money(self.remaining)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RosterSummaryView {
    pub total_players: usize,
    pub positions: Vec<PositionCountEntry>,
    pub mean_value_pct: f64,
    pub mean_value_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_value_band: Option<ValueBand>,
    pub cap: CapStatus,
}

impl RosterSummary {
    pub fn to_view(&self, salary_cap: f64) -> RosterSummaryView {
        let positions = Position::ordered()
            .into_iter()
            .map(|position| PositionCountEntry {
                position,
                position_label: position.label(),
                count: self.count_for(position),
            })
            .collect();

        RosterSummaryView {
            total_players: self.total_players,
            positions,
            mean_value_pct: self.mean_value_pct,
            mean_value_label: format_value_pct(self.mean_value_pct),
            mean_value_band: self.mean_value_band(),
            cap: CapStatus::new(salary_cap, self.cap_used),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamRankingEntry {
    pub rank: usize,
    pub team: String,
    pub owner: String,
    pub players: usize,
    pub mean_value_pct: f64,
    pub mean_value_label: String,
    pub band: ValueBand,
}

pub fn ranking_entries(rankings: &[TeamRanking]) -> Vec<TeamRankingEntry> {
    rankings
        .iter()
        .enumerate()
        .map(|(index, ranking)| TeamRankingEntry {
            rank: index + 1,
            team: ranking.team.clone(),
            owner: ranking.owner.clone(),
            players: ranking.players,
            mean_value_pct: ranking.mean_value_pct,
            mean_value_label: format_value_pct(ranking.mean_value_pct),
            band: ranking.band(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::summary::summarize;
    use super::*;
    use serde_json::json;

    #[test]
    fn player_view_serializes_labels() {
        let player = Player::new("Anthony Edwards", "MIN", "SG", 42_176_400.0, 50_000_000.0);
        let value = serde_json::to_value(PlayerView::from_player(&player)).expect("serializes");
        assert_eq!(value["salary_label"], json!("$42,176,400"));
        assert_eq!(value["value_label"], json!("-15.6%"));
        assert_eq!(value["band"], json!("good"));
    }

    #[test]
    fn empty_summary_view_omits_band_and_reports_full_cap() {
        let view = summarize(&[]).to_view(150_000_000.0);
        assert_eq!(view.mean_value_label, "0.0%");
        assert_eq!(view.positions.len(), 5);
        assert_eq!(view.cap.remaining, 150_000_000.0);
        assert_eq!(view.cap.remaining_label(), "$150,000,000");
        let value = serde_json::to_value(&view).expect("serializes");
        assert!(value.get("mean_value_band").is_none());
        assert_eq!(value["positions"][0]["position"], json!("PG"));
    }

    #[test]
    fn ranking_entries_are_one_based() {
        let rankings = vec![
            TeamRanking {
                team: "OKC".to_string(),
                owner: "Sam Presti".to_string(),
                players: 3,
                mean_value_pct: -31.0,
            },
            TeamRanking {
                team: "PHX".to_string(),
                owner: "Unknown".to_string(),
                players: 2,
                mean_value_pct: 24.0,
            },
        ];
        let entries = ranking_entries(&rankings);
        assert_eq!(entries[0].rank, 1);
        assert_eq!(entries[0].band, ValueBand::Excellent);
        assert_eq!(entries[1].rank, 2);
        assert_eq!(entries[1].mean_value_label, "+24.0%");
        assert_eq!(entries[1].band, ValueBand::VeryOverpaid);
    }
}
