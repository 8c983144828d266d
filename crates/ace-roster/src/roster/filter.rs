use super::domain::{Player, Position};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Comparison applied by an ACE threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThresholdOperator {
    #[serde(rename = ">=")]
    AtLeast,
    #[serde(rename = "<=")]
    AtMost,
}

/// Bound on the ACE estimate. Inactive unless `value` is strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AceThreshold {
    pub operator: ThresholdOperator,
    pub value: f64,
}

impl AceThreshold {
    pub fn at_least(value: f64) -> Self {
        Self {
            operator: ThresholdOperator::AtLeast,
            value,
        }
    }

    pub fn at_most(value: f64) -> Self {
        Self {
            operator: ThresholdOperator::AtMost,
            value,
        }
    }

    fn is_active(&self) -> bool {
        self.value > 0.0
    }

    fn matches(&self, player: &Player) -> bool {
        match self.operator {
            ThresholdOperator::AtLeast => player.ace() >= self.value,
            ThresholdOperator::AtMost => player.ace() <= self.value,
        }
    }
}

/// Coarse value split used for filtering; distinct from the five display bands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueFilter {
    #[default]
    All,
    /// `value_pct < -10`, best value first.
    Underpaid,
    /// `-10 <= value_pct <= 10`, pool order kept.
    Fair,
    /// `value_pct > 10`, worst value first.
    Overpaid,
}

impl ValueFilter {
    fn matches(self, value_pct: f64) -> bool {
        match self {
            Self::All => true,
            Self::Underpaid => value_pct < -10.0,
            Self::Fair => (-10.0..=10.0).contains(&value_pct),
            Self::Overpaid => value_pct > 10.0,
        }
    }
}

/// Pool query. The default value matches everything and keeps pool order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub threshold: Option<AceThreshold>,
    #[serde(default)]
    pub positions: BTreeSet<Position>,
    #[serde(default)]
    pub value: ValueFilter,
}

impl FilterCriteria {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn matches(&self, player: &Player, needle: &str) -> bool {
        if !needle.is_empty() && !player.name().to_lowercase().contains(needle) {
            return false;
        }

        if let Some(threshold) = self.threshold.filter(AceThreshold::is_active) {
            if !threshold.matches(player) {
                return false;
            }
        }

        if !self.positions.is_empty()
            && !player
                .position_kind()
                .is_some_and(|position| self.positions.contains(&position))
        {
            return false;
        }

        self.value.matches(player.value_pct())
    }
}

/// Applies every active criterion (logical AND), then the value-specific sort.
pub fn apply_filters(pool: &[Player], criteria: &FilterCriteria) -> Vec<Player> {
    let needle = criteria.text.trim().to_lowercase();
    let mut filtered: Vec<Player> = pool
        .iter()
        .filter(|player| criteria.matches(player, &needle))
        .cloned()
        .collect();

    match criteria.value {
        ValueFilter::Underpaid => {
            filtered.sort_by(|a, b| a.value_pct().total_cmp(&b.value_pct()));
        }
        ValueFilter::Overpaid => {
            filtered.sort_by(|a, b| b.value_pct().total_cmp(&a.value_pct()));
        }
        ValueFilter::All | ValueFilter::Fair => {}
    }

    filtered
}
