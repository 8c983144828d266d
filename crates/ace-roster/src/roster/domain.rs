use super::valuation::{classify_value, compute_value_pct};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Court role codes recognized by the roster summary and position filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "PG")]
    PointGuard,
    #[serde(rename = "SG")]
    ShootingGuard,
    #[serde(rename = "SF")]
    SmallForward,
    #[serde(rename = "PF")]
    PowerForward,
    #[serde(rename = "C")]
    Center,
}

impl Position {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::PointGuard,
            Self::ShootingGuard,
            Self::SmallForward,
            Self::PowerForward,
            Self::Center,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::PointGuard => "PG",
            Self::ShootingGuard => "SG",
            Self::SmallForward => "SF",
            Self::PowerForward => "PF",
            Self::Center => "C",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PointGuard => "Point Guard",
            Self::ShootingGuard => "Shooting Guard",
            Self::SmallForward => "Small Forward",
            Self::PowerForward => "Power Forward",
            Self::Center => "Center",
        }
    }

    /// Exact, case-sensitive match on the export's role code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|position| position.code() == code)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Five-way classification of a value percentage, used for colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueBand {
    Excellent,
    Good,
    Fair,
    Overpaid,
    VeryOverpaid,
}

impl ValueBand {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Overpaid => "overpaid",
            Self::VeryOverpaid => "very-overpaid",
        }
    }
}

impl fmt::Display for ValueBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A player with real salary and ACE model estimate.
///
/// Compensation fields are private so `value_pct` is always derived from the
/// current pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    name: String,
    team: String,
    position: String,
    salary: f64,
    ace: f64,
    value_pct: f64,
}

impl Player {
    pub fn new(
        name: impl Into<String>,
        team: impl Into<String>,
        position: impl Into<String>,
        salary: f64,
        ace: f64,
    ) -> Self {
        Self {
            name: name.into(),
            team: team.into(),
            position: position.into(),
            salary,
            ace,
            value_pct: compute_value_pct(salary, ace),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw team as exported, possibly carrying a multi-team marker such as `2TM`.
    pub fn team(&self) -> &str {
        &self.team
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn position_kind(&self) -> Option<Position> {
        Position::from_code(&self.position)
    }

    /// Actual compensation.
    pub fn salary(&self) -> f64 {
        self.salary
    }

    /// ACE model estimated compensation.
    pub fn ace(&self) -> f64 {
        self.ace
    }

    pub fn value_pct(&self) -> f64 {
        self.value_pct
    }

    pub fn value_band(&self) -> ValueBand {
        classify_value(self.value_pct)
    }

    /// Amount charged against the salary cap. The cap is measured in ACE dollars.
    pub fn cap_hit(&self) -> f64 {
        self.ace
    }

    pub fn set_compensation(&mut self, salary: f64, ace: f64) {
        self.salary = salary;
        self.ace = ace;
        self.value_pct = compute_value_pct(salary, ace);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_pct_tracks_compensation_changes() {
        let mut player = Player::new("Jalen Brunson", "NYK", "PG", 25_000_000.0, 40_000_000.0);
        assert_eq!(player.value_pct(), -37.5);
        assert_eq!(player.value_band(), ValueBand::Excellent);

        player.set_compensation(44_000_000.0, 40_000_000.0);
        assert!((player.value_pct() - 10.0).abs() < 1e-9);
        assert_eq!(player.value_band(), ValueBand::Overpaid);
    }

    #[test]
    fn zero_estimate_yields_zero_value() {
        let player = Player::new("Two-Way", "", "", 1_000_000.0, 0.0);
        assert_eq!(player.value_pct(), 0.0);
        assert_eq!(player.value_band(), ValueBand::Fair);
    }

    #[test]
    fn position_codes_are_exact() {
        assert_eq!(Position::from_code("SF"), Some(Position::SmallForward));
        assert_eq!(Position::from_code("sf"), None);
        assert_eq!(Position::from_code("SF-PF"), None);
        let player = Player::new("Wing", "BOS", "SF", 1.0, 1.0);
        assert_eq!(player.position_kind(), Some(Position::SmallForward));
    }
}
