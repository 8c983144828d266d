use super::domain::Player;
use serde::Serialize;

/// Maximum number of players on a roster.
pub const ROSTER_CAPACITY: usize = 10;

/// Salary cap, in ACE dollars.
pub const SALARY_CAP: f64 = 150_000_000.0;

/// Capacity and budget bounds applied to every roster insertion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RosterLimits {
    pub capacity: usize,
    pub salary_cap: f64,
}

impl RosterLimits {
    pub const fn standard() -> Self {
        Self {
            capacity: ROSTER_CAPACITY,
            salary_cap: SALARY_CAP,
        }
    }

    /// Capacity is checked before the cap; the first failing check is reported.
    pub fn can_admit(&self, candidate: &Player, roster: &[Player]) -> Result<(), AdmissionRejection> {
        if roster.len() >= self.capacity {
            return Err(AdmissionRejection::RosterFull {
                capacity: self.capacity,
            });
        }

        let committed = cap_used(roster);
        let requested = candidate.cap_hit();
        if committed + requested > self.salary_cap {
            return Err(AdmissionRejection::ExceedsCap {
                cap: self.salary_cap,
                committed,
                requested,
            });
        }

        Ok(())
    }
}

impl Default for RosterLimits {
    fn default() -> Self {
        Self::standard()
    }
}

pub fn cap_used(roster: &[Player]) -> f64 {
    roster.iter().map(Player::cap_hit).sum()
}

/// Why a player could not join the roster. Non-fatal: the roster is untouched.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum AdmissionRejection {
    #[error("roster full ({capacity} players)")]
    RosterFull { capacity: usize },
    #[error("exceeds cap: {requested} requested with {committed} of {cap} committed")]
    ExceedsCap {
        cap: f64,
        committed: f64,
        requested: f64,
    },
}

impl AdmissionRejection {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::RosterFull { .. } => "roster_full",
            Self::ExceedsCap { .. } => "exceeds_cap",
        }
    }
}
