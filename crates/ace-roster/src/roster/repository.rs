use super::constraints::{cap_used, AdmissionRejection, RosterLimits};
use super::domain::Player;
use super::import::{load_players, sort_by_ace_desc, RawPlayerRow};
use serde::Serialize;
use tracing::{debug, warn};

/// Result of an add request that did not hit a constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveOutcome {
    Selected,
    /// Nobody by that name is in the available pool; nothing changed.
    NotFound,
}

/// Owns the available pool and the selected roster. A player is in exactly one
/// of the two at any time.
#[derive(Debug, Clone, Default)]
pub struct RosterRepository {
    available: Vec<Player>,
    selected: Vec<Player>,
    limits: RosterLimits,
}

impl RosterRepository {
    pub fn new(limits: RosterLimits) -> Self {
        Self {
            available: Vec::new(),
            selected: Vec::new(),
            limits,
        }
    }

    /// Replaces both collections with the eligible rows, returning how many rows
    /// were discarded.
    pub fn load<I>(&mut self, rows: I) -> usize
    where
        I: IntoIterator<Item = RawPlayerRow>,
    {
        let import = load_players(rows);
        self.replace_players(import.players);
        import.discarded
    }

    /// Resets the pool to the given players (re-sorted) and clears the roster.
    pub fn replace_players(&mut self, mut players: Vec<Player>) {
        sort_by_ace_desc(&mut players);
        self.available = players;
        self.selected.clear();
    }

    pub fn limits(&self) -> RosterLimits {
        self.limits
    }

    /// Pool in default order: ACE estimate descending.
    pub fn available(&self) -> &[Player] {
        &self.available
    }

    /// Roster in the order players were selected.
    pub fn selected(&self) -> &[Player] {
        &self.selected
    }

    /// Every player the repository owns, pool first.
    pub fn all_players(&self) -> impl Iterator<Item = &Player> + '_ {
        self.available.iter().chain(self.selected.iter())
    }

    pub fn len(&self) -> usize {
        self.available.len() + self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn cap_used(&self) -> f64 {
        cap_used(&self.selected)
    }

    pub fn cap_remaining(&self) -> f64 {
        self.limits.salary_cap - self.cap_used()
    }

    /// Moves the first pool entry named `name` onto the roster.
    ///
    /// A rejection leaves both collections untouched.
    pub fn move_to_selected(&mut self, name: &str) -> Result<MoveOutcome, AdmissionRejection> {
        let Some(index) = self.available.iter().position(|player| player.name() == name) else {
            debug!(player = name, "player not in available pool");
            return Ok(MoveOutcome::NotFound);
        };

        if let Err(rejection) = self.limits.can_admit(&self.available[index], &self.selected) {
            warn!(player = name, reason = rejection.code(), "roster admission rejected");
            return Err(rejection);
        }

        let player = self.available.remove(index);
        debug!(player = name, cap_hit = player.cap_hit(), "player added to roster");
        self.selected.push(player);
        Ok(MoveOutcome::Selected)
    }

    /// Returns the roster entry at `index` to the pool and restores default order.
    ///
    /// An out-of-range index is a no-op and returns `false`.
    pub fn move_to_available(&mut self, index: usize) -> bool {
        if index >= self.selected.len() {
            debug!(index, "no roster entry at index");
            return false;
        }

        let player = self.selected.remove(index);
        debug!(player = player.name(), "player returned to pool");
        self.available.push(player);
        sort_by_ace_desc(&mut self.available);
        true
    }
}
