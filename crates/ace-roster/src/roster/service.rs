use super::constraints::{AdmissionRejection, RosterLimits};
use super::domain::Player;
use super::filter::{apply_filters, FilterCriteria};
use super::import::{OwnerDirectory, PlayerImport};
use super::report::{
    rank_by_team, ranking_entries, salary_scatter, summarize, team_compositions,
    RosterSummaryView, SalaryScatter, TeamComposition, TeamRankingEntry,
};
use super::repository::{MoveOutcome, RosterRepository};
use tracing::{info, warn};

/// Single-session roster builder composing the repository, the GM directory and
/// the derived reports. Reports are recomputed from scratch on every call.
#[derive(Debug, Clone, Default)]
pub struct RosterService {
    repository: RosterRepository,
    owners: OwnerDirectory,
}

impl RosterService {
    pub fn new(limits: RosterLimits) -> Self {
        Self {
            repository: RosterRepository::new(limits),
            owners: OwnerDirectory::default(),
        }
    }

    /// Replaces the player pool and clears the roster.
    pub fn load_players(&mut self, import: PlayerImport) {
        info!(
            players = import.players.len(),
            discarded = import.discarded,
            "player pool replaced"
        );
        self.repository.replace_players(import.players);
        if self.repository.is_empty() {
            warn!("no eligible players loaded");
        }
    }

    /// Attaches the GM lookup. May arrive before or after the players; a later
    /// directory replaces an earlier one.
    pub fn attach_owners(&mut self, owners: OwnerDirectory) {
        info!(teams = owners.len(), "GM directory attached");
        self.owners = owners;
    }

    pub fn available(&self) -> &[Player] {
        self.repository.available()
    }

    pub fn roster(&self) -> &[Player] {
        self.repository.selected()
    }

    pub fn add(&mut self, name: &str) -> Result<MoveOutcome, AdmissionRejection> {
        self.repository.move_to_selected(name)
    }

    pub fn remove(&mut self, index: usize) -> bool {
        self.repository.move_to_available(index)
    }

    pub fn summary(&self) -> RosterSummaryView {
        summarize(self.repository.selected()).to_view(self.repository.limits().salary_cap)
    }

    /// Leaderboard over every player, pool and roster alike.
    pub fn rankings(&self) -> Vec<TeamRankingEntry> {
        ranking_entries(&rank_by_team(self.repository.all_players(), &self.owners))
    }

    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<Player> {
        apply_filters(self.repository.available(), criteria)
    }

    pub fn salary_scatter(&self) -> SalaryScatter {
        salary_scatter(self.repository.available())
    }

    pub fn team_compositions(&self) -> Vec<TeamComposition> {
        team_compositions(self.repository.all_players())
    }
}
