use crate::roster::constraints::RosterLimits;
use crate::roster::domain::Player;
use crate::roster::import::RawPlayerRow;
use crate::roster::repository::RosterRepository;
use std::collections::HashSet;

pub(super) fn raw_row(name: &str, team: &str, position: &str, salary: f64, ace: f64) -> RawPlayerRow {
    RawPlayerRow {
        player: Some(name.to_string()),
        team: Some(team.to_string()),
        pos: Some(position.to_string()),
        salary: Some(format!("${salary}")),
        ace: Some(format!("${ace}")),
        ..RawPlayerRow::default()
    }
}

/// Twelve players at 10M ACE each, so the standard cap never binds before capacity.
pub(super) fn deep_bench_rows() -> Vec<RawPlayerRow> {
    (1..=12)
        .map(|i| raw_row(&format!("Player {i:02}"), "TST", "SF", 8_000_000.0, 10_000_000.0))
        .collect()
}

pub(super) fn repository_with(rows: Vec<RawPlayerRow>) -> RosterRepository {
    let mut repository = RosterRepository::new(RosterLimits::standard());
    repository.load(rows);
    repository
}

pub(super) fn sorted_names(players: &[Player]) -> Vec<String> {
    let mut names: Vec<String> = players.iter().map(|p| p.name().to_string()).collect();
    names.sort();
    names
}

pub(super) fn assert_disjoint(repository: &RosterRepository) {
    let pool: HashSet<&str> = repository.available().iter().map(Player::name).collect();
    assert!(repository
        .selected()
        .iter()
        .all(|player| !pool.contains(player.name())));
}
