use super::common::raw_row;
use crate::roster::constraints::RosterLimits;
use crate::roster::domain::ValueBand;
use crate::roster::filter::{FilterCriteria, ValueFilter};
use crate::roster::import::{load_players, OwnerDirectory, RawOwnerRow};
use crate::roster::repository::MoveOutcome;
use crate::roster::service::RosterService;

fn owners() -> OwnerDirectory {
    OwnerDirectory::from_rows(vec![
        RawOwnerRow {
            team: Some("OKC".to_string()),
            gm: Some("Sam Presti".to_string()),
        },
        RawOwnerRow {
            team: Some("PHI".to_string()),
            gm: Some("Daryl Morey".to_string()),
        },
    ])
}

fn players() -> Vec<crate::roster::import::RawPlayerRow> {
    vec![
        raw_row("Shai Gilgeous-Alexander", "OKC", "PG", 35_000_000.0, 60_000_000.0),
        raw_row("Chet Holmgren", "OKC", "C", 10_000_000.0, 20_000_000.0),
        raw_row("Joel Embiid", "PHI", "C", 51_000_000.0, 34_000_000.0),
        raw_row("Kelly Oubre", "PHI 2TM", "SF", 8_000_000.0, 8_000_000.0),
        raw_row("Journeyman", "3TM", "SG", 2_000_000.0, 2_000_000.0),
    ]
}

#[test]
fn rankings_recompute_when_owners_arrive_after_players() {
    let mut service = RosterService::new(RosterLimits::standard());
    service.load_players(load_players(players()));

    let before = service.rankings();
    assert!(before.iter().all(|entry| entry.owner == "Unknown"));

    service.attach_owners(owners());
    let after = service.rankings();
    assert_eq!(after.len(), 2);
    assert_eq!(after[0].team, "OKC");
    assert_eq!(after[0].owner, "Sam Presti");
    assert_eq!(after[0].rank, 1);
    assert_eq!(after[1].team, "PHI");
    assert_eq!(after[1].players, 2);

    let again = service.rankings();
    assert_eq!(
        serde_json_value(&again),
        serde_json_value(&after),
        "rankings are idempotent"
    );
}

#[test]
fn owners_attached_first_still_apply() {
    let mut service = RosterService::default();
    service.attach_owners(owners());
    service.load_players(load_players(players()));
    assert_eq!(service.rankings()[1].owner, "Daryl Morey");
}

#[test]
fn rankings_cover_pool_and_roster() {
    let mut service = RosterService::default();
    service.attach_owners(owners());
    service.load_players(load_players(players()));
    let before = service.rankings();

    assert_eq!(service.add("Chet Holmgren"), Ok(MoveOutcome::Selected));
    let after = service.rankings();
    assert_eq!(serde_json_value(&before), serde_json_value(&after));
}

#[test]
fn summary_and_filters_follow_the_roster() {
    let mut service = RosterService::default();
    service.load_players(load_players(players()));

    service.add("Chet Holmgren").expect("fits");
    service.add("Joel Embiid").expect("fits");

    let summary = service.summary();
    assert_eq!(summary.total_players, 2);
    assert_eq!(summary.positions[4].count, 2);
    // (-50 + 50) / 2
    assert_eq!(summary.mean_value_pct, 0.0);
    assert_eq!(summary.mean_value_band, Some(ValueBand::Fair));
    assert_eq!(summary.cap.used, 54_000_000.0);
    assert_eq!(summary.cap.remaining, 96_000_000.0);

    let underpaid = service.filter(&FilterCriteria {
        value: ValueFilter::Underpaid,
        ..FilterCriteria::default()
    });
    let names: Vec<&str> = underpaid.iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["Shai Gilgeous-Alexander"]);

    assert!(service.remove(0));
    assert_eq!(service.roster().len(), 1);
    assert_eq!(service.available()[0].name(), "Shai Gilgeous-Alexander");
}

fn serde_json_value<T: serde::Serialize>(value: &T) -> serde_json::Value {
    serde_json::to_value(value).expect("serializes")
}
