use super::normalizer::{clean_text, normalize_team};
use super::parser::RawOwnerRow;
use std::collections::HashMap;

/// Owner label used when a team has no GM on file.
pub const UNKNOWN_OWNER: &str = "Unknown";

/// Side-loaded team to GM lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnerDirectory {
    owners: HashMap<String, String>,
}

impl OwnerDirectory {
    /// Rows without a team are skipped, a blank GM is recorded as `Unknown`,
    /// and a repeated team keeps the last GM seen.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = RawOwnerRow>,
    {
        let mut owners = HashMap::new();
        for row in rows {
            let team = normalize_team(&clean_text(row.team.as_deref()));
            if team.is_empty() {
                continue;
            }
            let gm = clean_text(row.gm.as_deref());
            let gm = if gm.is_empty() {
                UNKNOWN_OWNER.to_string()
            } else {
                gm
            };
            owners.insert(team, gm);
        }
        Self { owners }
    }

    pub fn owner_for(&self, team: &str) -> &str {
        self.owners
            .get(team)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_OWNER)
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(team: &str, gm: &str) -> RawOwnerRow {
        RawOwnerRow {
            team: Some(team.to_string()),
            gm: Some(gm.to_string()),
        }
    }

    #[test]
    fn blank_gm_maps_to_unknown_and_blank_team_is_skipped() {
        let directory = OwnerDirectory::from_rows(vec![
            row("CHA", ""),
            RawOwnerRow {
                team: None,
                gm: Some("Nobody".to_string()),
            },
        ]);
        assert_eq!(directory.len(), 1);
        assert_eq!(directory.owner_for("CHA"), UNKNOWN_OWNER);
    }

    #[test]
    fn last_row_for_a_team_wins() {
        let directory =
            OwnerDirectory::from_rows(vec![row("LAL", "Rob Pelinka"), row(" LAL ", "Someone Else")]);
        assert_eq!(directory.owner_for("LAL"), "Someone Else");
    }

    #[test]
    fn missing_team_resolves_to_unknown() {
        let directory = OwnerDirectory::default();
        assert!(directory.is_empty());
        assert_eq!(directory.owner_for("SAS"), UNKNOWN_OWNER);
    }
}
