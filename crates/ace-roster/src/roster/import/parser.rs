use serde::{Deserialize, Deserializer};
use std::io::Read;
use tracing::debug;

/// One row of the ACE model export, before any normalization.
///
/// Every column is optional; the loader decides which rows are eligible.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawPlayerRow {
    #[serde(rename = "Player", default, deserialize_with = "empty_string_as_none")]
    pub player: Option<String>,
    #[serde(rename = "Team", default, deserialize_with = "empty_string_as_none")]
    pub team: Option<String>,
    #[serde(rename = "Tm", default, deserialize_with = "empty_string_as_none")]
    pub tm: Option<String>,
    #[serde(rename = "Pos", default, deserialize_with = "empty_string_as_none")]
    pub pos: Option<String>,
    #[serde(rename = "SALARY", default, deserialize_with = "empty_string_as_none")]
    pub salary: Option<String>,
    #[serde(rename = "ACE", default, deserialize_with = "empty_string_as_none")]
    pub ace: Option<String>,
}

impl RawPlayerRow {
    /// `Team` wins; `Tm` is only consulted when `Team` is missing or blank.
    pub(crate) fn team_column(&self) -> Option<&str> {
        self.team.as_deref().or(self.tm.as_deref())
    }
}

/// One row of the team to GM lookup table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawOwnerRow {
    #[serde(rename = "Team", default, deserialize_with = "empty_string_as_none")]
    pub team: Option<String>,
    #[serde(rename = "GM", default, deserialize_with = "empty_string_as_none")]
    pub gm: Option<String>,
}

/// Rows that deserialized cleanly plus the count of records that did not.
#[derive(Debug)]
pub(crate) struct ParsedRows<T> {
    pub rows: Vec<T>,
    pub rejected: usize,
}

pub(crate) fn parse_player_rows<R: Read>(
    reader: R,
) -> Result<ParsedRows<RawPlayerRow>, csv::Error> {
    parse_rows(reader)
}

pub(crate) fn parse_owner_rows<R: Read>(
    reader: R,
) -> Result<ParsedRows<RawOwnerRow>, csv::Error> {
    parse_rows(reader)
}

/// Reads records one at a time. A record that is not valid UTF-8 or does not
/// fit the row shape is skipped and counted; only I/O failures abort.
fn parse_rows<R, T>(reader: R) -> Result<ParsedRows<T>, csv::Error>
where
    R: Read,
    T: for<'de> Deserialize<'de>,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut parsed = ParsedRows {
        rows: Vec::new(),
        rejected: 0,
    };
    for record in csv_reader.deserialize::<T>() {
        match record {
            Ok(row) => parsed.rows.push(row),
            Err(err) if err.is_io_error() => return Err(err),
            Err(err) => {
                debug!(error = %err, "skipping malformed CSV record");
                parsed.rejected += 1;
            }
        }
    }
    Ok(parsed)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
