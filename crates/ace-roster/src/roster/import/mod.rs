mod normalizer;
mod owners;
mod parser;

pub use owners::{OwnerDirectory, UNKNOWN_OWNER};
pub use parser::{RawOwnerRow, RawPlayerRow};

pub use normalizer::parse_currency;
pub(crate) use normalizer::normalize_team;

use super::domain::Player;
use normalizer::{amount_or_zero, clean_text};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug)]
pub enum ImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Io(err) => write!(f, "failed to read CSV export: {}", err),
            ImportError::Csv(err) => write!(f, "invalid CSV data: {}", err),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Io(err) => Some(err),
            ImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Eligible players in default order plus the number of rows filtered out.
#[derive(Debug, Clone, Default)]
pub struct PlayerImport {
    pub players: Vec<Player>,
    pub discarded: usize,
}

/// Normalizes raw rows into players, sorted by ACE estimate descending.
///
/// A row is dropped when the name is blank or either compensation figure is
/// not strictly positive after parsing. Names are unique: only the first
/// eligible row for a name is kept.
pub fn load_players<I>(rows: I) -> PlayerImport
where
    I: IntoIterator<Item = RawPlayerRow>,
{
    let mut players = Vec::new();
    let mut seen = HashSet::new();
    let mut discarded = 0;

    for row in rows {
        match player_from_row(&row) {
            Some(player) if seen.insert(player.name().to_string()) => players.push(player),
            Some(player) => {
                debug!(player = player.name(), "skipping duplicate row");
                discarded += 1;
            }
            None => {
                debug!(player = ?row.player, "skipping ineligible row");
                discarded += 1;
            }
        }
    }

    sort_by_ace_desc(&mut players);
    PlayerImport { players, discarded }
}

fn player_from_row(row: &RawPlayerRow) -> Option<Player> {
    let name = clean_text(row.player.as_deref());
    let salary = amount_or_zero(row.salary.as_deref());
    let ace = amount_or_zero(row.ace.as_deref());

    if name.is_empty() || salary <= 0.0 || ace <= 0.0 {
        return None;
    }

    Some(Player::new(
        name,
        clean_text(row.team_column()),
        clean_text(row.pos.as_deref()),
        salary,
        ace,
    ))
}

pub(crate) fn sort_by_ace_desc(players: &mut [Player]) {
    players.sort_by(|a, b| b.ace().total_cmp(&a.ace()));
}

pub struct PlayerImporter;

impl PlayerImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<PlayerImport, ImportError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let import = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            players = import.players.len(),
            discarded = import.discarded,
            "loaded player valuations"
        );
        Ok(import)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<PlayerImport, ImportError> {
        let parsed = parser::parse_player_rows(reader)?;
        let mut import = load_players(parsed.rows);
        import.discarded += parsed.rejected;
        Ok(import)
    }
}

impl OwnerDirectory {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ImportError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let directory = Self::from_reader(file)?;
        info!(path = %path.display(), teams = directory.len(), "loaded GM directory");
        Ok(directory)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ImportError> {
        let parsed = parser::parse_owner_rows(reader)?;
        if parsed.rejected > 0 {
            debug!(rejected = parsed.rejected, "skipped malformed GM rows");
        }
        Ok(Self::from_rows(parsed.rows))
    }
}
