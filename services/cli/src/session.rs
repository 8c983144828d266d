use ace_roster::config::AppConfig;
use ace_roster::error::AppError;
use ace_roster::roster::{ImportError, OwnerDirectory, PlayerImporter, RosterService};
use clap::Args;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Args, Debug, Default)]
pub(crate) struct DataArgs {
    /// Override the configured ACE model export
    #[arg(long, global = true)]
    pub(crate) players_csv: Option<PathBuf>,
    /// Override the configured team to GM lookup table
    #[arg(long, global = true)]
    pub(crate) gms_csv: Option<PathBuf>,
}

impl DataArgs {
    pub(crate) fn apply(&self, config: &mut AppConfig) {
        if let Some(path) = &self.players_csv {
            config.data.players_csv = path.clone();
        }
        if let Some(path) = &self.gms_csv {
            config.data.owners_csv = path.clone();
        }
    }
}

/// Loads players and, when present, the GM table into a fresh session.
pub(crate) fn open_session(config: &AppConfig) -> Result<RosterService, AppError> {
    let mut service = RosterService::new(config.limits);

    let import = PlayerImporter::from_path(&config.data.players_csv)?;
    service.load_players(import);

    match OwnerDirectory::from_path(&config.data.owners_csv) {
        Ok(owners) => service.attach_owners(owners),
        Err(ImportError::Io(err)) if err.kind() == ErrorKind::NotFound => {
            warn!(
                path = %config.data.owners_csv.display(),
                "GM table not found; owners will show as Unknown"
            );
        }
        Err(err) => return Err(err.into()),
    }

    info!(
        environment = ?config.environment,
        capacity = config.limits.capacity,
        salary_cap = config.limits.salary_cap,
        "roster session ready"
    );
    Ok(service)
}
