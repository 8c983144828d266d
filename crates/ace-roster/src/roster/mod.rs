//! Player valuation, salary-cap roster building and the reports derived from them.

pub mod constraints;
pub mod domain;
pub mod filter;
pub mod import;
pub mod report;
pub mod repository;
pub mod service;
pub mod valuation;

#[cfg(test)]
mod tests;

pub use constraints::{AdmissionRejection, RosterLimits, ROSTER_CAPACITY, SALARY_CAP};
pub use domain::{Player, Position, ValueBand};
pub use filter::{apply_filters, AceThreshold, FilterCriteria, ThresholdOperator, ValueFilter};
pub use import::{
    load_players, parse_currency, ImportError, OwnerDirectory, PlayerImport, PlayerImporter,
    RawOwnerRow, RawPlayerRow, UNKNOWN_OWNER,
};
pub use repository::{MoveOutcome, RosterRepository};
pub use service::RosterService;
pub use valuation::{classify_value, compute_value_pct, format_money, format_value_pct};
