mod charts;
mod rankings;
mod summary;
pub mod views;

pub use charts::{
    salary_scatter, team_compositions, CompositionSlice, SalaryScatter, ScatterPoint,
    TeamComposition,
};
pub use rankings::{rank_by_team, TeamRanking};
pub use summary::{summarize, RosterSummary};
pub use views::{
    ranking_entries, CapStatus, PlayerView, PositionCountEntry, RosterSummaryView,
    TeamRankingEntry,
};
