use crate::cli::OutputArgs;
use crate::render;
use ace_roster::error::AppError;
use ace_roster::roster::report::{PlayerView, RosterSummaryView, SalaryScatter, TeamComposition};
use ace_roster::roster::{
    parse_currency, AceThreshold, FilterCriteria, MoveOutcome, Position, RosterService,
    ValueFilter,
};
use chrono::{Local, NaiveDate};
use clap::{Args, ValueEnum};
use serde::Serialize;

#[derive(Args, Debug, Default)]
pub(crate) struct PlayersArgs {
    /// Case-insensitive name search
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Only players whose ACE estimate is at least this amount
    #[arg(long, conflicts_with = "ace_max", value_parser = parse_amount)]
    pub(crate) ace_min: Option<f64>,
    /// Only players whose ACE estimate is at most this amount
    #[arg(long, value_parser = parse_amount)]
    pub(crate) ace_max: Option<f64>,
    /// Restrict to positions (PG, SG, SF, PF, C); repeatable
    #[arg(long = "position", value_parser = parse_position)]
    pub(crate) positions: Vec<Position>,
    /// Value split to show
    #[arg(long, value_enum, default_value_t = ValueArg::All)]
    pub(crate) value: ValueArg,
    #[command(flatten)]
    pub(crate) output: OutputArgs,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DraftArgs {
    /// Player to add, in order; repeatable
    #[arg(long = "pick", required = true)]
    pub(crate) picks: Vec<String>,
    /// Roster positions to send back to the pool after drafting (0-based); repeatable
    #[arg(long = "release")]
    pub(crate) releases: Vec<usize>,
    #[command(flatten)]
    pub(crate) output: OutputArgs,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum ValueArg {
    #[default]
    All,
    Underpaid,
    Fair,
    Overpaid,
}

impl From<ValueArg> for ValueFilter {
    fn from(value: ValueArg) -> Self {
        match value {
            ValueArg::All => ValueFilter::All,
            ValueArg::Underpaid => ValueFilter::Underpaid,
            ValueArg::Fair => ValueFilter::Fair,
            ValueArg::Overpaid => ValueFilter::Overpaid,
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonEnvelope<T: Serialize> {
    generated_on: NaiveDate,
    data: T,
}

#[derive(Debug, Serialize)]
pub(crate) struct PickResult {
    pub(crate) player: String,
    pub(crate) outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) detail: Option<String>,
}

#[derive(Debug, Serialize)]
struct DraftReport {
    picks: Vec<PickResult>,
    roster: Vec<PlayerView>,
    summary: RosterSummaryView,
}

#[derive(Debug, Serialize)]
struct ChartsReport {
    scatter: SalaryScatter,
    compositions: Vec<TeamComposition>,
}

pub(crate) fn run_players(service: &RosterService, args: PlayersArgs) -> Result<(), AppError> {
    let criteria = criteria_from_args(&args);
    let players: Vec<PlayerView> = service
        .filter(&criteria)
        .iter()
        .map(PlayerView::from_player)
        .collect();

    if args.output.json {
        return print_json(players);
    }
    render::render_players(&players);
    Ok(())
}

pub(crate) fn run_rankings(service: &RosterService, args: OutputArgs) -> Result<(), AppError> {
    let rankings = service.rankings();
    if args.json {
        return print_json(rankings);
    }
    render::render_rankings(&rankings);
    Ok(())
}

pub(crate) fn run_draft(mut service: RosterService, args: DraftArgs) -> Result<(), AppError> {
    let mut picks = Vec::with_capacity(args.picks.len());
    for name in &args.picks {
        let (outcome, detail) = match service.add(name) {
            Ok(MoveOutcome::Selected) => ("selected", None),
            Ok(MoveOutcome::NotFound) => ("not_found", None),
            Err(rejection) => (rejection.code(), Some(rejection.to_string())),
        };
        picks.push(PickResult {
            player: name.clone(),
            outcome,
            detail,
        });
    }

    let mut releases = args.releases.clone();
    // Highest index first so earlier positions stay valid.
    releases.sort_unstable_by(|a, b| b.cmp(a));
    releases.dedup();
    for index in releases {
        service.remove(index);
    }

    let report = DraftReport {
        picks,
        roster: service.roster().iter().map(PlayerView::from_player).collect(),
        summary: service.summary(),
    };

    if args.output.json {
        return print_json(report);
    }
    render::render_draft(&report.picks, &report.roster, &report.summary);
    Ok(())
}

pub(crate) fn run_charts(service: &RosterService, args: OutputArgs) -> Result<(), AppError> {
    let report = ChartsReport {
        scatter: service.salary_scatter(),
        compositions: service.team_compositions(),
    };
    if args.json {
        return print_json(report);
    }
    render::render_charts(&report.scatter, &report.compositions);
    Ok(())
}

fn criteria_from_args(args: &PlayersArgs) -> FilterCriteria {
    let threshold = match (args.ace_min, args.ace_max) {
        (Some(min), _) => Some(AceThreshold::at_least(min)),
        (None, Some(max)) => Some(AceThreshold::at_most(max)),
        (None, None) => None,
    };

    FilterCriteria {
        text: args.search.clone().unwrap_or_default(),
        threshold,
        positions: args.positions.iter().copied().collect(),
        value: args.value.into(),
    }
}

fn print_json<T: Serialize>(data: T) -> Result<(), AppError> {
    let envelope = JsonEnvelope {
        generated_on: Local::now().date_naive(),
        data,
    };
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}

fn parse_position(raw: &str) -> Result<Position, String> {
    let code = raw.trim().to_ascii_uppercase();
    Position::from_code(&code).ok_or_else(|| format!("unknown position '{raw}' (PG, SG, SF, PF, C)"))
}

fn parse_amount(raw: &str) -> Result<f64, String> {
    parse_currency(raw).ok_or_else(|| format!("failed to parse '{raw}' as an amount"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn criteria_prefer_the_minimum_threshold() {
        let args = PlayersArgs {
            search: Some("curry".to_string()),
            ace_min: Some(10.0),
            positions: vec![Position::PointGuard],
            value: ValueArg::Underpaid,
            ..PlayersArgs::default()
        };
        let criteria = criteria_from_args(&args);
        assert_eq!(criteria.text, "curry");
        assert_eq!(criteria.threshold, Some(AceThreshold::at_least(10.0)));
        assert!(criteria.positions.contains(&Position::PointGuard));
        assert_eq!(criteria.value, ValueFilter::Underpaid);
    }

    #[test]
    fn parses_positions_and_amounts() {
        assert_eq!(parse_position(" pf "), Ok(Position::PowerForward));
        assert!(parse_position("G").is_err());
        assert_eq!(parse_amount("$20,000,000"), Ok(20_000_000.0));
        assert_eq!(parse_amount("20000000"), Ok(20_000_000.0));
        assert!(parse_amount("lots").is_err());
    }
}
