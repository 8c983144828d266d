use crate::commands::{run_charts, run_draft, run_players, run_rankings, DraftArgs, PlayersArgs};
use crate::session::{open_session, DataArgs};
use ace_roster::config::AppConfig;
use ace_roster::error::AppError;
use ace_roster::telemetry;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "ACE Roster Builder",
    about = "Explore ACE player valuations and build a roster under the salary cap",
    version
)]
struct Cli {
    #[command(flatten)]
    data: DataArgs,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List available players, optionally filtered
    Players(PlayersArgs),
    /// Rank teams (and their GMs) by average value
    Rankings(OutputArgs),
    /// Pick players in order and summarize the resulting roster
    Draft(DraftArgs),
    /// Emit salary scatter and team composition chart data
    Charts(OutputArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct OutputArgs {
    /// Print JSON instead of a text table
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;
    cli.data.apply(&mut config);

    telemetry::init(&config.telemetry)?;

    let session = open_session(&config)?;
    match cli.command {
        Command::Players(args) => run_players(&session, args),
        Command::Rankings(args) => run_rankings(&session, args),
        Command::Draft(args) => run_draft(session, args),
        Command::Charts(args) => run_charts(&session, args),
    }
}
