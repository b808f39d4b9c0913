use crate::demo::{run_demo, run_explain, run_rank, DemoArgs, ExplainArgs, RankArgs};
use crate::server;
use career_match::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Career Match",
    about = "Rank job and course postings against a candidate profile",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Evaluate profile and posting files without starting the server
    Match {
        #[command(subcommand)]
        command: MatchCommand,
    },
    /// Run the matcher over a built-in student profile and posting board
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum MatchCommand {
    /// Print qualified postings ordered by match score
    Rank(RankArgs),
    /// Print eligibility, score, and breakdown for one posting
    Explain(ExplainArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Match {
            command: MatchCommand::Rank(args),
        } => run_rank(args),
        Command::Match {
            command: MatchCommand::Explain(args),
        } => run_explain(args),
        Command::Demo(args) => run_demo(args),
    }
}
