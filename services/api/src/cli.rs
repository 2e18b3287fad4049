use crate::console::{run_report, run_tabs, ReportArgs, TabsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use complaint_desk::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Complaint Desk",
    about = "Serve and inspect campus complaint reports from the command line",
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
    /// Fetch, filter and print the complaint report, optionally saving the CSV
    Report(ReportArgs),
    /// Show the complaint module tabs offered to a role
    Tabs(TabsArgs),
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
        Command::Report(args) => run_report(args).await,
        Command::Tabs(args) => run_tabs(args),
    }
}
