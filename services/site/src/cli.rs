use crate::catalog::{run_postcode_check, run_service_report, PostcodeArgs, ServicesArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use local_pros::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Wycombe Local Pros",
    about = "Run the Wycombe Local Pros referral site or inspect its catalogue",
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
    /// Print the service catalogue, or the cost guide for one service
    Services(ServicesArgs),
    /// Check whether a postcode is inside the serviced area
    Postcode(PostcodeArgs),
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
        Command::Services(args) => run_service_report(args),
        Command::Postcode(args) => run_postcode_check(args),
    }
}
