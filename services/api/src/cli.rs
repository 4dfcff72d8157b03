use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use travel_booking::config::StorageBackend;
use travel_booking::error::AppError;

use crate::demo::{run_demo, DemoArgs};
use crate::infra::parse_backend;
use crate::server;

#[derive(Parser, Debug)]
#[command(
    name = "Corporate Travel Booking Service",
    about = "Run and demonstrate the corporate travel booking service from the command line",
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
    /// Run an end-to-end CLI demo covering employee and booking workflows
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured storage backend ('memory' or 'redb')
    #[arg(long, value_parser = parse_backend)]
    pub(crate) storage: Option<StorageBackend>,
    /// Override the database path used by the redb backend
    #[arg(long)]
    pub(crate) storage_path: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Demo(args) => run_demo(args),
    }
}
