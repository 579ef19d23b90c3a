use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use farepath_cli::output::OutputFormat;

mod commands;

use commands::route::{handle_route_command, RouteCommandArgs};
use commands::routes::handle_routes_command;

#[derive(Parser, Debug)]
#[command(author, version, about = "Cheapest-route search over a route catalog")]
struct Cli {
    /// CSV file with `origin,destination,cost` rows.
    #[arg(
        long,
        env = "FAREPATH_ROUTES_PATH",
        default_value = "routes.csv",
        global = true
    )]
    routes: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the cheapest route between two location codes.
    Route {
        /// Origin code.
        #[arg(long = "from")]
        from: String,
        /// Destination code.
        #[arg(long = "to")]
        to: String,
    },
    /// List the routes in the catalog.
    Routes,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Route { from, to } => {
            handle_route_command(&cli.routes, cli.format, &RouteCommandArgs { from, to })
        }
        Command::Routes => handle_routes_command(&cli.routes, cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
