//! CUBETAC CLI - Command-line interface
//!
//! Commands:
//! - play: interactive match in the terminal (vs the computer or hotseat)
//! - simulate: self-play batches with aggregate statistics
//! - serve: start the HTTP API server

use clap::{Parser, Subcommand};

mod play;
mod serve;
mod simulate;

#[derive(Parser)]
#[command(name = "cubetac")]
#[command(about = "3D tic-tac-toe: win 2 of 3 layers, or line up through the cube")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive match in the terminal
    Play(play::PlayArgs),
    /// Run self-play games and report statistics
    Simulate(simulate::SimulateArgs),
    /// Start the HTTP API server
    Serve(serve::ServeArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play::run(args),
        Commands::Simulate(args) => simulate::run(args),
        Commands::Serve(args) => serve::run(args),
    }
}
