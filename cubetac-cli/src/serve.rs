//! Serve command - start the HTTP API server

use anyhow::Result;
use clap::Args;

use cubetac_server::{run_server, ServerConfig};

#[derive(Args)]
pub struct ServeArgs {
    /// Port number to listen on
    #[arg(long, default_value = "8002")]
    pub port: u16,
}

pub fn run(args: ServeArgs) -> Result<()> {
    let config = ServerConfig { port: args.port };

    tracing::info!("starting CUBETAC server on port {}", config.port);

    // Bridge into the async server
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_server(config))
}
