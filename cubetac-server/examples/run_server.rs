//! Example to run the CUBETAC server standalone
//!
//! Run with: cargo run -p cubetac-server --example run_server

use cubetac_server::{run_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = ServerConfig { port: 8002 };

    println!("Starting CUBETAC server on port {}", config.port);
    println!("API at http://localhost:{}/api/status", config.port);

    run_server(config).await
}
