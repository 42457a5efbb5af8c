//! Collaborative whiteboard synchronization server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin inkroom-server -- --port 3000
//! ```

use clap::Parser;

use inkroom::{ServerConfig, logger::setup_logger};

#[derive(Parser, Debug)]
#[command(name = "inkroom-server", about = "Room-scoped whiteboard synchronization server", version)]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger("inkroom", "debug");

    let args = Args::parse();
    let config = ServerConfig {
        host: args.host,
        port: args.port,
    };

    // Run the server
    if let Err(e) = inkroom::run_server(config).await {
        tracing::error!("server error: {}", e);
        std::process::exit(1);
    }
}
