//! Sharpcheck Server - HTTP upload endpoint for blur analysis.

use std::net::SocketAddr;

use clap::Parser;
use sharpcheck_core::DEFAULT_THRESHOLD;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod response;
mod routes;

use routes::AppState;

/// Sharpcheck server - blur detection over HTTP
#[derive(Parser)]
#[command(name = "sharpcheck-server")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:5000")]
    bind: SocketAddr,

    /// Default focus score threshold for requests without an override
    #[arg(long, default_value_t = DEFAULT_THRESHOLD, value_parser = parse_threshold)]
    threshold: f64,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Parse and validate a threshold value (finite, greater than zero).
fn parse_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("{value} is not a finite positive number"))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("info"),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let state = AppState::new(cli.threshold);
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(cli.bind).await?;
    info!("Listening on {}", cli.bind);
    axum::serve(listener, app).await?;

    Ok(())
}
