use clap::Parser;
use moodshop_stub_backend::{run_server, StubState};
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "moodshop-stub-backend",
    about = "In-memory stand-in for the mood shop API"
)]
struct Args {
    /// HTTP server address
    #[arg(long, default_value = "127.0.0.1:5000")]
    addr: SocketAddr,

    /// Answer every request with a 500 error envelope
    #[arg(long)]
    fail: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let state = StubState::default();
    state.set_failing(args.fail).await;

    run_server(state, args.addr).await
}
