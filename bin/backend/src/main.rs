//! Alpha-Beta Visualizer Backend
//!
//! Serves the session API on BIND_ADDR (default 0.0.0.0:5000).
//! See `abv_server::Config` for the other environment variables.

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    abv_core::log();
    abv_core::kys();
    abv_server::run().await
}
