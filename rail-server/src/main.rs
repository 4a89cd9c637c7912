use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use rail_server::audit::MemoryAuditLog;
use rail_server::directory::SectionDirectory;
use rail_server::engine::SequencerConfig;
use rail_server::web::{AppState, create_router};

/// Port used when PORT is unset or unparsable.
const DEFAULT_PORT: u16 = 8000;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    // Build app state
    let directory = SectionDirectory::new();
    let audit = MemoryAuditLog::default();
    let state = AppState::new(directory, audit, SequencerConfig::default());

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    println!("Rail Decision Support API listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health        - Health check");
    println!("  GET  /api/sections  - List track sections");
    println!("  POST /api/optimize  - Generate a timetable for a scenario");
    println!("  POST /api/whatif    - Re-optimize with a delayed train");
    println!("  GET  /api/kpis      - KPI report");
    println!("  GET  /api/audit     - Recent audit events");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
