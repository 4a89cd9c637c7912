//! Web layer for the rail decision support service.
//!
//! Provides HTTP endpoints for scheduling scenarios, what-if analysis,
//! section listing, KPIs, and the audit trail.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
