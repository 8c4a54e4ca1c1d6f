//! Web layer for the next-train server.
//!
//! Thin JSON plumbing over the scheduler: routing, CORS, health checks.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
