//! HTTP API module for the compensation engine.
//!
//! This module provides the REST API endpoints for the simulation
//! scenarios: monthly salary, vacation, 13th salary, severance,
//! contractor comparison and the income-tax simulator.

mod handlers;
mod response;
mod state;

pub use handlers::create_router;
pub use response::{ApiError, SimulationEnvelope};
pub use state::AppState;
