//! HTTP API for the payroll rule engine.
//!
//! Exposes a single `/compute` endpoint that runs the rate resolution and
//! payroll computation for one timecard and returns the breakdown.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ComputeRequest, EmployeeRequest, PositionRequest, ShiftRequest};
pub use response::{ApiError, ApiErrorResponse, ComputeResponse};
pub use state::AppState;
