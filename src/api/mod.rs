//! HTTP API module for the hours engine.
//!
//! This module provides the REST API endpoints for retrieving monthly worked
//! and extra hours per school year.

mod caller;
mod handlers;
mod request;
mod response;
mod state;

pub use caller::{Caller, Role, USER_ID_HEADER, USER_ROLE_HEADER, parse_user_id};
pub use handlers::create_router;
pub use request::{BreakRequest, CalculationRequest, RecordRequest, WorkedHoursQuery};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
