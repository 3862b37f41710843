//! HTTP surface of the condensation backend

pub mod handlers;
pub mod routes;

pub use handlers::{ApiError, CondenseState};
pub use routes::build_router;
