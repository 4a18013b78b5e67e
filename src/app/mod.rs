// Application layer: the inbound HTTP surface.

pub mod handlers;
pub mod routes;

pub use routes::{build_router, AppState};
