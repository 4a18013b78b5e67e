pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::RailwayClient;
pub use app::{build_router, AppState};
pub use config::{CliConfig, ServiceConfig};
pub use domain::ports::GraphQLGateway;
pub use utils::error::{ApiError, OpsError, Result};
