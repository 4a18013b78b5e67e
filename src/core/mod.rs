pub mod deployment;
pub mod queries;
pub mod response;
pub mod secret;
pub mod service;
pub mod variables;

#[cfg(test)]
pub(crate) mod testing;

pub use crate::domain::model::*;
pub use crate::domain::ports::GraphQLGateway;
pub use crate::utils::error::Result;
