pub mod config;
mod error;
pub mod operations;
pub mod providers;
pub mod traits;
pub mod verification;

#[cfg(test)]
pub mod mocks;

pub use error::{OperationError, Result};
