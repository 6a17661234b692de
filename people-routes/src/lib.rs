use crate::error::PersonServiceError;
use error_stack::Report;

pub type ServiceResult<T> = Result<T, Report<PersonServiceError>>;
pub type OptServiceResult<T> = Result<Option<T>, Report<PersonServiceError>>;
pub mod error;
mod metrics;
pub mod routes;
pub mod service;
pub mod state;
#[cfg(test)]
mod tests;
