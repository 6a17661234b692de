#[derive(Debug, thiserror::Error)]
#[error("person service failed")]
pub struct PersonServiceError;
