use error_stack::Report;

pub type RepoResult<T> = Result<T, Report<PersonRepoError>>;
pub type OptRepoResult<T> = Result<Option<T>, Report<PersonRepoError>>;

#[derive(Debug, thiserror::Error)]
pub enum PersonRepoError {
    #[error("failed to find person")]
    FindById,
    #[error("failed to save person")]
    Save,
}
