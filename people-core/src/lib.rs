use model::{NewPerson, Person, PersonId};
use result::{OptRepoResult, RepoResult};
use std::sync::Arc;

pub mod model;
pub mod result;

/// Hands out the repository the people service works against.
/// Implemented by the binary so the repository is chosen at startup rather than by the routes.
pub trait PersonEngine: Clone + Send + Sync + 'static {
    type Repo: PersonRepository + Send + Sync + 'static;

    fn repo(&self) -> Self::Repo;
}

pub trait PersonRepository {
    /// `None` when no person is stored under `id`.
    fn find_by_id(&self, id: PersonId) -> impl Future<Output = OptRepoResult<Person>> + Send;

    /// Persists `person` and returns it with the identifier the repository assigned.
    fn save(&self, person: NewPerson) -> impl Future<Output = RepoResult<Person>> + Send;
}

impl<T> PersonRepository for Arc<T>
where
    T: PersonRepository + Send + Sync,
{
    async fn find_by_id(&self, id: PersonId) -> OptRepoResult<Person> {
        (**self).find_by_id(id).await
    }

    async fn save(&self, person: NewPerson) -> RepoResult<Person> {
        (**self).save(person).await
    }
}
