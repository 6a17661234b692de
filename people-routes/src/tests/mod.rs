//! These tests pin down the contract of the HTTP API: status codes, bodies, and what
//! reaches the repository.
use crate::routes;
use crate::state::PersonAppState;
use axum_test::TestServer;
use mockall::automock;
use people_core::model::{NewPerson, Person, PersonId};
use people_core::result::{OptRepoResult, RepoResult};
use people_core::{PersonEngine, PersonRepository};
use std::sync::Arc;


struct TestEngine<R> {
    repo: Arc<R>,
}

impl<R> TestEngine<R> {
    fn new(repo: R) -> Self {
        Self {
            repo: Arc::new(repo),
        }
    }
}

impl<R> Clone for TestEngine<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<R> PersonEngine for TestEngine<R>
where
    R: PersonRepository + Send + Sync + 'static,
{
    type Repo = Arc<R>;

    fn repo(&self) -> Self::Repo {
        Arc::clone(&self.repo)
    }
}

struct PersonRepo;

#[automock]
impl PersonRepository for PersonRepo {
    async fn find_by_id(&self, _id: PersonId) -> OptRepoResult<Person> {
        unreachable!()
    }

    async fn save(&self, _person: NewPerson) -> RepoResult<Person> {
        unreachable!()
    }
}

fn init_test_server<R>(repo: R) -> TestServer
where
    R: PersonRepository + Send + Sync + 'static,
{
    let routes = routes::build(PersonAppState::new(TestEngine::new(repo)), None);
    TestServer::new(routes).unwrap()
}
