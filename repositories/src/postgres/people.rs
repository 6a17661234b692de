use crate::postgres::RepoInitErr;
use crate::postgres::statements;
use deadpool_postgres::{Object, Pool};
use error_stack::{Report, ResultExt};
use people_core::PersonRepository;
use people_core::model::{NewPerson, Person, PersonDetails, PersonId};
use people_core::result::{OptRepoResult, PersonRepoError, RepoResult};
use tokio_postgres::Row;
use tokio_postgres::types::Json;
use tracing::debug;

#[derive(Clone)]
pub struct PersonRepo {
    pool: Pool,
}

impl PersonRepo {
    pub async fn new(pool: Pool) -> Result<Self, Report<RepoInitErr>> {
        let client = pool.get().await.change_context(RepoInitErr)?;
        statements::prepare_all(&client)
            .await
            .change_context(RepoInitErr)?;
        drop(client);

        Ok(Self { pool })
    }

    async fn client(&self, on_err: PersonRepoError) -> RepoResult<Object> {
        self.pool.get().await.change_context(on_err)
    }
}

impl std::fmt::Debug for PersonRepo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersonRepo")
            .field("pool_status", &self.pool.status())
            .finish()
    }
}

fn row_to_person(row: Row) -> Person {
    let details: Json<PersonDetails> = row.get("details");
    Person::new(PersonId(row.get("id")), row.get("name"), details.0)
}

impl PersonRepository for PersonRepo {
    async fn find_by_id(&self, id: PersonId) -> OptRepoResult<Person> {
        let client = self.client(PersonRepoError::FindById).await?;
        let statement = statements::find_by_id(&client)
            .await
            .change_context(PersonRepoError::FindById)?;

        let person = client
            .query_opt(&statement, &[&id.0])
            .await
            .change_context(PersonRepoError::FindById)
            .attach_with(|| format!("person id {id}"))?
            .map(row_to_person);
        Ok(person)
    }

    async fn save(&self, person: NewPerson) -> RepoResult<Person> {
        let client = self.client(PersonRepoError::Save).await?;
        let statement = statements::save(&client)
            .await
            .change_context(PersonRepoError::Save)?;

        let saved = client
            .query_one(&statement, &[&person.name, &Json(&person.details)])
            .await
            .change_context(PersonRepoError::Save)
            .map(row_to_person)?;

        debug!("saved person {}", saved.id);
        Ok(saved)
    }
}
