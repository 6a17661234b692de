use crate::error::PersonServiceError;
use crate::metrics;
use crate::{OptServiceResult, ServiceResult};
use error_stack::ResultExt;
use people_core::model::{NewPerson, Person, PersonId};
use people_core::{PersonEngine, PersonRepository};
use tracing::instrument;

#[derive(Debug, Clone)]
pub struct PersonService<E> {
    engine: E,
}

impl<E> PersonService<E>
where
    E: PersonEngine,
{
    pub fn new(engine: E) -> Self {
        PersonService { engine }
    }

    #[instrument(skip_all, name = "service#get")]
    pub async fn get(&self, id: PersonId) -> OptServiceResult<Person> {
        let person = self
            .engine
            .repo()
            .find_by_id(id)
            .await
            .change_context(PersonServiceError)?;

        if person.is_some() {
            metrics::increment_people_retrieved();
        }
        Ok(person)
    }

    #[instrument(skip_all, name = "service#create")]
    pub async fn create(&self, new_person: NewPerson) -> ServiceResult<Person> {
        let person = self
            .engine
            .repo()
            .save(new_person)
            .await
            .change_context(PersonServiceError)?;

        metrics::increment_people_created();
        Ok(person)
    }
}
