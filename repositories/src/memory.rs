use error_stack::{IntoReport, ResultExt};
use people_core::PersonRepository;
use people_core::model::{NewPerson, Person, PersonId};
use people_core::result::{OptRepoResult, PersonRepoError, RepoResult};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Keeps people in process memory. Identifiers are handed out sequentially, starting after
/// the largest identifier already stored.
#[derive(Debug, Clone, Default)]
pub struct PersonRepo {
    store: Arc<RwLock<Store>>,
}

#[derive(Debug, Default)]
struct Store {
    people: BTreeMap<PersonId, Person>,
    last_id: i64,
}

impl Store {
    fn next_id(&mut self) -> Option<PersonId> {
        self.last_id = self.last_id.checked_add(1)?;
        Some(PersonId(self.last_id))
    }
}

impl PersonRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository already holding `people`, keyed by their existing identifiers.
    pub fn with_people<I>(people: I) -> Self
    where
        I: IntoIterator<Item = Person>,
    {
        let people: BTreeMap<_, _> = people.into_iter().map(|p| (p.id, p)).collect();
        let last_id = people.keys().next_back().map_or(0, |id| id.0.max(0));

        Self {
            store: Arc::new(RwLock::new(Store { people, last_id })),
        }
    }
}

impl PersonRepository for PersonRepo {
    async fn find_by_id(&self, id: PersonId) -> OptRepoResult<Person> {
        Ok(self.store.read().await.people.get(&id).cloned())
    }

    async fn save(&self, person: NewPerson) -> RepoResult<Person> {
        let mut store = self.store.write().await;

        let id = store
            .next_id()
            .ok_or_else(|| PersonRepoError::Save.into_report())
            .attach("no identifiers left to assign")?;

        let person = Person::from_new(id, person);
        store.people.insert(id, person.clone());
        debug!("stored person {id} in memory");

        Ok(person)
    }
}
