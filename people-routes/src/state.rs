use crate::service::PersonService;
use axum::extract::FromRef;
use people_core::PersonEngine;

#[derive(Clone)]
pub struct PersonAppState<E: PersonEngine> {
    pub service: PersonService<E>,
}

impl<E: PersonEngine> PersonAppState<E> {
    pub fn new(engine: E) -> Self {
        Self {
            service: PersonService::new(engine),
        }
    }
}

impl<E: PersonEngine> FromRef<PersonAppState<E>> for PersonService<E> {
    fn from_ref(input: &PersonAppState<E>) -> Self {
        input.service.clone()
    }
}
