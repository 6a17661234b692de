use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use utoipa::ToSchema;

/// Fields of a person beyond `id` and `name`. Stored and returned as given.
pub type PersonDetails = BTreeMap<String, Value>;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
#[repr(transparent)]
#[serde(transparent)]
pub struct PersonId(pub i64);

impl Display for PersonId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PersonId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    #[serde(flatten)]
    #[schema(value_type = BTreeMap<String, Value>)]
    pub details: PersonDetails,
}

impl Person {
    pub fn new(id: PersonId, name: String, details: PersonDetails) -> Self {
        Self { id, name, details }
    }

    pub fn from_new(id: PersonId, new_person: NewPerson) -> Self {
        Self::new(id, new_person.name, new_person.details)
    }
}

/// A person that has not been saved yet, so has no identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPerson {
    pub name: String,
    pub details: PersonDetails,
}

impl NewPerson {
    pub fn new(name: impl Into<String>, details: PersonDetails) -> Self {
        Self {
            name: name.into(),
            details,
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, PersonDetails::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn person_without_details_serializes_to_id_and_name() {
        let person = Person::new(PersonId(1), "Alice".to_string(), PersonDetails::new());

        let value = serde_json::to_value(&person).unwrap();

        assert_eq!(json!({"id": 1, "name": "Alice"}), value);
    }

    #[test]
    fn details_are_flattened_next_to_name() {
        let mut details = PersonDetails::new();
        details.insert("age".to_string(), json!(42));
        details.insert("tags".to_string(), json!(["a", "b"]));
        let person = Person::new(PersonId(3), "Carol".to_string(), details);

        let value = serde_json::to_value(&person).unwrap();

        assert_eq!(
            json!({"id": 3, "name": "Carol", "age": 42, "tags": ["a", "b"]}),
            value
        );
    }

    #[test]
    fn person_deserializes_unknown_fields_into_details() {
        let person: Person =
            serde_json::from_value(json!({"id": 5, "name": "Dave", "city": "Oslo"})).unwrap();

        assert_eq!(PersonId(5), person.id);
        assert_eq!("Dave", person.name);
        assert_eq!(Some(&json!("Oslo")), person.details.get("city"));
    }

    #[test]
    fn person_id_is_a_bare_integer_on_the_wire() {
        assert_eq!(json!(17), serde_json::to_value(PersonId(17)).unwrap());
        assert_eq!(PersonId(-4), serde_json::from_value(json!(-4)).unwrap());
    }

    #[test]
    fn from_new_keeps_name_and_details() {
        let mut details = PersonDetails::new();
        details.insert("email".to_string(), json!("bob@example.com"));

        let person = Person::from_new(PersonId(2), NewPerson::new("Bob", details.clone()));

        assert_eq!(PersonId(2), person.id);
        assert_eq!("Bob", person.name);
        assert_eq!(details, person.details);
    }
}
