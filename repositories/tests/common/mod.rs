//! Behaviour every person repository has to share, regardless of where people are stored.
use people_core::PersonRepository;
use people_core::model::{NewPerson, PersonDetails, PersonId};
use serde_json::json;

pub async fn find_with_no_data_returns_none<R: PersonRepository>(repo: R) {
    let result = repo.find_by_id(PersonId(99)).await.unwrap();

    assert!(result.is_none());
}

pub async fn save_then_find_returns_saved_person<R: PersonRepository>(repo: R) {
    let saved = repo.save(NewPerson::named("Alice")).await.unwrap();

    let found = repo
        .find_by_id(saved.id)
        .await
        .unwrap()
        .expect("recently saved person exists");

    assert_eq!(saved, found);
    assert_eq!("Alice", found.name);
}

pub async fn save_keeps_details<R: PersonRepository>(repo: R) {
    let mut details = PersonDetails::new();
    details.insert("email".to_string(), json!("bob@example.com"));
    details.insert("age".to_string(), json!(31));
    details.insert("address".to_string(), json!({"city": "Oslo", "zip": "0150"}));

    let saved = repo
        .save(NewPerson::new("Bob", details.clone()))
        .await
        .unwrap();
    let found = repo.find_by_id(saved.id).await.unwrap().unwrap();

    assert_eq!(details, saved.details);
    assert_eq!(details, found.details);
}

pub async fn saves_assign_distinct_ids<R: PersonRepository>(repo: R) {
    let first = repo.save(NewPerson::named("Alice")).await.unwrap();
    let second = repo.save(NewPerson::named("Alice")).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(
        "Alice",
        repo.find_by_id(second.id).await.unwrap().unwrap().name
    );
}

pub async fn concurrent_saves_assign_distinct_ids<R: PersonRepository>(repo: R) {
    let saves = (0..20).map(|i| repo.save(NewPerson::named(format!("person {i}"))));

    let saved = futures::future::join_all(saves).await;

    let mut ids = saved
        .into_iter()
        .map(|r| r.unwrap().id)
        .collect::<Vec<_>>();
    ids.sort();
    ids.dedup();
    assert_eq!(20, ids.len());
}

pub async fn repeated_finds_are_identical<R: PersonRepository>(repo: R) {
    let saved = repo.save(NewPerson::named("Carol")).await.unwrap();

    let first = repo.find_by_id(saved.id).await.unwrap();
    let second = repo.find_by_id(saved.id).await.unwrap();

    assert_eq!(first, second);
}
