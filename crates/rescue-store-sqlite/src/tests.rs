//! Integration tests for `SqliteStore` against an in-memory database.

use rescue_core::{AnimalStore, NewAnimal};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn fido() -> NewAnimal {
  NewAnimal::new("Fido", "Dog", "2024-01-01", "available")
}

fn fully_populated() -> NewAnimal {
  NewAnimal {
    name:                    "Whiskers".into(),
    species:                 "Cat".into(),
    breed:                   Some("Tabby".into()),
    age:                     Some(3),
    sex:                     Some("female".into()),
    description:             Some("Shy at first".into()),
    arrival_date:            "2024-02-14".into(),
    health_status:           Some("healthy".into()),
    sterilisation_status:    Some(true),
    chip_number:             Some("900118000123456".into()),
    internal_notes:          Some("Prefers quiet rooms".into()),
    reason_onboarded:        Some("Owner surrender".into()),
    latest_vaccination_date: Some("2024-03-01".into()),
    current_location:        Some("Kennel 4".into()),
    status:                  "fostered".into(),
  }
}

// ─── Create / get ────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_assigns_positive_id_and_get_returns_input() {
  let s = store().await;

  let created = s.create_animal(fido()).await.unwrap();
  assert!(created.id > 0);
  assert_eq!(created.details, fido());

  let fetched = s.get_animal(created.id).await.unwrap();
  assert_eq!(fetched, created);
}

#[tokio::test]
async fn create_assigns_distinct_ids() {
  let s = store().await;
  let a = s.create_animal(fido()).await.unwrap();
  let b = s.create_animal(fido()).await.unwrap();
  assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn optional_attributes_roundtrip_when_present() {
  let s = store().await;

  let created = s.create_animal(fully_populated()).await.unwrap();
  let fetched = s.get_animal(created.id).await.unwrap();

  assert_eq!(fetched.details, fully_populated());
  assert_eq!(fetched.details.sterilisation_status, Some(true));
  assert_eq!(fetched.details.age, Some(3));
}

#[tokio::test]
async fn optional_attributes_stay_null_not_empty() {
  let s = store().await;

  let created = s.create_animal(fido()).await.unwrap();
  let fetched = s.get_animal(created.id).await.unwrap();

  assert_eq!(fetched.details.breed, None);
  assert_eq!(fetched.details.age, None);
  assert_eq!(fetched.details.sterilisation_status, None);
  assert_eq!(fetched.details.current_location, None);
}

#[tokio::test]
async fn zero_and_false_are_distinct_from_null() {
  let s = store().await;

  let mut input = fido();
  input.age = Some(0);
  input.sterilisation_status = Some(false);
  input.breed = Some(String::new());

  let created = s.create_animal(input.clone()).await.unwrap();
  let fetched = s.get_animal(created.id).await.unwrap();
  assert_eq!(fetched.details, input);
}

#[tokio::test]
async fn empty_required_fields_are_stored_as_is() {
  let s = store().await;

  let created = s.create_animal(NewAnimal::default()).await.unwrap();
  let fetched = s.get_animal(created.id).await.unwrap();
  assert_eq!(fetched.details.name, "");
  assert_eq!(fetched.details.status, "");
}

#[tokio::test]
async fn get_missing_id_is_an_error() {
  let s = store().await;
  assert!(s.get_animal(4242).await.is_err());
}

// ─── Replace ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn replace_overwrites_every_attribute() {
  let s = store().await;
  let created = s.create_animal(fully_populated()).await.unwrap();

  let mut replacement = fido();
  replacement.age = Some(7);

  let replaced = s
    .replace_animal(created.id, replacement.clone())
    .await
    .unwrap();
  assert_eq!(replaced.id, created.id);
  assert_eq!(replaced.details, replacement);

  // Attributes absent from the replacement are cleared, not merged.
  let fetched = s.get_animal(created.id).await.unwrap();
  assert_eq!(fetched.id, created.id);
  assert_eq!(fetched.details, replacement);
  assert_eq!(fetched.details.breed, None);
  assert_eq!(fetched.details.chip_number, None);
}

#[tokio::test]
async fn replace_missing_id_succeeds_without_creating() {
  let s = store().await;

  let replaced = s.replace_animal(99, fido()).await.unwrap();
  assert_eq!(replaced.id, 99);

  assert!(s.list_animals().await.unwrap().is_empty());
  assert!(s.get_animal(99).await.is_err());
}

// ─── Delete / list ───────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_then_get_is_an_error() {
  let s = store().await;
  let created = s.create_animal(fido()).await.unwrap();

  s.delete_animal(created.id).await.unwrap();
  assert!(s.get_animal(created.id).await.is_err());
}

#[tokio::test]
async fn delete_missing_id_succeeds() {
  let s = store().await;
  s.delete_animal(12345).await.unwrap();
}

#[tokio::test]
async fn deleted_ids_are_not_reused() {
  let s = store().await;
  let first = s.create_animal(fido()).await.unwrap();
  s.delete_animal(first.id).await.unwrap();

  let second = s.create_animal(fido()).await.unwrap();
  assert_ne!(second.id, first.id);
}

#[tokio::test]
async fn list_tracks_creates_and_deletes() {
  let s = store().await;
  assert!(s.list_animals().await.unwrap().is_empty());

  let mut ids = Vec::new();
  for _ in 0..3 {
    ids.push(s.create_animal(fido()).await.unwrap().id);
  }
  s.create_animal(fully_populated()).await.unwrap();

  let all = s.list_animals().await.unwrap();
  assert_eq!(all.len(), 4);
  assert!(all.iter().any(|a| a.details == fully_populated()));

  s.delete_animal(ids[1]).await.unwrap();
  let remaining = s.list_animals().await.unwrap();
  assert_eq!(remaining.len(), 3);
  assert!(remaining.iter().all(|a| a.id != ids[1]));
}

#[tokio::test]
async fn ping_succeeds_on_open_store() {
  let s = store().await;
  s.ping().await.unwrap();
}
