use async_trait::async_trait;
use service_core::error::AppError;
use tokio::sync::RwLock;

use crate::models::Person;
use crate::services::store::{PersonStore, ReplaceOutcome};

/// Process-local store with the same matching rules as the Mongo store:
/// insertion order is kept, lookups hit the first exact match.
///
/// Used for tests and for running without a database (`PEOPLE_STORE=memory`).
#[derive(Default)]
pub struct InMemoryPersonStore {
    people: RwLock<Vec<Person>>,
}

impl InMemoryPersonStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_people(people: Vec<Person>) -> Self {
        Self {
            people: RwLock::new(people),
        }
    }

    pub async fn snapshot(&self) -> Vec<Person> {
        self.people.read().await.clone()
    }
}

#[async_trait]
impl PersonStore for InMemoryPersonStore {
    async fn find_all(&self) -> Result<Vec<Person>, AppError> {
        Ok(self.people.read().await.clone())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Person>, AppError> {
        Ok(self
            .people
            .read()
            .await
            .iter()
            .find(|p| p.name == name)
            .cloned())
    }

    async fn insert(&self, person: &Person) -> Result<(), AppError> {
        self.people.write().await.push(person.clone());
        Ok(())
    }

    async fn replace_by_name(
        &self,
        name: &str,
        person: &Person,
    ) -> Result<ReplaceOutcome, AppError> {
        let mut people = self.people.write().await;
        match people.iter_mut().find(|p| p.name == name) {
            Some(existing) => {
                *existing = person.clone();
                Ok(ReplaceOutcome::Replaced)
            }
            None => Ok(ReplaceOutcome::NotMatched),
        }
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn find_by_name_is_exact_and_case_sensitive() {
        let store = InMemoryPersonStore::with_people(vec![Person::new("Alice", "555-1000")]);

        assert!(store.find_by_name("alice").await.unwrap().is_none());
        assert!(store.find_by_name("Ali").await.unwrap().is_none());
        assert_eq!(
            store.find_by_name("Alice").await.unwrap(),
            Some(Person::new("Alice", "555-1000"))
        );
    }

    #[tokio::test]
    async fn duplicates_are_kept_and_first_match_wins() {
        let store = InMemoryPersonStore::new();
        store.insert(&Person::new("Alice", "1")).await.unwrap();
        store.insert(&Person::new("Alice", "2")).await.unwrap();

        assert_eq!(store.find_all().await.unwrap().len(), 2);
        assert_eq!(store.find_by_name("Alice").await.unwrap().unwrap().phone, "1");
    }

    #[tokio::test]
    async fn replace_swaps_whole_document() {
        let store = InMemoryPersonStore::with_people(vec![Person::new("Alice", "555-1000")]);

        let outcome = store
            .replace_by_name("Alice", &Person::new("Alicia", "555-2000"))
            .await
            .unwrap();

        assert_eq!(outcome, ReplaceOutcome::Replaced);
        assert!(store.find_by_name("Alice").await.unwrap().is_none());
        assert_eq!(store.snapshot().await, vec![Person::new("Alicia", "555-2000")]);
    }

    #[tokio::test]
    async fn replace_without_match_leaves_store_untouched() {
        let store = InMemoryPersonStore::with_people(vec![Person::new("Alice", "555-1000")]);

        let outcome = store
            .replace_by_name("Bob", &Person::new("Bob", "555-3000"))
            .await
            .unwrap();

        assert_eq!(outcome, ReplaceOutcome::NotMatched);
        assert_eq!(store.snapshot().await, vec![Person::new("Alice", "555-1000")]);
    }
}
