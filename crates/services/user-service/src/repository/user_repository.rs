//! In-memory user repository.
//!
//! Records and the identifier sequence live behind a single lock so that
//! every operation observes and mutates them as one unit.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use domain::{Page, UserId, UserInput, UserRecord, FIRST_USER_ID};

#[cfg(test)]
use mockall::automock;

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Removed,
    NotFound,
}

impl DeleteOutcome {
    pub fn is_removed(self) -> bool {
        matches!(self, DeleteOutcome::Removed)
    }
}

/// User repository trait for dependency injection.
///
/// Lookups report a miss as `None` (or [`DeleteOutcome::NotFound`]); none of
/// these operations can fail otherwise.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new record under the next identifier
    async fn create(&self, input: UserInput) -> UserRecord;

    /// Every record in insertion order, with metadata for `page`/`limit`
    async fn list(&self, page: i64, limit: i64) -> Page<UserRecord>;

    /// Find a record by identifier
    async fn find_by_id(&self, id: UserId) -> Option<UserRecord>;

    /// Replace contact fields of an existing record
    async fn update(&self, id: UserId, input: UserInput) -> Option<UserRecord>;

    /// Remove a record
    async fn delete(&self, id: UserId) -> DeleteOutcome;
}

#[derive(Debug)]
struct StoreState {
    // Identifiers only grow, so key order is insertion order.
    records: BTreeMap<UserId, UserRecord>,
    next_id: UserId,
}

/// Process-local user store guarded by a reader/writer lock.
#[derive(Debug)]
pub struct InMemoryUserStore {
    state: RwLock<StoreState>,
}

impl InMemoryUserStore {
    /// Create an empty store whose first identifier is 1
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                records: BTreeMap::new(),
                next_id: FIRST_USER_ID,
            }),
        }
    }

    /// Number of records currently held
    pub async fn len(&self) -> usize {
        self.state.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn create(&self, input: UserInput) -> UserRecord {
        let mut state = self.state.write().await;

        let id = state.next_id;
        state.next_id += 1;

        let record = UserRecord::new(id, input, Utc::now());
        state.records.insert(id, record.clone());
        record
    }

    async fn list(&self, page: i64, limit: i64) -> Page<UserRecord> {
        let state = self.state.read().await;
        let data: Vec<UserRecord> = state.records.values().cloned().collect();
        let total = data.len() as u64;
        Page::new(data, page, limit, total)
    }

    async fn find_by_id(&self, id: UserId) -> Option<UserRecord> {
        self.state.read().await.records.get(&id).cloned()
    }

    async fn update(&self, id: UserId, input: UserInput) -> Option<UserRecord> {
        let mut state = self.state.write().await;
        let record = state.records.get_mut(&id)?;
        record.apply(input, Utc::now());
        Some(record.clone())
    }

    async fn delete(&self, id: UserId) -> DeleteOutcome {
        match self.state.write().await.records.remove(&id) {
            Some(_) => DeleteOutcome::Removed,
            None => DeleteOutcome::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;

    fn input(name: &str) -> UserInput {
        UserInput::new(name, format!("{}@x.com", name.to_lowercase()))
    }

    #[tokio::test]
    async fn identifiers_start_at_one_and_increase() {
        let store = InMemoryUserStore::new();

        let first = store.create(input("Ana")).await;
        let second = store.create(input("Bo")).await;
        let third = store.create(input("Cy")).await;

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn deleted_identifiers_are_never_reused() {
        let store = InMemoryUserStore::new();
        store.create(input("Ana")).await;
        let bo = store.create(input("Bo")).await;

        assert_eq!(store.delete(bo.id).await, DeleteOutcome::Removed);
        let next = store.create(input("Cy")).await;

        assert_eq!(next.id, 3);
        assert!(store.find_by_id(bo.id).await.is_none());
    }

    #[tokio::test]
    async fn created_record_is_retrievable() {
        let store = InMemoryUserStore::new();
        let created = store
            .create(UserInput::new("Ana", "a@x.com").with_phone("555"))
            .await;

        let found = store.find_by_id(created.id).await.unwrap();

        assert_eq!(found, created);
        assert_eq!(found.name, "Ana");
        assert_eq!(found.email, "a@x.com");
        assert_eq!(found.phone.as_deref(), Some("555"));
        assert!(found.active);
    }

    #[tokio::test]
    async fn update_preserves_identity_and_refreshes_timestamp() {
        let store = InMemoryUserStore::new();
        let created = store.create(input("Ana")).await;

        let updated = store
            .update(created.id, UserInput::new("Ana Maria", "am@x.com"))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.active, created.active);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.name, "Ana Maria");
        assert_eq!(updated.email, "am@x.com");
        assert_eq!(updated.phone, None);
        assert_eq!(store.find_by_id(created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn missing_identifier_is_a_miss_everywhere() {
        let store = InMemoryUserStore::new();
        store.create(input("Ana")).await;

        assert!(store.find_by_id(42).await.is_none());
        assert!(store.update(42, input("Bo")).await.is_none());
        assert_eq!(store.delete(42).await, DeleteOutcome::NotFound);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn delete_twice_reports_not_found_second_time() {
        let store = InMemoryUserStore::new();
        let ana = store.create(input("Ana")).await;

        assert!(store.delete(ana.id).await.is_removed());
        assert!(!store.delete(ana.id).await.is_removed());
    }

    #[tokio::test]
    async fn list_returns_every_record_in_insertion_order() {
        let store = InMemoryUserStore::new();
        for name in ["Ana", "Bo", "Cy", "Di", "Ed"] {
            store.create(input(name)).await;
        }
        store.delete(2).await;

        let page = store.list(1, 2).await;

        let ids: Vec<UserId> = page.data.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 3, 4, 5]);
        assert_eq!(page.pagination.total, 4);
        assert_eq!(page.pagination.total_pages, 2);
        assert_eq!(page.pagination.page, 1);
        assert_eq!(page.pagination.limit, 2);
    }

    #[tokio::test]
    async fn list_on_empty_store_has_no_pages() {
        let store = InMemoryUserStore::new();

        let page = store.list(1, 10).await;

        assert!(page.data.is_empty());
        assert_eq!(page.pagination.total, 0);
        assert_eq!(page.pagination.total_pages, 0);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn create_then_delete_scenario() {
        let store = InMemoryUserStore::new();
        let ana = store.create(UserInput::new("Ana", "a@x.com")).await;
        let bo = store.create(UserInput::new("Bo", "b@x.com")).await;
        assert_eq!((ana.id, bo.id), (1, 2));

        assert_eq!(store.delete(1).await, DeleteOutcome::Removed);

        let page = store.list(1, 10).await;
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].id, 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_assign_distinct_sequential_ids() {
        let store = Arc::new(InMemoryUserStore::new());

        let handles: Vec<_> = (0..100)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.create(input(&format!("U{i}"))).await.id })
            })
            .collect();

        let mut ids = Vec::with_capacity(100);
        for handle in handles {
            ids.push(handle.await.unwrap());
        }

        let unique: HashSet<UserId> = ids.iter().copied().collect();
        assert_eq!(unique.len(), 100);

        ids.sort_unstable();
        assert_eq!(ids, (1..=100).collect::<Vec<UserId>>());

        let page = store.list(1, 10).await;
        assert_eq!(page.data.len(), 100);
        assert_eq!(page.pagination.total_pages, 10);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn list_sees_every_create_that_has_returned() {
        let store = Arc::new(InMemoryUserStore::new());

        let writer = {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                let mut returned = Vec::new();
                for i in 0..50 {
                    let id = store.create(input(&format!("W{i}"))).await.id;
                    returned.push(id);
                    let listed = store.list(1, 10).await;
                    assert!(listed.data.iter().any(|u| u.id == id));
                }
                returned
            })
        };

        let reader = {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                for _ in 0..50 {
                    let page = store.list(1, 10).await;
                    assert_eq!(page.pagination.total as usize, page.data.len());
                    let ids: Vec<UserId> = page.data.iter().map(|u| u.id).collect();
                    assert!(ids.windows(2).all(|w| w[0] < w[1]));
                }
            })
        };

        let returned = writer.await.unwrap();
        reader.await.unwrap();
        assert_eq!(returned.len(), 50);
    }
}
