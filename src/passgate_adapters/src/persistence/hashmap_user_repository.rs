use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use passgate_core::{Email, RepositoryError, UserRecord, UserRepository};

/// In-memory user repository for tests and embedding programs.
///
/// Clones share the same underlying map.
#[derive(Default, Clone)]
pub struct HashMapUserRepository {
    records: Arc<RwLock<HashMap<Email, UserRecord>>>,
}

impl HashMapUserRepository {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Inserts a record, replacing any existing record for the same email.
    pub async fn upsert(&self, record: UserRecord) {
        let mut records = self.records.write().await;
        records.insert(record.email().clone(), record);
    }
}

#[async_trait::async_trait]
impl UserRepository for HashMapUserRepository {
    async fn find_by_email(&self, email: &Email) -> Result<Option<UserRecord>, RepositoryError> {
        let records = self.records.read().await;
        Ok(records.get(email).cloned())
    }
}
