use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use tables_core::model::{QuizResult, QuizResultDraft, QuizResultId, TableNumber, UserId};
use tables_core::time::Clock;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error("connection error: {0}")]
    Connection(String),
}

/// A user account known to the store.
///
/// Holds identity only; authentication is out of scope for this system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
}

/// Repository contract for quiz results.
///
/// The store assigns identifiers and creation timestamps; read operations
/// return unordered collections (insertion order is not part of the
/// contract).
#[async_trait]
pub trait QuizResultRepository: Send + Sync {
    /// Persist a draft result, assigning its identifier and timestamp.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the result cannot be stored.
    async fn create_quiz_result(
        &self,
        draft: &QuizResultDraft,
    ) -> Result<QuizResult, StorageError>;

    /// Fetch all results recorded for a user.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on storage failures. An unknown user yields an
    /// empty collection, not `NotFound`.
    async fn results_by_user(&self, user_id: UserId) -> Result<Vec<QuizResult>, StorageError>;

    /// Fetch all results recorded for a table.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on storage failures.
    async fn results_by_table(&self, table: TableNumber) -> Result<Vec<QuizResult>, StorageError>;

    /// Fetch all results recorded for a user on one table.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on storage failures.
    async fn results_by_user_and_table(
        &self,
        user_id: UserId,
        table: TableNumber,
    ) -> Result<Vec<QuizResult>, StorageError>;
}

/// Repository contract for user accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a user, assigning its identifier.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Conflict` if the username is already taken.
    async fn create_user(&self, username: &str) -> Result<User, StorageError>;

    /// Fetch a user by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing.
    async fn get_user(&self, id: UserId) -> Result<User, StorageError>;

    /// Fetch a user by username.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing.
    async fn get_user_by_username(&self, username: &str) -> Result<User, StorageError>;
}

//
// ─── IN-MEMORY STORE ───────────────────────────────────────────────────────────
//

struct Inner {
    users: HashMap<UserId, User>,
    results: HashMap<QuizResultId, QuizResult>,
    next_user_id: u64,
    next_result_id: u64,
}

/// In-memory store standing in for a database.
///
/// Identifier sequences start at 1 and the record timestamp comes from the
/// injected [`Clock`], so tests observe fully deterministic records. The
/// store is an explicit value passed to its callers; there is no process
/// global.
#[derive(Clone)]
pub struct InMemoryStore {
    clock: Clock,
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            inner: Arc::new(Mutex::new(Inner {
                users: HashMap::new(),
                results: HashMap::new(),
                next_user_id: 1,
                next_result_id: 1,
            })),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>, StorageError> {
        self.inner
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new(Clock::default_clock())
    }
}

#[async_trait]
impl QuizResultRepository for InMemoryStore {
    async fn create_quiz_result(
        &self,
        draft: &QuizResultDraft,
    ) -> Result<QuizResult, StorageError> {
        let recorded_at = self.clock.now();
        let mut guard = self.lock()?;

        let id = QuizResultId::new(guard.next_result_id);
        guard.next_result_id += 1;

        let result = QuizResult::from_draft(id, draft, recorded_at);
        guard.results.insert(id, result.clone());
        Ok(result)
    }

    async fn results_by_user(&self, user_id: UserId) -> Result<Vec<QuizResult>, StorageError> {
        let guard = self.lock()?;
        Ok(guard
            .results
            .values()
            .filter(|result| result.user_id() == user_id)
            .cloned()
            .collect())
    }

    async fn results_by_table(&self, table: TableNumber) -> Result<Vec<QuizResult>, StorageError> {
        let guard = self.lock()?;
        Ok(guard
            .results
            .values()
            .filter(|result| result.table() == table)
            .cloned()
            .collect())
    }

    async fn results_by_user_and_table(
        &self,
        user_id: UserId,
        table: TableNumber,
    ) -> Result<Vec<QuizResult>, StorageError> {
        let guard = self.lock()?;
        Ok(guard
            .results
            .values()
            .filter(|result| result.user_id() == user_id && result.table() == table)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create_user(&self, username: &str) -> Result<User, StorageError> {
        let mut guard = self.lock()?;

        if guard.users.values().any(|user| user.username == username) {
            return Err(StorageError::Conflict);
        }

        let id = UserId::new(guard.next_user_id);
        guard.next_user_id += 1;

        let user = User {
            id,
            username: username.to_owned(),
        };
        guard.users.insert(id, user.clone());
        Ok(user)
    }

    async fn get_user(&self, id: UserId) -> Result<User, StorageError> {
        let guard = self.lock()?;
        guard.users.get(&id).cloned().ok_or(StorageError::NotFound)
    }

    async fn get_user_by_username(&self, username: &str) -> Result<User, StorageError> {
        let guard = self.lock()?;
        guard
            .users
            .values()
            .find(|user| user.username == username)
            .cloned()
            .ok_or(StorageError::NotFound)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
