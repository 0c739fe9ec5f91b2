/// In-memory user store
use chrono::Utc;
use indexmap::IndexMap;
use roster_core::{
    types::{CreateUser, UpdateUser, User, UserId},
    Result, RosterError,
};
use tokio::sync::RwLock;

/// In-memory keyed table of user records.
///
/// The table is process-scoped: empty at startup, discarded at exit. The
/// write lock covers every read-then-write sequence, so the email
/// uniqueness check and the insert or replace that follows are one atomic
/// step with respect to concurrent writers. Readers share the read lock and
/// never observe a half-applied write.
pub struct UserStore {
    users: RwLock<IndexMap<UserId, User>>,
}

impl UserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            users: RwLock::new(IndexMap::new()),
        }
    }

    /// Snapshot of all records in insertion order
    pub async fn list(&self) -> Vec<User> {
        self.users.read().await.values().cloned().collect()
    }

    /// Look up a record by ID
    pub async fn get(&self, id: &UserId) -> Result<User> {
        self.users
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| RosterError::UserNotFound(id.clone()))
    }

    /// Insert a new record with a fresh identity and both timestamps set to
    /// now. Fails with [`RosterError::DuplicateEmail`] when a live record
    /// already holds the email.
    pub async fn create(&self, payload: CreateUser) -> Result<User> {
        let mut users = self.users.write().await;

        if Self::email_taken(&users, &payload.email, None) {
            return Err(RosterError::DuplicateEmail(payload.email));
        }

        let user = User::new(
            payload.email,
            payload.name,
            payload.role.unwrap_or_default(),
        );
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    /// Replace a record's email, name, and role, preserving its identity
    /// and creation timestamp. An omitted role keeps the stored one. The
    /// update timestamp never regresses.
    pub async fn update(&self, id: &UserId, payload: UpdateUser) -> Result<User> {
        let mut users = self.users.write().await;

        let conflict = Self::email_taken(&users, &payload.email, Some(id));
        match users.get_mut(id) {
            None => Err(RosterError::UserNotFound(id.clone())),
            Some(_) if conflict => Err(RosterError::DuplicateEmail(payload.email)),
            Some(user) => {
                user.email = payload.email;
                user.name = payload.name;
                if let Some(role) = payload.role {
                    user.role = role;
                }
                user.updated_at = Utc::now().max(user.updated_at);
                Ok(user.clone())
            }
        }
    }

    /// Remove a record outright; no tombstone is kept
    pub async fn delete(&self, id: &UserId) -> Result<()> {
        let mut users = self.users.write().await;
        match users.shift_remove(id) {
            Some(_) => Ok(()),
            None => Err(RosterError::UserNotFound(id.clone())),
        }
    }

    fn email_taken(users: &IndexMap<UserId, User>, email: &str, exclude: Option<&UserId>) -> bool {
        users
            .values()
            .filter(|user| exclude != Some(&user.id))
            .any(|user| user.email.eq_ignore_ascii_case(email))
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
