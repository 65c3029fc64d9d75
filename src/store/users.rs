// store/users.rs — User entities and the user store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

fn default_theme() -> String {
    "light".to_string()
}

fn default_language() -> String {
    "es".to_string()
}

fn default_timezone() -> String {
    "UTC".to_string()
}

/// Display preferences. Each field is defaulted independently, so a
/// payload may set only the fields it cares about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            language: default_language(),
            timezone: default_timezone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub preferences: Preferences,
}

/// Creation / replacement payload. Also the body of `PUT /users/me` —
/// preferences are replaced wholesale, never merged.
#[derive(Debug, Deserialize)]
pub struct UserCreate {
    pub username: String,
    /// Not validated for format — any string is accepted.
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub preferences: Option<Preferences>,
}

/// Thread-guarded user store. The first stored user is the identity the
/// current-user operations address; the store technically permits more.
#[derive(Default)]
pub struct UserStore {
    users: RwLock<Vec<User>>,
    next_id: AtomicU64,
}

impl UserStore {
    /// Append a new user. No duplicate username/email check.
    pub async fn create(&self, payload: UserCreate) -> User {
        let user = User {
            id: self.next_id.fetch_add(1, Ordering::Relaxed) + 1,
            username: payload.username,
            email: payload.email,
            full_name: payload.full_name,
            created_at: Utc::now(),
            preferences: payload.preferences.unwrap_or_default(),
        };
        self.users.write().await.push(user.clone());
        user
    }

    /// The single identity this daemon serves: the first registered user.
    pub async fn current(&self) -> Option<User> {
        self.users.read().await.first().cloned()
    }

    /// Id of the first user, if any. Category creation stamps this as the
    /// owner regardless of what the caller sent.
    pub async fn current_id(&self) -> Option<u64> {
        self.users.read().await.first().map(|u| u.id)
    }

    /// Overwrite the current user's mutable fields in place. `id` and
    /// `created_at` are immutable. Returns `None` when the store is empty.
    pub async fn update_current(&self, payload: UserCreate) -> Option<User> {
        let mut users = self.users.write().await;
        let user = users.first_mut()?;
        user.username = payload.username;
        user.email = payload.email;
        user.full_name = payload.full_name;
        user.preferences = payload.preferences.unwrap_or_default();
        Some(user.clone())
    }

    /// Remove every user — a destructive wholesale clear, not a single
    /// deletion. Returns `false` when the store was already empty.
    pub async fn clear(&self) -> bool {
        let mut users = self.users.write().await;
        if users.is_empty() {
            return false;
        }
        users.clear();
        true
    }

    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }
}
