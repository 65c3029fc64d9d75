// store/categories.rs — Category entities and the category store.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    /// Owner — always the first user's id at creation time, immutable.
    pub user_id: u64,
}

#[derive(Debug, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Default)]
pub struct CategoryStore {
    categories: RwLock<Vec<Category>>,
    next_id: AtomicU64,
}

impl CategoryStore {
    pub async fn create(&self, payload: CategoryCreate, user_id: u64) -> Category {
        let category = Category {
            id: self.next_id.fetch_add(1, Ordering::Relaxed) + 1,
            name: payload.name,
            description: payload.description,
            color: payload.color,
            user_id,
        };
        self.categories.write().await.push(category.clone());
        category
    }

    /// All categories, unfiltered, in insertion order.
    pub async fn list(&self) -> Vec<Category> {
        self.categories.read().await.clone()
    }

    /// Overwrite name, description, and color in place. `id` and `user_id`
    /// are immutable. Returns `None` when no category has the given id.
    pub async fn update(&self, id: u64, payload: CategoryCreate) -> Option<Category> {
        let mut categories = self.categories.write().await;
        let category = categories.iter_mut().find(|c| c.id == id)?;
        category.name = payload.name;
        category.description = payload.description;
        category.color = payload.color;
        Some(category.clone())
    }

    /// Silent no-op when the id does not exist.
    pub async fn delete(&self, id: u64) {
        self.categories.write().await.retain(|c| c.id != id);
    }

    pub async fn count(&self) -> usize {
        self.categories.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str) -> CategoryCreate {
        CategoryCreate {
            name: name.to_string(),
            description: None,
            color: None,
        }
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids_and_owner() {
        let store = CategoryStore::default();
        let a = store.create(payload("work"), 1).await;
        let b = store.create(payload("home"), 1).await;
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(a.user_id, 1);
    }

    #[tokio::test]
    async fn list_keeps_insertion_order() {
        let store = CategoryStore::default();
        store.create(payload("work"), 1).await;
        store.create(payload("home"), 1).await;
        let names: Vec<String> = store.list().await.into_iter().map(|c| c.name).collect();
        assert_eq!(names, ["work", "home"]);
    }

    #[tokio::test]
    async fn update_overwrites_fields_but_not_identity() {
        let store = CategoryStore::default();
        store.create(payload("work"), 7).await;
        let updated = store
            .update(
                1,
                CategoryCreate {
                    name: "office".to_string(),
                    description: Some("desk things".to_string()),
                    color: Some("#ff0000".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.id, 1);
        assert_eq!(updated.user_id, 7);
        assert_eq!(updated.name, "office");
        assert_eq!(updated.color.as_deref(), Some("#ff0000"));
    }

    #[tokio::test]
    async fn update_missing_id_is_none() {
        let store = CategoryStore::default();
        assert!(store.update(99, payload("x")).await.is_none());
    }

    #[tokio::test]
    async fn delete_missing_id_is_a_silent_noop() {
        let store = CategoryStore::default();
        store.create(payload("work"), 1).await;
        store.delete(99).await;
        assert_eq!(store.count().await, 1);
        store.delete(1).await;
        assert_eq!(store.count().await, 0);
    }
}
