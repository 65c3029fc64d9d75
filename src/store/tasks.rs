// store/tasks.rs — Task entities, filters, aggregates, and the task store.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

// ─── Entity types ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Urgent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

/// Error for a status string outside the four known values.
#[derive(Debug, thiserror::Error)]
#[error("unknown task status '{0}' — expected pending, in_progress, completed, or cancelled")]
pub struct UnknownStatus(pub String);

impl std::str::FromStr for TaskStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TaskStatus::Pending),
            "in_progress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            "cancelled" => Ok(TaskStatus::Cancelled),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    /// Referenced category — existence is not checked, may dangle.
    pub category_id: u64,
    /// Caller-supplied owner — existence is not checked, may dangle.
    pub user_id: u64,
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation, including status-only changes.
    pub updated_at: DateTime<Utc>,
    pub tags: Vec<String>,
}

/// Creation / replacement payload. Also the body of `PUT /tasks/{id}`.
#[derive(Debug, Deserialize)]
pub struct TaskCreate {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub category_id: u64,
    pub user_id: u64,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Optional equality filters for task listing. Both combine with AND
/// semantics; absent filters match everything.
#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub struct TaskListParams {
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
}

// ─── Aggregates ───────────────────────────────────────────────────────────────

/// Per-status task counts. Every status appears, zero-filled.
#[derive(Debug, Default, Serialize)]
pub struct StatusCounts {
    pub pending: u64,
    pub in_progress: u64,
    pub completed: u64,
    pub cancelled: u64,
}

#[derive(Debug, Serialize)]
pub struct TaskSummary {
    pub total_tasks: u64,
    pub by_status: StatusCounts,
    /// Tasks with a due_date strictly before today. Tasks without a
    /// due_date never count.
    pub overdue_tasks: u64,
}

#[derive(Debug, Serialize)]
pub struct ProductivityReport {
    pub completed_tasks: u64,
    /// Completed/total as a two-decimal percentage string, "0.00%" when
    /// no tasks exist.
    pub week_productivity: String,
}

// ─── TaskStore ────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct TaskStore {
    tasks: RwLock<Vec<Task>>,
    next_id: AtomicU64,
}

impl TaskStore {
    pub async fn create(&self, payload: TaskCreate) -> Task {
        let now = Utc::now();
        let task = Task {
            id: self.next_id.fetch_add(1, Ordering::Relaxed) + 1,
            title: payload.title,
            description: payload.description,
            priority: payload.priority,
            status: payload.status,
            category_id: payload.category_id,
            user_id: payload.user_id,
            due_date: payload.due_date,
            created_at: now,
            updated_at: now,
            tags: payload.tags,
        };
        self.tasks.write().await.push(task.clone());
        task
    }

    /// Tasks matching the filters, in insertion order.
    pub async fn list(&self, params: TaskListParams) -> Vec<Task> {
        self.tasks
            .read()
            .await
            .iter()
            .filter(|t| params.status.is_none_or(|s| t.status == s))
            .filter(|t| params.priority.is_none_or(|p| t.priority == p))
            .cloned()
            .collect()
    }

    pub async fn get(&self, id: u64) -> Option<Task> {
        self.tasks.read().await.iter().find(|t| t.id == id).cloned()
    }

    /// Overwrite every mutable field in place and refresh `updated_at`.
    /// `id` and `created_at` are immutable. Returns `None` on a missing id.
    pub async fn update(&self, id: u64, payload: TaskCreate) -> Option<Task> {
        let mut tasks = self.tasks.write().await;
        let task = tasks.iter_mut().find(|t| t.id == id)?;
        task.title = payload.title;
        task.description = payload.description;
        task.priority = payload.priority;
        task.status = payload.status;
        task.category_id = payload.category_id;
        task.user_id = payload.user_id;
        task.due_date = payload.due_date;
        task.tags = payload.tags;
        task.updated_at = Utc::now();
        Some(task.clone())
    }

    /// Status-only mutation; still refreshes `updated_at`.
    pub async fn set_status(&self, id: u64, status: TaskStatus) -> Option<Task> {
        let mut tasks = self.tasks.write().await;
        let task = tasks.iter_mut().find(|t| t.id == id)?;
        task.status = status;
        task.updated_at = Utc::now();
        Some(task.clone())
    }

    /// Silent no-op when the id does not exist.
    pub async fn delete(&self, id: u64) {
        self.tasks.write().await.retain(|t| t.id != id);
    }

    pub async fn count(&self) -> usize {
        self.tasks.read().await.len()
    }

    /// Aggregate counts over the whole task sequence. `today` is the
    /// overdue cutoff — a due_date strictly before it counts as overdue.
    pub async fn summary(&self, today: NaiveDate) -> TaskSummary {
        let tasks = self.tasks.read().await;
        let mut by_status = StatusCounts::default();
        for task in tasks.iter() {
            match task.status {
                TaskStatus::Pending => by_status.pending += 1,
                TaskStatus::InProgress => by_status.in_progress += 1,
                TaskStatus::Completed => by_status.completed += 1,
                TaskStatus::Cancelled => by_status.cancelled += 1,
            }
        }
        let overdue_tasks = tasks
            .iter()
            .filter(|t| t.due_date.is_some_and(|d| d < today))
            .count() as u64;
        TaskSummary {
            total_tasks: tasks.len() as u64,
            by_status,
            overdue_tasks,
        }
    }

    pub async fn productivity(&self) -> ProductivityReport {
        let tasks = self.tasks.read().await;
        let completed = tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Completed)
            .count();
        let week_productivity = if tasks.is_empty() {
            "0.00%".to_string()
        } else {
            format!("{:.2}%", completed as f64 / tasks.len() as f64 * 100.0)
        };
        ProductivityReport {
            completed_tasks: completed as u64,
            week_productivity,
        }
    }
}
