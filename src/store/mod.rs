// store/mod.rs — In-memory entity stores.
//
// Each entity type gets an owned, thread-guarded collection behind an
// explicit repository interface (create / list / get / update / delete).
// No persistence: state lives for the process lifetime and is lost on
// restart. Ids come from a per-store monotonic counter, never from the
// collection length, so an id is never reused after a deletion.

pub mod categories;
pub mod tasks;
pub mod users;

pub use categories::CategoryStore;
pub use tasks::TaskStore;
pub use users::UserStore;

/// The three entity stores, shared through `AppContext`.
#[derive(Default)]
pub struct Store {
    pub users: UserStore,
    pub categories: CategoryStore,
    pub tasks: TaskStore,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }
}
