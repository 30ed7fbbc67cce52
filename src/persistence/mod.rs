pub mod files;
pub mod migration;
pub mod store;

pub use files::{atomic_write, ensure_flow_dir, get_flow_dir, init_local_flow_dir};
pub use migration::load_and_migrate;
pub use store::{
    Store, StoreError, ANALYTICS_KEY, LABELS_KEY, LEGACY_TASKS_KEY, QUICK_TODOS_KEY, SETTINGS_KEY,
    TASKS_KEY, USER_STATE_KEY,
};
