use super::store::{Store, LEGACY_TASKS_KEY, TASKS_KEY};
use crate::domain::{Priority, Task, TaskStatus};
use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use serde::Deserialize;
use uuid::Uuid;

/// The pre-progress task schema: three-column lifecycle, no progress
/// field, no today flag, millisecond timestamps. Deserialization only.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyTask {
    id: String,
    title: String,
    #[serde(default)]
    description: Option<String>,
    status: LegacyStatus,
    priority: Priority,
    #[serde(default)]
    due_date: Option<String>,
    #[serde(default)]
    label_ids: Vec<String>,
    created_at: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
enum LegacyStatus {
    #[serde(rename = "todo")]
    Todo,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "complete")]
    Complete,
}

fn millis_to_local(millis: i64) -> DateTime<Local> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.with_timezone(&Local))
        .unwrap_or_else(Local::now)
}

/// Convert one legacy record to the canonical schema.
/// `complete` becomes an archived task at 100% progress; everything
/// else lands on the active board at 0%.
fn migrate_task(legacy: LegacyTask) -> Task {
    let (status, progress, completed_at) = match legacy.status {
        LegacyStatus::Complete => (TaskStatus::Archived, 100, Some(millis_to_local(legacy.created_at))),
        LegacyStatus::Todo | LegacyStatus::InProgress => (TaskStatus::Active, 0, None),
    };

    Task {
        id: Uuid::parse_str(&legacy.id).unwrap_or_else(|_| Uuid::new_v4()),
        title: legacy.title,
        description: legacy.description,
        status,
        priority: legacy.priority,
        energy_level: None,
        due_date: legacy
            .due_date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()),
        label_ids: legacy.label_ids,
        subtasks: Vec::new(),
        progress,
        created_at: millis_to_local(legacy.created_at),
        completed_at,
        is_today_task: false,
    }
}

/// Load tasks on startup.
///
/// 1. If the versioned key exists, use it (missing fields default via serde).
/// 2. Otherwise, if the legacy key exists, migrate it and re-save under
///    the versioned key. The legacy key is left in place untouched.
/// 3. Otherwise, start with an empty board.
pub fn load_and_migrate(store: &Store) -> Result<Vec<Task>> {
    if store.contains(TASKS_KEY) {
        return Ok(store.get_or(TASKS_KEY, Vec::new()));
    }

    let legacy: Option<Vec<LegacyTask>> = store.read(LEGACY_TASKS_KEY).unwrap_or(None);
    match legacy {
        Some(old_tasks) => {
            let tasks: Vec<Task> = old_tasks.into_iter().map(migrate_task).collect();
            store.set(TASKS_KEY, &tasks)?;
            Ok(tasks)
        }
        None => Ok(Vec::new()),
    }
}
