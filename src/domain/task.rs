use super::enums::{EnergyLevel, Priority, TaskStatus};
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Allowed progress stops (quarter steps)
pub const PROGRESS_STEPS: [u8; 5] = [0, 25, 50, 75, 100];

/// A checklist entry inside a task
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subtask {
    pub id: Uuid,
    pub text: String,
    pub completed: bool,
}

impl Subtask {
    pub fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            completed: false,
        }
    }
}

/// A board task
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: Priority,
    /// Defaults to Medium when unset (older records omit it)
    #[serde(default)]
    pub energy_level: Option<EnergyLevel>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub label_ids: Vec<String>,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
    /// Completion progress, one of 0/25/50/75/100
    #[serde(default)]
    pub progress: u8,
    pub created_at: DateTime<Local>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Local>>,
    /// Membership in the capped "Today's 3" working set
    #[serde(default)]
    pub is_today_task: bool,
}

impl Task {
    pub fn new(title: String, priority: Priority) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description: None,
            status: TaskStatus::Active,
            priority,
            energy_level: None,
            due_date: None,
            label_ids: Vec::new(),
            subtasks: Vec::new(),
            progress: 0,
            created_at: Local::now(),
            completed_at: None,
            is_today_task: false,
        }
    }

    /// Energy level with the Medium default applied
    pub fn effective_energy_level(&self) -> EnergyLevel {
        self.energy_level.unwrap_or(EnergyLevel::Medium)
    }

    pub fn is_active(&self) -> bool {
        self.status == TaskStatus::Active
    }

    /// Snap an arbitrary value to the nearest allowed progress stop
    pub fn snap_progress(value: i16) -> u8 {
        let clamped = value.clamp(0, 100) as u8;
        *PROGRESS_STEPS
            .iter()
            .min_by_key(|step| (**step as i16 - clamped as i16).abs())
            .unwrap_or(&0)
    }

    /// Step progress one quarter forward (caps at 100)
    pub fn step_progress_up(&mut self) {
        self.progress = Self::snap_progress(self.progress as i16 + 25);
    }

    /// Step progress one quarter back (floors at 0)
    pub fn step_progress_down(&mut self) {
        self.progress = Self::snap_progress(self.progress as i16 - 25);
    }

    /// Archive (soft-delete). Marks complete, records the time, and
    /// drops the task from the today set.
    pub fn archive(&mut self) {
        self.status = TaskStatus::Archived;
        self.progress = 100;
        self.completed_at = Some(Local::now());
        self.is_today_task = false;
    }

    /// Restore an archived task to the active board
    pub fn restore(&mut self) {
        self.status = TaskStatus::Active;
        self.completed_at = None;
    }

    pub fn cycle_priority(&mut self) {
        self.priority = self.priority.cycle();
    }

    pub fn cycle_energy_level(&mut self) {
        self.energy_level = Some(self.effective_energy_level().cycle());
    }

    pub fn add_subtask(&mut self, text: String) {
        self.subtasks.push(Subtask::new(text));
    }

    /// Completed / total subtask counts for display
    pub fn subtask_counts(&self) -> (usize, usize) {
        let done = self.subtasks.iter().filter(|s| s.completed).count();
        (done, self.subtasks.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_new_defaults() {
        let task = Task::new("Write proposal".to_string(), Priority::High);
        assert_eq!(task.status, TaskStatus::Active);
        assert_eq!(task.progress, 0);
        assert!(!task.is_today_task);
        assert!(task.energy_level.is_none());
        assert_eq!(task.effective_energy_level(), EnergyLevel::Medium);
    }

    #[test]
    fn test_snap_progress() {
        assert_eq!(Task::snap_progress(0), 0);
        assert_eq!(Task::snap_progress(10), 0);
        assert_eq!(Task::snap_progress(13), 25);
        assert_eq!(Task::snap_progress(60), 50);
        assert_eq!(Task::snap_progress(85), 75);
        assert_eq!(Task::snap_progress(95), 100);
        assert_eq!(Task::snap_progress(130), 100);
        assert_eq!(Task::snap_progress(-25), 0);
    }

    #[test]
    fn test_step_progress() {
        let mut task = Task::new("Test".to_string(), Priority::Medium);
        task.step_progress_up();
        assert_eq!(task.progress, 25);
        task.step_progress_up();
        task.step_progress_up();
        task.step_progress_up();
        assert_eq!(task.progress, 100);
        task.step_progress_up();
        assert_eq!(task.progress, 100); // Caps at 100

        task.step_progress_down();
        assert_eq!(task.progress, 75);
    }

    #[test]
    fn test_archive_and_restore() {
        let mut task = Task::new("Test".to_string(), Priority::Low);
        task.is_today_task = true;
        task.progress = 50;

        task.archive();
        assert_eq!(task.status, TaskStatus::Archived);
        assert_eq!(task.progress, 100);
        assert!(task.completed_at.is_some());
        assert!(!task.is_today_task);

        task.restore();
        assert_eq!(task.status, TaskStatus::Active);
        assert!(task.completed_at.is_none());
    }

    #[test]
    fn test_subtask_counts() {
        let mut task = Task::new("Test".to_string(), Priority::Medium);
        task.add_subtask("one".to_string());
        task.add_subtask("two".to_string());
        task.subtasks[0].completed = true;
        assert_eq!(task.subtask_counts(), (1, 2));
    }

    #[test]
    fn test_task_roundtrips_with_camel_case_keys() {
        let task = Task::new("Test".to_string(), Priority::High);
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"isTodayTask\""));
        assert!(json.contains("\"labelIds\""));
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back.title, "Test");
    }

    #[test]
    fn test_missing_progress_defaults_to_zero() {
        // Records written before the progress field existed
        let json = r#"{
            "id": "4a3f4fd3-3df8-41b1-9b3b-5de430932202",
            "title": "Old record",
            "status": "active",
            "priority": "medium",
            "createdAt": "2024-03-01T09:00:00-05:00"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.progress, 0);
        assert!(!task.is_today_task);
        assert!(task.subtasks.is_empty());
    }
}
