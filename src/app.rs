use crate::domain::{
    default_labels, EnergyLevel, Label, Priority, QuickTodo, Task, TaskStatus, UiMode, UserState,
};
use crate::energy::{self, EnergyZone, TimeInfo};
use crate::notifications;
use crate::persistence::{
    load_and_migrate, Store, ANALYTICS_KEY, LABELS_KEY, QUICK_TODOS_KEY, SETTINGS_KEY, TASKS_KEY,
    USER_STATE_KEY,
};
use crate::settings::{EnergyAnalytics, EnergySettings};
use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate, Timelike};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Hard cap on the size of the today set
pub const TODAY_TASK_CAP: usize = 3;

/// The day's check-in: which state the user reported and when.
/// The timestamp drives the time-of-day budget adjustment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckIn {
    pub state: UserState,
    pub timestamp: DateTime<Local>,
}

/// Number of focusable fields in the task form (title, description,
/// due date, labels)
pub const TASK_FORM_FIELDS: usize = 4;

/// Input form state for adding or editing a task
#[derive(Debug, Clone)]
pub struct TaskFormState {
    pub title: String,
    pub description: String,
    /// Free text, parsed as YYYY-MM-DD on submit
    pub due_date: String,
    pub label_ids: Vec<String>,
    pub priority: Priority,
    pub energy_level: EnergyLevel,
    pub editing_field: usize, // 0 = title, 1 = description, 2 = due date, 3 = labels
    /// Set when editing an existing task
    pub editing_id: Option<Uuid>,
}

impl TaskFormState {
    fn blank() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            due_date: String::new(),
            label_ids: Vec::new(),
            priority: Priority::Medium,
            energy_level: EnergyLevel::Medium,
            editing_field: 0,
            editing_id: None,
        }
    }

    fn for_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            due_date: task.due_date.map(|d| d.to_string()).unwrap_or_default(),
            label_ids: task.label_ids.clone(),
            priority: task.priority,
            energy_level: task.effective_energy_level(),
            editing_field: 0,
            editing_id: Some(task.id),
        }
    }

    fn toggle_label(&mut self, id: &str) {
        match self.label_ids.iter().position(|l| l == id) {
            Some(pos) => {
                self.label_ids.remove(pos);
            }
            None => self.label_ids.push(id.to_string()),
        }
    }
}

/// Draft settings being edited in the settings form
#[derive(Debug, Clone)]
pub struct SettingsFormState {
    pub draft: EnergySettings,
    pub field: usize,
    pub warnings: Vec<String>,
}

/// Number of editable fields in the settings form (three budgets, three
/// priority weights, three energy weights, window start)
pub const SETTINGS_FIELD_COUNT: usize = 10;

impl SettingsFormState {
    fn new(settings: &EnergySettings) -> Self {
        Self {
            draft: settings.clone(),
            field: 0,
            warnings: Vec::new(),
        }
    }

    fn field_mut(&mut self) -> &mut u32 {
        match self.field {
            0 => &mut self.draft.grounded,
            1 => &mut self.draft.scattered,
            2 => &mut self.draft.tired,
            3 => &mut self.draft.priority_high,
            4 => &mut self.draft.priority_med,
            5 => &mut self.draft.priority_low,
            6 => &mut self.draft.energy_high,
            7 => &mut self.draft.energy_med,
            8 => &mut self.draft.energy_low,
            _ => &mut self.draft.work_window_start,
        }
    }

    pub fn adjust(&mut self, delta: i32) {
        let is_window = self.field == SETTINGS_FIELD_COUNT - 1;
        let value = self.field_mut();
        let next = *value as i64 + i64::from(delta);
        // The window hour wraps in both directions; point values floor at 0
        *value = if is_window {
            next.rem_euclid(24) as u32
        } else {
            next.max(0) as u32
        };
        self.warnings = self.draft.validate();
    }

    pub fn next_field(&mut self) {
        self.field = (self.field + 1) % SETTINGS_FIELD_COUNT;
    }

    pub fn prev_field(&mut self) {
        self.field = (self.field + SETTINGS_FIELD_COUNT - 1) % SETTINGS_FIELD_COUNT;
    }
}

/// Main application state
pub struct AppState {
    pub store: Store,
    pub tasks: Vec<Task>,
    pub labels: Vec<Label>,
    pub quick_todos: Vec<QuickTodo>,
    pub settings: EnergySettings,
    pub analytics: EnergyAnalytics,
    pub checkin: Option<CheckIn>,

    pub ui_mode: UiMode,
    pub selected_index: usize,
    pub show_archived: bool,
    pub task_form: Option<TaskFormState>,
    pub settings_form: Option<SettingsFormState>,
    pub todo_input: String,
    pub checkin_cursor: usize,
    pub pending_delete: Option<Uuid>,

    pub needs_save: bool,
    pub settings_need_save: bool,
    pub todos_need_save: bool,
    /// Zone at the last poll, for detecting the transition into overload
    last_zone: Option<EnergyZone>,
}

impl AppState {
    /// Load everything from the store. A stale check-in (from a previous
    /// day) is discarded so each day starts fresh.
    pub fn load(store: Store) -> Result<Self> {
        let tasks = load_and_migrate(&store)?;
        let labels = store.get_or(LABELS_KEY, default_labels());
        let quick_todos = store.get_or(QUICK_TODOS_KEY, Vec::new());
        let settings = store.get_or(SETTINGS_KEY, EnergySettings::default());
        let analytics = store.get_or(ANALYTICS_KEY, EnergyAnalytics::default());

        let checkin: Option<CheckIn> = store.get_or(USER_STATE_KEY, None);
        let checkin = match checkin {
            Some(c) if c.timestamp.date_naive() == Local::now().date_naive() => Some(c),
            Some(_) => {
                store.remove(USER_STATE_KEY)?;
                None
            }
            None => None,
        };

        Ok(Self {
            store,
            tasks,
            labels,
            quick_todos,
            settings,
            analytics,
            checkin,
            ui_mode: UiMode::Normal,
            selected_index: 0,
            show_archived: false,
            task_form: None,
            settings_form: None,
            todo_input: String::new(),
            checkin_cursor: 0,
            pending_delete: None,
            needs_save: false,
            settings_need_save: false,
            todos_need_save: false,
            last_zone: None,
        })
    }

    // --- selection over the visible pane ---

    /// Indices (into `tasks`) of the rows in the visible pane
    pub fn visible_indices(&self) -> Vec<usize> {
        let wanted = if self.show_archived {
            TaskStatus::Archived
        } else {
            TaskStatus::Active
        };
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.status == wanted)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn selected_task(&self) -> Option<&Task> {
        let visible = self.visible_indices();
        visible.get(self.selected_index).map(|&i| &self.tasks[i])
    }

    pub fn selected_task_mut(&mut self) -> Option<&mut Task> {
        let visible = self.visible_indices();
        let idx = *visible.get(self.selected_index)?;
        self.tasks.get_mut(idx)
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.visible_indices().len() {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_indices().len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    /// Swap the selected task with its previous visible neighbor
    pub fn move_task_up(&mut self) {
        let visible = self.visible_indices();
        if self.selected_index == 0 || self.selected_index >= visible.len() {
            return;
        }
        self.tasks
            .swap(visible[self.selected_index], visible[self.selected_index - 1]);
        self.selected_index -= 1;
        self.needs_save = true;
    }

    /// Swap the selected task with its next visible neighbor
    pub fn move_task_down(&mut self) {
        let visible = self.visible_indices();
        if self.selected_index + 1 >= visible.len() {
            return;
        }
        self.tasks
            .swap(visible[self.selected_index], visible[self.selected_index + 1]);
        self.selected_index += 1;
        self.needs_save = true;
    }

    pub fn toggle_show_archived(&mut self) {
        self.show_archived = !self.show_archived;
        self.selected_index = 0;
    }

    // --- today set ---

    pub fn today_tasks(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.is_active() && t.is_today_task)
            .collect()
    }

    /// Whether there is room left in the today set
    pub fn can_add_today_task(&self) -> bool {
        self.today_tasks().len() < TODAY_TASK_CAP
    }

    /// Toggle today membership for the selected task. Removing always
    /// works; adding past the cap is a silent no-op.
    pub fn toggle_today_selected(&mut self) {
        let can_add = self.can_add_today_task();
        if let Some(task) = self.selected_task_mut() {
            if !task.is_active() {
                return;
            }
            if task.is_today_task {
                task.is_today_task = false;
                self.needs_save = true;
            } else if can_add {
                task.is_today_task = true;
                self.needs_save = true;
            }
        }
    }

    // --- task mutations ---

    pub fn step_progress_up(&mut self) {
        if let Some(task) = self.selected_task_mut() {
            task.step_progress_up();
            self.needs_save = true;
        }
    }

    pub fn step_progress_down(&mut self) {
        if let Some(task) = self.selected_task_mut() {
            task.step_progress_down();
            self.needs_save = true;
        }
    }

    pub fn cycle_priority_selected(&mut self) {
        if let Some(task) = self.selected_task_mut() {
            task.cycle_priority();
            self.needs_save = true;
        }
    }

    pub fn cycle_energy_selected(&mut self) {
        if let Some(task) = self.selected_task_mut() {
            task.cycle_energy_level();
            self.needs_save = true;
        }
    }

    /// Archive the selected active task (soft-delete, restorable)
    pub fn archive_selected(&mut self) {
        if self.show_archived {
            return;
        }
        if let Some(task) = self.selected_task_mut() {
            task.archive();
            self.needs_save = true;
        }
        self.clamp_selection();
    }

    /// Restore the selected archived task to the board
    pub fn restore_selected(&mut self) {
        if !self.show_archived {
            return;
        }
        if let Some(task) = self.selected_task_mut() {
            task.restore();
            self.needs_save = true;
        }
        self.clamp_selection();
    }

    /// Ask for confirmation before a hard delete
    pub fn request_delete_selected(&mut self) {
        if let Some(task) = self.selected_task() {
            self.pending_delete = Some(task.id);
            self.ui_mode = UiMode::ConfirmDelete;
        }
    }

    pub fn confirm_delete(&mut self) {
        if let Some(id) = self.pending_delete.take() {
            self.tasks.retain(|t| t.id != id);
            self.needs_save = true;
        }
        self.ui_mode = UiMode::Normal;
        self.clamp_selection();
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
        self.ui_mode = UiMode::Normal;
    }

    // --- check-in ---

    pub fn start_check_in(&mut self) {
        self.checkin_cursor = self
            .checkin
            .as_ref()
            .and_then(|c| UserState::all().iter().position(|s| *s == c.state))
            .unwrap_or(0);
        self.ui_mode = UiMode::CheckIn;
    }

    pub fn check_in_cursor_up(&mut self) {
        if self.checkin_cursor > 0 {
            self.checkin_cursor -= 1;
        }
    }

    pub fn check_in_cursor_down(&mut self) {
        if self.checkin_cursor + 1 < UserState::all().len() {
            self.checkin_cursor += 1;
        }
    }

    /// Record the highlighted state with the current time and persist it
    pub fn confirm_check_in(&mut self) -> Result<()> {
        let state = UserState::all()[self.checkin_cursor];
        let checkin = CheckIn {
            state,
            timestamp: Local::now(),
        };
        self.store.set(USER_STATE_KEY, &Some(checkin.clone()))?;
        self.checkin = Some(checkin);
        self.ui_mode = UiMode::Normal;
        Ok(())
    }

    pub fn cancel_check_in(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    // --- energy figures ---

    pub fn user_state(&self) -> Option<UserState> {
        self.checkin.as_ref().map(|c| c.state)
    }

    /// Total weight of the today set
    pub fn selected_weight(&self) -> f64 {
        energy::selected_weight(&self.tasks, &self.settings)
    }

    /// Budget for the day's reported state (un-adjusted)
    pub fn energy_balance(&self) -> u32 {
        energy::energy_balance(self.user_state(), &self.settings)
    }

    pub fn current_zone(&self) -> EnergyZone {
        energy::classify(self.selected_weight(), self.energy_balance(), &self.settings)
    }

    pub fn remaining_percentage(&self) -> f64 {
        energy::remaining_percentage(self.selected_weight(), self.energy_balance(), &self.settings)
    }

    /// Time-of-day projection of the budget, shown alongside the gauge.
    /// Only meaningful once the user has checked in.
    pub fn time_info(&self) -> Option<TimeInfo> {
        let checkin = self.checkin.as_ref()?;
        Some(energy::time_info(
            self.energy_balance(),
            checkin.timestamp.hour(),
            checkin.timestamp.minute(),
            self.settings.work_window_start,
        ))
    }

    /// Fire a notification when the load first crosses into overload.
    /// Called on every tick; repeated polls in the same zone stay quiet.
    pub fn poll_overload(&mut self) {
        let zone = self.current_zone();
        if zone == EnergyZone::Overloaded && self.last_zone != Some(EnergyZone::Overloaded) {
            notifications::notify_overloaded(self.selected_weight(), self.energy_balance());
        }
        self.last_zone = Some(zone);
    }

    // --- task form ---

    pub fn start_add_task(&mut self) {
        self.task_form = Some(TaskFormState::blank());
        self.ui_mode = UiMode::AddingTask;
    }

    pub fn start_edit_task(&mut self) {
        if let Some(task) = self.selected_task() {
            self.task_form = Some(TaskFormState::for_task(task));
            self.ui_mode = UiMode::EditingTask;
        }
    }

    pub fn task_form_toggle_field(&mut self) {
        if let Some(form) = &mut self.task_form {
            form.editing_field = (form.editing_field + 1) % TASK_FORM_FIELDS;
        }
    }

    /// Route a typed character to the active form field. On the labels
    /// row the digits 1-9 toggle the corresponding label instead.
    pub fn task_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.task_form {
            match form.editing_field {
                0 => form.title.push(c),
                1 => form.description.push(c),
                2 => form.due_date.push(c),
                _ => {
                    if let Some(n) = c.to_digit(10).filter(|n| *n >= 1) {
                        if let Some(label) = self.labels.get(n as usize - 1) {
                            form.toggle_label(&label.id);
                        }
                    }
                }
            }
        }
    }

    pub fn task_form_backspace(&mut self) {
        if let Some(form) = &mut self.task_form {
            match form.editing_field {
                0 => {
                    form.title.pop();
                }
                1 => {
                    form.description.pop();
                }
                2 => {
                    form.due_date.pop();
                }
                _ => {}
            }
        }
    }

    pub fn task_form_cycle_priority(&mut self) {
        if let Some(form) = &mut self.task_form {
            form.priority = form.priority.cycle();
        }
    }

    pub fn task_form_cycle_energy(&mut self) {
        if let Some(form) = &mut self.task_form {
            form.energy_level = form.energy_level.cycle();
        }
    }

    /// Create or update a task from the form. Empty titles are dropped;
    /// an unparseable due date clears the field rather than erroring.
    pub fn submit_task_form(&mut self) {
        if let Some(form) = self.task_form.take() {
            if !form.title.trim().is_empty() {
                let description = if form.description.trim().is_empty() {
                    None
                } else {
                    Some(form.description.trim().to_string())
                };
                let due_date =
                    NaiveDate::parse_from_str(form.due_date.trim(), "%Y-%m-%d").ok();

                match form.editing_id {
                    Some(id) => {
                        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
                            task.title = form.title.trim().to_string();
                            task.description = description;
                            task.due_date = due_date;
                            task.label_ids = form.label_ids;
                            task.priority = form.priority;
                            task.energy_level = Some(form.energy_level);
                        }
                    }
                    None => {
                        let mut task =
                            Task::new(form.title.trim().to_string(), form.priority);
                        task.description = description;
                        task.due_date = due_date;
                        task.label_ids = form.label_ids;
                        task.energy_level = Some(form.energy_level);
                        self.tasks.push(task);
                    }
                }
                self.needs_save = true;
            }
            self.ui_mode = UiMode::Normal;
        }
    }

    pub fn cancel_task_form(&mut self) {
        self.task_form = None;
        self.ui_mode = UiMode::Normal;
    }

    // --- quick todos ---

    pub fn start_add_todo(&mut self) {
        self.todo_input.clear();
        self.ui_mode = UiMode::AddingTodo;
    }

    pub fn submit_todo(&mut self) {
        let text = self.todo_input.trim().to_string();
        if !text.is_empty() {
            self.quick_todos.push(QuickTodo::new(text));
            self.todos_need_save = true;
        }
        self.todo_input.clear();
        self.ui_mode = UiMode::Normal;
    }

    pub fn cancel_todo(&mut self) {
        self.todo_input.clear();
        self.ui_mode = UiMode::Normal;
    }

    /// Toggle the nth quick todo (1-based, matching the digit keys)
    pub fn toggle_todo(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        if let Some(todo) = self.quick_todos.get_mut(n - 1) {
            todo.toggle();
            self.todos_need_save = true;
        }
    }

    pub fn clear_completed_todos(&mut self) {
        let before = self.quick_todos.len();
        self.quick_todos.retain(|t| !t.completed);
        if self.quick_todos.len() != before {
            self.todos_need_save = true;
        }
    }

    // --- settings form ---

    pub fn start_edit_settings(&mut self) {
        self.settings_form = Some(SettingsFormState::new(&self.settings));
        self.ui_mode = UiMode::EditingSettings;
    }

    /// Commit the draft. Warnings are advisory and never block the save.
    pub fn submit_settings_form(&mut self) {
        if let Some(form) = self.settings_form.take() {
            let mut new_settings = form.draft;
            if new_settings != self.settings {
                new_settings.touch();
                self.analytics.record(&self.settings, &new_settings, false);
                self.settings = new_settings;
                self.settings_need_save = true;
            }
            self.ui_mode = UiMode::Normal;
        }
    }

    /// Reset the draft (and the live settings) to the built-in defaults
    pub fn reset_settings_to_defaults(&mut self) {
        let mut new_settings = self.settings.clone();
        new_settings.reset_to_defaults();
        self.analytics.record(&self.settings, &new_settings, true);
        self.settings = new_settings;
        self.settings_need_save = true;
        if let Some(form) = &mut self.settings_form {
            form.draft = self.settings.clone();
            form.warnings.clear();
        }
    }

    pub fn cancel_settings_form(&mut self) {
        self.settings_form = None;
        self.ui_mode = UiMode::Normal;
    }

    // --- persistence ---

    /// Flush whatever changed since the last save
    pub fn save(&mut self) -> Result<()> {
        if self.needs_save {
            self.store.set(TASKS_KEY, &self.tasks)?;
            self.store.set(LABELS_KEY, &self.labels)?;
            self.needs_save = false;
        }
        if self.todos_need_save {
            self.store.set(QUICK_TODOS_KEY, &self.quick_todos)?;
            self.todos_need_save = false;
        }
        if self.settings_need_save {
            self.store.set(SETTINGS_KEY, &self.settings)?;
            self.store.set(ANALYTICS_KEY, &self.analytics)?;
            self.settings_need_save = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_app() -> (tempfile::TempDir, AppState) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open_at(dir.path().to_path_buf());
        let mut app = AppState::load(store).unwrap();
        app.tasks.push(Task::new("Task 1".to_string(), Priority::High));
        app.tasks.push(Task::new("Task 2".to_string(), Priority::Medium));
        app.tasks.push(Task::new("Task 3".to_string(), Priority::Low));
        (dir, app)
    }

    #[test]
    fn test_load_seeds_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open_at(dir.path().to_path_buf());
        let app = AppState::load(store).unwrap();

        assert!(app.tasks.is_empty());
        assert_eq!(app.labels.len(), default_labels().len());
        assert_eq!(app.settings, EnergySettings::default());
        assert!(app.checkin.is_none());
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_stale_checkin_is_discarded_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open_at(dir.path().to_path_buf());
        let yesterday = CheckIn {
            state: UserState::Grounded,
            timestamp: Local::now() - chrono::Duration::days(1),
        };
        store.set(USER_STATE_KEY, &Some(yesterday)).unwrap();

        let app = AppState::load(Store::open_at(dir.path().to_path_buf())).unwrap();
        assert!(app.checkin.is_none());
        assert!(!app.store.contains(USER_STATE_KEY));
    }

    #[test]
    fn test_same_day_checkin_survives_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open_at(dir.path().to_path_buf());
        let today = CheckIn {
            state: UserState::Tired,
            timestamp: Local::now(),
        };
        store.set(USER_STATE_KEY, &Some(today)).unwrap();

        let app = AppState::load(Store::open_at(dir.path().to_path_buf())).unwrap();
        assert_eq!(app.user_state(), Some(UserState::Tired));
    }

    #[test]
    fn test_move_selection() {
        let (_dir, mut app) = create_test_app();

        app.move_selection_down();
        assert_eq!(app.selected_index, 1);
        app.move_selection_up();
        assert_eq!(app.selected_index, 0);
        // Can't go below 0
        app.move_selection_up();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_reorder_follows_selection() {
        let (_dir, mut app) = create_test_app();
        app.move_selection_down();
        assert_eq!(app.selected_task().unwrap().title, "Task 2");

        app.move_task_up();
        assert_eq!(app.selected_index, 0);
        assert_eq!(app.tasks[0].title, "Task 2");
        assert_eq!(app.tasks[1].title, "Task 1");
        assert!(app.needs_save);
    }

    #[test]
    fn test_today_cap_is_a_silent_noop() {
        let (_dir, mut app) = create_test_app();
        app.tasks.push(Task::new("Task 4".to_string(), Priority::Low));

        for _ in 0..3 {
            app.toggle_today_selected();
            app.move_selection_down();
        }
        assert_eq!(app.today_tasks().len(), 3);
        assert!(!app.can_add_today_task());

        // Fourth add is refused, nothing else changes
        app.toggle_today_selected();
        assert_eq!(app.today_tasks().len(), 3);
        assert!(!app.selected_task().unwrap().is_today_task);

        // Removing still works below the cap
        app.selected_index = 0;
        app.toggle_today_selected();
        assert_eq!(app.today_tasks().len(), 2);
        assert!(app.can_add_today_task());
    }

    #[test]
    fn test_archive_drops_task_from_pane_and_today_set() {
        let (_dir, mut app) = create_test_app();
        app.toggle_today_selected();
        assert_eq!(app.today_tasks().len(), 1);

        app.archive_selected();
        assert_eq!(app.visible_indices().len(), 2);
        assert_eq!(app.today_tasks().len(), 0);

        app.toggle_show_archived();
        assert_eq!(app.visible_indices().len(), 1);
        assert_eq!(app.selected_task().unwrap().title, "Task 1");
        assert_eq!(app.selected_task().unwrap().progress, 100);
    }

    #[test]
    fn test_restore_from_archived_pane() {
        let (_dir, mut app) = create_test_app();
        app.archive_selected();
        app.toggle_show_archived();

        app.restore_selected();
        assert!(app.visible_indices().is_empty());
        app.toggle_show_archived();
        assert_eq!(app.visible_indices().len(), 3);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let (_dir, mut app) = create_test_app();

        app.request_delete_selected();
        assert_eq!(app.ui_mode, UiMode::ConfirmDelete);
        assert_eq!(app.tasks.len(), 3);

        app.cancel_delete();
        assert_eq!(app.tasks.len(), 3);
        assert_eq!(app.ui_mode, UiMode::Normal);

        app.request_delete_selected();
        app.confirm_delete();
        assert_eq!(app.tasks.len(), 2);
        assert!(app.tasks.iter().all(|t| t.title != "Task 1"));
    }

    #[test]
    fn test_check_in_persists_state_and_time() {
        let (_dir, mut app) = create_test_app();

        app.start_check_in();
        assert_eq!(app.ui_mode, UiMode::CheckIn);
        app.check_in_cursor_down();
        app.check_in_cursor_down();
        app.confirm_check_in().unwrap();

        assert_eq!(app.user_state(), Some(UserState::Tired));
        assert_eq!(app.energy_balance(), 6);
        assert!(app.store.contains(USER_STATE_KEY));
        assert!(app.time_info().is_some());
    }

    #[test]
    fn test_balance_falls_back_to_scattered_without_checkin() {
        let (_dir, app) = create_test_app();
        assert!(app.checkin.is_none());
        assert_eq!(app.energy_balance(), 9);
        assert!(app.time_info().is_none());
    }

    #[test]
    fn test_task_form_add_and_edit() {
        let (_dir, mut app) = create_test_app();

        app.start_add_task();
        for c in "Plan sprint".chars() {
            app.task_form_add_char(c);
        }
        app.task_form_cycle_priority(); // Medium -> Low
        app.task_form_toggle_field();
        for c in "rough outline".chars() {
            app.task_form_add_char(c);
        }
        app.submit_task_form();

        assert_eq!(app.tasks.len(), 4);
        let task = app.tasks.last().unwrap();
        assert_eq!(task.title, "Plan sprint");
        assert_eq!(task.description.as_deref(), Some("rough outline"));
        assert_eq!(task.priority, Priority::Low);

        // Edit the first task's title
        app.selected_index = 0;
        app.start_edit_task();
        let form = app.task_form.as_ref().unwrap();
        assert_eq!(form.title, "Task 1");
        assert!(form.editing_id.is_some());
        app.task_form_add_char('!');
        app.submit_task_form();
        assert_eq!(app.tasks[0].title, "Task 1!");
        assert_eq!(app.tasks.len(), 4);
    }

    #[test]
    fn test_task_form_labels_and_due_date() {
        let (_dir, mut app) = create_test_app();

        app.start_add_task();
        for c in "Fix the login flow".chars() {
            app.task_form_add_char(c);
        }
        app.task_form_toggle_field(); // description
        app.task_form_toggle_field(); // due date
        for c in "2026-09-01".chars() {
            app.task_form_add_char(c);
        }
        app.task_form_toggle_field(); // labels
        app.task_form_add_char('1'); // bug
        app.task_form_add_char('2'); // feature
        app.task_form_add_char('1'); // toggles bug back off
        app.submit_task_form();

        let task = app.tasks.last().unwrap();
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2026, 9, 1));
        assert_eq!(task.label_ids, vec!["feature".to_string()]);
    }

    #[test]
    fn test_task_form_edit_carries_labels_and_due_date() {
        let (_dir, mut app) = create_test_app();
        app.tasks[0].due_date = NaiveDate::from_ymd_opt(2026, 9, 1);
        app.tasks[0].label_ids.push("docs".to_string());

        app.start_edit_task();
        {
            let form = app.task_form.as_ref().unwrap();
            assert_eq!(form.due_date, "2026-09-01");
            assert_eq!(form.label_ids, vec!["docs".to_string()]);
        }
        app.submit_task_form();
        assert_eq!(app.tasks[0].due_date, NaiveDate::from_ymd_opt(2026, 9, 1));
        assert_eq!(app.tasks[0].label_ids, vec!["docs".to_string()]);
    }

    #[test]
    fn test_unparseable_due_date_is_cleared() {
        let (_dir, mut app) = create_test_app();
        app.start_add_task();
        for c in "Task with bad date".chars() {
            app.task_form_add_char(c);
        }
        app.task_form.as_mut().unwrap().due_date = "next tuesday".to_string();
        app.submit_task_form();
        assert!(app.tasks.last().unwrap().due_date.is_none());
    }

    #[test]
    fn test_empty_task_form_is_dropped() {
        let (_dir, mut app) = create_test_app();
        app.start_add_task();
        app.submit_task_form();
        assert_eq!(app.tasks.len(), 3);
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_quick_todos() {
        let (_dir, mut app) = create_test_app();

        app.start_add_todo();
        app.todo_input.push_str("Water the plants");
        app.submit_todo();
        app.start_add_todo();
        app.todo_input.push_str("Email accountant");
        app.submit_todo();

        assert_eq!(app.quick_todos.len(), 2);
        app.toggle_todo(2);
        assert!(app.quick_todos[1].completed);

        app.clear_completed_todos();
        assert_eq!(app.quick_todos.len(), 1);
        assert_eq!(app.quick_todos[0].text, "Water the plants");
    }

    #[test]
    fn test_settings_form_commit_and_reset() {
        let (_dir, mut app) = create_test_app();

        app.start_edit_settings();
        {
            let form = app.settings_form.as_mut().unwrap();
            form.adjust(2); // grounded 18 -> 20
        }
        app.submit_settings_form();

        assert_eq!(app.settings.grounded, 20);
        assert!(app.settings.customized);
        assert!(app.settings_need_save);
        assert_eq!(app.analytics.customization_events.len(), 1);

        app.reset_settings_to_defaults();
        assert_eq!(app.settings.grounded, 18);
        assert!(!app.settings.customized);
        assert_eq!(app.analytics.resets(), 1);
    }

    #[test]
    fn test_settings_form_window_field_wraps() {
        let (_dir, mut app) = create_test_app();
        app.start_edit_settings();
        let form = app.settings_form.as_mut().unwrap();
        form.field = SETTINGS_FIELD_COUNT - 1;
        form.adjust(20); // 9 + 20 wraps past midnight
        assert_eq!(form.draft.work_window_start, 5);

        // Stepping backward through midnight wraps too
        form.adjust(-6);
        assert_eq!(form.draft.work_window_start, 23);

        // Point fields floor at zero instead of wrapping
        form.field = 0;
        form.draft.grounded = 1;
        form.adjust(-3);
        assert_eq!(form.draft.grounded, 0);
    }

    #[test]
    fn test_overload_notification_fires_once_per_crossing() {
        let (_dir, mut app) = create_test_app();
        // High/high today task against the no-checkin scattered budget of 9
        app.tasks[0].energy_level = Some(EnergyLevel::High);
        app.tasks[0].is_today_task = true;
        app.tasks[1].energy_level = Some(EnergyLevel::High);
        app.tasks[1].priority = Priority::High;

        app.poll_overload();
        assert_eq!(app.last_zone, Some(EnergyZone::Warning)); // 6 of 9 used

        app.tasks[1].is_today_task = true; // 12 of 9
        app.poll_overload();
        assert_eq!(app.last_zone, Some(EnergyZone::Overloaded));
        app.poll_overload();
        assert_eq!(app.last_zone, Some(EnergyZone::Overloaded));
    }

    #[test]
    fn test_save_roundtrips_through_store() {
        let (dir, mut app) = create_test_app();
        app.needs_save = true;
        app.quick_todos.push(QuickTodo::new("note".to_string()));
        app.todos_need_save = true;
        app.save().unwrap();
        assert!(!app.needs_save);

        let reloaded = AppState::load(Store::open_at(dir.path().to_path_buf())).unwrap();
        assert_eq!(reloaded.tasks.len(), 3);
        assert_eq!(reloaded.quick_todos.len(), 1);
    }
}
