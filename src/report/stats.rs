use crate::domain::{Task, UserState};
use crate::energy::{self, EnergyZone};
use crate::settings::EnergySettings;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Board-wide counts for one report date
#[derive(Debug)]
pub struct BoardStats {
    pub total_tasks: usize,
    pub active_count: usize,
    pub archived_count: usize,
    pub completed_on_date: usize,
    pub today_count: usize,
    pub avg_progress: f64,
}

/// Per-label counts across the whole board
#[derive(Debug, Default)]
pub struct LabelStats {
    pub task_count: usize,
    pub active_count: usize,
    pub archived_count: usize,
}

/// A point-in-time reading of the energy model
#[derive(Debug)]
pub struct EnergySnapshot {
    pub user_state: Option<UserState>,
    pub balance: u32,
    pub selected_weight: f64,
    pub zone: EnergyZone,
    pub remaining_percent: f64,
}

/// Calculate board statistics. Completions are attributed to the date
/// they were archived on.
pub fn calculate_board_stats(tasks: &[Task], date: NaiveDate) -> BoardStats {
    let active_count = tasks.iter().filter(|t| t.is_active()).count();
    let archived_count = tasks.len() - active_count;
    let completed_on_date = tasks
        .iter()
        .filter(|t| t.completed_at.map(|c| c.date_naive()) == Some(date))
        .count();
    let today_count = tasks
        .iter()
        .filter(|t| t.is_active() && t.is_today_task)
        .count();

    let avg_progress = if active_count > 0 {
        let sum: u32 = tasks
            .iter()
            .filter(|t| t.is_active())
            .map(|t| u32::from(t.progress))
            .sum();
        f64::from(sum) / active_count as f64
    } else {
        0.0
    };

    BoardStats {
        total_tasks: tasks.len(),
        active_count,
        archived_count,
        completed_on_date,
        today_count,
        avg_progress,
    }
}

/// Calculate per-label statistics
pub fn calculate_label_stats(tasks: &[Task]) -> HashMap<String, LabelStats> {
    let mut label_map: HashMap<String, LabelStats> = HashMap::new();

    for task in tasks {
        for label_id in &task.label_ids {
            let entry = label_map.entry(label_id.clone()).or_default();
            entry.task_count += 1;
            if task.is_active() {
                entry.active_count += 1;
            } else {
                entry.archived_count += 1;
            }
        }
    }

    label_map
}

/// Snapshot the energy model as it stands right now
pub fn energy_snapshot(
    tasks: &[Task],
    user_state: Option<UserState>,
    settings: &EnergySettings,
) -> EnergySnapshot {
    let selected_weight = energy::selected_weight(tasks, settings);
    let balance = energy::energy_balance(user_state, settings);

    EnergySnapshot {
        user_state,
        balance,
        selected_weight,
        zone: energy::classify(selected_weight, balance, settings),
        remaining_percent: energy::remaining_percentage(selected_weight, balance, settings),
    }
}
