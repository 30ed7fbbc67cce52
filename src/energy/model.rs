//! Task weight and energy balance arithmetic.
//!
//! All functions here are pure: task and settings data come in as
//! arguments and numbers come out. Callers own all state.

use crate::domain::{Task, UserState};
use crate::settings::EnergySettings;

/// Base energy cost of a task: priority points + energy-level points.
/// With default settings the range is 2 (low+low) to 6 (high+high).
pub fn base_task_weight(task: &Task, settings: &EnergySettings) -> u32 {
    settings.priority_points(task.priority) + settings.energy_points(task.effective_energy_level())
}

/// Effective energy cost accounting for progress, rounded to one decimal.
/// A task that is 75% done only costs 25% of its original weight.
pub fn task_weight(task: &Task, settings: &EnergySettings) -> f64 {
    let base = base_task_weight(task, settings) as f64;
    let remaining_work = f64::from(100 - u32::from(task.progress.min(100))) / 100.0;
    (base * remaining_work * 10.0).round() / 10.0
}

/// Total weight of tasks marked for today. Tasks outside the today set
/// contribute nothing regardless of status.
pub fn selected_weight(tasks: &[Task], settings: &EnergySettings) -> f64 {
    tasks
        .iter()
        .filter(|t| t.is_today_task)
        .map(|t| task_weight(t, settings))
        .sum()
}

/// Daily energy budget for a self-reported state. Falls back to the
/// scattered budget when the user hasn't checked in yet - a moderate
/// default rather than the best or worst case.
pub fn energy_balance(user_state: Option<UserState>, settings: &EnergySettings) -> u32 {
    match user_state {
        Some(state) => settings.state_budget(state),
        None => settings.scattered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EnergyLevel, Priority};

    fn task_with(priority: Priority, energy: Option<EnergyLevel>, progress: u8) -> Task {
        let mut task = Task::new("Test".to_string(), priority);
        task.energy_level = energy;
        task.progress = progress;
        task
    }

    #[test]
    fn test_base_weight_uses_priority_and_energy_points() {
        let settings = EnergySettings::default();
        let task = task_with(Priority::High, Some(EnergyLevel::High), 0);
        assert_eq!(base_task_weight(&task, &settings), 6);

        let task = task_with(Priority::Low, Some(EnergyLevel::Low), 0);
        assert_eq!(base_task_weight(&task, &settings), 2);
    }

    #[test]
    fn test_base_weight_defaults_energy_to_medium() {
        let settings = EnergySettings::default();
        let task = task_with(Priority::High, None, 0);
        // priorityHigh (3) + energyMed (2)
        assert_eq!(base_task_weight(&task, &settings), 5);
    }

    #[test]
    fn test_base_weight_bounds() {
        let settings = EnergySettings::default();
        let lo = settings.priority_low + settings.energy_low;
        let hi = settings.priority_high + settings.energy_high;

        for priority in [Priority::High, Priority::Medium, Priority::Low] {
            for energy in [EnergyLevel::High, EnergyLevel::Medium, EnergyLevel::Low] {
                let task = task_with(priority, Some(energy), 0);
                let w = base_task_weight(&task, &settings);
                assert!(w >= lo && w <= hi, "weight {} outside [{}, {}]", w, lo, hi);
            }
        }
    }

    #[test]
    fn test_weight_discounted_by_progress() {
        let settings = EnergySettings::default();
        let task = task_with(Priority::High, Some(EnergyLevel::High), 0);
        assert_eq!(task_weight(&task, &settings), 6.0);

        let task = task_with(Priority::High, Some(EnergyLevel::High), 50);
        assert_eq!(task_weight(&task, &settings), 3.0);

        let task = task_with(Priority::High, Some(EnergyLevel::High), 75);
        assert_eq!(task_weight(&task, &settings), 1.5);

        let task = task_with(Priority::High, Some(EnergyLevel::High), 100);
        assert_eq!(task_weight(&task, &settings), 0.0);
    }

    #[test]
    fn test_weight_monotone_in_progress() {
        let settings = EnergySettings::default();
        let mut previous = f64::MAX;
        for progress in [0u8, 25, 50, 75, 100] {
            let task = task_with(Priority::Medium, Some(EnergyLevel::High), progress);
            let w = task_weight(&task, &settings);
            assert!(w <= previous, "weight increased at progress {}", progress);
            assert!(w >= 0.0);
            previous = w;
        }
    }

    #[test]
    fn test_selected_weight_counts_only_today_tasks() {
        let settings = EnergySettings::default();
        let mut a = task_with(Priority::High, Some(EnergyLevel::High), 0); // 6.0
        a.is_today_task = true;
        let mut b = task_with(Priority::Low, Some(EnergyLevel::Low), 50); // 1.0
        b.is_today_task = true;
        let c = task_with(Priority::High, Some(EnergyLevel::High), 0); // not selected

        let tasks = vec![a, b, c];
        assert_eq!(selected_weight(&tasks, &settings), 7.0);
    }

    #[test]
    fn test_selected_weight_is_additive() {
        let settings = EnergySettings::default();
        let mut tasks = Vec::new();
        for progress in [0u8, 25, 75] {
            let mut t = task_with(Priority::Medium, Some(EnergyLevel::Medium), progress);
            t.is_today_task = true;
            tasks.push(t);
        }
        let sum: f64 = tasks.iter().map(|t| task_weight(t, &settings)).sum();
        assert_eq!(selected_weight(&tasks, &settings), sum);
    }

    #[test]
    fn test_energy_balance_per_state() {
        let settings = EnergySettings::default();
        assert_eq!(energy_balance(Some(UserState::Grounded), &settings), 18);
        assert_eq!(energy_balance(Some(UserState::Scattered), &settings), 9);
        assert_eq!(energy_balance(Some(UserState::Tired), &settings), 6);
        // No check-in falls back to the scattered budget
        assert_eq!(energy_balance(None, &settings), 9);
    }
}
