use crate::app::CheckIn;
use crate::domain::Task;
use crate::energy;
use crate::persistence::{
    atomic_write, load_and_migrate, Store, SETTINGS_KEY, USER_STATE_KEY,
};
use crate::report::stats::{calculate_board_stats, calculate_label_stats, energy_snapshot};
use crate::settings::EnergySettings;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

/// Format percentage with 1 decimal place
fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Generate a markdown snapshot of the board for the given date.
/// Defaults to today and to `report-YYYY-MM-DD.md` inside the store
/// directory.
pub fn generate_report(
    store: &Store,
    date: Option<NaiveDate>,
    output_path: Option<PathBuf>,
) -> Result<PathBuf> {
    let report_date = date.unwrap_or_else(|| Local::now().date_naive());

    let tasks = load_and_migrate(store)?;
    let settings = store.get_or(SETTINGS_KEY, EnergySettings::default());
    let checkin: Option<CheckIn> = store.get_or(USER_STATE_KEY, None);
    let user_state = checkin
        .as_ref()
        .filter(|c| c.timestamp.date_naive() == report_date)
        .map(|c| c.state);

    let board = calculate_board_stats(&tasks, report_date);
    let labels = calculate_label_stats(&tasks);
    let snapshot = energy_snapshot(&tasks, user_state, &settings);

    let mut report = String::new();

    report.push_str(&format!("# Flow State Report - {}\n\n", report_date));

    // Summary Section
    report.push_str("## Summary\n\n");
    report.push_str(&format!(
        "- **Total Tasks:** {} (Active: {}, Archived: {})\n",
        board.total_tasks, board.active_count, board.archived_count
    ));
    report.push_str(&format!(
        "- **Completed This Day:** {}\n",
        board.completed_on_date
    ));
    report.push_str(&format!(
        "- **Average Progress (active):** {}\n\n",
        format_percent(board.avg_progress)
    ));

    // Energy Section
    report.push_str("## Energy\n\n");
    match snapshot.user_state {
        Some(state) => report.push_str(&format!(
            "- **Check-in:** {} {}\n",
            state.symbol(),
            state.label()
        )),
        None => report.push_str("- **Check-in:** none (scattered budget assumed)\n"),
    }
    report.push_str(&format!("- **Budget:** {} pts\n", snapshot.balance));
    report.push_str(&format!(
        "- **Committed:** {:.1} pts across {} today task(s)\n",
        snapshot.selected_weight, board.today_count
    ));
    report.push_str(&format!(
        "- **Zone:** {} ({} remaining) - {}\n\n",
        snapshot.zone.label(),
        format_percent(snapshot.remaining_percent),
        snapshot.zone.message()
    ));

    // Today's picks
    let today: Vec<&Task> = tasks
        .iter()
        .filter(|t| t.is_active() && t.is_today_task)
        .collect();
    if !today.is_empty() {
        report.push_str("## Today's Picks\n\n");
        for task in &today {
            report.push_str(&format!(
                "- [{}] **{}** - ⚡{:.1} pts, {}% done\n",
                if task.progress == 100 { "x" } else { " " },
                task.title,
                energy::task_weight(task, &settings),
                task.progress
            ));
        }
        report.push('\n');
    }

    // Label Analysis
    if !labels.is_empty() {
        report.push_str("## Labels\n\n");
        let mut sorted: Vec<_> = labels.iter().collect();
        sorted.sort_by(|a, b| b.1.task_count.cmp(&a.1.task_count).then(a.0.cmp(b.0)));
        for (label, stats) in sorted {
            report.push_str(&format!(
                "- **{}:** {} task(s) (Active: {}, Archived: {})\n",
                label, stats.task_count, stats.active_count, stats.archived_count
            ));
        }
        report.push('\n');
    }

    // Board Breakdown
    report.push_str("## Board\n\n");
    for task in tasks.iter().filter(|t| t.is_active()) {
        report.push_str(&format!(
            "- [ ] **{}** ({}, {}% done)\n",
            task.title,
            task.priority.label(),
            task.progress
        ));
    }
    let archived: Vec<&Task> = tasks.iter().filter(|t| !t.is_active()).collect();
    if !archived.is_empty() {
        report.push_str("\n### Archived\n\n");
        for task in archived {
            report.push_str(&format!("- [x] **{}**\n", task.title));
        }
    }

    let output = match output_path {
        Some(path) => path,
        None => store.dir().join(format!("report-{}.md", report_date)),
    };

    atomic_write(&output, &report)?;
    Ok(output)
}
