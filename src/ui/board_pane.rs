use crate::app::AppState;
use crate::domain::{Task, WeightCategory};
use crate::energy;
use crate::settings::EnergySettings;
use crate::ui::styles::{
    border_style, default_style, done_style, label_style, priority_style, selected_style,
    title_style, today_style,
};
use chrono::Local;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Progress bar in quarter steps, e.g. "▰▰▱▱"
fn progress_bar(progress: u8) -> String {
    let filled = usize::from(progress / 25);
    let mut bar = String::new();
    for i in 0..4 {
        bar.push(if i < filled { '▰' } else { '▱' });
    }
    bar
}

/// Render the board pane: active tasks, or the archive when toggled
pub fn render_board_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let visible = app.visible_indices();

    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(idx, &task_idx)| {
            let task = &app.tasks[task_idx];
            let line = create_task_line(task, &app.settings, app.show_archived);
            let style = if idx == app.selected_index {
                selected_style()
            } else if app.show_archived {
                done_style()
            } else {
                default_style()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let date = Local::now().format("%a %b %d");
    let title = if app.show_archived {
        format!(" Archive ({} tasks) ", visible.len())
    } else {
        format!(" Board - {} ", date)
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}

/// Create a single board row
/// Format: ★ !!! Write proposal  ▰▰▱▱ 50%  ⚡3.0 Medium [docs]
fn create_task_line(task: &Task, settings: &EnergySettings, archived: bool) -> Line<'static> {
    let mut spans = Vec::new();

    // Today marker
    if task.is_today_task {
        spans.push(Span::styled("★ ".to_string(), today_style()));
    } else {
        spans.push(Span::raw("  ".to_string()));
    }

    // Priority badge
    spans.push(Span::styled(
        format!("{:<4}", task.priority.badge()),
        priority_style(task.priority),
    ));

    spans.push(Span::raw(task.title.clone()));
    spans.push(Span::raw("  ".to_string()));

    if archived {
        if let Some(completed) = task.completed_at {
            spans.push(Span::raw(format!("done {}", completed.format("%b %d"))));
        }
    } else {
        spans.push(Span::raw(format!(
            "{} {:>3}%  ",
            progress_bar(task.progress),
            task.progress
        )));

        let weight = energy::task_weight(task, settings);
        let category = WeightCategory::from_weight(weight);
        spans.push(Span::raw(format!("⚡{:.1} {}", weight, category.label())));

        let (done, total) = task.subtask_counts();
        if total > 0 {
            spans.push(Span::raw(format!("  [{}/{}]", done, total)));
        }

        if let Some(due) = task.due_date {
            spans.push(Span::styled(
                format!("  due {}", due.format("%b %d")),
                today_style(),
            ));
        }
    }

    // Labels
    for label_id in &task.label_ids {
        spans.push(Span::raw(" ".to_string()));
        spans.push(Span::styled(format!("[{}]", label_id), label_style()));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Priority;

    #[test]
    fn test_progress_bar_quarters() {
        assert_eq!(progress_bar(0), "▱▱▱▱");
        assert_eq!(progress_bar(50), "▰▰▱▱");
        assert_eq!(progress_bar(100), "▰▰▰▰");
    }

    #[test]
    fn test_create_task_line() {
        let settings = EnergySettings::default();
        let mut task = Task::new("Write proposal".to_string(), Priority::High);
        task.is_today_task = true;
        task.label_ids.push("docs".to_string());

        let line = create_task_line(&task, &settings, false);
        let line_str = format!("{:?}", line);
        assert!(line_str.contains("Write proposal"));
        assert!(line_str.contains("★"));
        assert!(line_str.contains("docs"));
    }

    #[test]
    fn test_active_line_shows_due_date() {
        let settings = EnergySettings::default();
        let mut task = Task::new("Renew the domain".to_string(), Priority::Medium);
        task.due_date = chrono::NaiveDate::from_ymd_opt(2026, 9, 1);

        let line = create_task_line(&task, &settings, false);
        let line_str = format!("{:?}", line);
        assert!(line_str.contains("due Sep 01"));
    }

    #[test]
    fn test_archived_line_shows_completion_date() {
        let settings = EnergySettings::default();
        let mut task = Task::new("Old one".to_string(), Priority::Low);
        task.archive();

        let line = create_task_line(&task, &settings, true);
        let line_str = format!("{:?}", line);
        assert!(line_str.contains("done"));
    }
}
