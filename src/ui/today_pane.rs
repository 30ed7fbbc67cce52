use crate::app::{AppState, TODAY_TASK_CAP};
use crate::energy;
use crate::ui::styles::{border_style, default_style, hint_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the "Today's 3" pane: the capped working set with per-task
/// weights and the running total against the day's budget.
pub fn render_today_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let today = app.today_tasks();
    let mut lines = Vec::new();

    if today.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            "  Nothing picked yet - press t on a task",
            hint_style(),
        ));
    }

    for task in &today {
        let weight = energy::task_weight(task, &app.settings);
        lines.push(Line::from(vec![
            Span::raw(format!("  • {}  ", task.title)),
            Span::styled(format!("⚡{:.1}", weight), default_style()),
        ]));
    }

    for _ in today.len()..TODAY_TASK_CAP {
        lines.push(Line::styled("  ◦ (open slot)", hint_style()));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::raw("  Committed: "),
        Span::styled(
            format!("{:.1} / {} pts", app.selected_weight(), app.energy_balance()),
            title_style(),
        ),
    ]));

    let title = format!(" Today's {} ", TODAY_TASK_CAP);
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(paragraph, area);
}
