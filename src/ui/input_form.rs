use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the task add/edit form
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(form) = &app.task_form {
        let modal_area = create_modal_area(area, 19);

        // Clear the area behind the form
        f.render_widget(Clear, modal_area);

        let title_text = if app.ui_mode == UiMode::EditingTask {
            " Edit Task "
        } else {
            " Add Task "
        };

        let mut lines = Vec::new();
        lines.push(Line::raw(""));

        let title_label = if form.editing_field == 0 {
            "Title: (editing)"
        } else {
            "Title:"
        };
        lines.push(Line::raw(title_label));
        lines.push(Line::from(vec![
            Span::raw("> "),
            Span::styled(form.title.clone(), modal_title_style()),
            if form.editing_field == 0 {
                Span::styled("█", modal_title_style())
            } else {
                Span::raw("")
            },
        ]));
        lines.push(Line::raw(""));

        let description_label = if form.editing_field == 1 {
            "Description: (editing)"
        } else {
            "Description:"
        };
        lines.push(Line::raw(description_label));
        lines.push(Line::from(vec![
            Span::raw("> "),
            Span::styled(form.description.clone(), modal_title_style()),
            if form.editing_field == 1 {
                Span::styled("█", modal_title_style())
            } else {
                Span::raw("")
            },
        ]));
        lines.push(Line::raw(""));

        let due_label = if form.editing_field == 2 {
            "Due date (YYYY-MM-DD): (editing)"
        } else {
            "Due date (YYYY-MM-DD):"
        };
        lines.push(Line::raw(due_label));
        lines.push(Line::from(vec![
            Span::raw("> "),
            Span::styled(form.due_date.clone(), modal_title_style()),
            if form.editing_field == 2 {
                Span::styled("█", modal_title_style())
            } else {
                Span::raw("")
            },
        ]));
        lines.push(Line::raw(""));

        let labels_label = if form.editing_field == 3 {
            "Labels: (1-9 toggles)"
        } else {
            "Labels:"
        };
        lines.push(Line::raw(labels_label));
        let mut label_spans = vec![Span::raw("  ")];
        for (i, label) in app.labels.iter().take(9).enumerate() {
            let picked = form.label_ids.contains(&label.id);
            let text = format!("{}{}{}  ", i + 1, if picked { "✓" } else { " " }, label.name);
            label_spans.push(if picked {
                Span::styled(text, modal_title_style())
            } else {
                Span::raw(text)
            });
        }
        lines.push(Line::from(label_spans));
        lines.push(Line::raw(""));

        lines.push(Line::from(vec![
            Span::raw("Priority: "),
            Span::styled(form.priority.label(), modal_title_style()),
            Span::raw("   Energy: "),
            Span::styled(form.energy_level.label(), modal_title_style()),
        ]));
        lines.push(Line::raw(""));

        lines.push(Line::raw(
            "Tab switch field  ·  ←/→ priority  ·  ↑/↓ energy  ·  Enter save  ·  Esc cancel",
        ));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(title_text, modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
