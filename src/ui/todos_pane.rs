use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::styles::{border_style, default_style, done_style, hint_style, modal_title_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the quick-todos strip. Digits toggle entries; while adding,
/// the input line is shown in place.
pub fn render_todos_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let mut spans = vec![Span::raw(" ")];

    for (i, todo) in app.quick_todos.iter().enumerate() {
        let marker = if todo.completed { "✓" } else { "·" };
        let style = if todo.completed {
            done_style()
        } else {
            default_style()
        };
        spans.push(Span::styled(
            format!("{} {} {}   ", i + 1, marker, todo.text),
            style,
        ));
    }

    if app.quick_todos.is_empty() {
        spans.push(Span::styled("o to jot a quick todo", hint_style()));
    }

    let mut lines = vec![Line::from(spans)];

    if app.ui_mode == UiMode::AddingTodo {
        lines.push(Line::from(vec![
            Span::raw(" > "),
            Span::styled(app.todo_input.clone(), modal_title_style()),
            Span::styled("█", modal_title_style()),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Quick todos ", title_style())),
    );

    f.render_widget(paragraph, area);
}
