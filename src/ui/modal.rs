use crate::app::AppState;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the delete confirmation prompt
pub fn render_confirm_delete(f: &mut Frame, app: &AppState, area: Rect) {
    let title = app
        .pending_delete
        .and_then(|id| app.tasks.iter().find(|t| t.id == id))
        .map(|t| t.title.clone())
        .unwrap_or_default();

    let modal_area = create_modal_area(area, 8);
    f.render_widget(Clear, modal_area);

    let lines = vec![
        Line::raw(""),
        Line::from(vec![
            Span::raw("Delete \""),
            Span::styled(title, modal_title_style()),
            Span::raw("\" for good?"),
        ]),
        Line::raw(""),
        Line::raw("This cannot be undone - archiving (x) keeps it recoverable."),
        Line::raw(""),
        Line::raw("y/Enter delete  ·  any other key cancels"),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" Confirm Delete ", modal_title_style()))
            .style(modal_bg_style()),
    );

    f.render_widget(paragraph, modal_area);
}
