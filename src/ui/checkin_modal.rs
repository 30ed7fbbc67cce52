use crate::app::AppState;
use crate::domain::UserState;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style, selected_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the daily check-in chooser
pub fn render_checkin_modal(f: &mut Frame, app: &AppState, area: Rect) {
    let modal_area = create_modal_area(area, 12);
    f.render_widget(Clear, modal_area);

    let mut lines = Vec::new();
    lines.push(Line::raw(""));
    lines.push(Line::raw("How are you arriving today?"));
    lines.push(Line::raw(""));

    for (i, state) in UserState::all().iter().enumerate() {
        let budget = app.settings.state_budget(*state);
        let text = format!(
            "  {} {:<10} {} pts - {}",
            state.symbol(),
            state.label(),
            budget,
            state.description()
        );
        let line = if i == app.checkin_cursor {
            Line::styled(text, selected_style())
        } else {
            Line::raw(text)
        };
        lines.push(line);
    }

    lines.push(Line::raw(""));
    lines.push(Line::raw("↑/↓ choose  ·  Enter confirm  ·  Esc cancel"));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" Check-in ", modal_title_style()))
            .style(modal_bg_style()),
    );

    f.render_widget(paragraph, modal_area);
}
