use crate::app::AppState;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style, selected_style, warning_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the energy settings form. One row per tunable value; advisory
/// warnings appear below the fields without blocking the save.
pub fn render_settings_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(form) = &app.settings_form {
        let modal_area = create_modal_area(area, 22);
        f.render_widget(Clear, modal_area);

        let d = &form.draft;
        let rows: [(&str, u32); 10] = [
            ("Grounded budget", d.grounded),
            ("Scattered budget", d.scattered),
            ("Tired budget", d.tired),
            ("High priority pts", d.priority_high),
            ("Medium priority pts", d.priority_med),
            ("Low priority pts", d.priority_low),
            ("High energy pts", d.energy_high),
            ("Medium energy pts", d.energy_med),
            ("Low energy pts", d.energy_low),
            ("Work window start", d.work_window_start),
        ];

        let mut lines = Vec::new();
        lines.push(Line::raw(""));
        for (i, (name, value)) in rows.iter().enumerate() {
            let text = format!("  {:<20} {:>3}", name, value);
            let line = if i == form.field {
                Line::styled(text, selected_style())
            } else {
                Line::raw(text)
            };
            lines.push(line);
        }

        lines.push(Line::raw(""));
        for warning in &form.warnings {
            lines.push(Line::styled(format!("  ⚠ {}", warning), warning_style()));
        }

        lines.push(Line::raw(""));
        lines.push(Line::raw(
            "↑/↓ field  ·  ←/→ adjust  ·  r reset defaults  ·  Enter save  ·  Esc cancel",
        ));

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Energy Settings ", modal_title_style()))
                .style(modal_bg_style()),
        );

        f.render_widget(paragraph, modal_area);
    }
}
