use crate::app::AppState;
use crate::ui::styles::{border_style, gauge_style, hint_style, title_style, zone_style};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Render the energy gauge pane: remaining capacity as a fuel gauge,
/// the zone message, and the time-of-day projection after check-in.
pub fn render_energy_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let zone = app.current_zone();
    let remaining = app.remaining_percentage();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Energy ", title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // check-in line
            Constraint::Length(1), // gauge
            Constraint::Min(0),    // zone + time info
        ])
        .split(inner);

    // Check-in line
    let checkin_line = match &app.checkin {
        Some(c) => Line::from(vec![
            Span::raw(format!(
                " {} {} since {}  ",
                c.state.symbol(),
                c.state.label(),
                c.timestamp.format("%H:%M")
            )),
            Span::styled(format!("budget {}", app.energy_balance()), title_style()),
        ]),
        None => Line::styled(" No check-in yet - press c", hint_style()),
    };
    f.render_widget(Paragraph::new(checkin_line), chunks[0]);

    // Gauge over the grounded ceiling
    let gauge = Gauge::default()
        .gauge_style(gauge_style(zone))
        .ratio((remaining / 100.0).clamp(0.0, 1.0))
        .label(format!("{:.0}% left", remaining));
    f.render_widget(gauge, chunks[1]);

    let mut lines = vec![Line::from(vec![
        Span::styled(format!(" {} ", zone.label()), zone_style(zone)),
        Span::raw("- "),
        Span::raw(zone.message()),
    ])];

    if let Some(info) = app.time_info() {
        let window = format!("{:02}:00-{:02}:00", info.window_start, info.window_end);
        let line = if info.is_before_window {
            format!(" Window {} hasn't opened - full {} pts", window, info.base_points)
        } else {
            format!(
                " {:.1}h left of window {} - {} of {} pts realistic",
                info.hours_remaining, window, info.adjusted_points, info.base_points
            )
        };
        lines.push(Line::styled(line, hint_style()));
    }

    f.render_widget(Paragraph::new(lines), chunks[2]);
}
