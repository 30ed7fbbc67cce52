use crate::domain::Priority;
use crate::energy::EnergyZone;
use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Selected row highlight style
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightCyan)
        .add_modifier(Modifier::BOLD)
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Modal background style
pub fn modal_bg_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Modal title style
pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Warning message style (settings form nudges)
pub fn warning_style() -> Style {
    Style::default().fg(Color::Yellow)
}

/// Archived/completed task style
pub fn done_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Marker for tasks in the today set
pub fn today_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Label badge style
pub fn label_style() -> Style {
    Style::default().fg(Color::Blue)
}

pub fn priority_style(priority: Priority) -> Style {
    match priority {
        Priority::High => Style::default().fg(Color::Red),
        Priority::Medium => Style::default().fg(Color::Yellow),
        Priority::Low => Style::default().fg(Color::Gray),
    }
}

/// Color for each remaining-capacity zone, from calm green down to red
pub fn zone_color(zone: EnergyZone) -> Color {
    match zone {
        EnergyZone::Full => Color::Green,
        EnergyZone::Good => Color::Cyan,
        EnergyZone::Half => Color::Blue,
        EnergyZone::Low => Color::Magenta,
        EnergyZone::Warning => Color::Yellow,
        EnergyZone::Critical | EnergyZone::Overloaded => Color::Red,
    }
}

pub fn zone_style(zone: EnergyZone) -> Style {
    let style = Style::default().fg(zone_color(zone));
    match zone {
        EnergyZone::Overloaded => style.add_modifier(Modifier::BOLD),
        _ => style,
    }
}

/// Gauge style for the energy pane
pub fn gauge_style(zone: EnergyZone) -> Style {
    Style::default().fg(zone_color(zone)).bg(Color::DarkGray)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_colors_get_warmer_toward_empty() {
        assert_eq!(zone_color(EnergyZone::Full), Color::Green);
        assert_eq!(zone_color(EnergyZone::Critical), Color::Red);
        assert_eq!(zone_color(EnergyZone::Overloaded), Color::Red);
    }
}
