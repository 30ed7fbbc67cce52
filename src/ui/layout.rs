use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub board_area: Rect,
    pub today_area: Rect,
    pub energy_area: Rect,
    pub todos_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Main area: Board (60%) | right column (40%) split into
///   Today's 3 over the energy gauge
/// - Bottom: quick todos strip
pub fn create_layout(area: Rect) -> MainLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Min(0),    // Main content
            Constraint::Length(6), // Quick todos
        ])
        .split(area);

    let keybindings_area = main_chunks[0];
    let content_area = main_chunks[1];
    let todos_area = main_chunks[2];

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board pane
            Constraint::Percentage(40), // Today + energy column
        ])
        .split(content_area);

    let right_column = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45), // Today's 3
            Constraint::Percentage(55), // Energy gauge
        ])
        .split(horizontal[1]);

    MainLayout {
        keybindings_area,
        board_area: horizontal[0],
        today_area: right_column[0],
        energy_area: right_column[1],
        todos_area,
    }
}

/// Create centered modal area (forms and prompts)
pub fn create_modal_area(area: Rect, height: u16) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(height),
            Constraint::Percentage(25),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}
