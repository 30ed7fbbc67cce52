pub mod board_pane;
pub mod checkin_modal;
pub mod energy_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod modal;
pub mod settings_form;
pub mod styles;
pub mod today_pane;
pub mod todos_pane;

use crate::app::AppState;
use crate::domain::UiMode;
use board_pane::render_board_pane;
use checkin_modal::render_checkin_modal;
use energy_pane::render_energy_pane;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use modal::render_confirm_delete;
use ratatui::Frame;
use settings_form::render_settings_form;
use today_pane::render_today_pane;
use todos_pane::render_todos_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &mut AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, layout.keybindings_area);
    render_board_pane(f, app, layout.board_area);
    render_today_pane(f, app, layout.today_area);
    render_energy_pane(f, app, layout.energy_area);
    render_todos_pane(f, app, layout.todos_area);

    // Modal layers
    match app.ui_mode {
        UiMode::CheckIn => render_checkin_modal(f, app, size),
        UiMode::AddingTask | UiMode::EditingTask => render_input_form(f, app, size),
        UiMode::EditingSettings => render_settings_form(f, app, size),
        UiMode::ConfirmDelete => render_confirm_delete(f, app, size),
        UiMode::Normal | UiMode::AddingTodo => {}
    }
}
