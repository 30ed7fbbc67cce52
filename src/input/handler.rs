use crate::app::AppState;
use crate::domain::UiMode;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::CheckIn => handle_check_in_mode(app, key),
        UiMode::AddingTask | UiMode::EditingTask => handle_task_form_mode(app, key),
        UiMode::AddingTodo => handle_todo_mode(app, key),
        UiMode::EditingSettings => handle_settings_mode(app, key),
        UiMode::ConfirmDelete => handle_confirm_delete_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Navigation (with Shift modifier for reordering)
        KeyCode::Up => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.move_task_up();
            } else {
                app.move_selection_up();
            }
            Ok(false)
        }
        KeyCode::Down => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.move_task_down();
            } else {
                app.move_selection_down();
            }
            Ok(false)
        }

        // Today set membership (capped at three)
        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.toggle_today_selected();
            Ok(false)
        }

        // Progress quarter steps
        KeyCode::Char('+') | KeyCode::Char('=') => {
            app.step_progress_up();
            Ok(false)
        }
        KeyCode::Char('-') | KeyCode::Char('_') => {
            app.step_progress_down();
            Ok(false)
        }

        // Cycle priority / energy level in place
        KeyCode::Char('p') | KeyCode::Char('P') => {
            app.cycle_priority_selected();
            Ok(false)
        }
        KeyCode::Char('l') | KeyCode::Char('L') => {
            app.cycle_energy_selected();
            Ok(false)
        }

        // Add / edit via the input form
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.start_add_task();
            Ok(false)
        }
        KeyCode::Char('e') | KeyCode::Char('E') => {
            app.start_edit_task();
            Ok(false)
        }

        // Archive (active pane) or restore (archived pane)
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => {
            app.archive_selected();
            Ok(false)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restore_selected();
            Ok(false)
        }

        // Hard delete, behind a confirmation prompt
        KeyCode::Char('d') | KeyCode::Char('D') => {
            app.request_delete_selected();
            Ok(false)
        }

        // Toggle between the board and the archive
        KeyCode::Char('v') | KeyCode::Char('V') => {
            app.toggle_show_archived();
            Ok(false)
        }

        // Daily check-in
        KeyCode::Char('c') | KeyCode::Char('C') => {
            app.start_check_in();
            Ok(false)
        }

        // Energy settings
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.start_edit_settings();
            Ok(false)
        }

        // Quick todos: o adds, digits toggle, O clears completed
        KeyCode::Char('o') => {
            app.start_add_todo();
            Ok(false)
        }
        KeyCode::Char('O') => {
            app.clear_completed_todos();
            Ok(false)
        }
        KeyCode::Char(c @ '1'..='9') => {
            app.toggle_todo(c as usize - '0' as usize);
            Ok(false)
        }

        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys in the check-in modal
fn handle_check_in_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Up => {
            app.check_in_cursor_up();
            Ok(false)
        }
        KeyCode::Down => {
            app.check_in_cursor_down();
            Ok(false)
        }
        KeyCode::Enter => {
            app.confirm_check_in()?;
            Ok(false)
        }
        KeyCode::Esc => {
            app.cancel_check_in();
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Handle keys in the task add/edit form. Arrow keys cycle the
/// priority and energy pickers; Tab moves between text fields.
fn handle_task_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => app.submit_task_form(),
        KeyCode::Esc => app.cancel_task_form(),
        KeyCode::Tab => app.task_form_toggle_field(),
        KeyCode::Left | KeyCode::Right => app.task_form_cycle_priority(),
        KeyCode::Up | KeyCode::Down => app.task_form_cycle_energy(),
        KeyCode::Backspace => app.task_form_backspace(),
        KeyCode::Char(c) => app.task_form_add_char(c),
        _ => {}
    }
    Ok(false)
}

/// Handle keys while typing a quick todo
fn handle_todo_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => app.submit_todo(),
        KeyCode::Esc => app.cancel_todo(),
        KeyCode::Backspace => {
            app.todo_input.pop();
        }
        KeyCode::Char(c) => app.todo_input.push(c),
        _ => {}
    }
    Ok(false)
}

/// Handle keys in the settings form
fn handle_settings_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => app.submit_settings_form(),
        KeyCode::Esc => app.cancel_settings_form(),
        KeyCode::Up => {
            if let Some(form) = &mut app.settings_form {
                form.prev_field();
            }
        }
        KeyCode::Down | KeyCode::Tab => {
            if let Some(form) = &mut app.settings_form {
                form.next_field();
            }
        }
        KeyCode::Left => {
            if let Some(form) = &mut app.settings_form {
                form.adjust(-1);
            }
        }
        KeyCode::Right => {
            if let Some(form) = &mut app.settings_form {
                form.adjust(1);
            }
        }
        KeyCode::Char('r') | KeyCode::Char('R') => app.reset_settings_to_defaults(),
        _ => {}
    }
    Ok(false)
}

/// Handle keys in the delete confirmation prompt
fn handle_confirm_delete_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_delete(),
        _ => app.cancel_delete(),
    }
    Ok(false)
}
