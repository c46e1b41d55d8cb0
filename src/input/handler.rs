use crate::app::AppState;
use crate::domain::UiMode;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    // An open message takes every key until it is dismissed
    if app.active_modal().is_some() {
        return handle_modal(app, key);
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask => handle_input_form_mode(app, key),
        UiMode::EditingSettings => handle_settings_form_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Timer controls
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.start_timer(Instant::now());
            Ok(false)
        }
        KeyCode::Char('p') | KeyCode::Char('P') => {
            app.pause_timer();
            Ok(false)
        }
        KeyCode::Char(' ') => {
            app.toggle_timer(Instant::now());
            Ok(false)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.reset_timer();
            Ok(false)
        }
        KeyCode::Char('n') | KeyCode::Char('N') => {
            app.skip_interval();
            Ok(false)
        }

        // Navigation
        KeyCode::Up => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down => {
            app.move_selection_down();
            Ok(false)
        }

        // Task actions
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.start_add_task();
            Ok(false)
        }
        KeyCode::Enter => {
            app.set_current_selected();
            Ok(false)
        }
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => {
            app.delete_selected();
            Ok(false)
        }
        KeyCode::Char('v') | KeyCode::Char('V') => {
            app.show_stats();
            Ok(false)
        }

        // Settings
        KeyCode::Char('e') | KeyCode::Char('E') => {
            app.open_settings_form();
            Ok(false)
        }
        KeyCode::Char('b') | KeyCode::Char('B') => {
            app.toggle_break_reminders();
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys while a message is shown
fn handle_modal(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
        app.dismiss_modal();
    }
    Ok(false)
}

/// Handle keys in the add-task form
fn handle_input_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => app.submit_input_form(),
        KeyCode::Esc => app.cancel_input_form(),
        KeyCode::Backspace => app.input_form_backspace(),
        KeyCode::Char(c) => app.input_form_add_char(c),
        _ => {}
    }
    Ok(false)
}

/// Handle keys in the settings form
fn handle_settings_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => app.submit_settings_form(),
        KeyCode::Esc => app.cancel_settings_form(),
        KeyCode::Tab | KeyCode::Down => app.settings_form_toggle_field(),
        KeyCode::BackTab | KeyCode::Up => app.settings_form_prev_field(),
        KeyCode::Backspace => app.settings_form_backspace(),
        KeyCode::Char(c) => app.settings_form_add_char(c),
        _ => {}
    }
    Ok(false)
}
