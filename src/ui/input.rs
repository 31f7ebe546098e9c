//! Keyboard input handling for the TUI.
//!
//! This module handles all keyboard events and translates them into
//! application state changes.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{
    can_add_email_char, can_add_name_char, can_add_password_char, App, AppState, EditField,
    LoginField, Route, SignupField,
};

/// Handle keyboard input. Returns true if the app should quit.
pub async fn handle_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    // Handle help overlay
    if matches!(app.state, AppState::ShowingHelp) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.state = AppState::Normal;
        }
        return Ok(false);
    }

    // Handle quit confirmation
    if matches!(app.state, AppState::ConfirmingQuit) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.state = AppState::Quitting;
                return Ok(true);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.state = AppState::Normal;
            }
            _ => {}
        }
        return Ok(false);
    }

    // Screens that capture free text get the event before the global keys
    match app.route {
        Route::Login => return handle_login_input(app, key).await,
        Route::Signup => return handle_signup_input(app, key).await,
        Route::Dashboard if app.editing_profile => {
            return handle_profile_edit_input(app, key).await
        }
        _ => {}
    }

    // Global keys
    match key.code {
        KeyCode::Char('q') => {
            app.state = AppState::ConfirmingQuit;
            return Ok(false);
        }
        KeyCode::Char('?') => {
            app.state = AppState::ShowingHelp;
            return Ok(false);
        }
        KeyCode::Char('1') => app.navigate(Route::Home),
        KeyCode::Char('2') => app.navigate(Route::Plans),
        KeyCode::Char('3') => app.navigate(Route::Dashboard),
        KeyCode::Char('l') if !app.is_authenticated() => app.navigate(Route::Login),
        KeyCode::Char('s') if !app.is_authenticated() => app.navigate(Route::Signup),
        KeyCode::Char('o') if app.is_authenticated() => app.logout(),
        _ => return handle_route_input(app, key).await,
    }

    Ok(false)
}

/// Route-specific keys that don't involve text entry.
async fn handle_route_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    match app.route {
        Route::Plans => match key.code {
            KeyCode::Down | KeyCode::Char('j') => app.select_next_plan(),
            KeyCode::Up | KeyCode::Char('k') => app.select_prev_plan(),
            KeyCode::Enter => app.subscribe_to_selected_plan(),
            KeyCode::Char('r') => app.load_plans(),
            _ => {}
        },
        Route::Payment(_) => match key.code {
            KeyCode::Enter if app.checkout.is_none() => app.start_checkout().await,
            KeyCode::Char('m') => app.toggle_checkout_mode(),
            KeyCode::Char('s') if app.checkout.is_some() => app.navigate(Route::Success),
            KeyCode::Char('c') if app.checkout.is_some() => app.navigate(Route::Cancel),
            KeyCode::Esc => app.navigate(Route::Plans),
            _ => {}
        },
        Route::Cancel => match key.code {
            KeyCode::Char('r') => {
                if let Some(plan_id) = app.payment_plan.as_ref().map(|p| p.id) {
                    app.navigate(Route::Payment(plan_id));
                }
            }
            _ => {}
        },
        Route::Dashboard => match key.code {
            KeyCode::Char('e') => app.start_profile_edit(),
            KeyCode::Char('r') => app.request_dashboard_load(),
            _ => {}
        },
        _ => {}
    }

    Ok(false)
}

async fn handle_login_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => app.navigate(Route::Home),
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.navigate(Route::Signup)
        }
        KeyCode::Tab | KeyCode::Down => app.login_focus = app.login_focus.next(),
        KeyCode::BackTab | KeyCode::Up => app.login_focus = app.login_focus.prev(),
        KeyCode::Enter => match app.login_focus {
            LoginField::Email => app.login_focus = LoginField::Password,
            LoginField::Password | LoginField::Button => app.attempt_login().await,
        },
        KeyCode::Backspace => match app.login_focus {
            LoginField::Email => {
                app.login_email.pop();
            }
            LoginField::Password => {
                app.login_password.pop();
            }
            LoginField::Button => {}
        },
        KeyCode::Char(c) => match app.login_focus {
            LoginField::Email if can_add_email_char(&app.login_email) => {
                app.login_email.push(c);
            }
            LoginField::Password if can_add_password_char(&app.login_password) => {
                app.login_password.push(c);
            }
            _ => {}
        },
        _ => {}
    }

    Ok(false)
}

async fn handle_signup_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => app.navigate(Route::Home),
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.navigate(Route::Login)
        }
        KeyCode::Tab | KeyCode::Down => app.signup_focus = app.signup_focus.next(),
        KeyCode::BackTab | KeyCode::Up => app.signup_focus = app.signup_focus.prev(),
        KeyCode::Enter => match app.signup_focus {
            SignupField::Button | SignupField::Password2 => app.attempt_signup().await,
            _ => app.signup_focus = app.signup_focus.next(),
        },
        KeyCode::Backspace => {
            if app.signup_focus != SignupField::Button {
                signup_field_mut(app).pop();
            }
        }
        KeyCode::Char(c) => {
            let allowed = match app.signup_focus {
                SignupField::Email => can_add_email_char(&app.signup.email),
                SignupField::Password => can_add_password_char(&app.signup.password),
                SignupField::Password2 => can_add_password_char(&app.signup.password2),
                SignupField::Button => false,
                _ => can_add_name_char(signup_field_mut(app)),
            };
            if allowed {
                signup_field_mut(app).push(c);
            }
        }
        _ => {}
    }

    Ok(false)
}

/// The signup form string the current focus points at. Falls back to the
/// first-name field for the button, which never receives text.
fn signup_field_mut(app: &mut App) -> &mut String {
    match app.signup_focus {
        SignupField::FirstName | SignupField::Button => &mut app.signup.first_name,
        SignupField::LastName => &mut app.signup.last_name,
        SignupField::Email => &mut app.signup.email,
        SignupField::Password => &mut app.signup.password,
        SignupField::Password2 => &mut app.signup.password2,
    }
}

async fn handle_profile_edit_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => app.cancel_profile_edit(),
        KeyCode::Tab | KeyCode::Down | KeyCode::Up => app.edit_focus = app.edit_focus.toggle(),
        KeyCode::Enter => app.save_profile().await,
        KeyCode::Backspace => {
            edit_field_mut(app).pop();
        }
        KeyCode::Char(c) => {
            if can_add_name_char(edit_field_mut(app)) {
                edit_field_mut(app).push(c);
            }
        }
        _ => {}
    }

    Ok(false)
}

fn edit_field_mut(app: &mut App) -> &mut String {
    match app.edit_focus {
        EditField::FirstName => &mut app.edit_first_name,
        EditField::LastName => &mut app.edit_last_name,
    }
}
