use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, SignupField};
use crate::ui::render::centered_rect_fixed;
use crate::ui::styles;

use super::{form_button, form_field};

/// Append a per-field validation message under its field, if any.
fn push_field_error(lines: &mut Vec<Line<'static>>, error: &Option<String>) {
    if let Some(ref msg) = error {
        lines.push(Line::from(Span::styled(
            format!("                 {}", msg),
            styles::error_style(),
        )));
    }
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let area = centered_rect_fixed(54, 20, area);

    let mut lines = vec![
        Line::from(Span::styled("       Create your account", styles::title_style())),
        Line::from(""),
    ];

    lines.push(form_field(
        "First name:",
        &app.signup.first_name,
        app.signup_focus == SignupField::FirstName,
        false,
    ));
    push_field_error(&mut lines, &app.signup_errors.first_name);

    lines.push(form_field(
        "Last name:",
        &app.signup.last_name,
        app.signup_focus == SignupField::LastName,
        false,
    ));
    push_field_error(&mut lines, &app.signup_errors.last_name);

    lines.push(form_field(
        "Email:",
        &app.signup.email,
        app.signup_focus == SignupField::Email,
        false,
    ));
    push_field_error(&mut lines, &app.signup_errors.email);

    lines.push(form_field(
        "Password:",
        &app.signup.password,
        app.signup_focus == SignupField::Password,
        true,
    ));
    push_field_error(&mut lines, &app.signup_errors.password);

    lines.push(form_field(
        "Confirm:",
        &app.signup.password2,
        app.signup_focus == SignupField::Password2,
        true,
    ));
    push_field_error(&mut lines, &app.signup_errors.password2);

    lines.push(Line::from(""));
    lines.push(form_button("Sign Up", app.signup_focus == SignupField::Button));

    if let Some(ref error) = app.signup_error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {}", error),
            styles::error_style(),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  [Tab] next · [Esc] back · [Ctrl+l] log in",
        styles::muted_style(),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
