use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, LoginField};
use crate::ui::render::centered_rect_fixed;
use crate::ui::styles;

use super::{form_button, form_field};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let height = if app.login_error.is_some() { 13 } else { 11 };
    let area = centered_rect_fixed(50, height, area);

    let mut lines = vec![
        Line::from(Span::styled("       Log in to Eshtrak", styles::title_style())),
        Line::from(""),
        form_field(
            "Email:",
            &app.login_email,
            app.login_focus == LoginField::Email,
            false,
        ),
        form_field(
            "Password:",
            &app.login_password,
            app.login_focus == LoginField::Password,
            true,
        ),
        Line::from(""),
        form_button("Login", app.login_focus == LoginField::Button),
    ];

    if let Some(ref error) = app.login_error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {}", error),
            styles::error_style(),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  [Tab] next · [Esc] back · [Ctrl+s] sign up",
        styles::muted_style(),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
