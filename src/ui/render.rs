use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, AppState, Route};
use crate::session::AuthStatus;

use super::screens::{dashboard, home, login, payment, plans, signup};
use super::styles;

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(3), // Navigation
            Constraint::Min(10),   // Main content
            Constraint::Length(2), // Status bar
        ])
        .split(frame.area());

    render_title_bar(frame, app, chunks[0]);
    render_nav(frame, app, chunks[1]);
    render_main_content(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);

    // Render overlays
    if matches!(app.state, AppState::ShowingHelp) {
        render_help_overlay(frame);
    }

    if matches!(app.state, AppState::ConfirmingQuit) {
        render_quit_overlay(frame);
    }
}

fn render_title_bar(frame: &mut Frame, _app: &App, area: Rect) {
    let title = "  Eshtrak";
    let help_hint = "[?] Help";
    let title_len = title.len();

    let title_line = Line::from(vec![
        Span::styled(title, styles::title_style()),
        Span::raw(" ".repeat(
            area.width
                .saturating_sub(title_len as u16 + help_hint.len() as u16 + 4)
                as usize,
        )),
        Span::styled(help_hint, styles::muted_style()),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    let paragraph = Paragraph::new(title_line).block(block);
    frame.render_widget(paragraph, area);
}

fn render_nav(frame: &mut Frame, app: &App, area: Rect) {
    let main_tabs = vec![
        ("[1] Home", app.route == Route::Home),
        ("[2] Plans", app.route == Route::Plans),
        ("[3] Dashboard", app.route == Route::Dashboard),
    ];

    let mut spans = vec![Span::raw(" ")];
    for (i, (label, selected)) in main_tabs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", styles::muted_style()));
        }
        if *selected {
            spans.push(Span::styled(*label, styles::tab_style(true)));
        } else {
            spans.push(Span::styled(*label, styles::muted_style()));
        }
    }

    // Session indicator on the right
    let session_text = match app.session.status() {
        AuthStatus::Unknown => "restoring session...".to_string(),
        AuthStatus::Authenticated => {
            let email = app
                .session
                .user()
                .map(|u| u.email.as_str())
                .unwrap_or("account");
            format!("{} · sign [o]ut", email)
        }
        AuthStatus::Unauthenticated => "[l]ogin | [s]ignup".to_string(),
    };

    let main_width: usize = spans.iter().map(|s| s.content.len()).sum();
    let padding = (area.width as usize).saturating_sub(main_width + session_text.len() + 2);
    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(session_text, styles::muted_style()));

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

fn render_main_content(frame: &mut Frame, app: &App, area: Rect) {
    match app.route {
        Route::Home => home::render(frame, app, area),
        Route::Signup => signup::render(frame, app, area),
        Route::Login => login::render(frame, app, area),
        Route::Plans => plans::render(frame, app, area),
        Route::Payment(_) => payment::render(frame, app, area),
        Route::Success => payment::render_success(frame, app, area),
        Route::Cancel => payment::render_cancel(frame, app, area),
        Route::Dashboard => dashboard::render(frame, app, area),
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = "[?] help | [q]uit";

    let left_text = if let Some(ref msg) = app.status_message {
        format!(" {} ", msg)
    } else {
        format!(" {} ", app.route.title())
    };
    let right_text = format!(" {} ", shortcuts);

    let width = area.width as usize;
    let padding_len = width
        .saturating_sub(left_text.len())
        .saturating_sub(right_text.len());

    let line = Line::from(vec![
        Span::styled(left_text, styles::status_bar_style()),
        Span::styled(" ".repeat(padding_len), styles::status_bar_style()),
        Span::styled(right_text, styles::status_bar_style()),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_help_overlay(frame: &mut Frame) {
    let area = centered_rect_fixed(52, 18, frame.area());
    frame.render_widget(Clear, area);

    let entries: [(&str, &str); 12] = [
        ("1 / 2 / 3", "Home / Plans / Dashboard"),
        ("l", "Log in"),
        ("s", "Sign up"),
        ("o", "Sign out"),
        ("j / k, arrows", "Move selection"),
        ("Enter", "Confirm / submit"),
        ("Tab", "Next form field"),
        ("m", "Toggle payment mode"),
        ("e", "Edit profile (dashboard)"),
        ("r", "Reload current screen"),
        ("Esc", "Back / cancel"),
        ("q", "Quit"),
    ];

    let mut lines = vec![Line::from(""), Line::from(Span::styled("  Keys", styles::title_style())), Line::from("")];
    for (key, desc) in entries {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{:<14}", key), styles::help_key_style()),
            Span::styled(desc, styles::help_desc_style()),
        ]));
    }

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_quit_overlay(frame: &mut Frame) {
    let area = centered_rect_fixed(36, 5, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Quit Eshtrak? [y/n]",
            styles::help_desc_style(),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Fixed-size rectangle centered in `r`, clamped to fit.
pub(crate) fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
