use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::ui::styles;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "  Welcome to Eshtrak",
            styles::title_style(),
        )),
        Line::from(""),
        Line::from("  Your subscription management platform."),
        Line::from(Span::styled(
            "  Manage your subscriptions and choose the perfect plan for your needs.",
            styles::muted_style(),
        )),
        Line::from(""),
    ];

    if app.is_authenticated() {
        lines.push(Line::from(vec![
            Span::raw("  Press "),
            Span::styled("[3]", styles::highlight_style()),
            Span::raw(" for your dashboard or "),
            Span::styled("[2]", styles::highlight_style()),
            Span::raw(" to browse plans."),
        ]));
    } else {
        lines.push(Line::from(vec![
            Span::raw("  Press "),
            Span::styled("[2]", styles::highlight_style()),
            Span::raw(" to browse plans, "),
            Span::styled("[l]", styles::highlight_style()),
            Span::raw(" to log in, or "),
            Span::styled("[s]", styles::highlight_style()),
            Span::raw(" to create an account."),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
