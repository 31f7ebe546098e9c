use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Route};
use crate::ui::render::centered_rect_fixed;
use crate::ui::styles;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let area = centered_rect_fixed(64, 16, area);

    let mut lines = vec![Line::from(Span::styled("  Checkout", styles::title_style())), Line::from("")];

    match (&app.payment_plan, app.route) {
        (Some(plan), _) => {
            lines.push(Line::from(vec![
                Span::styled("  Plan:     ", styles::muted_style()),
                Span::raw(plan.name.clone()),
            ]));
            lines.push(Line::from(vec![
                Span::styled("  Price:    ", styles::muted_style()),
                Span::raw(plan.display_price()),
            ]));
        }
        (None, Route::Payment(plan_id)) => {
            lines.push(Line::from(vec![
                Span::styled("  Plan id:  ", styles::muted_style()),
                Span::raw(plan_id.to_string()),
            ]));
        }
        _ => {}
    }

    lines.push(Line::from(vec![
        Span::styled("  Billing:  ", styles::muted_style()),
        Span::raw(app.checkout_mode.to_string()),
    ]));
    lines.push(Line::from(""));

    if app.checkout_loading {
        lines.push(Line::from(Span::styled(
            "  Contacting payment provider...",
            styles::muted_style(),
        )));
    } else if let Some(ref session) = app.checkout {
        lines.push(Line::from(Span::styled(
            "  Checkout session ready. Open this link to pay:",
            styles::success_style(),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {}", session.hosted_url()),
            styles::highlight_style(),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  When you're done: [s] payment completed · [c] canceled",
            styles::muted_style(),
        )));
    } else {
        if let Some(ref error) = app.checkout_error {
            lines.push(Line::from(Span::styled(
                format!("  {}", error),
                styles::error_style(),
            )));
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            "  [Enter] continue to secure checkout",
            styles::help_desc_style(),
        )));
        lines.push(Line::from(Span::styled(
            "  [m] switch billing mode · [Esc] back to plans",
            styles::muted_style(),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

pub fn render_success(frame: &mut Frame, app: &App, area: Rect) {
    let area = centered_rect_fixed(56, 10, area);

    let plan_line = match &app.payment_plan {
        Some(plan) => format!("  You are now subscribed to {}.", plan.name),
        None => "  Your subscription is now active.".to_string(),
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("  Payment successful", styles::success_style())),
        Line::from(""),
        Line::from(plan_line),
        Line::from(""),
        Line::from(Span::styled(
            "  [3] view your dashboard · [1] home",
            styles::muted_style(),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

pub fn render_cancel(frame: &mut Frame, _app: &App, area: Rect) {
    let area = centered_rect_fixed(56, 10, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("  Payment canceled", styles::error_style())),
        Line::from(""),
        Line::from("  No charge was made."),
        Line::from(""),
        Line::from(Span::styled(
            "  [r] try again · [2] back to plans",
            styles::muted_style(),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
