use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::styles;
use crate::utils::truncate_string;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Available Plans ")
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    let mut lines = vec![Line::from("")];

    if app.plans_loading && app.plans.is_empty() {
        lines.push(Line::from(Span::styled(
            "  Loading plans...",
            styles::muted_style(),
        )));
    } else if let Some(ref error) = app.plans_error {
        lines.push(Line::from(Span::styled(
            format!("  Could not load plans: {}", error),
            styles::error_style(),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  [r] try again",
            styles::muted_style(),
        )));
    } else if app.plans.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No plans are available right now.",
            styles::muted_style(),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            format!("  {:<24}{:>14}  {:<18}", "Plan", "Price", "Seats"),
            styles::muted_style(),
        )));
        lines.push(Line::from(""));

        for (i, plan) in app.plans.iter().enumerate() {
            let text = format!(
                "  {:<24}{:>14}  {:<18}",
                truncate_string(&plan.name, 22),
                plan.display_price(),
                plan.display_max_users()
            );
            let style = if i == app.plan_selection {
                styles::selected_style()
            } else {
                styles::list_item_style()
            };
            lines.push(Line::from(Span::styled(text, style)));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  [Enter] subscribe · [j/k] move · [r] refresh",
            styles::muted_style(),
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
