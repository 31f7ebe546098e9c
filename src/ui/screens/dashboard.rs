use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, EditField};
use crate::models::SubscriptionStatus;
use crate::ui::styles;
use crate::utils::{format_amount, format_date, format_optional};

use super::form_field;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_profile_panel(frame, app, chunks[0]);
    render_subscription_panel(frame, app, chunks[1]);
}

fn render_profile_panel(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Profile ")
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    let mut lines = vec![Line::from("")];

    if app.dashboard_loading && app.profile.is_none() {
        lines.push(Line::from(Span::styled(
            "  Loading account...",
            styles::muted_style(),
        )));
    } else if let Some(ref error) = app.dashboard_error {
        lines.push(Line::from(Span::styled(
            format!("  {}", error),
            styles::error_style(),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  [r] try again",
            styles::muted_style(),
        )));
    } else if app.editing_profile {
        lines.push(form_field(
            "First name:",
            &app.edit_first_name,
            app.edit_focus == EditField::FirstName,
            false,
        ));
        lines.push(form_field(
            "Last name:",
            &app.edit_last_name,
            app.edit_focus == EditField::LastName,
            false,
        ));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  [Enter] save · [Tab] switch field · [Esc] cancel",
            styles::muted_style(),
        )));
    } else if let Some(ref profile) = app.profile {
        lines.push(Line::from(vec![
            Span::styled("  Name:     ", styles::muted_style()),
            Span::raw(profile.full_name()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("  Email:    ", styles::muted_style()),
            Span::raw(profile.email.clone()),
        ]));
        if let Some(ref joined) = profile.date_joined {
            lines.push(Line::from(vec![
                Span::styled("  Joined:   ", styles::muted_style()),
                Span::raw(format_date(joined)),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  [e] edit profile · [r] reload",
            styles::muted_style(),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "  No profile loaded.",
            styles::muted_style(),
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_subscription_panel(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Subscription ")
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    let mut lines = vec![Line::from("")];

    match &app.subscription {
        _ if app.dashboard_loading && app.subscription.is_none() => {
            lines.push(Line::from(Span::styled(
                "  Loading...",
                styles::muted_style(),
            )));
        }
        Some(SubscriptionStatus::None) => {
            lines.push(Line::from(Span::styled(
                "  No active subscription.",
                styles::muted_style(),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::raw("  Press "),
                Span::styled("[2]", styles::highlight_style()),
                Span::raw(" to browse plans."),
            ]));
        }
        Some(SubscriptionStatus::Active(sub)) => {
            lines.push(Line::from(vec![
                Span::styled("  Plan:     ", styles::muted_style()),
                Span::styled(sub.plan_name().to_string(), styles::highlight_style()),
            ]));
            lines.push(Line::from(vec![
                Span::styled("  Status:   ", styles::muted_style()),
                Span::raw(sub.display_status().to_string()),
            ]));
            lines.push(Line::from(vec![
                Span::styled("  Amount:   ", styles::muted_style()),
                Span::raw(format_amount(sub.amount, &sub.currency)),
            ]));
            lines.push(Line::from(vec![
                Span::styled("  Started:  ", styles::muted_style()),
                Span::raw(format_date(&format_optional(&sub.started_at, "-"))),
            ]));
            if sub.canceled_at.is_some() {
                lines.push(Line::from(vec![
                    Span::styled("  Canceled: ", styles::muted_style()),
                    Span::styled(
                        format_date(&format_optional(&sub.canceled_at, "-")),
                        styles::error_style(),
                    ),
                ]));
            }
        }
        None => {
            lines.push(Line::from(Span::styled("  -", styles::muted_style())));
        }
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
