//! Per-route screens.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod payment;
pub mod plans;
pub mod signup;

use ratatui::text::{Line, Span};

use super::styles;

/// Render a labelled single-line text field in the shared form style.
pub(crate) fn form_field(label: &str, value: &str, focused: bool, masked: bool) -> Line<'static> {
    let field_style = if focused {
        styles::selected_style()
    } else {
        styles::list_item_style()
    };

    let shown = if masked {
        "*".repeat(value.len().min(24))
    } else {
        value.chars().take(24).collect()
    };
    let display = format!("{:<24}", shown);
    let cursor = if focused { "▌" } else { "" };

    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("{:<14}[", label), styles::muted_style()),
        Span::styled(format!("{}{}", display, cursor), field_style),
        Span::styled("]", styles::muted_style()),
    ])
}

/// Render a submit button line in the shared form style.
pub(crate) fn form_button(label: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        styles::selected_style()
    } else {
        styles::list_item_style()
    };
    if focused {
        Line::from(vec![
            Span::raw("       ["),
            Span::styled(format!(" ▶ {} ◀ ", label), style),
            Span::raw("]"),
        ])
    } else {
        Line::from(vec![
            Span::raw("       ["),
            Span::styled(format!("   {}   ", label), style),
            Span::raw("]"),
        ])
    }
}
