//! Plain-text layout of the form projection.

use std::fmt::Write as _;

use client_core::FormView;

pub fn render_text(view: &FormView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.heading);

    if let Some(panel) = &view.error_panel {
        let _ = writeln!(out, "[{}] {}", panel.heading, panel.message);
    }

    if let Some(panel) = &view.success_panel {
        let _ = writeln!(out, "[{}]", panel.heading);
        let width = panel
            .rows
            .iter()
            .map(|row| row.label.chars().count())
            .max()
            .unwrap_or(0);
        for row in &panel.rows {
            let pad = width - row.label.chars().count();
            let _ = writeln!(out, "  {}:{} {}", row.label, " ".repeat(pad), row.value);
        }
    }

    out
}
