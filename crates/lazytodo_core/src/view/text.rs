//! Plain-text renderer for terminal hosts.

use super::TaskListView;
use std::fmt::Write;

/// Escapes control and bidi formatting characters so user text cannot drive
/// the terminal or reorder the rendered line.
pub fn escape_terminal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if ch.is_control() || is_bidi_format(ch) {
            escaped.extend(ch.escape_default());
        } else {
            escaped.push(ch);
        }
    }
    escaped
}

fn is_bidi_format(ch: char) -> bool {
    matches!(
        ch,
        '\u{061C}' | '\u{200E}' | '\u{200F}' | '\u{202A}'..='\u{202E}' | '\u{2066}'..='\u{2069}'
    )
}

/// Renders the view as terminal lines.
///
/// ```text
/// [x] 1700000000000  Buy milk
/// [ ] 1700000000500  Walk the dog
/// filter: [all] active completed
/// Total: 2 tasks | Completed: 1
/// ```
pub fn render_text(view: &TaskListView) -> String {
    let mut out = String::new();

    for row in &view.rows {
        let mark = if row.completed { 'x' } else { ' ' };
        let _ = writeln!(out, "[{mark}] {}  {}", row.id, escape_terminal(&row.text));
    }

    let filters = view
        .filters
        .iter()
        .map(|control| {
            if control.active {
                format!("[{}]", control.kind)
            } else {
                control.kind.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    let _ = writeln!(out, "filter: {filters}");
    let _ = writeln!(out, "{} | {}", view.total_label, view.completed_label);

    out
}
