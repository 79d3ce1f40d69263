//! Markup renderer for hosts that insert raw HTML.

use super::TaskListView;
use std::fmt::Write;

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Renders the task list, filter bar and counters as HTML.
///
/// Row and filter triggers carry `data-id` / `data-filter` attributes that a
/// host maps back to [`crate::bindings::UiEvent`]s.
pub fn render_html(view: &TaskListView) -> String {
    let mut out = String::new();

    out.push_str("<ul id=\"task-list\">\n");
    for row in &view.rows {
        let class = if row.completed {
            "task-item completed"
        } else {
            "task-item"
        };
        let checked = if row.completed { " checked" } else { "" };
        let _ = write!(
            out,
            "  <li class=\"{class}\">\
<div class=\"task-content\">\
<input type=\"checkbox\" class=\"task-checkbox\"{checked} data-id=\"{id}\">\
<span class=\"task-text\">{text}</span>\
</div>\
<button class=\"delete-btn\" data-id=\"{id}\">{delete}</button>\
</li>\n",
            id = row.id,
            text = escape_html(&row.text),
            delete = escape_html(view.delete_label),
        );
    }
    out.push_str("</ul>\n");

    out.push_str("<div class=\"filters\">");
    for control in &view.filters {
        let class = if control.active {
            "filter-btn active"
        } else {
            "filter-btn"
        };
        let _ = write!(
            out,
            "<button class=\"{class}\" data-filter=\"{kind}\">{label}</button>",
            kind = control.kind,
            label = escape_html(control.label),
        );
    }
    out.push_str("</div>\n");

    let _ = writeln!(
        out,
        "<div class=\"stats\"><span id=\"total-tasks\">{}</span><span id=\"completed-tasks\">{}</span></div>",
        escape_html(&view.total_label),
        escape_html(&view.completed_label),
    );

    out
}
