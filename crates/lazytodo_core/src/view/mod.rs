//! View model for the task list.
//!
//! # Responsibility
//! - Turn `(tasks, filter)` into visible rows, aggregate counts and labels.
//! - Provide escaping renderers for markup and terminal hosts.
//!
//! # Invariants
//! - `render` is pure and keeps the memory order of `tasks`.
//! - Counts are computed over the unfiltered list.
//! - Exactly one filter control is active.
//! - Task text only reaches output through an escaping writer.

mod html;
mod locale;
mod text;

pub use html::{escape_html, render_html};
pub use locale::{Locale, ParseLocaleError, PluralCategory};
pub use text::{escape_terminal, render_text};

use crate::model::filter::FilterKind;
use crate::model::task::{Task, TaskId};

/// One visible list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: TaskId,
    pub completed: bool,
    /// Raw user text. Escape before inserting into any markup.
    pub text: String,
}

/// One filter trigger of the filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControl {
    pub kind: FilterKind,
    pub label: &'static str,
    pub active: bool,
}

/// Everything a host needs to draw the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListView {
    pub filter: FilterKind,
    pub rows: Vec<TaskRow>,
    pub total: usize,
    pub completed: usize,
    pub total_label: String,
    pub completed_label: String,
    pub delete_label: &'static str,
    pub filters: Vec<FilterControl>,
}

/// Builds the view for `tasks` under `filter`.
pub fn render(tasks: &[Task], filter: FilterKind, locale: Locale) -> TaskListView {
    let rows = tasks
        .iter()
        .filter(|task| filter.matches(task))
        .map(|task| TaskRow {
            id: task.id,
            completed: task.completed,
            text: task.text.clone(),
        })
        .collect();

    let total = tasks.len();
    let completed = tasks.iter().filter(|task| task.completed).count();

    let filters = FilterKind::ALL
        .iter()
        .map(|&kind| FilterControl {
            kind,
            label: locale.filter_label(kind),
            active: kind == filter,
        })
        .collect();

    TaskListView {
        filter,
        rows,
        total,
        completed,
        total_label: locale.total_label(total),
        completed_label: locale.completed_label(completed),
        delete_label: locale.delete_label(),
        filters,
    }
}

#[cfg(test)]
mod tests {
    use super::{render, Locale};
    use crate::model::filter::FilterKind;
    use crate::model::task::Task;

    fn sample() -> Vec<Task> {
        let mut tasks: Vec<Task> = ["a", "b", "c"]
            .iter()
            .zip(1..)
            .map(|(text, id)| Task::from_input(text, id).unwrap())
            .collect();
        tasks[1].toggle();
        tasks
    }

    #[test]
    fn filters_rows_but_not_counts() {
        let tasks = sample();

        let active = render(&tasks, FilterKind::Active, Locale::Ru);
        assert_eq!(
            active.rows.iter().map(|row| row.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert_eq!(active.total, 3);
        assert_eq!(active.completed, 1);

        let completed = render(&tasks, FilterKind::Completed, Locale::Ru);
        assert_eq!(completed.rows.len(), 1);
        assert!(completed.rows.iter().all(|row| row.completed));
        assert_eq!(completed.total, 3);

        let all = render(&tasks, FilterKind::All, Locale::Ru);
        assert_eq!(all.rows.len(), tasks.len());
    }

    #[test]
    fn keeps_memory_order() {
        let mut tasks = sample();
        tasks.reverse();
        let view = render(&tasks, FilterKind::All, Locale::En);
        assert_eq!(
            view.rows.iter().map(|row| row.id).collect::<Vec<_>>(),
            vec![3, 2, 1]
        );
    }

    #[test]
    fn exactly_one_filter_control_is_active() {
        for kind in FilterKind::ALL {
            let view = render(&[], kind, Locale::En);
            let active: Vec<_> = view.filters.iter().filter(|c| c.active).collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].kind, kind);
        }
    }

    #[test]
    fn empty_list_uses_many_form() {
        let view = render(&[], FilterKind::All, Locale::Ru);
        assert_eq!(view.total_label, "Всего: 0 задач");
        assert_eq!(view.completed_label, "Завершено: 0");
    }
}
