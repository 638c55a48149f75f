//! Sidebar view model: what the trace list shows, independent of the DOM.

use crate::trace::TraceId;
use crate::traces::TraceList;

/// Entry shown when no trace has been committed yet.
pub const EMPTY_PLACEHOLDER: &str = "Aún no hay trazos";
/// Accessible label of the per-entry delete button.
pub const DELETE_LABEL: &str = "Eliminar trazo";

/// One sidebar row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    /// Index into the trace list (not the display position).
    pub storage_index: usize,
    pub id: TraceId,
    pub label: String,
    pub hovered: bool,
}

/// The sidebar contents, most recent trace first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarView {
    /// No traces: show [`EMPTY_PLACEHOLDER`] and hide "clear all".
    Empty,
    Entries(Vec<SidebarEntry>),
}

impl SidebarView {
    pub fn build(traces: &TraceList, hovered: Option<usize>) -> Self {
        if traces.is_empty() {
            return Self::Empty;
        }

        let entries = traces
            .iter_display()
            .map(|(storage_index, trace)| SidebarEntry {
                storage_index,
                id: trace.id(),
                label: entry_label(storage_index),
                hovered: hovered == Some(storage_index),
            })
            .collect();
        Self::Entries(entries)
    }

    /// The "clear all" control is visible iff at least one trace exists.
    pub fn clear_button_visible(&self) -> bool {
        matches!(self, Self::Entries(entries) if !entries.is_empty())
    }

    pub fn entries(&self) -> &[SidebarEntry] {
        match self {
            Self::Empty => &[],
            Self::Entries(entries) => entries,
        }
    }
}

/// Label of the trace at a storage index (1-based, by drawing order).
pub fn entry_label(storage_index: usize) -> String {
    format!("Trazo {}", storage_index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::Trace;
    use kurbo::Point;

    fn list_of(count: usize) -> TraceList {
        let mut list = TraceList::new();
        for i in 0..count {
            let y = i as f64;
            list.push(Trace::from_points(vec![Point::new(0.0, y), Point::new(1.0, y)]));
        }
        list
    }

    #[test]
    fn test_empty_view() {
        let view = SidebarView::build(&TraceList::new(), None);
        assert_eq!(view, SidebarView::Empty);
        assert!(!view.clear_button_visible());
        assert!(view.entries().is_empty());
    }

    #[test]
    fn test_most_recent_first() {
        let view = SidebarView::build(&list_of(3), None);
        let labels: Vec<&str> = view.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Trazo 3", "Trazo 2", "Trazo 1"]);
        assert!(view.clear_button_visible());
    }

    #[test]
    fn test_hovered_flag_follows_storage_index() {
        let view = SidebarView::build(&list_of(2), Some(0));
        let hovered: Vec<bool> = view.entries().iter().map(|e| e.hovered).collect();
        assert_eq!(hovered, vec![false, true]);
    }
}
