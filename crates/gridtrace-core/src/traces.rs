//! Ordered collection of committed traces.

use crate::trace::Trace;

/// All committed traces, in drawing order (index 0 = first drawn).
///
/// The sidebar shows traces most recent first; [`TraceList::storage_index`]
/// maps a display position back to a storage index.
#[derive(Debug, Clone, Default)]
pub struct TraceList {
    traces: Vec<Trace>,
}

impl TraceList {
    /// Create a new empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a trace at the end.
    pub fn push(&mut self, trace: Trace) {
        self.traces.push(trace);
    }

    /// Remove the trace at a storage index.
    pub fn remove(&mut self, index: usize) -> Option<Trace> {
        (index < self.traces.len()).then(|| self.traces.remove(index))
    }

    /// Remove all traces.
    pub fn clear(&mut self) {
        self.traces.clear();
    }

    pub fn get(&self, index: usize) -> Option<&Trace> {
        self.traces.get(index)
    }

    /// Traces in storage order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Trace> {
        self.traces.iter()
    }

    /// `(storage_index, trace)` pairs, most recent first.
    pub fn iter_display(&self) -> impl Iterator<Item = (usize, &Trace)> {
        self.traces.iter().enumerate().rev()
    }

    /// Map a display position (0 = most recent) to a storage index.
    pub fn storage_index(&self, display_position: usize) -> Option<usize> {
        self.traces.len().checked_sub(display_position + 1)
    }

    pub fn len(&self) -> usize {
        self.traces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }
}
