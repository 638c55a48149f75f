//! Freehand traces.

use kurbo::{BezPath, Point};
use uuid::Uuid;

/// Unique identifier for a trace.
pub type TraceId = Uuid;

/// A freehand polyline (series of canvas-local points).
#[derive(Debug, Clone)]
pub struct Trace {
    pub(crate) id: TraceId,
    /// Points in drawing order.
    pub points: Vec<Point>,
}

impl Trace {
    /// Create a new empty trace.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            points: Vec::new(),
        }
    }

    /// Create from existing points.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self {
            id: Uuid::new_v4(),
            points,
        }
    }

    pub fn id(&self) -> TraceId {
        self.id
    }

    /// Add a point to the trace.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the trace is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the trace has enough points to be drawn as a line.
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= 2
    }

    /// Polyline through all points.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();

        let Some(first) = self.points.first() else {
            return path;
        };

        path.move_to(*first);
        for point in self.points.iter().skip(1) {
            path.line_to(*point);
        }

        path
    }
}

impl Default for Trace {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Trace {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    #[test]
    fn test_trace_creation() {
        let trace = Trace::new();
        assert!(trace.is_empty());
        assert!(!trace.is_drawable());
    }

    #[test]
    fn test_add_points() {
        let mut trace = Trace::new();
        trace.add_point(Point::new(0.0, 0.0));
        assert!(!trace.is_drawable());
        trace.add_point(Point::new(10.0, 10.0));
        assert_eq!(trace.len(), 2);
        assert!(trace.is_drawable());
    }

    #[test]
    fn test_to_path() {
        let trace = Trace::from_points(vec![
            Point::new(10.0, 10.0),
            Point::new(50.0, 10.0),
            Point::new(50.0, 50.0),
        ]);

        let elements: Vec<PathEl> = trace.to_path().elements().to_vec();
        assert_eq!(
            elements,
            vec![
                PathEl::MoveTo(Point::new(10.0, 10.0)),
                PathEl::LineTo(Point::new(50.0, 10.0)),
                PathEl::LineTo(Point::new(50.0, 50.0)),
            ]
        );
    }

    #[test]
    fn test_equality_ignores_id() {
        let a = Trace::from_points(vec![Point::new(1.0, 2.0)]);
        let b = Trace::from_points(vec![Point::new(1.0, 2.0)]);
        assert_ne!(a.id(), b.id());
        assert_eq!(a, b);
    }
}
