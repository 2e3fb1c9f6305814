//! Drawing surface abstraction consumed by the renderer

use crate::domain::Point2;

/// Stroke-only drawing target
pub trait DrawingSurface {
    /// Erase everything drawn so far
    fn clear(&mut self);

    /// Stroke a polyline through `points`, closing it back to the first point if `closed`
    fn stroke_path(&mut self, points: &[Point2], closed: bool);

    /// Stroke a full circle
    fn stroke_arc(&mut self, center: Point2, radius: f64);
}

/// One call received by a [`RecordingSurface`]
#[derive(Clone, Debug, PartialEq)]
pub enum StrokeCall {
    Clear,
    Path { points: Vec<Point2>, closed: bool },
    Arc { center: Point2, radius: f64 },
}

/// Surface that records calls instead of drawing
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<StrokeCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call since creation
    pub fn calls(&self) -> &[StrokeCall] {
        &self.calls
    }

    /// Calls made since the most recent clear, i.e. what is currently visible
    pub fn frame(&self) -> &[StrokeCall] {
        let start = self
            .calls
            .iter()
            .rposition(|call| *call == StrokeCall::Clear)
            .map_or(0, |i| i + 1);
        &self.calls[start..]
    }
}

impl DrawingSurface for RecordingSurface {
    fn clear(&mut self) {
        self.calls.push(StrokeCall::Clear);
    }

    fn stroke_path(&mut self, points: &[Point2], closed: bool) {
        self.calls.push(StrokeCall::Path {
            points: points.to_vec(),
            closed,
        });
    }

    fn stroke_arc(&mut self, center: Point2, radius: f64) {
        self.calls.push(StrokeCall::Arc { center, radius });
    }
}

impl std::fmt::Display for StrokeCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrokeCall::Clear => write!(f, "clear"),
            StrokeCall::Path { points, closed } => {
                write!(f, "path")?;
                for p in points {
                    write!(f, " ({}, {})", p.x, p.y)?;
                }
                if *closed {
                    write!(f, " closed")?;
                }
                Ok(())
            }
            StrokeCall::Arc { center, radius } => {
                write!(f, "arc ({}, {}) r={}", center.x, center.y, radius)
            }
        }
    }
}
