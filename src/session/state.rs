use crate::domain::{AffineMatrix3, Point2, Shape, ShapeKind};
use crate::transform;

/// Committed shapes in insertion order.
///
/// Append-only apart from a full clear. Shapes are anonymous: there is no
/// removal or lookup by id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShapeList {
    shapes: Vec<Shape>,
}

impl ShapeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commit(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    pub fn as_slice(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Rewrite every shape through `matrix`, in place
    pub fn transform_all(&mut self, matrix: &AffineMatrix3) {
        transform::apply_transform(&mut self.shapes, matrix);
    }
}

impl<'a> IntoIterator for &'a ShapeList {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}

/// Pointer phase of the current gesture
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Gesture {
    #[default]
    Idle,
    /// A single-stroke shape is being dragged out from `anchor`
    Dragging { anchor: Point2 },
}

/// Transient in-progress gesture state, separate from the committed shapes
#[derive(Clone, Debug, PartialEq)]
pub struct DrawingSession {
    /// Selected primitive; `None` when the selector delivered an unknown kind
    pub kind: Option<ShapeKind>,
    pub gesture: Gesture,
    /// Vertices clicked so far for the polygon in progress
    pub polygon_points: Vec<Point2>,
    pub circle_center: Option<Point2>,
}

impl Default for DrawingSession {
    fn default() -> Self {
        Self::new(ShapeKind::default())
    }
}

impl DrawingSession {
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind: Some(kind),
            gesture: Gesture::Idle,
            polygon_points: Vec::new(),
            circle_center: None,
        }
    }

    /// Drop every in-progress gesture, keeping the selected kind
    pub fn reset(&mut self) {
        self.gesture = Gesture::Idle;
        self.polygon_points.clear();
        self.circle_center = None;
    }

    /// Switch kind. Discards any gesture even when the kind is unchanged.
    pub fn select_kind(&mut self, kind: Option<ShapeKind>) {
        self.kind = kind;
        self.reset();
    }

    pub fn anchor(&self) -> Option<Point2> {
        match self.gesture {
            Gesture::Dragging { anchor } => Some(anchor),
            Gesture::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, Gesture::Dragging { .. })
    }

    /// Shape the current drag would produce if released at `cursor`
    pub fn drag_shape(&self, cursor: Point2) -> Option<Shape> {
        let kind = self.kind?;
        let anchor = self.anchor()?;
        match kind {
            ShapeKind::Circle => {
                let center = self.circle_center?;
                Some(Shape::Circle {
                    center,
                    radius: center.distance_to(cursor),
                })
            }
            _ => Shape::from_drag(kind, anchor, cursor),
        }
    }
}

/// Everything the canvas owns: committed shapes plus the gesture in progress
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CanvasState {
    pub shapes: ShapeList,
    pub session: DrawingSession,
}

impl CanvasState {
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            shapes: ShapeList::new(),
            session: DrawingSession::new(kind),
        }
    }

    /// Empty the shape list and discard the gesture in progress
    pub fn clear_all(&mut self) {
        self.shapes.clear();
        self.session.reset();
    }
}
