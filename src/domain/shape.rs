//! Shape primitives drawn on the canvas
//!
//! All shapes store coordinates in surface-local space. Shapes carry no
//! transform of their own: global transforms rewrite the stored points.

use serde::{Deserialize, Serialize};

use super::geometry::{Point2, vec2};

/// Primitive kind offered by the kind selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Line,
    Rectangle,
    Triangle,
    Polygon,
    Circle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Line,
        ShapeKind::Rectangle,
        ShapeKind::Triangle,
        ShapeKind::Polygon,
        ShapeKind::Circle,
    ];

    /// Parse a selector value. Returns `None` for anything outside the closed set.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Lowercase selector name
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Line => "line",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Polygon => "polygon",
            ShapeKind::Circle => "circle",
        }
    }
}

/// A committed or previewed primitive
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Line {
        a: Point2,
        b: Point2,
    },
    /// Two opposite corners; extents may be negative
    Rectangle {
        top_left: Point2,
        bottom_right: Point2,
    },
    Triangle {
        a: Point2,
        b: Point2,
        c: Point2,
    },
    /// At least three vertices, in click order
    Polygon {
        vertices: Vec<Point2>,
    },
    Circle {
        center: Point2,
        radius: f64,
    },
}

impl Shape {
    /// Build the shape described by a drag from `anchor` to `current`.
    ///
    /// Returns `None` for polygons, which are never drawn by dragging.
    pub fn from_drag(kind: ShapeKind, anchor: Point2, current: Point2) -> Option<Shape> {
        match kind {
            ShapeKind::Line => Some(Shape::Line {
                a: anchor,
                b: current,
            }),
            ShapeKind::Rectangle => Some(Shape::Rectangle {
                top_left: anchor,
                bottom_right: current,
            }),
            ShapeKind::Triangle => Some(Shape::Triangle {
                a: anchor,
                b: current,
                c: triangle_apex(anchor, current),
            }),
            ShapeKind::Circle => Some(Shape::Circle {
                center: anchor,
                radius: anchor.distance_to(current),
            }),
            ShapeKind::Polygon => None,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Line { .. } => ShapeKind::Line,
            Shape::Rectangle { .. } => ShapeKind::Rectangle,
            Shape::Triangle { .. } => ShapeKind::Triangle,
            Shape::Polygon { .. } => ShapeKind::Polygon,
            Shape::Circle { .. } => ShapeKind::Circle,
        }
    }

    /// Defining points in storage order (the center, for circles).
    ///
    /// Copies the points out for inspection; use [`Shape::map_points`] to
    /// rewrite them.
    pub fn points(&self) -> Vec<Point2> {
        match self {
            Shape::Line { a, b } => vec![*a, *b],
            Shape::Rectangle {
                top_left,
                bottom_right,
            } => vec![*top_left, *bottom_right],
            Shape::Triangle { a, b, c } => vec![*a, *b, *c],
            Shape::Polygon { vertices } => vertices.clone(),
            Shape::Circle { center, .. } => vec![*center],
        }
    }

    /// Rewrite every defining point in place
    pub fn map_points(&mut self, mut f: impl FnMut(Point2) -> Point2) {
        match self {
            Shape::Line { a, b } => {
                *a = f(*a);
                *b = f(*b);
            }
            Shape::Rectangle {
                top_left,
                bottom_right,
            } => {
                *top_left = f(*top_left);
                *bottom_right = f(*bottom_right);
            }
            Shape::Triangle { a, b, c } => {
                *a = f(*a);
                *b = f(*b);
                *c = f(*c);
            }
            Shape::Polygon { vertices } => {
                for v in vertices.iter_mut() {
                    *v = f(*v);
                }
            }
            Shape::Circle { center, .. } => *center = f(*center),
        }
    }
}

/// Third triangle vertex: horizontal midpoint of the drag, raised above the
/// anchor by the vertical drag distance
pub fn triangle_apex(anchor: Point2, current: Point2) -> Point2 {
    let mid_x = (anchor.x + current.x) / 2.0;
    let height = (current.y - anchor.y).abs();
    vec2(mid_x, anchor.y - height)
}
