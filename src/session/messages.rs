//! Message types for a drawing session
//!
//! Every input the canvas reacts to (pointer, kind selector, command buttons)
//! is funnelled through [`CanvasMsg`].

use crate::domain::{Point2, Shape, ShapeKind};
use crate::transform::TransformStep;

/// Pointer events in surface-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerAction {
    Down(Point2),
    Move(Point2),
    Up(Point2),
}

/// All canvas messages
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasMsg {
    Pointer(PointerAction),
    /// Kind selector changed; `None` for an unrecognised kind
    KindChanged(Option<ShapeKind>),
    CompletePolygon,
    Clear,
    Transform(TransformStep),
}

impl CanvasMsg {
    pub fn pointer_down(p: Point2) -> Self {
        CanvasMsg::Pointer(PointerAction::Down(p))
    }

    pub fn pointer_move(p: Point2) -> Self {
        CanvasMsg::Pointer(PointerAction::Move(p))
    }

    pub fn pointer_up(p: Point2) -> Self {
        CanvasMsg::Pointer(PointerAction::Up(p))
    }

    pub fn select(kind: ShapeKind) -> Self {
        CanvasMsg::KindChanged(Some(kind))
    }

    pub fn translate() -> Self {
        CanvasMsg::Transform(TransformStep::Translate)
    }

    pub fn scale() -> Self {
        CanvasMsg::Transform(TransformStep::Scale)
    }

    pub fn rotate() -> Self {
        CanvasMsg::Transform(TransformStep::Rotate)
    }
}

/// Redraw the adapter must perform after a message was handled
#[derive(Debug, Clone, PartialEq)]
pub enum RenderRequest {
    /// Nothing visible changed
    None,
    /// Clear and replay the committed shapes
    Replay,
    /// Replay, then stroke this uncommitted shape on top
    Preview(Shape),
}
