//! Canvas message handlers
//!
//! Handles CanvasMsg for all drawing operations. Handlers only mutate the
//! canvas state; the caller performs the returned render request.

use crate::domain::{Point2, Shape, ShapeKind};
use crate::session::messages::{CanvasMsg, PointerAction, RenderRequest};
use crate::session::state::{CanvasState, Gesture};
use crate::transform::TransformStep;

/// Minimum number of clicked vertices before a polygon can be completed
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Handle a CanvasMsg, modifying the canvas state
///
/// Returns what the caller has to redraw.
pub fn handle_canvas_msg(state: &mut CanvasState, msg: CanvasMsg) -> RenderRequest {
    match msg {
        CanvasMsg::Pointer(PointerAction::Down(p)) => handle_pointer_down(state, p),
        CanvasMsg::Pointer(PointerAction::Move(p)) => handle_pointer_move(state, p),
        CanvasMsg::Pointer(PointerAction::Up(p)) => handle_pointer_up(state, p),
        CanvasMsg::KindChanged(kind) => handle_kind_changed(state, kind),
        CanvasMsg::CompletePolygon => handle_complete_polygon(state),
        CanvasMsg::Clear => {
            log::debug!("clearing {} shapes", state.shapes.len());
            state.clear_all();
            RenderRequest::Replay
        }
        CanvasMsg::Transform(step) => handle_transform(state, step),
    }
}

// ============================================================================
// Pointer handlers
// ============================================================================

fn handle_pointer_down(state: &mut CanvasState, p: Point2) -> RenderRequest {
    let session = &mut state.session;
    match session.kind {
        None => {
            log::trace!("pointer down with no recognised kind, ignoring");
            RenderRequest::None
        }
        Some(ShapeKind::Polygon) => {
            session.polygon_points.push(p);
            log::trace!("polygon vertex {} at {:?}", session.polygon_points.len(), p);
            RenderRequest::Replay
        }
        Some(kind) => {
            session.gesture = Gesture::Dragging { anchor: p };
            if kind == ShapeKind::Circle {
                session.circle_center = Some(p);
            }
            RenderRequest::None
        }
    }
}

fn handle_pointer_move(state: &mut CanvasState, p: Point2) -> RenderRequest {
    match state.session.drag_shape(p) {
        Some(shape) => RenderRequest::Preview(shape),
        None => RenderRequest::None,
    }
}

fn handle_pointer_up(state: &mut CanvasState, p: Point2) -> RenderRequest {
    let session = &mut state.session;
    if session.kind == Some(ShapeKind::Polygon) {
        return RenderRequest::None;
    }

    let shape = session.drag_shape(p);
    session.gesture = Gesture::Idle;
    session.circle_center = None;

    match shape {
        Some(shape) => {
            log::debug!("committing {}", shape.kind().name());
            state.shapes.commit(shape);
            RenderRequest::Replay
        }
        None => {
            log::trace!("pointer up without an active drag, ignoring");
            RenderRequest::None
        }
    }
}

// ============================================================================
// Selector and command handlers
// ============================================================================

fn handle_kind_changed(state: &mut CanvasState, kind: Option<ShapeKind>) -> RenderRequest {
    let was_dragging = state.session.is_dragging();
    state.session.select_kind(kind);
    // A live preview may still be on screen
    if was_dragging {
        RenderRequest::Replay
    } else {
        RenderRequest::None
    }
}

fn handle_complete_polygon(state: &mut CanvasState) -> RenderRequest {
    let points = &mut state.session.polygon_points;
    if points.len() < MIN_POLYGON_VERTICES {
        log::debug!(
            "polygon needs {} vertices, have {}",
            MIN_POLYGON_VERTICES,
            points.len()
        );
        return RenderRequest::None;
    }
    let vertices = std::mem::take(points);
    log::debug!("committing polygon with {} vertices", vertices.len());
    state.shapes.commit(Shape::Polygon { vertices });
    RenderRequest::Replay
}

fn handle_transform(state: &mut CanvasState, step: TransformStep) -> RenderRequest {
    log::debug!("applying {:?} to {} shapes", step, state.shapes.len());
    state.shapes.transform_all(&step.matrix());
    RenderRequest::Replay
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vec2;
    use proptest::prelude::*;

    fn drag(state: &mut CanvasState, from: Point2, to: Point2) -> RenderRequest {
        handle_canvas_msg(state, CanvasMsg::pointer_down(from));
        handle_canvas_msg(state, CanvasMsg::pointer_move(to));
        handle_canvas_msg(state, CanvasMsg::pointer_up(to))
    }

    fn click(state: &mut CanvasState, p: Point2) {
        handle_canvas_msg(state, CanvasMsg::pointer_down(p));
        handle_canvas_msg(state, CanvasMsg::pointer_up(p));
    }

    #[test]
    fn test_line_drag_commits() {
        let mut state = CanvasState::new(ShapeKind::Line);
        let request = drag(&mut state, vec2(1.0, 2.0), vec2(3.0, 4.0));
        assert_eq!(request, RenderRequest::Replay);
        assert_eq!(
            state.shapes.as_slice(),
            &[Shape::Line {
                a: vec2(1.0, 2.0),
                b: vec2(3.0, 4.0)
            }]
        );
        assert_eq!(state.session.gesture, Gesture::Idle);
    }

    #[test]
    fn test_move_previews_without_commit() {
        let mut state = CanvasState::new(ShapeKind::Rectangle);
        handle_canvas_msg(&mut state, CanvasMsg::pointer_down(vec2(10.0, 10.0)));
        let request = handle_canvas_msg(&mut state, CanvasMsg::pointer_move(vec2(0.0, 5.0)));
        assert_eq!(
            request,
            RenderRequest::Preview(Shape::Rectangle {
                top_left: vec2(10.0, 10.0),
                bottom_right: vec2(0.0, 5.0)
            })
        );
        assert!(state.shapes.is_empty());
    }

    #[test]
    fn test_move_while_idle_is_noop() {
        let mut state = CanvasState::new(ShapeKind::Line);
        let request = handle_canvas_msg(&mut state, CanvasMsg::pointer_move(vec2(1.0, 1.0)));
        assert_eq!(request, RenderRequest::None);
    }

    #[test]
    fn test_move_after_release_is_noop() {
        let mut state = CanvasState::new(ShapeKind::Rectangle);
        drag(&mut state, vec2(0.0, 0.0), vec2(5.0, 5.0));
        let request = handle_canvas_msg(&mut state, CanvasMsg::pointer_move(vec2(9.0, 9.0)));
        assert_eq!(request, RenderRequest::None);
        assert_eq!(state.shapes.len(), 1);
    }

    #[test]
    fn test_up_without_down_is_noop() {
        let mut state = CanvasState::new(ShapeKind::Triangle);
        let request = handle_canvas_msg(&mut state, CanvasMsg::pointer_up(vec2(1.0, 1.0)));
        assert_eq!(request, RenderRequest::None);
        assert!(state.shapes.is_empty());
    }

    #[test]
    fn test_triangle_derivation() {
        let mut state = CanvasState::new(ShapeKind::Triangle);
        drag(&mut state, vec2(0.0, 0.0), vec2(10.0, 20.0));
        assert_eq!(
            state.shapes.as_slice(),
            &[Shape::Triangle {
                a: vec2(0.0, 0.0),
                b: vec2(10.0, 20.0),
                c: vec2(5.0, -20.0)
            }]
        );
    }

    #[test]
    fn test_circle_radius() {
        let mut state = CanvasState::new(ShapeKind::Circle);
        drag(&mut state, vec2(5.0, 5.0), vec2(9.0, 5.0));
        assert_eq!(
            state.shapes.as_slice(),
            &[Shape::Circle {
                center: vec2(5.0, 5.0),
                radius: 4.0
            }]
        );
        assert_eq!(state.session.circle_center, None);
    }

    #[test]
    fn test_kind_switch_mid_circle_drops_gesture() {
        let mut state = CanvasState::new(ShapeKind::Circle);
        handle_canvas_msg(&mut state, CanvasMsg::pointer_down(vec2(5.0, 5.0)));
        let request = handle_canvas_msg(&mut state, CanvasMsg::select(ShapeKind::Circle));
        assert_eq!(request, RenderRequest::Replay);
        let request = handle_canvas_msg(&mut state, CanvasMsg::pointer_up(vec2(9.0, 5.0)));
        assert_eq!(request, RenderRequest::None);
        assert!(state.shapes.is_empty());
    }

    #[test]
    fn test_polygon_gating() {
        let mut state = CanvasState::new(ShapeKind::Polygon);
        click(&mut state, vec2(0.0, 0.0));
        click(&mut state, vec2(10.0, 0.0));

        let request = handle_canvas_msg(&mut state, CanvasMsg::CompletePolygon);
        assert_eq!(request, RenderRequest::None);
        assert!(state.shapes.is_empty());
        assert_eq!(state.session.polygon_points.len(), 2);

        click(&mut state, vec2(10.0, 10.0));
        let request = handle_canvas_msg(&mut state, CanvasMsg::CompletePolygon);
        assert_eq!(request, RenderRequest::Replay);
        assert_eq!(
            state.shapes.as_slice(),
            &[Shape::Polygon {
                vertices: vec![vec2(0.0, 0.0), vec2(10.0, 0.0), vec2(10.0, 10.0)]
            }]
        );
        assert!(state.session.polygon_points.is_empty());
    }

    #[test]
    fn test_polygon_down_replays_and_never_previews() {
        let mut state = CanvasState::new(ShapeKind::Polygon);
        let request = handle_canvas_msg(&mut state, CanvasMsg::pointer_down(vec2(1.0, 1.0)));
        assert_eq!(request, RenderRequest::Replay);
        let request = handle_canvas_msg(&mut state, CanvasMsg::pointer_move(vec2(2.0, 2.0)));
        assert_eq!(request, RenderRequest::None);
        assert_eq!(state.session.gesture, Gesture::Idle);
    }

    #[test]
    fn test_completed_polygon_is_independent_of_accumulator() {
        let mut state = CanvasState::new(ShapeKind::Polygon);
        for p in [vec2(0.0, 0.0), vec2(4.0, 0.0), vec2(4.0, 4.0)] {
            click(&mut state, p);
        }
        handle_canvas_msg(&mut state, CanvasMsg::CompletePolygon);
        click(&mut state, vec2(99.0, 99.0));
        assert_eq!(state.shapes.as_slice()[0].points().len(), 3);
        assert_eq!(state.session.polygon_points, vec![vec2(99.0, 99.0)]);
    }

    #[test]
    fn test_unknown_kind_constructs_nothing() {
        let mut state = CanvasState::new(ShapeKind::Line);
        handle_canvas_msg(&mut state, CanvasMsg::KindChanged(ShapeKind::from_name("star")));
        let request = handle_canvas_msg(&mut state, CanvasMsg::pointer_down(vec2(0.0, 0.0)));
        assert_eq!(request, RenderRequest::None);
        let request = handle_canvas_msg(&mut state, CanvasMsg::pointer_move(vec2(5.0, 5.0)));
        assert_eq!(request, RenderRequest::None);
        drag(&mut state, vec2(0.0, 0.0), vec2(5.0, 5.0));
        assert!(state.shapes.is_empty());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut state = CanvasState::new(ShapeKind::Line);
        drag(&mut state, vec2(0.0, 0.0), vec2(5.0, 5.0));
        handle_canvas_msg(&mut state, CanvasMsg::select(ShapeKind::Polygon));
        click(&mut state, vec2(1.0, 1.0));
        handle_canvas_msg(&mut state, CanvasMsg::select(ShapeKind::Circle));
        handle_canvas_msg(&mut state, CanvasMsg::pointer_down(vec2(3.0, 3.0)));

        let request = handle_canvas_msg(&mut state, CanvasMsg::Clear);
        assert_eq!(request, RenderRequest::Replay);
        assert_eq!(state, CanvasState::new(ShapeKind::Circle));

        drag(&mut state, vec2(0.0, 0.0), vec2(0.0, 2.0));
        let mut fresh = CanvasState::new(ShapeKind::Circle);
        drag(&mut fresh, vec2(0.0, 0.0), vec2(0.0, 2.0));
        assert_eq!(state, fresh);
    }

    #[test]
    fn test_transform_command_moves_committed_shapes() {
        let mut state = CanvasState::new(ShapeKind::Line);
        drag(&mut state, vec2(0.0, 0.0), vec2(5.0, 5.0));
        let request = handle_canvas_msg(&mut state, CanvasMsg::translate());
        assert_eq!(request, RenderRequest::Replay);
        assert_eq!(
            state.shapes.as_slice(),
            &[Shape::Line {
                a: vec2(20.0, 20.0),
                b: vec2(25.0, 25.0)
            }]
        );
    }

    fn single_stroke_kind() -> impl Strategy<Value = ShapeKind> {
        prop_oneof![
            Just(ShapeKind::Line),
            Just(ShapeKind::Rectangle),
            Just(ShapeKind::Triangle),
            Just(ShapeKind::Circle),
        ]
    }

    fn point() -> impl Strategy<Value = Point2> {
        (-500.0f64..500.0, -500.0f64..500.0).prop_map(|(x, y)| vec2(x, y))
    }

    proptest! {
        #[test]
        fn prop_each_drag_commits_once(
            gestures in prop::collection::vec(
                (single_stroke_kind(), point(), prop::collection::vec(point(), 0..4), point()),
                0..12,
            )
        ) {
            let mut state = CanvasState::default();
            for (kind, down, moves, up) in &gestures {
                handle_canvas_msg(&mut state, CanvasMsg::select(*kind));
                handle_canvas_msg(&mut state, CanvasMsg::pointer_down(*down));
                for p in moves {
                    handle_canvas_msg(&mut state, CanvasMsg::pointer_move(*p));
                }
                handle_canvas_msg(&mut state, CanvasMsg::pointer_up(*up));
            }
            prop_assert_eq!(state.shapes.len(), gestures.len());
            for (shape, (kind, ..)) in state.shapes.iter().zip(&gestures) {
                prop_assert_eq!(shape.kind(), *kind);
            }
        }
    }
}
