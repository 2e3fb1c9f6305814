use crate::domain::ShapeKind;
use crate::render::{self, DrawingSurface};
use crate::session::messages::{CanvasMsg, RenderRequest};
use crate::session::state::CanvasState;
use crate::tools::handlers::handle_canvas_msg;

/// A canvas bound to the surface it draws on.
///
/// Every message runs through the state handlers first; the resulting render
/// request is then carried out against the surface.
pub struct App<S> {
    pub state: CanvasState,
    surface: S,
}

impl<S: DrawingSurface> App<S> {
    pub fn new(surface: S, kind: ShapeKind) -> Self {
        let mut app = Self {
            state: CanvasState::new(kind),
            surface,
        };
        app.redraw(&RenderRequest::Replay);
        app
    }

    pub fn update(&mut self, msg: CanvasMsg) {
        let request = handle_canvas_msg(&mut self.state, msg);
        self.redraw(&request);
    }

    fn redraw(&mut self, request: &RenderRequest) {
        match request {
            RenderRequest::None => {}
            RenderRequest::Replay => render::render(&mut self.surface, &self.state.shapes, None),
            RenderRequest::Preview(shape) => {
                render::render(&mut self.surface, &self.state.shapes, Some(shape))
            }
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
