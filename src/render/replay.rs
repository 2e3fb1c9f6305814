//! Full-surface replay of the shape list

use super::geometry::rectangle_outline;
use super::surface::DrawingSurface;
use crate::domain::Shape;

/// Clear `surface` and stroke every shape in order, then `preview` on top.
///
/// The preview is drawn but never added to the list. Calling this twice
/// with the same inputs issues the same sequence of surface calls.
pub fn render<'a, S>(
    surface: &mut S,
    shapes: impl IntoIterator<Item = &'a Shape>,
    preview: Option<&Shape>,
) where
    S: DrawingSurface + ?Sized,
{
    surface.clear();
    for shape in shapes {
        stroke_shape(surface, shape);
    }
    if let Some(shape) = preview {
        stroke_shape(surface, shape);
    }
}

/// Stroke the outline of a single shape
pub fn stroke_shape<S>(surface: &mut S, shape: &Shape)
where
    S: DrawingSurface + ?Sized,
{
    match shape {
        Shape::Line { a, b } => surface.stroke_path(&[*a, *b], false),
        Shape::Rectangle {
            top_left,
            bottom_right,
        } => surface.stroke_path(&rectangle_outline(*top_left, *bottom_right), true),
        Shape::Triangle { a, b, c } => surface.stroke_path(&[*a, *b, *c], true),
        Shape::Polygon { vertices } => surface.stroke_path(vertices, true),
        Shape::Circle { center, radius } => surface.stroke_arc(*center, *radius),
    }
}
