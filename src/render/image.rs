//! Raster rendering using tiny-skia
//!
//! [`PixmapSurface`] strokes shapes into an in-memory pixmap that can be
//! written to disk through the image crate.

use std::path::Path;

use anyhow::{Context, Result};
use image::RgbaImage;
use tiny_skia::{Color, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

use super::geometry::stroke;
use super::surface::DrawingSurface;
use crate::config::{PadConfig, ShapeColor};
use crate::domain::Point2;

/// Build a polyline path, closing it back to the first point if requested
fn build_polyline_path(points: &[Point2], closed: bool) -> Option<tiny_skia::Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x as f32, first.y as f32);
    for p in rest {
        pb.line_to(p.x as f32, p.y as f32);
    }
    if closed {
        pb.close();
    }
    pb.finish()
}

/// Build a circle path using cubic bezier curves
fn build_circle_path(cx: f32, cy: f32, r: f32) -> Option<tiny_skia::Path> {
    if r <= 0.0 {
        return None;
    }
    let k = r * stroke::BEZIER_K;

    let mut pb = PathBuilder::new();

    // Start at right, matching an arc swept from angle 0
    pb.move_to(cx + r, cy);
    pb.cubic_to(cx + r, cy + k, cx + k, cy + r, cx, cy + r);
    pb.cubic_to(cx - k, cy + r, cx - r, cy + k, cx - r, cy);
    pb.cubic_to(cx - r, cy - k, cx - k, cy - r, cx, cy - r);
    pb.cubic_to(cx + k, cy - r, cx + r, cy - k, cx + r, cy);

    pb.close();
    pb.finish()
}

fn color(c: ShapeColor) -> Color {
    let [r, g, b, a] = c.to_rgba_u8();
    Color::from_rgba8(r, g, b, a)
}

/// Drawing surface backed by a tiny-skia pixmap
pub struct PixmapSurface {
    pixmap: Pixmap,
    background: Color,
    paint: Paint<'static>,
    stroke: Stroke,
}

impl PixmapSurface {
    /// Create a surface sized and styled from `config`, cleared to its background
    pub fn new(config: &PadConfig) -> Result<Self> {
        let pixmap = Pixmap::new(config.canvas_width, config.canvas_height).with_context(|| {
            format!(
                "Invalid canvas size {}x{}",
                config.canvas_width, config.canvas_height
            )
        })?;

        let mut paint = Paint::default();
        paint.set_color(color(config.stroke_color));
        paint.anti_alias = config.anti_alias;

        let stroke = Stroke {
            width: config.stroke_width,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
            ..Default::default()
        };

        let mut surface = Self {
            pixmap,
            background: color(config.background),
            paint,
            stroke,
        };
        surface.clear();
        Ok(surface)
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Copy the pixmap into an RgbaImage
    pub fn to_image(&self) -> Result<RgbaImage> {
        RgbaImage::from_raw(
            self.pixmap.width(),
            self.pixmap.height(),
            self.pixmap.data().to_vec(),
        )
        .context("Pixmap had incorrect size")
    }

    /// Write the current frame to `path`; the format follows the file extension
    pub fn save(&self, path: &Path) -> Result<()> {
        let img = self.to_image()?;
        img.save(path)
            .with_context(|| format!("Failed to write image to {}", path.display()))?;
        log::info!("Saved {}x{} drawing to {}", img.width(), img.height(), path.display());
        Ok(())
    }

    fn draw_path(&mut self, path: &tiny_skia::Path) {
        self.pixmap
            .stroke_path(path, &self.paint, &self.stroke, Transform::identity(), None);
    }
}

impl DrawingSurface for PixmapSurface {
    fn clear(&mut self) {
        self.pixmap.fill(self.background);
    }

    fn stroke_path(&mut self, points: &[Point2], closed: bool) {
        match build_polyline_path(points, closed) {
            Some(path) => self.draw_path(&path),
            None => log::trace!("skipping degenerate path of {} points", points.len()),
        }
    }

    fn stroke_arc(&mut self, center: Point2, radius: f64) {
        match build_circle_path(center.x as f32, center.y as f32, radius as f32) {
            Some(path) => self.draw_path(&path),
            None => log::trace!("skipping circle with radius {}", radius),
        }
    }
}
