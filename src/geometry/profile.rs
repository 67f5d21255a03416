//! Fluted cross-section outline built from piecewise cubic Béziers.
//!
//! Convention used throughout: flute anchors sit on the `y = 0` baseline and
//! both control points of each segment sit at `y = depth`, inset horizontally
//! by `flute_width * curvature` from their anchors. Under this convention
//! `x(t)` is monotone non-decreasing per segment for any curvature in
//! `[0, 1]`, so the outline never self-intersects, and each flute peaks at
//! `0.75 * depth` at its midpoint. The closing edge back to the start runs
//! along the baseline chord.

use glam::Vec2;

use super::PanelShape;
use crate::error::VetroError;

/// Sampled points per flute.
pub(crate) const SAMPLES_PER_FLUTE: usize = 10;

/// Sampled closed cross-section outline of a fluted panel.
///
/// Points run left to right along the fluted face, from `(-width/2, 0)` to
/// `(width/2, 0)`; the polygon is implicitly closed back to the first point.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfilePath {
    points: Vec<Vec2>,
}

impl ProfilePath {
    /// Sample the fluted outline for `shape`.
    ///
    /// Produces exactly `shape.flutes * 10` points, distributed evenly in
    /// curve parameter space across the whole path (equal parameter steps,
    /// not equal x steps). Consecutive segments share their boundary anchor,
    /// so the path is continuous by construction.
    ///
    /// # Errors
    /// [`VetroError::InvalidParameter`] when the shape fails validation.
    pub fn build(shape: &PanelShape) -> Result<Self, VetroError> {
        shape.validate()?;

        let flutes = shape.flutes as usize;
        let n = flutes * SAMPLES_PER_FLUTE;
        let flute_width = shape.width / shape.flutes as f32;
        let half_width = shape.width * 0.5;

        let mut points = Vec::with_capacity(n);
        for k in 0..n {
            // Global parameter over the whole path, split into a segment
            // index plus a local curve parameter.
            let u = k as f32 / (n - 1) as f32;
            let scaled = u * flutes as f32;
            let seg = (scaled.floor() as usize).min(flutes - 1);
            let t = scaled - seg as f32;

            let x1 = seg as f32 * flute_width - half_width;
            points.push(flute_point(
                x1,
                flute_width,
                shape.depth,
                shape.curvature,
                t,
            ));
        }

        Ok(Self { points })
    }

    /// Wrap an already-sampled outline.
    ///
    /// The points are taken as-is; degeneracy is checked at extrusion time,
    /// not here.
    #[must_use]
    pub fn from_points(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    /// Sampled outline points, in path order.
    #[must_use]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Number of sampled points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the path holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Horizontal extent of the outline (max x minus min x).
    #[must_use]
    pub fn x_span(&self) -> f32 {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for p in &self.points {
            min = min.min(p.x);
            max = max.max(p.x);
        }
        if min > max {
            0.0
        } else {
            max - min
        }
    }
}

/// Evaluate one flute's cubic Bézier at local parameter `t`.
///
/// The segment spans `[x1, x1 + flute_width]` with anchors on the baseline
/// and both control points raised to `depth`.
fn flute_point(
    x1: f32,
    flute_width: f32,
    depth: f32,
    curvature: f32,
    t: f32,
) -> Vec2 {
    let x2 = x1 + flute_width;
    let inset = flute_width * curvature;
    cubic_bezier(
        Vec2::new(x1, 0.0),
        Vec2::new(x1 + inset, depth),
        Vec2::new(x2 - inset, depth),
        Vec2::new(x2, 0.0),
        t,
    )
}

/// Standard cubic Bézier point evaluation.
fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    let t2 = t * t;
    p0 * (mt2 * mt)
        + p1 * (3.0 * mt2 * t)
        + p2 * (3.0 * mt * t2)
        + p3 * (t2 * t)
}
