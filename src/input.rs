//! Pointer signal tracking and mapping into scene space.
//!
//! Pointer events arrive in pixels. The follow target the animation consumes
//! lives in scene space: x spans `[-1, 1]` left to right, y is compressed to
//! half range and shifted into the lower band `[-1.5, -0.5]` top to bottom,
//! keeping the followed object below the panel's midline.

use glam::Vec2;

/// Target reported before any pointer event arrives (viewport center).
pub const RESTING_TARGET: Vec2 = Vec2::new(0.0, -1.0);

/// Map a pointer position in pixels to the scene-space follow target.
///
/// Degenerate viewports (non-positive or non-finite dimensions) map to
/// [`RESTING_TARGET`] instead of propagating NaN into the filter chain.
#[must_use]
pub fn pointer_to_scene(pixel: Vec2, viewport: Vec2) -> Vec2 {
    if viewport.x <= 0.0
        || viewport.y <= 0.0
        || !viewport.x.is_finite()
        || !viewport.y.is_finite()
    {
        return RESTING_TARGET;
    }
    let x = (pixel.x / viewport.x) * 2.0 - 1.0;
    let y = (-(pixel.y / viewport.y) * 2.0 + 1.0) * 0.5 - 1.0;
    Vec2::new(x, y)
}

/// Tracks the viewport size and the most recent mapped pointer target.
///
/// Mapping happens at event time with the viewport known then; a later
/// resize does not retroactively move the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerTracker {
    viewport: Vec2,
    target: Vec2,
}

impl PointerTracker {
    /// Tracker reporting the resting target until a viewport is known.
    ///
    /// The zero viewport counts as degenerate, so pointer events arriving
    /// before the first [`PointerTracker::set_viewport`] stay at rest
    /// instead of mapping against made-up dimensions.
    #[must_use]
    pub fn new() -> Self {
        Self {
            viewport: Vec2::ZERO,
            target: RESTING_TARGET,
        }
    }

    /// Record the display surface size in pixels.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
    }

    /// Record a pointer movement in pixels and update the mapped target.
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) {
        self.target = pointer_to_scene(Vec2::new(x, y), self.viewport);
    }

    /// Most recent scene-space follow target.
    #[must_use]
    pub fn target(&self) -> Vec2 {
        self.target
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}
