//! Scene orchestration: one glass panel, one glowing sphere, one clock.
//!
//! [`Scene::advance`] is the per-tick entry point. It takes a single elapsed
//! snapshot, regenerates panel geometry first when shape parameters changed,
//! then evaluates sphere motion and color from that same snapshot, so every
//! value in a frame agrees on what time it is. Material and pacing options
//! are passthrough; the host reads them via [`Scene::options`].

mod panel;
mod sphere;

pub use panel::GlassPanel;
pub use sphere::{GlowSphere, SphereFrame, HALO_SCALE, SPHERE_Z};
use web_time::Instant;

use crate::animation::MotionInput;
use crate::error::VetroError;
use crate::input::PointerTracker;
use crate::options::Options;

/// What one accepted tick produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUpdate {
    /// Whether the panel mesh was regenerated this tick. When set, the host
    /// re-reads [`GlassPanel::mesh`] and re-uploads vertex data.
    pub panel_rebuilt: bool,
    /// Sphere transform, color, and material values for this frame.
    pub sphere: SphereFrame,
}

/// The scene. Owns the entities, the pointer signal, and the clock epoch.
pub struct Scene {
    options: Options,
    panel: GlassPanel,
    sphere: GlowSphere,
    pointer: PointerTracker,
    started: Instant,
    last_advance: Option<Instant>,
}

impl Scene {
    /// Scene with the clock starting now.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self::with_start(options, Instant::now())
    }

    /// Scene with an explicit clock epoch.
    #[must_use]
    pub fn with_start(options: Options, started: Instant) -> Self {
        Self {
            panel: GlassPanel::new(&options.glass),
            sphere: GlowSphere::new(&options.sphere),
            pointer: PointerTracker::new(),
            options,
            started,
            last_advance: None,
        }
    }

    /// Advance one accepted tick.
    ///
    /// # Errors
    /// Propagates geometry errors from the panel rebuild; the sphere is not
    /// evaluated for a tick whose geometry failed.
    pub fn advance(&mut self, now: Instant) -> Result<FrameUpdate, VetroError> {
        let elapsed =
            now.saturating_duration_since(self.started).as_secs_f32();
        let dt = self.last_advance.map_or(0.0, |prev| {
            now.saturating_duration_since(prev).as_secs_f32()
        });
        self.last_advance = Some(now);

        let panel_rebuilt = self.panel.rebuild_if_dirty()?;
        let input = MotionInput {
            raw_target: self.pointer.target(),
            dt,
            elapsed,
        };
        Ok(FrameUpdate {
            panel_rebuilt,
            sphere: self.sphere.update(&input),
        })
    }

    /// Record a display surface resize in pixels.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.panel.set_viewport(width, height);
        self.pointer.set_viewport(width, height);
    }

    /// Record a pointer movement in pixels.
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer.handle_pointer_move(x, y);
    }

    /// Apply a new options snapshot. Only value changes take effect; geometry
    /// is re-derived lazily on the next [`Scene::advance`].
    pub fn apply_options(&mut self, options: Options) {
        if options == self.options {
            return;
        }
        if options.glass != self.options.glass {
            self.panel.apply_options(&options.glass);
        }
        if options.sphere != self.options.sphere {
            self.sphere.apply_options(&options.sphere);
        }
        self.options = options;
    }

    /// Current options snapshot.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The glass panel (mesh access after a rebuild).
    #[must_use]
    pub fn panel(&self) -> &GlassPanel {
        &self.panel
    }
}

#[cfg(test)]
mod tests {
    use web_time::Duration;

    use super::*;
    use crate::animation::{ColorOscillator, Wave};
    use crate::options::{GlassOptions, MotionMode, SphereOptions};

    const EPSILON: f32 = 1e-4;

    fn fixture() -> (Scene, Instant) {
        let started = Instant::now();
        (Scene::with_start(Options::default(), started), started)
    }

    fn at(started: Instant, secs: f32) -> Instant {
        started + Duration::from_secs_f32(secs)
    }

    #[test]
    fn test_first_advance_builds_the_panel() {
        let (mut scene, started) = fixture();
        assert!(scene.panel().mesh().is_empty());

        let update = scene.advance(at(started, 0.0)).unwrap();
        assert!(update.panel_rebuilt);
        assert!(!scene.panel().mesh().is_empty());

        let update = scene.advance(at(started, 1.0 / 30.0)).unwrap();
        assert!(!update.panel_rebuilt);
    }

    #[test]
    fn test_glass_change_rebuilds_exactly_once() {
        let (mut scene, started) = fixture();
        let _ = scene.advance(at(started, 0.0)).unwrap();

        // Re-applying identical options is a no-op.
        scene.apply_options(Options::default());
        assert!(!scene.advance(at(started, 0.1)).unwrap().panel_rebuilt);

        let options = Options {
            glass: GlassOptions {
                flutes: 32,
                ..GlassOptions::default()
            },
            ..Options::default()
        };
        scene.apply_options(options);
        assert!(scene.advance(at(started, 0.2)).unwrap().panel_rebuilt);
        assert!(!scene.advance(at(started, 0.3)).unwrap().panel_rebuilt);
    }

    #[test]
    fn test_geometry_errors_surface_through_advance() {
        let (mut scene, started) = fixture();
        let _ = scene.advance(at(started, 0.0)).unwrap();

        scene.apply_options(Options {
            glass: GlassOptions {
                flutes: 0,
                ..GlassOptions::default()
            },
            ..Options::default()
        });
        assert!(matches!(
            scene.advance(at(started, 0.1)),
            Err(VetroError::InvalidParameter(_))
        ));

        // Corrected options recover, rebuilding exactly once.
        scene.apply_options(Options::default());
        let update = scene.advance(at(started, 0.2)).unwrap();
        assert!(update.panel_rebuilt);
        assert!(!scene.advance(at(started, 0.3)).unwrap().panel_rebuilt);
    }

    #[test]
    fn test_one_elapsed_snapshot_feeds_everything() {
        let (mut scene, started) = fixture();
        let update = scene.advance(at(started, 2.0)).unwrap();

        // Wobble and color must come from the same 2-second snapshot.
        let expected_wobble = (2.0f32 * 0.5).sin() * 0.05;
        assert!((update.sphere.rotation.x - expected_wobble).abs() < EPSILON);

        let defaults = SphereOptions::default();
        let expected_color = ColorOscillator::new(
            defaults.base_rgb(),
            defaults.emissive_intensity,
            Wave::sine(defaults.glow_intensity, defaults.glow_speed),
        )
        .sample(2.0);
        assert_eq!(update.sphere.color, expected_color);
    }

    #[test]
    fn test_pointer_drives_follow_mode() {
        let (mut scene, started) = fixture();
        scene.apply_options(Options {
            sphere: SphereOptions {
                motion_mode: MotionMode::Follow,
                ..SphereOptions::default()
            },
            ..Options::default()
        });
        scene.set_viewport(800.0, 600.0);
        scene.set_pointer(800.0, 300.0);

        let first = scene.advance(at(started, 0.0)).unwrap().sphere.position;
        let mut last = first;
        for i in 1..120 {
            let tick = at(started, i as f32 / 30.0);
            last = scene.advance(tick).unwrap().sphere.position;
        }
        // Target maps to x = 1, right of the base position.
        assert!(last.x > first.x);
        assert!((last.x - 1.0).abs() < 0.1);
    }

    #[test]
    fn test_material_options_pass_through() {
        let (mut scene, _) = fixture();
        assert!((scene.options().material.ior - 1.5).abs() < EPSILON);

        let mut options = scene.options().clone();
        options.material.ior = 2.0;
        scene.apply_options(options);
        assert!((scene.options().material.ior - 2.0).abs() < EPSILON);
    }
}
