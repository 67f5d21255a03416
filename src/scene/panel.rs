use glam::Vec2;

use crate::error::VetroError;
use crate::geometry::{extrude_profile, PanelMesh, PanelShape, ProfilePath};
use crate::options::GlassOptions;

/// The fluted glass panel: current shape parameters plus the cached mesh.
///
/// Geometry is rebuilt lazily. Shape changes (options or viewport) only set
/// a dirty flag; [`GlassPanel::rebuild_if_dirty`] regenerates the mesh once
/// per change, however many frames elapse in between.
#[derive(Debug, Clone)]
pub struct GlassPanel {
    shape: PanelShape,
    mesh: PanelMesh,
    dirty: bool,
}

impl GlassPanel {
    /// Panel for the given shape options at a square viewport.
    ///
    /// The mesh starts empty; the first [`GlassPanel::rebuild_if_dirty`]
    /// builds it.
    #[must_use]
    pub fn new(options: &GlassOptions) -> Self {
        Self {
            shape: options.shape(2.0, 2.0),
            mesh: PanelMesh::default(),
            dirty: true,
        }
    }

    /// Resize the panel to cover a viewport with the given pixel dimensions.
    ///
    /// The short side maps to 2 scene units and the long side scales with
    /// the aspect ratio. Degenerate dimensions are ignored.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width <= 0.0
            || height <= 0.0
            || !width.is_finite()
            || !height.is_finite()
        {
            log::debug!("ignoring degenerate viewport {width}x{height}");
            return;
        }
        let aspect = width / height;
        let size = if aspect > 1.0 {
            Vec2::new(2.0 * aspect, 2.0)
        } else {
            Vec2::new(2.0, 2.0 / aspect)
        };
        if size.x != self.shape.width || size.y != self.shape.height {
            self.shape.width = size.x;
            self.shape.height = size.y;
            self.dirty = true;
        }
    }

    /// Apply new shape options. Only value changes dirty the mesh.
    pub fn apply_options(&mut self, options: &GlassOptions) {
        let shape = options.shape(self.shape.width, self.shape.height);
        if shape != self.shape {
            self.shape = shape;
            self.dirty = true;
        }
    }

    /// Regenerate the mesh if the shape changed since the last build.
    ///
    /// Returns whether a rebuild happened so the caller knows to re-upload
    /// vertex data.
    ///
    /// # Errors
    /// [`VetroError::InvalidParameter`] or [`VetroError::DegenerateGeometry`]
    /// if the current shape cannot produce a solid. The panel stays dirty so
    /// a corrected shape retries on the next frame.
    pub fn rebuild_if_dirty(&mut self) -> Result<bool, VetroError> {
        if !self.dirty {
            return Ok(false);
        }
        let profile = ProfilePath::build(&self.shape)?;
        self.mesh = extrude_profile(&profile, self.shape.height)?;
        self.dirty = false;
        log::debug!(
            "rebuilt panel mesh: {} vertices, {} triangles",
            self.mesh.vertices.len(),
            self.mesh.triangle_count()
        );
        Ok(true)
    }

    /// Current shape parameters.
    #[must_use]
    pub fn shape(&self) -> PanelShape {
        self.shape
    }

    /// Most recently built mesh (empty before the first rebuild).
    #[must_use]
    pub fn mesh(&self) -> &PanelMesh {
        &self.mesh
    }

    /// Whether the next [`GlassPanel::rebuild_if_dirty`] will regenerate.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_scales_the_long_side() {
        let mut panel = GlassPanel::new(&GlassOptions::default());

        panel.set_viewport(1600.0, 800.0);
        assert_eq!(panel.shape().width, 4.0);
        assert_eq!(panel.shape().height, 2.0);

        panel.set_viewport(500.0, 1000.0);
        assert_eq!(panel.shape().width, 2.0);
        assert_eq!(panel.shape().height, 4.0);

        panel.set_viewport(900.0, 900.0);
        assert_eq!(panel.shape().width, 2.0);
        assert_eq!(panel.shape().height, 2.0);
    }

    #[test]
    fn test_degenerate_viewport_is_ignored() {
        let mut panel = GlassPanel::new(&GlassOptions::default());
        assert!(panel.rebuild_if_dirty().unwrap());

        for (w, h) in [(0.0, 600.0), (-800.0, 600.0), (f32::NAN, 600.0)] {
            panel.set_viewport(w, h);
            assert!(!panel.is_dirty());
            assert_eq!(panel.shape().width, 2.0);
        }
    }

    #[test]
    fn test_rebuild_happens_once_per_change() {
        let mut panel = GlassPanel::new(&GlassOptions::default());
        assert!(panel.mesh().is_empty());

        assert!(panel.rebuild_if_dirty().unwrap());
        assert!(!panel.mesh().is_empty());
        assert!(!panel.rebuild_if_dirty().unwrap());

        // Same values arriving again must not dirty anything.
        panel.apply_options(&GlassOptions::default());
        assert!(!panel.rebuild_if_dirty().unwrap());

        let options = GlassOptions {
            flutes: 32,
            ..GlassOptions::default()
        };
        panel.apply_options(&options);
        assert!(panel.rebuild_if_dirty().unwrap());
    }

    #[test]
    fn test_rebuild_error_keeps_the_panel_dirty() {
        let mut panel = GlassPanel::new(&GlassOptions::default());
        assert!(panel.rebuild_if_dirty().unwrap());
        let built = panel.mesh().clone();

        // Range metadata is schema-only; a preset can still deserialize a
        // zero flute count and push it through here.
        let bad = GlassOptions {
            flutes: 0,
            ..GlassOptions::default()
        };
        panel.apply_options(&bad);
        assert!(matches!(
            panel.rebuild_if_dirty(),
            Err(VetroError::InvalidParameter(_))
        ));
        assert!(panel.is_dirty());
        assert_eq!(panel.mesh(), &built);

        // A corrected shape retries and recovers on the next pass.
        panel.apply_options(&GlassOptions::default());
        assert!(panel.rebuild_if_dirty().unwrap());
        assert!(!panel.is_dirty());
    }

    #[test]
    fn test_shape_change_changes_the_mesh() {
        let mut panel = GlassPanel::new(&GlassOptions::default());
        let _ = panel.rebuild_if_dirty().unwrap();
        let before = panel.mesh().clone();

        let options = GlassOptions {
            depth: 0.1,
            ..GlassOptions::default()
        };
        panel.apply_options(&options);
        let _ = panel.rebuild_if_dirty().unwrap();

        assert_eq!(panel.mesh().vertices.len(), before.vertices.len());
        assert_ne!(panel.mesh(), &before);
    }

    #[test]
    fn test_viewport_change_resizes_without_losing_options() {
        let options = GlassOptions {
            flutes: 10,
            ..GlassOptions::default()
        };
        let mut panel = GlassPanel::new(&options);
        panel.set_viewport(1920.0, 1080.0);
        let _ = panel.rebuild_if_dirty().unwrap();

        let shape = panel.shape();
        assert_eq!(shape.flutes, 10);
        assert!((shape.width - 2.0 * (1920.0 / 1080.0)).abs() < 1e-5);
    }
}
