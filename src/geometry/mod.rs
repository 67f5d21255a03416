//! Fluted panel geometry: shape parameters, sampled cross-section profile,
//! and prism extrusion.
//!
//! The pipeline is two pure stages: [`ProfilePath::build`] samples the fluted
//! outline from a [`PanelShape`], and [`extrude_profile`] turns the outline
//! into an oriented [`PanelMesh`]. Both stages fail closed, never returning a
//! partial path or mesh. Regeneration is driven by value changes only;
//! callers compare shapes with `==` and rebuild when they differ.

pub mod extrude;
pub mod profile;

pub use extrude::{
    extrude_profile, PANEL_ROTATION_X, PANEL_ROTATION_Y, PANEL_ROTATION_Z,
};
pub use profile::ProfilePath;

use crate::error::VetroError;

// ==================== SHAPE PARAMETERS ====================

/// Input parameters for one panel generation pass.
///
/// Owned by the caller and immutable per call. Value equality decides
/// regeneration, so two shapes that compare equal always produce identical
/// meshes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelShape {
    /// Total horizontal span of the cross-section.
    pub width: f32,
    /// Extrusion length (the panel's vertical size once oriented).
    pub height: f32,
    /// Number of corrugation units across the width.
    pub flutes: u32,
    /// Bulge height of each flute above the baseline.
    pub depth: f32,
    /// Control-point inset factor in `[0, 1]`; higher reads rounder.
    pub curvature: f32,
}

impl Default for PanelShape {
    fn default() -> Self {
        Self {
            width: 2.0,
            height: 2.0,
            flutes: 20,
            depth: 0.2,
            curvature: 0.5,
        }
    }
}

impl PanelShape {
    /// Check every field against its valid domain.
    ///
    /// # Errors
    /// [`VetroError::InvalidParameter`] naming the offending field.
    pub fn validate(&self) -> Result<(), VetroError> {
        if self.flutes == 0 {
            return Err(VetroError::InvalidParameter(
                "flute count must be at least 1".into(),
            ));
        }
        if self.width <= 0.0 || !self.width.is_finite() {
            return Err(VetroError::InvalidParameter(format!(
                "width must be positive and finite, got {}",
                self.width
            )));
        }
        if self.height <= 0.0 || !self.height.is_finite() {
            return Err(VetroError::InvalidParameter(format!(
                "height must be positive and finite, got {}",
                self.height
            )));
        }
        if !self.depth.is_finite() {
            return Err(VetroError::InvalidParameter(format!(
                "depth must be finite, got {}",
                self.depth
            )));
        }
        if !(0.0..=1.0).contains(&self.curvature) {
            return Err(VetroError::InvalidParameter(format!(
                "curvature must be in [0, 1], got {}",
                self.curvature
            )));
        }
        Ok(())
    }
}

// ==================== MESH TYPES ====================

/// 24-byte mesh vertex: object-space position plus unit normal.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PanelVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Unit surface normal.
    pub normal: [f32; 3],
}

/// Indexed triangle mesh for the extruded panel.
///
/// Produced wholesale by [`extrude_profile`] and never mutated in place;
/// consumers read it until the next regeneration replaces it. The byte views
/// feed vertex/index buffer uploads directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelMesh {
    /// Cap and side-wall vertices.
    pub vertices: Vec<PanelVertex>,
    /// Triangle-list indices into `vertices`.
    pub indices: Vec<u32>,
}

impl PanelMesh {
    /// Raw vertex bytes for buffer upload.
    #[must_use]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw index bytes for buffer upload.
    #[must_use]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// True when the mesh holds no geometry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.indices.is_empty()
    }
}
