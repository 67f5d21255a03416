//! Prism extrusion of a sampled outline with flat caps.
//!
//! The outline polygon is swept one step along +Z (no bevel), capped on both
//! ends with an ear-clipped triangulation, then rotated into the scene's
//! reference orientation. The prism spans `z ∈ [0, length]` before rotation,
//! so the mesh origin sits on its back face like the scene expects.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_8};

use glam::{Quat, Vec2, Vec3};

use super::{PanelMesh, PanelVertex, ProfilePath};
use crate::error::VetroError;

/// Panel orientation applied after extrusion, rotation about X.
pub const PANEL_ROTATION_X: f32 = FRAC_PI_2;
/// Panel orientation applied after extrusion, rotation about Y.
pub const PANEL_ROTATION_Y: f32 = FRAC_PI_8;
/// Panel orientation applied after extrusion, rotation about Z.
pub const PANEL_ROTATION_Z: f32 = FRAC_PI_8;

/// Smallest polygon area still treated as a real cross-section.
const AREA_EPSILON: f32 = 1e-6;

/// Extrude a sampled outline into an oriented prism mesh.
///
/// Pure and deterministic: identical inputs produce bit-identical meshes,
/// and every call returns a fresh [`PanelMesh`].
///
/// # Errors
/// [`VetroError::InvalidParameter`] for a non-positive or non-finite
/// `length`; [`VetroError::DegenerateGeometry`] when the outline has fewer
/// than 3 distinct points, encloses no area, or cannot be ear-clipped.
pub fn extrude_profile(
    profile: &ProfilePath,
    length: f32,
) -> Result<PanelMesh, VetroError> {
    if length <= 0.0 || !length.is_finite() {
        return Err(VetroError::InvalidParameter(format!(
            "extrusion length must be positive and finite, got {length}"
        )));
    }

    let outline = dedup_outline(profile.points());
    if outline.len() < 3 {
        return Err(VetroError::DegenerateGeometry(format!(
            "outline has {} distinct points, need at least 3",
            outline.len()
        )));
    }

    let area = signed_area(&outline);
    if area.abs() < AREA_EPSILON {
        return Err(VetroError::DegenerateGeometry(
            "outline encloses no area".into(),
        ));
    }
    let ccw = area > 0.0;

    let cap_triangles = triangulate(&outline, ccw)?;

    let n = outline.len();
    let mut vertices = Vec::with_capacity(n * 4);
    let mut indices =
        Vec::with_capacity(cap_triangles.len() * 6 + n * 6);

    // Back cap on the z = 0 plane, front cap on z = length.
    emit_cap(
        &outline,
        &cap_triangles,
        0.0,
        false,
        ccw,
        &mut vertices,
        &mut indices,
    );
    emit_cap(
        &outline,
        &cap_triangles,
        length,
        true,
        ccw,
        &mut vertices,
        &mut indices,
    );
    emit_walls(&outline, ccw, length, &mut vertices, &mut indices);

    let mut mesh = PanelMesh { vertices, indices };
    orient_mesh(&mut mesh);
    Ok(mesh)
}

// ==================== CAPS ====================

/// Emit one flat cap at height `z`, wound so the face normal points along
/// +Z when `forward` and -Z otherwise.
fn emit_cap(
    outline: &[Vec2],
    triangles: &[[u32; 3]],
    z: f32,
    forward: bool,
    ccw: bool,
    vertices: &mut Vec<PanelVertex>,
    indices: &mut Vec<u32>,
) {
    let base = vertices.len() as u32;
    let normal = if forward {
        [0.0, 0.0, 1.0]
    } else {
        [0.0, 0.0, -1.0]
    };

    for p in outline {
        vertices.push(PanelVertex {
            position: [p.x, p.y, z],
            normal,
        });
    }

    for t in triangles {
        // The triangulation carries the outline's winding; flip it when
        // that disagrees with the cap's facing direction.
        if forward == ccw {
            indices.extend_from_slice(&[
                base + t[0],
                base + t[1],
                base + t[2],
            ]);
        } else {
            indices.extend_from_slice(&[
                base + t[0],
                base + t[2],
                base + t[1],
            ]);
        }
    }
}

// ==================== SIDE WALLS ====================

/// Emit the side-wall quad strip over the closed outline.
///
/// Two vertex rings (z = 0 and z = length) with smooth outward normals from
/// the central-difference outline tangent; one quad per outline edge,
/// including the closing edge back to the first point.
fn emit_walls(
    outline: &[Vec2],
    ccw: bool,
    length: f32,
    vertices: &mut Vec<PanelVertex>,
    indices: &mut Vec<u32>,
) {
    let n = outline.len();
    let base = vertices.len() as u32;

    for ring in 0..2 {
        let z = if ring == 0 { 0.0 } else { length };
        for (i, p) in outline.iter().enumerate() {
            let prev = outline[(i + n - 1) % n];
            let next = outline[(i + 1) % n];
            let tangent = next - prev;
            let outward = if ccw {
                Vec2::new(tangent.y, -tangent.x)
            } else {
                Vec2::new(-tangent.y, tangent.x)
            }
            .normalize_or_zero();
            vertices.push(PanelVertex {
                position: [p.x, p.y, z],
                normal: [outward.x, outward.y, 0.0],
            });
        }
    }

    for i in 0..n {
        let j = (i + 1) % n;
        let v0 = base + i as u32;
        let v1 = base + j as u32;
        let v2 = base + (n + i) as u32;
        let v3 = base + (n + j) as u32;
        if ccw {
            indices.extend_from_slice(&[v0, v1, v2]);
            indices.extend_from_slice(&[v1, v3, v2]);
        } else {
            indices.extend_from_slice(&[v0, v2, v1]);
            indices.extend_from_slice(&[v1, v2, v3]);
        }
    }
}

// ==================== ORIENTATION ====================

/// Rotate positions and normals into the scene's reference orientation,
/// X then Y then Z.
fn orient_mesh(mesh: &mut PanelMesh) {
    let rotation = Quat::from_rotation_z(PANEL_ROTATION_Z)
        * Quat::from_rotation_y(PANEL_ROTATION_Y)
        * Quat::from_rotation_x(PANEL_ROTATION_X);
    for v in &mut mesh.vertices {
        v.position = (rotation * Vec3::from(v.position)).into();
        v.normal = (rotation * Vec3::from(v.normal)).into();
    }
}

// ==================== TRIANGULATION ====================

/// Ear-clipping triangulation of a simple polygon.
///
/// `ccw` names the polygon's winding; convexity and containment tests are
/// evaluated against it, so either orientation triangulates correctly.
/// Output triangles carry the input winding.
fn triangulate(
    outline: &[Vec2],
    ccw: bool,
) -> Result<Vec<[u32; 3]>, VetroError> {
    let n = outline.len();
    let mut remaining: Vec<u32> = (0..n as u32).collect();
    let mut triangles = Vec::with_capacity(n - 2);

    while remaining.len() > 3 {
        let m = remaining.len();
        let mut clipped = false;
        for i in 0..m {
            let prev = remaining[(i + m - 1) % m];
            let curr = remaining[i];
            let next = remaining[(i + 1) % m];
            if !is_ear(outline, &remaining, [prev, curr, next], ccw) {
                continue;
            }
            triangles.push([prev, curr, next]);
            let _ = remaining.remove(i);
            clipped = true;
            break;
        }
        if !clipped {
            return Err(VetroError::DegenerateGeometry(
                "no clippable ear in outline".into(),
            ));
        }
    }

    triangles.push([remaining[0], remaining[1], remaining[2]]);
    Ok(triangles)
}

/// True when `corner` is convex and contains no other remaining vertex.
fn is_ear(
    outline: &[Vec2],
    remaining: &[u32],
    corner: [u32; 3],
    ccw: bool,
) -> bool {
    let a = outline[corner[0] as usize];
    let b = outline[corner[1] as usize];
    let c = outline[corner[2] as usize];

    // Reflex or collinear corners are never ears.
    let turn = cross2(b - a, c - b);
    if (ccw && turn <= 0.0) || (!ccw && turn >= 0.0) {
        return false;
    }

    remaining.iter().all(|&r| {
        r == corner[0]
            || r == corner[1]
            || r == corner[2]
            || !point_in_triangle(outline[r as usize], a, b, c)
    })
}

/// Sign-agnostic point-in-triangle test; points on an edge count as inside.
fn point_in_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    let d1 = cross2(b - a, p - a);
    let d2 = cross2(c - b, p - b);
    let d3 = cross2(a - c, p - c);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

// ==================== HELPERS ====================

/// Drop consecutive duplicate points and a trailing copy of the first point.
fn dedup_outline(points: &[Vec2]) -> Vec<Vec2> {
    let mut out: Vec<Vec2> = Vec::with_capacity(points.len());
    for &p in points {
        if out.last() != Some(&p) {
            out.push(p);
        }
    }
    if out.len() > 1 && out.first() == out.last() {
        let _ = out.pop();
    }
    out
}

/// Shoelace signed area; positive for counter-clockwise outlines.
fn signed_area(outline: &[Vec2]) -> f32 {
    let n = outline.len();
    let mut sum = 0.0;
    for i in 0..n {
        let p = outline[i];
        let q = outline[(i + 1) % n];
        sum += p.x * q.y - q.x * p.y;
    }
    sum * 0.5
}

fn cross2(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}
