//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use nalgebra::Point2;
use planar_mesher::{
    Curve, MesherConfig, TriMesh2, float_types::Real, generate_mesh,
};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Even-odd ray casting test against a closed polygon.
pub fn point_in_polygon(p: &Point2<Real>, polygon: &[Point2<Real>]) -> bool {
    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (a, b) = (polygon[i], polygon[j]);
        if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Sum of the signed face areas. For a valid triangulation of a region this is
/// the region's area, regardless of how interior vertices moved.
pub fn signed_area_sum(mesh: &TriMesh2) -> Real {
    (0..mesh.faces.len()).map(|f| mesh.signed_area(f)).sum()
}

/// `true` when `p` lies on the boundary of the unit square.
pub fn on_unit_square_boundary(p: &Point2<Real>) -> bool {
    let eps = 1e-6;
    approx_eq(p.x, 0.0, eps)
        || approx_eq(p.x, 1.0, eps)
        || approx_eq(p.y, 0.0, eps)
        || approx_eq(p.y, 1.0, eps)
}

pub fn annulus(outer: Real, inner: Real) -> Vec<Curve> {
    vec![
        Curve::circle([0.0, 0.0], outer, 96),
        Curve::circle([0.0, 0.0], inner, 48),
    ]
}

/// Mesh `curves` and insist on a mesh.
pub fn mesh_of(curves: &[Curve], config: &MesherConfig) -> TriMesh2 {
    let outcome = generate_mesh(curves, config).expect("meshing failed");
    match outcome.mesh() {
        Some(mesh) => mesh.clone(),
        None => panic!("meshing was skipped: {outcome:?}"),
    }
}
