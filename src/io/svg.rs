//! SVG drawings of meshes and their boundary curves.

use crate::aabb::Aabb2;
use crate::curve::Curve;
use crate::float_types::Real;
use crate::io::IoError;
use crate::mesh::TriMesh2;
use crate::pipeline::{MeshObserver, MeshOutcome};
use nalgebra::Point2;
use std::path::{Path, PathBuf};
use svg::Document;
use svg::node::element::{Group, Polygon};
use tracing::{info, warn};

/// SVG `points` attribute; y is negated so the drawing is not upside down.
fn points_attr<'a>(points: impl IntoIterator<Item = &'a Point2<Real>>) -> String {
    points
        .into_iter()
        .map(|p| format!("{:.6},{:.6}", p.x, -p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Draw the faces of `mesh` (grey) under the input `curves` (red).
///
/// # Errors
/// [`IoError::MalformedInput`] when there is nothing to draw.
pub fn render_svg(mesh: Option<&TriMesh2>, curves: &[Curve]) -> Result<Document, IoError> {
    let mesh_points = mesh.map(|m| m.vertices.as_slice()).unwrap_or_default();
    let bounds = Aabb2::from_points(
        curves.iter().flat_map(|c| c.points().iter()).chain(mesh_points),
    )
    .ok_or_else(|| IoError::MalformedInput("no mesh or curve to draw".to_string()))?;

    let stroke = (bounds.diagonal() * 0.002).max(Real::EPSILON);
    let frame = bounds.expanded(stroke * 10.0);

    let mut faces = Group::new()
        .set("fill", "#e8e8e8")
        .set("stroke", "#404040")
        .set("stroke-width", stroke);
    if let Some(mesh) = mesh {
        for face in &mesh.faces {
            let corners = face.map(|i| mesh.vertices[i]);
            faces = faces.add(Polygon::new().set("points", points_attr(&corners)));
        }
    }

    let mut outlines = Group::new()
        .set("fill", "none")
        .set("stroke", "#d02020")
        .set("stroke-width", stroke * 2.0);
    for curve in curves {
        outlines = outlines.add(Polygon::new().set("points", points_attr(curve.points())));
    }

    Ok(Document::new()
        .set(
            "viewBox",
            format!(
                "{} {} {} {}",
                frame.mins.x,
                -frame.maxs.y,
                frame.width(),
                frame.height()
            ),
        )
        .add(faces)
        .add(outlines))
}

impl TriMesh2 {
    /// The mesh as an SVG string.
    pub fn to_svg(&self) -> Result<String, IoError> {
        Ok(render_svg(Some(self), &[])?.to_string())
    }
}

/// [`MeshObserver`] that writes every observed outcome to an SVG file.
///
/// A skipped outcome still draws the curves, which is usually what one wants
/// to look at when the spacing turned out too coarse.
#[derive(Clone, Debug)]
pub struct SvgObserver {
    path: PathBuf,
}

impl SvgObserver {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, outcome: &MeshOutcome, curves: &[Curve]) -> Result<(), IoError> {
        let document = render_svg(outcome.mesh(), curves)?;
        svg::save(&self.path, &document)?;
        Ok(())
    }
}

impl MeshObserver for SvgObserver {
    fn observe(&self, outcome: &MeshOutcome, curves: &[Curve]) {
        match self.write(outcome, curves) {
            Ok(()) => info!(path = %self.path.display(), "wrote mesh drawing"),
            Err(error) => warn!(path = %self.path.display(), %error, "could not draw mesh"),
        }
    }
}
