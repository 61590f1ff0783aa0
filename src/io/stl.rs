//! STL export of planar meshes. Triangles are written in the `z = 0` plane
//! with the facet normal `+z`.

use crate::io::IoError;
use crate::mesh::TriMesh2;
use crate::triangulated::Triangulated2D;

/// Export to ASCII STL
///
/// ```rust
/// # use planar_mesher::{config::MesherConfig, curve::Curve, generate_mesh};
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let outcome = generate_mesh(&[Curve::square(1.0)], &MesherConfig::new(0.2))?;
/// let text = planar_mesher::io::stl::to_stl_ascii(&outcome, "square");
/// assert!(text.starts_with("solid square"));
/// # Ok(())
/// # }
/// ```
pub fn to_stl_ascii<T: Triangulated2D>(shape: &T, name: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("solid {name}\n"));

    shape.visit_triangles(|tri| {
        out.push_str("  facet normal 0.000000 0.000000 1.000000\n");
        out.push_str("    outer loop\n");
        for p in &tri {
            out.push_str(&format!("      vertex {:.6} {:.6} 0.000000\n", p.x, p.y));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    });

    out.push_str(&format!("endsolid {name}\n"));
    out
}

/// Export to BINARY STL (returns `Vec<u8>`)
///
/// Binary STL carries no solid name; the header is left blank.
pub fn to_stl_binary<T: Triangulated2D>(shape: &T) -> Result<Vec<u8>, IoError> {
    use stl_io::{Normal, Triangle, Vertex, write_stl};

    let mut triangles = Vec::<Triangle>::new();

    shape.visit_triangles(|tri| {
        #[allow(clippy::unnecessary_cast)]
        {
            triangles.push(Triangle {
                normal: Normal::new([0.0, 0.0, 1.0]),
                vertices: tri.map(|p| Vertex::new([p.x as f32, p.y as f32, 0.0])),
            });
        }
    });

    let mut bytes = Vec::with_capacity(84 + 50 * triangles.len());
    write_stl(&mut bytes, triangles.iter())?;
    Ok(bytes)
}

impl TriMesh2 {
    pub fn to_stl_ascii(&self, name: &str) -> String {
        self::to_stl_ascii(self, name)
    }

    pub fn to_stl_binary(&self) -> Result<Vec<u8>, IoError> {
        self::to_stl_binary(self)
    }
}
