//! Constrained **triangular meshing of planar regions**, optionally
//! multithreaded.
//!
//! A region is given as closed curves: the first is the outer boundary, the
//! rest are holes. The pipeline resamples the curves to the requested point
//! spacing, seeds the bounding box with a staggered lattice, drops seeds that
//! crowd the boundary, triangulates twice with the boundary edges as
//! constraints (pruning poorly connected seeds in between), keeps the faces
//! inside the region, compacts the vertex set and finally relaxes the interior
//! vertices with Laplacian smoothing while the boundary stays put.
//!
//! ```
//! use planar_mesher::{Curve, MesherConfig, generate_mesh};
//!
//! let outer = Curve::circle([0.0, 0.0], 2.0, 64);
//! let hole = Curve::circle([0.0, 0.0], 0.75, 32);
//! let outcome = generate_mesh(&[outer, hole], &MesherConfig::new(0.25)).unwrap();
//! let (faces, vertices) = outcome.into_parts();
//! assert!(!faces.is_empty() && !vertices.is_empty());
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): `.stl` export of meshes
//! - **svg-io**: draw meshes and curves as SVG, including the [`io::svg::SvgObserver`]
//! - **hashmap**: use hashbrown for the edge maps behind boundary detection
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon for seed filtering, quality analysis and smoothing

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod aabb;
pub mod boundary;
pub mod config;
pub mod curve;
pub mod errors;
pub mod float_types;
pub mod io;
pub mod mesh;
pub mod mesher;
pub mod pipeline;
pub mod seeds;
pub mod smoothing;
pub mod triangulate;
pub mod triangulated;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use config::{MesherConfig, SmoothingConfig};
pub use curve::Curve;
pub use errors::{MeshingError, MeshingSkipped};
pub use mesh::TriMesh2;
pub use pipeline::{MeshObserver, MeshOutcome, Mesher, generate_mesh};
