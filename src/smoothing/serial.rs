//! Serial implementation of mesh smoothing.

use super::traits::{
    SmoothingOps, SmoothingReport, check_inputs, relaxed_position, sweep_displacement,
};
use crate::config::SmoothingConfig;
use crate::errors::MeshingError;
use crate::float_types::Real;
use crate::mesh::vertex_neighbors;
use nalgebra::Point2;
use tracing::debug;

/// Serial implementation of `SmoothingOps`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SerialSmoothingOps;

impl SerialSmoothingOps {
    pub const fn new() -> Self {
        Self
    }
}

impl SmoothingOps for SerialSmoothingOps {
    fn laplacian_smooth(
        &self,
        faces: &[[usize; 3]],
        vertices: &[Point2<Real>],
        fixed: &[bool],
        config: &SmoothingConfig,
        scale: Real,
    ) -> Result<SmoothingReport, MeshingError> {
        check_inputs(faces, vertices, fixed, config)?;

        let neighbors = vertex_neighbors(faces, vertices.len());
        let threshold = config.tolerance * scale;
        let mut positions = vertices.to_vec();
        let mut max_displacement = 0.0;
        let mut iterations = 0;
        let mut converged = false;

        while iterations < config.max_iterations {
            let next: Vec<Point2<Real>> = (0..positions.len())
                .map(|i| relaxed_position(i, &positions, &neighbors, fixed, config.lambda))
                .collect();

            max_displacement = sweep_displacement(&positions, &next, iterations)?;
            positions = next;
            iterations += 1;

            if max_displacement <= threshold {
                converged = true;
                break;
            }
        }

        debug!(iterations, max_displacement, converged, "laplacian smoothing finished");

        Ok(SmoothingReport { vertices: positions, iterations, max_displacement, converged })
    }
}
