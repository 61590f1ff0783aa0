//! Parallel implementation of mesh smoothing.

use super::traits::{
    SmoothingOps, SmoothingReport, check_inputs, relaxed_position, sweep_displacement,
};
use crate::config::SmoothingConfig;
use crate::errors::MeshingError;
use crate::float_types::Real;
use crate::mesh::vertex_neighbors;
use nalgebra::Point2;
use rayon::prelude::*;
use tracing::debug;

/// Parallel implementation of `SmoothingOps`.
///
/// Each sweep updates all vertices concurrently from the previous snapshot,
/// which yields the same positions as [`super::SerialSmoothingOps`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ParallelSmoothingOps;

impl ParallelSmoothingOps {
    pub const fn new() -> Self {
        Self
    }
}

impl SmoothingOps for ParallelSmoothingOps {
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
                .into_par_iter()
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

        debug!(iterations, max_displacement, converged, "parallel laplacian smoothing finished");

        Ok(SmoothingReport { vertices: positions, iterations, max_displacement, converged })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smoothing::SerialSmoothingOps;

    #[test]
    fn matches_serial_result() {
        let vertices = vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
            Point2::new(0.3, 1.7),
            Point2::new(1.6, 0.4),
        ];
        let faces = vec![[0, 1, 5], [1, 2, 5], [5, 2, 4], [2, 3, 4], [3, 0, 4], [0, 5, 4]];
        let fixed = vec![true, true, true, true, false, false];
        let config = SmoothingConfig::default();
        let serial = SerialSmoothingOps
            .laplacian_smooth(&faces, &vertices, &fixed, &config, 1.0)
            .unwrap();
        let parallel = ParallelSmoothingOps
            .laplacian_smooth(&faces, &vertices, &fixed, &config, 1.0)
            .unwrap();
        assert_eq!(serial, parallel);
    }
}
