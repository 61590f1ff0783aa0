//! Run configuration for the meshing pipeline.

use crate::curve::Interpolation;
use crate::errors::MeshingError;
use crate::float_types::Real;
use crate::seeds::SeedStrategy;

/// Vertices with at most this many incident triangles are pruned after the
/// first triangulation pass (boundary vertices excepted).
pub const DEFAULT_MIN_CONNECTIVITY: usize = 4;

/// Parameters of the constrained Laplacian smoothing stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothingConfig {
    /// Relaxation weight λ ∈ (0, 1].
    pub lambda: Real,
    pub max_iterations: usize,
    /// Stop once no vertex moved more than `tolerance · spacing` in a sweep.
    pub tolerance: Real,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self { lambda: 0.5, max_iterations: 250, tolerance: 0.01 }
    }
}

impl SmoothingConfig {
    pub fn validate(&self) -> Result<(), MeshingError> {
        if !(self.lambda > 0.0 && self.lambda <= 1.0) {
            return Err(MeshingError::InvalidConfig(format!(
                "smoothing weight must be in (0, 1], got {}",
                self.lambda
            )));
        }
        if !(self.tolerance >= 0.0) {
            return Err(MeshingError::InvalidConfig(format!(
                "smoothing tolerance must be non-negative, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

/// Options of a single meshing run.
///
/// # Example
/// ```
/// # use planar_mesher::config::MesherConfig;
/// let config = MesherConfig::new(0.2).with_resample_boundary(false);
/// assert_eq!(config.point_spacing, 0.2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MesherConfig {
    /// Target average edge length.
    pub point_spacing: Real,
    /// Replace each input curve with its evenly resampled version.
    pub resample_boundary: bool,
    /// Invoke the registered observers once the result is final.
    pub visualize: bool,
    pub min_connectivity: usize,
    pub seed_strategy: SeedStrategy,
    pub interpolation: Interpolation,
    /// `None` leaves the triangulated positions untouched.
    pub smoothing: Option<SmoothingConfig>,
}

impl Default for MesherConfig {
    fn default() -> Self {
        Self {
            point_spacing: 1.0,
            resample_boundary: true,
            visualize: false,
            min_connectivity: DEFAULT_MIN_CONNECTIVITY,
            seed_strategy: SeedStrategy::default(),
            interpolation: Interpolation::default(),
            smoothing: Some(SmoothingConfig::default()),
        }
    }
}

impl MesherConfig {
    pub fn new(point_spacing: Real) -> Self {
        Self { point_spacing, ..Self::default() }
    }

    pub const fn with_resample_boundary(mut self, resample: bool) -> Self {
        self.resample_boundary = resample;
        self
    }

    pub const fn with_visualize(mut self, visualize: bool) -> Self {
        self.visualize = visualize;
        self
    }

    pub const fn with_min_connectivity(mut self, threshold: usize) -> Self {
        self.min_connectivity = threshold;
        self
    }

    pub const fn with_seed_strategy(mut self, strategy: SeedStrategy) -> Self {
        self.seed_strategy = strategy;
        self
    }

    pub const fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    pub const fn with_smoothing(mut self, smoothing: Option<SmoothingConfig>) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Reject settings no run could succeed with.
    pub fn validate(&self) -> Result<(), MeshingError> {
        if !(self.point_spacing.is_finite() && self.point_spacing > 0.0) {
            return Err(MeshingError::invalid_geometry(format!(
                "point spacing must be positive and finite, got {}",
                self.point_spacing
            )));
        }
        if let Some(smoothing) = &self.smoothing {
            smoothing.validate()?;
        }
        Ok(())
    }
}
