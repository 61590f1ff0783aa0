//! Boundary-constrained Laplacian smoothing.

pub mod serial;
pub mod traits;

#[cfg(feature = "parallel")]
pub mod parallel;

// Re-export core types
pub use traits::{SmoothingOps, SmoothingReport};

pub use serial::SerialSmoothingOps;

#[cfg(feature = "parallel")]
pub use parallel::ParallelSmoothingOps;

/// The smoother the pipeline uses unless told otherwise.
#[cfg(not(feature = "parallel"))]
pub type DefaultSmoothingOps = SerialSmoothingOps;

/// The smoother the pipeline uses unless told otherwise.
#[cfg(feature = "parallel")]
pub type DefaultSmoothingOps = ParallelSmoothingOps;
