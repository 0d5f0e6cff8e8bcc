//! Tunables for GCM encryption.

/// Block count at which GCTR moves to the rayon pool by default.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Configuration for [`Gcm`](crate::Gcm).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GcmConfig {
    /// Minimum number of plaintext blocks before the keystream is generated
    /// in parallel. `None` always runs sequentially. Ignored without the
    /// `parallel` feature.
    pub parallel_threshold: Option<usize>,
}

impl GcmConfig {
    /// A configuration that never parallelizes.
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: None,
        }
    }
}

impl Default for GcmConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: Some(DEFAULT_PARALLEL_THRESHOLD),
        }
    }
}
