//! # Parallel Pipeline

use crate::pipeline::TextTransform;

/// Batch-Level Parallel Transform Wrapper.
///
/// Enables ``rayon`` processing of batches when available.
/// Output order always matches input order.
#[derive(Debug, Clone, Default)]
pub struct ParallelPipeline<D: TextTransform> {
    /// Wrapped transform.
    pub inner: D,
}

impl<D: TextTransform> ParallelPipeline<D> {
    /// Create a new parallel transform.
    ///
    /// ## Arguments
    /// * `inner` - The transform to wrap.
    ///
    /// ## Returns
    /// A new `ParallelPipeline` instance.
    pub fn new(inner: D) -> Self {
        Self { inner }
    }
}

impl<D: TextTransform> From<D> for ParallelPipeline<D> {
    fn from(inner: D) -> Self {
        Self::new(inner)
    }
}

impl<D: TextTransform> TextTransform for ParallelPipeline<D> {
    fn apply(
        &self,
        text: &str,
    ) -> String {
        self.inner.apply(text)
    }

    fn apply_batch(
        &self,
        batch: &[String],
    ) -> Vec<String> {
        use rayon::prelude::*;

        log::debug!("applying transform to {} texts in parallel", batch.len());

        batch
            .par_iter()
            .map(|text| self.inner.apply(text))
            .collect()
    }
}
