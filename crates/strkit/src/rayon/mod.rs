//! # Rayon Utilities
//!
//! [`rayon`] powered wrappers for parallel batch transforms.

mod rayon_pipeline;

pub use rayon_pipeline::ParallelPipeline;
