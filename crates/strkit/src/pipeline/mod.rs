//! # Pipelines
//!
//! Chains of transforms.
//!
//! Every transform in this crate is a free function; a [`Pipeline`] names a
//! sequence of them as [`Step`]s, so a chain can be built once (or parsed
//! from text) and applied to many inputs.
//!
//! ```
//! use strkit::pipeline::{Pipeline, Step, TextTransform};
//!
//! let pipeline: Pipeline = "strip-digits | strip-symbols | trim-inside".parse().unwrap();
//! assert_eq!(pipeline.apply("123 ankara ++ merkez"), "ankaramerkez");
//!
//! let pipeline = Pipeline::new()
//!     .with_step(Step::Singularize)
//!     .with_step("title".parse().unwrap());
//! assert_eq!(pipeline.apply("bookkeeper"), "Bokeper");
//! ```

pub mod step;
pub mod text_pipeline;

#[doc(inline)]
pub use step::Step;
#[doc(inline)]
pub use text_pipeline::{Pipeline, TextTransform};
