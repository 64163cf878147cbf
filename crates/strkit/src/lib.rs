//! # `strkit` String Transformation Kit
//!
//! Small, composable string primitives.
//!
//! See:
//! * [`words`] to tokenize text and count or visit matching words.
//! * [`masking`] to redact a window or a band of characters.
//! * [`singularize`] to collapse runs of repeated characters.
//! * [`casing`] for title, body and `lower_snake` case, under a [`casing::Culture`].
//! * [`cleaning`] to strip digits, symbols and spaces, and cut text.
//! * [`pipeline`] to chain the above into a reusable [`pipeline::Pipeline`].
//!
//! Every core transform is total: it takes text (sometimes an optional
//! text) and returns a new `String`, never an error. Character positions
//! and lengths count Unicode scalar values (`char`s), not bytes.
//!
//! ```
//! use strkit::{count_contains, mask_band, to_lower_snake_case, to_title_case};
//!
//! let text = "++a little Bunny raBBit waNdering in a huge Forest";
//! assert_eq!(count_contains(text, "a"), 4);
//! assert_eq!(mask_band("Turkiye", 2, 3, 2), "Tu***ye");
//! assert_eq!(to_title_case("istanbul ankara"), "Istanbul Ankara");
//! assert_eq!(to_lower_snake_case("HelloWorld"), "hello_world");
//! ```
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``codec``
//! * ``digest``
//! * ``random``
//! * ``rayon``
//!
//! The default feature does not enable "raster".
//!
//! #### feature: ``digest``
//!
//! Enables [`digest::sha256_hex`], via ``sha2`` and ``hex``.
//!
//! #### feature: ``random``
//!
//! Enables [`random`] string generation, via ``rand``.
//!
//! #### feature: ``codec``
//!
//! Enables DEFLATE + Base64 text [`codec`] functions, via ``flate2``
//! and ``base64``.
//!
//! #### feature: ``rayon``
//!
//! This enables [`rayon::ParallelPipeline`], a batch-parallel wrapper
//! using the ``rayon`` crate.
//!
//! #### feature: ``raster``
//!
//! Enables text to PNG rendering with registered fonts, via ``ab_glyph``,
//! ``imageproc`` and ``image``. Without it, [`raster::default_rasterizer`]
//! still exists, but every render reports
//! [`StrkitError::UnsupportedPlatform`].
#![warn(missing_docs, unused)]

pub mod casing;
pub mod cleaning;
pub mod errors;
pub mod masking;
pub mod pipeline;
pub mod raster;
pub mod singularize;
pub mod support;
pub mod words;

#[cfg(feature = "codec")]
pub mod codec;

#[cfg(feature = "digest")]
pub mod digest;

#[cfg(feature = "random")]
pub mod random;

#[cfg(feature = "rayon")]
pub mod rayon;

#[doc(inline)]
pub use casing::{CaseStyle, Culture, to_body_case, to_lower_snake_case, to_title_case};
#[doc(inline)]
pub use cleaning::{cut, multiplex, null_exists, strip_digits, strip_symbols, trim_inside};
#[doc(inline)]
pub use errors::{SKResult, StrkitError};
#[doc(inline)]
pub use masking::{BandMask, mask_band, mask_window};
#[doc(inline)]
pub use pipeline::{Pipeline, Step, TextTransform};
#[doc(inline)]
pub use singularize::{collapse_adjacent, collapse_adjacent_char};
#[doc(inline)]
pub use words::{MatchMode, contains_no_case, count_contains, count_exact, tokenize};
