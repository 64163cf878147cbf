//! # Masking
//!
//! Two unrelated masking shapes:
//! * [`mask_window`] - redact a run of characters just after a start index;
//! * [`BandMask`] - reveal the head and tail of a text, replacing the middle
//!   with a fixed-width block.
//!
//! Positions count `char`s, not bytes. Neither mask reads past the end of
//! the text; out-of-range parameters are clamped.

pub mod band_mask;
pub mod window_mask;

#[doc(inline)]
pub use band_mask::{BandMask, DEFAULT_MASK_CHAR, mask_band};
#[doc(inline)]
pub use window_mask::{WINDOW_MASK_CHAR, mask_window};
