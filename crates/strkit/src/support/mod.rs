//! # Support Utilities

pub mod chars;
pub mod strings;

#[cfg(test)]
pub(crate) mod testing;
