//! # Words
//!
//! Word-level search over text.
//!
//! Text is split into tokens by [`tokenize`] on a fixed delimiter set
//! ([`WORD_DELIMITERS`]); the matchers in [`matcher`] count or visit the
//! tokens which equal, or contain, a seek word without regard to case.
//!
//! [`contains_no_case`] is the odd one out: it searches the raw text and
//! ignores token boundaries.

pub mod matcher;
pub mod tokenizer;

#[doc(inline)]
pub use matcher::{
    MatchMode,
    contains_no_case,
    count_contains,
    count_exact,
    for_each_contains,
    for_each_exact,
    matching_words,
    try_for_each_contains,
    try_for_each_exact,
};
#[doc(inline)]
pub use tokenizer::{Tokens, WORD_DELIMITERS, is_word_delimiter, tokenize};
