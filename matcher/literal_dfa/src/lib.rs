//! Anchored literal recognition compiled to a per-character automaton.
//!
//! Given an input, [`Literal::match_prefix`] reports whether the input
//! begins with a fixed target word, and if so the byte offset one past the
//! end of the match. The recognizer is a leaf primitive meant to be
//! embedded in a larger scanning pipeline (a lexer checking candidate
//! keywords, for example); it has no I/O, no configuration, and no error
//! kinds — short input, malformed encoding, and character mismatch all
//! collapse to the same "no match" outcome.
//!
//! # Usage
//!
//! ```text
//! let word = Literal::new("auctor");
//! assert_eq!(word.match_prefix(b"auctoring"), Some(6));
//! assert_eq!(word.match_prefix(b"auction"), None);
//! ```
//!
//! # Design
//!
//! The target is compiled at construction into a chain of N states, one
//! per character. Matching decodes the input one Unicode scalar at a time
//! and advances through the chain, halting on the first decode failure or
//! scalar mismatch. The state index only ever advances — no backtracking,
//! no epsilon transitions. Pure-ASCII targets take a byte-comparison fast
//! path that accepts exactly the same inputs (see `literal.rs`).

mod decode;
mod literal;

pub use literal::Literal;
