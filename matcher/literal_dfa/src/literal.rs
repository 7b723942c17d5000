//! The target literal and its prefix automaton.
//!
//! A [`Literal`] is a fixed word compiled at construction into a chain of
//! N states, one per character. State k means "k characters matched so
//! far"; state N is the sole accepting state. Matching walks the chain
//! over the input, decoding one scalar per state and comparing by exact
//! scalar identity — no normalization, no case folding. Any decode
//! failure or mismatch is an immediate non-accepting halt, and the state
//! index only ever advances.

use crate::decode::decode_char;

/// A fixed target word and the automaton that recognizes it as a prefix.
///
/// Construction is the only point of allocation; matching allocates
/// nothing. The value is immutable after construction and can be shared
/// freely across threads.
#[derive(Clone, Debug)]
pub struct Literal {
    /// The target word.
    text: Box<str>,
    /// Encoded byte length of the target.
    byte_len: u32,
    /// Number of characters in the target, i.e. the number of states N.
    char_count: u32,
    /// Pure-ASCII targets take the byte-comparison fast path.
    ascii: bool,
}

impl Literal {
    /// Compile a target word into a prefix recognizer.
    ///
    /// # Contract
    ///
    /// The target's byte length must fit in `u32`. Realistic targets are
    /// single words; the bound only makes the offset arithmetic explicit.
    pub fn new(text: &str) -> Self {
        debug_assert!(
            u32::try_from(text.len()).is_ok(),
            "literal byte length must fit in u32"
        );
        let byte_len = u32::try_from(text.len()).unwrap_or(u32::MAX);
        let char_count = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
        Self {
            ascii: text.is_ascii(),
            text: text.into(),
            byte_len,
            char_count,
        }
    }

    /// The target word.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Encoded byte length of the target. On a successful match this is
    /// exactly the returned offset.
    pub fn byte_len(&self) -> u32 {
        self.byte_len
    }

    /// Number of characters in the target — the number of automaton states.
    pub fn char_count(&self) -> u32 {
        self.char_count
    }

    /// Returns `true` for the empty target, whose initial state is already
    /// accepting.
    pub fn is_empty(&self) -> bool {
        self.byte_len == 0
    }

    /// Check whether `input` begins with the target word.
    ///
    /// Returns the byte offset one past the end of the match — always
    /// equal to [`byte_len()`](Self::byte_len), and always a character
    /// boundary in `input`. Bytes beyond the match are never inspected.
    ///
    /// Returns `None` on empty input (for a non-empty target), truncated
    /// input, malformed UTF-8, or any scalar mismatch. The failure modes
    /// are deliberately indistinguishable: this is an anchored prefix
    /// check, not a substring search, and no partial-match information
    /// escapes.
    pub fn match_prefix(&self, input: &[u8]) -> Option<u32> {
        if self.ascii {
            self.match_prefix_ascii(input)
        } else {
            self.walk_states(input)
        }
    }

    /// [`match_prefix`](Self::match_prefix) for callers holding `&str`,
    /// the common case inside a lexer.
    pub fn match_prefix_str(&self, input: &str) -> Option<u32> {
        self.match_prefix(input.as_bytes())
    }

    /// Byte-comparison fast path for pure-ASCII targets.
    ///
    /// Each state of an ASCII target consumes exactly one byte, and
    /// strict decoding accepts exactly one encoding per scalar, so prefix
    /// byte equality and the state walk accept the same inputs.
    /// [`walk_states`](Self::walk_states) remains the reference
    /// implementation; the two are property-tested against each other.
    #[inline]
    fn match_prefix_ascii(&self, input: &[u8]) -> Option<u32> {
        if input.starts_with(self.text.as_bytes()) {
            Some(self.byte_len)
        } else {
            None
        }
    }

    /// Walk the state chain: decode one scalar per state, advance the
    /// cursor by its width, and compare against the expected character.
    ///
    /// `state` counts characters matched so far and only ever advances.
    /// On acceptance the cursor equals the sum of the decoded widths, so
    /// the returned offset never splits a character.
    fn walk_states(&self, input: &[u8]) -> Option<u32> {
        let mut cursor: u32 = 0;
        let mut state: u32 = 0;
        for expected in self.text.chars() {
            let (c, width) = decode_char(&input[cursor as usize..])?;
            cursor += width;
            if c != expected {
                return None;
            }
            state += 1;
        }
        debug_assert_eq!(state, self.char_count, "accepting state must be N");
        debug_assert_eq!(cursor, self.byte_len, "offset must equal target length");
        Some(cursor)
    }
}
