//! Symbol boundary scanning.
//!
//! A symbol is a maximal run of characters accepted by [`SymbolChars`]. All
//! positions are char indices into the text.
//!
//! ```
//! use ropey::Rope;
//! use symcase_core::{chars::SymbolChars, symbol::{next_symbol_start, symbol_bounds_at}};
//!
//! let text = Rope::from("fooBar baz");
//! let chars = SymbolChars::default();
//! assert_eq!(symbol_bounds_at(text.slice(..), 3, &chars), Some(0..6));
//! assert_eq!(next_symbol_start(text.slice(..), 6, &chars), Some(7));
//! ```
use std::ops::Range;

use ropey::RopeSlice;

use crate::chars::SymbolChars;

/// Finds the symbol containing or adjacent to `pos`.
///
/// The char at `pos` is checked first, then the char before it, so a cursor
/// just past the end of a symbol still finds it. Returns `None` when neither
/// neighbour is a symbol char.
pub fn symbol_bounds_at(text: RopeSlice, pos: usize, chars: &SymbolChars) -> Option<Range<usize>> {
  let len = text.len_chars();
  let pos = pos.min(len);

  let anchor = if pos < len && chars.contains(text.char(pos)) {
    pos
  } else if pos > 0 && chars.contains(text.char(pos - 1)) {
    pos - 1
  } else {
    return None;
  };

  let mut backward = text.chars_at(anchor);
  let before = std::iter::from_fn(|| backward.prev())
    .take_while(|&ch| chars.contains(ch))
    .count();
  let after = text
    .chars_at(anchor)
    .take_while(|&ch| chars.contains(ch))
    .count();

  Some(anchor - before..anchor + after)
}

/// Finds the start of the next symbol at or after `from`.
///
/// If `from` is inside a symbol, the rest of that symbol is skipped first.
/// Returns `None` when no symbol char follows.
pub fn next_symbol_start(text: RopeSlice, from: usize, chars: &SymbolChars) -> Option<usize> {
  let len = text.len_chars();
  let mut pos = from.min(len);

  pos += text
    .chars_at(pos)
    .take_while(|&ch| chars.contains(ch))
    .count();
  pos += text
    .chars_at(pos)
    .take_while(|&ch| !chars.contains(ch))
    .count();

  (pos < len).then_some(pos)
}
