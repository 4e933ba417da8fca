//! The text buffer a transform reads from and writes to.
//!
//! Hosts implement [`Buffer`] over their own document type. [`RopeBuffer`] is
//! a ready-made implementation backed by a [`Rope`].
use std::ops::Range;

use ropey::Rope;
use symcase_core::{
  chars::SymbolChars,
  symbol,
};

use crate::Tendril;

/// A text buffer with a single cursor.
///
/// All offsets are 0-based char indices: in `"fooBar baz"` the end of
/// `fooBar` is 6 and `baz` starts at 7. Hosts that count 1-based points
/// (where `baz` starts at 8) convert at the boundary.
pub trait Buffer {
  fn len_chars(&self) -> usize;

  fn read_range(&self, start: usize, end: usize) -> Tendril;

  fn replace_range(&mut self, start: usize, end: usize, text: &str);

  fn cursor(&self) -> usize;

  fn set_cursor(&mut self, pos: usize);

  /// Bounds of the symbol containing or adjacent to `pos`.
  fn find_symbol_bounds(&self, pos: usize) -> Option<Range<usize>>;

  /// Start of the next symbol at or after `from`.
  fn find_next_symbol_start(&self, from: usize) -> Option<usize>;
}

#[derive(Debug, Clone, Default)]
pub struct RopeBuffer {
  text:         Rope,
  cursor:       usize,
  symbol_chars: SymbolChars,
}

impl RopeBuffer {
  pub fn new(text: Rope) -> Self {
    Self {
      text,
      cursor: 0,
      symbol_chars: SymbolChars::default(),
    }
  }

  #[must_use]
  pub fn with_cursor(mut self, pos: usize) -> Self {
    self.set_cursor(pos);
    self
  }

  #[must_use]
  pub fn with_symbol_chars(mut self, symbol_chars: SymbolChars) -> Self {
    self.symbol_chars = symbol_chars;
    self
  }

  pub fn text(&self) -> &Rope {
    &self.text
  }

  pub fn symbol_chars(&self) -> &SymbolChars {
    &self.symbol_chars
  }
}

impl From<&str> for RopeBuffer {
  fn from(text: &str) -> Self {
    Self::new(Rope::from(text))
  }
}

impl Buffer for RopeBuffer {
  fn len_chars(&self) -> usize {
    self.text.len_chars()
  }

  fn read_range(&self, start: usize, end: usize) -> Tendril {
    self.text.slice(start..end).chars().collect()
  }

  fn replace_range(&mut self, start: usize, end: usize, text: &str) {
    self.text.remove(start..end);
    self.text.insert(start, text);
  }

  fn cursor(&self) -> usize {
    self.cursor
  }

  fn set_cursor(&mut self, pos: usize) {
    self.cursor = pos.min(self.text.len_chars());
  }

  fn find_symbol_bounds(&self, pos: usize) -> Option<Range<usize>> {
    symbol::symbol_bounds_at(self.text.slice(..), pos, &self.symbol_chars)
      .filter(|range| !range.is_empty())
  }

  fn find_next_symbol_start(&self, from: usize) -> Option<usize> {
    symbol::next_symbol_start(self.text.slice(..), from, &self.symbol_chars)
  }
}
