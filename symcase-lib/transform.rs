//! Rewriting the symbol at the cursor.
//!
//! ```
//! use symcase_lib::{
//!   buffer::{Buffer, RopeBuffer},
//!   case_convention::CasingStyle,
//!   config::CursorPolicy,
//!   transform::transform,
//! };
//!
//! let mut buffer = RopeBuffer::from("fooBar baz");
//! let done = transform(&mut buffer, 3, CasingStyle::Snake, CursorPolicy::NextSymbol).unwrap();
//! assert_eq!(buffer.text().to_string(), "foo_bar baz");
//! assert_eq!(done.range, 0..6);
//! assert_eq!(done.cursor, 8);
//! ```
use std::ops::Range;

use thiserror::Error;

use crate::{
  Tendril,
  buffer::Buffer,
  case_convention::{
    CasingStyle,
    casify,
  },
  config::{
    Config,
    CursorPolicy,
  },
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("no symbol at point {pos}")]
  NoSymbolAtPoint { pos: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Outcome of a successful transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
  /// Bounds of the symbol before it was replaced.
  pub range:  Range<usize>,
  /// The replacement text.
  pub text:   Tendril,
  /// Where the cursor should go.
  pub cursor: usize,
}

impl Transformed {
  /// Bounds of the replacement text in the updated buffer.
  pub fn new_range(&self) -> Range<usize> {
    self.range.start..self.range.start + self.text.chars().count()
  }
}

/// Rewrites the symbol at `pos` into `style` and computes the new cursor.
///
/// Only `range` is touched, and nothing is written when the symbol is
/// already in the requested style. The buffer's own cursor is left alone;
/// see [`transform_at_cursor`].
pub fn transform<B: Buffer + ?Sized>(
  buffer: &mut B,
  pos: usize,
  style: CasingStyle,
  policy: CursorPolicy,
) -> Result<Transformed> {
  let Some(range) = buffer
    .find_symbol_bounds(pos)
    .filter(|range| !range.is_empty())
  else {
    tracing::debug!(pos, "no symbol at point");
    return Err(Error::NoSymbolAtPoint { pos });
  };

  let original = buffer.read_range(range.start, range.end);
  let text = casify(&original, style);

  if text != original {
    buffer.replace_range(range.start, range.end, &text);
  }

  let end = range.start + text.chars().count();
  let cursor = match policy {
    CursorPolicy::SymbolStart => range.start,
    CursorPolicy::SymbolEnd => end,
    CursorPolicy::NextSymbol => {
      buffer
        .find_next_symbol_start(end)
        .unwrap_or_else(|| buffer.len_chars())
    },
  };

  tracing::debug!(
    start = range.start,
    end = range.end,
    %style,
    %policy,
    cursor,
    "transformed symbol"
  );
  tracing::trace!(original = %original, replacement = %text);

  Ok(Transformed {
    range,
    text,
    cursor,
  })
}

/// Transforms the symbol under the buffer's cursor and moves the cursor
/// according to `config`. On error neither text nor cursor change.
pub fn transform_at_cursor<B: Buffer + ?Sized>(
  buffer: &mut B,
  style: CasingStyle,
  config: &Config,
) -> Result<Transformed> {
  let pos = buffer.cursor();
  let transformed = transform(buffer, pos, style, config.cursor_after_transform)?;
  buffer.set_cursor(transformed.cursor);
  Ok(transformed)
}
