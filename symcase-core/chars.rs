//! Character classification used to find symbols in text.

#[derive(Debug, Eq, PartialEq)]
pub enum CharCategory {
  Whitespace,
  Eol,
  Symbol,
  Punctuation,
  Unknown,
}

/// The set of characters that make up a symbol.
///
/// Alphanumeric characters always belong to a symbol. `extra` lists the
/// additional constituents, `_` and `-` by default. Whitespace and line
/// endings are never constituents, even when listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolChars {
  extra: Vec<char>,
}

impl Default for SymbolChars {
  fn default() -> Self {
    Self::new(['_', '-'])
  }
}

impl SymbolChars {
  pub fn new(extra: impl IntoIterator<Item = char>) -> Self {
    let mut extra: Vec<char> = extra.into_iter().collect();
    extra.sort_unstable();
    extra.dedup();
    Self { extra }
  }

  pub fn extra(&self) -> &[char] {
    &self.extra
  }

  pub fn categorize(&self, ch: char) -> CharCategory {
    match ch {
      c if char_is_line_ending(c) => CharCategory::Eol,
      c if c.is_whitespace() || char_is_whitespace(c) => CharCategory::Whitespace,
      c if c.is_alphanumeric() || self.extra.contains(&c) => CharCategory::Symbol,
      c if char_is_punctuation(c) => CharCategory::Punctuation,
      _ => CharCategory::Unknown,
    }
  }

  #[inline]
  pub fn contains(&self, ch: char) -> bool {
    self.categorize(ch) == CharCategory::Symbol
  }
}

#[inline]
pub fn char_is_line_ending(ch: char) -> bool {
  matches!(
    ch,
    '\u{000A}' // LineFeed
      | '\u{000B}' // VerticalTab
      | '\u{000C}' // FormFeed
      | '\u{000D}' // CarriageReturn
      | '\u{0085}' // NextLine
      | '\u{2028}' // Line Separator
      | '\u{2029}' // ParagraphSeparator
  )
}

#[inline]
pub fn char_is_whitespace(ch: char) -> bool {
  match ch {
      '\u{0009}' | // Character Tabulation
      '\u{0020}' | // Space
      '\u{00A0}' | // No-break Space
      '\u{180E}' | // Mongolian Vowel Separator
      '\u{202F}' | // Narrow No-break Space
      '\u{205F}' | // Medium Mathematical Space
      '\u{3000}' | // Ideographic Space
      '\u{FEFF}'   // Zero Width No-break Space
      => true,

      // En Quad through Zero Width Space.
      ch if ('\u{2000}' ..= '\u{200B}').contains(&ch) => true,

      _ => false,
    }
}

#[inline]
pub fn char_is_punctuation(ch: char) -> bool {
  use unicode_general_category::{
    GeneralCategory,
    get_general_category,
  };

  matches!(
    get_general_category(ch),
    GeneralCategory::OtherPunctuation
      | GeneralCategory::OpenPunctuation
      | GeneralCategory::ClosePunctuation
      | GeneralCategory::InitialPunctuation
      | GeneralCategory::FinalPunctuation
      | GeneralCategory::ConnectorPunctuation
      | GeneralCategory::DashPunctuation
      | GeneralCategory::MathSymbol
      | GeneralCategory::CurrencySymbol
      | GeneralCategory::ModifierSymbol
  )
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn test_default_symbol_chars() {
    let chars = SymbolChars::default();
    assert!(chars.contains('a'));
    assert!(chars.contains('Z'));
    assert!(chars.contains('7'));
    assert!(chars.contains('_'));
    assert!(chars.contains('-'));
    assert!(chars.contains('漢'));
    assert!(!chars.contains(' '));
    assert!(!chars.contains('.'));
    assert!(!chars.contains('\n'));
  }

  #[test]
  fn test_custom_symbol_chars() {
    let chars = SymbolChars::new(['.', '_', '.']);
    assert_eq!(chars.extra(), &['.', '_']);
    assert!(chars.contains('.'));
    assert!(!chars.contains('-'));
    assert_eq!(chars.categorize('-'), CharCategory::Punctuation);
  }

  #[test]
  fn test_whitespace_is_never_a_constituent() {
    let chars = SymbolChars::new([' ', '\n', '\t']);
    assert_eq!(chars.categorize(' '), CharCategory::Whitespace);
    assert_eq!(chars.categorize('\t'), CharCategory::Whitespace);
    assert_eq!(chars.categorize('\n'), CharCategory::Eol);
    assert_eq!(chars.categorize('\r'), CharCategory::Eol);
  }

  #[test]
  fn test_categorize() {
    let chars = SymbolChars::default();
    assert_eq!(chars.categorize('x'), CharCategory::Symbol);
    assert_eq!(chars.categorize('('), CharCategory::Punctuation);
    assert_eq!(chars.categorize('+'), CharCategory::Punctuation);
    assert_eq!(chars.categorize('😀'), CharCategory::Unknown);
    assert_eq!(chars.categorize('\u{3000}'), CharCategory::Whitespace);
  }
}
