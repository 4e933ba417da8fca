//! Casing conventions a symbol can be rewritten into.
//!
//! Word splitting for the identifier styles comes from `heck`, which breaks
//! words on separators and on camel-case humps (`getHTTPResponse` splits into
//! `get`, `HTTP`, `Response`). `Upcase` and `Downcase` only change letter case
//! and leave separators alone.
//!
//! Same-style conversion is stable for snake and kebab. The camel styles can
//! re-split runs of single-letter words: `a_b_c` becomes `aBC`, and `aBC` reads
//! back as the words `a` and `BC`, giving `aBc`.
//!
//! ```
//! use symcase_lib::case_convention::{CasingStyle, casify};
//!
//! assert_eq!(casify("my_var_name", CasingStyle::UpperCamel).as_str(), "MyVarName");
//! assert_eq!(casify("MyVarName", CasingStyle::Snake).as_str(), "my_var_name");
//! assert_eq!(casify("my-var", CasingStyle::Upcase).as_str(), "MY-VAR");
//! ```
use std::{
  fmt,
  str::FromStr,
};

use heck::{
  ToKebabCase,
  ToLowerCamelCase,
  ToSnakeCase,
  ToTitleCase,
  ToUpperCamelCase,
};

use thiserror::Error;

use crate::Tendril;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CasingStyle {
  /// `myVarName`
  LowerCamel,
  /// `MyVarName`
  UpperCamel,
  /// `my_var_name`
  Snake,
  /// `my-var-name`
  Kebab,
  /// Lowercase every letter, separators untouched.
  Downcase,
  /// `My var name`
  CapitalizedWords,
  /// `My Var Name`
  TitleizedWords,
  /// Uppercase every letter, separators untouched.
  Upcase,
}

impl CasingStyle {
  pub const ALL: [CasingStyle; 8] = [
    CasingStyle::LowerCamel,
    CasingStyle::UpperCamel,
    CasingStyle::Snake,
    CasingStyle::Kebab,
    CasingStyle::Downcase,
    CasingStyle::CapitalizedWords,
    CasingStyle::TitleizedWords,
    CasingStyle::Upcase,
  ];

  pub const fn name(self) -> &'static str {
    match self {
      Self::LowerCamel => "lower-camel",
      Self::UpperCamel => "upper-camel",
      Self::Snake => "snake",
      Self::Kebab => "kebab",
      Self::Downcase => "downcase",
      Self::CapitalizedWords => "capitalized-words",
      Self::TitleizedWords => "titleized-words",
      Self::Upcase => "upcase",
    }
  }

  /// Human readable label, shown in menus.
  pub const fn label(self) -> &'static str {
    match self {
      Self::LowerCamel => "lowerCamelCase",
      Self::UpperCamel => "UpperCamelCase",
      Self::Snake => "snake_case",
      Self::Kebab => "kebab-case",
      Self::Downcase => "downcase",
      Self::CapitalizedWords => "Capitalized words",
      Self::TitleizedWords => "Titleized Words",
      Self::Upcase => "UPCASE",
    }
  }
}

impl fmt::Display for CasingStyle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown casing style '{0}'")]
pub struct ParseCasingStyleError(pub String);

impl FromStr for CasingStyle {
  type Err = ParseCasingStyleError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let style = match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
      "lower-camel" | "camel" => Self::LowerCamel,
      "upper-camel" | "pascal" => Self::UpperCamel,
      "snake" => Self::Snake,
      "kebab" => Self::Kebab,
      "downcase" | "lower" => Self::Downcase,
      "capitalized-words" | "capitalized" => Self::CapitalizedWords,
      "titleized-words" | "titleized" | "title" => Self::TitleizedWords,
      "upcase" | "upper" => Self::Upcase,
      _ => return Err(ParseCasingStyleError(s.to_string())),
    };
    Ok(style)
  }
}

pub fn casify(text: &str, style: CasingStyle) -> Tendril {
  let mut res = Tendril::new();
  casify_with(text, style, &mut res);
  res
}

/// Appends `text` converted to `style` to `buf`.
///
/// Leading and trailing runs of non-alphanumeric chars (`_private`, `count--`,
/// `--verbose`) are kept around the converted words. Text with no letters or
/// digits is copied unchanged.
pub fn casify_with(text: &str, style: CasingStyle, buf: &mut Tendril) {
  let start = buf.len();
  match style {
    CasingStyle::LowerCamel => {
      with_affixes(text, buf, |core, buf| buf.push_str(&core.to_lower_camel_case()))
    },
    CasingStyle::UpperCamel => {
      with_affixes(text, buf, |core, buf| buf.push_str(&core.to_upper_camel_case()))
    },
    CasingStyle::Snake => with_affixes(text, buf, |core, buf| buf.push_str(&core.to_snake_case())),
    CasingStyle::Kebab => with_affixes(text, buf, |core, buf| buf.push_str(&core.to_kebab_case())),
    CasingStyle::Downcase => to_lower_case_with(text.chars(), buf),
    CasingStyle::CapitalizedWords => with_affixes(text, buf, to_capitalized_words_with),
    CasingStyle::TitleizedWords => {
      with_affixes(text, buf, |core, buf| buf.push_str(&core.to_title_case()))
    },
    CasingStyle::Upcase => to_upper_case_with(text.chars(), buf),
  }
  if buf.len() == start {
    buf.push_str(text);
  }
}

/// Runs `convert` on the text between the leading and trailing
/// non-alphanumeric runs and copies those runs through as they are.
fn with_affixes(text: &str, buf: &mut Tendril, convert: fn(&str, &mut Tendril)) {
  let is_affix = |ch: char| !ch.is_alphanumeric();
  let core = text.trim_matches(is_affix);
  if core.is_empty() {
    buf.push_str(text);
    return;
  }

  let leading = text.len() - text.trim_start_matches(is_affix).len();
  let trailing = text.len() - text.trim_end_matches(is_affix).len();
  buf.push_str(&text[..leading]);
  convert(core, buf);
  buf.push_str(&text[text.len() - trailing..]);
}

pub fn to_upper_case_with(text: impl Iterator<Item = char>, buf: &mut Tendril) {
  text.for_each(|c| buf.extend(c.to_uppercase()));
}

pub fn to_lower_case_with(text: impl Iterator<Item = char>, buf: &mut Tendril) {
  text.for_each(|c| buf.extend(c.to_lowercase()));
}

/// First word capitalized, the rest lowercase, joined by spaces.
fn to_capitalized_words_with(text: &str, buf: &mut Tendril) {
  for (idx, word) in text.to_title_case().split(' ').enumerate() {
    if idx == 0 {
      buf.push_str(word);
    } else {
      buf.push(' ');
      to_lower_case_with(word.chars(), buf);
    }
  }
}
