//! Single-key style picker.
//!
//! Each casing style is bound to one literal key. Hosts render the items
//! however they like and hand back the pressed key through
//! [`MenuPresenter`].
use std::fmt;

use crate::case_convention::CasingStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
  pub key:   char,
  pub style: CasingStyle,
}

impl MenuItem {
  pub const fn new(key: char, style: CasingStyle) -> Self {
    Self { key, style }
  }

  pub const fn label(&self) -> &'static str {
    self.style.label()
  }
}

pub const CASE_MENU: [MenuItem; 8] = [
  MenuItem::new('c', CasingStyle::LowerCamel),
  MenuItem::new('C', CasingStyle::UpperCamel),
  MenuItem::new('_', CasingStyle::Snake),
  MenuItem::new('-', CasingStyle::Kebab),
  MenuItem::new('d', CasingStyle::Downcase),
  MenuItem::new('u', CasingStyle::CapitalizedWords),
  MenuItem::new('t', CasingStyle::TitleizedWords),
  MenuItem::new('U', CasingStyle::Upcase),
];

pub fn menu_style_for_key(key: char) -> Option<CasingStyle> {
  CASE_MENU
    .iter()
    .find(|item| item.key == key)
    .map(|item| item.style)
}

pub fn menu_key_for_style(style: CasingStyle) -> char {
  match style {
    CasingStyle::LowerCamel => 'c',
    CasingStyle::UpperCamel => 'C',
    CasingStyle::Snake => '_',
    CasingStyle::Kebab => '-',
    CasingStyle::Downcase => 'd',
    CasingStyle::CapitalizedWords => 'u',
    CasingStyle::TitleizedWords => 't',
    CasingStyle::Upcase => 'U',
  }
}

/// Shows the menu and returns the pressed key, or `None` if dismissed.
pub trait MenuPresenter {
  fn choose(&mut self, items: &[MenuItem]) -> Option<char>;
}

impl<F> MenuPresenter for F
where
  F: FnMut(&[MenuItem]) -> Option<char>,
{
  fn choose(&mut self, items: &[MenuItem]) -> Option<char> {
    (self)(items)
  }
}

/// Runs the menu. Dismissing it or pressing an unbound key yields `None`.
pub fn select_style<P: MenuPresenter + ?Sized>(presenter: &mut P) -> Option<CasingStyle> {
  let key = presenter.choose(&CASE_MENU)?;
  let style = menu_style_for_key(key);
  if style.is_none() {
    tracing::debug!(%key, "key not bound in case menu");
  }
  style
}

/// Plain-text rendering of the menu, one `key  label` row per style.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseMenu;

impl fmt::Display for CaseMenu {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "Symbol case")?;
    for item in &CASE_MENU {
      writeln!(f, "  {}  {}", item.key, item.label())?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn test_keys_are_unique_and_cover_all_styles() {
    for style in CasingStyle::ALL {
      let key = menu_key_for_style(style);
      assert_eq!(menu_style_for_key(key), Some(style));
    }
    let mut keys: Vec<char> = CASE_MENU.iter().map(|item| item.key).collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), CasingStyle::ALL.len());
  }

  #[test]
  fn test_key_labels() {
    assert_eq!(menu_style_for_key('c'), Some(CasingStyle::LowerCamel));
    assert_eq!(menu_style_for_key('C'), Some(CasingStyle::UpperCamel));
    assert_eq!(menu_style_for_key('_'), Some(CasingStyle::Snake));
    assert_eq!(menu_style_for_key('-'), Some(CasingStyle::Kebab));
    assert_eq!(menu_style_for_key('d'), Some(CasingStyle::Downcase));
    assert_eq!(menu_style_for_key('u'), Some(CasingStyle::CapitalizedWords));
    assert_eq!(menu_style_for_key('t'), Some(CasingStyle::TitleizedWords));
    assert_eq!(menu_style_for_key('U'), Some(CasingStyle::Upcase));
    assert_eq!(menu_style_for_key('x'), None);
  }

  #[test]
  fn test_select_style() {
    let mut shown = 0;
    let mut presenter = |items: &[MenuItem]| {
      shown = items.len();
      Some('U')
    };
    assert_eq!(select_style(&mut presenter), Some(CasingStyle::Upcase));
    assert_eq!(shown, 8);

    assert_eq!(select_style(&mut |_: &[MenuItem]| -> Option<char> { None }), None);
    assert_eq!(select_style(&mut |_: &[MenuItem]| -> Option<char> { Some('?') }), None);
  }

  #[test]
  fn test_render() {
    let rendered = CaseMenu.to_string();
    assert!(rendered.starts_with("Symbol case\n"));
    assert!(rendered.contains("  _  snake_case\n"));
    assert!(rendered.contains("  U  UPCASE\n"));
    assert_eq!(rendered.lines().count(), 9);
  }
}
