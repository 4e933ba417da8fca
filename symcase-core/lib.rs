pub mod chars;
pub mod symbol;
