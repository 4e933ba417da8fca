use smartstring::{LazyCompact, SmartString};

pub mod buffer;
pub mod case_convention;
pub mod command;
pub mod config;
pub mod menu;
pub mod transform;

pub type Tendril = SmartString<LazyCompact>;
