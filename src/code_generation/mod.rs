pub mod core;
pub mod language;
