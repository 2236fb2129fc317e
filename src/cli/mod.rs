pub mod command;
pub mod reporter;
