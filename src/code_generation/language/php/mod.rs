pub mod context;
pub mod manifest;
pub mod templates;
