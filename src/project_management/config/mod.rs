pub mod models;
pub mod parser;

pub use models::ModuleConfig;
pub use parser::ConfigParser;
