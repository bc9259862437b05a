pub mod limits;
pub mod resolver;
pub mod types;
