pub mod graphql;
pub mod root;
