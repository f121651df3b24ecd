// file: src/models/mod.rs
// description: data model exports

pub mod movie;
pub mod recommendation;

pub use movie::Movie;
pub use recommendation::Recommendation;
