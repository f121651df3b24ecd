// file: src/catalog/mod.rs
// description: catalog loading module exports

pub mod loader;

pub use loader::CatalogLoader;
