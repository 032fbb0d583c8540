//! Catalog

mod cache;

pub use cache::*;
