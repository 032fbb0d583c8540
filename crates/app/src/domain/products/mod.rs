//! Products

pub mod draft;
pub mod errors;
pub mod models;
pub mod repository;
pub mod service;

pub use errors::{ProductsServiceError, ValidationError};
pub use service::*;
