//! Record store (PostgREST dialect) client.

mod client;
mod errors;

pub use client::*;
pub use errors::RestError;
