//! Domain

pub mod catalog;
pub mod currency;
pub mod editor;
pub mod landing;
pub mod products;
pub mod uploads;
