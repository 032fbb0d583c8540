//! Image uploads

mod uploader;

pub use uploader::*;
