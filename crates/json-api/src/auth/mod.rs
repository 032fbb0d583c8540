//! Admin authentication

pub(crate) mod middleware;
mod token;

pub(crate) use token::AdminToken;
