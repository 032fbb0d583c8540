//! Precast catalog domain, remote store clients and admin workflow.

pub mod config;
pub mod context;
pub mod domain;
pub mod rest;
pub mod storage;

#[cfg(test)]
mod test;
