//! Test support shared by service and editor tests.

mod context;
mod helpers;

pub(crate) use context::TestContext;
pub(crate) use helpers::*;
pub(crate) use http::StubServer;
pub(crate) use memory::MemoryProductsRepository;
