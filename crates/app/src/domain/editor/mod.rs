//! Admin Editor

mod errors;
mod notifications;
mod session;

pub use errors::EditorError;
pub use notifications::*;
pub use session::*;
