// Shared domain types: produced by the GitHub layer, consumed by the renderer.
// Neither layer depends on the other; both import from this module.

pub mod common;
pub mod thread;

pub use common::*;
pub use thread::*;
