// github module: REST access to issues, discussions, comments and reactions

pub mod auth;
pub mod client;
pub mod link;
pub mod stub;
pub mod transport;
pub(crate) mod types;

pub use client::ThreadClient;
pub use stub::StubTransport;
pub use transport::{OctocrabTransport, RawResponse, Transport};
