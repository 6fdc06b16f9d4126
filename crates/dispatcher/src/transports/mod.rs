//! Bundled transport implementations
//!
//! Contains LogTransport and FileTransport. Neither speaks a provider wire
//! protocol; real backends are caller-supplied.

mod file;
mod log;

pub use self::file::FileTransport;
pub use self::log::LogTransport;
