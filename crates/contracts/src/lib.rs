//! # Contracts
//!
//! Frozen interface contracts, defining the types and traits shared between
//! the dispatcher and transport implementations. All business crates can
//! only depend on this crate, reverse dependencies are prohibited.
//!
//! ## Naming Model
//! - Platform names are matched case-insensitively; the normalized
//!   (lowercase) form is the canonical key
//! - `device` and the message payload are opaque and pass through unchanged

mod error;
mod message;
mod options;
mod platform;
mod transport;

pub use error::*;
pub use message::*;
pub use options::*;
pub use platform::PlatformSpec;
pub use transport::*;
