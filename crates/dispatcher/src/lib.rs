//! # Dispatcher
//!
//! Push send routing module.
//!
//! Responsibilities:
//! - Register transports under case-insensitive platform aliases
//! - Resolve `send` calls and forward a canonical, fully-populated
//!   argument set to the owning transport
//! - Bundle the non-wire transports (log / file)
//!
//! Real provider transports (APNs, FCM, SNS, ...) are caller-supplied
//! implementations of [`contracts::Transport`]; this crate never speaks a
//! wire protocol itself.

pub mod dispatcher;
pub mod error;
pub mod transports;

pub use contracts::{
    DeliveryCallback, DeliveryReceipt, DeliveryResult, PlatformSpec, PushMessage, SendOptions,
    Transport, TransportError,
};
pub use dispatcher::Dispatcher;
pub use error::DispatchError;
pub use transports::{FileTransport, LogTransport};
