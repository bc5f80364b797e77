//! Core types for talking to an authenticator over ISO/IEC 7816-4 APDUs
//!
//! ## Overview
//!
//! This crate covers everything below the FIDO command set:
//!
//! - Building short and extended length commands
//! - Splitting response frames and classifying status words
//! - Following `61 XX` continuations with GET RESPONSE, bounded by a capacity
//! - Scoping a dependent command sequence to one field activation
//!
//! The byte link itself is supplied by the caller through [`CardTransport`].
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rustdoc::missing_crate_level_docs)]

// Re-export bytes for convenience
pub use bytes::{Bytes, BytesMut};

pub mod command;
pub mod config;
pub mod exchange;
pub mod response;
pub mod session;
pub mod transport;

mod error;
pub use error::{Error, Result};

pub use command::{ApduCommand, Command};
pub use config::ExchangeConfig;
pub use exchange::exchange;
pub use response::Response;
pub use response::status::{StatusClass, StatusWord};
pub use session::{Field, FieldState, Session};
pub use transport::{CardTransport, TransportError};

/// Prelude module containing commonly used traits and types
pub mod prelude {
    pub use crate::{
        ApduCommand, Bytes, BytesMut, CardTransport, Command, Error, ExchangeConfig, Field,
        FieldState, Response, Result, Session, StatusClass, StatusWord, TransportError,
    };
}
