//! FIDO U2F client over ISO/IEC 7816-4 APDUs
//!
//! Builds the U2F raw message commands, drives them through the chaining
//! exchange of [`fidonfc_apdu_core`] and decodes the authenticator's
//! registration and authentication replies.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rustdoc::missing_crate_level_docs)]

mod application;
mod commands;
mod config;
mod constants;
pub mod der;
mod error;
mod types;

pub use application::Authenticator;
pub use commands::*;
pub use config::U2fConfig;
pub use error::{DecodeError, Error, Result};
pub use types::*;

pub use constants::*;
