//! Transport traits for APDU communication with cards
//!
//! This module provides the abstraction over the byte link to the
//! authenticator. Radio, reader and driver details live behind it.

pub mod error;

use std::fmt;

use bytes::Bytes;
pub use error::TransportError;
use tracing::{debug, trace};

/// Trait for basic card transports
///
/// A transport is responsible for sending and receiving raw APDU bytes and for
/// powering the RF/contact field. It has no knowledge of command structure or
/// protocol details such as GET RESPONSE chaining.
pub trait CardTransport: Send + Sync + fmt::Debug {
    /// Send raw APDU bytes to card and return response bytes
    ///
    /// The returned frame includes the trailing status word.
    fn transmit_raw(&mut self, command: &[u8]) -> Result<Bytes, TransportError> {
        trace!(command = %hex::encode_upper(command), "Transmitting raw command");
        let result = self.do_transmit_raw(command);
        match &result {
            Ok(response) => {
                trace!(response = %hex::encode_upper(response), "Received raw response");
            }
            Err(e) => {
                debug!(error = ?e, "Transport error during transmission");
            }
        }
        result
    }

    /// Internal implementation of transmit_raw
    /// This is the method that concrete implementations should override
    fn do_transmit_raw(&mut self, command: &[u8]) -> Result<Bytes, TransportError>;

    /// Power the field and bring the card to a state that accepts commands
    fn activate_field(&mut self) -> Result<(), TransportError>;

    /// Power the field down, ending any application selection on the card
    fn drop_field(&mut self) -> Result<(), TransportError>;
}

#[cfg(test)]
pub(crate) use mock::MockTransport;

#[cfg(test)]
mod mock {
    use std::collections::VecDeque;

    use super::*;

    /// Mock transport replaying queued frames
    #[derive(Debug, Default)]
    pub(crate) struct MockTransport {
        /// Frames (or failures) to return, in order
        pub(crate) responses: VecDeque<Result<Bytes, TransportError>>,
        /// Commands that were sent
        pub(crate) commands: Vec<Bytes>,
        /// Field activations seen
        pub(crate) activations: usize,
        /// Field releases seen
        pub(crate) releases: usize,
        /// Fail the next activation
        pub(crate) fail_activation: bool,
        /// Fail every power-down after counting it
        pub(crate) fail_release: bool,
    }

    impl MockTransport {
        /// Create a new mock transport with the given raw frames
        pub(crate) fn new<I, B>(frames: I) -> Self
        where
            I: IntoIterator<Item = B>,
            B: Into<Bytes>,
        {
            Self {
                responses: frames.into_iter().map(|f| Ok(f.into())).collect(),
                ..Default::default()
            }
        }

        /// Queue a transport failure after the frames already queued
        pub(crate) fn then_fail(mut self, error: TransportError) -> Self {
            self.responses.push_back(Err(error));
            self
        }
    }

    impl CardTransport for MockTransport {
        fn do_transmit_raw(&mut self, command: &[u8]) -> Result<Bytes, TransportError> {
            self.commands.push(Bytes::copy_from_slice(command));
            self.responses
                .pop_front()
                .unwrap_or(Err(TransportError::Transmission))
        }

        fn activate_field(&mut self) -> Result<(), TransportError> {
            if self.fail_activation {
                return Err(TransportError::NoCard);
            }
            self.activations += 1;
            Ok(())
        }

        fn drop_field(&mut self) -> Result<(), TransportError> {
            self.releases += 1;
            if self.fail_release {
                return Err(TransportError::Timeout);
            }
            Ok(())
        }
    }
}
