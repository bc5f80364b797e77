//! Field session for dependent command sequences
//!
//! Selecting an application only lasts as long as the card stays powered, so
//! a SELECT and the command that depends on it must run inside one field
//! activation. [`Session`] owns the transport and tracks the field state;
//! [`Session::activate`] hands out a [`Field`] guard that powers the field
//! down exactly once, when released explicitly or when dropped on an early
//! return.

use bytes::Bytes;
use derive_more::Display;
use tracing::{debug, warn};

use crate::command::{ApduCommand, Command};
use crate::config::ExchangeConfig;
use crate::exchange::exchange;
use crate::response::Response;
use crate::transport::CardTransport;
use crate::{Error, Result};

/// SELECT instruction byte
pub const INS_SELECT: u8 = 0xA4;

/// SELECT P1: select by DF name (application identifier)
pub const SELECT_BY_NAME: u8 = 0x04;

/// Build an ISO SELECT by name for `aid`
pub fn select_by_name(aid: impl Into<Bytes>) -> Result<Command> {
    Command::new_with_data_and_le(0x00, INS_SELECT, SELECT_BY_NAME, 0x00, aid, 0x00)
        .map_err(Error::from)
}

/// Power state of the field
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    /// Field off, no application selected
    Idle,
    /// Field on, commands can be exchanged
    Active,
}

/// Caller-owned connection to one authenticator
#[derive(Debug)]
pub struct Session<T: CardTransport> {
    transport: T,
    state: FieldState,
    config: ExchangeConfig,
}

impl<T: CardTransport> Session<T> {
    /// Create a new idle session with the default exchange configuration
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, ExchangeConfig::default())
    }

    /// Create a new idle session with the given exchange configuration
    pub const fn with_config(transport: T, config: ExchangeConfig) -> Self {
        Self {
            transport,
            state: FieldState::Idle,
            config,
        }
    }

    /// Current field state
    pub const fn state(&self) -> FieldState {
        self.state
    }

    /// Exchange configuration used by every command in this session
    pub const fn config(&self) -> &ExchangeConfig {
        &self.config
    }

    /// Get a reference to the underlying transport
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Take ownership of the transport and return it
    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Power the field and return a guard for the dependent commands.
    ///
    /// The field is released when the guard is dropped, so every exit path of
    /// the caller, including `?` returns, powers it down.
    pub fn activate(&mut self) -> Result<Field<'_, T>> {
        if self.state == FieldState::Active {
            return Err(Error::FieldAlreadyActive);
        }

        self.transport.activate_field()?;
        self.state = FieldState::Active;
        debug!("Field activated");

        Ok(Field {
            session: self,
            released: false,
        })
    }

    fn release(&mut self) -> Result<()> {
        if self.state == FieldState::Idle {
            return Ok(());
        }

        // Idle even if the transport fails: the card is no longer trusted to
        // hold the selection either way.
        self.state = FieldState::Idle;
        debug!("Field released");
        self.transport.drop_field().map_err(Error::from)
    }
}

/// Active field, borrowed from a [`Session`]
#[derive(Debug)]
pub struct Field<'a, T: CardTransport> {
    session: &'a mut Session<T>,
    released: bool,
}

impl<T: CardTransport> Field<'_, T> {
    /// Select an application by identifier
    pub fn select(&mut self, aid: &[u8]) -> Result<Response> {
        let command = select_by_name(Bytes::copy_from_slice(aid))?;
        self.exchange(&command)
    }

    /// Exchange a command with chaining, using the session's capacity
    pub fn exchange<C: ApduCommand + ?Sized>(&mut self, command: &C) -> Result<Response> {
        let config = self.session.config;
        exchange(&mut self.session.transport, command, &config)
    }

    /// Exchange a command with chaining, bounded by `capacity` bytes
    pub fn exchange_with_capacity<C: ApduCommand + ?Sized>(
        &mut self,
        command: &C,
        capacity: usize,
    ) -> Result<Response> {
        let config = self.session.config.with_capacity(capacity);
        exchange(&mut self.session.transport, command, &config)
    }

    /// Release the field now and report a failing power-down
    pub fn release(mut self) -> Result<()> {
        self.released = true;
        self.session.release()
    }
}

impl<T: CardTransport> Drop for Field<'_, T> {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        if let Err(e) = self.session.release() {
            warn!(error = %e, "Failed to release field");
        }
    }
}
