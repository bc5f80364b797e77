//! Configuration for U2F operations

use bytes::Bytes;
use fidonfc_apdu_core::ExchangeConfig;

use crate::constants::U2F_AID;

/// Configuration for an [`Authenticator`](crate::Authenticator)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct U2fConfig {
    /// Exchange settings used for every command
    pub exchange: ExchangeConfig,

    /// Application identifier to SELECT before each operation
    pub aid: Bytes,
}

impl Default for U2fConfig {
    fn default() -> Self {
        Self {
            exchange: ExchangeConfig::default(),
            aid: Bytes::from_static(U2F_AID),
        }
    }
}

impl U2fConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the exchange settings
    pub const fn with_exchange(mut self, exchange: ExchangeConfig) -> Self {
        self.exchange = exchange;
        self
    }

    /// Set the response capacity
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.exchange.capacity = capacity;
        self
    }

    /// Set the application identifier
    pub fn with_aid(mut self, aid: impl Into<Bytes>) -> Self {
        self.aid = aid.into();
        self
    }
}
