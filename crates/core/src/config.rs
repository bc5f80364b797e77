//! Configuration options for APDU exchanges

/// Capacity used when none is configured, enough for a registration
/// response carrying a typical attestation certificate
pub const DEFAULT_CAPACITY: usize = 2048;

/// Default cap on GET RESPONSE rounds for one exchange
pub const DEFAULT_MAX_CONTINUATIONS: usize = 255;

/// Configuration options for a chained exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeConfig {
    /// Maximum number of payload bytes an exchange may accumulate
    pub capacity: usize,

    /// Class byte for GET RESPONSE commands
    pub get_response_class: u8,

    /// Maximum number of GET RESPONSE rounds before giving up
    pub max_continuations: usize,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            get_response_class: 0x00,
            max_continuations: DEFAULT_MAX_CONTINUATIONS,
        }
    }
}

impl ExchangeConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the payload capacity
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the GET RESPONSE class byte
    pub const fn with_get_response_class(mut self, cla: u8) -> Self {
        self.get_response_class = cla;
        self
    }

    /// Set the maximum number of GET RESPONSE rounds
    pub const fn with_max_continuations(mut self, max: usize) -> Self {
        self.max_continuations = max;
        self
    }
}
