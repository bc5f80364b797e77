mod authentication;
mod parameter;
mod registration;
mod version;

pub use authentication::AuthenticationResponse;
pub use parameter::{PLAIN_MAX_LEN, Parameter};
pub use registration::RegistrationResponse;
pub use version::{AuthenticatorInfo, AuthenticatorVersion};
