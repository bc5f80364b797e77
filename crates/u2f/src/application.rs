//! U2F application interface
//!
//! Each operation is one field transaction: activate, SELECT the U2F
//! application, send the dependent command, release. The field guard powers
//! the field down on every exit path.

use bytes::Bytes;
use fidonfc_apdu_core::prelude::*;
use tracing::debug;

use crate::commands::{AuthenticateCommand, ControlByte, GetInfoCommand, RegisterCommand};
use crate::config::U2fConfig;
use crate::types::{
    AuthenticationResponse, AuthenticatorInfo, AuthenticatorVersion, Parameter,
    RegistrationResponse,
};
use crate::{Error, Result};

/// U2F authenticator reached through a card transport
#[derive(Debug)]
pub struct Authenticator<T: CardTransport> {
    session: Session<T>,
    aid: Bytes,
}

impl<T: CardTransport> Authenticator<T> {
    /// Create an authenticator with the default configuration
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, U2fConfig::default())
    }

    /// Create an authenticator with the given configuration
    pub fn with_config(transport: T, config: U2fConfig) -> Self {
        Self {
            session: Session::with_config(transport, config.exchange),
            aid: config.aid,
        }
    }

    /// Field session owned by this authenticator
    pub const fn session(&self) -> &Session<T> {
        &self.session
    }

    /// Take ownership of the transport and return it
    pub fn into_transport(self) -> T {
        self.session.into_transport()
    }

    /// Select the U2F application and report its version
    pub fn select(&mut self) -> Result<AuthenticatorVersion> {
        let mut field = self.session.activate()?;
        select_application(&mut field, &self.aid)
    }

    /// Register a new credential
    pub fn register(
        &mut self,
        challenge: &Parameter,
        application: &Parameter,
    ) -> Result<RegistrationResponse> {
        let payload = {
            let mut field = self.session.activate()?;
            select_application(&mut field, &self.aid)?;
            let response = field.exchange(&RegisterCommand::new(challenge, application))?;
            require_success(response)?
        };

        let registration = RegistrationResponse::decode(&payload)?;
        debug!(
            key_handle_len = registration.key_handle.len(),
            certificate_len = registration.certificate.len(),
            signature_len = registration.signature.len(),
            "Registration decoded"
        );
        Ok(registration)
    }

    /// Authenticate with a registered credential
    pub fn authenticate(
        &mut self,
        command: &AuthenticateCommand,
    ) -> Result<AuthenticationResponse> {
        let payload = {
            let mut field = self.session.activate()?;
            select_application(&mut field, &self.aid)?;
            require_success(field.exchange(command)?)?
        };

        let authentication = AuthenticationResponse::decode(&payload)?;
        debug!(
            user_presence = authentication.user_presence,
            counter = authentication.counter,
            signature_len = authentication.signature.len(),
            control = %command.control(),
            "Authentication decoded"
        );
        Ok(authentication)
    }

    /// Check whether `key_handle` was issued by this authenticator for
    /// `application`, without signing
    pub fn check_key_handle(
        &mut self,
        challenge: &Parameter,
        application: &Parameter,
        key_handle: &[u8],
    ) -> Result<bool> {
        let command =
            AuthenticateCommand::new(ControlByte::CheckOnly, challenge, application, key_handle)?;

        match self.authenticate(&command) {
            Err(e) if e.is_user_presence_required() => Ok(true),
            Err(e) if e.is_bad_key_handle() => Ok(false),
            Err(e) => Err(e),
            Ok(_) => Err(Error::Decode(crate::DecodeError::UnexpectedFormat(
                "check-only authenticate returned a signature",
            ))),
        }
    }

    /// Report the version and, when present, the FIDO2 info of the authenticator
    pub fn info(&mut self) -> Result<AuthenticatorInfo> {
        let mut field = self.session.activate()?;
        let version = select_application(&mut field, &self.aid)?;

        let response = field.exchange(&GetInfoCommand)?;
        let fido2_info = if response.is_success() {
            Some(response.into_parts().0)
        } else {
            debug!(status = %response.status(), "FIDO2 info not available");
            None
        };

        Ok(AuthenticatorInfo {
            version,
            fido2_info,
        })
    }
}

fn select_application<T: CardTransport>(
    field: &mut Field<'_, T>,
    aid: &[u8],
) -> Result<AuthenticatorVersion> {
    let response = field.select(aid)?;
    if !response.is_success() {
        return Err(Error::NotU2f(response.status()));
    }

    let version = AuthenticatorVersion::from(response.into_parts().0);
    debug!(%version, "Authenticator selected");
    Ok(version)
}

fn require_success(response: Response) -> Result<Bytes> {
    match response.status().classify() {
        StatusClass::Success => Ok(response.into_parts().0),
        _ => Err(Error::Protocol(response.status())),
    }
}
