//! Chained command/response exchange
//!
//! Short APDUs cap a single response at 256 bytes. When the card has more to
//! say it answers `61 XX` and the host pulls the rest with GET RESPONSE until
//! any other status arrives. The loop here is bounded by the caller's capacity
//! and by [`ExchangeConfig::max_continuations`].

use bytes::{Bytes, BytesMut};
use tracing::{Level, debug, info, instrument, trace, warn};

use crate::command::{ApduCommand, Command};
use crate::config::ExchangeConfig;
use crate::response::Response;
use crate::response::status::{StatusClass, StatusWord};
use crate::transport::CardTransport;
use crate::{Error, Result};

/// GET RESPONSE instruction byte
pub const INS_GET_RESPONSE: u8 = 0xC0;

/// Build the GET RESPONSE command asking for whatever remains (Le = 0)
pub const fn get_response(cla: u8) -> Command {
    Command::new_with_le(cla, INS_GET_RESPONSE, 0x00, 0x00, 0x00)
}

/// Send `command` and follow `61 XX` continuations until the card settles.
///
/// Returns the assembled payload with the final status word, which may be an
/// error status: rejecting it is up to the caller. A transport failure at any
/// step discards everything received so far.
#[instrument(
    level = "trace",
    skip_all,
    fields(ins = command.instruction(), capacity = config.capacity)
)]
pub fn exchange<T, C>(transport: &mut T, command: &C, config: &ExchangeConfig) -> Result<Response>
where
    T: CardTransport + ?Sized,
    C: ApduCommand + ?Sized,
{
    let mut frame = transmit(transport, &command.to_bytes())?;
    let mut payload = BytesMut::new();
    append(&mut payload, frame.payload(), config.capacity)?;

    let mut rounds = 0;
    while let StatusClass::MoreData(hint) = frame.status().classify() {
        if rounds == config.max_continuations {
            return Err(Error::ChainLimitExceeded(rounds));
        }
        rounds += 1;
        trace!(round = rounds, hint, accumulated = payload.len(), "Fetching more data");

        frame = transmit(transport, &get_response(config.get_response_class).to_bytes())?;
        append(&mut payload, frame.payload(), config.capacity)?;
    }

    let status = frame.status();
    log_final_status(status, payload.len(), rounds);

    Ok(Response::new(payload.freeze(), status))
}

fn transmit<T: CardTransport + ?Sized>(transport: &mut T, command: &[u8]) -> Result<Response> {
    let raw = transport.transmit_raw(command)?;
    Ok(Response::from_bytes(&raw)?)
}

fn append(payload: &mut BytesMut, chunk: &Bytes, capacity: usize) -> Result<()> {
    let required = payload.len() + chunk.len();
    if required > capacity {
        debug!(capacity, required, "Response exceeds capacity");
        return Err(Error::BufferOverflow { capacity, required });
    }
    payload.extend_from_slice(chunk);
    Ok(())
}

fn log_final_status(status: StatusWord, len: usize, rounds: usize) {
    let level = status.tracing_level();
    if level == Level::DEBUG {
        debug!(%status, len, rounds, "Exchange complete");
    } else if level == Level::INFO {
        info!(%status, len, rounds, "Exchange complete with warning");
    } else {
        warn!(%status, len, rounds, "Exchange rejected by card");
    }
}
