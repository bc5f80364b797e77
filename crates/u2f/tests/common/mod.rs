#![allow(dead_code)]

use std::collections::VecDeque;

use bytes::Bytes;
use fidonfc_apdu_core::{CardTransport, TransportError};

/// Card that answers from a script and records what it was sent
#[derive(Debug, Default)]
pub struct ScriptedCard {
    replies: VecDeque<Result<Bytes, TransportError>>,
    pub sent: Vec<Bytes>,
    pub activations: usize,
    pub releases: usize,
    pub field_on: bool,
}

impl ScriptedCard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply of `payload` followed by status `sw`
    pub fn reply(mut self, payload: &[u8], sw: u16) -> Self {
        let mut frame = payload.to_vec();
        frame.extend_from_slice(&sw.to_be_bytes());
        self.replies.push_back(Ok(Bytes::from(frame)));
        self
    }

    /// Queue `payload` split into GET RESPONSE sized chunks ending in 90 00
    pub fn reply_chained(mut self, payload: &[u8], chunk: usize) -> Self {
        let chunks: Vec<&[u8]> = payload.chunks(chunk).collect();
        for (i, part) in chunks.iter().enumerate() {
            let remaining = payload.len() - chunk * i - part.len();
            let sw = if remaining == 0 {
                0x9000
            } else {
                0x6100 | remaining.min(0xFF) as u16
            };
            self = self.reply(part, sw);
        }
        self
    }

    /// Queue a transport failure
    pub fn fail(mut self, error: TransportError) -> Self {
        self.replies.push_back(Err(error));
        self
    }

    /// Instruction bytes of every command sent, in order
    pub fn instructions(&self) -> Vec<u8> {
        self.sent.iter().map(|c| c[1]).collect()
    }
}

impl CardTransport for ScriptedCard {
    fn do_transmit_raw(&mut self, command: &[u8]) -> Result<Bytes, TransportError> {
        if !self.field_on {
            return Err(TransportError::NoCard);
        }
        self.sent.push(Bytes::copy_from_slice(command));
        self.replies
            .pop_front()
            .unwrap_or(Err(TransportError::Other("script exhausted".into())))
    }

    fn activate_field(&mut self) -> Result<(), TransportError> {
        self.activations += 1;
        self.field_on = true;
        Ok(())
    }

    fn drop_field(&mut self) -> Result<(), TransportError> {
        self.releases += 1;
        self.field_on = false;
        Ok(())
    }
}

/// Registration payload: reserved byte, public key, key handle, certificate
/// with a one octet long form length, signature
pub fn registration_payload(key_handle: &[u8], cert_body: usize, signature: &[u8]) -> Vec<u8> {
    let mut buf = vec![0x05];
    buf.extend_from_slice(&[0x04; 65]);
    buf.push(u8::try_from(key_handle.len()).unwrap());
    buf.extend_from_slice(key_handle);
    buf.extend_from_slice(&[0x30, 0x81, u8::try_from(cert_body).unwrap()]);
    buf.extend(std::iter::repeat_n(0x11, cert_body));
    buf.extend_from_slice(signature);
    buf
}
