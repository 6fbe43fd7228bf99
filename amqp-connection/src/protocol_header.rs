//! Implements the protocol headers

use std::convert::{TryFrom, TryInto};

use bytes::{Buf, BufMut, Bytes, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

use crate::error::Error;

/// Major version of the protocol
pub const MAJOR: u8 = 1;

/// Minor version of the protocol
pub const MINOR: u8 = 0;

/// Revision of the protocol
pub const REVISION: u8 = 0;

/// Number of bytes of a protocol header on the wire
pub const PROTOCOL_HEADER_LEN: usize = 8;

const PROTOCOL_HEADER_PREFIX: &[u8; 4] = b"AMQP";

/// Protocol header
///
/// The header is the literal `"AMQP"` followed by the protocol id and the version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolHeader {
    /// Protocol ID
    pub id: ProtocolId,

    /// Major number
    pub major: u8,

    /// Minor number
    pub minor: u8,

    /// Revision number
    pub revision: u8,
}

impl Default for ProtocolHeader {
    fn default() -> Self {
        Self::amqp()
    }
}

impl ProtocolHeader {
    /// Creates a new protocol header
    pub fn new(id: ProtocolId, major: u8, minor: u8, revision: u8) -> Self {
        Self {
            id,
            major,
            minor,
            revision,
        }
    }

    /// Creates an AMQP 1.0.0 protocol header
    pub fn amqp() -> Self {
        Self::new(ProtocolId::Amqp, MAJOR, MINOR, REVISION)
    }

    /// Creates a TLS 1.0.0 protocol header
    pub fn tls() -> Self {
        Self::new(ProtocolId::Tls, MAJOR, MINOR, REVISION)
    }

    /// Creates a SASL 1.0.0 protocol header
    pub fn sasl() -> Self {
        Self::new(ProtocolId::Sasl, MAJOR, MINOR, REVISION)
    }

    /// Returns whether the protocol id is AMQP
    pub fn is_amqp(&self) -> bool {
        matches!(self.id, ProtocolId::Amqp)
    }

    /// Returns whether the protocol id is TLS
    pub fn is_tls(&self) -> bool {
        matches!(self.id, ProtocolId::Tls)
    }

    /// Returns whether the protocol id is SASL
    pub fn is_sasl(&self) -> bool {
        matches!(self.id, ProtocolId::Sasl)
    }
}

impl From<ProtocolHeader> for [u8; PROTOCOL_HEADER_LEN] {
    fn from(value: ProtocolHeader) -> Self {
        let [a, m, q, p] = *PROTOCOL_HEADER_PREFIX;
        [a, m, q, p, value.id as u8, value.major, value.minor, value.revision]
    }
}

impl From<ProtocolHeader> for Bytes {
    fn from(header: ProtocolHeader) -> Self {
        let bytes: [u8; PROTOCOL_HEADER_LEN] = header.into();
        Bytes::copy_from_slice(&bytes[..])
    }
}

impl TryFrom<[u8; PROTOCOL_HEADER_LEN]> for ProtocolHeader {
    type Error = [u8; PROTOCOL_HEADER_LEN];

    fn try_from(v: [u8; PROTOCOL_HEADER_LEN]) -> Result<Self, Self::Error> {
        if &v[..4] != PROTOCOL_HEADER_PREFIX {
            return Err(v);
        }
        let id = v[4].try_into().map_err(|_| v)?;
        Ok(Self::new(id, v[5], v[6], v[7]))
    }
}

impl<'a> TryFrom<&'a [u8]> for ProtocolHeader {
    type Error = &'a [u8];

    fn try_from(value: &'a [u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; PROTOCOL_HEADER_LEN] = value.try_into().map_err(|_| value)?;
        Self::try_from(bytes).map_err(|_| value)
    }
}

/// Protocol ID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolId {
    /// AMQP
    Amqp = 0x0,

    /// TLS
    Tls = 0x2,

    /// SASL
    Sasl = 0x3,
}

impl TryFrom<u8> for ProtocolId {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let val = match value {
            0x0 => Self::Amqp,
            0x2 => Self::Tls,
            0x3 => Self::Sasl,
            _ => return Err(value),
        };
        Ok(val)
    }
}

/// Encoder and Decoder for protocol headers
#[derive(Debug, Clone, Default)]
pub struct ProtocolHeaderCodec {}

impl ProtocolHeaderCodec {
    /// Creates a new protocol header codec
    pub fn new() -> Self {
        Self {}
    }
}

impl Encoder<ProtocolHeader> for ProtocolHeaderCodec {
    type Error = Error;

    fn encode(&mut self, item: ProtocolHeader, dst: &mut BytesMut) -> Result<(), Self::Error> {
        let buf: [u8; PROTOCOL_HEADER_LEN] = item.into();
        dst.put(&buf[..]);
        Ok(())
    }
}

impl Decoder for ProtocolHeaderCodec {
    type Item = ProtocolHeader;
    type Error = Error;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        // Wait for the full header
        if src.remaining() < PROTOCOL_HEADER_LEN {
            return Ok(None);
        }

        let mut buf = [0u8; PROTOCOL_HEADER_LEN];
        src.copy_to_slice(&mut buf);
        ProtocolHeader::try_from(buf).map(Some).map_err(|bytes| {
            #[cfg(feature = "tracing")]
            tracing::error!("Protocol header mismatch: {:?}", bytes);
            #[cfg(feature = "log")]
            log::error!("Protocol header mismatch: {:?}", bytes);
            Error::ProtocolHeaderMismatch(bytes)
        })
    }
}
