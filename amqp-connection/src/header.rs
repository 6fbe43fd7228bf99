//! View of a protocol header inside a buffer

use std::convert::TryFrom;

use crate::{
    error::Error,
    protocol_header::{ProtocolHeader, PROTOCOL_HEADER_LEN},
};

/// The 8 bytes of a protocol header starting at `offset` in `buffer`
#[derive(Debug, Clone)]
pub struct Header<B> {
    buffer: B,
    offset: usize,
}

impl<B> Header<B> {
    /// Binds a view to `offset` in `buffer` without looking at the bytes
    pub fn wrap(buffer: B, offset: usize) -> Self {
        Self { buffer, offset }
    }

    /// Start of the header in the buffer
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Index right after the header
    pub fn limit(&self) -> usize {
        self.offset + PROTOCOL_HEADER_LEN
    }

    /// Get a reference to the underlying buffer
    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    /// Consumes the view and returns the underlying buffer
    pub fn into_inner(self) -> B {
        self.buffer
    }
}

fn out_of_bounds(offset: usize) -> Error {
    Error::Codec(amqp_codec::Error::OutOfBounds {
        offset,
        len: PROTOCOL_HEADER_LEN,
    })
}

impl<B> Header<B>
where
    B: AsRef<[u8]>,
{
    /// The raw header bytes
    pub fn get(&self) -> Result<[u8; PROTOCOL_HEADER_LEN], Error> {
        self.buffer
            .as_ref()
            .get(self.offset..self.limit())
            .and_then(|bytes| <[u8; PROTOCOL_HEADER_LEN]>::try_from(bytes).ok())
            .ok_or_else(|| out_of_bounds(self.offset))
    }

    /// Parses the header bytes
    pub fn protocol_header(&self) -> Result<ProtocolHeader, Error> {
        let bytes = self.get()?;
        ProtocolHeader::try_from(bytes)
            .map_err(Error::ProtocolHeaderMismatch)
    }

    /// A view of the same bytes that borrows the buffer
    pub fn as_slice(&self) -> Header<&[u8]> {
        Header::wrap(self.buffer.as_ref(), self.offset)
    }
}

impl<B> Header<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Writes `header`
    pub fn set(&mut self, header: ProtocolHeader) -> Result<&mut Self, Error> {
        let bytes: [u8; PROTOCOL_HEADER_LEN] = header.into();
        let offset = self.offset;
        self.buffer
            .as_mut()
            .get_mut(offset..offset + PROTOCOL_HEADER_LEN)
            .ok_or_else(|| out_of_bounds(offset))?
            .copy_from_slice(&bytes);
        Ok(self)
    }
}
