//! Length prefixed types: binary, string and symbol
//!
//! Payloads of up to 255 bytes use the one byte length prefix, longer ones the four
//! byte prefix. Reading never copies, [`BinaryType::get`], [`StringType::get`] and
//! [`SymbolType::get`] borrow the payload from the buffer.

use crate::{
    buffer::{flyweight, Flyweight, Watcher},
    error::Error,
    format_code::{EncodingCodes, Kind},
};

use super::header::Header;

const BINARY: Header = Header::new(EncodingCodes::Vbin8, EncodingCodes::Vbin32);
const STRING: Header = Header::new(EncodingCodes::Str8, EncodingCodes::Str32);
const SYMBOL: Header = Header::new(EncodingCodes::Sym8, EncodingCodes::Sym32);

fn payload<'a, B, W>(header: &Header, fw: &'a Flyweight<B, W>) -> Result<&'a [u8], Error>
where
    B: AsRef<[u8]>,
{
    let start = header.length_limit(fw)?;
    let len = header.length(fw)? as usize;
    fw.slice(start, len)
}

fn limit<B, W>(header: &Header, fw: &Flyweight<B, W>) -> Result<usize, Error>
where
    B: AsRef<[u8]>,
{
    Ok(header.length_limit(fw)? + header.length(fw)? as usize)
}

flyweight! {
    /// View of an AMQP `binary` (`0xa0` / `0xb0`)
    BinaryType => Kind::Binary
}

impl<B, W> BinaryType<B, W>
where
    B: AsRef<[u8]>,
{
    /// Borrows the payload
    pub fn get(&self) -> Result<&[u8], Error> {
        payload(&BINARY, &self.0)
    }

    /// Number of payload bytes
    pub fn length(&self) -> Result<u32, Error> {
        BINARY.length(&self.0)
    }

    /// Index right after the payload
    pub fn limit(&self) -> Result<usize, Error> {
        limit(&BINARY, &self.0)
    }
}

impl<B, W> BinaryType<B, W>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
    W: Watcher,
{
    /// Copies `value` into the buffer behind the shortest length prefix
    pub fn set(&mut self, value: &[u8]) -> Result<&mut Self, Error> {
        BINARY.put_payload(&mut self.0, value)?;
        self.0.notify_changed(Kind::Binary);
        Ok(self)
    }
}

flyweight! {
    /// View of an AMQP `string` (`0xa1` / `0xb1`), UTF-8 encoded
    StringType => Kind::String
}

impl<B, W> StringType<B, W>
where
    B: AsRef<[u8]>,
{
    /// Borrows the payload after validating it as UTF-8
    pub fn get(&self) -> Result<&str, Error> {
        let bytes = payload(&STRING, &self.0)?;
        std::str::from_utf8(bytes).map_err(Into::into)
    }

    /// Number of payload bytes, not characters
    pub fn length(&self) -> Result<u32, Error> {
        STRING.length(&self.0)
    }

    /// Index right after the payload
    pub fn limit(&self) -> Result<usize, Error> {
        limit(&STRING, &self.0)
    }
}

impl<B, W> StringType<B, W>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
    W: Watcher,
{
    /// Copies the UTF-8 bytes of `value` into the buffer
    pub fn set(&mut self, value: &str) -> Result<&mut Self, Error> {
        STRING.put_payload(&mut self.0, value.as_bytes())?;
        self.0.notify_changed(Kind::String);
        Ok(self)
    }
}

flyweight! {
    /// View of an AMQP `symbol` (`0xa3` / `0xb3`)
    ///
    /// Symbols are restricted to ASCII.
    SymbolType => Kind::Symbol
}

impl<B, W> SymbolType<B, W>
where
    B: AsRef<[u8]>,
{
    /// Borrows the payload after checking that it is ASCII
    pub fn get(&self) -> Result<&str, Error> {
        let bytes = payload(&SYMBOL, &self.0)?;
        if !bytes.is_ascii() {
            return Err(Error::InvalidValue);
        }
        std::str::from_utf8(bytes).map_err(Into::into)
    }

    /// Number of payload bytes
    pub fn length(&self) -> Result<u32, Error> {
        SYMBOL.length(&self.0)
    }

    /// Index right after the payload
    pub fn limit(&self) -> Result<usize, Error> {
        limit(&SYMBOL, &self.0)
    }
}

impl<B, W> SymbolType<B, W>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
    W: Watcher,
{
    /// Copies `value` into the buffer, fails with [`Error::InvalidValue`] on non-ASCII input
    pub fn set(&mut self, value: &str) -> Result<&mut Self, Error> {
        if !value.is_ascii() {
            return Err(Error::InvalidValue);
        }
        SYMBOL.put_payload(&mut self.0, value.as_bytes())?;
        self.0.notify_changed(Kind::Symbol);
        Ok(self)
    }
}
