//! Unsigned integers with compact encodings

use crate::{
    buffer::{flyweight, Watcher},
    error::Error,
    fixed_width::{is_narrow, FORMAT_CODE_WIDTH, SMALL_WIDTH, UINT_WIDTH, ULONG_WIDTH},
    format_code::{EncodingCodes, Kind},
};

flyweight! {
    /// View of an AMQP `uint`
    ///
    /// | encoding | code | width |
    /// |----------|------|-------|
    /// | uint0 | 0x43 | 0 |
    /// | smalluint | 0x52 | 1 |
    /// | uint | 0x70 | 4 |
    UIntType => Kind::UInt
}

impl<B, W> UIntType<B, W>
where
    B: AsRef<[u8]>,
{
    /// Decodes the value from whichever width is present
    pub fn get(&self) -> Result<u32, Error> {
        let index = self.0.offset() + FORMAT_CODE_WIDTH;
        match self.0.encoding_code()? {
            EncodingCodes::Uint0 => Ok(0),
            EncodingCodes::SmallUint => self.0.uint8_get(index).map(u32::from),
            EncodingCodes::Uint => self.0.uint32_get(index),
            code => Err(Error::InvalidFormatCode(code as u8)),
        }
    }

    /// Index right after the encoded value
    pub fn limit(&self) -> Result<usize, Error> {
        let width = match self.0.encoding_code()? {
            EncodingCodes::Uint0 => 0,
            EncodingCodes::SmallUint => SMALL_WIDTH,
            EncodingCodes::Uint => UINT_WIDTH,
            code => return Err(Error::InvalidFormatCode(code as u8)),
        };
        Ok(self.0.offset() + FORMAT_CODE_WIDTH + width)
    }
}

impl<B, W> UIntType<B, W>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
    W: Watcher,
{
    /// Encodes `value` with the smallest width that holds it
    pub fn set(&mut self, value: u32) -> Result<&mut Self, Error> {
        let bytes = value.to_be_bytes();
        let (code, payload): (_, &[u8]) = match value {
            0 => (EncodingCodes::Uint0, &[]),
            v if is_narrow(v as u64) => (EncodingCodes::SmallUint, &bytes[UINT_WIDTH - 1..]),
            _ => (EncodingCodes::Uint, &bytes),
        };
        self.0.put_value(code, payload)?;
        self.0.notify_changed(Kind::UInt);
        Ok(self)
    }
}

flyweight! {
    /// View of an AMQP `ulong`
    ///
    /// | encoding | code | width |
    /// |----------|------|-------|
    /// | ulong0 | 0x44 | 0 |
    /// | smallulong | 0x53 | 1 |
    /// | ulong | 0x80 | 8 |
    ULongType => Kind::ULong
}

impl<B, W> ULongType<B, W>
where
    B: AsRef<[u8]>,
{
    /// Decodes the value from whichever width is present
    pub fn get(&self) -> Result<u64, Error> {
        let index = self.0.offset() + FORMAT_CODE_WIDTH;
        match self.0.encoding_code()? {
            EncodingCodes::Ulong0 => Ok(0),
            EncodingCodes::SmallUlong => self.0.uint8_get(index).map(u64::from),
            EncodingCodes::Ulong => self.0.read(index).map(u64::from_be_bytes),
            code => Err(Error::InvalidFormatCode(code as u8)),
        }
    }

    /// Index right after the encoded value
    pub fn limit(&self) -> Result<usize, Error> {
        let width = match self.0.encoding_code()? {
            EncodingCodes::Ulong0 => 0,
            EncodingCodes::SmallUlong => SMALL_WIDTH,
            EncodingCodes::Ulong => ULONG_WIDTH,
            code => return Err(Error::InvalidFormatCode(code as u8)),
        };
        Ok(self.0.offset() + FORMAT_CODE_WIDTH + width)
    }
}

impl<B, W> ULongType<B, W>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
    W: Watcher,
{
    /// Encodes `value` with the smallest width that holds it
    pub fn set(&mut self, value: u64) -> Result<&mut Self, Error> {
        let bytes = value.to_be_bytes();
        let (code, payload): (_, &[u8]) = match value {
            0 => (EncodingCodes::Ulong0, &[]),
            v if is_narrow(v) => (EncodingCodes::SmallUlong, &bytes[ULONG_WIDTH - 1..]),
            _ => (EncodingCodes::Ulong, &bytes),
        };
        self.0.put_value(code, payload)?;
        self.0.notify_changed(Kind::ULong);
        Ok(self)
    }
}
