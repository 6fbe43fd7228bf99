//! Signed integers with compact encodings
//!
//! The small encodings hold values in `-128..=127` as a single two's complement byte.

use std::convert::TryFrom;

use crate::{
    buffer::{flyweight, Watcher},
    error::Error,
    fixed_width::{FORMAT_CODE_WIDTH, INT_WIDTH, LONG_WIDTH, SMALL_WIDTH},
    format_code::{EncodingCodes, Kind},
};

flyweight! {
    /// View of an AMQP `int`
    ///
    /// | encoding | code | width |
    /// |----------|------|-------|
    /// | smallint | 0x54 | 1 |
    /// | int | 0x71 | 4 |
    IntType => Kind::Int
}

impl<B, W> IntType<B, W>
where
    B: AsRef<[u8]>,
{
    /// Decodes the value from whichever width is present
    pub fn get(&self) -> Result<i32, Error> {
        let index = self.0.offset() + FORMAT_CODE_WIDTH;
        match self.0.encoding_code()? {
            EncodingCodes::SmallInt => self.0.uint8_get(index).map(|b| b as i8 as i32),
            EncodingCodes::Int => self.0.read(index).map(i32::from_be_bytes),
            code => Err(Error::InvalidFormatCode(code as u8)),
        }
    }

    /// Index right after the encoded value
    pub fn limit(&self) -> Result<usize, Error> {
        let width = match self.0.encoding_code()? {
            EncodingCodes::SmallInt => SMALL_WIDTH,
            EncodingCodes::Int => INT_WIDTH,
            code => return Err(Error::InvalidFormatCode(code as u8)),
        };
        Ok(self.0.offset() + FORMAT_CODE_WIDTH + width)
    }
}

impl<B, W> IntType<B, W>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
    W: Watcher,
{
    /// Encodes `value` with the smallest width that holds it
    pub fn set(&mut self, value: i32) -> Result<&mut Self, Error> {
        let bytes = value.to_be_bytes();
        let (code, payload): (_, &[u8]) = match i8::try_from(value) {
            Ok(_) => (EncodingCodes::SmallInt, &bytes[INT_WIDTH - 1..]),
            Err(_) => (EncodingCodes::Int, &bytes),
        };
        self.0.put_value(code, payload)?;
        self.0.notify_changed(Kind::Int);
        Ok(self)
    }
}

flyweight! {
    /// View of an AMQP `long`
    ///
    /// | encoding | code | width |
    /// |----------|------|-------|
    /// | smalllong | 0x55 | 1 |
    /// | long | 0x81 | 8 |
    LongType => Kind::Long
}

impl<B, W> LongType<B, W>
where
    B: AsRef<[u8]>,
{
    /// Decodes the value from whichever width is present
    pub fn get(&self) -> Result<i64, Error> {
        let index = self.0.offset() + FORMAT_CODE_WIDTH;
        match self.0.encoding_code()? {
            EncodingCodes::SmallLong => self.0.uint8_get(index).map(|b| b as i8 as i64),
            EncodingCodes::Long => self.0.read(index).map(i64::from_be_bytes),
            code => Err(Error::InvalidFormatCode(code as u8)),
        }
    }

    /// Index right after the encoded value
    pub fn limit(&self) -> Result<usize, Error> {
        let width = match self.0.encoding_code()? {
            EncodingCodes::SmallLong => SMALL_WIDTH,
            EncodingCodes::Long => LONG_WIDTH,
            code => return Err(Error::InvalidFormatCode(code as u8)),
        };
        Ok(self.0.offset() + FORMAT_CODE_WIDTH + width)
    }
}

impl<B, W> LongType<B, W>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
    W: Watcher,
{
    /// Encodes `value` with the smallest width that holds it
    pub fn set(&mut self, value: i64) -> Result<&mut Self, Error> {
        let bytes = value.to_be_bytes();
        let (code, payload): (_, &[u8]) = match i8::try_from(value) {
            Ok(_) => (EncodingCodes::SmallLong, &bytes[LONG_WIDTH - 1..]),
            Err(_) => (EncodingCodes::Long, &bytes),
        };
        self.0.put_value(code, payload)?;
        self.0.notify_changed(Kind::Long);
        Ok(self)
    }
}
