//! AMQP `boolean`, written with the zero width `true` and `false` codes

use crate::{
    buffer::{flyweight, Watcher},
    error::Error,
    fixed_width::{BOOLEAN_WIDTH, FORMAT_CODE_WIDTH},
    format_code::{EncodingCodes, Kind},
};

flyweight! {
    /// View of an AMQP `boolean`
    ///
    /// encoding code = 0x56, category = fixed, width = 1
    /// encoding name = "true", encoding code = 0x41, category = fixed, width = 0
    /// encoding name = "false", encoding code = 0x42, category = fixed, width = 0
    ///
    /// Values are written with the zero width codes. All three encodings are read.
    BooleanType => Kind::Boolean
}

impl<B, W> BooleanType<B, W>
where
    B: AsRef<[u8]>,
{
    /// Decodes the value
    pub fn get(&self) -> Result<bool, Error> {
        match self.0.encoding_code()? {
            EncodingCodes::BooleanTrue => Ok(true),
            EncodingCodes::BooleanFalse => Ok(false),
            EncodingCodes::Boolean => {
                match self.0.uint8_get(self.0.offset() + FORMAT_CODE_WIDTH)? {
                    0x00 => Ok(false),
                    0x01 => Ok(true),
                    _ => Err(Error::InvalidValue),
                }
            }
            code => Err(Error::InvalidFormatCode(code as u8)),
        }
    }

    /// Index right after the encoded value
    pub fn limit(&self) -> Result<usize, Error> {
        let width = match self.0.encoding_code()? {
            EncodingCodes::BooleanTrue | EncodingCodes::BooleanFalse => 0,
            EncodingCodes::Boolean => BOOLEAN_WIDTH,
            code => return Err(Error::InvalidFormatCode(code as u8)),
        };
        Ok(self.0.offset() + FORMAT_CODE_WIDTH + width)
    }
}

impl<B, W> BooleanType<B, W>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
    W: Watcher,
{
    /// Encodes `value`
    pub fn set(&mut self, value: bool) -> Result<&mut Self, Error> {
        let code = match value {
            true => EncodingCodes::BooleanTrue,
            false => EncodingCodes::BooleanFalse,
        };
        self.0.put_code(code)?;
        self.0.notify_changed(Kind::Boolean);
        Ok(self)
    }
}
