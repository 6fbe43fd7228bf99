//! AMQP `null`

use crate::{
    buffer::{flyweight, Watcher},
    error::Error,
    format_code::{EncodingCodes, Kind},
};

use super::expect_code;

flyweight! {
    /// View of the AMQP `null`
    ///
    /// encoding code = 0x40, category = fixed, width = 0
    NullType => Kind::Null
}

impl<B, W> NullType<B, W>
where
    B: AsRef<[u8]>,
{
    /// Succeeds if the view holds a null
    pub fn get(&self) -> Result<(), Error> {
        expect_code(&self.0, EncodingCodes::Null).map(|_| ())
    }

    /// Index right after the encoded value
    pub fn limit(&self) -> Result<usize, Error> {
        expect_code(&self.0, EncodingCodes::Null)
    }
}

impl<B, W> NullType<B, W>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
    W: Watcher,
{
    /// Encodes a null
    pub fn set(&mut self) -> Result<&mut Self, Error> {
        self.0.put_code(EncodingCodes::Null)?;
        self.0.notify_changed(Kind::Null);
        Ok(self)
    }
}
