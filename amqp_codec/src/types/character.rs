//! AMQP `char`, a single UTF-32BE code point

use crate::{
    buffer::{flyweight, Watcher},
    error::Error,
    fixed_width::CHAR_WIDTH,
    format_code::{EncodingCodes, Kind},
};

use super::expect_code;

flyweight! {
    /// View of an AMQP `char`, a single UTF-32BE encoded unicode character
    ///
    /// encoding code = 0x73, category = fixed, width = 4
    CharType => Kind::Char
}

impl<B, W> CharType<B, W>
where
    B: AsRef<[u8]>,
{
    /// Decodes the value, failing if the code point is not a unicode scalar value
    pub fn get(&self) -> Result<char, Error> {
        let index = expect_code(&self.0, EncodingCodes::Char)?;
        let code_point = self.0.uint32_get(index)?;
        char::from_u32(code_point).ok_or(Error::InvalidValue)
    }

    /// Index right after the encoded value
    pub fn limit(&self) -> Result<usize, Error> {
        expect_code(&self.0, EncodingCodes::Char).map(|index| index + CHAR_WIDTH)
    }
}

impl<B, W> CharType<B, W>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
    W: Watcher,
{
    /// Encodes `value`
    pub fn set(&mut self, value: char) -> Result<&mut Self, Error> {
        let code_point = value as u32;
        self.0
            .put_value(EncodingCodes::Char, &code_point.to_be_bytes())?;
        self.0.notify_changed(Kind::Char);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::types::test_util::*;

    use super::*;

    #[test]
    fn encode_then_decode() {
        for offset in offsets(5) {
            let mut buffer = [0u8; BUFFER_CAPACITY];
            let mut view = CharType::wrap(&mut buffer[..], offset);
            view.set('\u{12}').unwrap();
            assert_eq!(view.get(), Ok('\u{12}'));
            assert_eq!(view.limit(), Ok(offset + 5));

            view.set('é').unwrap();
            assert_eq!(view.get(), Ok('é'));
            assert_eq!(&buffer[offset..offset + 5], &[0x73, 0x00, 0x00, 0x00, 0xe9]);
        }
    }

    #[test]
    fn surrogate_is_invalid() {
        let buffer = [0x73u8, 0x00, 0x00, 0xd8, 0x00];
        let view = CharType::wrap(&buffer[..], 0);
        assert_eq!(view.get(), Err(Error::InvalidValue));
        assert_eq!(view.limit(), Ok(5));
    }
}
