//! AMQP `array`
//!
//! All elements of an array share a single element constructor that directly
//! follows the count field. Elements are written without their own format code.

use std::convert::TryFrom;

use crate::{
    buffer::{flyweight, Watcher},
    error::Error,
    fixed_width::FORMAT_CODE_WIDTH,
    format::Category,
    format_code::{EncodingCodes, Kind},
};

use super::header::{copy_encoded, Header};

const ARRAY: Header = Header::new(EncodingCodes::Array8, EncodingCodes::Array32);

flyweight! {
    /// View of an AMQP `array` (`0xe0` / `0xf0`)
    ArrayType => Kind::Array
}

impl<B, W> ArrayType<B, W>
where
    B: AsRef<[u8]>,
{
    /// Number of elements
    pub fn count(&self) -> Result<u32, Error> {
        ARRAY.count(&self.0)
    }

    /// Number of bytes following the length field
    pub fn length(&self) -> Result<u32, Error> {
        ARRAY.length(&self.0)
    }

    /// Index right after the last element
    pub fn limit(&self) -> Result<usize, Error> {
        ARRAY.end(&self.0)
    }

    /// Index of the element constructor
    pub fn body_offset(&self) -> Result<usize, Error> {
        ARRAY.limit(&self.0)
    }

    /// Format code shared by every element
    pub fn element_code(&self) -> Result<EncodingCodes, Error> {
        let index = self.body_offset()?;
        self.0.uint8_get(index).and_then(EncodingCodes::try_from)
    }

    /// Type shared by every element
    pub fn element_kind(&self) -> Result<Kind, Error> {
        self.element_code().map(Kind::from)
    }

    /// Walks the element payloads
    pub fn iter(&self) -> Result<Payloads<'_>, Error> {
        let category = Category::from(self.element_code()?);
        Ok(Payloads {
            buffer: self.0.bytes(),
            category,
            index: self.body_offset()? + FORMAT_CODE_WIDTH,
            remaining: self.count()?,
            limit: self.limit()?,
        })
    }
}

impl<B, W> ArrayType<B, W>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
    W: Watcher,
{
    /// Selects the header width able to hold a body of `value` bytes
    pub fn max_length(&mut self, value: u32) -> Result<&mut Self, Error> {
        ARRAY.max(&mut self.0, value)?;
        self.0.notify_changed(Kind::Array);
        Ok(self)
    }

    /// Selects the header width able to hold `value` elements
    pub fn max_count(&mut self, value: u32) -> Result<&mut Self, Error> {
        ARRAY.max(&mut self.0, value)?;
        self.0.notify_changed(Kind::Array);
        Ok(self)
    }

    /// Writes the element constructor
    pub fn set_element_kind(&mut self, code: EncodingCodes) -> Result<&mut Self, Error> {
        let index = self.body_offset()?;
        self.0.uint8_put(index, code as u8)?;
        self.0.notify_changed(Kind::Array);
        Ok(self)
    }

    /// Writes an empty array, the element constructor is kept
    pub fn clear(&mut self) -> Result<&mut Self, Error> {
        ARRAY.clear(&mut self.0, FORMAT_CODE_WIDTH)?;
        self.0.notify_changed(Kind::Array);
        Ok(self)
    }

    /// Records `count` elements written after the element constructor up to `limit`
    pub fn set_limit(&mut self, count: u32, limit: usize) -> Result<&mut Self, Error> {
        ARRAY.finish(&mut self.0, count, limit)?;
        self.0.notify_changed(Kind::Array);
        Ok(self)
    }

    /// Copies another encoded array
    pub fn set<B2, W2>(&mut self, value: &ArrayType<B2, W2>) -> Result<&mut Self, Error>
    where
        B2: AsRef<[u8]>,
    {
        copy_encoded(&mut self.0, &value.0, value.limit()?)?;
        self.0.notify_changed(Kind::Array);
        Ok(self)
    }
}

/// Iterator over the payloads of the elements of an array
#[derive(Debug, Clone)]
pub struct Payloads<'a> {
    buffer: &'a [u8],
    category: Category,
    index: usize,
    remaining: u32,
    limit: usize,
}

impl<'a> Payloads<'a> {
    fn next_payload(&mut self) -> Result<&'a [u8], Error> {
        let rest = self
            .buffer
            .get(self.index..self.limit)
            .ok_or_else(|| {
                Error::out_of_bounds(self.index, self.limit.saturating_sub(self.index))
            })?;
        let len = self.category.payload_len(rest)?;
        let payload = rest.get(..len).ok_or(Error::InvalidLength)?;
        self.index += len;
        Ok(payload)
    }
}

impl<'a> Iterator for Payloads<'a> {
    type Item = Result<&'a [u8], Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let item = self.next_payload();
        if item.is_err() {
            self.remaining = 0;
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, usize::try_from(self.remaining).ok())
    }
}
