//! AMQP `list`
//!
//! A list is a sequence of polymorphic elements. Each element carries its own
//! format code and is walked with [`DynamicType`](crate::dynamic::DynamicType).

use crate::{
    buffer::{flyweight, Watcher},
    dynamic::Elements,
    error::Error,
    fixed_width::FORMAT_CODE_WIDTH,
    format_code::{EncodingCodes, Kind},
};

use super::header::{copy_encoded, Header};

const LIST: Header = Header::new(EncodingCodes::List8, EncodingCodes::List32);

flyweight! {
    /// View of an AMQP `list`
    ///
    /// Writes use `0xc0` or `0xd0`. The empty list `0x45` is accepted when reading.
    ///
    /// Typical encoding:
    ///
    /// ```rust
    /// use amqp_codec::types::{ListType, UIntType};
    ///
    /// let mut buffer = [0u8; 16];
    /// let mut list = ListType::wrap(&mut buffer[..], 0);
    /// list.max_length(0xff).unwrap().clear().unwrap();
    /// let body = list.body_offset().unwrap();
    /// drop(list);
    ///
    /// let mut element = UIntType::wrap(&mut buffer[..], body);
    /// element.set(7).unwrap();
    /// let limit = element.limit().unwrap();
    ///
    /// let mut list = ListType::wrap(&mut buffer[..], 0);
    /// list.set_limit(1, limit).unwrap();
    /// assert_eq!(list.count(), Ok(1));
    /// assert_eq!(list.limit(), Ok(5));
    /// ```
    ListType => Kind::List
}

impl<B, W> ListType<B, W>
where
    B: AsRef<[u8]>,
{
    fn is_list0(&self) -> Result<bool, Error> {
        Ok(self.0.format_code()? == EncodingCodes::List0 as u8)
    }

    /// Number of elements
    pub fn count(&self) -> Result<u32, Error> {
        match self.is_list0()? {
            true => Ok(0),
            false => LIST.count(&self.0),
        }
    }

    /// Number of bytes following the length field
    pub fn length(&self) -> Result<u32, Error> {
        match self.is_list0()? {
            true => Ok(0),
            false => LIST.length(&self.0),
        }
    }

    /// Index right after the last element
    pub fn limit(&self) -> Result<usize, Error> {
        match self.is_list0()? {
            true => Ok(self.0.offset() + FORMAT_CODE_WIDTH),
            false => LIST.end(&self.0),
        }
    }

    /// Index of the first element
    pub fn body_offset(&self) -> Result<usize, Error> {
        match self.is_list0()? {
            true => Ok(self.0.offset() + FORMAT_CODE_WIDTH),
            false => LIST.limit(&self.0),
        }
    }

    /// Walks the elements in order
    pub fn iter(&self) -> Result<Elements<'_>, Error> {
        Ok(Elements::new(
            self.0.bytes(),
            self.body_offset()?,
            self.count()?,
            self.limit()?,
        ))
    }
}

impl<B, W> ListType<B, W>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
    W: Watcher,
{
    /// Selects the header width able to hold a body of `value` bytes
    pub fn max_length(&mut self, value: u32) -> Result<&mut Self, Error> {
        LIST.max(&mut self.0, value)?;
        self.0.notify_changed(Kind::List);
        Ok(self)
    }

    /// Selects the header width able to hold `value` elements
    pub fn max_count(&mut self, value: u32) -> Result<&mut Self, Error> {
        LIST.max(&mut self.0, value)?;
        self.0.notify_changed(Kind::List);
        Ok(self)
    }

    /// Writes an empty list with the selected header width
    pub fn clear(&mut self) -> Result<&mut Self, Error> {
        LIST.clear(&mut self.0, 0)?;
        self.0.notify_changed(Kind::List);
        Ok(self)
    }

    /// Records `count` elements written from [`body_offset`](Self::body_offset) up to `limit`
    pub fn set_limit(&mut self, count: u32, limit: usize) -> Result<&mut Self, Error> {
        LIST.finish(&mut self.0, count, limit)?;
        self.0.notify_changed(Kind::List);
        Ok(self)
    }

    /// Copies another encoded list
    pub fn set<B2, W2>(&mut self, value: &ListType<B2, W2>) -> Result<&mut Self, Error>
    where
        B2: AsRef<[u8]>,
    {
        copy_encoded(&mut self.0, &value.0, value.limit()?)?;
        self.0.notify_changed(Kind::List);
        Ok(self)
    }
}
