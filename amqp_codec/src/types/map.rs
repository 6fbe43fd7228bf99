//! AMQP `map`
//!
//! The count of a map is the number of keys plus the number of values, keys and
//! values alternate in the body.

use crate::{
    buffer::{flyweight, Watcher},
    dynamic::{Elements, Pairs},
    error::Error,
    format_code::{EncodingCodes, Kind},
};

use super::header::{copy_encoded, Header};

const MAP: Header = Header::new(EncodingCodes::Map8, EncodingCodes::Map32);

flyweight! {
    /// View of an AMQP `map` (`0xc1` / `0xd1`)
    MapType => Kind::Map
}

impl<B, W> MapType<B, W>
where
    B: AsRef<[u8]>,
{
    /// Number of keys plus number of values
    pub fn count(&self) -> Result<u32, Error> {
        MAP.count(&self.0)
    }

    /// Number of bytes following the length field
    pub fn length(&self) -> Result<u32, Error> {
        MAP.length(&self.0)
    }

    /// Index right after the last value
    pub fn limit(&self) -> Result<usize, Error> {
        MAP.end(&self.0)
    }

    /// Index of the first key
    pub fn body_offset(&self) -> Result<usize, Error> {
        MAP.limit(&self.0)
    }

    /// Walks the entries as `(key, value)` pairs
    pub fn iter(&self) -> Result<Pairs<'_>, Error> {
        let count = self.count()?;
        if count % 2 != 0 {
            return Err(Error::InvalidLength);
        }
        let elements = Elements::new(self.0.bytes(), self.body_offset()?, count, self.limit()?);
        Ok(Pairs::new(elements))
    }
}

impl<B, W> MapType<B, W>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
    W: Watcher,
{
    /// Selects the header width able to hold a body of `value` bytes
    pub fn max_length(&mut self, value: u32) -> Result<&mut Self, Error> {
        MAP.max(&mut self.0, value)?;
        self.0.notify_changed(Kind::Map);
        Ok(self)
    }

    /// Selects the header width able to hold `value` keys and values
    pub fn max_count(&mut self, value: u32) -> Result<&mut Self, Error> {
        MAP.max(&mut self.0, value)?;
        self.0.notify_changed(Kind::Map);
        Ok(self)
    }

    /// Writes an empty map with the selected header width
    pub fn clear(&mut self) -> Result<&mut Self, Error> {
        MAP.clear(&mut self.0, 0)?;
        self.0.notify_changed(Kind::Map);
        Ok(self)
    }

    /// Records `count` keys and values written up to `limit`
    pub fn set_limit(&mut self, count: u32, limit: usize) -> Result<&mut Self, Error> {
        MAP.finish(&mut self.0, count, limit)?;
        self.0.notify_changed(Kind::Map);
        Ok(self)
    }

    /// Copies another encoded map
    pub fn set<B2, W2>(&mut self, value: &MapType<B2, W2>) -> Result<&mut Self, Error>
    where
        B2: AsRef<[u8]>,
    {
        copy_encoded(&mut self.0, &value.0, value.limit()?)?;
        self.0.notify_changed(Kind::Map);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{test_util::*, SymbolType};

    use super::*;

    #[test]
    fn clear_widths() {
        for offset in offsets(9) {
            let mut buffer = [0u8; BUFFER_CAPACITY];
            let mut map = MapType::wrap(&mut buffer[..], offset);

            map.max_length(0xff).unwrap().clear().unwrap();
            assert_eq!(map.format_code(), Ok(0xc1));
            assert_eq!(map.limit(), Ok(offset + 3));

            map.max_length(0x100).unwrap().clear().unwrap();
            assert_eq!(map.format_code(), Ok(0xd1));
            assert_eq!(map.count(), Ok(0));
            assert_eq!(map.limit(), Ok(offset + 9));
        }
    }

    #[test]
    fn pairs() {
        let mut buffer = [0u8; BUFFER_CAPACITY];
        let mut map = MapType::wrap(&mut buffer[..], 0);
        map.max_count(2).unwrap().clear().unwrap();
        let body = map.body_offset().unwrap();
        drop(map);

        let mut key = SymbolType::wrap(&mut buffer[..], body);
        key.set("key").unwrap();
        let next = key.limit().unwrap();
        buffer[next] = 0x41;

        let mut map = MapType::wrap(&mut buffer[..], 0);
        map.set_limit(2, next + 1).unwrap();
        drop(map);

        let map = MapType::wrap(&buffer[..], 0);
        let entries: Vec<_> = map
            .iter()
            .unwrap()
            .map(|pair| {
                let (k, v) = pair.unwrap();
                (k.kind().unwrap(), v.kind().unwrap(), v.offset())
            })
            .collect();
        assert_eq!(entries, vec![(Kind::Symbol, Kind::Boolean, next)]);
    }

    #[test]
    fn odd_count_is_rejected() {
        let buffer = [0xc1u8, 0x02, 0x01, 0x40];
        let map = MapType::wrap(&buffer[..], 0);
        assert_eq!(map.iter().err(), Some(Error::InvalidLength));
    }

    #[test]
    fn not_decode() {
        let buffer = [0xc0u8, 0x01, 0x00];
        let map = MapType::wrap(&buffer[..], 0);
        assert_eq!(map.limit(), Err(Error::InvalidFormatCode(0xc0)));
    }
}
