//! Length and count prefixes shared by variable width and compound types
//!
//! The format code selects one of two widths. With the narrow code the length (and
//! count) fields take one byte each, with the wide code four bytes each.
//!
//! ```text
//! +------+--------+-------+------
//! | code | length | count | body
//! +------+--------+-------+------
//!        ^        ^       ^
//!        |        |       limit()
//!        |        length_limit()
//!        offset + 1
//! ```
//!
//! Variable width types only carry the length field.

use std::convert::TryFrom;

use crate::{
    buffer::{Flyweight, Watcher},
    error::Error,
    fixed_width::{is_narrow, FORMAT_CODE_WIDTH, NARROW_WIDTH, WIDE_WIDTH},
    format_code::EncodingCodes,
};

#[derive(Debug, Clone, Copy)]
pub(crate) struct Header {
    narrow: EncodingCodes,
    wide: EncodingCodes,
}

impl Header {
    pub(crate) const fn new(narrow: EncodingCodes, wide: EncodingCodes) -> Self {
        Self { narrow, wide }
    }

    /// Width in bytes of a single length or count field
    pub(crate) fn width<B, W>(&self, fw: &Flyweight<B, W>) -> Result<usize, Error>
    where
        B: AsRef<[u8]>,
    {
        let code = fw.format_code()?;
        if code == self.narrow as u8 {
            Ok(NARROW_WIDTH)
        } else if code == self.wide as u8 {
            Ok(WIDE_WIDTH)
        } else {
            Err(Error::InvalidFormatCode(code))
        }
    }

    pub(crate) fn length<B, W>(&self, fw: &Flyweight<B, W>) -> Result<u32, Error>
    where
        B: AsRef<[u8]>,
    {
        let width = self.width(fw)?;
        read_field(fw, fw.offset() + FORMAT_CODE_WIDTH, width)
    }

    pub(crate) fn count<B, W>(&self, fw: &Flyweight<B, W>) -> Result<u32, Error>
    where
        B: AsRef<[u8]>,
    {
        let width = self.width(fw)?;
        read_field(fw, fw.offset() + FORMAT_CODE_WIDTH + width, width)
    }

    /// Index right after the length field
    pub(crate) fn length_limit<B, W>(&self, fw: &Flyweight<B, W>) -> Result<usize, Error>
    where
        B: AsRef<[u8]>,
    {
        Ok(fw.offset() + FORMAT_CODE_WIDTH + self.width(fw)?)
    }

    /// Index right after the count field
    pub(crate) fn limit<B, W>(&self, fw: &Flyweight<B, W>) -> Result<usize, Error>
    where
        B: AsRef<[u8]>,
    {
        Ok(fw.offset() + FORMAT_CODE_WIDTH + 2 * self.width(fw)?)
    }
}

impl Header {
    /// Selects the width able to hold `value` by writing the matching format code
    pub(crate) fn max<B, W>(&self, fw: &mut Flyweight<B, W>, value: u32) -> Result<(), Error>
    where
        B: AsRef<[u8]> + AsMut<[u8]>,
        W: Watcher,
    {
        if is_narrow(value as u64) {
            fw.put_code(self.narrow)
        } else {
            fw.put_code(self.wide)
        }
    }

    /// Fails unless `values` fit in fields of `width` bytes and `fields` such fields
    /// after the format code fit in the buffer
    fn check_fields<B, W>(
        &self,
        fw: &Flyweight<B, W>,
        width: usize,
        fields: usize,
        values: &[u32],
    ) -> Result<(), Error>
    where
        B: AsRef<[u8]>,
    {
        if width == NARROW_WIDTH {
            if let Some(&value) = values.iter().find(|&&value| !is_narrow(value as u64)) {
                return Err(Error::UnsupportedMagnitude(value));
            }
        }
        fw.check_bounds(fw.offset(), FORMAT_CODE_WIDTH + fields * width)
    }

    /// Writes the length prefix and `bytes` behind it, or nothing if they do not fit
    pub(crate) fn put_payload<B, W>(
        &self,
        fw: &mut Flyweight<B, W>,
        bytes: &[u8],
    ) -> Result<(), Error>
    where
        B: AsRef<[u8]> + AsMut<[u8]>,
        W: Watcher,
    {
        let len = u32::try_from(bytes.len()).map_err(|_| Error::InvalidLength)?;
        let width = match is_narrow(len as u64) {
            true => NARROW_WIDTH,
            false => WIDE_WIDTH,
        };
        fw.check_bounds(fw.offset(), FORMAT_CODE_WIDTH + width + bytes.len())?;
        self.max(fw, len)?;
        self.set_length(fw, len)?;
        let start = self.length_limit(fw)?;
        fw.write(start, bytes)
    }

    pub(crate) fn set_length<B, W>(&self, fw: &mut Flyweight<B, W>, value: u32) -> Result<(), Error>
    where
        B: AsRef<[u8]> + AsMut<[u8]>,
        W: Watcher,
    {
        let width = self.width(fw)?;
        let index = fw.offset() + FORMAT_CODE_WIDTH;
        write_field(fw, index, width, value)
    }

    pub(crate) fn set_count<B, W>(&self, fw: &mut Flyweight<B, W>, value: u32) -> Result<(), Error>
    where
        B: AsRef<[u8]> + AsMut<[u8]>,
        W: Watcher,
    {
        let width = self.width(fw)?;
        let index = fw.offset() + FORMAT_CODE_WIDTH + width;
        write_field(fw, index, width, value)
    }
}

/// Operations shared by list, map and array
impl Header {
    /// Index right after the body
    pub(crate) fn end<B, W>(&self, fw: &Flyweight<B, W>) -> Result<usize, Error>
    where
        B: AsRef<[u8]>,
    {
        Ok(self.length_limit(fw)? + self.length(fw)? as usize)
    }

    /// Writes a zero count and a length covering the count field plus `body` bytes
    ///
    /// A narrow header is selected if the view does not hold one of the header codes yet.
    pub(crate) fn clear<B, W>(&self, fw: &mut Flyweight<B, W>, body: usize) -> Result<(), Error>
    where
        B: AsRef<[u8]> + AsMut<[u8]>,
        W: Watcher,
    {
        let present = match self.width(fw) {
            Ok(width) => Some(width),
            Err(Error::InvalidFormatCode(_)) => None,
            Err(err) => return Err(err),
        };
        let width = present.unwrap_or(NARROW_WIDTH);
        let length = u32::try_from(width + body).map_err(|_| Error::InvalidLength)?;
        self.check_fields(fw, width, 2, &[length, 0])?;
        if present.is_none() {
            self.max(fw, 0)?;
        }
        self.set_count(fw, 0)?;
        self.set_length(fw, length)
    }

    /// Records `count` elements ending right before `limit`
    pub(crate) fn finish<B, W>(
        &self,
        fw: &mut Flyweight<B, W>,
        count: u32,
        limit: usize,
    ) -> Result<(), Error>
    where
        B: AsRef<[u8]> + AsMut<[u8]>,
        W: Watcher,
    {
        let length = limit
            .checked_sub(self.length_limit(fw)?)
            .and_then(|len| u32::try_from(len).ok())
            .ok_or(Error::InvalidLength)?;
        self.check_fields(fw, self.width(fw)?, 2, &[length, count])?;
        self.set_count(fw, count)?;
        self.set_length(fw, length)
    }
}

/// Copies the encoded value `[start, end)` of `src` to the start of `dst`
pub(crate) fn copy_encoded<B, W, B2, W2>(
    dst: &mut Flyweight<B, W>,
    src: &Flyweight<B2, W2>,
    end: usize,
) -> Result<(), Error>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
    W: Watcher,
    B2: AsRef<[u8]>,
{
    let start = src.offset();
    let len = end.checked_sub(start).ok_or(Error::InvalidLength)?;
    let bytes = src.slice(start, len)?;
    let offset = dst.offset();
    dst.write(offset, bytes)
}

fn read_field<B, W>(fw: &Flyweight<B, W>, index: usize, width: usize) -> Result<u32, Error>
where
    B: AsRef<[u8]>,
{
    match width {
        NARROW_WIDTH => fw.uint8_get(index).map(u32::from),
        _ => fw.uint32_get(index),
    }
}

fn write_field<B, W>(
    fw: &mut Flyweight<B, W>,
    index: usize,
    width: usize,
    value: u32,
) -> Result<(), Error>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
    W: Watcher,
{
    match width {
        NARROW_WIDTH if is_narrow(value as u64) => fw.uint8_put(index, value as u8),
        NARROW_WIDTH => Err(Error::UnsupportedMagnitude(value)),
        _ => fw.uint32_put(index, value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST: Header = Header::new(EncodingCodes::List8, EncodingCodes::List32);

    #[test]
    fn narrow_layout() {
        let mut buf = [0u8; 8];
        let mut fw = Flyweight::wrap(&mut buf[..], 1);
        LIST.max(&mut fw, 0xff).unwrap();
        LIST.set_length(&mut fw, 3).unwrap();
        LIST.set_count(&mut fw, 2).unwrap();

        assert_eq!(LIST.width(&fw), Ok(1));
        assert_eq!(LIST.length(&fw), Ok(3));
        assert_eq!(LIST.count(&fw), Ok(2));
        assert_eq!(LIST.length_limit(&fw), Ok(3));
        assert_eq!(LIST.limit(&fw), Ok(4));
        drop(fw);
        assert_eq!(&buf[1..4], &[0xc0, 0x03, 0x02]);
    }

    #[test]
    fn wide_layout() {
        let mut buf = [0u8; 16];
        let mut fw = Flyweight::wrap(&mut buf[..], 0);
        LIST.max(&mut fw, 0x100).unwrap();
        LIST.set_length(&mut fw, 0x1234).unwrap();
        LIST.set_count(&mut fw, 0x100).unwrap();

        assert_eq!(LIST.width(&fw), Ok(4));
        assert_eq!(LIST.length(&fw), Ok(0x1234));
        assert_eq!(LIST.count(&fw), Ok(0x100));
        assert_eq!(LIST.length_limit(&fw), Ok(5));
        assert_eq!(LIST.limit(&fw), Ok(9));
        drop(fw);
        assert_eq!(&buf[..9], &[0xd0, 0, 0, 0x12, 0x34, 0, 0, 1, 0]);
    }

    #[test]
    fn narrow_rejects_large_values() {
        let mut buf = [0u8; 8];
        let mut fw = Flyweight::wrap(&mut buf[..], 0);
        LIST.max(&mut fw, 0).unwrap();
        assert_eq!(
            LIST.set_length(&mut fw, 0x100),
            Err(Error::UnsupportedMagnitude(0x100))
        );
        assert_eq!(
            LIST.set_count(&mut fw, 0x1ff),
            Err(Error::UnsupportedMagnitude(0x1ff))
        );
    }

    #[test]
    fn clear_keeps_selected_width() {
        let mut buf = [0u8; 16];
        let mut fw = Flyweight::wrap(&mut buf[..], 0);
        LIST.max(&mut fw, 0x100).unwrap();
        LIST.clear(&mut fw, 0).unwrap();
        assert_eq!(LIST.count(&fw), Ok(0));
        assert_eq!(LIST.length(&fw), Ok(4));
        assert_eq!(LIST.end(&fw), Ok(9));
    }

    #[test]
    fn clear_selects_narrow_on_empty_buffer() {
        let mut buf = [0u8; 4];
        let mut fw = Flyweight::wrap(&mut buf[..], 0);
        LIST.clear(&mut fw, 0).unwrap();
        drop(fw);
        assert_eq!(&buf[..3], &[0xc0, 0x01, 0x00]);
    }

    #[test]
    fn finish_records_count_and_length() {
        let mut buf = [0u8; 16];
        let mut fw = Flyweight::wrap(&mut buf[..], 2);
        LIST.max(&mut fw, 0).unwrap();
        LIST.finish(&mut fw, 3, 10).unwrap();
        assert_eq!(LIST.count(&fw), Ok(3));
        assert_eq!(LIST.length(&fw), Ok(6));
        assert_eq!(LIST.end(&fw), Ok(10));
        assert_eq!(LIST.finish(&mut fw, 0, 3), Err(Error::InvalidLength));
    }

    #[test]
    fn failed_finish_writes_nothing() {
        let mut buf = [0u8; 8];
        let mut fw = Flyweight::wrap(&mut buf[..], 0);
        LIST.clear(&mut fw, 0).unwrap();
        assert_eq!(
            LIST.finish(&mut fw, 7, 300),
            Err(Error::UnsupportedMagnitude(298))
        );
        assert_eq!(
            LIST.finish(&mut fw, 0x100, 4),
            Err(Error::UnsupportedMagnitude(0x100))
        );
        drop(fw);
        assert_eq!(&buf[..3], &[0xc0, 0x01, 0x00]);
    }

    #[test]
    fn clear_past_end_writes_nothing() {
        let mut buf = [0x40u8, 0];
        let mut fw = Flyweight::wrap(&mut buf[..], 0);
        assert_eq!(LIST.clear(&mut fw, 0), Err(Error::out_of_bounds(0, 3)));
        drop(fw);
        assert_eq!(buf, [0x40, 0]);
    }

    #[test]
    fn payload_past_end_writes_nothing() {
        const STRING: Header = Header::new(EncodingCodes::Str8, EncodingCodes::Str32);
        let mut buf = [0x40u8, 0, 0, 0];
        let mut fw = Flyweight::wrap(&mut buf[..], 0);
        assert_eq!(
            STRING.put_payload(&mut fw, b"four"),
            Err(Error::out_of_bounds(0, 6))
        );
        drop(fw);
        assert_eq!(buf, [0x40, 0, 0, 0]);
    }

    #[test]
    fn foreign_code_is_rejected() {
        let buf = [0xc1u8, 0, 0];
        let fw = Flyweight::wrap(&buf[..], 0);
        assert_eq!(LIST.width(&fw), Err(Error::InvalidFormatCode(0xc1)));
        assert_eq!(LIST.limit(&fw), Err(Error::InvalidFormatCode(0xc1)));
    }
}
