//! Widths of types

/// Width of format code
pub(crate) const FORMAT_CODE_WIDTH: usize = 1;

pub(crate) const BOOLEAN_WIDTH: usize = 1;
pub(crate) const UBYTE_WIDTH: usize = 1;
pub(crate) const USHORT_WIDTH: usize = 2;
pub(crate) const UINT_WIDTH: usize = 4;
pub(crate) const ULONG_WIDTH: usize = 8;
pub(crate) const SMALL_WIDTH: usize = 1;
pub(crate) const BYTE_WIDTH: usize = 1;
pub(crate) const SHORT_WIDTH: usize = 2;
pub(crate) const INT_WIDTH: usize = 4;
pub(crate) const LONG_WIDTH: usize = 8;
pub(crate) const FLOAT_WIDTH: usize = 4;
pub(crate) const DOUBLE_WIDTH: usize = 8;
pub(crate) const DECIMAL32_WIDTH: usize = 4;
pub(crate) const DECIMAL64_WIDTH: usize = 8;
pub(crate) const DECIMAL128_WIDTH: usize = 16;
pub(crate) const CHAR_WIDTH: usize = 4;
pub(crate) const TIMESTAMP_WIDTH: usize = 8;
pub(crate) const UUID_WIDTH: usize = 16;

/// Width of the length (and count) fields of the narrow encodings
pub(crate) const NARROW_WIDTH: usize = 1;
/// Width of the length (and count) fields of the wide encodings
pub(crate) const WIDE_WIDTH: usize = 4;

/// Returns the value with only its highest set bit kept, or zero
pub(crate) fn highest_one_bit(value: u64) -> u64 {
    match value {
        0 => 0,
        v => 1 << (63 - v.leading_zeros()),
    }
}

/// Whether a magnitude fits the one byte wide encodings
pub(crate) fn is_narrow(value: u64) -> bool {
    matches!(
        highest_one_bit(value),
        0 | 1 | 2 | 4 | 8 | 16 | 32 | 64 | 128
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highest_one_bit_of_boundaries() {
        assert_eq!(highest_one_bit(0), 0);
        assert_eq!(highest_one_bit(1), 1);
        assert_eq!(highest_one_bit(3), 2);
        assert_eq!(highest_one_bit(255), 128);
        assert_eq!(highest_one_bit(256), 256);
        assert_eq!(highest_one_bit(u64::MAX), 1 << 63);
    }

    #[test]
    fn narrow_up_to_255() {
        assert!(is_narrow(0));
        assert!(is_narrow(1));
        assert!(is_narrow(0xff));
        assert!(!is_narrow(0x100));
        assert!(!is_narrow(12345678));
    }
}
