//! 8-bit to 16-bit PCM widening

/// Scale applied to each signed 8-bit sample.
///
/// This is a plain multiply, so the low byte of every output sample is zero.
pub const WIDEN_SCALE: i16 = 256;

/// Widen one raw byte to a 16-bit sample.
///
/// The byte is read as two's complement, so 0x80 maps to -32768 and 0x7F
/// to 32512.
#[inline]
pub fn widen_sample(byte: u8) -> i16 {
    (byte as i8) as i16 * WIDEN_SCALE
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0x00, 0; "zero")]
    #[test_case(0x01, 256; "smallest positive")]
    #[test_case(0x7F, 32512; "max positive")]
    #[test_case(0x80, -32768; "min negative")]
    #[test_case(0xFF, -256; "minus one")]
    fn test_widen_sample(byte: u8, expected: i16) {
        assert_eq!(widen_sample(byte), expected);
    }

    #[test]
    fn test_low_byte_is_always_zero() {
        for byte in 0..=u8::MAX {
            assert_eq!(widen_sample(byte) & 0xFF, 0, "byte {:#04x}", byte);
        }
    }

    #[test]
    fn test_sign_symmetry() {
        assert_eq!(widen_sample(0x10), 4096);
        assert_eq!(widen_sample(0xF0), -4096);
    }
}
