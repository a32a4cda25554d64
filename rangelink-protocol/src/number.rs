//! Decimal conversion for received lines
//!
//! Lines are converted with C `atol` rules: optional leading whitespace,
//! an optional sign, then as many digits as follow. Anything after the
//! digits is ignored and a line without digits is worth zero.

/// Parse the leading decimal integer of `bytes`
///
/// Never fails. Values beyond the `i32` range saturate.
///
/// ```
/// use rangelink_protocol::parse_int;
///
/// assert_eq!(parse_int(b"007"), 7);
/// assert_eq!(parse_int(b"12a"), 12);
/// assert_eq!(parse_int(b"abc"), 0);
/// ```
pub fn parse_int(bytes: &[u8]) -> i32 {
    let mut parser = IntParser::new();
    for &byte in bytes {
        parser.push(byte);
    }
    parser.value()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Skipping whitespace before the number
    Leading,
    /// After the sign or the first digit
    Digits,
    /// A non-digit ended the number; the rest is ignored
    Done,
}

/// Byte-at-a-time form of [`parse_int`]
///
/// Keeps only the running value, so arbitrarily long input (padding,
/// leading zeros) converts the same as it would in one slice.
#[derive(Debug, Clone)]
pub struct IntParser {
    phase: Phase,
    negative: bool,
    // Accumulated as a negative number so i32::MIN is reachable
    value: i32,
}

impl Default for IntParser {
    fn default() -> Self {
        Self::new()
    }
}

impl IntParser {
    /// Create a parser that has seen no input
    pub const fn new() -> Self {
        Self {
            phase: Phase::Leading,
            negative: false,
            value: 0,
        }
    }

    /// Forget all input
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Consume one byte of the line
    pub fn push(&mut self, byte: u8) {
        match self.phase {
            Phase::Leading => match byte {
                b if is_space(b) => {}
                b'-' => {
                    self.negative = true;
                    self.phase = Phase::Digits;
                }
                b'+' => self.phase = Phase::Digits,
                b if b.is_ascii_digit() => {
                    self.accumulate(b);
                    self.phase = Phase::Digits;
                }
                _ => self.phase = Phase::Done,
            },
            Phase::Digits => {
                if byte.is_ascii_digit() {
                    self.accumulate(byte);
                } else {
                    self.phase = Phase::Done;
                }
            }
            Phase::Done => {}
        }
    }

    /// Value of the input seen so far
    pub fn value(&self) -> i32 {
        if self.negative {
            self.value
        } else {
            self.value.saturating_neg()
        }
    }

    fn accumulate(&mut self, digit: u8) {
        let digit = (digit - b'0') as i32;
        self.value = self.value.saturating_mul(10).saturating_sub(digit);
    }
}

/// Whitespace skipped before the number (`isspace` minus the terminators)
fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | 0x0B | 0x0C)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_plain_digits() {
        assert_eq!(parse_int(b"123"), 123);
        assert_eq!(parse_int(b"0"), 0);
    }

    #[test]
    fn test_leading_zeros_are_normalized() {
        assert_eq!(parse_int(b"007"), 7);
        assert_eq!(parse_int(b"0000"), 0);
    }

    #[test]
    fn test_non_numeric_is_zero() {
        assert_eq!(parse_int(b"abc"), 0);
        assert_eq!(parse_int(b""), 0);
        assert_eq!(parse_int(b"-"), 0);
        assert_eq!(parse_int(b"+"), 0);
        assert_eq!(parse_int(b"cm 12"), 0);
    }

    #[test]
    fn test_trailing_garbage_is_ignored() {
        assert_eq!(parse_int(b"12a"), 12);
        assert_eq!(parse_int(b"45 cm"), 45);
        assert_eq!(parse_int(b"3.9"), 3);
    }

    #[test]
    fn test_sign() {
        assert_eq!(parse_int(b"-5"), -5);
        assert_eq!(parse_int(b"+42"), 42);
        assert_eq!(parse_int(b"--5"), 0);
        assert_eq!(parse_int(b"+-5"), 0);
    }

    #[test]
    fn test_leading_whitespace_is_skipped() {
        assert_eq!(parse_int(b"  17"), 17);
        assert_eq!(parse_int(b"\t-8"), -8);
        assert_eq!(parse_int(b" - 8"), 0);
    }

    #[test]
    fn test_saturates_out_of_range() {
        assert_eq!(parse_int(b"2147483647"), i32::MAX);
        assert_eq!(parse_int(b"-2147483648"), i32::MIN);
        assert_eq!(parse_int(b"99999999999999"), i32::MAX);
        assert_eq!(parse_int(b"-99999999999999"), i32::MIN);
    }

    #[test]
    fn test_parser_reset() {
        let mut parser = IntParser::new();
        for &byte in b"-31x" {
            parser.push(byte);
        }
        assert_eq!(parser.value(), -31);

        parser.reset();
        parser.push(b'4');
        assert_eq!(parser.value(), 4);
    }

    #[test]
    fn test_long_padding_and_zeros() {
        let mut line = std::vec![b' '; 200];
        line.extend(std::iter::repeat(b'0').take(200));
        line.extend_from_slice(b"15");
        assert_eq!(parse_int(&line), 15);
    }

    proptest! {
        #[test]
        fn prop_matches_std_parse_for_digit_strings(s in "[0-9]{1,9}") {
            let expected: i32 = s.parse().unwrap();
            prop_assert_eq!(parse_int(s.as_bytes()), expected);
        }

        #[test]
        fn prop_stops_at_first_non_digit(n in 0i32..=i32::MAX, tail in "[a-z .]{0,8}") {
            let line = format!("{}{}", n, tail);
            prop_assert_eq!(parse_int(line.as_bytes()), n);
        }

        #[test]
        fn prop_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
            let _ = parse_int(&bytes);
        }
    }
}
