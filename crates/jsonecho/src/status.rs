//! Status codes returned in-band with every read and write result.

use core::fmt;

/// Outcome of a read or write operation.
///
/// The numeric ordering is part of the contract: every code above
/// [`Status::Failure`] is a diagnostic that callers should report, while
/// `Success` and `Failure` are quiet completions. [`Status::Retry`] is an
/// internal re-dispatch request that [`crate::Lexer::read_byte`] always
/// resolves before returning.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Status {
    /// Success.
    Success,
    /// Non-fatal failure, the quiet end of input at the document level.
    Failure,
    /// Operation not completed, input byte must be dispatched again.
    Retry,
    /// Unexpected end of input.
    NoData,
    /// Stack overflow.
    Overflow,
    /// Stack underflow.
    Underflow,
    /// Failed write, reserved for the output sink layered on the writer.
    BadWrite,
    /// Expected `:`.
    ExpectedColon,
    /// Expected `,`.
    ExpectedComma,
    /// Expected a UTF-8 continuation byte.
    ExpectedContinuation,
    /// Expected `.`.
    ExpectedDecimal,
    /// Expected a digit.
    ExpectedDigit,
    /// Expected `+`, `-`, or a digit.
    ExpectedExponent,
    /// Expected a hexadecimal digit.
    ExpectedHex,
    /// Expected `false`, `null`, or `true`.
    ExpectedLiteral,
    /// Expected a printable character.
    ExpectedPrintable,
    /// Expected `"`.
    ExpectedQuote,
    /// Expected a string escape.
    ExpectedStringEscape,
    /// Expected a UTF-16 high surrogate escape.
    ExpectedUtf16Hi,
    /// Expected a UTF-16 low surrogate escape.
    ExpectedUtf16Lo,
    /// Expected valid UTF-8 bytes.
    ExpectedUtf8,
    /// Expected a value.
    ExpectedValue,
}

impl Status {
    /// Returns a string describing this status code.
    ///
    /// The string is a static constant, in English, capitalized without a
    /// trailing period.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Status::Success => "Success",
            Status::Failure => "Non-fatal failure",
            Status::Retry => "Reached end of value",
            Status::NoData => "Unexpected end of input",
            Status::Overflow => "Stack overflow",
            Status::Underflow => "Stack underflow",
            Status::BadWrite => "Failed write",
            Status::ExpectedColon => "Expected ':'",
            Status::ExpectedComma => "Expected ','",
            Status::ExpectedContinuation => "Expected continuation byte",
            Status::ExpectedDecimal => "Expected '.'",
            Status::ExpectedDigit => "Expected digit",
            Status::ExpectedExponent => "Expected '+', '-', or digit",
            Status::ExpectedHex => "Expected 0-9 or A-F or a-f",
            Status::ExpectedLiteral => "Expected false, null, or true",
            Status::ExpectedPrintable => "Expected printable character",
            Status::ExpectedQuote => "Expected '\"'",
            Status::ExpectedStringEscape => "Expected string escape",
            Status::ExpectedUtf16Hi => "Expected high surrogate escape",
            Status::ExpectedUtf16Lo => "Expected low surrogate escape",
            Status::ExpectedUtf8 => "Expected valid UTF-8 byte",
            Status::ExpectedValue => "Expected value",
        }
    }

    /// Returns `true` for any code above [`Status::Failure`].
    #[must_use]
    pub const fn is_error(self) -> bool {
        self as u8 > Status::Failure as u8
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl core::error::Error for Status {}

#[cfg(test)]
mod tests {
    use super::Status;

    #[test]
    fn messages() {
        assert_eq!(Status::Success.message(), "Success");
        assert_eq!(Status::Overflow.message(), "Stack overflow");
        assert_eq!(Status::ExpectedColon.message(), "Expected ':'");
        assert_eq!(Status::ExpectedExponent.message(), "Expected '+', '-', or digit");
        assert_eq!(Status::ExpectedValue.message(), "Expected value");
    }

    #[test]
    fn failure_is_the_error_threshold() {
        assert!(!Status::Success.is_error());
        assert!(!Status::Failure.is_error());
        assert!(Status::Retry.is_error());
        assert!(Status::NoData.is_error());
        assert!(Status::ExpectedValue.is_error());
    }

    #[test]
    fn display_matches_message() {
        use alloc::string::ToString;
        assert_eq!(Status::NoData.to_string(), "Unexpected end of input");
    }
}
