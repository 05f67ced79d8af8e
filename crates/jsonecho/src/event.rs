//! Events and the per-byte result record emitted by the lexer.

use core::fmt;
use core::ops::{BitOr, BitOrAssign};

use crate::status::Status;

/// Kind of JSON value.
///
/// A JSON value is an object, array, string, number, or one of the three
/// literals `false`, `null`, and `true`. Discriminants start at one so that
/// zero stays reserved for "no value", which surfaces as `None` in
/// [`ReadResult::kind`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ValueKind {
    /// Object container.
    Object = 1,
    /// Array container.
    Array,
    /// String value.
    String,
    /// Number value.
    Number,
    /// Literal value (`false`, `null`, or `true`).
    Literal,
}

/// Flags describing an event and the value it belongs to.
///
/// The first four flags classify a start event's role inside its parent
/// container; [`Flags::HAS_BYTES`] indicates that the event carries bytes
/// in the lexer's byte buffer.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags(u8);

impl Flags {
    /// Object member name.
    pub const MEMBER_NAME: Flags = Flags(1 << 0);
    /// Object member value.
    pub const MEMBER_VALUE: Flags = Flags(1 << 1);
    /// Array element.
    pub const ELEMENT: Flags = Flags(1 << 2);
    /// First element or member in a container, or the top-level value.
    pub const FIRST: Flags = Flags(1 << 3);
    /// Event has bytes.
    pub const HAS_BYTES: Flags = Flags(1 << 4);

    /// Returns the empty flag set.
    #[must_use]
    pub const fn empty() -> Flags {
        Flags(0)
    }

    /// Returns `true` if no flag is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if every flag in `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(Flags, &str); 5] = [
            (Flags::MEMBER_NAME, "MEMBER_NAME"),
            (Flags::MEMBER_VALUE, "MEMBER_VALUE"),
            (Flags::ELEMENT, "ELEMENT"),
            (Flags::FIRST, "FIRST"),
            (Flags::HAS_BYTES, "HAS_BYTES"),
        ];

        if self.is_empty() {
            return f.write_str("(empty)");
        }

        let mut first = true;
        for (flag, name) in NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// A structural observation produced by reading one byte.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Ignored input.
    ///
    /// Many bytes, like whitespace between tokens, produce no output.
    Nothing,
    /// The start of any value.
    ///
    /// Carries the first character byte for numbers and literals.
    Start,
    /// The end of any value.
    ///
    /// Carries the closing byte for strings, objects, arrays, and
    /// literals; number ends carry nothing because the boundary byte
    /// belongs to the following token.
    End,
    /// The end of both a value and its container.
    ///
    /// A single `]` or `}` can end both the current number and the array
    /// or object it is in. The result's kind is the container's kind; the
    /// inner kind is implicit.
    DoubleEnd,
    /// Character bytes for a string, number, or literal body.
    ///
    /// Each event represents one character, given as up to four bytes of
    /// UTF-8.
    Bytes,
}

/// Result of reading one byte of input.
///
/// Describes both the status of the read and the event produced, if any.
/// When [`Flags::HAS_BYTES`] is set, the event's bytes are available from
/// [`crate::Lexer::bytes`] until the next call.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadResult {
    /// Status of the operation.
    pub status: Status,
    /// Event produced.
    pub event: Event,
    /// Value kind for start and end events.
    pub kind: Option<ValueKind>,
    /// Flags describing the event.
    pub flags: Flags,
}

impl ReadResult {
    pub(crate) const fn nothing(status: Status) -> ReadResult {
        ReadResult {
            status,
            event: Event::Nothing,
            kind: None,
            flags: Flags::empty(),
        }
    }
}
