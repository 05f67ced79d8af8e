//! The event-to-text JSON writer.
//!
//! The writer transforms [`ReadResult`]s back into fragments of
//! syntactically correct JSON text. Each fragment comes with a
//! [`TextPrefix`] hint so the caller decides the actual whitespace: in
//! pretty output a container prefix becomes a newline plus indentation,
//! in terse output it becomes nothing. The writer itself holds only the
//! container depth, the kind of the open leaf value, and a small scratch
//! buffer; it never fails.

use crate::event::{Event, Flags, ReadResult, ValueKind};
use crate::status::Status;

/// A prefix of some text output.
///
/// A prefix stands for a delimiter and optional whitespace that the caller
/// materializes before the fragment bytes. This keeps indentation out of
/// the writer, so output never needs a contiguous buffer larger than one
/// token.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextPrefix {
    /// No prefix.
    None,
    /// Space before the first object member.
    ObjectStart,
    /// Space before the first array element.
    ArrayStart,
    /// Space before an object's closing brace.
    ObjectEnd,
    /// Space before an array's closing bracket.
    ArrayEnd,
    /// Colon before a member value.
    MemberColon,
    /// Comma before a following member name.
    MemberComma,
    /// Comma before a following array element.
    ArrayComma,
}

/// A fragment of text output produced by writing one result.
#[derive(Debug)]
pub struct TextOutput<'a> {
    /// Status of the write operation.
    pub status: Status,
    /// Indent level (nested container count).
    pub indent: u32,
    /// UTF-8 bytes, valid until the next call.
    pub bytes: &'a [u8],
    /// Text prefix, materialized by the caller before the bytes.
    pub prefix: TextPrefix,
}

/// An output fragment before it is tied to the writer's buffer.
struct Emit {
    prefix: TextPrefix,
    indent: u32,
    len: usize,
}

impl Emit {
    const NOTHING: Emit = Emit {
        prefix: TextPrefix::None,
        indent: 0,
        len: 0,
    };
}

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// JSON writer state.
#[derive(Debug, Default)]
pub struct Writer {
    /// Container depth.
    depth: u32,
    /// Kind of the currently open leaf value.
    top_kind: Option<ValueKind>,
    /// Scratch buffer for the last written fragment.
    buf: [u8; 8],
}

impl Writer {
    /// Creates a writer at the document level.
    #[must_use]
    pub fn new() -> Writer {
        Writer::default()
    }

    /// Writes one lexed result as a JSON text fragment.
    ///
    /// `bytes` is the byte view accompanying the result, as returned by
    /// [`crate::Lexer::bytes`]. The output borrows the writer's buffer and
    /// is valid until the next call.
    pub fn write(&mut self, result: ReadResult, bytes: &[u8]) -> TextOutput<'_> {
        let emit = match result.event {
            Event::Nothing => Emit::NOTHING,
            Event::Start => match result.kind {
                Some(kind) => {
                    let head = head_byte(result.flags, bytes);
                    self.on_start(kind, result.flags, head)
                }
                None => Emit::NOTHING,
            },
            Event::End => match result.kind {
                Some(kind) => {
                    let tail = head_byte(result.flags, bytes);
                    self.on_end(kind, tail)
                }
                None => Emit::NOTHING,
            },
            Event::DoubleEnd => match result.kind {
                Some(kind) => {
                    // The inner number or literal first, then its container.
                    if let Some(inner) = self.top_kind {
                        let _ = self.on_end(inner, 0);
                    }
                    self.on_end(kind, 0)
                }
                None => Emit::NOTHING,
            },
            Event::Bytes => {
                if let [byte] = bytes {
                    self.on_byte(*byte)
                } else {
                    // A decoded escape: pass the whole character through.
                    let len = bytes.len().min(self.buf.len());
                    self.buf[..len].copy_from_slice(&bytes[..len]);
                    Emit {
                        prefix: TextPrefix::None,
                        indent: 0,
                        len,
                    }
                }
            }
        };

        TextOutput {
            status: Status::Success,
            indent: emit.indent,
            bytes: &self.buf[..emit.len],
            prefix: emit.prefix,
        }
    }

    /// Called when a value is started.
    fn on_start(&mut self, kind: ValueKind, flags: Flags, head: u8) -> Emit {
        self.top_kind = Some(kind);

        let first = flags.contains(Flags::FIRST);
        let prefix = if flags.contains(Flags::MEMBER_VALUE) {
            TextPrefix::MemberColon
        } else if flags.contains(Flags::MEMBER_NAME) {
            if first {
                TextPrefix::ObjectStart
            } else {
                TextPrefix::MemberComma
            }
        } else if flags.contains(Flags::ELEMENT) {
            if first {
                TextPrefix::ArrayStart
            } else {
                TextPrefix::ArrayComma
            }
        } else {
            TextPrefix::None
        };

        match kind {
            ValueKind::Object => {
                let indent = self.depth;
                self.depth += 1;
                self.sep(prefix, indent, b'{')
            }
            ValueKind::Array => {
                let indent = self.depth;
                self.depth += 1;
                self.sep(prefix, indent, b'[')
            }
            ValueKind::String => self.sep(prefix, self.depth, b'"'),
            ValueKind::Number | ValueKind::Literal => self.sep(prefix, self.depth, head),
        }
    }

    /// Called when a value is finished.
    fn on_end(&mut self, kind: ValueKind, tail: u8) -> Emit {
        match kind {
            ValueKind::Object => {
                self.depth = self.depth.saturating_sub(1);
                self.sep(TextPrefix::ObjectEnd, self.depth, b'}')
            }
            ValueKind::Array => {
                self.depth = self.depth.saturating_sub(1);
                self.sep(TextPrefix::ArrayEnd, self.depth, b']')
            }
            ValueKind::String => self.byte(b'"'),
            ValueKind::Number | ValueKind::Literal => {
                if tail == 0 {
                    Emit::NOTHING
                } else {
                    self.byte(tail)
                }
            }
        }
    }

    /// Called on character bytes in a value body.
    fn on_byte(&mut self, byte: u8) -> Emit {
        if self.top_kind != Some(ValueKind::String) {
            // Number and literal characters pass through directly.
            return self.byte(byte);
        }

        match byte {
            b'"' | b'\\' => self.pair(b'\\', byte),
            0x08 => self.pair(b'\\', b'b'),
            0x0C => self.pair(b'\\', b'f'),
            b'\n' => self.pair(b'\\', b'n'),
            b'\r' => self.pair(b'\\', b'r'),
            b'\t' => self.pair(b'\\', b't'),
            byte if byte >= 0x20 => self.byte(byte),
            byte => {
                // Generic control character escape
                self.buf[..4].copy_from_slice(b"\\u00");
                self.buf[4] = HEX_DIGITS[usize::from(byte >> 4)];
                self.buf[5] = HEX_DIGITS[usize::from(byte & 0x0F)];
                Emit {
                    prefix: TextPrefix::None,
                    indent: 0,
                    len: 6,
                }
            }
        }
    }

    /// Writes a single byte to the output.
    fn byte(&mut self, byte: u8) -> Emit {
        self.buf[0] = byte;
        Emit {
            prefix: TextPrefix::None,
            indent: 0,
            len: 1,
        }
    }

    /// Writes a prefix hint followed by a byte to the output.
    fn sep(&mut self, prefix: TextPrefix, indent: u32, byte: u8) -> Emit {
        self.buf[0] = byte;
        Emit {
            prefix,
            indent,
            len: 1,
        }
    }

    /// Writes two adjacent bytes to the output.
    fn pair(&mut self, a: u8, b: u8) -> Emit {
        self.buf[0] = a;
        self.buf[1] = b;
        Emit {
            prefix: TextPrefix::None,
            indent: 0,
            len: 2,
        }
    }
}

fn head_byte(flags: Flags, bytes: &[u8]) -> u8 {
    if flags.contains(Flags::HAS_BYTES) {
        bytes.first().copied().unwrap_or(0)
    } else {
        0
    }
}
