//! A minimal streaming JSON reader and writer.
//!
//! [`Lexer`] consumes one input byte at a time and emits small structural
//! events ([`ReadResult`]) without buffering input beyond a fixed-size
//! nesting stack: no allocation after construction, no look-ahead, no
//! value trees. [`Writer`] transforms the same events back into
//! well-formed JSON text fragments annotated with whitespace-prefix hints,
//! so the caller controls the actual indentation and line breaks.
//!
//! # Examples
//!
//! ```
//! use jsonecho::{Lexer, Writer};
//!
//! let mut lexer = Lexer::new(64).unwrap();
//! let mut writer = Writer::new();
//!
//! let mut text = Vec::new();
//! for byte in br#""hi\n""#.iter().copied().map(Some).chain([None]) {
//!     let result = lexer.read_byte(byte);
//!     assert!(!result.status.is_error());
//!     let out = writer.write(result, lexer.bytes());
//!     text.extend_from_slice(out.bytes);
//! }
//! assert_eq!(text, br#""hi\n""#);
//! ```

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod event;
mod lexer;
mod status;
mod writer;

pub use event::{Event, Flags, ReadResult, ValueKind};
pub use lexer::Lexer;
pub use status::Status;
pub use writer::{TextOutput, TextPrefix, Writer};

#[cfg(test)]
mod tests;
