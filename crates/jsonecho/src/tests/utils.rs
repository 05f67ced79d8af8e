//! Shared helpers for driving the lexer and writer over whole documents.

use alloc::vec::Vec;

use crate::{Event, Flags, Lexer, ReadResult, Status, TextPrefix, ValueKind, Writer};

/// One lexed result together with its byte view.
pub type Observation = (ReadResult, Vec<u8>);

/// A compact row for comparing event sequences.
pub type Row = (Event, Option<ValueKind>, Flags, Vec<u8>);

/// Feeds `input` followed by the end-of-input sentinel, one byte at a
/// time, collecting every result up to and including the first
/// non-`Success` status.
pub fn lex(input: &[u8]) -> Vec<Observation> {
    lex_with_depth(input, 64)
}

pub fn lex_with_depth(input: &[u8], max_depth: usize) -> Vec<Observation> {
    let mut lexer = Lexer::new(max_depth).unwrap();
    let mut results = Vec::new();
    for byte in input.iter().copied().map(Some).chain([None]) {
        let r = lexer.read_byte(byte);
        results.push((r, lexer.bytes().to_vec()));
        if r.status != Status::Success {
            break;
        }
    }
    results
}

/// The non-`Nothing` events of a document, in order.
pub fn events(input: &[u8]) -> Vec<Observation> {
    lex(input)
        .into_iter()
        .filter(|(r, _)| r.event != Event::Nothing)
        .collect()
}

/// The events of a document as comparable rows.
pub fn summary(input: &[u8]) -> Vec<Row> {
    events(input)
        .into_iter()
        .map(|(r, bytes)| (r.event, r.kind, r.flags, bytes))
        .collect()
}

/// Builds one expected row.
pub fn row(event: Event, kind: Option<ValueKind>, flags: Flags, bytes: &[u8]) -> Row {
    (event, kind, flags, bytes.to_vec())
}

/// The status the lexer stopped with.
pub fn final_status(input: &[u8]) -> Status {
    lex(input).last().unwrap().0.status
}

/// The last observation of a document.
pub fn final_observation(input: &[u8]) -> Observation {
    lex(input).last().unwrap().clone()
}

/// Materializes a prefix hint the way the pipe tool does.
pub fn write_prefix(out: &mut Vec<u8>, prefix: TextPrefix, indent: u32, terse: bool) {
    match prefix {
        TextPrefix::None => {}
        TextPrefix::ObjectStart
        | TextPrefix::ArrayStart
        | TextPrefix::ObjectEnd
        | TextPrefix::ArrayEnd => {
            if !terse {
                write_newline(out, indent);
            }
        }
        TextPrefix::MemberColon => {
            out.push(b':');
            if !terse {
                out.push(b' ');
            }
        }
        TextPrefix::MemberComma | TextPrefix::ArrayComma => {
            out.push(b',');
            if !terse {
                write_newline(out, indent);
            }
        }
    }
}

fn write_newline(out: &mut Vec<u8>, indent: u32) {
    out.push(b'\n');
    for _ in 0..indent {
        out.extend_from_slice(b"  ");
    }
}

/// Runs the full read-write pipeline over `input` and returns the
/// rendered text, or the first diagnostic status.
pub fn transcribe(input: &[u8], terse: bool) -> Result<Vec<u8>, Status> {
    let mut lexer = Lexer::new(64).unwrap();
    let mut writer = Writer::new();
    let mut out = Vec::new();
    for byte in input.iter().copied().map(Some).chain([None]) {
        let r = lexer.read_byte(byte);
        match r.status {
            Status::Success => {}
            Status::Failure => return Ok(out),
            status => return Err(status),
        }
        let text = writer.write(r, lexer.bytes());
        write_prefix(&mut out, text.prefix, text.indent, terse);
        out.extend_from_slice(text.bytes);
    }
    Ok(out)
}

/// Terse transcription of a document expected to be well formed.
pub fn terse(input: &[u8]) -> Vec<u8> {
    transcribe(input, true).unwrap()
}

/// Pretty transcription of a document expected to be well formed.
pub fn pretty(input: &[u8]) -> Vec<u8> {
    transcribe(input, false).unwrap()
}
