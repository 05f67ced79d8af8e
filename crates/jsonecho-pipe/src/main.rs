//! Read JSON one byte at a time and write it back, pretty or terse.
//!
//! Input bytes are fed straight from the stream into the lexer; every
//! result goes to the writer, whose prefix hints are materialized here as
//! newlines and two-space indentation (or nothing in terse mode). A
//! newline is written after every top-level value.
//!
//! Exit status: 0 on success, 65 (EX_DATAERR) when the input does not hold
//! exactly one top-level value, the lexer status plus 100 on a diagnostic,
//! and conventional non-zero codes for argument or I/O failures.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use jsonecho::{Event, Lexer, ReadResult, Status, TextOutput, TextPrefix, Writer};

const DEFAULT_STACK_SIZE: &str = "1024";

fn cli() -> clap::Command {
    clap::Command::new("jsonecho-pipe")
        .about("Read and write JSON")
        .version(clap::crate_version!())
        .arg(
            clap::Arg::new("terse")
                .short('t')
                .help("Write terse output without newlines")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("output")
                .short('o')
                .value_name("FILENAME")
                .help("Write output to FILENAME instead of stdout")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            clap::Arg::new("stack-size")
                .short('k')
                .value_name("SIZE")
                .help("Lexer stack size in bytes")
                .default_value(DEFAULT_STACK_SIZE)
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
        .arg(
            clap::Arg::new("input")
                .value_name("INPUT")
                .help("Input file, or standard input if absent")
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

/// Reads one byte, mapping end of stream to the lexer's EOF sentinel.
fn read_one(input: &mut impl Read) -> io::Result<Option<u8>> {
    let mut byte = [0u8; 1];
    loop {
        match input.read(&mut byte) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(byte[0])),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
}

/// Writes a newline with indentation.
fn write_newline(out: &mut impl Write, indent: u32) -> io::Result<()> {
    out.write_all(b"\n")?;
    for _ in 0..indent {
        out.write_all(b"  ")?;
    }
    Ok(())
}

/// Writes an output prefix (delimiter and whitespace) in normal or terse
/// mode.
fn write_prefix(
    out: &mut impl Write,
    prefix: TextPrefix,
    indent: u32,
    terse: bool,
) -> io::Result<()> {
    match prefix {
        TextPrefix::None => Ok(()),
        TextPrefix::ObjectStart
        | TextPrefix::ArrayStart
        | TextPrefix::ObjectEnd
        | TextPrefix::ArrayEnd => {
            if terse {
                Ok(())
            } else {
                write_newline(out, indent)
            }
        }
        TextPrefix::MemberColon => out.write_all(if terse { b":" } else { b": " }),
        TextPrefix::MemberComma | TextPrefix::ArrayComma => {
            out.write_all(b",")?;
            if terse {
                Ok(())
            } else {
                write_newline(out, indent)
            }
        }
    }
}

/// Writes an output fragment with its prefix.
fn write_output(out: &mut impl Write, text: &TextOutput<'_>, terse: bool) -> io::Result<()> {
    write_prefix(out, text.prefix, text.indent, terse)?;
    out.write_all(text.bytes)
}

/// Updates the depth and returns true at the end of a top-level value.
fn update_depth(depth: &mut u32, result: ReadResult) -> bool {
    match result.event {
        Event::Start => {
            *depth += 1;
            false
        }
        Event::End => {
            *depth = depth.saturating_sub(1);
            *depth == 0
        }
        Event::DoubleEnd => {
            *depth = depth.saturating_sub(2);
            *depth == 0
        }
        Event::Nothing | Event::Bytes => false,
    }
}

fn exit_status(status: Status, num_values: u32) -> u8 {
    if num_values != 1 {
        65 // EX_DATAERR
    } else if status == Status::Failure {
        0
    } else {
        status as u8 + 100
    }
}

/// Feeds the input through the lexer and writer until the stream ends or a
/// status stops it, and returns the process exit status.
fn run(
    input: &mut impl Read,
    output: &mut impl Write,
    lexer: &mut Lexer,
    terse: bool,
) -> anyhow::Result<u8> {
    let mut writer = Writer::new();
    let mut depth = 0u32;
    let mut num_values = 0u32;
    let mut status = Status::Success;

    while status == Status::Success {
        let byte = read_one(input).context("failed to read input")?;
        let result = lexer.read_byte(byte);
        status = result.status;
        if status != Status::Success {
            break;
        }

        let is_top_end = update_depth(&mut depth, result);
        let text = writer.write(result, lexer.bytes());
        if write_output(output, &text, terse).is_err() {
            status = Status::BadWrite;
            break;
        }

        if is_top_end {
            num_values += 1;
            if output.write_all(b"\n").is_err() {
                status = Status::BadWrite;
                break;
            }
        }
    }

    if status.is_error() {
        eprintln!("error: {status}");
    }

    Ok(exit_status(status, num_values))
}

fn pipe() -> anyhow::Result<u8> {
    let matches = cli().get_matches();
    let terse = matches.get_flag("terse");
    let stack_size = matches
        .get_one::<u64>("stack-size")
        .copied()
        .context("missing stack size")?;

    let mut input: Box<dyn Read> = match matches.get_one::<PathBuf>("input") {
        Some(path) => Box::new(BufReader::new(File::open(path).with_context(|| {
            format!("failed to open input {}", path.display())
        })?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut output: Box<dyn Write> = match matches.get_one::<PathBuf>("output") {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
            format!("failed to open output {}", path.display())
        })?)),
        None => Box::new(BufWriter::new(io::stdout())),
    };

    let mut lexer =
        Lexer::new(stack_size as usize).context("stack size must hold at least one frame")?;

    let code = run(&mut input, &mut output, &mut lexer, terse)?;
    output.flush().context("failed to flush output")?;
    Ok(code)
}

fn main() -> ExitCode {
    match pipe() {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("jsonecho-pipe: {err:#}");
            ExitCode::FAILURE
        }
    }
}
