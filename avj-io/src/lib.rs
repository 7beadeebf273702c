//! AVJ I/O - File handling and high-level APIs
//!
//! This crate wraps the pure decoder from `avj-format` with the I/O boundary:
//!
//! - Bounded reading from paths or arbitrary readers
//! - Pretty or compact rendering of the framed output
//! - A request/summary API driving a whole run

#![deny(unsafe_code)]
#![warn(missing_docs)]

// Re-export commonly used types
pub use avj_format::{AvjError, Decoder, Limits, Result};

use avj_format::{frame, parse_str};
use serde_json::Value;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// High-level decode options
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// Resource limits
    pub limits: Limits,
    /// Render with two-space indentation (default) instead of compact output
    pub pretty: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            pretty: true,
        }
    }
}

/// Where the encoded document comes from
pub enum InputSource {
    /// Read from a file path
    Path(PathBuf),
    /// Read from an arbitrary reader
    Reader(Box<dyn Read>),
}

/// Where the decoded document goes
pub enum OutputSink {
    /// Standard output
    Stdout,
    /// Create or truncate a file
    Path(PathBuf),
    /// Arbitrary writer
    Writer(Box<dyn Write>),
}

/// A complete decode run
pub struct DecodeRequest {
    /// Input document
    pub input: InputSource,
    /// Output destination
    pub output: OutputSink,
    /// Decode options
    pub options: DecodeOptions,
}

/// Statistics reported after a decode run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeSummary {
    /// Raw bytes read from the input
    pub input_bytes: usize,
    /// Top-level fields in the input document
    pub fields_in: usize,
    /// Top-level fields surviving in the output
    pub fields_out: usize,
    /// Wall-clock time for the whole run
    pub elapsed: Duration,
}

/// Read the whole input, enforcing `limits.max_input_bytes`
pub fn read_input<R: Read>(reader: R, limits: &Limits) -> Result<String> {
    let mut buffer = Vec::new();
    let mut limited = reader.take(limits.max_input_bytes as u64 + 1);
    limited.read_to_end(&mut buffer)?;
    limits.check_input_len(buffer.len())?;
    Ok(String::from_utf8(buffer)?)
}

/// Framed output plus the counts reported in a [`DecodeSummary`]
struct Decoded {
    value: Value,
    input_bytes: usize,
    fields_in: usize,
    fields_out: usize,
}

fn decode_input<R: Read>(reader: R, limits: &Limits) -> Result<Decoded> {
    let raw = read_input(reader, limits)?;
    let document = parse_str(&raw)?;
    let fields_in = document.as_object().map_or(0, |root| root.len());
    let decoded = Decoder::new(limits.clone()).decode_document(&document)?;

    Ok(Decoded {
        input_bytes: raw.len(),
        fields_in,
        fields_out: decoded.len(),
        value: frame(decoded),
    })
}

/// Decode a document from a reader into the framed output
pub fn decode_reader<R: Read>(reader: R, opts: &DecodeOptions) -> Result<Value> {
    Ok(decode_input(reader, &opts.limits)?.value)
}

/// Decode a document stored at `path` into the framed output
pub fn decode_file<P: AsRef<Path>>(path: P, opts: &DecodeOptions) -> Result<Value> {
    let file = File::open(path.as_ref())?;
    decode_reader(file, opts)
}

/// Render `value` as JSON followed by a newline
pub fn render<W: Write>(value: &Value, writer: W, pretty: bool) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    if pretty {
        serde_json::to_writer_pretty(&mut writer, value)?;
    } else {
        serde_json::to_writer(&mut writer, value)?;
    }
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Run a full decode from `request.input` to `request.output`
pub fn execute_decode(request: DecodeRequest) -> Result<DecodeSummary> {
    let start = Instant::now();
    let DecodeRequest {
        input,
        output,
        options,
    } = request;

    let reader: Box<dyn Read> = match input {
        InputSource::Path(path) => {
            debug!(path = %path.display(), "reading input");
            Box::new(File::open(&path)?)
        }
        InputSource::Reader(reader) => reader,
    };
    let decoded = decode_input(reader, &options.limits)?;

    match output {
        OutputSink::Stdout => render(&decoded.value, io::stdout().lock(), options.pretty)?,
        OutputSink::Path(path) => render(&decoded.value, File::create(&path)?, options.pretty)?,
        OutputSink::Writer(writer) => render(&decoded.value, writer, options.pretty)?,
    }

    let summary = DecodeSummary {
        input_bytes: decoded.input_bytes,
        fields_in: decoded.fields_in,
        fields_out: decoded.fields_out,
        elapsed: start.elapsed(),
    };
    info!(
        input_bytes = summary.input_bytes,
        fields_in = summary.fields_in,
        fields_out = summary.fields_out,
        elapsed = ?summary.elapsed,
        "decode complete"
    );
    Ok(summary)
}
