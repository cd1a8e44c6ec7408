//! JSON I/O handling for CLI
//!
//! - Input: one JSON requirements object, from a file or stdin
//! - Output: one JSON response object on stdout
//! - UTF-8 only

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use serde::Serialize;

use super::errors::{CliError, CliResult};
use crate::requirements::RequirementsRequest;

/// Parse one requirements object. Unknown enum values and wrong types are
/// input errors; missing fields are left for validation.
pub fn parse_request(text: &str) -> CliResult<RequirementsRequest> {
    if text.trim().is_empty() {
        return Err(CliError::invalid_input("Empty input"));
    }
    Ok(serde_json::from_str(text)?)
}

/// Read a requirements request from `input`, or stdin when absent.
pub fn read_request(input: Option<&Path>) -> CliResult<RequirementsRequest> {
    let text = match input {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| CliError::io_error(format!("cannot read {}: {}", path.display(), e)))?,
        None => {
            let mut buf = String::new();
            io::stdin().lock().read_to_string(&mut buf)?;
            buf
        }
    };
    parse_request(&text)
}

/// Success response. Serialized straight from `data`, so struct fields keep
/// their declaration order.
#[derive(Debug, Serialize)]
pub struct OkEnvelope<T> {
    pub status: &'static str,
    pub data: T,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope<'a> {
    pub status: &'static str,
    pub code: &'a str,
    pub message: &'a str,
}

/// Success envelope
pub fn ok_envelope<T: Serialize>(data: T) -> OkEnvelope<T> {
    OkEnvelope { status: "ok", data }
}

/// Error envelope
pub fn error_envelope<'a>(code: &'a str, message: &'a str) -> ErrorEnvelope<'a> {
    ErrorEnvelope {
        status: "error",
        code,
        message,
    }
}

/// Write one JSON value as a single line (or pretty-printed) to `writer`
pub fn write_value<W: Write>(writer: &mut W, value: &impl Serialize, pretty: bool) -> CliResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, value)?;
    } else {
        serde_json::to_writer(&mut *writer, value)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a success response to stdout
pub fn write_response(data: impl Serialize, pretty: bool) -> CliResult<()> {
    write_value(&mut io::stdout().lock(), &ok_envelope(data), pretty)
}

/// Write an error response to stdout
pub fn write_error(code: &str, message: &str, pretty: bool) -> CliResult<()> {
    write_value(&mut io::stdout().lock(), &error_envelope(code, message), pretty)
}
