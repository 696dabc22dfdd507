//! Framing constants and line writers shared by every encoder.

use std::fmt::Display;
use std::io;
use std::io::Write;

use crate::error::EncodeError;

/// CRLF line ending
pub const CRLF: &[u8] = b"\r\n";

/// Type markers for RESP2
pub const SIMPLE_STRING: u8 = b'+';
pub const ERROR: u8 = b'-';
pub const INTEGER: u8 = b':';
pub const BULK_STRING: u8 = b'$';
pub const ARRAY: u8 = b'*';

/// Length written in place of a count for null bulk strings and null arrays.
pub const NULL_LENGTH: i64 = -1;

#[inline]
fn sink_error(marker: u8, e: io::Error) -> EncodeError {
	log::debug!("sink rejected '{}' frame: {}", char::from(marker), e);
	EncodeError::Io(e)
}

/// Write `<marker><text>\r\n`.
#[inline]
pub(crate) fn write_line<W: Write + ?Sized>(
	sink: &mut W,
	marker: u8,
	text: &[u8],
) -> Result<(), EncodeError> {
	sink.write_all(&[marker])
		.and_then(|()| sink.write_all(text))
		.and_then(|()| sink.write_all(CRLF))
		.map_err(|e| sink_error(marker, e))
}

/// Write `<marker><decimal>\r\n`.
#[inline]
pub(crate) fn write_decimal<W: Write + ?Sized, N: Display>(
	sink: &mut W,
	marker: u8,
	n: N,
) -> Result<(), EncodeError> {
	sink.write_all(&[marker])
		.and_then(|()| write!(sink, "{n}"))
		.and_then(|()| sink.write_all(CRLF))
		.map_err(|e| sink_error(marker, e))
}

/// Write a length header; `None` is the null form (`-1`).
#[inline]
pub(crate) fn write_header<W: Write + ?Sized>(
	sink: &mut W,
	marker: u8,
	length: Option<usize>,
) -> Result<(), EncodeError> {
	match length {
		Some(length) => write_decimal(sink, marker, length),
		None => write_decimal(sink, marker, NULL_LENGTH),
	}
}

/// Write a length-prefixed payload, or the null bulk string when absent.
pub(crate) fn write_bulk<W: Write + ?Sized>(
	sink: &mut W,
	data: Option<&[u8]>,
) -> Result<(), EncodeError> {
	write_header(sink, BULK_STRING, data.map(<[u8]>::len))?;
	if let Some(data) = data {
		sink.write_all(data)
			.and_then(|()| sink.write_all(CRLF))
			.map_err(|e| sink_error(BULK_STRING, e))?;
	}
	Ok(())
}
