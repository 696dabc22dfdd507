//! Borrowed RESP value views.
//!
//! Every value here borrows caller-owned memory for the length of one
//! encode call. Nothing is copied or allocated until the bytes reach the
//! sink.

use std::io::Write;

use crate::encode::RespEncoder;
use crate::error::EncodeError;
use crate::utils::ERROR;
use crate::utils::INTEGER;
use crate::utils::SIMPLE_STRING;
use crate::utils::write_bulk;
use crate::utils::write_decimal;
use crate::utils::write_line;

/// Simple string: `+OK\r\n`
///
/// The text must not contain CR or LF. This is not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SimpleString<'a> {
	value: &'a str,
}

impl<'a> SimpleString<'a> {
	pub fn new<S: AsRef<str> + ?Sized>(value: &'a S) -> Self {
		Self {
			value: value.as_ref(),
		}
	}

	pub fn as_str(&self) -> &'a str {
		self.value
	}
}

impl<'a> From<&'a str> for SimpleString<'a> {
	fn from(value: &'a str) -> Self {
		Self::new(value)
	}
}

impl RespEncoder for SimpleString<'_> {
	fn encode_to<W: Write + ?Sized>(&self, sink: &mut W) -> Result<(), EncodeError> {
		write_line(sink, SIMPLE_STRING, self.value.as_bytes())
	}
}

/// Error: `-ERR message\r\n`
///
/// Same contract as [`SimpleString`]: no CR or LF in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorMessage<'a> {
	value: &'a str,
}

impl<'a> ErrorMessage<'a> {
	pub fn new<S: AsRef<str> + ?Sized>(value: &'a S) -> Self {
		Self {
			value: value.as_ref(),
		}
	}

	pub fn as_str(&self) -> &'a str {
		self.value
	}
}

impl<'a> From<&'a str> for ErrorMessage<'a> {
	fn from(value: &'a str) -> Self {
		Self::new(value)
	}
}

impl RespEncoder for ErrorMessage<'_> {
	fn encode_to<W: Write + ?Sized>(&self, sink: &mut W) -> Result<(), EncodeError> {
		write_line(sink, ERROR, self.value.as_bytes())
	}
}

mod private {
	pub trait Sealed {}
}

/// Source types accepted by [`Integer`].
///
/// Implemented for the primitive integers and `bool`. Conversion follows
/// `as` cast semantics: wider values truncate, `u64` above `i64::MAX`
/// wraps to a negative number.
pub trait Integral: Copy + private::Sealed {
	fn to_i64(self) -> i64;
}

macro_rules! impl_integral {
	($($ty:ty),* $(,)?) => {
		$(
			impl private::Sealed for $ty {}

			impl Integral for $ty {
				#[inline]
				fn to_i64(self) -> i64 {
					self as i64
				}
			}
		)*
	};
}

impl_integral!(
	i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool,
);

/// Integer: `:1000\r\n`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Integer<T: Integral> {
	value: T,
}

impl<T: Integral> Integer<T> {
	pub fn new(value: T) -> Self {
		Self { value }
	}

	/// The value as it will appear on the wire.
	pub fn get(&self) -> i64 {
		self.value.to_i64()
	}
}

impl<T: Integral> From<T> for Integer<T> {
	fn from(value: T) -> Self {
		Self::new(value)
	}
}

impl<T: Integral> RespEncoder for Integer<T> {
	fn encode_to<W: Write + ?Sized>(&self, sink: &mut W) -> Result<(), EncodeError> {
		write_decimal(sink, INTEGER, self.get())
	}
}

/// Bulk string: `$6\r\nfoobar\r\n`, or `$-1\r\n` when absent.
///
/// Binary-safe: the payload is any byte sequence, UTF-8 or not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BulkString<'a> {
	value: Option<&'a [u8]>,
}

impl<'a> BulkString<'a> {
	pub fn new<B: AsRef<[u8]> + ?Sized>(value: &'a B) -> Self {
		Self {
			value: Some(value.as_ref()),
		}
	}

	/// The absent bulk string.
	pub const fn null() -> Self {
		Self { value: None }
	}

	pub fn is_null(&self) -> bool {
		self.value.is_none()
	}

	pub fn as_bytes(&self) -> Option<&'a [u8]> {
		self.value
	}

	/// The payload as text, if present and valid UTF-8.
	pub fn as_str(&self) -> Option<&'a str> {
		self.value.and_then(|v| std::str::from_utf8(v).ok())
	}
}

impl<'a> From<&'a str> for BulkString<'a> {
	fn from(value: &'a str) -> Self {
		Self::new(value)
	}
}

impl<'a> From<&'a [u8]> for BulkString<'a> {
	fn from(value: &'a [u8]) -> Self {
		Self::new(value)
	}
}

impl<'a> From<Option<&'a str>> for BulkString<'a> {
	fn from(value: Option<&'a str>) -> Self {
		Self {
			value: value.map(str::as_bytes),
		}
	}
}

impl RespEncoder for BulkString<'_> {
	fn encode_to<W: Write + ?Sized>(&self, sink: &mut W) -> Result<(), EncodeError> {
		write_bulk(sink, self.value)
	}
}

/// Raw bytes framed as a bulk string. The payload may contain anything,
/// including NUL and CRLF.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BinaryData<'a> {
	data: Option<&'a [u8]>,
}

impl<'a> BinaryData<'a> {
	pub fn new<B: AsRef<[u8]> + ?Sized>(data: &'a B) -> Self {
		Self {
			data: Some(data.as_ref()),
		}
	}

	pub const fn null() -> Self {
		Self { data: None }
	}

	pub fn is_null(&self) -> bool {
		self.data.is_none()
	}

	pub fn as_bytes(&self) -> Option<&'a [u8]> {
		self.data
	}
}

impl<'a> From<&'a [u8]> for BinaryData<'a> {
	fn from(data: &'a [u8]) -> Self {
		Self::new(data)
	}
}

impl<'a> From<Option<&'a [u8]>> for BinaryData<'a> {
	fn from(data: Option<&'a [u8]>) -> Self {
		Self { data }
	}
}

impl RespEncoder for BinaryData<'_> {
	fn encode_to<W: Write + ?Sized>(&self, sink: &mut W) -> Result<(), EncodeError> {
		write_bulk(sink, self.data)
	}
}

/// Null: `$-1\r\n`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Null;

impl RespEncoder for Null {
	fn encode_to<W: Write + ?Sized>(&self, sink: &mut W) -> Result<(), EncodeError> {
		BulkString::null().encode_to(sink)
	}
}
