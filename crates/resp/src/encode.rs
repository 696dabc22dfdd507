use std::io::Write;

use bytes::BufMut;
use bytes::Bytes;
use bytes::BytesMut;

use crate::error::EncodeError;

/// Trait for values that can frame themselves onto a sink.
pub trait RespEncoder {
	/// Write the framed bytes of `self` to `sink` in one pass.
	fn encode_to<W: Write + ?Sized>(&self, sink: &mut W) -> Result<(), EncodeError>;

	fn encode(&self) -> Result<Bytes, EncodeError> {
		let mut writer = BytesMut::new().writer();
		self.encode_to(&mut writer)?;
		Ok(writer.into_inner().freeze())
	}

	fn encode_to_vec(&self) -> Result<Vec<u8>, EncodeError> {
		let mut buf = Vec::new();
		self.encode_to(&mut buf)?;
		Ok(buf)
	}
}

impl<T: RespEncoder + ?Sized> RespEncoder for &T {
	#[inline]
	fn encode_to<W: Write + ?Sized>(&self, sink: &mut W) -> Result<(), EncodeError> {
		(**self).encode_to(sink)
	}
}

/// Encode any value onto `sink`.
///
/// This is the single entry point arrays use to recurse into their
/// elements, whatever their concrete kind.
#[inline]
pub fn put<W, T>(sink: &mut W, value: &T) -> Result<(), EncodeError>
where
	W: Write + ?Sized,
	T: RespEncoder + ?Sized,
{
	value.encode_to(sink)
}
