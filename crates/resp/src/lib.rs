//! # respwire - RESP request encoder
//!
//! Frames typed, borrowed values into the byte-exact wire format of the
//! Redis Serialization Protocol (RESP2) and writes them straight onto any
//! [`std::io::Write`] sink.
//!
//! ## Features
//!
//! - **Borrowed views**: values reference caller memory, nothing is copied
//! - **Single pass**: each value writes its framed bytes directly to the sink
//! - **Heterogeneous arrays**: tuples of any encodable values, nested freely
//! - **Distinct nulls**: `$-1`, `*-1` and `*0` are never confused
//!
//! ## Example
//!
//! ```rust
//! use respwire::{Array, BulkString, RespEncoder};
//!
//! let cmd = Array::new((
//!     BulkString::new("SET"),
//!     BulkString::new("key"),
//!     BulkString::new("value"),
//! ));
//!
//! let mut sink = Vec::new();
//! respwire::put(&mut sink, &cmd).unwrap();
//! assert_eq!(sink, b"*3\r\n$3\r\nSET\r\n$3\r\nkey\r\n$5\r\nvalue\r\n");
//!
//! // Or into a fresh buffer
//! let encoded = cmd.encode().unwrap();
//! assert_eq!(&encoded[..], &sink[..]);
//! ```

mod array;
mod encode;
mod error;
mod types;
mod utils;

pub use array::Array;
pub use array::ArrayItems;
pub use encode::RespEncoder;
pub use encode::put;
pub use error::EncodeError;
pub use types::BinaryData;
pub use types::BulkString;
pub use types::ErrorMessage;
pub use types::Integer;
pub use types::Integral;
pub use types::Null;
pub use types::SimpleString;

/// Framing constants shared by every encoder.
pub mod marker {
	pub use crate::utils::ARRAY;
	pub use crate::utils::BULK_STRING;
	pub use crate::utils::CRLF;
	pub use crate::utils::ERROR;
	pub use crate::utils::INTEGER;
	pub use crate::utils::NULL_LENGTH;
	pub use crate::utils::SIMPLE_STRING;
}
