//! Error types for RESP encoding.

use thiserror::Error;

/// Errors that can occur during RESP encoding.
///
/// Content is never validated, so the only runtime failure is the sink
/// refusing bytes. When that happens the frame on the sink may be
/// incomplete and the sink must not be reused without re-synchronizing.
#[derive(Error, Debug)]
pub enum EncodeError {
	/// Writing to the sink failed
	#[error("Sink write failed: {0}")]
	Io(#[from] std::io::Error),
}

impl EncodeError {
	/// The underlying I/O error kind.
	pub fn kind(&self) -> std::io::ErrorKind {
		match self {
			EncodeError::Io(e) => e.kind(),
		}
	}
}
