//! Error type shared by the coercion engine, the settings assemblers and cache adapters.
//!
//! Three kinds are distinguished so callers can decide what to do with a failure:
//! - `InvalidArgument`: malformed or missing configuration, bad cache key or value.
//!   A caller bug; never retried.
//! - `Io`: the backend is unreachable or failed transiently. May be retried.
//! - `Internal`: everything else. Log and abort.

use std::error::Error as StdError;

use thiserror::Error;

/// Boxed underlying cause attached to an error
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

pub type SsResult<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	InvalidArgument,
	Io,
	Internal,
}

#[derive(Debug, Error)]
pub enum Error {
	#[error("{message}")]
	InvalidArgument {
		message: String,
		#[source]
		source: Option<BoxError>,
	},

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("{message}")]
	Internal {
		message: String,
		#[source]
		source: Option<BoxError>,
	},
}

impl Error {
	pub fn invalid_argument(message: impl Into<String>) -> Self {
		Error::InvalidArgument { message: message.into(), source: None }
	}

	pub fn invalid_argument_with(message: impl Into<String>, cause: impl Into<BoxError>) -> Self {
		Error::InvalidArgument { message: message.into(), source: Some(cause.into()) }
	}

	pub fn internal(message: impl Into<String>) -> Self {
		Error::Internal { message: message.into(), source: None }
	}

	pub fn internal_with(message: impl Into<String>, cause: impl Into<BoxError>) -> Self {
		Error::Internal { message: message.into(), source: Some(cause.into()) }
	}

	pub fn kind(&self) -> ErrorKind {
		match self {
			Error::InvalidArgument { .. } => ErrorKind::InvalidArgument,
			Error::Io(_) => ErrorKind::Io,
			Error::Internal { .. } => ErrorKind::Internal,
		}
	}

	/// Only I/O failures are worth retrying
	pub fn is_retryable(&self) -> bool {
		self.kind() == ErrorKind::Io
	}

	/// Message without the underlying cause
	pub fn message(&self) -> String {
		match self {
			Error::InvalidArgument { message, .. } | Error::Internal { message, .. } => {
				message.clone()
			}
			Error::Io(err) => err.to_string(),
		}
	}
}


// vim: ts=4
