//! Cache Adapter
//!
//! Trait and types for pluggable cache backends storing transaction- and
//! session-scoped state for the signature service.
//!
//! Entries are addressed by a [`CacheKey`]: an optional context id (transaction,
//! session or other applicable context) plus a key. A key without a context id
//! lives in the global scope. Global and context scopes are independent
//! namespaces, and so are different context ids.
//!
//! Each entry holds either a textual or a binary payload. The two payload kinds
//! are independent namespaces even for the same `(context, key)` pair.
//!
//! Each adapter implementation receives its backend-specific settings through
//! [`CacheAdapter::init`]; its schema is defined by the backend.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::time::Duration;

use crate::prelude::*;

/// Opaque backend configuration passed to [`CacheAdapter::init`]
pub type CacheProperties = BTreeMap<String, String>;

/// Address of a cache entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CacheKey {
	context_id: Option<Box<str>>,
	key: Box<str>,
}

impl CacheKey {
	pub fn new(context_id: Option<&str>, key: &str) -> Self {
		Self { context_id: context_id.map(Into::into), key: key.into() }
	}

	/// Key in the global scope
	pub fn global(key: impl Into<Box<str>>) -> Self {
		Self { context_id: None, key: key.into() }
	}

	/// Key scoped to a transaction, session or other context
	pub fn scoped(context_id: impl Into<Box<str>>, key: impl Into<Box<str>>) -> Self {
		Self { context_id: Some(context_id.into()), key: key.into() }
	}

	pub fn context_id(&self) -> Option<&str> {
		self.context_id.as_deref()
	}

	pub fn key(&self) -> &str {
		&self.key
	}

	pub fn is_global(&self) -> bool {
		self.context_id.is_none()
	}

	/// Reject empty keys and empty context ids
	pub fn validate(&self) -> SsResult<()> {
		if self.key.is_empty() {
			return Err(Error::invalid_argument("Cache key must not be empty"));
		}
		if self.context_id.as_deref() == Some("") {
			return Err(Error::invalid_argument(format!(
				"Context id for cache key '{}' must not be empty",
				self.key
			)));
		}
		Ok(())
	}

	/// Flat string form for backends with a single key space.
	///
	/// Global keys encode as `g:<key>`, scoped keys as `c:<len>:<context>:<key>`
	/// where `<len>` is the byte length of the context id, so no two distinct
	/// keys share an encoding whatever characters they contain.
	pub fn storage_key(&self) -> String {
		match &self.context_id {
			None => format!("g:{}", self.key),
			Some(ctx) => format!("c:{}:{}:{}", ctx.len(), ctx, self.key),
		}
	}
}

impl std::fmt::Display for CacheKey {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match &self.context_id {
			None => write!(f, "{}", self.key),
			Some(ctx) => write!(f, "{}/{}", ctx, self.key),
		}
	}
}

/// Per-entry cache attributes overriding backend defaults
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaData {
	/// Time to live. `None` means the backend default applies.
	pub time_to_live: Option<Duration>,
}

impl MetaData {
	pub fn with_ttl(ttl: Duration) -> Self {
		Self { time_to_live: Some(ttl) }
	}

	pub fn validate(&self) -> SsResult<()> {
		if self.time_to_live == Some(Duration::ZERO) {
			return Err(Error::invalid_argument("Cache entry time to live must be positive"));
		}
		Ok(())
	}

	/// Expiry for an entry stored at `now`, if a time to live is set
	pub fn expires_at(&self, now: Timestamp) -> Option<Timestamp> {
		self.time_to_live.map(|ttl| now.add_duration(ttl))
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadKind {
	Text,
	Binary,
}

/// Value stored in the cache
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CachePayload {
	Text(String),
	Binary(Vec<u8>),
}

impl CachePayload {
	pub fn kind(&self) -> PayloadKind {
		match self {
			CachePayload::Text(_) => PayloadKind::Text,
			CachePayload::Binary(_) => PayloadKind::Binary,
		}
	}

	pub fn len(&self) -> usize {
		match self {
			CachePayload::Text(s) => s.len(),
			CachePayload::Binary(b) => b.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl From<&str> for CachePayload {
	fn from(value: &str) -> Self {
		CachePayload::Text(value.to_string())
	}
}

impl From<String> for CachePayload {
	fn from(value: String) -> Self {
		CachePayload::Text(value)
	}
}

impl From<&[u8]> for CachePayload {
	fn from(value: &[u8]) -> Self {
		CachePayload::Binary(value.to_vec())
	}
}

impl From<Vec<u8>> for CachePayload {
	fn from(value: Vec<u8>) -> Self {
		CachePayload::Binary(value)
	}
}

/// Cache Adapter trait.
///
/// Unified interface for cache backends (in-memory, distributed, ...).
///
/// # Contract
///
/// - `init` is called exactly once before any other operation, `close` is the
///   last call an adapter receives.
/// - Entries under different context ids (including global vs. any context)
///   never observe each other.
/// - `get`/`get_binary` right after `set` with the same key and no elapsed TTL
///   return exactly the stored payload.
/// - Absence and expiry are reported as `Ok(None)`, never as an error.
/// - Concurrent writers to the same key must not corrupt the entry; last write
///   wins.
/// - Failures use [`Error::InvalidArgument`] for bad keys or values,
///   [`Error::Io`] for unreachable or transiently failing backends and
///   [`Error::Internal`] for everything else. Timeouts are reported as `Io`.
#[async_trait]
pub trait CacheAdapter: Debug + Send + Sync {
	/// One-time setup. Fails with `InvalidArgument` on invalid properties and
	/// with `Io` if the backend cannot be reached.
	async fn init(&self, properties: &CacheProperties) -> SsResult<()>;

	/// Textual payload stored under `key`
	async fn get(&self, key: &CacheKey) -> SsResult<Option<String>>;

	/// Binary payload stored under `key`
	async fn get_binary(&self, key: &CacheKey) -> SsResult<Option<Vec<u8>>>;

	/// Insert or replace an entry. Without `metadata` the backend's default
	/// time to live applies.
	async fn set(
		&self,
		key: &CacheKey,
		value: CachePayload,
		metadata: Option<MetaData>,
	) -> SsResult<()>;

	/// Remove both the textual and the binary payload stored under `key`.
	/// Removing a missing entry succeeds.
	async fn delete(&self, key: &CacheKey) -> SsResult<()>;

	/// Release backend resources
	async fn close(&self) -> SsResult<()>;
}


// vim: ts=4
