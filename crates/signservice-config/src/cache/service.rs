//! Cache service - lifecycle and argument checks in front of a cache adapter

use parking_lot::Mutex;
use std::sync::Arc;

use signservice_types::cache_adapter::{CacheAdapter, CacheKey, CachePayload, CacheProperties, MetaData};

use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
	Created,
	Initializing,
	Ready,
	Closed,
}

/// Main interface for storing and fetching cached values.
///
/// Enforces the adapter contract on behalf of callers: the adapter is
/// initialized exactly once before use, receives nothing after `close`, and
/// never sees an empty key or context id.
///
/// Every operation takes an optional context id; `None` addresses the global
/// scope.
#[derive(Debug)]
pub struct CacheService {
	adapter: Arc<dyn CacheAdapter>,
	state: Mutex<Lifecycle>,
}

impl CacheService {
	pub fn new(adapter: Arc<dyn CacheAdapter>) -> Self {
		Self { adapter, state: Mutex::new(Lifecycle::Created) }
	}

	/// Initialize the adapter. Fails if called a second time; a failed
	/// initialization may be retried.
	pub async fn init(&self, properties: &CacheProperties) -> SsResult<()> {
		{
			let mut state = self.state.lock();
			match *state {
				Lifecycle::Created => *state = Lifecycle::Initializing,
				Lifecycle::Initializing | Lifecycle::Ready => {
					warn!("Cache provider initialized twice");
					return Err(Error::invalid_argument("Cache provider is already initialized"));
				}
				Lifecycle::Closed => return Err(Error::internal("Cache provider is closed")),
			}
		}

		info!(properties = properties.len(), "Initializing cache provider");
		let res = self.adapter.init(properties).await;

		let closed = {
			let mut state = self.state.lock();
			if *state == Lifecycle::Initializing {
				*state = if res.is_ok() { Lifecycle::Ready } else { Lifecycle::Created };
				false
			} else {
				true
			}
		};

		match res {
			Err(err) => {
				error!(kind = ?err.kind(), "Cache provider initialization failed: {}", err);
				Err(err)
			}
			Ok(()) if closed => {
				warn!("Cache provider closed during initialization");
				self.adapter.close().await?;
				Err(Error::internal("Cache provider was closed during initialization"))
			}
			Ok(()) => {
				info!("Cache provider ready");
				Ok(())
			}
		}
	}

	fn ensure_ready(&self) -> SsResult<()> {
		match *self.state.lock() {
			Lifecycle::Ready => Ok(()),
			Lifecycle::Closed => Err(Error::internal("Cache provider is closed")),
			Lifecycle::Created | Lifecycle::Initializing => {
				Err(Error::internal("Cache provider is not initialized"))
			}
		}
	}

	fn key(&self, context_id: Option<&str>, key: &str) -> SsResult<CacheKey> {
		let key = CacheKey::new(context_id, key);
		if let Err(err) = self.ensure_ready().and_then(|()| key.validate()) {
			warn!(key = %key, "Cache operation rejected: {}", err);
			return Err(err);
		}
		Ok(key)
	}

	/// Textual value, or `None` if missing or expired
	pub async fn get(&self, context_id: Option<&str>, key: &str) -> SsResult<Option<String>> {
		let key = self.key(context_id, key)?;
		let value = self.adapter.get(&key).await?;
		trace!(key = %key, hit = value.is_some(), "cache get");
		Ok(value)
	}

	/// Binary value, or `None` if missing or expired
	pub async fn get_binary(
		&self,
		context_id: Option<&str>,
		key: &str,
	) -> SsResult<Option<Vec<u8>>> {
		let key = self.key(context_id, key)?;
		let value = self.adapter.get_binary(&key).await?;
		trace!(key = %key, hit = value.is_some(), "cache get_binary");
		Ok(value)
	}

	/// Insert or replace a value. Without metadata the adapter's default
	/// time to live applies.
	pub async fn set(
		&self,
		context_id: Option<&str>,
		key: &str,
		value: impl Into<CachePayload>,
		metadata: Option<MetaData>,
	) -> SsResult<()> {
		let key = self.key(context_id, key)?;
		if let Some(meta) = &metadata {
			meta.validate()?;
		}
		let value = value.into();
		debug!(key = %key, kind = ?value.kind(), size = value.len(), ttl = ?metadata.and_then(|m| m.time_to_live), "cache set");
		self.adapter.set(&key, value, metadata).await
	}

	/// Remove a value; removing a missing value succeeds
	pub async fn delete(&self, context_id: Option<&str>, key: &str) -> SsResult<()> {
		let key = self.key(context_id, key)?;
		debug!(key = %key, "cache delete");
		self.adapter.delete(&key).await
	}

	/// Release the adapter. Only the first call reaches the adapter.
	pub async fn close(&self) -> SsResult<()> {
		let previous = std::mem::replace(&mut *self.state.lock(), Lifecycle::Closed);
		match previous {
			Lifecycle::Closed => {
				debug!("Cache provider already closed");
				Ok(())
			}
			Lifecycle::Created => {
				info!("Cache provider closed before initialization");
				Ok(())
			}
			// An in-flight init closes the adapter itself once it notices
			Lifecycle::Initializing => Ok(()),
			Lifecycle::Ready => {
				info!("Closing cache provider");
				self.adapter.close().await
			}
		}
	}

	pub fn is_ready(&self) -> bool {
		*self.state.lock() == Lifecycle::Ready
	}
}

// vim: ts=4
