//! In-memory cache adapter used as a test double
//!
//! Recognized properties:
//! - `defaultTtlSeconds`: time to live for entries stored without metadata
//! - `simulateUnreachable`: `true` makes `init` fail with an I/O error

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::time::Instant;

use signservice_config::coerce::{parse_boolean_with, parse_long_with};
use signservice_types::cache_adapter::{
	CacheAdapter, CacheKey, CachePayload, CacheProperties, MetaData, PayloadKind,
};
use signservice_types::prelude::*;

#[derive(Debug)]
struct Entry {
	payload: CachePayload,
	expires_at: Option<Instant>,
}

#[derive(Debug, Default)]
pub struct MemoryCache {
	entries: Mutex<HashMap<(String, PayloadKind), Entry>>,
	default_ttl: Mutex<Option<Duration>>,
	init_delay: Option<Duration>,
	pub init_calls: AtomicUsize,
	pub close_calls: AtomicUsize,
	/// get, get_binary, set and delete calls that reached the adapter
	pub op_calls: AtomicUsize,
}

impl MemoryCache {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adapter whose `init` takes `delay` to complete
	pub fn with_init_delay(delay: Duration) -> Self {
		Self { init_delay: Some(delay), ..Self::default() }
	}

	pub fn init_count(&self) -> usize {
		self.init_calls.load(Ordering::SeqCst)
	}

	pub fn close_count(&self) -> usize {
		self.close_calls.load(Ordering::SeqCst)
	}

	pub fn op_count(&self) -> usize {
		self.op_calls.load(Ordering::SeqCst)
	}

	fn lookup(&self, key: &CacheKey, kind: PayloadKind) -> Option<CachePayload> {
		self.op_calls.fetch_add(1, Ordering::SeqCst);
		let mut entries = self.entries.lock();
		let slot = (key.storage_key(), kind);
		let expired = entries
			.get(&slot)
			.is_some_and(|entry| entry.expires_at.is_some_and(|at| at <= Instant::now()));
		if expired {
			entries.remove(&slot);
			return None;
		}
		entries.get(&slot).map(|entry| entry.payload.clone())
	}
}

#[async_trait]
impl CacheAdapter for MemoryCache {
	async fn init(&self, properties: &CacheProperties) -> SsResult<()> {
		self.init_calls.fetch_add(1, Ordering::SeqCst);
		if let Some(delay) = self.init_delay {
			tokio::time::sleep(delay).await;
		}

		let unreachable = parse_boolean_with(
			&RawValue::from(properties.get("simulateUnreachable").cloned()),
			"Invalid value for 'simulateUnreachable' in cache configuration",
			false,
			Some(false),
		)?;
		if unreachable == Some(true) {
			return Err(std::io::Error::new(
				std::io::ErrorKind::ConnectionRefused,
				"cache backend unreachable",
			)
			.into());
		}

		let ttl = parse_long_with(
			&RawValue::from(properties.get("defaultTtlSeconds").cloned()),
			"Invalid value for 'defaultTtlSeconds' in cache configuration",
			false,
			None,
		)?;
		let ttl = match ttl {
			Some(secs) => Some(
				u64::try_from(secs)
					.ok()
					.filter(|secs| *secs > 0)
					.map(Duration::from_secs)
					.ok_or_else(|| Error::invalid_argument("defaultTtlSeconds must be positive"))?,
			),
			None => None,
		};
		*self.default_ttl.lock() = ttl;
		Ok(())
	}

	async fn get(&self, key: &CacheKey) -> SsResult<Option<String>> {
		match self.lookup(key, PayloadKind::Text) {
			Some(CachePayload::Text(value)) => Ok(Some(value)),
			_ => Ok(None),
		}
	}

	async fn get_binary(&self, key: &CacheKey) -> SsResult<Option<Vec<u8>>> {
		match self.lookup(key, PayloadKind::Binary) {
			Some(CachePayload::Binary(value)) => Ok(Some(value)),
			_ => Ok(None),
		}
	}

	async fn set(
		&self,
		key: &CacheKey,
		value: CachePayload,
		metadata: Option<MetaData>,
	) -> SsResult<()> {
		self.op_calls.fetch_add(1, Ordering::SeqCst);
		let ttl = metadata.and_then(|meta| meta.time_to_live).or(*self.default_ttl.lock());
		let entry = Entry { expires_at: ttl.map(|ttl| Instant::now() + ttl), payload: value };
		self.entries.lock().insert((key.storage_key(), entry.payload.kind()), entry);
		Ok(())
	}

	async fn delete(&self, key: &CacheKey) -> SsResult<()> {
		self.op_calls.fetch_add(1, Ordering::SeqCst);
		let storage_key = key.storage_key();
		let mut entries = self.entries.lock();
		entries.remove(&(storage_key.clone(), PayloadKind::Text));
		entries.remove(&(storage_key, PayloadKind::Binary));
		Ok(())
	}

	async fn close(&self) -> SsResult<()> {
		self.close_calls.fetch_add(1, Ordering::SeqCst);
		self.entries.lock().clear();
		Ok(())
	}
}

// vim: ts=4
