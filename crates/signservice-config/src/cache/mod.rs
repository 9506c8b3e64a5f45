//! Context-scoped caching in front of a pluggable [`CacheAdapter`].
//!
//! [`CacheAdapter`]: signservice_types::cache_adapter::CacheAdapter

pub mod service;

pub use service::CacheService;
pub use signservice_types::cache_adapter::{
	CacheAdapter, CacheKey, CachePayload, CacheProperties, MetaData, PayloadKind,
};

// vim: ts=4
