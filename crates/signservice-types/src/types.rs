//! Common types used throughout the configuration layer.

use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime};

// Timestamp //
//***********//
/// Wall-clock time in whole seconds since the Unix epoch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);

impl Timestamp {
	pub fn now() -> Timestamp {
		let res = SystemTime::now().duration_since(SystemTime::UNIX_EPOCH).unwrap_or_default();
		Timestamp(i64::try_from(res.as_secs()).unwrap_or(i64::MAX))
	}

	pub fn add_seconds(self, seconds: i64) -> Timestamp {
		Timestamp(self.0.saturating_add(seconds))
	}

	/// Adds a duration, rounding partial seconds up so an entry never expires early
	pub fn add_duration(self, duration: Duration) -> Timestamp {
		let mut secs = duration.as_secs();
		if duration.subsec_nanos() > 0 {
			secs = secs.saturating_add(1);
		}
		self.add_seconds(i64::try_from(secs).unwrap_or(i64::MAX))
	}
}

impl std::fmt::Display for Timestamp {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl Serialize for Timestamp {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_i64(self.0)
	}
}

impl<'de> Deserialize<'de> for Timestamp {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(Timestamp(i64::deserialize(deserializer)?))
	}
}


// vim: ts=4
