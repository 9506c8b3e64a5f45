//! Untyped configuration values as received from a configuration source
//!
//! A configuration source (file, environment, remote management) produces a
//! [`ConfigMap`] of [`RawValue`]s. The coercion engine turns individual entries
//! into typed values; this module only carries the representation.

use std::collections::BTreeMap;

use crate::prelude::*;

/// A configuration value before coercion.
///
/// An empty `Map` is semantically the same as `Absent`; see [`RawValue::is_absent`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawValue {
	#[default]
	Absent,
	Str(String),
	Bool(bool),
	Int(i32),
	Long(i64),
	Float(f64),
	/// Elements are kept untyped so that a null element stays observable
	List(Vec<RawValue>),
	Map(ConfigMap),
}

impl RawValue {
	pub fn empty_map() -> Self {
		RawValue::Map(ConfigMap::new())
	}

	/// Absent or an empty mapping
	pub fn is_absent(&self) -> bool {
		match self {
			RawValue::Absent => true,
			RawValue::Map(map) => map.is_empty(),
			_ => false,
		}
	}

	/// Get the type name for error messages
	pub fn type_name(&self) -> &'static str {
		match self {
			RawValue::Absent => "absent",
			RawValue::Str(_) => "string",
			RawValue::Bool(_) => "boolean",
			RawValue::Int(_) => "integer",
			RawValue::Long(_) => "long",
			RawValue::Float(_) => "float",
			RawValue::List(_) => "list",
			RawValue::Map(_) => "map",
		}
	}

	pub fn from_json(value: serde_json::Value) -> RawValue {
		use serde_json::Value;

		match value {
			Value::Null => RawValue::Absent,
			Value::Bool(b) => RawValue::Bool(b),
			Value::Number(n) => {
				if let Some(i) = n.as_i64() {
					i32::try_from(i).map_or(RawValue::Long(i), RawValue::Int)
				} else {
					RawValue::Float(n.as_f64().unwrap_or(f64::NAN))
				}
			}
			Value::String(s) => RawValue::Str(s),
			Value::Array(items) => RawValue::List(items.into_iter().map(RawValue::from_json).collect()),
			Value::Object(entries) => RawValue::Map(
				entries.into_iter().map(|(k, v)| (k, RawValue::from_json(v))).collect(),
			),
		}
	}
}

impl From<&str> for RawValue {
	fn from(value: &str) -> Self {
		RawValue::Str(value.to_string())
	}
}

impl From<String> for RawValue {
	fn from(value: String) -> Self {
		RawValue::Str(value)
	}
}

impl From<bool> for RawValue {
	fn from(value: bool) -> Self {
		RawValue::Bool(value)
	}
}

impl From<i32> for RawValue {
	fn from(value: i32) -> Self {
		RawValue::Int(value)
	}
}

impl From<i64> for RawValue {
	fn from(value: i64) -> Self {
		RawValue::Long(value)
	}
}

impl From<f64> for RawValue {
	fn from(value: f64) -> Self {
		RawValue::Float(value)
	}
}

impl From<ConfigMap> for RawValue {
	fn from(value: ConfigMap) -> Self {
		RawValue::Map(value)
	}
}

impl<T: Into<RawValue>> From<Vec<T>> for RawValue {
	fn from(value: Vec<T>) -> Self {
		RawValue::List(value.into_iter().map(Into::into).collect())
	}
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(RawValue::Absent, Into::into)
	}
}

static ABSENT: RawValue = RawValue::Absent;
static EMPTY_SECTION: ConfigMap = ConfigMap(BTreeMap::new());

/// String-keyed mapping of raw configuration values
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigMap(BTreeMap<String, RawValue>);

impl ConfigMap {
	pub fn new() -> Self {
		Self(BTreeMap::new())
	}

	/// Builder-style insert
	pub fn with(mut self, key: impl Into<String>, value: impl Into<RawValue>) -> Self {
		self.0.insert(key.into(), value.into());
		self
	}

	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<RawValue>) -> Option<RawValue> {
		self.0.insert(key.into(), value.into())
	}

	/// Value for `key`, or `RawValue::Absent` if there is no entry
	pub fn get(&self, key: &str) -> &RawValue {
		self.0.get(key).unwrap_or(&ABSENT)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Nested mapping under `key`; an empty mapping when absent or not a mapping
	pub fn section(&self, key: &str) -> &ConfigMap {
		match self.0.get(key) {
			Some(RawValue::Map(map)) => map,
			_ => &EMPTY_SECTION,
		}
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Build from a JSON document. The top level must be an object (or null).
	pub fn from_json(value: serde_json::Value) -> SsResult<ConfigMap> {
		match RawValue::from_json(value) {
			RawValue::Map(map) => Ok(map),
			RawValue::Absent => Ok(ConfigMap::new()),
			other => Err(Error::invalid_argument(format!(
				"Configuration root must be a mapping, got {}",
				other.type_name()
			))),
		}
	}

	/// Parse a YAML document
	pub fn from_yaml_str(yaml: &str) -> SsResult<ConfigMap> {
		let value: serde_json::Value = serde_yaml::from_str(yaml)
			.map_err(|e| Error::invalid_argument_with(format!("Invalid YAML configuration: {}", e), e))?;
		Self::from_json(value)
	}

	/// Flat string pairs, as produced by environment or properties sources
	pub fn from_properties<I, K, V>(pairs: I) -> ConfigMap
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		pairs.into_iter().map(|(k, v)| (k.into(), RawValue::Str(v.into()))).collect()
	}
}

impl<K: Into<String>> FromIterator<(K, RawValue)> for ConfigMap {
	fn from_iter<I: IntoIterator<Item = (K, RawValue)>>(iter: I) -> Self {
		Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
	}
}


// vim: ts=4
