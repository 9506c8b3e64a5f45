//! Key store and trust store type resolution

use serde::{Deserialize, Serialize};

use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyStoreType {
	#[serde(rename = "PKCS12")]
	Pkcs12,
	#[serde(rename = "JKS")]
	Jks,
}

impl KeyStoreType {
	pub fn as_str(self) -> &'static str {
		match self {
			KeyStoreType::Pkcs12 => "PKCS12",
			KeyStoreType::Jks => "JKS",
		}
	}

	/// Type implied by a store file extension
	pub fn from_extension(extension: &str) -> SsResult<KeyStoreType> {
		if extension.eq_ignore_ascii_case("p12") || extension.eq_ignore_ascii_case("pfx") {
			Ok(KeyStoreType::Pkcs12)
		} else if extension.eq_ignore_ascii_case("jks") {
			Ok(KeyStoreType::Jks)
		} else {
			Err(Error::invalid_argument(format!(
				"Unsupported key store filename extension: {}",
				extension
			)))
		}
	}
}

impl std::fmt::Display for KeyStoreType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Store type to use: the explicitly configured one, else the one implied
/// by the file extension. `None` when neither is known.
pub fn resolve_keystore_type(
	explicit_type: Option<&str>,
	file_extension: Option<&str>,
) -> SsResult<Option<String>> {
	if let Some(explicit) = explicit_type {
		return Ok(Some(explicit.to_string()));
	}
	file_extension
		.map(|ext| KeyStoreType::from_extension(ext).map(|t| t.as_str().to_string()))
		.transpose()
}

/// Extension of a store path (text after the last '.' of the file name)
pub fn path_extension(path: &str) -> Option<&str> {
	std::path::Path::new(path).extension().and_then(|ext| ext.to_str())
}


// vim: ts=4
