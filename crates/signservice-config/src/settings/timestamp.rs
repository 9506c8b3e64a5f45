//! Time-stamp authority client settings

use serde::{Deserialize, Serialize};

use crate::coerce::{parse_integer_with, parse_string, parse_string_with};
use crate::keystore::{path_extension, resolve_keystore_type};
use crate::prelude::*;

pub const DEFAULT_SSL_PROTOCOL: &str = "TLSv1.2";
pub const DEFAULT_PROXY_SCHEME: &str = "http";
pub const DEFAULT_PROXY_PORT: i32 = 80;

fn message(field: &str) -> String {
	format!("Invalid value for '{}' in timeStamp configuration", field)
}

fn optional_string(config: &ConfigMap, field: &str) -> SsResult<Option<String>> {
	parse_string_with(config.get(field), &message(field), false, None)
}

/// Store type from the explicit setting or the store path extension
fn store_type(
	config: &ConfigMap,
	type_field: &str,
	path: Option<&str>,
) -> SsResult<Option<String>> {
	let explicit = optional_string(config, type_field)?;
	resolve_keystore_type(explicit.as_deref(), path.and_then(path_extension))
		.map_err(|e| Error::invalid_argument_with(message(type_field), e))
}

/// Settings for connecting to a time-stamp authority
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeStampSettings {
	pub url: String,
	pub username: Option<String>,
	pub password: Option<String>,
	pub key_store_path: Option<String>,
	pub key_store_password: Option<String>,
	pub key_store_type: Option<String>,
	pub trust_store_path: Option<String>,
	pub trust_store_password: Option<String>,
	pub trust_store_type: Option<String>,
	pub proxy_host: Option<String>,
	pub proxy_port: i32,
	pub proxy_scheme: String,
	pub proxy_user: Option<String>,
	pub proxy_password: Option<String>,
	pub proxy_excluded_hosts: Option<String>,
	pub ssl_protocol: String,
}

impl TimeStampSettings {
	/// Assemble from the `timeStamp` configuration section. `url` is required.
	pub fn from_config(config: &ConfigMap) -> SsResult<Self> {
		let url = parse_string(config.get("url"), &message("url"))?;

		let key_store_path = optional_string(config, "keyStorePath")?;
		let trust_store_path = optional_string(config, "trustStorePath")?;
		let key_store_type = store_type(config, "keyStoreType", key_store_path.as_deref())?;
		let trust_store_type = store_type(config, "trustStoreType", trust_store_path.as_deref())?;

		let settings = TimeStampSettings {
			username: optional_string(config, "username")?,
			password: optional_string(config, "password")?,
			key_store_password: optional_string(config, "keyStorePassword")?,
			trust_store_password: optional_string(config, "trustStorePassword")?,
			key_store_path,
			key_store_type,
			trust_store_path,
			trust_store_type,
			proxy_host: optional_string(config, "proxyHost")?,
			proxy_port: parse_integer_with(
				config.get("proxyPort"),
				&message("proxyPort"),
				false,
				Some(DEFAULT_PROXY_PORT),
			)?
			.unwrap_or(DEFAULT_PROXY_PORT),
			proxy_scheme: parse_string_with(
				config.get("proxyScheme"),
				&message("proxyScheme"),
				false,
				Some(DEFAULT_PROXY_SCHEME.to_string()),
			)?
			.unwrap_or_else(|| DEFAULT_PROXY_SCHEME.to_string()),
			proxy_user: optional_string(config, "proxyUser")?,
			proxy_password: optional_string(config, "proxyPassword")?,
			proxy_excluded_hosts: optional_string(config, "proxyExcludedHosts")?,
			ssl_protocol: parse_string_with(
				config.get("sslProtocol"),
				&message("sslProtocol"),
				false,
				Some(DEFAULT_SSL_PROTOCOL.to_string()),
			)?
			.unwrap_or_else(|| DEFAULT_SSL_PROTOCOL.to_string()),
			url,
		};

		debug!(url = %settings.url, proxy = settings.proxy_host.is_some(), "time-stamp settings loaded");
		Ok(settings)
	}
}

// vim: ts=4
