//! Visible signature appearance settings

use serde::{Deserialize, Serialize};

use crate::coerce::{coerce, FromRawValue};
use crate::color::Color;
use crate::prelude::*;

fn message(field: &str) -> String {
	format!("Invalid value for '{}' in visibleSignature configuration", field)
}

fn or_default<T: FromRawValue>(config: &ConfigMap, field: &str, default: T) -> SsResult<T> {
	let value = coerce(config.get(field), &message(field), false, None)?;
	Ok(value.unwrap_or(default))
}

fn color(config: &ConfigMap, field: &str, default: Color) -> SsResult<Color> {
	match coerce::<String>(config.get(field), &message(field), false, None)? {
		Some(hex) => Color::parse(&hex).map_err(|e| {
			Error::invalid_argument_with(
				format!("Invalid color specified for '{}' in visibleSignature configuration: {}", field, e),
				e,
			)
		}),
		None => Ok(default),
	}
}

/// Appearance of the visible signature stamped on signed documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibleSignatureSettings {
	pub enable: bool,
	pub font: Option<String>,
	pub font_size: f64,
	pub font_color: Color,
	pub background_color: Color,
	pub show_logo: bool,
	pub logo_image: String,
	pub show_headline: bool,
	pub headline_text: String,
	pub signer_label: String,
	pub time_stamp_label: String,
	pub time_stamp_format: String,
	pub text_padding: f64,
}

impl Default for VisibleSignatureSettings {
	fn default() -> Self {
		Self {
			enable: false,
			font: None,
			font_size: 9.0,
			font_color: Color::BLACK,
			background_color: Color::WHITE,
			show_logo: true,
			logo_image: "/visibleSignatures/Default_Logo.png".into(),
			show_headline: true,
			headline_text: "Document Digital Signed".into(),
			signer_label: "Signer".into(),
			time_stamp_label: "Time".into(),
			time_stamp_format: "yyyy-MM-dd HH:mm:ss".into(),
			text_padding: 50.0,
		}
	}
}

impl VisibleSignatureSettings {
	/// Assemble from the `visibleSignature` configuration section. Every
	/// field is optional.
	pub fn from_config(config: &ConfigMap) -> SsResult<Self> {
		let defaults = Self::default();
		Ok(Self {
			enable: or_default(config, "enable", defaults.enable)?,
			font: coerce(config.get("font"), &message("font"), false, defaults.font)?,
			font_size: or_default(config, "fontSize", defaults.font_size)?,
			font_color: color(config, "fontColor", defaults.font_color)?,
			background_color: color(config, "backgroundColor", defaults.background_color)?,
			show_logo: or_default(config, "showLogo", defaults.show_logo)?,
			logo_image: or_default(config, "logoImage", defaults.logo_image)?,
			show_headline: or_default(config, "showHeadline", defaults.show_headline)?,
			headline_text: or_default(config, "headlineText", defaults.headline_text)?,
			signer_label: or_default(config, "signerLabel", defaults.signer_label)?,
			time_stamp_label: or_default(config, "timeStampLabel", defaults.time_stamp_label)?,
			time_stamp_format: or_default(config, "timeStampFormat", defaults.time_stamp_format)?,
			text_padding: or_default(config, "textPadding", defaults.text_padding)?,
		})
	}
}

// vim: ts=4
