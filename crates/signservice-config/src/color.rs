//! Hex color strings used by visible signature settings

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::prelude::*;

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
	pub red: u8,
	pub green: u8,
	pub blue: u8,
	pub alpha: u8,
}

impl Color {
	pub const BLACK: Color = Color::rgb(0, 0, 0);
	pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

	pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
		Self { red, green, blue, alpha: 0xff }
	}

	/// Parse an HTML-style hex color: `#RRGGBB` or `#RRGGBBAA`, `#` optional.
	/// Alpha defaults to fully opaque.
	pub fn parse(input: &str) -> SsResult<Color> {
		let hex = input.strip_prefix('#').unwrap_or(input);
		if hex.len() != 6 && hex.len() != 8 {
			return Err(Error::invalid_argument(format!(
				"Invalid color '{}': expected 6 or 8 hex digits",
				input
			)));
		}

		if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
			return Err(Error::invalid_argument(format!("Invalid color '{}': not a hex value", input)));
		}

		let component = |idx: usize| -> SsResult<u8> {
			u8::from_str_radix(&hex[idx..idx + 2], 16).map_err(|e| {
				Error::invalid_argument_with(format!("Invalid color '{}': not a hex value", input), e)
			})
		};

		Ok(Color {
			red: component(0)?,
			green: component(2)?,
			blue: component(4)?,
			alpha: if hex.len() == 8 { component(6)? } else { 0xff },
		})
	}
}

impl std::fmt::Display for Color {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.red, self.green, self.blue, self.alpha)
	}
}

impl std::str::FromStr for Color {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Color::parse(s)
	}
}

impl Serialize for Color {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for Color {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let s = String::deserialize(deserializer)?;
		Color::parse(&s).map_err(serde::de::Error::custom)
	}
}


// vim: ts=4
