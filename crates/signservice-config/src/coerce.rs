//! Typed coercion of raw configuration values
//!
//! Every target type follows the same algorithm:
//!
//! 1. A value whose representation already is the target type is returned as
//!    is. Numeric widening is allowed: integer to long or float, long to float.
//! 2. A string is parsed. A blank string counts as absent. A string that does
//!    not parse is a failure, never a reason to fall back to the default.
//! 3. An absent value (or an empty mapping) fails if the value is required and
//!    yields the default otherwise.
//! 4. Anything else fails.
//!
//! All failures are [`Error::InvalidArgument`] carrying the caller's message;
//! the parse error or a description of the mismatch is attached as the source.
//!
//! Each target type has two entry points: `parse_<type>(value, message)` which
//! fails if the value is absent, and `parse_<type>_with(value, message,
//! required, default)` which applies a required/default policy.

use crate::prelude::*;

/// Why a present value could not be converted
#[derive(Debug)]
pub enum Mismatch {
	/// Representation cannot be converted to the target type
	Unconvertible(String),
	/// A string failed to parse
	Parse(BoxError),
}

/// Target types of the coercion engine.
pub trait FromRawValue: Sized {
	/// Convert a present, non-empty-mapping value.
	///
	/// `Ok(None)` means the value counts as absent (blank strings).
	fn from_raw(value: &RawValue) -> Result<Option<Self>, Mismatch>;
}

fn unconvertible<T>(value: &RawValue, target: &str) -> Result<Option<T>, Mismatch> {
	Err(Mismatch::Unconvertible(format!("cannot convert {} to {}", value.type_name(), target)))
}

fn is_blank(s: &str) -> bool {
	s.trim().is_empty()
}

impl FromRawValue for i32 {
	fn from_raw(value: &RawValue) -> Result<Option<Self>, Mismatch> {
		match value {
			RawValue::Int(i) => Ok(Some(*i)),
			RawValue::Str(s) if is_blank(s) => Ok(None),
			RawValue::Str(s) => s.parse::<i32>().map(Some).map_err(|e| Mismatch::Parse(Box::new(e))),
			other => unconvertible(other, "integer"),
		}
	}
}

impl FromRawValue for i64 {
	fn from_raw(value: &RawValue) -> Result<Option<Self>, Mismatch> {
		match value {
			RawValue::Long(l) => Ok(Some(*l)),
			RawValue::Int(i) => Ok(Some(i64::from(*i))),
			RawValue::Str(s) if is_blank(s) => Ok(None),
			RawValue::Str(s) => s.parse::<i64>().map(Some).map_err(|e| Mismatch::Parse(Box::new(e))),
			other => unconvertible(other, "long"),
		}
	}
}

impl FromRawValue for f64 {
	#[allow(clippy::cast_precision_loss)]
	fn from_raw(value: &RawValue) -> Result<Option<Self>, Mismatch> {
		match value {
			RawValue::Float(f) => Ok(Some(*f)),
			RawValue::Int(i) => Ok(Some(f64::from(*i))),
			RawValue::Long(l) => Ok(Some(*l as f64)),
			RawValue::Str(s) if is_blank(s) => Ok(None),
			RawValue::Str(s) => s.trim().parse::<f64>().map(Some).map_err(|e| Mismatch::Parse(Box::new(e))),
			other => unconvertible(other, "float"),
		}
	}
}

impl FromRawValue for bool {
	fn from_raw(value: &RawValue) -> Result<Option<Self>, Mismatch> {
		match value {
			RawValue::Bool(b) => Ok(Some(*b)),
			RawValue::Str(s) if is_blank(s) => Ok(None),
			RawValue::Str(s) => match s.trim().to_ascii_lowercase().as_str() {
				"true" => Ok(Some(true)),
				"false" => Ok(Some(false)),
				_ => Err(Mismatch::Parse(
					format!("expected 'true' or 'false', got '{}'", s).into(),
				)),
			},
			other => unconvertible(other, "boolean"),
		}
	}
}

impl FromRawValue for String {
	fn from_raw(value: &RawValue) -> Result<Option<Self>, Mismatch> {
		match value {
			RawValue::Str(s) if is_blank(s) => Ok(None),
			RawValue::Str(s) => Ok(Some(s.clone())),
			other => unconvertible(other, "string"),
		}
	}
}

impl FromRawValue for Vec<String> {
	fn from_raw(value: &RawValue) -> Result<Option<Self>, Mismatch> {
		match value {
			RawValue::List(items) => items
				.iter()
				.enumerate()
				.map(|(idx, item)| match item {
					RawValue::Str(s) if !is_blank(s) => Ok(s.clone()),
					RawValue::Str(_) => {
						Err(Mismatch::Unconvertible(format!("list element {} is blank", idx)))
					}
					other => Err(Mismatch::Unconvertible(format!(
						"list element {} is {}, expected string",
						idx,
						other.type_name()
					))),
				})
				.collect::<Result<Vec<_>, _>>()
				.map(Some),
			RawValue::Str(s) if is_blank(s) => Ok(None),
			other => unconvertible(other, "list of strings"),
		}
	}
}

/// Coerce `value` under a required/default policy.
///
/// Returns the default (which may be `None`) only when the value is absent;
/// a present but malformed value always fails.
pub fn coerce<T: FromRawValue>(
	value: &RawValue,
	error_message: &str,
	required: bool,
	default: Option<T>,
) -> SsResult<Option<T>> {
	let converted = if value.is_absent() {
		None
	} else {
		T::from_raw(value).map_err(|mismatch| match mismatch {
			Mismatch::Unconvertible(reason) => Error::invalid_argument_with(error_message, reason),
			Mismatch::Parse(cause) => Error::invalid_argument_with(error_message, cause),
		})?
	};

	match converted {
		Some(v) => Ok(Some(v)),
		None if required => Err(Error::invalid_argument_with(error_message, "value is missing")),
		None => Ok(default),
	}
}

/// Coerce a value that must be present
pub fn coerce_required<T: FromRawValue>(value: &RawValue, error_message: &str) -> SsResult<T> {
	coerce(value, error_message, true, None)?
		.ok_or_else(|| Error::invalid_argument_with(error_message, "value is missing"))
}

pub fn parse_integer(value: &RawValue, error_message: &str) -> SsResult<i32> {
	coerce_required(value, error_message)
}

pub fn parse_integer_with(
	value: &RawValue,
	error_message: &str,
	required: bool,
	default: Option<i32>,
) -> SsResult<Option<i32>> {
	coerce(value, error_message, required, default)
}

pub fn parse_long(value: &RawValue, error_message: &str) -> SsResult<i64> {
	coerce_required(value, error_message)
}

pub fn parse_long_with(
	value: &RawValue,
	error_message: &str,
	required: bool,
	default: Option<i64>,
) -> SsResult<Option<i64>> {
	coerce(value, error_message, required, default)
}

pub fn parse_float(value: &RawValue, error_message: &str) -> SsResult<f64> {
	coerce_required(value, error_message)
}

pub fn parse_float_with(
	value: &RawValue,
	error_message: &str,
	required: bool,
	default: Option<f64>,
) -> SsResult<Option<f64>> {
	coerce(value, error_message, required, default)
}

pub fn parse_boolean(value: &RawValue, error_message: &str) -> SsResult<bool> {
	coerce_required(value, error_message)
}

pub fn parse_boolean_with(
	value: &RawValue,
	error_message: &str,
	required: bool,
	default: Option<bool>,
) -> SsResult<Option<bool>> {
	coerce(value, error_message, required, default)
}

pub fn parse_string(value: &RawValue, error_message: &str) -> SsResult<String> {
	coerce_required(value, error_message)
}

pub fn parse_string_with(
	value: &RawValue,
	error_message: &str,
	required: bool,
	default: Option<String>,
) -> SsResult<Option<String>> {
	coerce(value, error_message, required, default)
}

/// Every element must be a non-blank string; an empty list is rejected when required.
pub fn parse_list_of_string(value: &RawValue, error_message: &str) -> SsResult<Vec<String>> {
	parse_list_of_string_with(value, error_message, true, None)?
		.ok_or_else(|| Error::invalid_argument_with(error_message, "value is missing"))
}

pub fn parse_list_of_string_with(
	value: &RawValue,
	error_message: &str,
	required: bool,
	default: Option<Vec<String>>,
) -> SsResult<Option<Vec<String>>> {
	let list = coerce(value, error_message, required, default)?;
	if required && list.as_ref().is_some_and(Vec::is_empty) {
		return Err(Error::invalid_argument_with(error_message, "list is empty"));
	}
	Ok(list)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::error::Error as _;

	const MSG: &str = "Invalid value for 'field' in test configuration";

	fn assert_invalid<T: std::fmt::Debug>(res: SsResult<T>) {
		match res {
			Err(err) => {
				assert_eq!(err.kind(), ErrorKind::InvalidArgument);
				assert_eq!(err.to_string(), MSG);
			}
			Ok(v) => panic!("expected failure, got {:?}", v),
		}
	}

	#[test]
	fn test_integer_from_string() {
		assert_eq!(parse_integer(&"42".into(), MSG).ok(), Some(42));
		assert_eq!(parse_integer(&"-7".into(), MSG).ok(), Some(-7));
		assert_eq!(parse_integer(&RawValue::Int(5), MSG).ok(), Some(5));
	}

	#[test]
	fn test_integer_parse_failure_ignores_default() {
		assert_invalid(parse_integer_with(&"abc".into(), MSG, false, Some(1)));
		assert_invalid(parse_integer_with(&" 42".into(), MSG, false, None));
	}

	#[test]
	fn test_integer_rejects_long_and_float() {
		assert_invalid(parse_integer_with(&RawValue::Long(1), MSG, false, Some(1)));
		assert_invalid(parse_integer_with(&RawValue::Float(1.0), MSG, false, None));
		assert_invalid(parse_integer_with(&"99999999999".into(), MSG, false, None));
	}

	#[test]
	fn test_parse_failure_keeps_cause() {
		let err = parse_integer(&"abc".into(), MSG).err();
		let cause = err.as_ref().and_then(|e| e.source()).map(ToString::to_string);
		assert_eq!(cause.as_deref(), Some("invalid digit found in string"));
	}

	#[test]
	fn test_long_widening() {
		assert_eq!(parse_long(&RawValue::Int(3), MSG).ok(), Some(3));
		assert_eq!(parse_long(&RawValue::Long(5_000_000_000), MSG).ok(), Some(5_000_000_000));
		assert_eq!(parse_long(&"5000000000".into(), MSG).ok(), Some(5_000_000_000));
		assert_invalid(parse_long_with(&RawValue::Float(1.5), MSG, false, None));
	}

	#[test]
	fn test_float_widening() {
		assert_eq!(parse_float(&RawValue::Int(5), MSG).ok(), Some(5.0));
		assert_eq!(parse_float(&RawValue::Long(7), MSG).ok(), Some(7.0));
		assert_eq!(parse_float(&RawValue::Float(2.5), MSG).ok(), Some(2.5));
		assert_eq!(parse_float(&"9.5".into(), MSG).ok(), Some(9.5));
		assert_invalid(parse_float_with(&"nine".into(), MSG, false, Some(1.0)));
	}

	#[test]
	fn test_boolean() {
		assert_eq!(parse_boolean(&"TRUE".into(), MSG).ok(), Some(true));
		assert_eq!(parse_boolean(&"  False ".into(), MSG).ok(), Some(false));
		assert_eq!(parse_boolean(&RawValue::Bool(true), MSG).ok(), Some(true));
		assert_invalid(parse_boolean_with(&"yes".into(), MSG, false, Some(true)));
		assert_invalid(parse_boolean_with(&RawValue::Int(1), MSG, false, Some(true)));
	}

	#[test]
	fn test_string_verbatim() {
		assert_eq!(parse_string(&" padded ".into(), MSG).ok().as_deref(), Some(" padded "));
		assert_invalid(parse_string_with(&RawValue::Int(1), MSG, false, None));
		assert_invalid(parse_string_with(&RawValue::Bool(true), MSG, false, None));
	}

	#[test]
	fn test_blank_string_is_absent() {
		assert_eq!(parse_integer_with(&"".into(), MSG, false, Some(80)).ok(), Some(Some(80)));
		assert_eq!(parse_boolean_with(&"   ".into(), MSG, false, Some(true)).ok(), Some(Some(true)));
		assert_eq!(
			parse_string_with(&" ".into(), MSG, false, Some("http".into())).ok(),
			Some(Some("http".to_string()))
		);
		assert_invalid(parse_string_with(&"".into(), MSG, true, Some("http".into())));
	}

	#[test]
	fn test_absent_returns_default_including_none() {
		let absent = RawValue::Absent;
		let empty = RawValue::empty_map();
		for value in [&absent, &empty] {
			assert_eq!(parse_integer_with(value, MSG, false, Some(1)).ok(), Some(Some(1)));
			assert_eq!(parse_integer_with(value, MSG, false, None).ok(), Some(None));
			assert_eq!(parse_long_with(value, MSG, false, Some(2)).ok(), Some(Some(2)));
			assert_eq!(parse_float_with(value, MSG, false, Some(0.5)).ok(), Some(Some(0.5)));
			assert_eq!(parse_boolean_with(value, MSG, false, Some(false)).ok(), Some(Some(false)));
			assert_eq!(parse_string_with(value, MSG, false, None).ok(), Some(None));
			assert_eq!(
				parse_list_of_string_with(value, MSG, false, Some(vec!["d".into()])).ok(),
				Some(Some(vec!["d".to_string()]))
			);
		}
	}

	#[test]
	fn test_absent_required_fails_despite_default() {
		let absent = RawValue::Absent;
		assert_invalid(parse_integer_with(&absent, MSG, true, Some(1)));
		assert_invalid(parse_long_with(&absent, MSG, true, Some(1)));
		assert_invalid(parse_float_with(&absent, MSG, true, Some(1.0)));
		assert_invalid(parse_boolean_with(&absent, MSG, true, Some(true)));
		assert_invalid(parse_string_with(&absent, MSG, true, Some("x".into())));
		assert_invalid(parse_list_of_string_with(&absent, MSG, true, Some(vec!["x".into()])));
		assert_invalid(parse_integer(&RawValue::empty_map(), MSG));
	}

	#[test]
	fn test_non_empty_map_is_unconvertible() {
		let map = RawValue::Map(ConfigMap::new().with("a", "b"));
		assert_invalid(parse_string_with(&map, MSG, false, Some("x".into())));
		assert_invalid(parse_integer_with(&map, MSG, false, Some(1)));
	}

	#[test]
	fn test_list_of_string() {
		let list = RawValue::from(vec!["a", "b"]);
		assert_eq!(parse_list_of_string(&list, MSG).ok(), Some(vec!["a".to_string(), "b".to_string()]));

		let with_null = RawValue::List(vec!["a".into(), RawValue::Absent]);
		assert_invalid(parse_list_of_string_with(&with_null, MSG, false, None));

		let with_blank = RawValue::from(vec!["a", " "]);
		assert_invalid(parse_list_of_string_with(&with_blank, MSG, false, None));

		let with_int = RawValue::List(vec!["a".into(), RawValue::Int(1)]);
		assert_invalid(parse_list_of_string_with(&with_int, MSG, false, None));
	}

	#[test]
	fn test_empty_list_policy() {
		let empty = RawValue::List(vec![]);
		assert_invalid(parse_list_of_string_with(&empty, MSG, true, None));
		assert_invalid(parse_list_of_string(&empty, MSG));
		assert_eq!(parse_list_of_string_with(&empty, MSG, false, None).ok(), Some(Some(vec![])));
	}

	#[test]
	fn test_list_rejects_string_source() {
		assert_invalid(parse_list_of_string_with(&"a,b".into(), MSG, false, None));
		assert_eq!(parse_list_of_string_with(&"".into(), MSG, false, None).ok(), Some(None));
	}
}

// vim: ts=4
