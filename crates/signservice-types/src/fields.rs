//! Certificate subject field names and their standardized identifiers
//!
//! Read-only lookup tables used by settings assemblers: canonical field name to
//! X.500 / PKIX attribute OID, to attribute classification, and to the default
//! SAML attribute names requested for the field.

use serde::{Deserialize, Serialize};

pub const COUNTRY: &str = "country";
pub const SERIALNUMBER: &str = "serialnumber";
pub const SURNAME: &str = "surname";
pub const GIVENNAME: &str = "givenname";
pub const EMAIL: &str = "email";
pub const EMAIL_ADDRESS: &str = "emailaddress";
pub const COMMONNAME: &str = "commonname";
pub const LOCALITY: &str = "localityname";
pub const ORGANISATION: &str = "organisation";
pub const ORGANISATIONUNIT: &str = "organisationunit";
/// Spelling is part of the configuration format
pub const ORGANISATIONID: &str = "organsiationid";
pub const INITIALS: &str = "initials";
pub const PSEUDONYM: &str = "pseudonym";
pub const STATE: &str = "state";
pub const STREET: &str = "street";
pub const TITLE: &str = "title";
pub const TELEPHONENUMBER: &str = "telephonenumber";
pub const UNIQUEIDENTIFIER: &str = "uniqueidentifier";
pub const DATEOFBIRTH: &str = "dateofbirth";
pub const PLACEOFBIRTH: &str = "placeofbirth";
pub const NAMEATBIRTH: &str = "nameatbirth";
pub const GENDER: &str = "gender";
pub const COUNTRYOFCITIZENSHIP: &str = "countryofcitizenship";
pub const COUNTRYOFRESIDENCE: &str = "countryofresidence";

/// Prefix of OID-based SAML attribute names
pub const OID_URI: &str = "urn:oid:";

/// Where a certificate attribute is placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeType {
	/// Relative Distinguished Name (subject DN)
	#[serde(rename = "rdn")]
	Rdn,
	/// Subject Alternative Name extension
	#[serde(rename = "san")]
	San,
	/// Subject Directory Attributes extension
	#[serde(rename = "sda")]
	Sda,
}

impl AttributeType {
	pub fn as_str(self) -> &'static str {
		match self {
			AttributeType::Rdn => "rdn",
			AttributeType::San => "san",
			AttributeType::Sda => "sda",
		}
	}
}

impl std::fmt::Display for AttributeType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// One row of the field table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
	pub name: &'static str,
	pub oid: &'static str,
	pub attribute_type: AttributeType,
	pub saml_attributes: &'static [&'static str],
}

const fn field(
	name: &'static str,
	oid: &'static str,
	attribute_type: AttributeType,
	saml_attributes: &'static [&'static str],
) -> FieldSpec {
	FieldSpec { name, oid, attribute_type, saml_attributes }
}

use AttributeType::{Rdn, San, Sda};

pub static FIELDS: &[FieldSpec] = &[
	field(COMMONNAME, "2.5.4.3", Rdn, &["urn:oid:2.5.4.3", "urn:oid:2.16.840.1.113730.3.1.241"]),
	field(
		SERIALNUMBER,
		"2.5.4.5",
		Rdn,
		&["urn:oid:2.5.4.5", "urn:oid:1.2.752.29.4.13", "urn:oid:1.2.752.201.3.4"],
	),
	field(SURNAME, "2.5.4.4", Rdn, &["urn:oid:2.5.4.4"]),
	field(COUNTRY, "2.5.4.6", Rdn, &["urn:oid:2.5.4.6"]),
	field(LOCALITY, "2.5.4.7", Rdn, &["urn:oid:2.5.4.7"]),
	field(STATE, "2.5.4.8", Rdn, &["urn:oid:2.5.4.8"]),
	field(STREET, "2.5.4.9", Rdn, &["urn:oid:2.5.4.9", "urn:oid:1.2.752.201.3.9"]),
	field(ORGANISATION, "2.5.4.10", Rdn, &["urn:oid:2.5.4.10"]),
	field(ORGANISATIONUNIT, "2.5.4.11", Rdn, &["urn:oid:2.5.4.11", "urn:oid:1.2.752.201.3.7"]),
	field(ORGANISATIONID, "2.5.4.97", Rdn, &["urn:oid:2.5.4.97"]),
	field(TITLE, "2.5.4.12", Rdn, &["urn:oid:2.5.4.12"]),
	field(GIVENNAME, "2.5.4.42", Rdn, &["urn:oid:2.5.4.42"]),
	field(INITIALS, "2.5.4.43", Rdn, &["urn:oid:2.5.4.43"]),
	field(PSEUDONYM, "2.5.4.65", Rdn, &["urn:oid:2.5.4.65", "urn:oid:1.2.752.201.3.5"]),
	field(DATEOFBIRTH, "1.3.6.1.5.5.7.9.1", Sda, &["urn:oid:1.3.6.1.5.5.7.9.1"]),
	field(PLACEOFBIRTH, "1.3.6.1.5.5.7.9.2", Sda, &["urn:oid:1.3.6.1.5.5.7.9.2"]),
	field(GENDER, "1.3.6.1.5.5.7.9.3", Sda, &["urn:oid:1.3.6.1.5.5.7.9.3"]),
	field(COUNTRYOFCITIZENSHIP, "1.3.6.1.5.5.7.9.4", Sda, &["urn:oid:1.3.6.1.5.5.7.9.4"]),
	field(COUNTRYOFRESIDENCE, "1.3.6.1.5.5.7.9.5", Sda, &["urn:oid:1.3.6.1.5.5.7.9.5"]),
	field(EMAIL, "0.9.2342.19200300.100.1.3", San, &["urn:oid:0.9.2342.19200300.100.1.3"]),
	field(EMAIL_ADDRESS, "0.9.2342.19200300.100.1.3", Rdn, &["urn:oid:0.9.2342.19200300.100.1.3"]),
	field(UNIQUEIDENTIFIER, "2.5.4.45", Rdn, &["urn:oid:2.5.4.45", "urn:oid:1.2.752.201.3.2"]),
	field(NAMEATBIRTH, "1.3.36.8.3.14", Sda, &["urn:oid:1.2.752.201.3.8"]),
	field(TELEPHONENUMBER, "2.5.4.20", Rdn, &["urn:oid:2.5.4.20"]),
];

/// Table row for a canonical field name (exact match)
pub fn lookup(name: &str) -> Option<&'static FieldSpec> {
	FIELDS.iter().find(|spec| spec.name == name)
}

pub fn attribute_oid(name: &str) -> Option<&'static str> {
	lookup(name).map(|spec| spec.oid)
}

pub fn attribute_type(name: &str) -> Option<AttributeType> {
	lookup(name).map(|spec| spec.attribute_type)
}

/// Default SAML attribute names for a field; empty for unknown fields
pub fn default_saml_attributes(name: &str) -> &'static [&'static str] {
	lookup(name).map_or(&[], |spec| spec.saml_attributes)
}


// vim: ts=4
