// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A typed literal on the right-hand side of a comparison.
///
/// Each kind has exactly one textual rendering in the filter grammar (see
/// [`FilterValue::to_literal`]). Strings are always quoted; booleans and
/// numbers never are; null is the bare token `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterValue {
	String(String),
	Boolean(bool),
	Integer(i64),
	Decimal(f64),
	Date(NaiveDate),
	DateTime(DateTime<Utc>),
	Null,
}

impl FilterValue {
	/// Value kind name used in validation errors.
	pub fn kind(&self) -> &'static str {
		match self {
			FilterValue::String(_) => "string",
			FilterValue::Boolean(_) => "boolean",
			FilterValue::Integer(_) => "integer",
			FilterValue::Decimal(_) => "decimal",
			FilterValue::Date(_) => "date",
			FilterValue::DateTime(_) => "dateTime",
			FilterValue::Null => "null",
		}
	}

	/// Whether the kind has a total order in the protocol, i.e. whether
	/// `GT`/`GE`/`LT`/`LE` are defined against it.
	pub fn is_ordered(&self) -> bool {
		!matches!(self, FilterValue::Boolean(_) | FilterValue::Null)
	}

	/// Canonical literal text for the filter grammar.
	///
	/// String contents are inserted verbatim between the quotes; the grammar
	/// has no escape sequence, so a value containing `"` is the caller's
	/// responsibility.
	pub fn to_literal(&self) -> String {
		match self {
			FilterValue::String(s) => format!("\"{}\"", s),
			FilterValue::Boolean(b) => b.to_string(),
			FilterValue::Integer(n) => n.to_string(),
			FilterValue::Decimal(d) => d.to_string(),
			FilterValue::Date(d) => format!("\"{}\"", format_date(*d)),
			FilterValue::DateTime(ts) => format!("\"{}\"", format_date_time(*ts)),
			FilterValue::Null => "null".to_string(),
		}
	}
}

/// Canonical SCIM date text, `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
	date.format("%Y-%m-%d").to_string()
}

/// Canonical SCIM dateTime text, `YYYY-MM-DDThh:mm:ss.sssZ`.
pub fn format_date_time(ts: DateTime<Utc>) -> String {
	ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl From<&str> for FilterValue {
	fn from(value: &str) -> Self {
		FilterValue::String(value.to_string())
	}
}

impl From<String> for FilterValue {
	fn from(value: String) -> Self {
		FilterValue::String(value)
	}
}

impl From<bool> for FilterValue {
	fn from(value: bool) -> Self {
		FilterValue::Boolean(value)
	}
}

impl From<i32> for FilterValue {
	fn from(value: i32) -> Self {
		FilterValue::Integer(i64::from(value))
	}
}

impl From<i64> for FilterValue {
	fn from(value: i64) -> Self {
		FilterValue::Integer(value)
	}
}

impl From<f64> for FilterValue {
	fn from(value: f64) -> Self {
		FilterValue::Decimal(value)
	}
}

impl From<NaiveDate> for FilterValue {
	fn from(value: NaiveDate) -> Self {
		FilterValue::Date(value)
	}
}

impl From<DateTime<Utc>> for FilterValue {
	fn from(value: DateTime<Utc>) -> Self {
		FilterValue::DateTime(value)
	}
}
