// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fmt;

use serde::{Deserialize, Serialize};

use super::encode::query_encode;
use super::render::render_filter;
use super::value::FilterValue;
use crate::error::Result;

/// Comparison operators defined by the SCIM filter grammar.
///
/// The vocabulary is fixed by the protocol; keywords render as the uppercase
/// operator name (`EQ`, `NE`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CompareOp {
	Eq,
	Ne,
	Co,
	Sw,
	Ew,
	Gt,
	Ge,
	Lt,
	Le,
}

impl CompareOp {
	pub fn keyword(&self) -> &'static str {
		match self {
			CompareOp::Eq => "EQ",
			CompareOp::Ne => "NE",
			CompareOp::Co => "CO",
			CompareOp::Sw => "SW",
			CompareOp::Ew => "EW",
			CompareOp::Gt => "GT",
			CompareOp::Ge => "GE",
			CompareOp::Lt => "LT",
			CompareOp::Le => "LE",
		}
	}
}

impl fmt::Display for CompareOp {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.keyword())
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogicalOp {
	And,
	Or,
}

impl LogicalOp {
	pub fn keyword(&self) -> &'static str {
		match self {
			LogicalOp::And => "AND",
			LogicalOp::Or => "OR",
		}
	}
}

impl fmt::Display for LogicalOp {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.keyword())
	}
}

/// A SCIM filter expression tree.
///
/// Either an atomic attribute comparison or a binary AND/OR compound of two
/// sub-expressions. The tree is immutable once built; grouping is decided by
/// the renderer (compounds are always parenthesized), so nesting depth never
/// changes the meaning of a render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Filter {
	Compare {
		attr_path: String,
		op: CompareOp,
		value: FilterValue,
	},
	Logical {
		op: LogicalOp,
		left: Box<Filter>,
		right: Box<Filter>,
	},
}

impl Filter {
	/// Atomic predicate: `<attr_path> <op> <value>`.
	pub fn compare(attr_path: impl Into<String>, op: CompareOp, value: impl Into<FilterValue>) -> Self {
		Filter::Compare {
			attr_path: attr_path.into(),
			op,
			value: value.into(),
		}
	}

	/// Null test: `<attr_path> EQ null`.
	///
	/// EQ is the only operator the protocol defines against null; building a
	/// null comparison with any other operator fails validation at render.
	pub fn equal_null(attr_path: impl Into<String>) -> Self {
		Filter::compare(attr_path, CompareOp::Eq, FilterValue::Null)
	}

	pub fn and(self, other: Filter) -> Self {
		Filter::Logical {
			op: LogicalOp::And,
			left: Box::new(self),
			right: Box::new(other),
		}
	}

	pub fn or(self, other: Filter) -> Self {
		Filter::Logical {
			op: LogicalOp::Or,
			left: Box::new(self),
			right: Box::new(other),
		}
	}

	/// Renders the expression to filter-grammar text, e.g.
	/// `userName EQ "bjensen"`.
	pub fn render(&self) -> Result<String> {
		render_filter(self)
	}

	/// Renders and percent-encodes in one pass, producing a string ready to
	/// assign to the `filter=` query parameter. Encoding happens exactly once.
	pub fn build(&self) -> Result<String> {
		Ok(query_encode(&render_filter(self)?))
	}
}
