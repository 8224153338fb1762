// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use super::ast::{CompareOp, Filter};
use super::value::FilterValue;
use crate::error::{FilterError, Result};

/// Renders an expression tree to filter-grammar text in one bottom-up pass.
///
/// Atoms render as `<attr> <OP> <value>` with single-space separators;
/// compounds as `(<left> AND|OR <right>)`, parenthesized unconditionally so
/// nesting is associativity-safe. Validation runs before any text is produced
/// for a node, so a failed render yields no partial output.
pub fn render_filter(filter: &Filter) -> Result<String> {
	match filter {
		Filter::Compare {
			attr_path,
			op,
			value,
		} => {
			validate_comparison(attr_path, *op, value)?;
			Ok(format!("{} {} {}", attr_path, op.keyword(), value.to_literal()))
		}
		Filter::Logical { op, left, right } => {
			let left = render_filter(left)?;
			let right = render_filter(right)?;
			Ok(format!("({} {} {})", left, op.keyword(), right))
		}
	}
}

/// Operator/value compatibility per the SCIM grammar.
///
/// - `EQ` is defined for every kind, and is the only operator defined
///   against null.
/// - `NE` is defined for every non-null kind.
/// - `CO`/`SW`/`EW` are substring tests and take strings only.
/// - `GT`/`GE`/`LT`/`LE` take any totally ordered kind: strings, numbers,
///   dates, and dateTimes.
fn validate_comparison(attr_path: &str, op: CompareOp, value: &FilterValue) -> Result<()> {
	if attr_path.is_empty() {
		return Err(FilterError::EmptyAttributePath);
	}

	let supported = match op {
		CompareOp::Eq => true,
		CompareOp::Ne => !matches!(value, FilterValue::Null),
		CompareOp::Co | CompareOp::Sw | CompareOp::Ew => matches!(value, FilterValue::String(_)),
		CompareOp::Gt | CompareOp::Ge | CompareOp::Lt | CompareOp::Le => value.is_ordered(),
	};

	if supported {
		Ok(())
	} else {
		Err(FilterError::IncompatibleValue {
			op,
			kind: value.kind(),
		})
	}
}
