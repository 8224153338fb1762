// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use super::ast::{CompareOp, Filter, LogicalOp};
use super::value::FilterValue;
use crate::error::{FilterError, Result};

/// Fluent accumulator for building a filter expression left to right.
///
/// ```
/// use loom_scim_filter::FilterBuilder;
///
/// let query = FilterBuilder::new()
/// 	.equal_to("userName", "bjensen")
/// 	.and()
/// 	.equal_to("active", true)
/// 	.build()
/// 	.unwrap();
/// assert_eq!(query, "%28userName%20EQ%20%22bjensen%22%20AND%20active%20EQ%20true%29");
/// ```
///
/// The builder folds each appended comparison into a [`Filter`] tree, so the
/// output is grouped correctly by construction. Sequencing misuse (a
/// comparison with no connective before it, a dangling or doubled
/// connective, an empty builder) is held as a sticky error and reported by
/// [`FilterBuilder::build`] / [`FilterBuilder::into_filter`] instead of ever
/// producing malformed text.
#[derive(Debug, Default)]
pub struct FilterBuilder {
	filter: Option<Filter>,
	pending: Option<LogicalOp>,
	error: Option<FilterError>,
}

impl FilterBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// `<attr> EQ <value>` for any literal kind.
	pub fn equal_to(self, attr_path: impl Into<String>, value: impl Into<FilterValue>) -> Self {
		self.comparison(attr_path, CompareOp::Eq, value)
	}

	/// `<attr> EQ null`.
	pub fn equal_null(self, attr_path: impl Into<String>) -> Self {
		self.comparison(attr_path, CompareOp::Eq, FilterValue::Null)
	}

	pub fn not_equal(self, attr_path: impl Into<String>, value: impl Into<FilterValue>) -> Self {
		self.comparison(attr_path, CompareOp::Ne, value)
	}

	pub fn contains(self, attr_path: impl Into<String>, value: impl Into<String>) -> Self {
		self.comparison(attr_path, CompareOp::Co, value.into())
	}

	pub fn starts_with(self, attr_path: impl Into<String>, value: impl Into<String>) -> Self {
		self.comparison(attr_path, CompareOp::Sw, value.into())
	}

	pub fn ends_with(self, attr_path: impl Into<String>, value: impl Into<String>) -> Self {
		self.comparison(attr_path, CompareOp::Ew, value.into())
	}

	pub fn greater_than(self, attr_path: impl Into<String>, value: impl Into<FilterValue>) -> Self {
		self.comparison(attr_path, CompareOp::Gt, value)
	}

	pub fn greater_than_or_equals(
		self,
		attr_path: impl Into<String>,
		value: impl Into<FilterValue>,
	) -> Self {
		self.comparison(attr_path, CompareOp::Ge, value)
	}

	pub fn less_than(self, attr_path: impl Into<String>, value: impl Into<FilterValue>) -> Self {
		self.comparison(attr_path, CompareOp::Lt, value)
	}

	pub fn less_than_or_equals(
		self,
		attr_path: impl Into<String>,
		value: impl Into<FilterValue>,
	) -> Self {
		self.comparison(attr_path, CompareOp::Le, value)
	}

	/// Appends an arbitrary comparison.
	pub fn comparison(
		self,
		attr_path: impl Into<String>,
		op: CompareOp,
		value: impl Into<FilterValue>,
	) -> Self {
		self.append(Filter::compare(attr_path, op, value))
	}

	/// Appends a prebuilt subtree, e.g. a parenthesized OR group.
	pub fn expression(self, filter: Filter) -> Self {
		self.append(filter)
	}

	/// Joins the accumulated expression to the next appended one with `AND`.
	pub fn and(self) -> Self {
		self.connective(LogicalOp::And)
	}

	/// Joins the accumulated expression to the next appended one with `OR`.
	pub fn or(self) -> Self {
		self.connective(LogicalOp::Or)
	}

	/// The accumulated expression tree.
	pub fn into_filter(self) -> Result<Filter> {
		if let Some(err) = self.error {
			return Err(err);
		}
		if let Some(op) = self.pending {
			return Err(FilterError::Malformed(format!(
				"dangling {} connective",
				op.keyword()
			)));
		}
		self.filter
			.ok_or_else(|| FilterError::Malformed("empty filter".to_string()))
	}

	/// Renders and percent-encodes the accumulated expression. Encoding is
	/// applied exactly once.
	pub fn build(self) -> Result<String> {
		self.into_filter()?.build()
	}

	fn append(mut self, next: Filter) -> Self {
		if self.error.is_some() {
			return self;
		}
		match (self.filter.take(), self.pending.take()) {
			(None, _) => self.filter = Some(next),
			(Some(left), Some(op)) => {
				self.filter = Some(Filter::Logical {
					op,
					left: Box::new(left),
					right: Box::new(next),
				});
			}
			(Some(left), None) => {
				self.filter = Some(left);
				self.error = Some(FilterError::Malformed(
					"expression appended without a connective".to_string(),
				));
			}
		}
		self
	}

	fn connective(mut self, op: LogicalOp) -> Self {
		if self.error.is_some() {
			return self;
		}
		if self.filter.is_none() {
			self.error = Some(FilterError::Malformed(format!(
				"{} connective has no left-hand expression",
				op.keyword()
			)));
		} else if self.pending.is_some() {
			self.error = Some(FilterError::Malformed(format!(
				"{} connective follows another connective",
				op.keyword()
			)));
		} else {
			self.pending = Some(op);
		}
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_single_comparison() {
		let query = FilterBuilder::new().equal_to("userName", "bjensen").build().unwrap();
		assert_eq!(query, "userName%20EQ%20%22bjensen%22");
	}

	#[test]
	fn test_and_chain_groups() {
		let filter = FilterBuilder::new()
			.equal_to("userName", "bjensen")
			.and()
			.equal_to("active", true)
			.into_filter()
			.unwrap();
		assert_eq!(
			filter.render().unwrap(),
			r#"(userName EQ "bjensen" AND active EQ true)"#
		);
	}

	#[test]
	fn test_chain_folds_left() {
		let filter = FilterBuilder::new()
			.equal_to("a", "1")
			.and()
			.equal_to("b", "2")
			.or()
			.equal_to("c", "3")
			.into_filter()
			.unwrap();
		assert_eq!(
			filter.render().unwrap(),
			r#"((a EQ "1" AND b EQ "2") OR c EQ "3")"#
		);
	}

	#[test]
	fn test_expression_attaches_subtree() {
		let group = Filter::compare("b", CompareOp::Eq, "2").or(Filter::compare("c", CompareOp::Eq, "3"));
		let filter = FilterBuilder::new()
			.equal_to("a", "1")
			.and()
			.expression(group)
			.into_filter()
			.unwrap();
		assert_eq!(
			filter.render().unwrap(),
			r#"(a EQ "1" AND (b EQ "2" OR c EQ "3"))"#
		);
	}

	#[test]
	fn test_fluent_vocabulary() {
		let filter = FilterBuilder::new()
			.starts_with("name.familyName", "Jen")
			.and()
			.greater_than("loginCount", 10)
			.into_filter()
			.unwrap();
		assert_eq!(
			filter.render().unwrap(),
			r#"(name.familyName SW "Jen" AND loginCount GT 10)"#
		);
	}

	#[test]
	fn test_equal_null() {
		let query = FilterBuilder::new().equal_null("manager").build().unwrap();
		assert_eq!(query, "manager%20EQ%20null");
	}

	#[test]
	fn test_missing_connective_is_rejected() {
		let result = FilterBuilder::new().equal_to("a", "1").equal_to("b", "2").build();
		assert!(matches!(result, Err(FilterError::Malformed(_))));
	}

	#[test]
	fn test_dangling_connective_is_rejected() {
		let result = FilterBuilder::new().equal_to("a", "1").and().build();
		assert_eq!(
			result,
			Err(FilterError::Malformed("dangling AND connective".to_string()))
		);
	}

	#[test]
	fn test_leading_connective_is_rejected() {
		let result = FilterBuilder::new().or().equal_to("a", "1").build();
		assert!(matches!(result, Err(FilterError::Malformed(_))));
	}

	#[test]
	fn test_doubled_connective_is_rejected() {
		let result = FilterBuilder::new().equal_to("a", "1").and().and().equal_to("b", "2").build();
		assert!(matches!(result, Err(FilterError::Malformed(_))));
	}

	#[test]
	fn test_empty_builder_is_rejected() {
		let result = FilterBuilder::new().build();
		assert_eq!(
			result,
			Err(FilterError::Malformed("empty filter".to_string()))
		);
	}

	#[test]
	fn test_first_error_sticks() {
		// The leading connective is the first misuse; later appends do not
		// overwrite it.
		let result = FilterBuilder::new().and().equal_to("a", "1").equal_to("b", "2").build();
		assert_eq!(
			result,
			Err(FilterError::Malformed(
				"AND connective has no left-hand expression".to_string()
			))
		);
	}

	#[test]
	fn test_build_encodes_exactly_once() {
		let filter = FilterBuilder::new()
			.equal_to("userName", "bjensen")
			.and()
			.equal_to("active", true)
			.into_filter()
			.unwrap();
		let built = filter.build().unwrap();
		assert_eq!(built, crate::filter::query_encode(&filter.render().unwrap()));
		// Already-encoded text is not re-encoded implicitly.
		assert!(built.contains("%20"));
		assert!(!built.contains("%2520"));
	}

	#[test]
	fn test_invalid_comparison_surfaces_at_build() {
		let result = FilterBuilder::new().greater_than("active", true).build();
		assert_eq!(
			result,
			Err(FilterError::IncompatibleValue {
				op: CompareOp::Gt,
				kind: "boolean",
			})
		);
	}
}
