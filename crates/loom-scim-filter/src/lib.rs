// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! SCIM 2.0 filter construction and query encoding for Loom.
//!
//! This crate builds the `filter=` query-parameter value for outbound SCIM
//! requests: typed attribute comparisons combined with binary AND/OR,
//! rendered to the protocol's comparison syntax and percent-encoded for
//! transport. It is the client-side counterpart to the filter parser in
//! `loom-scim`; parsing filter text back into structure is out of scope here.
//!
//! # Example
//!
//! ```
//! use loom_scim_filter::{CompareOp, Filter, FilterBuilder};
//!
//! // Expression trees compose directly...
//! let filter = Filter::compare("userName", CompareOp::Eq, "bjensen")
//! 	.and(Filter::compare("active", CompareOp::Eq, true));
//! assert_eq!(
//! 	filter.render().unwrap(),
//! 	r#"(userName EQ "bjensen" AND active EQ true)"#
//! );
//!
//! // ...or accumulate fluently; build() renders and encodes in one call.
//! let query = FilterBuilder::new()
//! 	.equal_to("userName", "bjensen")
//! 	.build()
//! 	.unwrap();
//! assert_eq!(query, "userName%20EQ%20%22bjensen%22");
//! ```

pub mod error;
pub mod filter;

pub use error::{FilterError, Result};
pub use filter::{
	format_date, format_date_time, query_encode, render_filter, CompareOp, Filter, FilterBuilder,
	FilterValue, LogicalOp,
};
