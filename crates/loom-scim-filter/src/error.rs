// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use thiserror::Error;

use crate::filter::CompareOp;

pub type Result<T> = std::result::Result<T, FilterError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
	#[error("empty attribute path")]
	EmptyAttributePath,
	#[error("operator {op} cannot compare a {kind} value")]
	IncompatibleValue { op: CompareOp, kind: &'static str },
	#[error("malformed filter: {0}")]
	Malformed(String),
}
