// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

pub mod ast;
pub mod builder;
pub mod encode;
pub mod render;
pub mod value;

pub use ast::{CompareOp, Filter, LogicalOp};
pub use builder::FilterBuilder;
pub use encode::query_encode;
pub use render::render_filter;
pub use value::{format_date, format_date_time, FilterValue};
