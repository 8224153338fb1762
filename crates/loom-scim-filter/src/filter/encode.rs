// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

/// Percent-encodes rendered filter text for use as a query-parameter value.
///
/// Spaces become `%20`, never `+` — `+` is decoded inconsistently across
/// servers. Unreserved characters (`A-Z a-z 0-9 - _ . ~`) pass through;
/// everything else is `%XX` over the UTF-8 bytes of the input.
pub fn query_encode(filter: &str) -> String {
	urlencoding::encode(filter).into_owned()
}
