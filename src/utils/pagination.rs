//! Relay-style cursor pagination over an ordered SQL window.
//!
//! Cursors are opaque encodings of a record's ordinal position within the
//! caller's ordered scan. Decoding a cursor and re-querying from it yields
//! the records adjacent to it in that same order; switching the order field
//! between requests for the same cursor is undefined and left to the caller.

use base64::prelude::*;
use serde::{Deserialize, Deserializer, Serialize};

use crate::utils::errors::AppError;

/// Opaque pointer to a position in an ordered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor(pub i64);

impl Cursor {
    /// Encodes the position as a URL-safe base64 string.
    pub fn encode(&self) -> String {
        BASE64_URL_SAFE_NO_PAD.encode(self.0.to_string().as_bytes())
    }

    /// Decodes a cursor, returning `None` for anything malformed.
    pub fn decode(encoded: &str) -> Option<Self> {
        let bytes = BASE64_URL_SAFE_NO_PAD.decode(encoded).ok()?;
        let text = String::from_utf8(bytes).ok()?;
        let position = text.parse::<i64>().ok()?;
        (position >= 0).then_some(Self(position))
    }
}

fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => s.parse::<i64>().map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Connection arguments: forward pagination uses `first`/`after`, backward
/// uses `last`/`before`. Mixing directions is a caller error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationArgs {
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub first: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub last: Option<i64>,
    pub after: Option<String>,
    pub before: Option<String>,
}

/// Offset window resolved from connection arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// Scan position of the first row in the window.
    pub offset: i64,
    /// Number of rows the page may contain.
    pub limit: i64,
    pub backward: bool,
}

impl Window {
    /// Rows to request from the store: one row past the window, so the
    /// next-page flag needs no second scan.
    pub fn fetch_limit(&self) -> i64 {
        self.limit + 1
    }
}

impl PaginationArgs {
    pub const DEFAULT_PAGE_SIZE: i64 = 20;
    pub const MAX_PAGE_SIZE: i64 = 100;

    /// Resolves the arguments into an offset window.
    ///
    /// Fails with a bad-request error when forward and backward arguments
    /// are combined, a page size is negative, `last` comes without
    /// `before`, or a cursor does not decode.
    pub fn window(&self) -> Result<Window, AppError> {
        let backward = self.last.is_some() || self.before.is_some();

        if backward && (self.first.is_some() || self.after.is_some()) {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Cannot combine forward (first/after) and backward (last/before) pagination"
            )));
        }

        if backward {
            let before = self.before.as_deref().ok_or_else(|| {
                AppError::bad_request(anyhow::anyhow!("last requires a before cursor"))
            })?;
            let end = decode_cursor(before)?.0;

            let last = self.last.unwrap_or(Self::DEFAULT_PAGE_SIZE);
            if last < 0 {
                return Err(AppError::bad_request(anyhow::anyhow!(
                    "last must not be negative"
                )));
            }
            let last = last.min(Self::MAX_PAGE_SIZE);

            // Window covers the rows strictly before the anchor, clamped at
            // the start of the scan.
            let offset = (end - last).max(0);
            Ok(Window {
                offset,
                limit: end - offset,
                backward: true,
            })
        } else {
            let first = self.first.unwrap_or(Self::DEFAULT_PAGE_SIZE);
            if first < 0 {
                return Err(AppError::bad_request(anyhow::anyhow!(
                    "first must not be negative"
                )));
            }
            let first = first.min(Self::MAX_PAGE_SIZE);

            let offset = match &self.after {
                // a cursor at i64::MAX has no position after it
                Some(cursor) => decode_cursor(cursor)?.0.checked_add(1).ok_or_else(|| {
                    AppError::bad_request(anyhow::anyhow!("Malformed cursor"))
                })?,
                None => 0,
            };
            Ok(Window {
                offset,
                limit: first,
                backward: false,
            })
        }
    }
}

fn decode_cursor(encoded: &str) -> Result<Cursor, AppError> {
    Cursor::decode(encoded)
        .ok_or_else(|| AppError::bad_request(anyhow::anyhow!("Malformed cursor")))
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Edge<T> {
    pub cursor: String,
    pub node: T,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
}

/// Paginated result wrapper: ordered edges plus page flags and the total
/// count of records matching the filter (not just the page window).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    pub edges: Vec<Edge<T>>,
    pub page_info: PageInfo,
    pub total_count: i64,
}

impl<T> Connection<T> {
    /// Assembles a connection from rows fetched with [`Window::fetch_limit`].
    ///
    /// The extra row, when present, only proves a record exists past the
    /// window; it is dropped from the page. For backward windows that record
    /// is the anchor the `before` cursor pointed at.
    pub fn from_window(mut nodes: Vec<T>, total_count: i64, window: &Window) -> Self {
        let has_extra = nodes.len() as i64 > window.limit;
        if has_extra {
            nodes.truncate(window.limit as usize);
        }

        let edges: Vec<Edge<T>> = nodes
            .into_iter()
            .enumerate()
            .map(|(i, node)| Edge {
                cursor: Cursor(window.offset + i as i64).encode(),
                node,
            })
            .collect();

        let page_info = PageInfo {
            has_next_page: has_extra,
            has_previous_page: window.offset > 0,
            start_cursor: edges.first().map(|e| e.cursor.clone()),
            end_cursor: edges.last().map(|e| e.cursor.clone()),
        };

        Self {
            edges,
            page_info,
            total_count,
        }
    }
}
