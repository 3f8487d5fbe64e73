//! Page slicing with next/previous link metadata
//!
//! Pages are 1-based. Links are rebuilt from the base URL and the caller's
//! query parameters with only the page number adjusted, so a consumer can
//! walk the listing without reconstructing its own query string.

use serde::Serialize;
use thiserror::Error;

/// Errors for invalid pagination arguments
///
/// These are caller mistakes, distinct from any server-side failure.
#[derive(Debug, Error)]
pub enum PaginateError {
    /// Page size must be at least 1
    #[error("Invalid page size: {0} (must be >= 1)")]
    InvalidPageSize(usize),

    /// Page numbers start at 1
    #[error("Invalid page number: {0} (must be >= 1)")]
    InvalidPageNumber(usize),
}

/// One page of an ordered sequence, with navigation links
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    /// Total number of items across all pages
    pub total: usize,
    /// Current page number, 1-based
    pub page: usize,
    /// Requested page size
    pub page_size: usize,
    /// Items on this page
    pub data: Vec<T>,
    /// Link to the next page, absent on or past the last page
    pub next: Option<String>,
    /// Link to the previous page, absent on the first page
    pub previous: Option<String>,
}

/// Slices `items` into the requested page and builds navigation links
///
/// The page covers `[(page-1)*page_size, page*page_size)`. `query` carries
/// the caller's non-pagination parameters and is reproduced verbatim (in
/// order) in the links, followed by `page` and `page_size`.
pub fn paginate<T: Clone>(
    items: &[T],
    page_size: usize,
    page: usize,
    base_url: &str,
    query: &[(String, String)],
) -> Result<Page<T>, PaginateError> {
    if page_size == 0 {
        return Err(PaginateError::InvalidPageSize(page_size));
    }
    if page == 0 {
        return Err(PaginateError::InvalidPageNumber(page));
    }

    let total = items.len();
    let start = (page - 1).saturating_mul(page_size).min(total);
    let end = page.saturating_mul(page_size).min(total);
    let data = items[start..end].to_vec();

    let next = if page * page_size < total {
        Some(page_url(base_url, query, page + 1, page_size))
    } else {
        None
    };
    let previous = if page > 1 {
        Some(page_url(base_url, query, page - 1, page_size))
    } else {
        None
    };

    Ok(Page {
        total,
        page,
        page_size,
        data,
        next,
        previous,
    })
}

/// Builds a page link from the base URL, query parameters, and page numbers
fn page_url(base_url: &str, query: &[(String, String)], page: usize, page_size: usize) -> String {
    let mut params: Vec<String> = query
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoded(k), urlencoded(v)))
        .collect();
    params.push(format!("page={}", page));
    params.push(format!("page_size={}", page_size));
    format!("{}?{}", base_url, params.join("&"))
}

/// Percent-encodes a string for use in query parameters
fn urlencoded(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '-' | '.' | '_' | '~' => out.push(c),
            ' ' => out.push_str("%20"),
            _ => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).bytes() {
                    out.push_str(&format!("%{:02X}", byte));
                }
            }
        }
    }
    out
}
