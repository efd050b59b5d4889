//! Page-filter planning for paged metadata endpoints
//!
//! The server reports the collection size through an optional `pager.total`
//! field on a count-only request. Planning turns that total into the ordered
//! list of `page=<n>&pageSize=<size>` query fragments that cover the whole
//! collection, one fragment per request.

use serde::Deserialize;

/// Pager block returned on paging-enabled requests.
#[derive(Debug, Deserialize, Clone)]
pub struct Pager {
    /// Total number of items in the collection. Servers may omit this.
    #[serde(default)]
    pub total: Option<usize>,
}

/// Count-only response envelope. The `pager` block itself may be absent.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct PagingResponse {
    #[serde(default)]
    pub pager: Option<Pager>,
}

/// Build the ordered page filters covering `total` items.
///
/// Returns exactly `ceil(total / page_size)` fragments numbered from 1, each
/// of the form `page=<n>&pageSize=<page_size>`. A missing or zero total is
/// substituted with `page_size` first, so at least one page is always planned:
/// a server that omits the total is treated as having one short page, not zero
/// pages. `page_size` must be at least 1; callers sanitize their inputs.
pub fn page_fragments(total: Option<usize>, page_size: usize) -> Vec<String> {
    let total = match total {
        Some(total) if total > 0 => total,
        _ => page_size,
    };

    (1..=total.div_ceil(page_size))
        .map(|page| format!("page={page}&pageSize={page_size}"))
        .collect()
}

/// Extract the reported total from a count-only response and plan its pages.
pub fn pagination_filters(response: &PagingResponse, page_size: usize) -> Vec<String> {
    let total = response.pager.as_ref().and_then(|pager| pager.total);
    page_fragments(total, page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_fragments_zero_total_defaults_to_one_page() {
        let fragments = page_fragments(Some(0), 25);
        assert_eq!(fragments, vec!["page=1&pageSize=25"]);
    }

    #[test]
    fn test_page_fragments_missing_total_defaults_to_one_page() {
        let fragments = page_fragments(None, 25);
        assert_eq!(fragments, vec!["page=1&pageSize=25"]);
    }

    #[test]
    fn test_page_fragments_partial_last_page() {
        let fragments = page_fragments(Some(250), 100);
        assert_eq!(
            fragments,
            vec![
                "page=1&pageSize=100",
                "page=2&pageSize=100",
                "page=3&pageSize=100"
            ]
        );
    }

    #[test]
    fn test_page_fragments_exact_boundary_has_no_trailing_page() {
        let fragments = page_fragments(Some(300), 100);
        assert_eq!(fragments.len(), 3);
        assert_eq!(fragments.last().unwrap(), "page=3&pageSize=100");
    }

    #[test]
    fn test_page_fragments_single_item() {
        let fragments = page_fragments(Some(1), 200);
        assert_eq!(fragments, vec!["page=1&pageSize=200"]);
    }

    #[test]
    fn test_pagination_filters_with_reported_total() {
        let response: PagingResponse =
            serde_json::from_str(r#"{"pager":{"total":250,"pageCount":3}}"#).unwrap();

        let filters = pagination_filters(&response, 100);
        assert_eq!(filters.len(), 3);
        assert_eq!(filters[0], "page=1&pageSize=100");
    }

    #[test]
    fn test_pagination_filters_missing_pager() {
        let response: PagingResponse = serde_json::from_str("{}").unwrap();

        let filters = pagination_filters(&response, 200);
        assert_eq!(filters, vec!["page=1&pageSize=200"]);
    }

    #[test]
    fn test_pagination_filters_pager_without_total() {
        let response: PagingResponse = serde_json::from_str(r#"{"pager":{}}"#).unwrap();

        let filters = pagination_filters(&response, 50);
        assert_eq!(filters, vec!["page=1&pageSize=50"]);
    }
}
