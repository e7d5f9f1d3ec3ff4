//! Pagination handling for the Gitee API.
//!
//! Pagination is stateless: every list call returns one [`Page`] whose
//! [`ResponseMeta::next_page`] tells the caller which page to request next.
//!
//! ```rust,no_run
//! # use integrations_gitee::{GiteeClient, GiteeResult};
//! # use integrations_gitee::services::CommitsListOptions;
//! # async fn run(client: &GiteeClient) -> GiteeResult<()> {
//! let mut opts = CommitsListOptions::default();
//! loop {
//!     let page = client.repositories().list_commits("owner", "repo", &opts).await?;
//!     for commit in &page.items {
//!         println!("{:?}", commit.sha);
//!     }
//!     match page.next_page() {
//!         Some(next) => opts.list.page = Some(next),
//!         None => break,
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};
use url::Url;

/// Maximum page size accepted by Gitee.
pub const MAX_PER_PAGE: u32 = 100;

/// Header carrying the total number of items.
pub const TOTAL_COUNT_HEADER: &str = "total_count";

/// Header carrying the total number of pages.
pub const TOTAL_PAGE_HEADER: &str = "total_page";

/// Pagination links parsed from the Link header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationLinks {
    /// URL for the next page.
    pub next: Option<String>,
    /// URL for the previous page.
    pub prev: Option<String>,
    /// URL for the first page.
    pub first: Option<String>,
    /// URL for the last page.
    pub last: Option<String>,
}

impl PaginationLinks {
    /// Parses pagination links from the Link header (RFC 8288).
    pub fn from_header(header_value: &str) -> Self {
        let mut links = Self::default();

        for part in header_value.split(',') {
            let mut url = None;
            let mut rel = None;

            for segment in part.split(';') {
                let segment = segment.trim();
                if segment.starts_with('<') && segment.ends_with('>') {
                    url = Some(segment[1..segment.len() - 1].to_string());
                } else if let Some(value) = segment.strip_prefix("rel=") {
                    rel = Some(value.trim_matches('"').to_string());
                }
            }

            if let (Some(url), Some(rel)) = (url, rel) {
                match rel.as_str() {
                    "next" => links.next = Some(url),
                    "prev" => links.prev = Some(url),
                    "first" => links.first = Some(url),
                    "last" => links.last = Some(url),
                    _ => {}
                }
            }
        }

        links
    }

    /// Parses pagination links from response headers.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get("link")
            .and_then(|v| v.to_str().ok())
            .map(Self::from_header)
            .unwrap_or_default()
    }

    /// Returns true if the header announced no relation at all.
    pub fn is_empty(&self) -> bool {
        self.next.is_none() && self.prev.is_none() && self.first.is_none() && self.last.is_none()
    }
}

/// Extracts the `page` query parameter from a Link target.
///
/// Relative targets are resolved against `base`, the URL of the request the
/// link was returned for.
pub fn extract_page_number(base: &Url, link: &str) -> Option<u32> {
    base.join(link).ok().as_ref().and_then(page_param)
}

/// Page requested by a URL, 1 when the `page` parameter is absent.
pub fn requested_page(url: &Url) -> u32 {
    page_param(url).unwrap_or(1)
}

fn page_param(url: &Url) -> Option<u32> {
    url.query_pairs()
        .find(|(k, _)| k == "page")
        .and_then(|(_, v)| v.parse().ok())
}

/// Per-call response envelope: status, headers and derived page cursors.
#[derive(Debug, Clone)]
pub struct ResponseMeta {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HeaderMap,
    /// Page that was requested.
    pub page: u32,
    /// Next page, `None` when this is the last one.
    pub next_page: Option<u32>,
    /// Previous page.
    pub prev_page: Option<u32>,
    /// First page.
    pub first_page: Option<u32>,
    /// Last page.
    pub last_page: Option<u32>,
    /// Total number of items, when reported.
    pub total_count: Option<u64>,
    /// Total number of pages, when reported.
    pub total_pages: Option<u32>,
}

impl ResponseMeta {
    /// Builds the envelope for a response to the request sent to `request_url`.
    ///
    /// Cursors come from the Link header when present, otherwise from the
    /// `total_page` header compared with the requested page.
    pub fn new(status: u16, headers: HeaderMap, request_url: &Url) -> Self {
        let page = requested_page(request_url);
        let links = PaginationLinks::from_headers(&headers);
        let total_count = header_number::<u64>(&headers, TOTAL_COUNT_HEADER);
        let total_pages = header_number::<u32>(&headers, TOTAL_PAGE_HEADER);

        let (next_page, prev_page, first_page, last_page) = if !links.is_empty() {
            (
                links.next.as_deref().and_then(|l| extract_page_number(request_url, l)),
                links.prev.as_deref().and_then(|l| extract_page_number(request_url, l)),
                links.first.as_deref().and_then(|l| extract_page_number(request_url, l)),
                links.last.as_deref().and_then(|l| extract_page_number(request_url, l)),
            )
        } else if let Some(total) = total_pages {
            (
                (page < total).then(|| page + 1),
                (page > 1 && total > 0).then(|| page - 1),
                (total > 0).then_some(1),
                (total > 0).then_some(total),
            )
        } else {
            (None, None, None, None)
        };

        Self {
            status,
            headers,
            page,
            next_page,
            prev_page,
            first_page,
            last_page,
            total_count,
            total_pages: total_pages.or(last_page),
        }
    }

    /// Returns true if there is a next page.
    pub fn has_next(&self) -> bool {
        self.next_page.is_some()
    }

    /// Gets a header value as a string.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

fn header_number<N: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<N> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}

/// A decoded value together with its response envelope.
#[derive(Debug, Clone)]
pub struct Response<T> {
    /// Decoded value.
    pub value: T,
    /// Response metadata.
    pub meta: ResponseMeta,
}

impl<T> Response<T> {
    /// Creates a new response.
    pub fn new(value: T, meta: ResponseMeta) -> Self {
        Self { value, meta }
    }

    /// Consumes the response and returns the value.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Maps the value, keeping the metadata.
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            value: f(self.value),
            meta: self.meta,
        }
    }
}

/// A single page of results.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// The items in this page.
    pub items: Vec<T>,
    /// Response metadata, including page cursors.
    pub meta: ResponseMeta,
}

impl<T> Page<T> {
    /// Creates a new page.
    pub fn new(items: Vec<T>, meta: ResponseMeta) -> Self {
        Self { items, meta }
    }

    /// Returns true if there is a next page.
    pub fn has_next(&self) -> bool {
        self.meta.has_next()
    }

    /// Returns the next page number.
    pub fn next_page(&self) -> Option<u32> {
        self.meta.next_page
    }

    /// Returns the number of items in this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the page is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consumes the page and returns the items.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Maps the items in this page.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}

impl<T> From<Response<Vec<T>>> for Page<T> {
    fn from(response: Response<Vec<T>>) -> Self {
        Page::new(response.value, response.meta)
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Pagination parameters shared by every list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    /// Page number (1-indexed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Items per page (max 100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl ListOptions {
    /// Creates new pagination parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page number.
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets items per page.
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page.min(MAX_PER_PAGE));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;
    use pretty_assertions::assert_eq;

    fn url(page: Option<u32>) -> Url {
        let mut url = Url::parse("https://gitee.com/api/v5/user/repos").unwrap();
        if let Some(page) = page {
            url.query_pairs_mut().append_pair("page", &page.to_string());
        }
        url
    }

    fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_str(value).unwrap());
        }
        map
    }

    #[test]
    fn test_parse_link_header() {
        let header = r#"<https://gitee.com/api/v5/user/repos?page=2>; rel="next", <https://gitee.com/api/v5/user/repos?page=5>; rel="last""#;
        let links = PaginationLinks::from_header(header);

        assert_eq!(
            links.next,
            Some("https://gitee.com/api/v5/user/repos?page=2".to_string())
        );
        assert_eq!(
            links.last,
            Some("https://gitee.com/api/v5/user/repos?page=5".to_string())
        );
        assert!(links.prev.is_none());
        assert!(links.first.is_none());
    }

    #[test]
    fn test_meta_from_link_header() {
        let meta = ResponseMeta::new(
            200,
            headers(&[(
                "link",
                r#"<https://gitee.com/api/v5/x?page=1>; rel="first", <https://gitee.com/api/v5/x?page=2>; rel="prev", <https://gitee.com/api/v5/x?page=4>; rel="next", <https://gitee.com/api/v5/x?page=9>; rel="last""#,
            )]),
            &url(Some(3)),
        );

        assert_eq!(meta.next_page, Some(4));
        assert_eq!(meta.prev_page, Some(2));
        assert_eq!(meta.first_page, Some(1));
        assert_eq!(meta.last_page, Some(9));
        assert_eq!(meta.total_pages, Some(9));
    }

    #[test]
    fn test_meta_from_total_page_header() {
        let meta = ResponseMeta::new(
            200,
            headers(&[("total_count", "45"), ("total_page", "3")]),
            &url(Some(2)),
        );

        assert_eq!(meta.next_page, Some(3));
        assert_eq!(meta.prev_page, Some(1));
        assert_eq!(meta.last_page, Some(3));
        assert_eq!(meta.total_count, Some(45));
        assert_eq!(meta.total_pages, Some(3));
    }

    #[test]
    fn test_meta_from_relative_link_header() {
        let meta = ResponseMeta::new(
            200,
            headers(&[
                ("link", r#"</api/v5/user/repos?page=2>; rel="next", <repos?page=3>; rel="last""#),
                ("total_page", "3"),
            ]),
            &url(None),
        );

        assert_eq!(meta.page, 1);
        assert_eq!(meta.next_page, Some(2));
        assert_eq!(meta.last_page, Some(3));
    }

    #[test]
    fn test_requested_page() {
        assert_eq!(requested_page(&url(Some(4))), 4);
        assert_eq!(requested_page(&url(None)), 1);
        assert_eq!(
            extract_page_number(&url(None), "https://gitee.com/api/v5/user/repos?page=7"),
            Some(7)
        );
        assert_eq!(extract_page_number(&url(None), "/api/v5/user/repos"), None);
    }

    #[test]
    fn test_meta_on_last_page() {
        let meta = ResponseMeta::new(200, headers(&[("total_page", "3")]), &url(Some(3)));
        assert_eq!(meta.next_page, None);
        assert!(!meta.has_next());
    }

    #[test]
    fn test_meta_without_cursors() {
        let meta = ResponseMeta::new(200, HeaderMap::new(), &url(None));
        assert_eq!(meta.next_page, None);
        assert_eq!(meta.total_pages, None);
    }

    #[test]
    fn test_empty_result_set() {
        let meta = ResponseMeta::new(
            200,
            headers(&[("total_count", "0"), ("total_page", "0")]),
            &url(None),
        );
        assert_eq!(meta.next_page, None);
        assert_eq!(meta.first_page, None);
        assert_eq!(meta.total_count, Some(0));
    }

    #[test]
    fn test_list_options_query() {
        let opts = ListOptions::new().page(2).per_page(50);
        assert_eq!(
            serde_urlencoded::to_string(&opts).unwrap(),
            "page=2&per_page=50"
        );
        assert_eq!(serde_urlencoded::to_string(ListOptions::new()).unwrap(), "");
    }

    #[test]
    fn test_per_page_limit() {
        let opts = ListOptions::new().per_page(200);
        assert_eq!(opts.per_page, Some(MAX_PER_PAGE));
    }

    #[test]
    fn test_page_operations() {
        let page: Page<i32> = Page::new(vec![1, 2, 3], ResponseMeta::new(200, HeaderMap::new(), &url(None)));

        assert_eq!(page.len(), 3);
        assert!(!page.is_empty());
        assert!(!page.has_next());
        let doubled = page.map(|n| n * 2);
        assert_eq!(doubled.into_items(), vec![2, 4, 6]);
    }
}
