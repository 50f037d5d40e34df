//! Pagination cursor extraction from the `Link` response header.
//!
//! GitHub paginates list endpoints with RFC 8288 style headers:
//!
//! ```text
//! Link: <https://api.github.com/...&page=2>; rel="next", <...&page=5>; rel="last"
//! ```

use http::HeaderMap;
use http::header::LINK;

/// Return the URL tagged `rel="next"`, if any.
///
/// Entries that do not split into exactly `<url>` and `rel="..."` on `;` are
/// skipped. Several `Link` header values are read as one list.
pub fn next_page_url(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(LINK)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .find_map(next_from_entry)
}

fn next_from_entry(entry: &str) -> Option<String> {
    let parts: Vec<&str> = entry.split(';').collect();
    let [target, rel] = parts.as_slice() else {
        return None;
    };

    if rel.trim() != r#"rel="next""# {
        return None;
    }

    let url = target.trim().trim_start_matches('<').trim_end_matches('>');
    if url.is_empty() {
        return None;
    }
    Some(url.to_owned())
}

#[cfg(test)]
mod tests {
    use http::HeaderValue;

    use super::*;

    fn headers(values: &[&str]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for value in values {
            map.append(LINK, HeaderValue::from_str(value).unwrap());
        }
        map
    }

    #[test]
    fn extracts_next_among_other_relations() {
        let map = headers(&[
            r#"<https://api.github.com/repositories/1/issues/1/comments?page=2>; rel="next", <https://api.github.com/repositories/1/issues/1/comments?page=4>; rel="last""#,
        ]);
        assert_eq!(
            next_page_url(&map).as_deref(),
            Some("https://api.github.com/repositories/1/issues/1/comments?page=2")
        );
    }

    #[test]
    fn next_listed_after_prev() {
        let map = headers(&[r#"<https://x/?page=1>; rel="prev", <https://x/?page=3>; rel="next""#]);
        assert_eq!(next_page_url(&map).as_deref(), Some("https://x/?page=3"));
    }

    #[test]
    fn no_header_means_no_next() {
        assert_eq!(next_page_url(&HeaderMap::new()), None);
    }

    #[test]
    fn header_without_next_means_no_next() {
        let map = headers(&[r#"<https://x/?page=1>; rel="first", <https://x/?page=1>; rel="prev""#]);
        assert_eq!(next_page_url(&map), None);
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let map = headers(&[
            r#"garbage, <https://x/?page=9>; rel="next"; extra, <https://x/?page=2>; rel="next""#,
        ]);
        assert_eq!(next_page_url(&map).as_deref(), Some("https://x/?page=2"));
    }

    #[test]
    fn reads_across_multiple_header_values() {
        let map = headers(&[r#"<https://x/?page=1>; rel="prev""#, r#"<https://x/?page=3>; rel="next""#]);
        assert_eq!(next_page_url(&map).as_deref(), Some("https://x/?page=3"));
    }
}
