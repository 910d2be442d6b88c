//! Upstream URL construction.
//!
//! Pure functions so the paging defaults and the search-term rule can be
//! checked without a network.

use url::Url;

use crate::upstream::types::UpstreamResult;

pub const DEFAULT_LIMIT: u32 = 20;
pub const DEFAULT_OFFSET: u32 = 0;

/// Shorter search terms are dropped rather than rejected.
pub const MIN_SEARCH_LEN: usize = 3;

/// Join `path` onto the base URL, keeping any path prefix the base carries.
fn endpoint(base: &Url, path: &str) -> UpstreamResult<Url> {
    let joined = format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    Ok(Url::parse(&joined)?)
}

/// `GET {base}/exercises?limit=..&offset=..`
pub fn listings_url(base: &Url, limit: Option<u32>, offset: Option<u32>) -> UpstreamResult<Url> {
    let mut url = endpoint(base, "exercises")?;
    url.query_pairs_mut()
        .append_pair("limit", &limit.unwrap_or(DEFAULT_LIMIT).to_string())
        .append_pair("offset", &offset.unwrap_or(DEFAULT_OFFSET).to_string());
    Ok(url)
}

/// `GET {base}/search?limit=..[&q=..]`
pub fn search_url(base: &Url, limit: Option<u32>, search: Option<&str>) -> UpstreamResult<Url> {
    let mut url = endpoint(base, "search")?;
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("limit", &limit.unwrap_or(DEFAULT_LIMIT).to_string());
        if let Some(term) = search.filter(|s| s.chars().count() >= MIN_SEARCH_LEN) {
            pairs.append_pair("q", term);
        }
    }
    Ok(url)
}

/// `GET {base}/exercises/{id}?detail=true`
pub fn detail_url(base: &Url, id: &str) -> UpstreamResult<Url> {
    let mut url = endpoint(base, "exercises")?;
    url.path_segments_mut()
        .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .push(id);
    url.query_pairs_mut().append_pair("detail", "true");
    Ok(url)
}

/// `GET {base}/media/videos/{path}`; `path` may span several segments.
///
/// Each segment is re-encoded, so a decoded `#` or `?` stays part of the
/// file name instead of starting a fragment or query.
pub fn video_url(base: &Url, path: &str) -> UpstreamResult<Url> {
    let mut url = endpoint(base, "media/videos")?;
    url.path_segments_mut()
        .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .extend(path.trim_start_matches('/').split('/'));
    Ok(url)
}
