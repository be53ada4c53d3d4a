use url::form_urlencoded;

/// Query parameter that carries the video identifier on watch URLs
pub const VIDEO_ID_PARAM: &str = "v";

/// Extract the video identifier from the `v` query parameter of a URL.
///
/// Only the query component is inspected: everything after the first `?`
/// up to an optional `#fragment`. Values are percent-decoded. Blank values
/// are ignored and the first non-blank `v` wins. Returns `None` when the
/// input has no query or no usable `v` parameter; malformed input never
/// errors.
///
/// Path-style forms such as `youtu.be/<id>` or `/embed/<id>` are not
/// recognised.
pub fn extract_video_id(url: &str) -> Option<String> {
    let query = query_component(url)?;

    form_urlencoded::parse(query.as_bytes())
        .find(|(key, value)| key == VIDEO_ID_PARAM && !value.is_empty())
        .map(|(_, value)| value.into_owned())
}

fn query_component(url: &str) -> Option<&str> {
    let without_fragment = url.split('#').next().unwrap_or(url);
    let (_, query) = without_fragment.split_once('?')?;

    if query.is_empty() {
        None
    } else {
        Some(query)
    }
}
