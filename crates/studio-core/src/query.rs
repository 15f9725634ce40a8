use crate::constants::CATEGORY_QUERY_KEY;

/// Extract the `category` value from a `location.search` string.
///
/// Accepts the string with or without its leading `?`. The first occurrence
/// wins; an empty or undecodable value yields `None`.
pub fn category_param(search: &str) -> Option<String> {
    query_value(search, CATEGORY_QUERY_KEY)
}

pub fn query_value(search: &str, key: &str) -> Option<String> {
    let query = search.strip_prefix('?').unwrap_or(search);
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(k)? == key).then(|| decode_component(v))
        })
        .flatten()
        .filter(|v| !v.is_empty())
}

fn decode_component(raw: &str) -> Option<String> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).ok().map(|s| s.into_owned())
}
