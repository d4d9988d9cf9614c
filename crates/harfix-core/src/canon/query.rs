//! Query string ordering.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::form_urlencoded;
use url::Url;

/// Bytes left unescaped in query keys and values: the unreserved set of a
/// Node-style `querystring.escape`. A space is written as `%20`, never `+`,
/// and `'` is escaped as the query parser of special URLs would do anyway.
const QUERY_COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'(')
    .remove(b')');

/// Sorts the query pairs of `url` by key, in place.
///
/// The sort is stable, so repeated keys (`a=x&a=y`) keep their values in the
/// order they were sent. An empty query is removed rather than left as a
/// trailing `?`.
pub fn sort_query_pairs(url: &mut Url) {
    let query = url.query().unwrap_or_default().to_owned();
    if query.is_empty() {
        url.set_query(None);
        return;
    }

    let mut pairs: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect();
    if pairs.is_empty() {
        url.set_query(None);
        return;
    }
    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    let sorted = pairs
        .iter()
        .map(|(k, v)| {
            format!(
                "{}={}",
                utf8_percent_encode(k, QUERY_COMPONENT_ENCODE_SET),
                utf8_percent_encode(v, QUERY_COMPONENT_ENCODE_SET)
            )
        })
        .collect::<Vec<_>>()
        .join("&");
    url.set_query(Some(&sorted));
}
