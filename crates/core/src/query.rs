//! URL query-string construction

use url::form_urlencoded;

/// Append `params` to `url` as a form-urlencoded query string
///
/// Uses `?` when the url has no query yet and `&` otherwise. A trailing
/// `#fragment` stays at the end. With no params the url is returned unchanged.
pub fn join_url_params<I, K, V>(url: &str, params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        serializer.append_pair(key.as_ref(), value.as_ref());
    }
    let query = serializer.finish();

    if query.is_empty() {
        return url.to_string();
    }

    let (base, fragment) = match url.split_once('#') {
        Some((base, fragment)) => (base, Some(fragment)),
        None => (url, None),
    };

    let glue = if !base.contains('?') {
        "?"
    } else if base.ends_with('?') || base.ends_with('&') {
        ""
    } else {
        "&"
    };

    let mut joined = format!("{}{}{}", base, glue, query);
    if let Some(fragment) = fragment {
        joined.push('#');
        joined.push_str(fragment);
    }
    joined
}
