//! Joining configured base URLs with service paths.
//!
//! Base URLs come from the config file or defaults and may or may not end in
//! a slash, so every request URL is built through here.

/// Strips trailing slashes from a base URL.
///
/// ```
/// use papagaio::utils::url::normalize_base_url;
///
/// assert_eq!(normalize_base_url("https://api.duckduckgo.com/"), "https://api.duckduckgo.com");
/// assert_eq!(normalize_base_url("http://127.0.0.1:8080///"), "http://127.0.0.1:8080");
/// ```
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

/// Appends `endpoint` to `base_url` with exactly one slash between them.
///
/// An empty endpoint yields the base URL with a single trailing slash, which
/// is what the search service expects.
///
/// ```
/// use papagaio::utils::url::construct_api_url;
///
/// assert_eq!(
///     construct_api_url("https://pubchem.ncbi.nlm.nih.gov/rest/pug/", "/compound/CID/2244/JSON"),
///     "https://pubchem.ncbi.nlm.nih.gov/rest/pug/compound/CID/2244/JSON"
/// );
/// assert_eq!(construct_api_url("https://api.duckduckgo.com", ""), "https://api.duckduckgo.com/");
/// ```
pub fn construct_api_url(base_url: &str, endpoint: &str) -> String {
    let base = normalize_base_url(base_url);
    format!("{}/{}", base, endpoint.trim_start_matches('/'))
}
