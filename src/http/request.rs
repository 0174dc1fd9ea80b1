use reqwest::Client;
use reqwest::header::HeaderMap;
use tracing::debug;

use crate::error::{Error, Result};
use crate::utils::normalize_url;

/// Send a single GET request and return the response headers.
///
/// The URL is normalized first. Any status code counts as a successful
/// fetch; only transport failures are errors. The body is never read.
pub async fn fetch_headers(client: &Client, url: &str) -> Result<HeaderMap> {
    let url_str = normalize_url(url);

    let response = client
        .get(&url_str)
        .send()
        .await
        .map_err(|source| Error::Fetch {
            url: url.to_string(),
            source,
        })?;

    debug!(url = %url_str, status = %response.status(), "fetched headers");

    Ok(response.headers().clone())
}
