use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Split text into URLs, one per non-blank line
pub fn parse_url_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read a list of URLs from a file
pub fn read_urls_from_file(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|source| Error::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_url_lines(&text))
}

/// Command-line URLs first, then the input file's URLs
pub fn collect_urls(cli_urls: &[String], input: Option<&Path>) -> Result<Vec<String>> {
    let mut urls = cli_urls.to_vec();
    if let Some(path) = input {
        let file_urls = read_urls_from_file(path)?;
        tracing::debug!(path = %path.display(), count = file_urls.len(), "loaded URLs from file");
        urls.extend(file_urls);
    }
    Ok(urls)
}
