// src/input.rs
// =============================================================================
// Loads the list of URLs to scan.
//
// Format: plain text, one URL per line. Surrounding whitespace is trimmed and
// blank lines are skipped. Nothing else is validated here - a malformed URL
// simply fails to fetch later and is skipped like any other dead page.
// =============================================================================

use anyhow::{Context, Result};
use std::path::Path;

// Reads the URL list from disk
//
// Returns an error (which ends the program) if the file can't be read
pub async fn load_urls(path: &Path) -> Result<Vec<String>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to open URL list '{}'", path.display()))?;

    Ok(parse_url_list(&content))
}

// Splits file content into URLs
fn parse_url_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_blank_lines_skipped() {
        let urls = parse_url_list("https://a.com\n\n   \nhttps://b.com\r\n");
        assert_eq!(urls, vec!["https://a.com", "https://b.com"]);
    }

    #[test]
    fn test_no_validation() {
        let urls = parse_url_list("not a url\n");
        assert_eq!(urls, vec!["not a url"]);
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "https://example.com").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  https://example.org/team  ").unwrap();

        let urls = load_urls(file.path()).await.unwrap();
        assert_eq!(urls, vec!["https://example.com", "https://example.org/team"]);
    }

    #[tokio::test]
    async fn test_missing_file_is_error() {
        let err = load_urls(Path::new("/definitely/not/here.txt"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to open URL list"));
    }
}
