// src/breach.rs
use std::num::ParseIntError;
use std::time::Duration;

use thiserror::Error;

use crate::crypto;
use crate::models::BreachVerdict;

pub const USER_AGENT: &str = "SecurePass-Browser-Extension";

// First 5 hex chars of the SHA-1 digest go to the server, the rest stays local
const PREFIX_LEN: usize = 5;

#[derive(Debug, Error)]
pub enum BreachError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed occurrence count: {0}")]
    BadCount(#[from] ParseIntError),
}

/// k-anonymity client for the pwned-passwords range endpoint.
pub struct BreachChecker {
    client: reqwest::Client,
    api_base: String,
}

impl BreachChecker {
    pub fn new(api_base: &str, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    /// Check a password against the breach corpus.
    ///
    /// Failures are folded into the verdict (`is_error`) rather than
    /// surfaced as errors, so callers never need an exception path.
    pub async fn check(&self, password: &str) -> BreachVerdict {
        match self.lookup(password).await {
            Ok(verdict) => verdict,
            Err(e) => {
                log::warn!("Breach lookup failed: {}", e);
                BreachVerdict {
                    is_compromised: false,
                    occurrence_count: 0,
                    is_error: true,
                }
            }
        }
    }

    async fn lookup(&self, password: &str) -> std::result::Result<BreachVerdict, BreachError> {
        let digest = crypto::sha1_hex_upper(password);
        let (prefix, suffix) = digest.split_at(PREFIX_LEN);

        let url = format!("{}/range/{}", self.api_base, prefix);
        let body = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let verdict = match scan_range_body(&body, suffix)? {
            Some(count) => BreachVerdict {
                is_compromised: true,
                occurrence_count: count,
                is_error: false,
            },
            None => BreachVerdict {
                is_compromised: false,
                occurrence_count: 0,
                is_error: false,
            },
        };

        Ok(verdict)
    }
}

// Scan SUFFIX:COUNT lines for our suffix; lines without a separator are
// skipped, a matching line with a garbled count is a parse failure
fn scan_range_body(body: &str, suffix: &str) -> std::result::Result<Option<u64>, ParseIntError> {
    for line in body.lines() {
        let Some((candidate, count)) = line.trim().split_once(':') else {
            continue;
        };

        if candidate.eq_ignore_ascii_case(suffix) {
            return Ok(Some(count.trim().parse::<u64>()?));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUFFIX: &str = "1E4C9B93F3F0682250B6CF8331B7EE68FD8";

    #[test]
    fn test_scan_finds_matching_suffix() {
        let body = "0018A45C4D1DEF81644B54AB7F969B88D65:1\n\
                    1E4C9B93F3F0682250B6CF8331B7EE68FD8:3730471\n\
                    011053FD0102E94D6AE2F8B83D76FAF94F6:873";
        assert_eq!(scan_range_body(body, SUFFIX), Ok(Some(3730471)));
    }

    #[test]
    fn test_scan_match_is_case_insensitive() {
        let body = "1e4c9b93f3f0682250b6cf8331b7ee68fd8:42";
        assert_eq!(scan_range_body(body, SUFFIX), Ok(Some(42)));
    }

    #[test]
    fn test_scan_no_match() {
        let body = "0018A45C4D1DEF81644B54AB7F969B88D65:1\n\
                    011053FD0102E94D6AE2F8B83D76FAF94F6:873";
        assert_eq!(scan_range_body(body, SUFFIX), Ok(None));
    }

    #[test]
    fn test_scan_skips_lines_without_separator() {
        let body = "garbage\n\n1E4C9B93F3F0682250B6CF8331B7EE68FD8:7";
        assert_eq!(scan_range_body(body, SUFFIX), Ok(Some(7)));
    }

    #[test]
    fn test_scan_rejects_garbled_count() {
        let body = "1E4C9B93F3F0682250B6CF8331B7EE68FD8:notanumber";
        assert!(scan_range_body(body, SUFFIX).is_err());
    }

    #[test]
    fn test_scan_tolerates_crlf_and_padding() {
        let body = "  1E4C9B93F3F0682250B6CF8331B7EE68FD8:9  \r\nAAAA:1";
        assert_eq!(scan_range_body(body, SUFFIX), Ok(Some(9)));
    }

    // One-shot HTTP stub; answers a single request with the given status
    // line and body, then closes the connection
    fn serve_once(status_line: &'static str, body: &'static str) -> (String, std::thread::JoinHandle<()>) {
        use std::io::{Read, Write};

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = std::thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 2048];
                let _ = stream.read(&mut buf);
                let response = format!(
                    "HTTP/1.1 {}\r\nconnection: close\r\ncontent-length: {}\r\n\r\n{}",
                    status_line,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });

        (format!("http://{}", addr), handle)
    }

    #[tokio::test]
    async fn test_match_against_local_stub() {
        // SHA-1("password") = 5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8
        let (base, handle) = serve_once(
            "200 OK",
            "0018A45C4D1DEF81644B54AB7F969B88D65:1\r\n\
             1E4C9B93F3F0682250B6CF8331B7EE68FD8:3730471\r\n",
        );

        let checker = BreachChecker::new(&base, Duration::from_secs(2));
        let verdict = checker.check("password").await;
        handle.join().unwrap();

        assert!(!verdict.is_error);
        assert!(verdict.is_compromised);
        assert_eq!(verdict.occurrence_count, 3730471);
    }

    #[tokio::test]
    async fn test_non_200_response_yields_error_verdict() {
        let (base, handle) = serve_once("500 Internal Server Error", "");

        let checker = BreachChecker::new(&base, Duration::from_secs(2));
        let verdict = checker.check("password").await;
        handle.join().unwrap();

        assert!(verdict.is_error);
        assert!(!verdict.is_compromised);
        assert_eq!(verdict.occurrence_count, 0);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_yields_error_verdict() {
        // Nothing listens on port 9 locally; the failure must fold into
        // the verdict instead of propagating
        let checker = BreachChecker::new("http://127.0.0.1:9", Duration::from_millis(500));
        let verdict = checker.check("password").await;
        assert!(verdict.is_error);
        assert!(!verdict.is_compromised);
        assert_eq!(verdict.occurrence_count, 0);
    }
}
