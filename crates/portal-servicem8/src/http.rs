//! Status-code mapping shared by every endpoint.

use crate::error::ServiceM8Error;

/// Map a response to a typed error unless it is a success.
///
/// `path` is reported in [`ServiceM8Error::NotFound`].
pub async fn check_response(
    resp: reqwest::Response,
    path: &str,
) -> Result<reqwest::Response, ServiceM8Error> {
    let status = resp.status();
    match status.as_u16() {
        401 | 403 => Err(ServiceM8Error::Unauthorized {
            status: status.as_u16(),
        }),
        404 => Err(ServiceM8Error::NotFound {
            path: path.to_string(),
        }),
        429 => Err(ServiceM8Error::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        }),
        _ if !status.is_success() => Err(ServiceM8Error::Api {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        }),
        _ => Ok(resp),
    }
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(60)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn mock_response(status: u16, retry_after: Option<&str>, body: &'static str) -> reqwest::Response {
        let mut builder = ::http::Response::builder().status(status);
        if let Some(value) = retry_after {
            builder = builder.header("Retry-After", value);
        }
        reqwest::Response::from(builder.body(body).unwrap())
    }

    #[rstest]
    #[case(Some("120"), 120)]
    #[case(None, 60)]
    #[case(Some("soon"), 60)]
    fn retry_after(#[case] header: Option<&str>, #[case] expected: u64) {
        assert_eq!(parse_retry_after(&mock_response(429, header, "")), expected);
    }

    #[rstest]
    #[case(401)]
    #[case(403)]
    #[tokio::test]
    async fn auth_failures_are_unauthorized(#[case] status: u16) {
        let err = check_response(mock_response(status, None, ""), "/job.json")
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceM8Error::Unauthorized { status: s } if s == status));
    }

    #[tokio::test]
    async fn not_found_carries_path() {
        let err = check_response(mock_response(404, None, ""), "/job/abc.json")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "not found: /job/abc.json");
    }

    #[tokio::test]
    async fn rate_limited_reads_header() {
        let err = check_response(mock_response(429, Some("30"), ""), "/job.json")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceM8Error::RateLimited {
                retry_after_secs: 30
            }
        ));
    }

    #[tokio::test]
    async fn other_status_keeps_body() {
        let err = check_response(mock_response(500, None, "boom"), "/job.json")
            .await
            .unwrap_err();
        match err {
            ServiceM8Error::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn success_passes_through() {
        assert!(check_response(mock_response(200, None, "[]"), "/job.json").await.is_ok());
    }
}
