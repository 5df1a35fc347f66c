use bytes::Bytes;
use headers::{ContentType, ETag};
use http::{Request, Response};
use http_body_util::Full;
use once_cell::sync::Lazy;

use super::embedded::{content_hash, etag_for, serve_embedded};
use crate::error::AppError;

pub static BUNDLE_CSS: &[u8] = include_bytes!("../../../frontend/bundle.css");

/// Appended to the stylesheet url so a new build is never served from cache.
pub static BUNDLE_CSS_VERSION: Lazy<u64> = Lazy::new(|| content_hash(BUNDLE_CSS));

static BUNDLE_CSS_ETAG: Lazy<Option<ETag>> = Lazy::new(|| etag_for(*BUNDLE_CSS_VERSION));

pub fn bundlecss(request: &Request<Bytes>) -> Result<Response<Full<Bytes>>, AppError> {
    serve_embedded(
        request,
        BUNDLE_CSS,
        ContentType::from(mime::TEXT_CSS_UTF_8),
        BUNDLE_CSS_ETAG.as_ref(),
    )
}

#[cfg(test)]
mod tests {
    use http::header::{CACHE_CONTROL, CONTENT_TYPE, ETAG, IF_NONE_MATCH};
    use http::StatusCode;

    use super::*;

    #[test]
    fn serves_css_with_etag() {
        let request = Request::get("/bundle.css").body(Bytes::new()).unwrap();
        let response = bundlecss(&request).unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], "text/css; charset=utf-8");
        assert!(response.headers()[CACHE_CONTROL]
            .to_str()
            .unwrap()
            .contains("immutable"));
        assert!(response.headers().contains_key(ETAG));
    }

    #[test]
    fn not_modified_when_etag_matches() {
        let etag = format!("\"{:x}\"", *BUNDLE_CSS_VERSION);
        let request = Request::get("/bundle.css")
            .header(IF_NONE_MATCH, etag)
            .body(Bytes::new())
            .unwrap();
        let response = bundlecss(&request).unwrap();
        assert_eq!(response.status(), StatusCode::NOT_MODIFIED);
    }

    #[test]
    fn stale_etag_gets_full_body() {
        let request = Request::get("/bundle.css")
            .header(IF_NONE_MATCH, "\"stale\"")
            .body(Bytes::new())
            .unwrap();
        let response = bundlecss(&request).unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
