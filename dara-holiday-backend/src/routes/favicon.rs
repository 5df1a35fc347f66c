use bytes::Bytes;
use headers::{ContentType, ETag};
use http::{Request, Response};
use http_body_util::Full;
use once_cell::sync::Lazy;

use super::embedded::{content_hash, etag_for, serve_embedded};
use crate::error::AppError;

static FAVICON_SVG: &[u8] = include_bytes!("../../../frontend/favicon.svg");

static FAVICON_ETAG: Lazy<Option<ETag>> = Lazy::new(|| etag_for(content_hash(FAVICON_SVG)));

pub fn favicon_svg(request: &Request<Bytes>) -> Result<Response<Full<Bytes>>, AppError> {
    serve_embedded(
        request,
        FAVICON_SVG,
        ContentType::from(mime::IMAGE_SVG),
        FAVICON_ETAG.as_ref(),
    )
}
