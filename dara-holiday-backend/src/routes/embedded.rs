//! Assets compiled into the binary, served with a content hash ETag.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash as _, Hasher as _};
use std::time::Duration;

use bytes::Bytes;
use headers::{CacheControl, ContentType, ETag, HeaderMapExt as _, IfNoneMatch};
use http::{Request, Response, StatusCode};
use http_body_util::Full;

use crate::error::AppError;
use crate::ResponseTypedHeaderExt as _;

const ONE_YEAR: Duration = Duration::from_secs(31_536_000);

#[must_use]
pub fn content_hash(bytes: &[u8]) -> u64 {
    let mut hasher = DefaultHasher::new();
    bytes.hash(&mut hasher);
    hasher.finish()
}

#[must_use]
pub fn etag_for(version: u64) -> Option<ETag> {
    format!("\"{version:x}\"").parse().ok()
}

pub fn serve_embedded(
    request: &Request<Bytes>,
    bytes: &'static [u8],
    content_type: ContentType,
    etag: Option<&ETag>,
) -> Result<Response<Full<Bytes>>, AppError> {
    let if_none_match: Option<IfNoneMatch> = request.headers().typed_get();
    if let (Some(etag), Some(if_none_match)) = (etag, if_none_match) {
        if !if_none_match.precondition_passes(etag) {
            return Ok(Response::builder()
                .status(StatusCode::NOT_MODIFIED)
                .typed_header(etag.clone())
                .body(Full::default())?);
        }
    }

    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .typed_header(content_type)
        .typed_header(
            CacheControl::new()
                .with_immutable()
                .with_public()
                .with_max_age(ONE_YEAR),
        );
    if let Some(etag) = etag {
        builder = builder.typed_header(etag.clone());
    }
    Ok(builder.body(Full::new(Bytes::from_static(bytes)))?)
}
