use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use bytes::Bytes;
use headers::{CacheControl, ContentType};
use http::{Response, StatusCode};
use http_body_util::Full;
use percent_encoding::percent_decode_str;
use tokio::fs;

use crate::error::AppError;
use crate::{AppState, ResponseTypedHeaderExt as _};

const ONE_DAY: Duration = Duration::from_secs(86_400);

/// Resolves a request path below `root`. Returns `None` for anything that
/// could leave it.
fn resolve(root: &Path, path: &str) -> Option<PathBuf> {
    let decoded = percent_decode_str(path).decode_utf8().ok()?;
    let relative = Path::new(decoded.trim_start_matches('/'));
    let safe = relative
        .components()
        .all(|component| matches!(component, Component::Normal(_)));
    (safe && !decoded.contains('\\') && !decoded.contains('\0')).then(|| root.join(relative))
}

pub async fn asset(state: &AppState, path: &str) -> Result<Response<Full<Bytes>>, AppError> {
    let file = resolve(&state.config.static_root, path).ok_or(AppError::NotFound)?;
    match fs::metadata(&file).await {
        Ok(metadata) if metadata.is_file() => {}
        Ok(_) => return Err(AppError::NotFound),
        Err(err) if err.kind() == ErrorKind::NotFound => return Err(AppError::NotFound),
        Err(err) => return Err(err.into()),
    }
    let contents = fs::read(&file).await?;
    let mime = mime_guess::from_path(&file).first_or_octet_stream();

    Ok(Response::builder()
        .status(StatusCode::OK)
        .typed_header(ContentType::from(mime))
        .typed_header(CacheControl::new().with_public().with_max_age(ONE_DAY))
        .body(Full::new(Bytes::from(contents)))?)
}
