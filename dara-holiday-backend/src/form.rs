use bytes::Bytes;
use http::{Request, Uri};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::AppError;
use crate::session::Session;

pub trait CsrfToken {
    fn csrf_token(&self) -> &str;
}

/// A url encoded form body whose token matched the session cookie.
pub struct CsrfSafeForm<T: CsrfToken> {
    pub value: T,
}

impl<T> CsrfSafeForm<T>
where
    T: DeserializeOwned + CsrfToken,
{
    pub fn from_request(request: &Request<Bytes>, session: &Session) -> Result<Self, AppError> {
        let value: T = serde_urlencoded::from_bytes(request.body())?;
        if value.csrf_token() != session.csrf_token() {
            return Err(AppError::WrongCsrfToken);
        }
        Ok(Self { value })
    }
}

/// A malformed query renders the page in its default state.
pub fn query<T: DeserializeOwned + Default>(uri: &Uri) -> T {
    let Some(query) = uri.query() else {
        return T::default();
    };
    serde_urlencoded::from_str(query).unwrap_or_else(|err| {
        debug!("ignoring malformed query {query:?}: {err}");
        T::default()
    })
}

/// Parses an optional numeric query value, treating garbage as absent.
pub fn index_param(value: Option<&str>) -> Option<usize> {
    value.and_then(|value| value.trim().parse().ok())
}
