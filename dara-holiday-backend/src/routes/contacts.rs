use bytes::Bytes;
use http::header::LOCATION;
use http::{Request, Response, StatusCode};
use http_body_util::Full;
use serde::{Deserialize, Serialize};

use crate::contact::{ContactPayload, FieldErrors};
use crate::error::AppError;
use crate::form::{query, CsrfSafeForm};
use crate::session::{ResponseSessionExt as _, Session};
use crate::templating::PageContext;
use crate::AppState;

#[derive(Deserialize, Default)]
struct ContactsQuery {
    sent: Option<String>,
}

#[derive(Serialize, Default)]
struct ErrorMessages {
    name: Option<String>,
    email: Option<String>,
    message: Option<String>,
}

impl ErrorMessages {
    fn new(page: &PageContext<'_>, errors: FieldErrors) -> Self {
        let message = |key: Option<&'static str>| key.map(|key| page.t(key));
        Self {
            name: message(errors.name),
            email: message(errors.email),
            message: message(errors.message),
        }
    }
}

#[derive(Serialize)]
struct ContactsPage {
    sent: bool,
    form: ContactPayload,
    errors: ErrorMessages,
}

pub fn contacts(
    state: &AppState,
    request: &Request<Bytes>,
    session: &Session,
) -> Result<Response<Full<Bytes>>, AppError> {
    let page = PageContext::new(state, session, request.uri());
    let params: ContactsQuery = query(request.uri());
    page.render(
        StatusCode::OK,
        "contacts",
        "contacts",
        page.t("navbar.contacts"),
        ContactsPage {
            sent: params.sent.as_deref() == Some("1"),
            form: ContactPayload::default(),
            errors: ErrorMessages::default(),
        },
    )
}

pub fn submit(
    state: &AppState,
    request: &Request<Bytes>,
    session: &Session,
) -> Result<Response<Full<Bytes>>, AppError> {
    let form = CsrfSafeForm::<ContactPayload>::from_request(request, session)?;

    match form.value.validate() {
        Ok(message) => {
            state.contact_sink.deliver(&message)?;
            Ok(Response::builder()
                .status(StatusCode::SEE_OTHER)
                .header(LOCATION, "/contatti?sent=1")
                .with_session(session)
                .body(Full::default())?)
        }
        Err(errors) => {
            let page = PageContext::new(state, session, request.uri());
            let errors = ErrorMessages::new(&page, errors);
            page.render(
                StatusCode::UNPROCESSABLE_ENTITY,
                "contacts",
                "contacts",
                page.t("navbar.contacts"),
                ContactsPage {
                    sent: false,
                    form: form.value,
                    errors,
                },
            )
        }
    }
}
