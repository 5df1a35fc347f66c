pub mod autoplay;
pub mod contact;
pub mod error;
pub mod form;
pub mod i18n;
pub mod language;
pub mod router;
pub mod routes;
pub mod session;
pub mod templating;

use core::convert::Infallible;
use core::future::Future;
use core::num::NonZeroUsize;
use core::pin::Pin;
use std::sync::Arc;

use bytes::Bytes;
use dara_holiday_catalog::gallery::WELCOME_IMAGES;
use dara_holiday_catalog::{CarouselCursor, Catalog};
use dara_holiday_config::Config;
use error::AppError;
use futures_util::pin_mut;
use handlebars::Handlebars;
use headers::{Header, HeaderMapExt as _};
use http::{Request, Response};
use http_body::Body;
use http_body_util::{BodyExt as _, Full, Limited};
use hyper_util::rt::{TokioExecutor, TokioIo};
use i18n::Translations;
use router::Route;
use session::Session;
use tokio::net::TcpListener;
use tokio::select;
use tokio::sync::watch;
use tracing::{debug_span, error, info, warn, Instrument as _};

use crate::autoplay::{Autoplay, AutoplayHandle, SharedCursor};
use crate::contact::{ContactSink, LogContactSink};

/// Largest request body the site accepts. Only the contact form has one.
const MAX_BODY_SIZE: usize = 64 * 1024;

const WELCOME_SLIDES: NonZeroUsize = match NonZeroUsize::new(WELCOME_IMAGES.len()) {
    Some(len) => len,
    None => panic!("the welcome slider needs at least one image"),
};

/// Everything a request handler reads. Only the welcome slider cursor
/// changes after startup.
pub struct AppState {
    pub config: Config,
    pub catalog: &'static Catalog,
    pub translations: Translations,
    pub handlebars: Handlebars<'static>,
    pub welcome_slider: SharedCursor,
    pub contact_sink: Arc<dyn ContactSink>,
    /// Held only so the welcome slider stops with the state.
    _autoplay: AutoplayHandle,
}

pub trait ResponseTypedHeaderExt {
    #[must_use]
    fn typed_header<H: Header>(self, header: H) -> Self;
}

impl ResponseTypedHeaderExt for http::response::Builder {
    fn typed_header<H: Header>(mut self, header: H) -> Self {
        if let Some(res) = self.headers_mut() {
            res.typed_insert(header);
        }
        self
    }
}

/// The whole site as one hyper service.
#[derive(Clone)]
pub struct Svc {
    state: Arc<AppState>,
}

impl Svc {
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

impl<B> hyper::service::Service<Request<B>> for Svc
where
    B: Body + Send + 'static,
    B::Data: Send,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;
    type Response = Response<Full<Bytes>>;

    fn call(&self, request: Request<B>) -> Self::Future {
        let state = Arc::clone(&self.state);
        let span = debug_span!("request", method = %request.method(), path = %request.uri().path());
        Box::pin(
            async move {
                let route = Route::parse(request.method(), request.uri().path());
                Ok(match handle(&state, route, request).await {
                    Ok(response) => response,
                    Err(err) => err.into_response(),
                })
            }
            .instrument(span),
        )
    }
}

async fn collect_body<B>(request: Request<B>) -> Result<Request<Bytes>, AppError>
where
    B: Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let (parts, body) = request.into_parts();
    let body = Limited::new(body, MAX_BODY_SIZE)
        .collect()
        .await
        .map_err(AppError::Body)?
        .to_bytes();
    Ok(Request::from_parts(parts, body))
}

async fn handle<B>(
    state: &AppState,
    route: Route,
    request: Request<B>,
) -> Result<Response<Full<Bytes>>, AppError>
where
    B: Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let request = collect_body(request).await?;
    let session = Session::new(request.headers());
    match route {
        Route::Home => routes::index::index(state, &request, &session),
        Route::Rooms => routes::rooms::rooms(state, &request, &session),
        Route::RoomDetail(id) => routes::room_detail::room_detail(state, &request, &session, &id),
        Route::Gallery => routes::gallery::gallery(state, &request, &session),
        Route::Contacts => routes::contacts::contacts(state, &request, &session),
        Route::ContactSubmit => routes::contacts::submit(state, &request, &session),
        Route::SwitchLanguage => routes::language::switch_language(&request, session),
        Route::BundleCss => routes::bundlecss::bundlecss(&request),
        Route::Favicon => routes::favicon::favicon_svg(&request),
        Route::Asset(path) => routes::assets::asset(state, &path).await,
        Route::MethodNotAllowed => Err(AppError::MethodNotAllowed),
        Route::NotFound => Err(AppError::NotFound),
    }
}

/// Builds the service with contact requests going to the log.
pub fn setup_server(config: Config) -> Result<Svc, AppError> {
    setup_server_with_sink(config, Arc::new(LogContactSink))
}

/// Must be called inside a tokio runtime, the welcome slider autoplay is
/// spawned here and stops when the last [`Svc`] clone is dropped.
pub fn setup_server_with_sink(
    config: Config,
    contact_sink: Arc<dyn ContactSink>,
) -> Result<Svc, AppError> {
    info!("starting up server...");

    let handlebars = templating::handlebars()?;
    let welcome_slider = SharedCursor::new(CarouselCursor::new(WELCOME_SLIDES));
    let autoplay = Autoplay::spawn(welcome_slider.clone(), config.slider_interval());

    Ok(Svc {
        state: Arc::new(AppState {
            config,
            catalog: Catalog::shipped(),
            translations: Translations::bundled(),
            handlebars,
            welcome_slider,
            contact_sink,
            _autoplay: autoplay,
        }),
    })
}

#[allow(clippy::cognitive_complexity)]
pub async fn run_server(
    config: Config,
) -> Result<impl Future<Output = Result<(), AppError>>, AppError> {
    let addr = config.socket_addr();
    let service = setup_server(config)?;

    let listener = TcpListener::bind(addr).await?;

    // tell the connections to shutdown
    let (shutdown_tx, shutdown_rx) = watch::channel(());
    let shutdown_tx = Arc::new(shutdown_tx);

    // wait for the connections to finish shutdown
    let (closed_tx, closed_rx) = watch::channel(());

    info!("listening on http://{addr}");

    Ok(async move {
        #[allow(clippy::redundant_pub_crate)]
        loop {
            select! {
                accept = listener.accept() => {
                    let (socket, remote_addr) = match accept {
                        Ok(accept) => accept,
                        Err(err) => {
                            error!("failed to accept connection: {err}");
                            continue;
                        }
                    };

                    let service = service.clone();
                    let shutdown_tx = Arc::clone(&shutdown_tx);
                    let closed_rx = closed_rx.clone();

                    let fut = async move {
                        let socket = TokioIo::new(socket);

                        let builder = hyper_util::server::conn::auto::Builder::new(TokioExecutor::new());
                        let connection = builder.serve_connection_with_upgrades(socket, service);
                        pin_mut!(connection);

                        loop {
                            select! {
                                connection_result = connection.as_mut() => {
                                    if let Err(err) = connection_result
                                    {
                                        error!("failed to serve connection: {err:#}");
                                    }
                                    break; // (gracefully) finished connection
                                }
                                () = shutdown_tx.closed() => {
                                    connection.as_mut().graceful_shutdown();
                                }
                            }
                        }

                        drop(closed_rx);
                    };

                    let connection_span = tracing::debug_span!("connection", %remote_addr);
                    tokio::spawn(fut.instrument(connection_span));
                }
                () = shutdown_signal() => {
                    warn!("SHUTDOWN");
                    drop(shutdown_rx); // initiate shutdown
                    drop(closed_rx);
                    closed_tx.closed().await;
                    break;
                }
            }
        }

        // stops the welcome slider autoplay
        drop(service);
        Ok(())
    })
}

#[allow(clippy::redundant_pub_crate)]
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!("failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!("failed to install signal handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
