//! `SiteServer`: axum router, handlers and listener.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use agcp_contact::{ContactForm, ContactView, Field, FormRelay, HONEYPOT_FIELD, SubmitOutcome};
use agcp_pages::{Page, RenderContext, assets, render_contact, render_not_found, render_page};
use axum::Router;
use axum::extract::{DefaultBodyLimit, Form, State};
use axum::handler::Handler;
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Json, Redirect, Response};
use axum::routing::{MethodRouter, get, post};
use metrics::counter;
use metrics_exporter_prometheus::PrometheusHandle;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::health::{self, HealthResponse};
use crate::metrics::{CONTACT_SUBMISSIONS_TOTAL, PAGE_VIEWS_TOTAL, PROMETHEUS_CONTENT_TYPE};

/// Path the confirmation view posts to for a fresh form.
pub const CONTACT_RESET_PATH: &str = "/contact/reset";

const ASSET_CACHE_CONTROL: &str = "public, max-age=3600";

/// Shared state accessible from axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// Where contact submissions go.
    pub relay: Arc<dyn FormRelay>,
    /// When the server started.
    pub start_time: Instant,
    /// Prometheus handle backing `/metrics`.
    pub metrics: PrometheusHandle,
    /// Public origin for absolute links.
    pub base_url: Arc<str>,
}

impl AppState {
    // built per request so the footer year follows the clock
    fn render_context(&self) -> RenderContext {
        RenderContext::new(&self.base_url)
    }
}

/// The site server.
pub struct SiteServer {
    config: ServerConfig,
    relay: Arc<dyn FormRelay>,
    metrics: PrometheusHandle,
    shutdown: CancellationToken,
    start_time: Instant,
}

impl SiteServer {
    /// Create a new server.
    pub fn new(config: ServerConfig, relay: Arc<dyn FormRelay>, metrics: PrometheusHandle) -> Self {
        Self {
            config,
            relay,
            metrics,
            shutdown: CancellationToken::new(),
            start_time: Instant::now(),
        }
    }

    /// Build the axum router with all routes.
    pub fn router(&self) -> Router {
        let state = AppState {
            relay: self.relay.clone(),
            start_time: self.start_time,
            metrics: self.metrics.clone(),
            base_url: Arc::from(self.config.base_url.as_str()),
        };

        let public = ServeDir::new(&self.config.public_dir)
            .call_fallback_on_method_not_allowed(true)
            .fallback(fallback_handler.with_state(state.clone()));

        let mut router = Router::new();
        for page in Page::ROUTED {
            router = router.route(page.path(), page_route(page));
        }

        router
            .route(CONTACT_RESET_PATH, post(contact_reset))
            .route(assets::STYLESHEET_PATH, get(asset_handler))
            .route(assets::SCRIPT_PATH, get(asset_handler))
            .route("/health", get(health_handler))
            .route("/metrics", get(metrics_handler))
            .fallback_service(public)
            .layer(DefaultBodyLimit::max(self.config.max_body_bytes))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// Bind the configured address and serve until
    /// [`shutdown_and_wait`](Self::shutdown_and_wait) is called.
    ///
    /// Returns the bound address (useful with port `0`) and the serving
    /// task's handle.
    pub async fn listen(&self) -> Result<(SocketAddr, JoinHandle<()>), ServerError> {
        let addr = self.config.bind_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;
        let local = listener.local_addr()?;

        let app = self.router();
        let token = self.shutdown.clone();
        let handle = tokio::spawn(async move {
            let serve = axum::serve(listener, app)
                .with_graceful_shutdown(async move { token.cancelled().await });
            if let Err(error) = serve.await {
                error!(%error, "server stopped with error");
            }
        });

        info!(addr = %local, public_dir = %self.config.public_dir.display(), "site server listening");
        Ok((local, handle))
    }

    /// Stop accepting connections and give in-flight requests up to
    /// `drain_timeout_secs` to finish. Returns `false` when the listener had
    /// to be aborted or failed.
    pub async fn shutdown_and_wait(&self, mut handle: JoinHandle<()>) -> bool {
        let timeout = Duration::from_secs(self.config.drain_timeout_secs);
        self.shutdown.cancel();
        info!(timeout_secs = timeout.as_secs(), "draining in-flight requests");

        match tokio::time::timeout(timeout, &mut handle).await {
            Ok(Ok(())) => {
                info!("site server stopped");
                true
            }
            Ok(Err(error)) => {
                error!(%error, "listener task failed");
                false
            }
            Err(_) => {
                warn!("drain timed out after {timeout:?}, dropping open connections");
                handle.abort();
                false
            }
        }
    }

    /// Whether shutdown has started.
    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.is_cancelled()
    }

    /// Get the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

fn page_route(page: Page) -> MethodRouter<AppState> {
    let route = get(move |State(state): State<AppState>| async move { render_routed(&state, page) });
    if page == Page::Contact {
        route.post(contact_submit)
    } else {
        route
    }
}

fn render_routed(state: &AppState, page: Page) -> Html<String> {
    counter!(PAGE_VIEWS_TOTAL, "page" => page.slug()).increment(1);
    debug!(page = page.slug(), "rendering page");
    Html(render_page(page, &state.render_context()).into_string())
}

/// Paths no route or public file claims. A routed path with a trailing
/// slash still renders its page.
async fn fallback_handler(State(state): State<AppState>, uri: Uri) -> Response {
    match Page::from_path(uri.path()) {
        Page::NotFound => {
            counter!(PAGE_VIEWS_TOTAL, "page" => Page::NotFound.slug()).increment(1);
            debug!(path = uri.path(), "no route or public file");
            let markup = render_not_found(&state.render_context(), uri.path());
            (StatusCode::NOT_FOUND, Html(markup.into_string())).into_response()
        }
        page => render_routed(&state, page).into_response(),
    }
}

/// POST /contact
///
/// Every request gets its own controller built from the posted fields.
async fn contact_submit(
    State(state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Response {
    let mut form = ContactForm::new();
    let mut honeypot_filled = false;

    for (key, value) in fields {
        if key == HONEYPOT_FIELD {
            honeypot_filled |= !value.trim().is_empty();
            continue;
        }
        let Some(field) = Field::from_key(&key) else {
            continue;
        };
        if let Err(error) = form.update_field(field, value) {
            warn!(%error, field = field.key(), "ignoring contact field");
        }
    }

    let ctx = state.render_context();

    if honeypot_filled {
        warn!("honeypot field filled, dropping contact submission");
        counter!(CONTACT_SUBMISSIONS_TOTAL, "outcome" => "spam").increment(1);
        return Html(render_contact(&ctx, ContactView::Confirmation).into_string()).into_response();
    }

    let outcome = form.submit(&*state.relay).await;
    counter!(CONTACT_SUBMISSIONS_TOTAL, "outcome" => outcome.label()).increment(1);

    let status = match &outcome {
        SubmitOutcome::Blocked(invalid) => {
            debug!(?invalid, "contact submission blocked");
            StatusCode::UNPROCESSABLE_ENTITY
        }
        _ => StatusCode::OK,
    };

    (status, Html(render_contact(&ctx, form.view()).into_string())).into_response()
}

/// POST /contact/reset
async fn contact_reset() -> Redirect {
    Redirect::to(Page::Contact.path())
}

/// GET /assets/*
async fn asset_handler(uri: Uri) -> Response {
    match assets::lookup(uri.path()) {
        Some(asset) => (
            [(CONTENT_TYPE, asset.content_type), (CACHE_CONTROL, ASSET_CACHE_CONTROL)],
            asset.body,
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// GET /health
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(health::health_check(state.start_time))
}

/// GET /metrics
async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)],
        crate::metrics::render(&state.metrics),
    )
}
