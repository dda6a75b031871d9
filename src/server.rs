// Dashboard HTTP server
//
// Serves the page, its view model, and chart figures recomputed from the
// selection the browser posts back.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

use crate::app::DashboardContext;
use crate::config::DashboardConfig;
use crate::data::filter::{PayloadRange, SiteSelection};
use crate::error::DashError;
use crate::layout::PageLayout;
use crate::state::{ChartUpdate, Control, SelectionState, Subscriptions};

const INDEX_HTML: &str = include_str!("../assets/index.html");

/// Shared, read-only request state.
#[derive(Clone)]
struct ServerState {
    context: Arc<DashboardContext>,
    subscriptions: Arc<Subscriptions>,
    layout: Arc<PageLayout>,
}

/// Dashboard HTTP server
pub struct DashboardServer {
    config: DashboardConfig,
    state: ServerState,
}

impl DashboardServer {
    pub fn new(config: DashboardConfig, context: DashboardContext) -> Self {
        let layout = PageLayout::build(&context);
        Self {
            config,
            state: ServerState {
                context: Arc::new(context),
                subscriptions: Arc::new(Subscriptions::standard()),
                layout: Arc::new(layout),
            },
        }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/", get(index_handler))
            .route("/api/health", get(health_handler))
            .route("/api/layout", get(layout_handler))
            .route("/api/update", post(update_handler))
            .route("/api/charts/:id", get(chart_handler))
            .layer(middleware::from_fn(log_request))
            .with_state(self.state.clone())
    }

    /// Bind the configured address and serve until Ctrl-C.
    pub async fn serve(self) -> anyhow::Result<()> {
        let addr = self.config.addr();
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("binding {addr}"))?;
        self.serve_on(listener).await
    }

    /// Serve on an already bound listener.
    pub async fn serve_on(self, listener: TcpListener) -> anyhow::Result<()> {
        let local = listener.local_addr()?;
        log::info!("Dashboard ready at http://{local}");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("serving dashboard")?;

        log::info!("Dashboard stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("failed to install Ctrl-C handler: {e}");
        std::future::pending::<()>().await;
    }
}

async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let started = Instant::now();
    let response = next.run(req).await;
    log::debug!(
        "{method} {uri} -> {} in {:?}",
        response.status(),
        started.elapsed()
    );
    response
}

impl IntoResponse for DashError {
    fn into_response(self) -> Response {
        let status = match self {
            DashError::UnknownChart(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health_handler() -> &'static str {
    "ok"
}

async fn layout_handler(State(state): State<ServerState>) -> Json<PageLayout> {
    Json(state.layout.as_ref().clone())
}

/// Body of `POST /api/update`: the full selection plus the controls that
/// changed. An empty `changed` list re-renders every chart.
#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    pub selection: SelectionState,
    #[serde(default)]
    pub changed: Vec<Control>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateResponse {
    pub updates: Vec<ChartUpdate>,
}

async fn update_handler(
    State(state): State<ServerState>,
    Json(req): Json<UpdateRequest>,
) -> Json<UpdateResponse> {
    let selection = SelectionState {
        site: req.selection.site,
        payload: req.selection.payload.normalized(),
    };
    let updates = if req.changed.is_empty() {
        state.subscriptions.render_all(&state.context, &selection)
    } else {
        state
            .subscriptions
            .notify(&state.context, &selection, &req.changed)
    };
    Json(UpdateResponse { updates })
}

/// Query of `GET /api/charts/:id`; missing values fall back to the page
/// defaults.
#[derive(Debug, Deserialize)]
struct ChartQuery {
    site: Option<String>,
    low: Option<f64>,
    high: Option<f64>,
}

async fn chart_handler(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Query(query): Query<ChartQuery>,
) -> Result<Json<ChartUpdate>, DashError> {
    let defaults = SelectionState::initial(&state.context);
    let selection = SelectionState {
        site: query.site.map(SiteSelection::from).unwrap_or(defaults.site),
        payload: PayloadRange::new(
            query.low.unwrap_or(defaults.payload.low),
            query.high.unwrap_or(defaults.payload.high),
        )
        .normalized(),
    };
    let update = state
        .subscriptions
        .render_one(&id, &state.context, &selection)?;
    Ok(Json(update))
}
