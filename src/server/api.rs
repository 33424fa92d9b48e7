//! REST API implementation using rouille.
//!
//! Routing is a pure function of method and path, and every endpoint is
//! answered by [`dispatch`] as a status plus a JSON body, so handlers are
//! testable without binding a socket. The rouille worker threads drive the
//! async services through the tokio runtime handle.

use crate::api::FigmaService;
use crate::config::ServiceConfig;
use crate::design_system::DesignSystemService;
use crate::error::AppError;
use crate::types::{Fetched, FileKey, NodeIds};
use rouille::{Request, Response};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::runtime::Handle;

/// A recognised endpoint, carrying its path parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    File(String),
    Nodes(String),
    Styles(String),
    Components(String),
    DesignSystem(String),
    DesignTokens(String),
    Health,
    NotFound,
}

impl Route {
    /// Matches a request line; anything unrecognised is [`Route::NotFound`].
    pub fn parse(method: &str, path: &str) -> Route {
        if method != "GET" {
            return Route::NotFound;
        }
        let path = path.strip_suffix('/').unwrap_or(path);

        if path == "/health" {
            return Route::Health;
        }
        if let Some(rest) = path.strip_prefix("/files/") {
            let mut parts = rest.splitn(2, '/');
            let key = parts.next().unwrap_or_default();
            if key.is_empty() {
                return Route::NotFound;
            }
            return match parts.next() {
                None => Route::File(key.to_string()),
                Some("nodes") => Route::Nodes(key.to_string()),
                Some("styles") => Route::Styles(key.to_string()),
                Some("components") => Route::Components(key.to_string()),
                Some(_) => Route::NotFound,
            };
        }
        if let Some(key) = single_segment(path, "/design-system/") {
            return Route::DesignSystem(key.to_string());
        }
        if let Some(key) = single_segment(path, "/design-tokens/") {
            return Route::DesignTokens(key.to_string());
        }
        Route::NotFound
    }
}

fn single_segment<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    path.strip_prefix(prefix)
        .filter(|key| !key.is_empty() && !key.contains('/'))
}

/// Services shared by every request handler.
pub struct AppState {
    pub figma: FigmaService,
    pub design_system: DesignSystemService,
    /// Include error details in generation failure envelopes.
    pub development: bool,
}

/// Status code and JSON body of a handled request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply {
    pub status: u16,
    pub body: Value,
}

impl ApiReply {
    fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: json!({ "error": message }),
        }
    }

    fn from_result<T: serde::Serialize>(result: Result<T, AppError>) -> Self {
        match result.and_then(|data| serde_json::to_value(data).map_err(AppError::from)) {
            Ok(body) => Self::ok(body),
            Err(e) => Self::error(500, &e.to_string()),
        }
    }
}

/// Answers one routed request.
///
/// `ids` is the raw `ids` query parameter, only read by the nodes endpoint.
pub async fn dispatch(state: &AppState, route: Route, ids: Option<&str>) -> ApiReply {
    match route {
        Route::File(key) => ApiReply::from_result(state.figma.file(&key).await),
        Route::Nodes(key) => {
            let node_ids = NodeIds::split_query(ids);
            ApiReply::from_result(state.figma.nodes(&key, &node_ids).await)
        }
        Route::Styles(key) => ApiReply::from_result(
            state
                .figma
                .styles(&key)
                .await
                .map(Fetched::into_data_or_default),
        ),
        Route::Components(key) => ApiReply::from_result(
            state
                .figma
                .components(&key)
                .await
                .map(Fetched::into_data_or_default),
        ),
        Route::DesignSystem(key) => generate_design_system(state, &key).await,
        Route::DesignTokens(key) => design_tokens(state, &key),
        Route::Health => ApiReply::ok(json!({ "status": "ok" })),
        Route::NotFound => ApiReply::error(404, "Not found"),
    }
}

async fn generate_design_system(state: &AppState, key: &str) -> ApiReply {
    let labels = state.design_system.locale().labels();
    match state.design_system.generate(key).await {
        Ok(result) => ApiReply::ok(json!({
            "success": true,
            "message": labels.generated,
            "outputDir": result.output_dir,
            "fileKey": result.file_key,
            "stats": result.stats,
        })),
        Err(e) => {
            log::error!("Error generating design system documentation: {}", e);
            ApiReply {
                status: 500,
                body: failure_envelope(labels.generation_failed, &e, state.development),
            }
        }
    }
}

fn design_tokens(state: &AppState, key: &str) -> ApiReply {
    let labels = state.design_system.locale().labels();
    match FileKey::parse(key) {
        Ok(key) => ApiReply::ok(json!({
            "success": true,
            "message": labels.tokens_stub,
            "fileKey": key.as_str(),
        })),
        Err(e) => {
            let e = AppError::from(e);
            log::error!("Error generating design tokens: {}", e);
            ApiReply {
                status: 500,
                body: failure_envelope(labels.tokens_failed, &e, state.development),
            }
        }
    }
}

fn failure_envelope(message: &str, error: &AppError, development: bool) -> Value {
    let mut body = json!({ "success": false, "error": message });
    if development {
        body["details"] = Value::String(error.to_string());
    }
    body
}

/// HTTP server over [`AppState`].
pub struct ApiServer {
    port: u16,
    state: Arc<AppState>,
}

impl ApiServer {
    pub fn new(config: &ServiceConfig, state: Arc<AppState>) -> Self {
        Self {
            port: config.port,
            state,
        }
    }

    /// Binds the port and serves requests until the process exits.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn run(self) -> Result<(), AppError> {
        let addr = format!("0.0.0.0:{}", self.port);
        let runtime = Handle::current();
        let state = self.state;

        tokio::task::spawn_blocking(move || {
            let server = rouille::Server::new(addr.as_str(), move |request| {
                Self::handle_request(request, &state, &runtime)
            })
            .map_err(|e| AppError::Server(format!("Failed to bind {}: {}", addr, e)))?;

            log::info!("Server is running on port {}", server.server_addr().port());
            println!("Server is running on http://{}", server.server_addr());
            server.run();
            Ok::<(), AppError>(())
        })
        .await?
    }

    fn handle_request(request: &Request, state: &AppState, runtime: &Handle) -> Response {
        let route = Route::parse(request.method(), &request.url());
        log::info!("{} {} -> {:?}", request.method(), request.raw_url(), route);

        let ids = request.get_param("ids");
        let reply = runtime.block_on(dispatch(state, route, ids.as_deref()));

        if reply.status >= 500 {
            log::warn!("{} {} failed with {}", request.method(), request.raw_url(), reply.status);
        }
        Response::json(&reply.body).with_status_code(reply.status)
    }
}
