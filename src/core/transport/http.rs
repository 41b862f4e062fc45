//! HTTP transport implementation.
//!
//! REST endpoints over the resource collection. Every handler sends exactly one
//! response; lookup misses and validation failures return immediately through
//! [`ApiError`].

use axum::{
    Router,
    body::Bytes,
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::Value;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeFile,
    trace::TraceLayer,
};
use tracing::{info, instrument};

use super::response::{ApiError, Lookup, LookupContext, PrettyJson};
use super::{HttpConfig, TransportError, TransportResult};
use crate::core::ApiServer;
use crate::domains::resources::{ResourceError, parse_limit};

const WELCOME_HTML: &str = "<h1>Welcome to an example REST API for teaching and learning.</h1>\
<p>This sample API uses A Tribe Called Quest lyrics.</p>";

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// Query parameters for listing.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<String>,
}

/// Query parameters for searching.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// Query parameters for the random pick.
#[derive(Debug, Deserialize)]
pub struct RandomParams {
    pub format: Option<String>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        self.config.address()
    }

    /// Run the HTTP transport until the listener fails.
    pub async fn run(self, server: ApiServer) -> TransportResult<()> {
        let addr = self.address();
        let app = build_router(server, &self.config);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!("Ready - listening on {}", self.config.description());
        info!("  → API:    /api/resources, /api/resource/{{id}}");
        info!("  → Health: GET /health");
        info!("  → Static: {}", self.config.static_index.display());

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Build the router with every API route, the static fallback and the
/// configured middleware.
pub fn build_router(server: ApiServer, config: &HttpConfig) -> Router {
    let mut app = Router::new()
        .route("/api/", get(welcome))
        .route("/api/resources", get(list_resources).post(create_resource))
        .route("/api/resources/search", get(search_resources))
        .route("/api/resource", post(create_resource))
        .route(
            "/api/resource/random",
            get(random_resource)
                .put(update_non_numeric)
                .delete(delete_non_numeric),
        )
        .route(
            "/api/resource/{id}",
            get(get_resource).put(update_resource).delete(delete_resource),
        )
        .route("/health", get(health_check))
        .with_state(server)
        .fallback_service(ServeFile::new(&config.static_index))
        .layer(TraceLayer::new_for_http());

    if config.enable_compression {
        app = app.layer(CompressionLayer::new());
    }

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

/// Ids in paths are decimal digits only.
fn is_resource_id(id: &str) -> bool {
    !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit())
}

fn checked_id(id: &str, lookup: Lookup) -> Result<&str, ApiError> {
    if is_resource_id(id) {
        Ok(id)
    } else {
        Err(ApiError::new(ResourceError::not_found(id), lookup))
    }
}

/// Parse a request body as JSON. An empty body is an empty object.
fn parse_body(body: &Bytes, lookup: Lookup) -> Result<Value, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Default::default()));
    }
    serde_json::from_slice(body)
        .map_err(|e| ApiError::new(ResourceError::validation_failed(e.to_string()), lookup))
}

/// Welcome page for the API root.
async fn welcome() -> Html<&'static str> {
    Html(WELCOME_HTML)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    PrettyJson(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[instrument(skip(server))]
async fn list_resources(
    State(server): State<ApiServer>,
    Query(params): Query<ListParams>,
) -> Result<Response, ApiError> {
    let limit = parse_limit(params.limit.as_deref());
    let resources = server.resources().list(limit).await.during(Lookup::Fetch)?;
    Ok(PrettyJson(resources).into_response())
}

#[instrument(skip(server))]
async fn search_resources(
    State(server): State<ApiServer>,
    Query(params): Query<SearchParams>,
) -> Result<Response, ApiError> {
    let found = server
        .resources()
        .search(params.q.as_deref())
        .await
        .during(Lookup::Fetch)?;
    Ok(PrettyJson(found).into_response())
}

#[instrument(skip(server))]
async fn get_resource(
    State(server): State<ApiServer>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = checked_id(&id, Lookup::Fetch)?;
    let resource = server.resources().get(id).await.during(Lookup::Fetch)?;
    Ok(PrettyJson(resource).into_response())
}

#[instrument(skip(server))]
async fn random_resource(
    State(server): State<ApiServer>,
    Query(params): Query<RandomParams>,
) -> Result<Response, ApiError> {
    let resource = server.resources().random().await.during(Lookup::Fetch)?;

    if params.format.as_deref() == Some("text") {
        return Ok(resource.text.into_response());
    }
    Ok(PrettyJson(resource).into_response())
}

#[instrument(skip_all)]
async fn create_resource(
    State(server): State<ApiServer>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let body = parse_body(&body, Lookup::Fetch)?;
    let resource = server.resources().create(&body).await.during(Lookup::Fetch)?;
    Ok(PrettyJson(resource).into_response())
}

#[instrument(skip(server, body))]
async fn update_resource(
    State(server): State<ApiServer>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let id = checked_id(&id, Lookup::Update)?;
    let body = match parse_body(&body, Lookup::Update) {
        Ok(body) => body,
        Err(e) => {
            // A missing id wins over a malformed body.
            server.resources().get(id).await.during(Lookup::Update)?;
            return Err(e);
        }
    };
    let resource = server
        .resources()
        .update(id, &body)
        .await
        .during(Lookup::Update)?;
    Ok(PrettyJson(resource).into_response())
}

/// `PUT /api/resource/random`: `random` is not an id.
async fn update_non_numeric() -> ApiError {
    ApiError::new(ResourceError::not_found("random"), Lookup::Update)
}

/// `DELETE /api/resource/random`: `random` is not an id.
async fn delete_non_numeric() -> ApiError {
    ApiError::new(ResourceError::not_found("random"), Lookup::Delete)
}

#[instrument(skip(server))]
async fn delete_resource(
    State(server): State<ApiServer>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = checked_id(&id, Lookup::Delete)?;
    let resource = server.resources().delete(id).await.during(Lookup::Delete)?;
    Ok(PrettyJson(resource).into_response())
}
