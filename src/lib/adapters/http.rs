use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use serde_json::{Value, json};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::core::{Todo, TodoDraft, TodoError, TodoPatch, TodoStore};

#[derive(Clone, Default)]
pub struct HttpConfig {
    /// Reject POST /todos bodies without a non-blank `name`.
    pub require_name: bool,
}

pub struct HttpServer {
    store: Arc<TodoStore>,
}

impl HttpServer {
    pub fn new(config: HttpConfig) -> Self {
        Self {
            store: Arc::new(TodoStore::new(config.require_name)),
        }
    }

    pub fn router(&self) -> Router {
        let trace_layer =
            TraceLayer::new_for_http().make_span_with(|request: &axum::extract::Request<_>| {
                let uri = request.uri().to_string();
                tracing::info_span!("http_request", method = ?request.method(), uri)
            });

        api_routes()
            .layer(trace_layer)
            .layer(CorsLayer::permissive())
            .with_state(self.store.clone())
    }

    pub async fn serve(&self, addr: &str) -> Result<(), TodoError> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!(addr = %addr, "todo API server started");
        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}

fn api_routes() -> Router<Arc<TodoStore>> {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todo/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
}

#[derive(Deserialize)]
struct TodoPathParams {
    id: u64,
}

/// Domain failures keep the 200 path and surface as `{"error": ...}`
/// bodies, matching the wire contract of the service this replaces.
struct ApiError(TodoError);

impl From<TodoError> for ApiError {
    fn from(err: TodoError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        Json(json!({ "error": self.0.to_string() })).into_response()
    }
}

async fn list_todos(State(store): State<Arc<TodoStore>>) -> Json<Vec<Todo>> {
    Json(store.list().await)
}

async fn create_todo(
    State(store): State<Arc<TodoStore>>,
    Json(draft): Json<TodoDraft>,
) -> Result<Json<Todo>, ApiError> {
    Ok(Json(store.create(draft).await?))
}

async fn get_todo(
    State(store): State<Arc<TodoStore>>,
    Path(params): Path<TodoPathParams>,
) -> Result<Json<Todo>, ApiError> {
    Ok(Json(store.get(params.id).await?))
}

async fn update_todo(
    State(store): State<Arc<TodoStore>>,
    Path(params): Path<TodoPathParams>,
    Json(patch): Json<TodoPatch>,
) -> Result<Json<Todo>, ApiError> {
    Ok(Json(store.update(params.id, patch).await?))
}

async fn delete_todo(
    State(store): State<Arc<TodoStore>>,
    Path(params): Path<TodoPathParams>,
) -> Result<Json<Value>, ApiError> {
    let id = store.delete(params.id).await?;
    Ok(Json(json!({ "success": format!("Deleted todo with id {id}") })))
}
