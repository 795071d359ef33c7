//! HTTP API: read endpoints for page renderers, admin endpoints for the editor

use anyhow::Result;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::content::{FieldMap, PoemInput};
use crate::error::ContentError;
use crate::Folio;

type SharedFolio = Arc<Folio>;

/// Failure of a request, rendered as `{"error": "..."}`
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error("{0}")]
    BadRequest(String),

    #[error("Invalid request body: {0}")]
    Body(#[from] JsonRejection),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Content(ContentError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Content(ContentError::Validation(_))
            | ApiError::BadRequest(_)
            | ApiError::Body(_) => StatusCode::BAD_REQUEST,
            ApiError::Content(_) | ApiError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected: {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Deserialize)]
struct SlugQuery {
    slug: Option<String>,
}

impl SlugQuery {
    fn required(self) -> ApiResult<String> {
        self.slug
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| ApiError::BadRequest("Slug is required".to_string()))
    }
}

/// Build the router for a site
pub fn router(folio: Folio) -> Router {
    Router::new()
        .route("/api/poems", get(list_poems))
        .route("/api/poems/:slug", get(get_poem))
        .route("/api/slugs", get(list_slugs))
        .route("/api/about", get(get_about))
        .route("/api/homepage", get(get_homepage))
        .route("/api/settings", get(get_settings))
        .route(
            "/api/admin/poems",
            get(list_poems)
                .post(create_poem)
                .put(update_poem)
                .delete(delete_poem),
        )
        .route("/api/admin/about", get(get_about).post(save_about))
        .route("/api/admin/home", get(get_homepage).post(save_homepage))
        .route("/api/admin/settings", get(get_settings).post(save_settings))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(folio))
}

/// Start the API server
pub async fn start(folio: Folio, ip: &str, port: u16) -> Result<()> {
    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let listener = TcpListener::bind(addr).await?;
    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    serve(listener, folio).await
}

/// Serve the API on an already bound listener
pub async fn serve(listener: TcpListener, folio: Folio) -> Result<()> {
    axum::serve(listener, router(folio)).await?;
    Ok(())
}

/// Run filesystem work off the async runtime
async fn blocking<T, F>(folio: &SharedFolio, f: F) -> ApiResult<T>
where
    F: FnOnce(&Folio) -> crate::error::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let folio = Arc::clone(folio);
    Ok(tokio::task::spawn_blocking(move || f(&folio)).await??)
}

async fn list_poems(
    State(folio): State<SharedFolio>,
    Query(query): Query<SlugQuery>,
) -> ApiResult<Response> {
    match query.slug {
        Some(slug) => {
            let poem = blocking(&folio, move |f| f.reader().get_poem(&slug)).await?;
            Ok(Json(poem).into_response())
        }
        None => {
            let poems = blocking(&folio, |f| f.reader().list_poems()).await?;
            Ok(Json(poems).into_response())
        }
    }
}

async fn get_poem(
    State(folio): State<SharedFolio>,
    Path(slug): Path<String>,
) -> ApiResult<Response> {
    let poem = blocking(&folio, move |f| f.reader().get_poem(&slug)).await?;
    Ok(Json(poem).into_response())
}

async fn list_slugs(State(folio): State<SharedFolio>) -> ApiResult<Response> {
    let slugs = blocking(&folio, |f| f.reader().list_slugs()).await?;
    Ok(Json(slugs).into_response())
}

async fn get_about(State(folio): State<SharedFolio>) -> ApiResult<Response> {
    let about = blocking(&folio, |f| f.reader().get_about()).await?;
    Ok(Json(about).into_response())
}

async fn get_homepage(State(folio): State<SharedFolio>) -> ApiResult<Response> {
    let homepage = blocking(&folio, |f| f.reader().get_homepage()).await?;
    Ok(Json(homepage).into_response())
}

async fn get_settings(State(folio): State<SharedFolio>) -> ApiResult<Response> {
    let settings = blocking(&folio, |f| f.reader().get_settings()).await?;
    Ok(Json(settings).into_response())
}

async fn create_poem(
    State(folio): State<SharedFolio>,
    body: std::result::Result<Json<PoemInput>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(input) = body?;
    let slug = blocking(&folio, move |f| f.writer().create_poem(&input)).await?;
    Ok(Json(json!({ "success": true, "slug": slug })).into_response())
}

async fn update_poem(
    State(folio): State<SharedFolio>,
    body: std::result::Result<Json<PoemInput>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(input) = body?;
    let slug = SlugQuery {
        slug: input.slug.clone(),
    }
    .required()?;
    blocking(&folio, move |f| f.writer().update_poem(&slug, &input)).await?;
    Ok(success())
}

async fn delete_poem(
    State(folio): State<SharedFolio>,
    Query(query): Query<SlugQuery>,
) -> ApiResult<Response> {
    let slug = query.required()?;
    blocking(&folio, move |f| f.writer().delete_poem(&slug)).await?;
    Ok(success())
}

async fn save_about(
    State(folio): State<SharedFolio>,
    body: std::result::Result<Json<FieldMap>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(fields) = body?;
    blocking(&folio, move |f| f.writer().save_about(fields)).await?;
    Ok(success())
}

async fn save_homepage(
    State(folio): State<SharedFolio>,
    body: std::result::Result<Json<FieldMap>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(fields) = body?;
    blocking(&folio, move |f| f.writer().save_homepage(fields)).await?;
    Ok(success())
}

async fn save_settings(
    State(folio): State<SharedFolio>,
    body: std::result::Result<Json<FieldMap>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(fields) = body?;
    blocking(&folio, move |f| f.writer().save_settings(fields)).await?;
    Ok(success())
}

fn success() -> Response {
    Json(json!({ "success": true })).into_response()
}
