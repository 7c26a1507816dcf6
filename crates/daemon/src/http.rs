use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, Request, State},
    http::{
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, LINK},
        HeaderName, Method,
    },
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use task_core::{
    api::{CreateTaskRequest, CreateTaskResponse, Envelope},
    model::Task,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::error::ApiError;
use crate::service::TaskService;

#[derive(Clone)]
pub struct AppState {
    svc: Arc<TaskService>,
    api_token: Option<Arc<str>>,
}

pub fn router(svc: Arc<TaskService>, api_token: Option<String>) -> Router {
    let state = AppState {
        svc,
        api_token: api_token.map(Arc::from),
    };

    let v1 = Router::new()
        .route("/create_task", post(create_task))
        .route("/task/{id}", get(get_task))
        .route_layer(middleware::from_fn_with_state(state.clone(), authorize));

    Router::new()
        .route("/healthz", get(healthz))
        .nest("/v1", v1)
        .layer(TraceLayer::new_for_http())
        .layer(cors())
        .with_state(state)
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            ACCEPT,
            AUTHORIZATION,
            CONTENT_TYPE,
            HeaderName::from_static("x-csrf-token"),
            HeaderName::from_static("x-request-id"),
        ])
        .expose_headers([LINK])
        .max_age(Duration::from_secs(300))
}

async fn healthz() -> &'static str {
    "ok"
}

async fn authorize(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if let Some(token) = st.api_token.as_deref() {
        let presented = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "));
        if presented != Some(token) {
            tracing::warn!(path = %req.uri().path(), "unauthorized request");
            return Err(ApiError::Unauthorized);
        }
    }
    Ok(next.run(req).await)
}

async fn create_task(
    State(st): State<AppState>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<Json<Envelope<CreateTaskResponse>>, ApiError> {
    let Json(req) = payload.map_err(|e| {
        tracing::debug!(error = %e, "undecodable create_task body");
        ApiError::BadFormat("invalid request body".into())
    })?;
    let task_id = st.svc.create_task(req).await?;
    Ok(Json(Envelope::success(CreateTaskResponse { task_id })))
}

async fn get_task(
    State(st): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Envelope<Task>>, ApiError> {
    let Path(id) = id.map_err(|_| ApiError::BadFormat("task id must be an integer".into()))?;
    let task = st.svc.get_task(id).await?;
    Ok(Json(Envelope::success(task)))
}
