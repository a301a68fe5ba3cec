use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use serde::Deserialize;
use tokio::sync::oneshot;
use warp::http::StatusCode;
use warp::reply::Response;
use warp::{Filter, Rejection, Reply};
use crate::config::config_manager::ConfigManager;
use crate::config::constants::{sleep_duration_millis, CAUSE_ENTITY, SERVER_SHUTDOWN_GRACE_PERIOD_MS};
use crate::errors::{ArcaError, ArcaResult};
use crate::services::cause_renderer::CauseRenderer;
use crate::services::cause_service::CauseService;
use crate::services::email_service::EmailService;
use crate::structs::api_response::ApiResponse;
use crate::structs::cause::Cause;
use crate::structs::cause_record::CauseRecord;
use crate::structs::config::config::Config;
use crate::ui::document::Document;

/// Everything a request handler may touch.
pub struct AppState {
    pub service: Arc<CauseService>,
    pub email: EmailService,
    pub config: Config,
}

#[derive(Debug, Deserialize)]
struct SendQuery {
    #[serde(default)]
    wait: bool,
}

pub struct ApiServer {
    state: Arc<AppState>,
    address: Option<SocketAddr>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl ApiServer {
    pub fn new(state: AppState) -> Self {
        Self {
            state: Arc::new(state),
            address: None,
            shutdown_tx: None,
        }
    }

    pub fn address(&self) -> Option<SocketAddr> {
        self.address
    }

    /// Binds `addr` (port 0 picks a free port) and serves in the background.
    pub async fn start(&mut self, addr: SocketAddr) -> ArcaResult<SocketAddr> {
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let (bound, server) = warp::serve(routes(Arc::clone(&self.state)))
            .try_bind_with_graceful_shutdown(addr, async {
                shutdown_rx.await.ok();
            })
            .map_err(|e| ArcaError::system_error("bind API server", &e.to_string()))?;

        tokio::spawn(server);
        self.shutdown_tx = Some(shutdown_tx);
        self.address = Some(bound);

        log::info!("🌐 Cause API listening on http://{}", bound);
        Ok(bound)
    }

    pub async fn shutdown(&mut self) -> ArcaResult<()> {
        log::info!("🛑 Shutting down cause API...");

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            shutdown_tx.send(()).map_err(|_|
                ArcaError::system_error("shutdown", "Failed to send shutdown signal")
            )?;
        }

        tokio::time::sleep(sleep_duration_millis(SERVER_SHUTDOWN_GRACE_PERIOD_MS)).await;
        self.address = None;
        log::info!("✅ Cause API shutdown complete");

        Ok(())
    }
}

pub fn routes(state: Arc<AppState>) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    let state_filter = warp::any().map(move || Arc::clone(&state));

    let list_causes = warp::path!("api" / "causes")
        .and(warp::get())
        .and(state_filter.clone())
        .and_then(list_causes_handler);

    let get_cause = warp::path!("api" / "causes" / u64)
        .and(warp::get())
        .and(state_filter.clone())
        .and_then(get_cause_handler);

    let create_cause = warp::path!("api" / "causes")
        .and(warp::post())
        .and(warp::body::json())
        .and(state_filter.clone())
        .and_then(create_cause_handler);

    let update_cause = warp::path!("api" / "causes" / u64)
        .and(warp::put())
        .and(warp::body::json())
        .and(state_filter.clone())
        .and_then(update_cause_handler);

    let delete_cause = warp::path!("api" / "causes" / u64)
        .and(warp::delete())
        .and(state_filter.clone())
        .and_then(delete_cause_handler);

    let send_cause = warp::path!("api" / "causes" / u64 / "send")
        .and(warp::post())
        .and(warp::query::<SendQuery>())
        .and(state_filter.clone())
        .and_then(send_cause_handler);

    let metrics = warp::path!("api" / "metrics")
        .and(warp::get())
        .and(state_filter.clone())
        .and_then(metrics_handler);

    let index_page = warp::path::end()
        .and(warp::get())
        .and(state_filter.clone())
        .and_then(index_page_handler);

    let view_page = warp::path!("views" / String)
        .and(warp::get())
        .and(state_filter)
        .and_then(view_page_handler);

    list_causes
        .or(get_cause)
        .or(create_cause)
        .or(update_cause)
        .or(delete_cause)
        .or(send_cause)
        .or(metrics)
        .or(index_page)
        .or(view_page)
        .with(warp::cors()
            .allow_any_origin()
            .allow_headers(vec!["content-type"])
            .allow_methods(vec!["GET", "POST", "PUT", "DELETE"]))
        .recover(handle_rejection)
}

fn error_reply(error: &ArcaError) -> Response {
    let status = StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status == StatusCode::NOT_FOUND {
        return warp::reply::with_status(warp::reply(), status).into_response();
    }

    warp::reply::with_status(
        warp::reply::json(&ApiResponse::<()>::failure(&error.user_message())),
        status,
    ).into_response()
}

async fn list_causes_handler(state: Arc<AppState>) -> Result<Response, Rejection> {
    Ok(warp::reply::json(&state.service.find_all()).into_response())
}

async fn get_cause_handler(id: u64, state: Arc<AppState>) -> Result<Response, Rejection> {
    match state.service.find_one(id) {
        Some(cause) => Ok(warp::reply::json(&cause).into_response()),
        None => Ok(warp::reply::with_status(warp::reply(), StatusCode::NOT_FOUND).into_response()),
    }
}

async fn create_cause_handler(cause: Cause, state: Arc<AppState>) -> Result<Response, Rejection> {
    match state.service.create(cause) {
        Ok(saved) => Ok(warp::reply::with_status(warp::reply::json(&saved), StatusCode::CREATED).into_response()),
        Err(e) => Ok(error_reply(&e)),
    }
}

async fn update_cause_handler(id: u64, cause: Cause, state: Arc<AppState>) -> Result<Response, Rejection> {
    match state.service.update(id, cause) {
        Ok(updated) => Ok(warp::reply::json(&updated).into_response()),
        Err(e) => Ok(error_reply(&e)),
    }
}

async fn delete_cause_handler(id: u64, state: Arc<AppState>) -> Result<Response, Rejection> {
    match state.service.delete(id) {
        Ok(()) => Ok(warp::reply::with_status(warp::reply(), StatusCode::NO_CONTENT).into_response()),
        Err(e) => Ok(error_reply(&e)),
    }
}

async fn send_cause_handler(id: u64, query: SendQuery, state: Arc<AppState>) -> Result<Response, Rejection> {
    let cause = match state.service.find_one(id) {
        Some(cause) => cause,
        None => return Ok(error_reply(&ArcaError::not_found(CAUSE_ENTITY, id))),
    };

    if query.wait {
        let outcome = match state.email.send_async_with_result(cause.clone()).await {
            Ok(result) => result,
            Err(join_error) => Err(ArcaError::system_error("send cause", &join_error.to_string())),
        };
        match outcome {
            Ok(receipt) => log::info!("📬 Cause {} email delivered: {}", id, receipt.delivered),
            Err(e) => {
                log::error!("❌ A problem occurred sending cause {}: {}", id, e);
                return Ok(error_reply(&ArcaError::system_error("send cause", &e.to_string())));
            }
        }
    } else {
        state.email.send_async(cause.clone());
    }

    Ok(warp::reply::json(&cause).into_response())
}

async fn metrics_handler(state: Arc<AppState>) -> Result<Response, Rejection> {
    Ok(warp::reply::json(&state.service.invocations()).into_response())
}

fn render_page(state: &AppState, view_name: &str) -> ArcaResult<String> {
    let per_record = state.config.render.per_record.then_some(true);
    let view = ConfigManager::resolve_view(&state.config, view_name, per_record)?;
    let records: Vec<CauseRecord> = state.service.find_all().iter().map(CauseRecord::from).collect();

    let mut document = Document::for_view(&view);
    CauseRenderer::render(&records, &view, &mut document);
    Ok(document.to_html(&state.config.render.title))
}

async fn index_page_handler(state: Arc<AppState>) -> Result<Response, Rejection> {
    let default_view = state.config.render.default_view.clone();
    match render_page(&state, &default_view) {
        Ok(html) => Ok(warp::reply::html(html).into_response()),
        Err(e) => Ok(error_reply(&ArcaError::system_error("render index page", &e.to_string()))),
    }
}

async fn view_page_handler(name: String, state: Arc<AppState>) -> Result<Response, Rejection> {
    match render_page(&state, &name) {
        Ok(html) => Ok(warp::reply::html(html).into_response()),
        Err(_) => Ok(warp::reply::with_status(warp::reply(), StatusCode::NOT_FOUND).into_response()),
    }
}

async fn handle_rejection(rejection: Rejection) -> Result<Response, Infallible> {
    if rejection.is_not_found() {
        return Ok(warp::reply::with_status(warp::reply(), StatusCode::NOT_FOUND).into_response());
    }

    let (status, message) = if let Some(e) = rejection.find::<warp::filters::body::BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, format!("Invalid cause payload: {}", e))
    } else if rejection.find::<warp::reject::InvalidQuery>().is_some() {
        (StatusCode::BAD_REQUEST, "Invalid query string".to_string())
    } else if rejection.find::<warp::reject::UnsupportedMediaType>().is_some() {
        (StatusCode::UNSUPPORTED_MEDIA_TYPE, "Expected application/json".to_string())
    } else if rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".to_string())
    } else {
        log::error!("❌ Unhandled rejection: {:?}", rejection);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
    };

    Ok(warp::reply::with_status(warp::reply::json(&ApiResponse::<()>::failure(&message)), status).into_response())
}
