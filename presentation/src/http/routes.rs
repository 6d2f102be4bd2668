//! warp routes for the HTTP API
//!
//! - `POST /api/router` with `action` in the body or the query string
//!   (the query wins when both are present)
//! - `GET /health`

use super::dto::{
    ActionQuery, ErrorResponseDto, FactCheckResponseDto, GenerateResponseDto, HealthDto,
    RouterRequestBody,
};
use super::error::ApiError;
use std::convert::Infallible;
use std::sync::Arc;
use tracing::{debug, info, warn};
use verdict_application::{ProviderGateway, RouterUseCase};
use warp::Filter;
use warp::http::StatusCode;
use warp::hyper::body::Bytes;
use warp::reply::{Reply, Response};

/// Request bodies larger than this are rejected with 413
pub const MAX_BODY_BYTES: u64 = 64 * 1024;

/// Which router operation a request asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterAction {
    Generate,
    GenerateWithFactCheck,
}

impl std::str::FromStr for RouterAction {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "generate" => Ok(RouterAction::Generate),
            "generate-with-fact-check" => Ok(RouterAction::GenerateWithFactCheck),
            other => Err(ApiError::UnknownAction(other.to_string())),
        }
    }
}

/// All API routes, with rejections turned into JSON errors
pub fn routes<G: ProviderGateway + 'static>(
    router: Arc<RouterUseCase<G>>,
) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    let with_router = warp::any().map(move || Arc::clone(&router));

    let router_route = warp::path!("api" / "router")
        .and(warp::post())
        .and(warp::query::<ActionQuery>())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::bytes())
        .and(with_router)
        .and_then(handle_router);

    let health_route = warp::path!("health")
        .and(warp::get())
        .map(|| warp::reply::json(&HealthDto::ok()));

    router_route.or(health_route).recover(handle_rejection)
}

async fn handle_router<G: ProviderGateway + 'static>(
    query: ActionQuery,
    body: Bytes,
    router: Arc<RouterUseCase<G>>,
) -> Result<Response, Infallible> {
    match dispatch(query, &body, &router).await {
        Ok(response) => Ok(response),
        Err(e) => {
            warn!("Request failed ({}): {}", e.status(), e);
            Ok(e.into_response())
        }
    }
}

async fn dispatch<G: ProviderGateway + 'static>(
    query: ActionQuery,
    body: &[u8],
    router: &RouterUseCase<G>,
) -> Result<Response, ApiError> {
    let body: RouterRequestBody =
        serde_json::from_slice(body).map_err(|e| ApiError::InvalidBody(e.to_string()))?;

    let action: RouterAction = query
        .action
        .or_else(|| body.action.clone())
        .ok_or(ApiError::MissingAction)?
        .parse()?;

    info!("POST /api/router action={:?}", action);

    let reply = match action {
        RouterAction::Generate => {
            let response = router.generate(body.to_input()).await?;
            warp::reply::json(&GenerateResponseDto::from(&response))
        }
        RouterAction::GenerateWithFactCheck => {
            let response = router.generate_with_fact_check(body.to_input()).await?;
            warp::reply::json(&FactCheckResponseDto::from(&response))
        }
    };

    Ok(warp::reply::with_status(reply, StatusCode::OK).into_response())
}

async fn handle_rejection(rejection: warp::Rejection) -> Result<Response, Infallible> {
    let (status, message) = if rejection.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found".to_string())
    } else if rejection.find::<warp::reject::PayloadTooLarge>().is_some() {
        (
            StatusCode::PAYLOAD_TOO_LARGE,
            format!("Request body exceeds {} bytes", MAX_BODY_BYTES),
        )
    } else if rejection.find::<warp::reject::LengthRequired>().is_some() {
        (
            StatusCode::LENGTH_REQUIRED,
            "Content-Length header is required".to_string(),
        )
    } else if rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".to_string())
    } else {
        debug!("Unhandled rejection: {:?}", rejection);
        (StatusCode::BAD_REQUEST, "Bad request".to_string())
    };

    Ok(warp::reply::with_status(warp::reply::json(&ErrorResponseDto::new(message)), status)
        .into_response())
}
