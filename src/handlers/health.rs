//! Health check endpoint handler.

use crate::{
    models::HealthResponse,
    utils::clock::{Clock, SystemClock},
};
use actix_web::{Error, Result, web};
use paperclip::actix::api_v2_operation;

/// Health check endpoint
///
/// Returns the current health status of the API. This endpoint is
/// unauthenticated so load balancers, monitoring systems, and health check
/// probes can reach it without credentials.
#[api_v2_operation(
    summary = "Health Check Endpoint",
    description = "Returns the current health status of the API in JSON format.",
    tags("Health"),
    responses(
        (status = 200, description = "Successful response", body = HealthResponse)
    )
)]
pub async fn health() -> Result<web::Json<HealthResponse>, Error> {
    let response = HealthResponse {
        status: "ok".to_string(),
        timestamp: SystemClock.unix_now(),
    };

    Ok(web::Json(response))
}
