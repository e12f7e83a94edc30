//! Health reporting for the car inventory service.
//!
//! `/health` answers with a timestamped status document; `/health/ready` and
//! `/health/live` are bare probes for orchestrators that only look at the
//! status code.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, get, web};
use chrono::SecondsFormat;
use mockable::{Clock, DefaultClock};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Process-wide probe flags and the clock used for status timestamps.
///
/// Starts live but not ready; the server marks it ready once the listener is
/// bound and marks it unhealthy when shutdown begins.
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl Default for HealthState {
    fn default() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl HealthState {
    /// Health state backed by the system clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Health state stamping reports with `clock`.
    pub fn with_clock(clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
            clock,
        }
    }

    /// Start answering readiness probes with 200.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Start failing liveness probes; called when shutdown begins.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Whether the listener is up.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Whether the process is still accepting work.
    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    fn timestamp(&self) -> String {
        self.clock
            .utc()
            .to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Probe answers must never be served from a cache.
fn probe(passing: bool) -> HttpResponse {
    let status = if passing {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    HttpResponse::build(status)
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}

/// Status payload returned by `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    /// Always `ok` while the process answers requests.
    #[schema(example = "ok")]
    pub status: String,
    /// Server time in RFC 3339 format.
    #[schema(format = "date-time", example = "2024-05-01T12:00:00.000Z")]
    pub timestamp: String,
}

/// Report process status with the current server time.
#[utoipa::path(
    get,
    path = "/health",
    tags = ["health"],
    responses(
        (status = 200, description = "Service is up", body = HealthStatus)
    )
)]
#[get("/health")]
pub async fn health(state: web::Data<HealthState>) -> web::Json<HealthStatus> {
    web::Json(HealthStatus {
        status: "ok".to_owned(),
        timestamp: state.timestamp(),
    })
}

/// Readiness probe: 200 once the server is bound, 503 before.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Accepting car requests"),
        (status = 503, description = "Still starting up")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    probe(state.is_ready())
}

/// Liveness probe: 200 until shutdown begins, 503 while draining.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Process is alive"),
        (status = 503, description = "Shutting down")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    probe(state.is_alive())
}
