//! Request-level logging and request IDs.

use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Instant,
};

use salvo::{
    Request, handler,
    http::{StatusCode, header::HeaderValue},
    prelude::{Depot, FlowCtrl, Response},
};
use tracing::{Instrument as _, error, info, warn};
use uuid::Uuid;

pub(crate) const REQUEST_ID_HEADER: &str = "x-request-id";

const REQUEST_ID_DEPOT_KEY: &str = "request_id";

static SLOW_REQUEST_THRESHOLD_MS: AtomicU64 = AtomicU64::new(1_000);

pub(crate) fn set_slow_request_threshold_ms(threshold_ms: u64) {
    SLOW_REQUEST_THRESHOLD_MS.store(threshold_ms, Ordering::Relaxed);
}

#[handler]
pub(crate) async fn request_logging(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let started = Instant::now();

    let request_id = resolve_request_id(req.header::<String>(REQUEST_ID_HEADER));

    depot.insert(REQUEST_ID_DEPOT_KEY, request_id.clone());

    set_request_id_header(res, &request_id);

    let method = req.method().to_string();
    let path = req.uri().path().to_owned();

    let span = tracing::info_span!(
        "http.request",
        request_id = %request_id,
        method = %method,
        path = %path,
        status = tracing::field::Empty,
        duration_ms = tracing::field::Empty
    );

    ctrl.call_next(req, depot, res)
        .instrument(span.clone())
        .await;

    let status = res.status_code.unwrap_or(StatusCode::OK);
    let duration_ms = started.elapsed().as_millis();
    let threshold_ms = u128::from(SLOW_REQUEST_THRESHOLD_MS.load(Ordering::Relaxed));

    span.record("status", status.as_u16());
    span.record("duration_ms", duration_ms);

    span.in_scope(|| {
        info!(status = status.as_u16(), duration_ms, "request.completed");

        if status.is_server_error() {
            error!(status = status.as_u16(), "server error response");
        } else if status.is_client_error() {
            warn!(status = status.as_u16(), "client error response");
        }

        if duration_ms > threshold_ms {
            warn!(duration_ms, threshold_ms, "slow request detected");
        }
    });
}

fn resolve_request_id(header_value: Option<String>) -> String {
    header_value
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| Uuid::now_v7().to_string())
}

fn set_request_id_header(res: &mut Response, request_id: &str) {
    match HeaderValue::from_str(request_id) {
        Ok(value) => {
            res.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        Err(source) => {
            warn!(
                request_id,
                "could not encode request id for response header: {source}"
            );
        }
    }
}
