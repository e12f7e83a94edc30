//! Prometheus request metrics exposed at `/metrics`.

use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};

/// Namespace prefixed to every exported metric.
const METRICS_NAMESPACE: &str = "cars";

/// Build the request metrics middleware and its scrape endpoint.
///
/// # Errors
/// Returns [`std::io::Error`] when the collectors cannot be registered.
pub(crate) fn build_metrics() -> std::io::Result<PrometheusMetrics> {
    PrometheusMetricsBuilder::new(METRICS_NAMESPACE)
        .endpoint("/metrics")
        .build()
        .map_err(|err| std::io::Error::other(format!("metrics registration failed: {err}")))
}

#[cfg(all(test, feature = "metrics"))]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test, web};
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[actix_web::test]
    async fn scrape_endpoint_reports_served_requests() {
        let metrics = build_metrics().expect("collectors register");
        let app = test::init_service(
            App::new()
                .wrap(metrics)
                .route("/", web::get().to(|| async { HttpResponse::Ok().body("hello") })),
        )
        .await;

        let body = test::call_and_read_body(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(body, "hello".as_bytes());

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/metrics").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        let scrape = test::read_body(res).await;
        let scrape = String::from_utf8_lossy(&scrape);
        assert!(
            scrape.contains("cars_http_requests_total"),
            "unexpected scrape: {scrape}"
        );
    }
}
